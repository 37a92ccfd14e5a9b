//! Advent of Code Solver Library
//!
//! The puzzle harness behind the solutions collection. Each puzzle is a
//! solver with its own input parsing, producing an answer for each of its
//! parts.
//!
//! # Overview
//!
//! This library provides:
//! - A trait-based interface for defining solvers ([`AocParser`], [`PartSolver`], [`Solver`])
//! - `#[derive(AocSolver)]` to dispatch part numbers to `PartSolver<N>` impls
//! - Computed and hard-coded [`Answer`]s
//! - Solver instances with parse and solve timing
//! - Falling back to an earlier part when a later one is not implemented yet
//! - An explicit registry mapping puzzle ids to solver factories
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{
//!     Answer, AocParser, AocSolver, DynSolver, ParseError, PartSolver, RegistryBuilder, SolveError,
//! };
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! pub struct Day1;
//!
//! impl AocParser for Day1 {
//!     type SharedData<'a> = Vec<i32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input.lines()
//!             .map(|line| line.parse().map_err(|_|
//!                 ParseError::InvalidFormat("Expected integer".to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Day1 {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
//!         Ok(shared.iter().sum::<i32>().into())
//!     }
//! }
//!
//! impl PartSolver<2> for Day1 {
//!     fn solve(_shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
//!         Err(SolveError::PartNotImplemented(2))
//!     }
//! }
//!
//! let registry = RegistryBuilder::new().register::<Day1>(1).unwrap().build();
//!
//! let mut solver = registry.create_solver(1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//!
//! // Part 2 is not implemented yet, so part 1 is solved instead
//! let (part, result) = solver.solve_with_fallback().unwrap();
//! assert_eq!((part, result.answer.as_str()), (1, "6"));
//! ```
//!
//! # Key Concepts
//!
//! ## Solver Trait
//!
//! The [`Solver`] trait is the core interface. Implement it (usually through
//! the derive macro) to define:
//! - How to parse input (`SharedData` type and `parse()` method)
//! - How to solve each part (`PartSolver<N>` impls)
//! - Which parts to skip when every puzzle is run in one batch
//!
//! ## DynSolver Trait
//!
//! The [`DynSolver`] trait provides type erasure for working with different
//! solver types uniformly. Key methods:
//! - `solve(part)`: Computes one part with timing
//! - `solve_with_fallback()`: Computes the highest implemented part
//!
//! ## Alternate Parsing
//!
//! Set `HAS_ALTERNATE_PARSE` and implement `parse_alternate` when part 2
//! reads the input differently. The instance re-parses when switching parts.

mod error;
mod instance;
mod registry;
mod solver;

// Re-export public API
pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    CAPACITY, FactoryInfo, MAX_ID, RegistryBuilder, SolverFactory, SolverRegistry, TEMPLATE_ID,
};
pub use solver::{Answer, AocParser, PartSolver, Solver, SolverExt};

// Re-export the derive macro
pub use aoc_solver_macros::AocSolver;
