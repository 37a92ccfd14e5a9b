//! Solver instance implementation

use crate::error::{ParseError, SolverError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Result from solving a puzzle part, including timing information
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The answer string
    pub answer: String,
    /// Reason given when the answer is hard-coded rather than computed
    pub hard_coded: Option<String>,
    /// When solving started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When solving completed (UTC)
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    /// Get the solve duration as TimeDelta
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// Which parser produced the current shared data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseMode {
    Primary,
    Alternate,
}

impl ParseMode {
    fn for_part<S: Solver>(part: u8) -> Self {
        if S::HAS_ALTERNATE_PARSE && part > 1 {
            ParseMode::Alternate
        } else {
            ParseMode::Primary
        }
    }
}

/// A solver instance for a specific puzzle with shared data
///
/// Manages the state for solving one puzzle, including:
/// - The shared data (parsed input and intermediate results)
/// - Parse timing information (start and end timestamps)
///
/// Solvers with an alternate parser are re-parsed when switching between
/// part 1 and the later parts.
pub struct SolverInstance<'a, S: Solver> {
    id: u8,
    input: &'a str,
    shared: S::SharedData<'a>,
    mode: ParseMode,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Create a new solver instance by parsing input
    ///
    /// Records parse timing internally.
    ///
    /// # Arguments
    /// * `id` - The puzzle id (day number)
    /// * `input` - The raw input string to parse
    ///
    /// # Returns
    /// * `Ok(SolverInstance)` - Successfully parsed and created instance with timing
    /// * `Err(ParseError)` - Parsing failed
    pub fn new(id: u8, input: &'a str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let shared = S::parse(input)?;
        let parse_end = Utc::now();

        Ok(Self {
            id,
            input,
            shared,
            mode: ParseMode::Primary,
            parse_start,
            parse_end,
        })
    }

    fn reparse(&mut self, mode: ParseMode) -> Result<(), ParseError> {
        let parse_start = Utc::now();
        self.shared = match mode {
            ParseMode::Primary => S::parse(self.input)?,
            ParseMode::Alternate => S::parse_alternate(self.input)?,
        };
        self.parse_end = Utc::now();
        self.parse_start = parse_start;
        self.mode = mode;
        Ok(())
    }
}

/// Type-erased interface for working with any solver through dynamic dispatch
///
/// This trait provides a uniform interface for interacting with different solver types.
/// The concrete `SolverInstance<S>` implements this trait, allowing the registry to work
/// with different solver types uniformly.
///
/// # Example
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn example(mut solver: Box<dyn DynSolver>) -> Result<(), Box<dyn std::error::Error>> {
///     // Solve part 1
///     let result = solver.solve(1)?;
///     println!("Part 1: {} (took {:?})", result.answer, result.duration());
///
///     // Solve the highest implemented part
///     let (part, result) = solver.solve_with_fallback()?;
///     println!("Part {}: {}", part, result.answer);
///
///     // Access parse timing
///     println!("Parse took {:?}", solver.parse_duration());
///
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve the specified part with timing
    ///
    /// # Returns
    /// * `Ok(SolveResult)` - The part was solved successfully with timing info
    /// * `Err(SolverError)` - The part is not implemented, out of range,
    ///   failed, or re-parsing for the part failed
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolverError>;

    /// Get the parse start time (UTC)
    fn parse_start(&self) -> DateTime<Utc>;

    /// Get the parse end time (UTC)
    fn parse_end(&self) -> DateTime<Utc>;

    /// Get the puzzle id for this solver
    fn id(&self) -> u8;

    /// Get the number of parts this solver supports
    fn parts(&self) -> u8;

    /// Whether the part is left out of batch runs
    fn skips_in_batch(&self, part: u8) -> bool;

    /// Convenience: get parse duration as TimeDelta
    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }

    /// Solve the highest part that is implemented
    ///
    /// Starts at the last part and steps down while a part reports
    /// [`crate::SolveError::PartNotImplemented`]. Returns the part that produced the
    /// answer. If no part is implemented, part 1's error is returned.
    fn solve_with_fallback(&mut self) -> Result<(u8, SolveResult), SolverError> {
        let mut part = self.parts();
        loop {
            match self.solve(part) {
                Err(e) if e.is_not_implemented() && part > 1 => {
                    log::warn!(
                        "Solution to part {} is not implemented yet, solving part {} instead",
                        part,
                        part - 1
                    );
                    part -= 1;
                }
                other => return other.map(|result| (part, result)),
            }
        }
    }
}

impl<'a, S: Solver> DynSolver for SolverInstance<'a, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolverError> {
        let mode = ParseMode::for_part::<S>(part);
        if mode != self.mode {
            self.reparse(mode)?;
        }

        let solve_start = Utc::now();
        let answer = S::solve_part_checked_range(&mut self.shared, part)?;
        let solve_end = Utc::now();

        let (answer, hard_coded) = answer.into_parts();
        Ok(SolveResult {
            answer,
            hard_coded,
            solve_start,
            solve_end,
        })
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }

    fn id(&self) -> u8 {
        self.id
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }

    fn skips_in_batch(&self, part: u8) -> bool {
        S::SKIP_IN_BATCH.contains(&part)
    }
}

