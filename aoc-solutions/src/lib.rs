//! Advent of Code puzzle solutions and the helpers they share
//!
//! Every puzzle is listed in [`registry`] under its day number. Day 0 is
//! the [`puzzles::template::Template`] that new days are copied from; the
//! runner never includes it when solving all puzzles.
//!
//! The [`utils::grid`] module holds the lattice geometry most puzzles
//! build on: points and directions, bounded boxes, polygon containment
//! and A* shortest paths.

pub mod puzzles;
pub mod utils;

use aoc_solver::{RegistrationError, RegistryBuilder, SolverRegistry, TEMPLATE_ID};

/// Build the registry of every puzzle in this crate
///
/// Add a `.register::<Day>(id)?` line here for each new puzzle.
pub fn registry() -> Result<SolverRegistry, RegistrationError> {
    Ok(RegistryBuilder::new()
        .register::<puzzles::template::Template>(TEMPLATE_ID)?
        .build())
}
