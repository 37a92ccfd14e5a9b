//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input file error
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Solver error
    #[error("Solver error: {0}")]
    Solver(#[from] aoc_solver::SolverError),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// The requested puzzle has no solver
    #[error("Puzzle {0} is not registered")]
    UnknownPuzzle(u8),

    /// Nothing besides the template is registered
    #[error("No puzzles registered")]
    NoPuzzles,
}

/// Input-store errors
#[derive(Error, Debug)]
pub enum InputError {
    /// The input file does not exist
    #[error("Missing input for puzzle {id}: expected {}", .path.display())]
    Missing { id: u8, path: PathBuf },

    /// IO error
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
