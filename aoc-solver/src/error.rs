//! Error types for the solver library

use thiserror::Error;

/// Error type for parsing input data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input format doesn't match expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Required data is missing from input
    #[error("Missing data: {0}")]
    MissingData(String),
    /// Other parsing errors
    #[error("Parse error: {0}")]
    Other(String),
}

/// Error type for solving a specific part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested part has no solution logic yet
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The requested part number is out of range (exceeds the solver's parts)
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// An error occurred while solving the part
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SolveError {
    /// Whether this error only signals a missing implementation
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, SolveError::PartNotImplemented(_))
    }
}

/// Error type for solver operations
#[derive(Debug, Error)]
pub enum SolverError {
    /// No solver registered for the given puzzle id
    #[error("No solver registered for puzzle {0}")]
    NotFound(u8),
    /// Puzzle id is outside the supported range
    #[error("Invalid puzzle id {0}")]
    InvalidPuzzleId(u8),
    /// Error occurred during parsing
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    /// Error occurred during solving
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

impl SolverError {
    /// Whether this error only signals a missing implementation
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, SolverError::SolveError(e) if e.is_not_implemented())
    }
}

/// Error type for registration failures
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// Attempted to register a solver for a puzzle id that already has one
    #[error("Duplicate solver registration for puzzle {0}")]
    DuplicateSolver(u8),
    /// Puzzle id is outside the supported range
    #[error("Invalid puzzle id {0}")]
    InvalidPuzzleId(u8),
    /// A solver must expose at least one part
    #[error("Solver for puzzle {0} declares no parts")]
    NoParts(u8),
}
