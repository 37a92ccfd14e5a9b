//! Errors raised by the grid and geometry helpers

use aoc_solver::SolveError;

use super::{Direction, Point};

/// Error type for grid operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// Two points are not orthogonal neighbours on the same Z level
    #[error("{from} is not a direct neighbour of {to}")]
    NotANeighbor { from: Point, to: Point },

    /// Only N, E, S and W can be rotated
    #[error("direction {0:?} cannot be rotated")]
    NotRotatable(Direction),

    /// Rotation must be one of 0, 90, 180 or 270 degrees
    #[error("invalid rotation of {0} degrees")]
    InvalidRotation(i32),

    /// The operation is only defined for points on Z = 0
    #[error("{0} is not supported for 3D points")]
    UnsupportedDimension(&'static str),

    /// A polygon needs at least one point
    #[error("polygon has no points")]
    EmptyPolygon,

    /// Rows of a character grid must all have the same width
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl From<GridError> for SolveError {
    fn from(err: GridError) -> Self {
        SolveError::SolveFailed(Box::new(err))
    }
}
