//! Core solver trait and related types

use crate::error::{ParseError, SolveError};

/// The answer produced by a puzzle part
///
/// Most answers are computed. A part may instead return a hard-coded value,
/// e.g. when the real computation is too slow to run in a batch, together
/// with the reason. The runner shows the reason in place of the timing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    value: String,
    hard_coded: Option<String>,
}

impl Answer {
    /// A computed answer
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            hard_coded: None,
        }
    }

    /// A hard-coded answer and the reason it is not computed
    pub fn hard_coded(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            hard_coded: Some(reason.into()),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// The reason given for a hard-coded answer, `None` if computed
    pub fn hard_coded_reason(&self) -> Option<&str> {
        self.hard_coded.as_deref()
    }

    pub fn into_parts(self) -> (String, Option<String>) {
        (self.value, self.hard_coded)
    }
}

impl From<String> for Answer {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

macro_rules! answer_from_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Answer {
                fn from(value: $ty) -> Self {
                    Self::new(value.to_string())
                }
            }
        )*
    };
}

answer_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Trait for parsing AOC puzzle input into shared data
///
/// This trait defines the shared data type and parsing logic for a solver,
/// providing clean separation between parsing and solving concerns.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Day1;
///
/// impl AocParser for Day1 {
///     type SharedData<'a> = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
/// ```
pub trait AocParser {
    /// The shared data structure that holds parsed input and intermediate results.
    ///
    /// Use any ownership strategy:
    /// - `Vec<T>` or custom structs for owned data (simplest, supports mutation)
    /// - `&'a str` for zero-copy borrowed data when no transformation is needed
    type SharedData<'a>;

    /// Whether parts after the first read the input with [`AocParser::parse_alternate`]
    const HAS_ALTERNATE_PARSE: bool = false;

    /// Parse the input string into the shared data structure.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;

    /// Parser used for parts 2 and up when `HAS_ALTERNATE_PARSE` is set.
    fn parse_alternate<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Self::parse(input)
    }
}

/// Trait for solving a specific part of an AOC puzzle.
///
/// The const generic `N` represents the part number (1, 2, etc.).
/// This provides compile-time validation that the part is implemented.
///
/// # Example
///
/// ```
/// use aoc_solver::{Answer, AocParser, PartSolver, ParseError, SolveError};
///
/// struct Day1;
///
/// impl AocParser for Day1 {
///     type SharedData<'a> = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Day1 {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
///         Ok(shared.iter().sum::<i32>().into())
///     }
/// }
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    /// Solve this part of the puzzle.
    ///
    /// # Returns
    /// * `Ok(Answer)` - The answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - No solution logic yet
    /// * `Err(SolveError::SolveFailed)` - An error occurred while solving
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError>;
}

/// Core trait that all puzzle solvers implement.
///
/// Usually generated with `#[derive(AocSolver)]`, which dispatches each part
/// number to the matching [`PartSolver`] impl.
///
/// # Example
///
/// ```
/// use aoc_solver::{Answer, AocParser, ParseError, SolveError, Solver};
///
/// struct Day1Solver;
///
/// impl AocParser for Day1Solver {
///     type SharedData<'a> = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input.lines()
///             .map(|line| line.parse().map_err(|_|
///                 ParseError::InvalidFormat("Expected integer".to_string())))
///             .collect()
///     }
/// }
///
/// impl Solver for Day1Solver {
///     const PARTS: u8 = 2;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<Answer, SolveError> {
///         match part {
///             1 => Ok(shared.iter().sum::<i32>().into()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Parts that are left out when every puzzle is run in one batch
    const SKIP_IN_BATCH: &'static [u8] = &[];

    /// Solve a specific part of the problem
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<Answer, SolveError>;
}

pub trait SolverExt: Solver {
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<Answer, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
