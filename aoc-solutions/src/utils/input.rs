//! Line-oriented input parsing

use anyhow::anyhow;
use aoc_solver::ParseError;

/// Parse every non-empty line of `input` with `parse_line`
///
/// The first failure is reported as [`ParseError::InvalidFormat`] carrying
/// the 1-based line number.
///
/// ```
/// use aoc_solutions::utils::input::parse_lines;
///
/// let numbers: Vec<i32> = parse_lines("1\n\n-2\n", |line| Ok(line.parse()?)).unwrap();
/// assert_eq!(numbers, vec![1, -2]);
///
/// let err = parse_lines::<i32, _>("1\nx", |line| Ok(line.parse()?)).unwrap_err();
/// assert!(err.to_string().contains("(line 2)"));
/// ```
pub fn parse_lines<T, F>(input: &str, mut parse_line: F) -> Result<Vec<T>, ParseError>
where
    F: FnMut(&str) -> anyhow::Result<T>,
{
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(line_idx, line)| {
            parse_line(line.trim_end()).map_err(|e| anyhow!("(line {}) {:#}", line_idx + 1, e))
        })
        .collect::<anyhow::Result<Vec<T>>>()
        .map_err(|e| ParseError::InvalidFormat(e.to_string()))
}
