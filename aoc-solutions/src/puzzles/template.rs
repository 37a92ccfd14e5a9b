//! Starting point for a new puzzle: copy this file, rename it and fill in the parts

use anyhow::Context;
use aoc_solver::{Answer, AocParser, AocSolver, ParseError, PartSolver, SolveError};

use crate::utils::input::parse_lines;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Template;

#[derive(Debug)]
pub struct SharedData {
    pub entries: Vec<i64>,
}

impl AocParser for Template {
    type SharedData<'a> = SharedData;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let entries = parse_lines(input, |line| {
            line.trim()
                .parse::<i64>()
                .with_context(|| format!("expected an integer, found {:?}", line))
        })?;
        Ok(SharedData { entries })
    }
}

impl PartSolver<1> for Template {
    fn solve(_shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Err(SolveError::PartNotImplemented(1))
    }
}

impl PartSolver<2> for Template {
    fn solve(_shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Err(SolveError::PartNotImplemented(2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver;

    #[test]
    fn test_parse() {
        let shared = Template::parse("1\n-20\n\n300\n").unwrap();
        assert_eq!(shared.entries, vec![1, -20, 300]);
        assert!(matches!(
            Template::parse("1\nfoo"),
            Err(ParseError::InvalidFormat(msg)) if msg.starts_with("(line 2)")
        ));
    }

    #[test]
    fn test_parts_not_implemented() {
        let mut shared = Template::parse("1").unwrap();
        assert!(matches!(
            Template::solve_part(&mut shared, 1),
            Err(SolveError::PartNotImplemented(1))
        ));
        assert!(matches!(
            Template::solve_part(&mut shared, 2),
            Err(SolveError::PartNotImplemented(2))
        ));
    }
}
