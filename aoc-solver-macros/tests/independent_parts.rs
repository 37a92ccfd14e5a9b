use aoc_solver::{Answer, AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver, SolverExt};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct TestSolver;

impl AocParser for TestSolver {
    type SharedData<'a> = Vec<i32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .map(|line| {
                line.trim()
                    .parse::<i32>()
                    .map_err(|_| ParseError::InvalidFormat("Expected integer".into()))
            })
            .collect()
    }
}

impl PartSolver<1> for TestSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(shared.iter().sum::<i32>().into())
    }
}

impl PartSolver<2> for TestSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(shared.iter().product::<i32>().into())
    }
}

#[test]
fn test_parts_constant_generated() {
    assert_eq!(<TestSolver as Solver>::PARTS, 2);
    assert!(<TestSolver as Solver>::SKIP_IN_BATCH.is_empty());
}

#[test]
fn test_solver_trait_implemented() {
    let mut parsed = TestSolver::parse("1\n2\n3\n4").unwrap();

    let result1 = TestSolver::solve_part(&mut parsed, 1).unwrap();
    assert_eq!(result1.value(), "10");

    let result2 = TestSolver::solve_part(&mut parsed, 2).unwrap();
    assert_eq!(result2.value(), "24");
}

#[test]
fn test_unknown_part_not_implemented() {
    let mut parsed = TestSolver::parse("1\n2\n3").unwrap();

    let result = TestSolver::solve_part(&mut parsed, 3);
    assert!(matches!(result, Err(SolveError::PartNotImplemented(3))));
}

#[test]
fn test_part_out_of_range() {
    let mut parsed = TestSolver::parse("1\n2\n3").unwrap();

    let result = TestSolver::solve_part_checked_range(&mut parsed, 3);
    assert!(matches!(result, Err(SolveError::PartOutOfRange(3))));
}
