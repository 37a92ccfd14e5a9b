use aoc_solver::{Answer, AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};

#[derive(Debug, Clone)]
struct SharedData {
    numbers: Vec<i32>,
    sum: Option<i32>,
    count: Option<usize>,
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2, skip_in_batch = [2])]
struct TestDependentSolver;

impl AocParser for TestDependentSolver {
    type SharedData<'a> = SharedData;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let numbers: Vec<i32> = input
            .lines()
            .map(|line| {
                line.trim()
                    .parse::<i32>()
                    .map_err(|_| ParseError::InvalidFormat("Expected integer".into()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SharedData {
            numbers,
            sum: None,
            count: None,
        })
    }
}

impl PartSolver<1> for TestDependentSolver {
    fn solve(shared: &mut SharedData) -> Result<Answer, SolveError> {
        let sum: i32 = shared.numbers.iter().sum();

        // Store for part2
        shared.sum = Some(sum);
        shared.count = Some(shared.numbers.len());

        Ok(sum.into())
    }
}

impl PartSolver<2> for TestDependentSolver {
    fn solve(shared: &mut SharedData) -> Result<Answer, SolveError> {
        // Use data from part1 if available, otherwise compute
        let sum = shared.sum.unwrap_or_else(|| shared.numbers.iter().sum());
        let count = shared.count.unwrap_or(shared.numbers.len());

        if count == 0 {
            return Err(SolveError::SolveFailed("Empty input".into()));
        }
        Ok(format!("{:.2}", sum as f64 / count as f64).into())
    }
}

#[test]
fn test_skip_in_batch_generated() {
    assert_eq!(<TestDependentSolver as Solver>::SKIP_IN_BATCH, &[2]);
}

#[test]
fn test_part1_stores_data() {
    let mut shared = TestDependentSolver::parse("10\n20\n30").unwrap();

    let result = TestDependentSolver::solve_part(&mut shared, 1).unwrap();
    assert_eq!(result.value(), "60");

    assert_eq!(shared.sum, Some(60));
    assert_eq!(shared.count, Some(3));
}

#[test]
fn test_part2_uses_part1_data() {
    let mut shared = TestDependentSolver::parse("10\n20\n30").unwrap();

    TestDependentSolver::solve_part(&mut shared, 1).unwrap();
    let result = TestDependentSolver::solve_part(&mut shared, 2).unwrap();

    assert_eq!(result.value(), "20.00");
}

#[test]
fn test_part2_solves_independently() {
    let mut shared = TestDependentSolver::parse("10\n20\n30").unwrap();

    let result = TestDependentSolver::solve_part(&mut shared, 2).unwrap();
    assert_eq!(result.value(), "20.00");
}

#[test]
fn test_part2_reports_failure() {
    let mut shared = TestDependentSolver::parse("").unwrap();

    let result = TestDependentSolver::solve_part(&mut shared, 2);
    assert!(matches!(result, Err(SolveError::SolveFailed(_))));
}
