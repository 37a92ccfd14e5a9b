//! Sequential executor for running solvers

use crate::config::{Config, RunSelection};
use crate::error::CliError;
use crate::input::InputStore;
use aoc_solver::{FactoryInfo, SolveResult, SolverError, SolverRegistry};
use chrono::TimeDelta;

/// What happened to one part of a puzzle
#[derive(Debug)]
pub enum PartOutcome {
    /// The part produced an answer
    Solved {
        answer: String,
        /// Reason the answer is hard-coded, if it is
        hard_coded: Option<String>,
        solve_duration: TimeDelta,
    },
    /// Left out of batch runs by the puzzle
    Skipped,
    /// The part has no solution yet
    NotImplemented,
    /// Reading the input, parsing or solving failed
    Failed(String),
}

/// Result from a single part execution
#[derive(Debug)]
pub struct PartReport {
    pub id: u8,
    pub part: u8,
    /// Time spent parsing, when parsing happened
    pub parse_duration: Option<TimeDelta>,
    pub outcome: PartOutcome,
}

impl PartReport {
    fn new(id: u8, part: u8, outcome: PartOutcome) -> Self {
        Self {
            id,
            part,
            parse_duration: None,
            outcome,
        }
    }

    fn solved(id: u8, part: u8, parse_duration: TimeDelta, result: SolveResult) -> Self {
        Self {
            id,
            part,
            parse_duration: Some(parse_duration),
            outcome: PartOutcome::Solved {
                solve_duration: result.duration(),
                answer: result.answer,
                hard_coded: result.hard_coded,
            },
        }
    }

    fn from_error(id: u8, part: u8, error: SolverError) -> Self {
        let outcome = if error.is_not_implemented() {
            PartOutcome::NotImplemented
        } else {
            PartOutcome::Failed(error.to_string())
        };
        Self::new(id, part, outcome)
    }
}

/// The puzzles a run covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plan {
    /// One puzzle, solving its highest implemented part
    Single(u8),
    /// Every part of every puzzle except the template
    All,
}

/// Runs solvers one after another in puzzle order
pub struct Executor {
    registry: SolverRegistry,
    inputs: InputStore,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Self {
        Self {
            registry,
            inputs: InputStore::new(config.input_dir.clone()),
        }
    }

    /// Turn a selection into a plan, checking the puzzles exist
    pub fn plan(&self, selection: RunSelection) -> Result<Plan, CliError> {
        match selection {
            RunSelection::Latest => self
                .registry
                .latest()
                .map(|info| Plan::Single(info.id))
                .ok_or(CliError::NoPuzzles),
            RunSelection::Puzzle(id) if self.registry.contains(id) => Ok(Plan::Single(id)),
            RunSelection::Puzzle(id) => Err(CliError::UnknownPuzzle(id)),
            RunSelection::All if self.batch_puzzles().next().is_none() => Err(CliError::NoPuzzles),
            RunSelection::All => Ok(Plan::All),
        }
    }

    /// Puzzles included in a batch run, in id order
    fn batch_puzzles(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.registry.iter_info().filter(|info| !info.is_template())
    }

    /// Solve the highest implemented part of one puzzle
    ///
    /// A missing input or a parse failure is an error. Solve failures are
    /// reported in the returned outcome.
    pub fn run_single(&self, id: u8) -> Result<PartReport, CliError> {
        let input = self.inputs.read(id)?;
        let mut solver = self.registry.create_solver(id, &input)?;
        let parse_duration = solver.parse_duration();

        match solver.solve_with_fallback() {
            Ok((part, result)) => Ok(PartReport::solved(id, part, parse_duration, result)),
            Err(e) => Ok(PartReport::from_error(id, 1, e)),
        }
    }

    /// Solve every part of every batch puzzle
    ///
    /// Each part gets a freshly parsed solver so parts cannot share state.
    /// `on_report` sees every report as soon as it is available.
    pub fn run_all<F>(&self, mut on_report: F) -> Vec<PartReport>
    where
        F: FnMut(&PartReport),
    {
        let mut reports = Vec::new();
        for info in self.batch_puzzles() {
            log::debug!("Running puzzle {} ({} parts)", info.id, info.parts);
            let input = self.inputs.read(info.id).map_err(|e| e.to_string());

            for part in 1..=info.parts {
                let report = if info.skip_in_batch.contains(&part) {
                    PartReport::new(info.id, part, PartOutcome::Skipped)
                } else {
                    match &input {
                        Ok(input) => self.solve_fresh(info.id, part, input),
                        Err(e) => PartReport::new(info.id, part, PartOutcome::Failed(e.clone())),
                    }
                };
                on_report(&report);
                reports.push(report);
            }
        }
        reports
    }

    fn solve_fresh(&self, id: u8, part: u8, input: &str) -> PartReport {
        let mut solver = match self.registry.create_solver(id, input) {
            Ok(solver) => solver,
            Err(e) => return PartReport::from_error(id, part, e),
        };
        match solver.solve(part) {
            Ok(result) => PartReport::solved(id, part, solver.parse_duration(), result),
            Err(e) => PartReport::from_error(id, part, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::{
        Answer, AocParser, AocSolver, ParseError, PartSolver, RegistryBuilder, SolveError,
        TEMPLATE_ID,
    };
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    /// Sums numbers in part 1, part 2 is skipped in batch runs
    #[derive(AocSolver)]
    #[aoc_solver(max_parts = 2, skip_in_batch = [2])]
    struct Sum;

    impl AocParser for Sum {
        type SharedData<'a> = Vec<i64>;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            input
                .lines()
                .map(|l| {
                    l.parse()
                        .map_err(|_| ParseError::InvalidFormat(format!("bad number {:?}", l)))
                })
                .collect()
        }
    }

    impl PartSolver<1> for Sum {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
            Ok(shared.iter().sum::<i64>().into())
        }
    }

    impl PartSolver<2> for Sum {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
            Ok(Answer::hard_coded(shared.len().to_string(), "slow"))
        }
    }

    /// Only part 1 is implemented
    #[derive(AocSolver)]
    #[aoc_solver(max_parts = 2)]
    struct Half;

    impl AocParser for Half {
        type SharedData<'a> = &'a str;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            Ok(input)
        }
    }

    impl PartSolver<1> for Half {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
            Ok(shared.trim().into())
        }
    }

    impl PartSolver<2> for Half {
        fn solve(_shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
            Err(SolveError::PartNotImplemented(2))
        }
    }

    fn executor(dir: &Path) -> Executor {
        let registry = RegistryBuilder::new()
            .register::<Half>(TEMPLATE_ID)
            .unwrap()
            .register::<Sum>(1)
            .unwrap()
            .register::<Half>(4)
            .unwrap()
            .build();
        let config = Config {
            selection: RunSelection::All,
            input_dir: dir.to_path_buf(),
            quiet: false,
        };
        Executor::new(registry, &config)
    }

    #[test]
    fn test_plan() {
        let temp = TempDir::new().unwrap();
        let executor = executor(temp.path());

        assert_eq!(executor.plan(RunSelection::Latest).unwrap(), Plan::Single(4));
        assert_eq!(executor.plan(RunSelection::Puzzle(1)).unwrap(), Plan::Single(1));
        assert_eq!(executor.plan(RunSelection::Puzzle(0)).unwrap(), Plan::Single(0));
        assert_eq!(executor.plan(RunSelection::All).unwrap(), Plan::All);
        assert!(matches!(
            executor.plan(RunSelection::Puzzle(9)),
            Err(CliError::UnknownPuzzle(9))
        ));
    }

    #[test]
    fn test_plan_without_puzzles() {
        let registry = RegistryBuilder::new()
            .register::<Half>(TEMPLATE_ID)
            .unwrap()
            .build();
        let config = Config {
            selection: RunSelection::Latest,
            input_dir: "input".into(),
            quiet: false,
        };
        let executor = Executor::new(registry, &config);

        assert!(matches!(executor.plan(RunSelection::Latest), Err(CliError::NoPuzzles)));
        assert!(matches!(executor.plan(RunSelection::All), Err(CliError::NoPuzzles)));
    }

    #[test]
    fn test_run_single_falls_back() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("04.txt"), "hello\n").unwrap();
        let executor = executor(temp.path());

        let report = executor.run_single(4).unwrap();
        assert_eq!(report.part, 1);
        assert!(report.parse_duration.is_some());
        assert!(matches!(
            report.outcome,
            PartOutcome::Solved { ref answer, hard_coded: None, .. } if answer == "hello"
        ));
    }

    #[test]
    fn test_run_single_hard_coded_and_errors() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("01.txt"), "1\n2").unwrap();
        let executor = executor(temp.path());

        let report = executor.run_single(1).unwrap();
        assert_eq!(report.part, 2);
        assert!(matches!(
            report.outcome,
            PartOutcome::Solved { ref answer, hard_coded: Some(ref reason), .. }
                if answer == "2" && reason == "slow"
        ));

        assert!(matches!(executor.run_single(4), Err(CliError::Input(_))));

        fs::write(temp.path().join("01.txt"), "x").unwrap();
        assert!(matches!(executor.run_single(1), Err(CliError::Solver(_))));
    }

    #[test]
    fn test_run_all() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("00.txt"), "template").unwrap();
        fs::write(temp.path().join("01.txt"), "1\n2\n3").unwrap();
        let executor = executor(temp.path());

        let mut streamed = Vec::new();
        let reports = executor.run_all(|r| streamed.push((r.id, r.part)));

        // Template left out, puzzle 4 has no input
        assert_eq!(streamed, vec![(1, 1), (1, 2), (4, 1), (4, 2)]);
        assert!(matches!(
            reports[0].outcome,
            PartOutcome::Solved { ref answer, .. } if answer == "6"
        ));
        assert!(matches!(reports[1].outcome, PartOutcome::Skipped));
        assert!(matches!(reports[2].outcome, PartOutcome::Failed(ref e) if e.contains("04.txt")));
        assert!(matches!(reports[3].outcome, PartOutcome::Failed(_)));
    }

    #[test]
    fn test_run_all_not_implemented() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("01.txt"), "5").unwrap();
        fs::write(temp.path().join("04.txt"), "x").unwrap();
        let executor = executor(temp.path());

        let reports = executor.run_all(|_| {});
        assert!(matches!(reports[2].outcome, PartOutcome::Solved { .. }));
        assert!(matches!(reports[3].outcome, PartOutcome::NotImplemented));
    }
}
