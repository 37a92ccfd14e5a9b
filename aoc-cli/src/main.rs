//! AOC CLI - runs the Advent of Code puzzle solutions
//!
//! Configured through the environment:
//! - `AOC_PUZZLE`: `all`, a puzzle id, or unset for the latest puzzle
//! - `AOC_INPUT_DIR`: directory with the `NN.txt` inputs, `input` by default
//! - `AOC_QUIET`: set to `1`, `true` or `yes` to print answers only
//!
//! Log output goes through `env_logger` and follows `RUST_LOG` (warnings by default).

mod config;
mod error;
mod executor;
mod input;
mod output;

use config::Config;
use executor::{Executor, Plan};
use output::OutputFormatter;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), error::CliError> {
    let config = Config::from_env()?;
    log::debug!("Resolved configuration: {:?}", config);

    let registry = aoc_solutions::registry()?;
    let executor = Executor::new(registry, &config);
    let formatter = OutputFormatter::new(config.quiet);

    match executor.plan(config.selection)? {
        Plan::Single(id) => {
            formatter.print_preparing(id);
            let report = executor.run_single(id)?;
            formatter.print_report(&report);
        }
        Plan::All => {
            let reports = executor.run_all(|report| formatter.print_report(report));
            formatter.print_summary(&reports);
        }
    }

    Ok(())
}
