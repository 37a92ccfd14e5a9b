//! Configuration resolution from the environment

use crate::error::CliError;
use aoc_solver::MAX_ID;
use std::path::{Path, PathBuf};

/// Puzzle selection variable: `all`, a puzzle id, or unset for the latest puzzle
pub const PUZZLE_VAR: &str = "AOC_PUZZLE";
/// Directory holding the `NN.txt` input files
pub const INPUT_DIR_VAR: &str = "AOC_INPUT_DIR";
/// Print answers only when set to `1`, `true` or `yes`
pub const QUIET_VAR: &str = "AOC_QUIET";

const DEFAULT_INPUT_DIR: &str = "input";

/// Which puzzles to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunSelection {
    /// The registered puzzle with the highest id
    Latest,
    /// Every registered puzzle except the template
    All,
    /// A single puzzle
    Puzzle(u8),
}

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Puzzles to run
    pub selection: RunSelection,
    /// Input directory path
    pub input_dir: PathBuf,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from the process environment
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Build config from a variable lookup
    pub fn from_vars<F>(lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let selection = match lookup(PUZZLE_VAR) {
            Some(value) => parse_selection(&value)?,
            None => RunSelection::Latest,
        };

        let input_dir = lookup(INPUT_DIR_VAR)
            .filter(|dir| !dir.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_INPUT_DIR.to_string());

        let quiet = lookup(QUIET_VAR).is_some_and(|value| {
            matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes"
            )
        });

        Ok(Config {
            selection,
            input_dir: expand_tilde(Path::new(&input_dir)),
            quiet,
        })
    }
}

fn parse_selection(value: &str) -> Result<RunSelection, CliError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(RunSelection::Latest);
    }
    if value.eq_ignore_ascii_case("all") {
        return Ok(RunSelection::All);
    }

    match value.parse::<u8>() {
        Ok(id) if id <= MAX_ID => Ok(RunSelection::Puzzle(id)),
        _ => Err(CliError::Config(format!(
            "{} must be 'all' or a puzzle id between 0 and {}, got '{}'",
            PUZZLE_VAR, MAX_ID, value
        ))),
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(home) = dirs::home_dir()
    {
        if path_str == "~" {
            return home;
        }
        if let Some(rest) = path_str.strip_prefix("~/") {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}
