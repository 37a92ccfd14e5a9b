//! Output formatting for solver results

use crate::executor::{PartOutcome, PartReport};
use chrono::TimeDelta;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Announce a single-puzzle run
    pub fn print_preparing(&self, id: u8) {
        if !self.quiet {
            println!("Preparing to solve puzzle {}...", id);
        }
    }

    /// Format and print a single report
    pub fn print_report(&self, report: &PartReport) {
        let line = if self.quiet {
            format_quiet(report)
        } else {
            Some(format_full(report))
        };

        match (&report.outcome, line) {
            (PartOutcome::Failed(_), Some(line)) => eprintln!("{}", line),
            (_, Some(line)) => println!("{}", line),
            (_, None) => {}
        }
    }

    /// Print a summary after all results
    /// Shows total solve time (sum of durations) and elapsed wall-clock time
    pub fn print_summary(&self, reports: &[PartReport]) {
        if self.quiet {
            return;
        }

        let summary = Summary::of(reports);
        println!();
        println!("--- Summary ---");
        println!(
            "Parts: {} solved, {} skipped, {} not yet implemented, {} failed",
            summary.solved, summary.skipped, summary.not_implemented, summary.failed
        );
        println!("Total parse time: {}", format_duration(summary.parse_time));
        println!("Total solve time: {}", format_duration(summary.solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(self.start_time.elapsed())
        );
    }
}

/// Counts and total times over a batch of reports
#[derive(Debug, PartialEq, Eq)]
struct Summary {
    solved: usize,
    skipped: usize,
    not_implemented: usize,
    failed: usize,
    parse_time: TimeDelta,
    solve_time: TimeDelta,
}

impl Summary {
    fn of(reports: &[PartReport]) -> Self {
        let empty = Summary {
            solved: 0,
            skipped: 0,
            not_implemented: 0,
            failed: 0,
            parse_time: TimeDelta::zero(),
            solve_time: TimeDelta::zero(),
        };
        reports.iter().fold(empty, |mut summary, report| {
            match &report.outcome {
                PartOutcome::Solved { solve_duration, .. } => {
                    summary.solved += 1;
                    summary.solve_time = summary.solve_time + *solve_duration;
                    summary.parse_time =
                        summary.parse_time + report.parse_duration.unwrap_or(TimeDelta::zero());
                }
                PartOutcome::Skipped => summary.skipped += 1,
                PartOutcome::NotImplemented => summary.not_implemented += 1,
                PartOutcome::Failed(_) => summary.failed += 1,
            }
            summary
        })
    }
}

/// Quiet mode only shows answers and errors
fn format_quiet(report: &PartReport) -> Option<String> {
    match &report.outcome {
        PartOutcome::Solved { answer, .. } => Some(answer.clone()),
        PartOutcome::Failed(e) => Some(format!("Error: {}", e)),
        PartOutcome::Skipped | PartOutcome::NotImplemented => None,
    }
}

fn format_full(report: &PartReport) -> String {
    let prefix = format!("Puzzle {:02} Part {}", report.id, report.part);

    match &report.outcome {
        PartOutcome::Solved {
            answer,
            hard_coded: Some(reason),
            ..
        } => format!("{}: {} (hard-coded: {})", prefix, answer, reason),
        PartOutcome::Solved {
            answer,
            hard_coded: None,
            solve_duration,
        } => {
            let parse_timing = report
                .parse_duration
                .map(|d| format!("parse: {}, ", format_duration(d)))
                .unwrap_or_default();
            format!(
                "{}: {} ({}solve: {})",
                prefix,
                answer,
                parse_timing,
                format_duration(*solve_duration)
            )
        }
        PartOutcome::Skipped => format!("{}: SKIPPED", prefix),
        PartOutcome::NotImplemented => format!("{}: NOT YET IMPLEMENTED", prefix),
        PartOutcome::Failed(e) => format!("{}: Error - {}", prefix, e),
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    format_micros(micros as u128)
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    format_micros(d.as_micros())
}

fn format_micros(micros: u128) -> String {
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}
