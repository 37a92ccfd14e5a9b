//! Progress reporting for long brute-force loops

use std::time::{Duration, Instant};

/// Counts processed items and periodically logs the processing rate
///
/// Without an interval every increment is logged. With a count or time
/// interval a line is logged once per interval, also reporting totals.
/// Setting the expected total adds a remaining-time estimate.
///
/// ```
/// use aoc_solutions::utils::progress::ProgressLogger;
///
/// let mut progress = ProgressLogger::new().log_every(1_000).max_count(10_000);
/// for _ in 0..10_000 {
///     progress.increment(1);
/// }
/// assert_eq!(progress.total_count(), 10_000);
/// ```
#[derive(Debug, Clone)]
pub struct ProgressLogger {
    max_count: Option<u64>,
    log_every: Option<u64>,
    log_interval: Option<Duration>,
    interval_count: u64,
    total_count: u64,
    interval_start: Instant,
    total_start: Instant,
}

impl ProgressLogger {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            max_count: None,
            log_every: None,
            log_interval: None,
            interval_count: 0,
            total_count: 0,
            interval_start: now,
            total_start: now,
        }
    }

    /// Expected number of items, enables the remaining-time estimate
    pub fn max_count(mut self, max_count: u64) -> Self {
        self.max_count = Some(max_count);
        self
    }

    /// Log once every `count` items
    pub fn log_every(mut self, count: u64) -> Self {
        self.log_every = Some(count);
        self
    }

    /// Log at most once per `interval`
    ///
    /// Ignored for deciding when to log if a count interval is also set.
    pub fn log_interval(mut self, interval: Duration) -> Self {
        self.log_interval = Some(interval);
        self
    }

    /// Reset counters and timers, for when the work starts later than construction
    pub fn restart(&mut self) {
        let now = Instant::now();
        self.interval_count = 0;
        self.total_count = 0;
        self.interval_start = now;
        self.total_start = now;
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Count `by` more items, returning whether a progress line was logged
    pub fn increment(&mut self, by: u64) -> bool {
        self.increment_with(by, None)
    }

    /// Like [`Self::increment`], prefixing the log line with `current`
    pub fn increment_with(&mut self, by: u64, current: Option<&str>) -> bool {
        self.interval_count += by;
        self.total_count += by;

        let logged = self.should_log();
        if logged {
            self.log_progress(current);
        }

        let count_reached = self.log_every.is_some_and(|n| self.interval_count >= n);
        let time_reached = self
            .log_interval
            .is_some_and(|t| self.interval_start.elapsed() >= t);
        if count_reached || time_reached {
            self.interval_count = 0;
            self.interval_start = Instant::now();
        }
        logged
    }

    fn should_log(&self) -> bool {
        match (self.log_every, self.log_interval) {
            (Some(n), _) => self.interval_count >= n,
            (None, Some(t)) => self.interval_start.elapsed() >= t,
            (None, None) => true,
        }
    }

    /// Log the current rates unconditionally
    pub fn log_progress(&self, current: Option<&str>) {
        let interval_elapsed = self.interval_start.elapsed();
        let interval_rate = rate(self.interval_count, interval_elapsed);

        let mut line = match current {
            Some(current) if !current.is_empty() => format!("{}. ", current),
            _ => String::new(),
        };
        line.push_str(&format!(
            "Processed {} items in {:.2?}, rate {:.0} items/s",
            self.interval_count, interval_elapsed, interval_rate
        ));

        if self.log_every.is_some() || self.log_interval.is_some() {
            let total_elapsed = self.total_start.elapsed();
            line.push_str(&format!(
                " (total {} items in {:.2?}, rate {:.0} items/s)",
                self.total_count,
                total_elapsed,
                rate(self.total_count, total_elapsed)
            ));
        }

        if let Some(max_count) = self.max_count {
            let remaining = max_count.saturating_sub(self.total_count);
            let estimate = if interval_rate > 0.0 {
                format!("{:.0?}", Duration::from_secs_f64(remaining as f64 / interval_rate))
            } else {
                "unknown".to_string()
            };
            line.push_str(&format!(". Remaining: {} items, estimated {}", remaining, estimate));
        }

        log::info!("{}.", line);
    }
}

impl Default for ProgressLogger {
    fn default() -> Self {
        Self::new()
    }
}

fn rate(count: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 { count as f64 / secs } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logs_every_increment_without_interval() {
        let mut progress = ProgressLogger::new();
        assert!(progress.increment(1));
        assert!(progress.increment(5));
        assert_eq!(progress.total_count(), 6);
    }

    #[test]
    fn test_count_interval() {
        let mut progress = ProgressLogger::new().log_every(3).max_count(10);
        let logged: Vec<bool> = (0..7).map(|_| progress.increment(1)).collect();
        assert_eq!(logged, vec![false, false, true, false, false, true, false]);
        assert_eq!(progress.total_count(), 7);
    }

    #[test]
    fn test_time_interval_waits() {
        let mut progress = ProgressLogger::new().log_interval(Duration::from_secs(3600));
        assert!(!progress.increment(100));
        assert!(!progress.increment_with(100, Some("x = 4")));
    }

    #[test]
    fn test_restart_clears_counts() {
        let mut progress = ProgressLogger::new().log_every(2);
        progress.increment(1);
        progress.restart();
        assert_eq!(progress.total_count(), 0);
        assert!(!progress.increment(1));
        assert!(progress.increment(1));
    }
}
