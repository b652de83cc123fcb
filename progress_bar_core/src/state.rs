//! Progress counters for a single run

use std::time::{Duration, Instant};

/// Mutable progress of one run
///
/// `done` and `total` move independently. `done` may exceed `total` (overrun)
/// or drop below zero after a negative advance; the renderer copes with both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressState {
    /// Units of work expected for this run
    pub total: i64,
    /// Units of work completed so far
    pub done: i64,
    /// Instant the run was started
    pub started_at: Instant,
    /// Annotation shown next to the bar
    pub message: Option<String>,
}

impl ProgressState {
    /// Create a state with nothing done yet
    pub fn new(total: i64, started_at: Instant) -> Self {
        Self {
            total,
            done: 0,
            started_at,
            message: None,
        }
    }

    /// Begin a new run, keeping the current message
    pub fn restart(&mut self, total: i64, now: Instant) {
        self.total = total;
        self.done = 0;
        self.started_at = now;
    }

    /// Add `n` units without any upper bound
    pub fn advance(&mut self, n: i64) {
        self.done = self.done.saturating_add(n);
    }

    /// Set the completed units, never going past `total`
    pub fn set_done(&mut self, n: i64) {
        self.done = n.min(self.total);
    }

    /// Completed share of the work, unclamped
    ///
    /// A run with nothing to do (`total <= 0`) counts as complete.
    pub fn fraction(&self) -> f64 {
        if self.total <= 0 {
            return 1.0;
        }
        self.done as f64 / self.total as f64
    }

    /// Completed share in tenths of a percent, unclamped
    ///
    /// Exact halves round away from zero: 1 of 16 is 63 tenths (6.3%).
    pub fn percent_tenths(&self) -> i64 {
        if self.total <= 0 {
            return 1000;
        }
        let scaled = i128::from(self.done) * 1000;
        let total = i128::from(self.total);
        let magnitude = (scaled.abs() * 2 + total) / (2 * total);
        let tenths = if scaled < 0 { -magnitude } else { magnitude };
        i64::try_from(tenths).unwrap_or(if tenths < 0 { i64::MIN } else { i64::MAX })
    }

    /// Whether `done` has reached `total`
    pub fn is_complete(&self) -> bool {
        self.done >= self.total
    }

    /// Time since the run started
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }
}
