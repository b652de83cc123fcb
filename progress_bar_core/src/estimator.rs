//! Remaining-time estimation
//!
//! The estimate is a straight-line extrapolation of the cumulative rate
//! (`done / elapsed`) to `total`. It is recomputed from scratch on every call;
//! nothing is smoothed or carried between calls.

use std::time::Duration;

/// Shown while no rate can be measured
pub const UNKNOWN_REMAINING: &str = "?";

/// Estimate the whole seconds left until `total` is reached
///
/// Elapsed time is counted in whole seconds. Returns `None` when nothing has
/// been done yet or less than one second has passed. Overrun yields zero.
pub fn estimate_remaining_secs(done: i64, total: i64, elapsed: Duration) -> Option<u64> {
    let elapsed_secs = elapsed.as_secs();
    if done <= 0 || elapsed_secs == 0 {
        return None;
    }

    let elapsed_secs = elapsed_secs as f64;
    let rate = done as f64 / elapsed_secs;
    let estimated_total = total as f64 / rate;
    let remaining = (estimated_total - elapsed_secs).round();

    if remaining > 0.0 {
        Some(remaining as u64)
    } else {
        Some(0)
    }
}

/// Format seconds as `SS secs` or `M min(s), SS secs`
///
/// Minutes are the largest unit: two hours read as `120 mins, 00 secs`.
pub fn format_remaining(seconds: u64) -> String {
    if seconds < 60 {
        return format!("{seconds:02} secs");
    }

    let minutes = seconds / 60;
    let remaining_seconds = seconds % 60;
    let plural = if minutes == 1 { "" } else { "s" };
    format!("{minutes} min{plural}, {remaining_seconds:02} secs")
}

/// Human readable remaining time, or `?` when it cannot be estimated yet
pub fn remaining(done: i64, total: i64, elapsed: Duration) -> String {
    match estimate_remaining_secs(done, total, elapsed) {
        Some(seconds) => format_remaining(seconds),
        None => UNKNOWN_REMAINING.to_string(),
    }
}
