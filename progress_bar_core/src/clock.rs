//! Time source abstraction
//!
//! The progress bar reads the time at `start` and on every render. Routing
//! those reads through [`Clock`] lets tests move time forward explicitly
//! instead of sleeping.

use std::time::Instant;

/// Source of the current instant
pub trait Clock {
    /// Current point in time
    fn now(&self) -> Instant;
}

/// Clock backed by the operating system's monotonic clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
