//! Builders for progress bar test scenarios

use crate::mocks::{ManualClock, RecordingSink};
use progress_bar_core::{DEFAULT_TERMINAL_WIDTH, ProgressBar, RenderOptions};

/// A progress bar wired to a recording sink and a manual clock
pub struct TestBar {
    pub bar: ProgressBar,
    pub sink: RecordingSink,
    pub clock: ManualClock,
}

impl TestBar {
    /// Create a harness rendering at the default 80 columns
    pub fn new() -> Self {
        Self::with_width(DEFAULT_TERMINAL_WIDTH)
    }

    /// Create a harness rendering at `width` columns
    pub fn with_width(width: usize) -> Self {
        Self::with_options(RenderOptions::with_width(width))
    }

    /// Create a harness with explicit render options
    pub fn with_options(options: RenderOptions) -> Self {
        let sink = RecordingSink::new();
        let clock = ManualClock::new();
        let bar = ProgressBar::with_clock(Box::new(sink.clone()), Box::new(clock.clone()))
            .with_options(options);
        Self { bar, sink, clock }
    }

    /// Start a run, then complete one unit every `delay_secs` for `loops` rounds
    pub fn run_loops(&mut self, total: i64, loops: usize, delay_secs: u64) {
        self.bar.start(total);
        for _ in 0..loops {
            self.clock.advance_secs(delay_secs);
            self.bar.next();
        }
    }

    /// The most recent rendered line, or an empty string
    pub fn last_line(&self) -> String {
        self.sink.last_line().unwrap_or_default()
    }
}

impl Default for TestBar {
    fn default() -> Self {
        Self::new()
    }
}
