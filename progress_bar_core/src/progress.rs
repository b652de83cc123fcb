//! The progress bar component
//!
//! [`ProgressBar`] owns the counters of the current run and renders one line
//! to its [`OutputSink`] for every mutation that advances progress.
//!
//! ```
//! use progress_bar_core::{NullSink, ProgressBar};
//!
//! let mut bar = ProgressBar::new(Box::new(NullSink));
//! bar.start(3);
//! bar.next();
//! bar.advance(1);
//! bar.finish(1);
//! assert_eq!(bar.done(), 3);
//! ```

use crate::clock::{Clock, SystemClock};
use crate::config::ProgressConfig;
use crate::error::Result;
use crate::estimator;
use crate::renderer::{self, RenderOptions};
use crate::sink::OutputSink;
use crate::state::ProgressState;
use crate::task::Task;
use std::time::{Duration, Instant};

/// Single-line terminal progress bar
pub struct ProgressBar {
    state: ProgressState,
    options: RenderOptions,
    sink: Box<dyn OutputSink>,
    clock: Box<dyn Clock>,
}

impl ProgressBar {
    /// Create a progress bar using the system clock and default options
    pub fn new(sink: Box<dyn OutputSink>) -> Self {
        Self::with_clock(sink, Box::new(SystemClock))
    }

    /// Create a progress bar reading time from `clock`
    pub fn with_clock(sink: Box<dyn OutputSink>, clock: Box<dyn Clock>) -> Self {
        let now = clock.now();
        Self {
            state: ProgressState::new(0, now),
            options: RenderOptions::default(),
            sink,
            clock,
        }
    }

    /// Create a progress bar from validated configuration
    pub fn from_config(
        config: &ProgressConfig,
        detected_width: Option<usize>,
        sink: Box<dyn OutputSink>,
        clock: Box<dyn Clock>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_clock(sink, clock)
            .with_options(RenderOptions::from_config(config, detected_width)))
    }

    /// Replace the render options
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Begin a run of `total` units
    ///
    /// Resets the completed count and the start time. The message is kept.
    /// Nothing is rendered.
    pub fn start(&mut self, total: i64) {
        let now = self.clock.now();
        self.state.restart(total, now);
        log::debug!("Progress started with {total} units");
    }

    /// Complete one unit and render
    pub fn next(&mut self) {
        self.advance(1);
    }

    /// Complete `n` units and render
    ///
    /// There is no upper bound: `done` may pass `total`. Negative values move
    /// progress backwards.
    pub fn advance(&mut self, n: i64) {
        self.state.advance(n);
        self.emit();
    }

    /// Set the completed units, clamped to `total`, without rendering
    pub fn set(&mut self, n: i64) {
        self.state.set_done(n);
    }

    /// Complete the final `n` units, render the last line and close the output
    pub fn finish(&mut self, n: i64) {
        self.advance(n);
        self.sink.finish();
        log::debug!(
            "Progress finished at {}/{} after {:?}",
            self.state.done,
            self.state.total,
            self.elapsed()
        );
    }

    /// Set the annotation shown with every following line
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.state.message = Some(message.into());
    }

    /// Remove the annotation
    pub fn clear_message(&mut self) {
        self.state.message = None;
    }

    /// Change the width following lines are fitted to
    pub fn set_terminal_width(&mut self, width: usize) {
        self.options.terminal_width = width;
    }

    /// The line that would be emitted now
    pub fn render(&self) -> String {
        renderer::render(&self.state, self.clock.now(), &self.options)
    }

    /// Remaining time as it would appear on a line rendered now
    pub fn remaining(&self) -> String {
        estimator::remaining(self.state.done, self.state.total, self.elapsed())
    }

    /// Time since the current run started
    pub fn elapsed(&self) -> Duration {
        self.state.elapsed(self.clock.now())
    }

    pub fn total(&self) -> i64 {
        self.state.total
    }

    pub fn done(&self) -> i64 {
        self.state.done
    }

    pub fn started_at(&self) -> Instant {
        self.state.started_at
    }

    pub fn message(&self) -> Option<&str> {
        self.state.message.as_deref()
    }

    pub fn terminal_width(&self) -> usize {
        self.options.terminal_width
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    fn emit(&mut self) {
        let line = self.render();
        log::trace!("Rendering progress line: {line}");
        self.sink.write_line(&line);
    }
}

impl Task for ProgressBar {
    /// Nothing to run: the bar is driven through its methods
    fn execute(&mut self) {}
}
