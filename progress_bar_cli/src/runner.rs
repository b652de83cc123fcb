//! Simulated work driver
//!
//! Drives a [`ProgressBar`] through a run of evenly sized steps. The wait
//! between steps is injected so tests can move a manual clock instead of
//! sleeping.

use anyhow::Result;
use progress_bar_core::{ProgressBar, ProgressState, RenderOptions, render};
use std::time::{Duration, Instant};

/// Shape of a simulated run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub total: i64,
    pub step: i64,
    pub interval: Duration,
    pub message: Option<String>,
}

impl RunOptions {
    /// Reject runs that could never finish
    pub fn validate(&self) -> Result<()> {
        if self.total < 0 {
            anyhow::bail!("total must not be negative (got {})", self.total);
        }
        if self.step <= 0 {
            anyhow::bail!("step must be greater than 0 (got {})", self.step);
        }
        Ok(())
    }
}

/// Outcome of a finished run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub total: i64,
    pub done: i64,
    /// Lines rendered, including the final one
    pub renders: usize,
    pub elapsed: Duration,
}

/// Run `options` on `bar`, calling `wait` before every step
///
/// The last step is shortened so the run ends exactly on `total` and is
/// emitted through [`ProgressBar::finish`].
pub fn run<F>(bar: &mut ProgressBar, options: &RunOptions, mut wait: F) -> Result<RunSummary>
where
    F: FnMut(Duration),
{
    options.validate()?;

    if let Some(message) = &options.message {
        bar.set_message(message.clone());
    }
    bar.start(options.total);

    let mut renders = 0;
    while bar.done() + options.step < options.total {
        wait(options.interval);
        bar.advance(options.step);
        renders += 1;
    }

    wait(options.interval);
    bar.finish(options.total - bar.done());
    renders += 1;

    Ok(RunSummary {
        total: bar.total(),
        done: bar.done(),
        renders,
        elapsed: bar.elapsed(),
    })
}

/// Render one line for a hypothetical state, `elapsed` after its start
pub fn snapshot(
    total: i64,
    done: i64,
    elapsed: Duration,
    message: Option<String>,
    options: &RenderOptions,
) -> String {
    let started_at = Instant::now();
    let mut state = ProgressState::new(total, started_at);
    state.done = done;
    state.message = message;
    render(&state, started_at + elapsed, options)
}
