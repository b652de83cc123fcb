//! Progress Bar Core Library
//!
//! Width-aware single-line progress rendering for iteration-based command
//! line work: counters, bar layout, message truncation and remaining-time
//! estimation. Output, time and terminal width are supplied by the caller.

pub mod clock;
pub mod config;
pub mod error;
pub mod estimator;
pub mod progress;
pub mod renderer;
pub mod sink;
pub mod state;
pub mod task;

// Re-export main types
pub use clock::{Clock, SystemClock};
pub use config::{DEFAULT_MIN_BAR_WIDTH, DEFAULT_TERMINAL_WIDTH, ProgressConfig};
pub use error::{Error, Result, ValidationError};
pub use progress::ProgressBar;
pub use renderer::{RenderOptions, render};
pub use sink::{NullSink, OutputSink, RedrawSink, WriterSink};
pub use state::ProgressState;
pub use task::Task;
