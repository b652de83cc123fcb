//! Test utilities for the progress bar
//!
//! This crate provides recording sinks, a hand-driven clock and a harness
//! that wires them into a [`progress_bar_core::ProgressBar`].

pub mod builders;
pub mod mocks;

// Re-export commonly used types
pub use builders::TestBar;
pub use mocks::{ManualClock, RecordingSink};
