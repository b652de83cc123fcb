//! Progress Bar CLI Library
//!
//! Command line plumbing around `progress_bar_core`: layered configuration,
//! terminal detection, sink selection and the simulated work runner.

pub mod config;
pub mod progress;
pub mod runner;
pub mod terminal;
