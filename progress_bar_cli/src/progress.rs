//! Output sink selection for the CLI
//!
//! Progress always goes to stderr so stdout stays clean for results. On an
//! interactive terminal the line is redrawn in place; anywhere else every
//! render becomes its own row.

use crate::config::OutputConfig;
use progress_bar_core::{NullSink, OutputSink, RedrawSink, WriterSink};
use std::io;

/// How rendered lines reach the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    /// Carriage-return redraw of a single row
    Redraw,
    /// One row per render
    Lines,
    /// Progress disabled
    Silent,
}

/// Pick the sink for the current output settings
pub fn select_sink_kind(output: &OutputConfig, no_progress: bool, can_redraw: bool) -> SinkKind {
    if no_progress || !output.progress_enabled {
        SinkKind::Silent
    } else if output.redraw && can_redraw {
        SinkKind::Redraw
    } else {
        SinkKind::Lines
    }
}

/// Create a stderr sink of the given kind
pub fn create_sink(kind: SinkKind) -> Box<dyn OutputSink> {
    log::debug!("Using {kind:?} progress output");
    match kind {
        SinkKind::Redraw => Box::new(RedrawSink::new(io::stderr())),
        SinkKind::Lines => Box::new(WriterSink::new(io::stderr())),
        SinkKind::Silent => Box::new(NullSink),
    }
}
