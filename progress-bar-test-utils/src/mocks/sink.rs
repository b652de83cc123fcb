//! Sink that records everything it is given

use progress_bar_core::OutputSink;
use std::sync::{Arc, Mutex};

/// Output sink capturing rendered lines for assertions
///
/// Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    lines: Arc<Mutex<Vec<String>>>,
    finished: Arc<Mutex<usize>>,
}

impl RecordingSink {
    /// Create an empty recording sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Every line written so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    /// The most recent line, if any
    pub fn last_line(&self) -> Option<String> {
        self.lines.lock().unwrap().last().cloned()
    }

    /// Number of lines written so far
    pub fn line_count(&self) -> usize {
        self.lines.lock().unwrap().len()
    }

    /// How often the sink was told a run finished
    pub fn finish_count(&self) -> usize {
        *self.finished.lock().unwrap()
    }

    /// Forget everything recorded so far
    pub fn clear(&self) {
        self.lines.lock().unwrap().clear();
        *self.finished.lock().unwrap() = 0;
    }
}

impl OutputSink for RecordingSink {
    fn write_line(&mut self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }

    fn finish(&mut self) {
        *self.finished.lock().unwrap() += 1;
    }
}
