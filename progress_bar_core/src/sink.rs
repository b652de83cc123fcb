//! Output sinks for rendered progress lines
//!
//! A sink receives exactly one call to [`OutputSink::write_line`] per render.
//! Sinks never report failures back to the progress bar: a line that cannot
//! be written is logged and dropped.

use std::io::Write;

/// Destination for rendered progress lines
pub trait OutputSink {
    /// Emit one rendered line
    fn write_line(&mut self, line: &str);

    /// Signal that no further lines will follow for the current run
    fn finish(&mut self) {}
}

/// Null implementation for when no output is wanted
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl OutputSink for NullSink {
    fn write_line(&mut self, _line: &str) {
        // No-op: discard all lines
    }
}

/// Writes every line on its own row
///
/// Suited to logs, pipes and CI output where carriage returns are noise.
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    /// Create a sink writing to `writer`
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the sink and return the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for WriterSink<W> {
    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.writer, "{line}") {
            log::warn!("Failed to write progress line: {e}");
        }
    }

    fn finish(&mut self) {
        if let Err(e) = self.writer.flush() {
            log::warn!("Failed to flush progress output: {e}");
        }
    }
}

/// Redraws a single terminal row in place
///
/// Each line starts with a carriage return and is padded with spaces when it
/// is shorter than the previous one, so stale characters are overwritten.
/// The row is terminated with a newline on [`OutputSink::finish`].
pub struct RedrawSink<W: Write> {
    writer: W,
    last_width: usize,
}

impl<W: Write> RedrawSink<W> {
    /// Create a sink redrawing on `writer`
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_width: 0,
        }
    }

    /// Consume the sink and return the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for RedrawSink<W> {
    fn write_line(&mut self, line: &str) {
        let width = line.chars().count();
        let padding = self.last_width.saturating_sub(width);
        self.last_width = width;

        let result =
            write!(self.writer, "\r{line}{:padding$}", "").and_then(|()| self.writer.flush());
        if let Err(e) = result {
            log::warn!("Failed to redraw progress line: {e}");
        }
    }

    fn finish(&mut self) {
        self.last_width = 0;
        if let Err(e) = writeln!(self.writer).and_then(|()| self.writer.flush()) {
            log::warn!("Failed to terminate progress line: {e}");
        }
    }
}
