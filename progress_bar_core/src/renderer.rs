//! Progress line rendering
//!
//! Turns a [`ProgressState`] into a single line that fits the terminal:
//!
//! ```text
//! [------->          ] 40.0% 4/10 06 secs remaining
//! Copying files 40.0% 4/10 06 secs remaining [------->          ]
//! ```
//!
//! Without a message the bar leads the line. With a message the message leads,
//! the statistics follow it and the bar moves to the end. The statistics are
//! never shortened; only the message is truncated to keep the bar visible.

use crate::config::{DEFAULT_MIN_BAR_WIDTH, DEFAULT_TERMINAL_WIDTH, ProgressConfig};
use crate::estimator;
use crate::state::ProgressState;
use std::borrow::Cow;
use std::time::Instant;

/// Appended to a truncated message
pub const ELLIPSIS: &str = "...";

const FILLED: char = '-';
const MARKER: char = '>';
const EMPTY: char = ' ';

/// Width budget for a rendered line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Columns available for the whole line
    pub terminal_width: usize,
    /// Narrowest bar kept when the message has to give way
    pub min_bar_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            terminal_width: DEFAULT_TERMINAL_WIDTH,
            min_bar_width: DEFAULT_MIN_BAR_WIDTH,
        }
    }
}

impl RenderOptions {
    /// Options for a terminal `terminal_width` columns wide
    pub fn with_width(terminal_width: usize) -> Self {
        Self {
            terminal_width,
            ..Self::default()
        }
    }

    /// Build options from configuration and an optionally detected width
    pub fn from_config(config: &ProgressConfig, detected_width: Option<usize>) -> Self {
        Self {
            terminal_width: config.resolve_width(detected_width),
            min_bar_width: config.min_bar_width,
        }
    }
}

/// Render the full progress line for `state` as seen at `now`
pub fn render(state: &ProgressState, now: Instant, options: &RenderOptions) -> String {
    let remaining = estimator::remaining(state.done, state.total, state.elapsed(now));
    let stats = stats_segment(state, &remaining);
    let min_bar = options.min_bar_width.max(1);

    match state.message.as_deref() {
        Some(message) if !message.is_empty() => {
            // message + stats + " [" + bar + "]"
            let available = options
                .terminal_width
                .saturating_sub(char_len(&stats) + 3);
            let shown = truncate_message(message, available.saturating_sub(min_bar));
            let bar_width = available.saturating_sub(char_len(&shown)).max(min_bar);
            format!("{shown}{stats} [{}]", draw_bar(state.fraction(), bar_width))
        }
        _ => {
            // "[" + bar + "]" + stats
            let bar_width = options
                .terminal_width
                .saturating_sub(char_len(&stats) + 2)
                .max(min_bar);
            format!("[{}]{stats}", draw_bar(state.fraction(), bar_width))
        }
    }
}

/// The statistics that follow the message or bar, with a leading space
///
/// ```text
///  50.0% 50/100 1 min, 40 secs remaining
/// ```
pub fn stats_segment(state: &ProgressState, remaining: &str) -> String {
    format!(
        " {}% {}/{} {remaining} remaining",
        format_percent(state.percent_tenths()),
        state.done,
        state.total
    )
}

/// Format tenths of a percent with exactly one decimal
fn format_percent(tenths: i64) -> String {
    let sign = if tenths < 0 { "-" } else { "" };
    let magnitude = tenths.unsigned_abs();
    format!("{sign}{}.{}", magnitude / 10, magnitude % 10)
}

/// Draw `width` bar columns for the completed `fraction`
///
/// The fraction is clamped to `[0, 1]`. The marker sits at
/// `floor(width * fraction)` and never beyond the last column, so a finished
/// bar reads `----->` with no trailing space.
pub fn draw_bar(fraction: f64, width: usize) -> String {
    let width = width.max(1);
    let fraction = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };
    let marker = ((width as f64 * fraction).floor() as usize).min(width - 1);

    let mut bar = String::with_capacity(width);
    bar.extend(std::iter::repeat_n(FILLED, marker));
    bar.push(MARKER);
    bar.extend(std::iter::repeat_n(EMPTY, width - marker - 1));
    bar
}

/// Fit `message` into `room` columns
///
/// A message that does not fit keeps its first characters followed by
/// [`ELLIPSIS`]. When the room cannot hold more than the ellipsis the message
/// is dropped entirely.
pub fn truncate_message(message: &str, room: usize) -> Cow<'_, str> {
    if char_len(message) <= room {
        return Cow::Borrowed(message);
    }
    if room <= ELLIPSIS.len() {
        return Cow::Borrowed("");
    }

    let mut truncated: String = message.chars().take(room - ELLIPSIS.len()).collect();
    truncated.push_str(ELLIPSIS);
    Cow::Owned(truncated)
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}
