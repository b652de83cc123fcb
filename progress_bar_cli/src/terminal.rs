//! Terminal detection and capability utilities

use is_terminal::IsTerminal;
use std::env;
use std::io::{stderr, stdout};
use terminal_size::{Width, terminal_size};

/// Check if stdout is connected to an interactive terminal
pub fn is_interactive() -> bool {
    if !stdout().is_terminal() {
        return false;
    }

    // CI runners may allocate a TTY but nobody is watching it
    if is_ci_environment() {
        return false;
    }

    env::var("DEBIAN_FRONTEND").unwrap_or_default() != "noninteractive"
}

/// Check if the terminal supports ANSI escape codes for colors
pub fn supports_ansi() -> bool {
    if !is_interactive() {
        return false;
    }

    let term = env::var("TERM").unwrap_or_default();
    !(term == "dumb" || term.is_empty())
}

/// Check if stderr is connected to a terminal (progress goes to stderr)
pub fn stderr_is_terminal() -> bool {
    stderr().is_terminal()
}

/// Variables set by common CI runners
const CI_VARS: &[&str] = &[
    "CI",
    "CONTINUOUS_INTEGRATION",
    "JENKINS_URL",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "TRAVIS",
    "CIRCLECI",
    "BUILDKITE",
    "DRONE",
    "TEAMCITY_VERSION",
    "TF_BUILD", // Azure DevOps
];

/// Detect if running in a CI environment
pub fn is_ci_environment() -> bool {
    has_ci_marker(|var| env::var(var).is_ok())
}

fn has_ci_marker(is_set: impl Fn(&str) -> bool) -> bool {
    CI_VARS.iter().any(|var| is_set(var))
}

/// Determine if the progress line can be redrawn in place
pub fn can_redraw() -> bool {
    stderr_is_terminal() && !is_ci_environment()
}

/// Detect the terminal width in columns
///
/// Asks the terminal first and falls back to `$COLUMNS`. Returns `None` when
/// neither yields a positive width; callers then use the configured fallback.
pub fn detect_width() -> Option<usize> {
    if let Some((Width(width), _)) = terminal_size()
        && width > 0
    {
        return Some(usize::from(width));
    }

    parse_columns(env::var("COLUMNS").ok().as_deref())
}

/// Parse a `$COLUMNS` style value
fn parse_columns(value: Option<&str>) -> Option<usize> {
    value?.trim().parse().ok().filter(|&width: &usize| width > 0)
}
