//! Rendering configuration

use crate::error::{Result, ValidationError};
use serde::{Deserialize, Serialize};

/// Width used when the terminal width cannot be detected
pub const DEFAULT_TERMINAL_WIDTH: usize = 80;

/// Narrowest bar drawn when a message competes for space
pub const DEFAULT_MIN_BAR_WIDTH: usize = 10;

/// User-facing progress bar configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    /// Fixed terminal width; detection is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminal_width: Option<usize>,
    /// Width assumed when detection fails
    pub fallback_width: usize,
    /// Minimum number of bar columns kept when truncating the message
    pub min_bar_width: usize,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            terminal_width: None,
            fallback_width: DEFAULT_TERMINAL_WIDTH,
            min_bar_width: DEFAULT_MIN_BAR_WIDTH,
        }
    }
}

impl ProgressConfig {
    /// Create a test configuration
    pub fn test() -> Self {
        Self {
            terminal_width: Some(DEFAULT_TERMINAL_WIDTH),
            fallback_width: DEFAULT_TERMINAL_WIDTH,
            min_bar_width: 5,
        }
    }

    /// Check that every width is usable
    pub fn validate(&self) -> Result<()> {
        if self.terminal_width == Some(0) {
            return Err(
                ValidationError::invalid_parameter("terminal_width", "must be greater than 0")
                    .into(),
            );
        }
        if self.fallback_width == 0 {
            return Err(
                ValidationError::invalid_parameter("fallback_width", "must be greater than 0")
                    .into(),
            );
        }
        if self.min_bar_width == 0 {
            return Err(
                ValidationError::invalid_parameter("min_bar_width", "must be at least 1").into(),
            );
        }
        if self.min_bar_width >= self.fallback_width {
            return Err(ValidationError::invalid_configuration(
                "min_bar_width must be smaller than fallback_width",
            )
            .into());
        }
        Ok(())
    }

    /// Pick the width to render with
    ///
    /// Priority: configured width, then the detected one, then the fallback.
    pub fn resolve_width(&self, detected: Option<usize>) -> usize {
        self.terminal_width
            .or(detected.filter(|&width| width > 0))
            .unwrap_or(self.fallback_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_default_config_is_valid() {
        let config = ProgressConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.fallback_width, 80);
        assert_eq!(config.terminal_width, None);
    }

    #[test]
    fn test_test_config_is_valid() {
        assert!(ProgressConfig::test().validate().is_ok());
    }

    #[test]
    fn test_zero_widths_are_rejected() {
        let config = ProgressConfig {
            terminal_width: Some(0),
            ..ProgressConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::Validation(ValidationError::InvalidParameter { parameter, .. }))
                if parameter == "terminal_width"
        ));

        let config = ProgressConfig {
            fallback_width: 0,
            ..ProgressConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ProgressConfig {
            min_bar_width: 0,
            ..ProgressConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_min_bar_must_fit_fallback() {
        let config = ProgressConfig {
            fallback_width: 20,
            min_bar_width: 20,
            ..ProgressConfig::default()
        };
        let error = config.validate().unwrap_err();
        assert!(error.to_string().contains("min_bar_width"));
    }

    #[test]
    fn test_resolve_width_priority() {
        let mut config = ProgressConfig::default();
        assert_eq!(config.resolve_width(None), 80);
        assert_eq!(config.resolve_width(Some(0)), 80);
        assert_eq!(config.resolve_width(Some(132)), 132);

        config.terminal_width = Some(100);
        assert_eq!(config.resolve_width(Some(132)), 100);
    }
}
