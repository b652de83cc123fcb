//! Error types for the progress bar core library
//!
//! Progress operations themselves never fail: degenerate counters are handled
//! by the rendering policy. Errors only surface when validating configuration.

use thiserror::Error;

pub mod validation;

pub use self::validation::ValidationError;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the progress bar core library
#[derive(Error, Debug)]
pub enum Error {
    /// Validation related errors
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_is_transparent() {
        let error: Error =
            ValidationError::invalid_parameter("min_bar_width", "must be at least 1").into();

        assert_eq!(
            error.to_string(),
            "Invalid parameter 'min_bar_width': must be at least 1"
        );
        assert!(matches!(error, Error::Validation(_)));
    }
}
