//! Error types for the precis toolkit.
//!
//! Text processing itself never fails; these errors come from the boundary
//! around it: loading configuration, validating options, and reading input.

use thiserror::Error;

/// Core error types for precis.
#[derive(Error, Debug)]
pub enum PrecisError {
    /// I/O related errors (reading input text or configuration files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration validation errors
    #[error("Configuration error: {message}")]
    Configuration {
        /// Detailed error message
        message: String,
    },

    /// Input validation errors
    #[error("Validation error: {message}")]
    Validation {
        /// Detailed error message
        message: String,
    },

    /// Input text shorter than the configured minimum
    #[error("Input too short: {length} characters, at least {minimum} required")]
    InputTooShort {
        /// Number of characters in the rejected input
        length: usize,
        /// Minimum number of characters required
        minimum: usize,
    },
}

impl PrecisError {
    /// Create a new configuration error with a message.
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a new validation error with a message.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Check if this error was caused by the caller's input or configuration.
    ///
    /// Client errors won't go away by retrying with the same values.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. } | Self::Configuration { .. } | Self::InputTooShort { .. }
        )
    }
}

/// Result type alias used throughout precis.
pub type Result<T> = std::result::Result<T, PrecisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = PrecisError::validation("compression rate must be positive");
        assert!(matches!(err, PrecisError::Validation { .. }));
        assert_eq!(
            err.to_string(),
            "Validation error: compression rate must be positive"
        );
    }

    #[test]
    fn test_input_too_short_message() {
        let err = PrecisError::InputTooShort {
            length: 12,
            minimum: 50,
        };
        assert_eq!(
            err.to_string(),
            "Input too short: 12 characters, at least 50 required"
        );
    }

    #[test]
    fn test_io_errors_convert() {
        fn read_missing() -> Result<String> {
            Ok(std::fs::read_to_string("/nonexistent/precis/input.txt")?)
        }

        let err = read_missing().unwrap_err();
        assert!(matches!(err, PrecisError::Io(_)));
        assert!(err.to_string().starts_with("IO error:"));
    }

    #[test]
    fn test_error_client_error() {
        assert!(PrecisError::validation("invalid").is_client_error());
        assert!(PrecisError::configuration("bad key").is_client_error());
        assert!(
            !PrecisError::Io(std::io::Error::other("disk gone")).is_client_error()
        );
    }
}
