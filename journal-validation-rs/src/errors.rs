//! Error handling for the validation library
//!
//! Findings produced while checking a record, upload or generated text are
//! modelled as [`ValidationError`] values. Each variant corresponds to one
//! class of problem, and the variant decides whether the finding blocks the
//! operation or is only advisory.

use thiserror::Error;

/// Result type for individual field checks
pub type CheckResult<T> = Result<T, ValidationError>;

/// A single finding raised by a check
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A field has the wrong shape (missing, not a string, not a list, ...)
    #[error("{0}")]
    Structural(String),

    /// A length, size or count is outside the allowed range
    #[error("{0}")]
    Bound(String),

    /// A value is malformed (bad URL, bad filename, unknown mood label)
    #[error("{0}")]
    Format(String),

    /// Advisory concern that never blocks the operation
    #[error("{0}")]
    Quality(String),
}

impl ValidationError {
    /// Create a structural error
    pub fn structural<S: Into<String>>(message: S) -> Self {
        ValidationError::Structural(message.into())
    }

    /// Create a bound violation
    pub fn bound<S: Into<String>>(message: S) -> Self {
        ValidationError::Bound(message.into())
    }

    /// Create a format violation
    pub fn format<S: Into<String>>(message: S) -> Self {
        ValidationError::Format(message.into())
    }

    /// Create a quality concern
    pub fn quality<S: Into<String>>(message: S) -> Self {
        ValidationError::Quality(message.into())
    }

    /// Returns true if this finding must prevent the operation
    pub fn is_blocking(&self) -> bool {
        !matches!(self, ValidationError::Quality(_))
    }

    /// The user-facing message
    pub fn message(&self) -> &str {
        match self {
            ValidationError::Structural(msg)
            | ValidationError::Bound(msg)
            | ValidationError::Format(msg)
            | ValidationError::Quality(msg) => msg,
        }
    }
}

/// Errors raised while building validators from configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An AI-artifact marker is not a valid regular expression
    #[error("invalid artifact pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A JSON configuration document could not be parsed
    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// A TOML configuration document could not be parsed
    #[error("invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocking_classification() {
        assert!(ValidationError::structural("Tags must be an array").is_blocking());
        assert!(ValidationError::bound("Maximum 20 tags allowed").is_blocking());
        assert!(ValidationError::format("Image URL must be a valid URL").is_blocking());
        assert!(!ValidationError::quality("Content may be repetitive").is_blocking());
    }

    #[test]
    fn test_display_is_the_message() {
        let err = ValidationError::bound("Title must be 200 characters or less");
        assert_eq!(err.to_string(), "Title must be 200 characters or less");
        assert_eq!(err.message(), "Title must be 200 characters or less");
    }

    #[test]
    fn test_invalid_pattern_error() {
        let source = regex::Regex::new("(unclosed").unwrap_err();
        let err = ConfigError::InvalidPattern {
            pattern: "(unclosed".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("invalid artifact pattern '(unclosed'"));
    }
}
