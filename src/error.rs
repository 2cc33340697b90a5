//! Error types and handling for the Skycast service

use thiserror::Error;

/// Main error type for the Skycast service
#[derive(Error, Debug)]
pub enum SkycastError {
    /// Configuration-related errors (missing API key, bad port, ...)
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Caller supplied invalid input; rejected before any network call
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Geocoding produced zero matches; an empty result, not a fault
    #[error("Location not found: {query}")]
    NotFound { query: String },

    /// Upstream unreachable, non-2xx, or returned an unusable body
    #[error("Upstream error: {message}")]
    Upstream { message: String },

    /// An outbound call exceeded its bounded timeout
    #[error("Upstream timed out: {message}")]
    Timeout { message: String },
}

impl SkycastError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new invalid-input error
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a new not-found error for the given query
    pub fn not_found<S: Into<String>>(query: S) -> Self {
        Self::NotFound {
            query: query.into(),
        }
    }

    /// Create a new upstream error
    pub fn upstream<S: Into<String>>(message: S) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    /// Create a new timeout error
    pub fn timeout<S: Into<String>>(message: S) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SkycastError::Config { .. } => {
                "Configuration error. Please check your environment and API key.".to_string()
            }
            SkycastError::InvalidInput { message } => {
                format!("Invalid input: {message}")
            }
            SkycastError::NotFound { query } => {
                format!("No matching city found for '{query}'")
            }
            SkycastError::Upstream { .. } => {
                "The weather provider could not be reached. Please try again later.".to_string()
            }
            SkycastError::Timeout { .. } => {
                "The weather provider took too long to respond. Please try again later.".to_string()
            }
        }
    }
}

impl From<reqwest::Error> for SkycastError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::timeout(err.to_string())
        } else {
            Self::upstream(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = SkycastError::config("missing API key");
        assert!(matches!(config_err, SkycastError::Config { .. }));

        let input_err = SkycastError::invalid_input("city must not be empty");
        assert!(matches!(input_err, SkycastError::InvalidInput { .. }));

        let not_found = SkycastError::not_found("Atlantis");
        assert!(matches!(not_found, SkycastError::NotFound { .. }));

        let upstream_err = SkycastError::upstream("connection refused");
        assert!(matches!(upstream_err, SkycastError::Upstream { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = SkycastError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let not_found = SkycastError::not_found("Atlantis");
        assert!(not_found.user_message().contains("Atlantis"));

        let input_err = SkycastError::invalid_input("test input");
        assert!(input_err.user_message().contains("test input"));

        let timeout_err = SkycastError::timeout("deadline elapsed");
        assert!(timeout_err.user_message().contains("too long"));
    }

    #[test]
    fn test_display_includes_query() {
        let err = SkycastError::not_found("Nairobi");
        assert_eq!(err.to_string(), "Location not found: Nairobi");
    }
}
