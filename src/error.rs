//! Error types for the Stingray API client.
//!
//! This module contains the configuration error type. Errors raised while
//! talking to the appliance live in [`crate::clients`].
//!
//! # Example
//!
//! ```rust
//! use stingray_api::{ConfigError, Username};
//!
//! let result = Username::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyUsername)));
//! ```

use thiserror::Error;

/// Errors that can occur while building a client configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Username cannot be empty.
    #[error("Username cannot be empty. Please provide the appliance API user.")]
    EmptyUsername,

    /// Password cannot be empty.
    #[error("Password cannot be empty. Please provide the appliance API password.")]
    EmptyPassword,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}': {reason}. Expected e.g. 'https://stingray.example.com:9070'.")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
        /// Why the URL was rejected.
        reason: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_username_error_message() {
        let message = ConfigError::EmptyUsername.to_string();
        assert!(message.contains("Username cannot be empty"));
    }

    #[test]
    fn test_invalid_base_url_error_message() {
        let error = ConfigError::InvalidBaseUrl {
            url: "not a url".to_string(),
            reason: "relative URL without a base".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("not a url"));
        assert!(message.contains("relative URL without a base"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "base_url" };
        let message = error.to_string();
        assert!(message.contains("base_url"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyPassword;
        let _: &dyn std::error::Error = &error;
    }
}
