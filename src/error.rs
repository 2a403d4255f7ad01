//! Configuration error types for the IT Glue client.
//!
//! All configuration constructors return `Result<T, ConfigError>` so that a
//! connection can never be built from a missing API key or a malformed URL.
//!
//! # Example
//!
//! ```rust
//! use itglue::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while building client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid IT Glue API key.")]
    EmptyApiKey,

    /// API URL is invalid.
    #[error("Invalid API URL '{url}'. Expected a URL with scheme and host (e.g., 'https://api.itglue.com').")]
    InvalidApiUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A required environment variable is missing or blank.
    #[error("Missing environment variable '{name}'.")]
    MissingEnvVar {
        /// The name of the variable.
        name: &'static str,
    },
}
