//! Connection-level error types.
//!
//! - [`ConnectionError::Configuration`]: the connection could not be configured
//! - [`ConnectionError::InvalidPath`]: a request path failed validation
//! - [`ConnectionError::Http`]: wraps underlying HTTP errors, including
//!   non-2xx responses

use crate::clients::HttpError;
use crate::error::ConfigError;
use thiserror::Error;

/// Error type for raw connection calls.
///
/// # Example
///
/// ```rust
/// use itglue::clients::ConnectionError;
///
/// let error = ConnectionError::InvalidPath { path: "".to_string() };
/// assert!(error.to_string().contains("Invalid"));
/// ```
#[derive(Debug, Error)]
pub enum ConnectionError {
    /// The API key or URL is missing or invalid.
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    /// The request path is invalid (e.g., empty after normalisation).
    #[error("Invalid API path: '{path}'")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ConnectionError {
    /// Returns the response status code for API errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            _ => None,
        }
    }
}
