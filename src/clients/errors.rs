//! HTTP-specific error types.
//!
//! - [`HttpResponseError`]: a non-2xx response from the API
//! - [`InvalidHttpRequestError`]: a request that failed validation before sending
//! - [`HttpError`]: unified error type for everything HTTP-related
//!
//! # Example
//!
//! ```rust,ignore
//! use itglue::clients::HttpError;
//!
//! match connection.get("/organizations", None).await {
//!     Ok(response) => println!("{}", response.body),
//!     Err(ConnectionError::Http(HttpError::Response(e))) => {
//!         println!("API error {}: {}", e.code, e.message);
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use serde::Deserialize;
use thiserror::Error;

/// Error returned when a request receives a non-successful response.
///
/// Carries the status code, a readable message, and the parsed response body
/// (or `Value::Null` when the body was empty or not JSON).
///
/// # Example
///
/// ```rust
/// use itglue::clients::HttpResponseError;
/// use serde_json::json;
///
/// let error = HttpResponseError::new(
///     422,
///     json!({"errors": [{"status": "422", "title": "Name can't be blank"}]}),
/// );
///
/// assert_eq!(error.code, 422);
/// assert!(error.message.contains("Name can't be blank"));
/// ```
#[derive(Debug, Error)]
#[error("Request failed with response code {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Human-readable summary of the failure.
    pub message: String,
    /// The parsed response body.
    pub body: serde_json::Value,
}

impl HttpResponseError {
    /// Creates an error from a status code and parsed body.
    ///
    /// The message is built from the JSON:API `errors` array when present,
    /// otherwise from the raw body.
    #[must_use]
    pub fn new(code: u16, body: serde_json::Value) -> Self {
        let message = serialize_error(&body);
        Self {
            code,
            message,
            body,
        }
    }

    /// Returns `true` for a 404 response.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        self.code == 404
    }

    /// Returns the JSON:API error objects contained in the body.
    ///
    /// Entries that are not objects are skipped.
    #[must_use]
    pub fn details(&self) -> Vec<ErrorObject> {
        self.body
            .get("errors")
            .and_then(serde_json::Value::as_array)
            .map(|errors| {
                errors
                    .iter()
                    .filter_map(|e| serde_json::from_value(e.clone()).ok())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// A single JSON:API error object.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct ErrorObject {
    /// The HTTP status code, as a string.
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: Option<String>,
    /// Short summary of the problem.
    #[serde(default)]
    pub title: Option<String>,
    /// Explanation specific to this occurrence.
    #[serde(default)]
    pub detail: Option<String>,
    /// Pointer to the offending part of the request, if any.
    #[serde(default)]
    pub source: Option<serde_json::Value>,
}

impl ErrorObject {
    fn summary(&self) -> Option<String> {
        match (&self.title, &self.detail) {
            (Some(title), Some(detail)) if title != detail => Some(format!("{title}: {detail}")),
            (Some(title), _) => Some(title.clone()),
            (None, Some(detail)) => Some(detail.clone()),
            (None, None) => None,
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn serialize_error(body: &serde_json::Value) -> String {
    let summaries: Vec<String> = body
        .get("errors")
        .and_then(serde_json::Value::as_array)
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| serde_json::from_value::<ErrorObject>(e.clone()).ok())
                .filter_map(|e| e.summary())
                .collect()
        })
        .unwrap_or_default();

    if !summaries.is_empty() {
        return summaries.join("; ");
    }

    match body {
        serde_json::Value::Null => "empty response body".to_string(),
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Error returned when a request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST or PATCH request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-2xx response.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the response status code, if the error carries one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}
