//! Resource-specific error types.
//!
//! This module contains error types for resource operations, extending the
//! connection errors with resource semantics like `NotFound` and
//! `MalformedResponse`.
//!
//! # Error Handling
//!
//! HTTP failures are mapped as follows:
//!
//! - **404 on any resource request**: [`ResourceError::NotFound`], keeping
//!   the request path and the error body
//! - **Any other non-2xx**: [`ResourceError::Http`] wrapping
//!   [`HttpError::Response`], which carries the status code and body
//!
//! # Example
//!
//! ```rust,ignore
//! use itglue::rest::{ResourceError, ResourceKind};
//! use itglue::rest::resources::Organization;
//!
//! match Organization::find(&connection, 123, None).await {
//!     Ok(org) => println!("Found: {org}"),
//!     Err(ResourceError::NotFound { resource, path, .. }) => {
//!         println!("{resource} not found at {path}");
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use crate::clients::{ConnectionError, HttpError};
use serde_json::Value;
use thiserror::Error;

/// Error type for resource operations.
///
/// # Example
///
/// ```rust
/// use itglue::rest::ResourceError;
///
/// let error = ResourceError::NotFound {
///     resource: "Organization".to_string(),
///     path: "/organizations/123".to_string(),
///     body: serde_json::Value::Null,
/// };
/// assert_eq!(error.to_string(), "Organization not found at /organizations/123");
/// assert_eq!(error.status(), Some(404));
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource or collection was not found (HTTP 404).
    #[error("{resource} not found at {path}")]
    NotFound {
        /// The kind name or type of the resource (e.g., "Organization").
        resource: String,
        /// The request path.
        path: String,
        /// The parsed error body returned by the API.
        body: Value,
    },

    /// The response body did not have the expected JSON:API shape.
    #[error("Unable to load {resource} data: {reason}")]
    MalformedResponse {
        /// The resource type being loaded.
        resource: String,
        /// What was missing or wrong.
        reason: String,
    },

    /// The response contained data of a different resource type.
    #[error("Received data type '{received}' but expected '{expected}'")]
    TypeMismatch {
        /// The resource type that was requested.
        expected: String,
        /// The `type` member found in the response.
        received: String,
    },

    /// The parent resource cannot be used to scope a path.
    #[error("Provided parent {resource_type} does not have an id")]
    InvalidParent {
        /// The parent's resource type.
        resource_type: String,
    },

    /// A filter request was made without any usable filter value.
    #[error("At least one valid filter must be provided for {resource}")]
    MissingFilters {
        /// The kind name of the resource.
        resource: &'static str,
    },

    /// `create` was called on a resource that already has an id.
    #[error("Cannot create {resource_type} with existing id {id}")]
    AlreadyPersisted {
        /// The resource type.
        resource_type: String,
        /// The existing id.
        id: String,
    },

    /// `update` was called on a resource that has no id yet.
    #[error("Cannot update {resource_type} without an id")]
    NotPersisted {
        /// The resource type.
        resource_type: String,
    },

    /// An HTTP-level error occurred, including non-2xx responses.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A connection-level error other than HTTP (e.g., an invalid path).
    #[error(transparent)]
    Connection(ConnectionError),
}

impl From<ConnectionError> for ResourceError {
    fn from(error: ConnectionError) -> Self {
        match error {
            ConnectionError::Http(http) => Self::Http(http),
            other => Self::Connection(other),
        }
    }
}

impl ResourceError {
    /// Maps a connection error from a resource request.
    ///
    /// A 404 response becomes [`ResourceError::NotFound`]; everything else is
    /// converted unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use itglue::clients::{ConnectionError, HttpError, HttpResponseError};
    /// use itglue::rest::ResourceError;
    /// use serde_json::Value;
    ///
    /// let error = ConnectionError::Http(HttpError::Response(
    ///     HttpResponseError::new(404, Value::Null),
    /// ));
    /// let mapped = ResourceError::from_request(error, "Location", "/locations/42");
    /// assert!(matches!(mapped, ResourceError::NotFound { ref resource, .. } if resource == "Location"));
    /// ```
    #[must_use]
    pub fn from_request(error: ConnectionError, resource: &str, path: &str) -> Self {
        match error {
            ConnectionError::Http(HttpError::Response(e)) if e.is_not_found() => Self::NotFound {
                resource: resource.to_string(),
                path: path.to_string(),
                body: e.body,
            },
            other => other.into(),
        }
    }

    /// Returns the HTTP status code behind this error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::Http(e) => e.status(),
            Self::Connection(e) => e.status(),
            _ => None,
        }
    }

    pub(crate) fn malformed(resource: &str, reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            resource: resource.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;
    use serde_json::json;

    fn response_error(code: u16) -> ConnectionError {
        ConnectionError::Http(HttpError::Response(HttpResponseError::new(
            code,
            json!({"errors": [{"status": code.to_string(), "title": "failure"}]}),
        )))
    }

    #[test]
    fn test_not_found_error_formats_correctly() {
        let error = ResourceError::NotFound {
            resource: "Configuration".to_string(),
            path: "/configurations/456".to_string(),
            body: Value::Null,
        };
        assert_eq!(
            error.to_string(),
            "Configuration not found at /configurations/456"
        );
    }

    #[test]
    fn test_from_request_maps_404_to_not_found() {
        let error =
            ResourceError::from_request(response_error(404), "Organization", "/organizations/123");
        match error {
            ResourceError::NotFound {
                resource,
                path,
                body,
            } => {
                assert_eq!(resource, "Organization");
                assert_eq!(path, "/organizations/123");
                assert_eq!(body["errors"][0]["title"], "failure");
            }
            other => panic!("Expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_from_request_keeps_other_statuses() {
        let error =
            ResourceError::from_request(response_error(500), "Organization", "/organizations/123");
        assert!(matches!(error, ResourceError::Http(_)));
        assert_eq!(error.status(), Some(500));
    }

    #[test]
    fn test_connection_http_errors_are_flattened() {
        let error: ResourceError = response_error(422).into();
        assert!(matches!(
            error,
            ResourceError::Http(HttpError::Response(ref e)) if e.code == 422
        ));
    }

    #[test]
    fn test_invalid_path_stays_connection_error() {
        let error: ResourceError = ConnectionError::InvalidPath {
            path: String::new(),
        }
        .into();
        assert!(matches!(error, ResourceError::Connection(_)));
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_type_mismatch_message() {
        let error = ResourceError::TypeMismatch {
            expected: "organizations".to_string(),
            received: "locations".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Received data type 'locations' but expected 'organizations'"
        );
    }

    #[test]
    fn test_malformed_helper() {
        let error = ResourceError::malformed("locations", "missing key 'id'");
        assert_eq!(
            error.to_string(),
            "Unable to load locations data: missing key 'id'"
        );
    }

    #[test]
    fn test_persistence_errors() {
        let error = ResourceError::AlreadyPersisted {
            resource_type: "organizations".to_string(),
            id: "9".to_string(),
        };
        assert!(error.to_string().contains("existing id 9"));

        let error = ResourceError::NotPersisted {
            resource_type: "organizations".to_string(),
        };
        assert!(error.to_string().contains("without an id"));
    }
}
