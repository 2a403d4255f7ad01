//! Path building for resource operations.
//!
//! Every resource kind lives at a collection path named after its type.
//! Member paths append the id, and parent scoping nests the collection under
//! the parent's member path:
//!
//! - `/organizations`
//! - `/organizations/123`
//! - `/organizations/123/configurations`
//! - `/organizations/123/configurations/456`
//!
//! Hyphens in type names and ids are written as underscores, so a JSON:API
//! type of `configuration-types` maps to `/configuration_types`. Ids are
//! percent-encoded, so an id can never add path segments of its own.
//!
//! # Example
//!
//! ```rust
//! use itglue::rest::ResourcePath;
//!
//! let path = ResourcePath::new("configurations")
//!     .parent("organizations", "123")
//!     .id(456)
//!     .build();
//! assert_eq!(path, "/organizations/123/configurations/456");
//! ```

use std::fmt::Display;

use crate::rest::{Resource, ResourceError};

/// Builder for a resource URL path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePath {
    resource_type: String,
    parent: Option<(String, String)>,
    id: Option<String>,
}

impl ResourcePath {
    /// Starts a path for the collection of `resource_type`.
    #[must_use]
    pub fn new(resource_type: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            parent: None,
            id: None,
        }
    }

    /// Nests the path under `/{parent_type}/{parent_id}`.
    #[must_use]
    pub fn parent(mut self, parent_type: impl Into<String>, parent_id: impl Display) -> Self {
        self.parent = Some((parent_type.into(), parent_id.to_string()));
        self
    }

    /// Nests the path under a parent resource's member path.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParent`] if the parent has no id or an
    /// empty type.
    pub fn scoped(self, parent: Option<&Resource>) -> Result<Self, ResourceError> {
        let Some(parent) = parent else {
            return Ok(self);
        };

        match parent.id() {
            Some(id) if !parent.resource_type().is_empty() && !id.is_empty() => {
                Ok(self.parent(parent.resource_type(), id))
            }
            _ => Err(ResourceError::InvalidParent {
                resource_type: parent.resource_type().to_string(),
            }),
        }
    }

    /// Appends a member id.
    #[must_use]
    pub fn id(mut self, id: impl Display) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Renders the path.
    #[must_use]
    pub fn build(&self) -> String {
        let mut segments = Vec::with_capacity(4);

        if let Some((parent_type, parent_id)) = &self.parent {
            segments.push(url_for_type(parent_type));
            segments.push(urlencoding::encode(&url_for_type(parent_id)).into_owned());
        }
        segments.push(url_for_type(&self.resource_type));
        if let Some(id) = &self.id {
            segments.push(urlencoding::encode(id).into_owned());
        }

        format!("/{}", segments.join("/"))
    }
}

/// Returns the URL segment for a type name (`-` written as `_`).
///
/// # Example
///
/// ```rust
/// use itglue::rest::url_for_type;
///
/// assert_eq!(url_for_type("flexible-asset-types"), "flexible_asset_types");
/// ```
#[must_use]
pub fn url_for_type(resource_type: &str) -> String {
    resource_type.replace('-', "_")
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourcePath>();
};
