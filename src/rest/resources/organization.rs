//! Organization resource.
//!
//! Organizations are the top-level container in IT Glue. Most other kinds
//! can be listed under an organization:
//!
//! ```rust,ignore
//! use itglue::rest::ResourceKind;
//! use itglue::rest::resources::{Configuration, Organization};
//!
//! let acme = Organization::find(&connection, 123, None).await?;
//! let configs = Configuration::get(&connection, Some(&acme)).await?;
//! ```

use crate::rest::ResourceKind;

/// An IT Glue organization (`/organizations`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Organization;

impl ResourceKind for Organization {
    const NAME: &'static str = "Organization";
    const TYPE: &'static str = "organizations";
}
