//! Resource layer for the IT Glue API.
//!
//! This module maps JSON:API responses to [`Resource`] values and provides
//! the operations shared by every resource kind:
//!
//! - **[`ResourceKind`] trait**: `get`, `get_with`, `filter`, `find`,
//!   `find_by`, `first_or_initialize`, `first_or_create`
//! - **[`Resource`]**: type, id, attributes and relationships, with
//!   `create`, `update` and `save`
//! - **[`ResourceResponse<T>`]**: a Deref wrapper carrying pagination metadata
//! - **[`ResourcePath`]**: collection, member and parent-scoped paths
//! - **[`ResourceError`]**: semantic error types for resource operations
//!
//! # Example
//!
//! ```rust,ignore
//! use itglue::{Connection, ItGlueConfig};
//! use itglue::rest::{ResourceKind, ResourceResponse};
//! use itglue::rest::resources::{Configuration, Organization};
//!
//! let connection = Connection::new(ItGlueConfig::from_env()?)?;
//!
//! // Find a single organization
//! let org = Organization::find(&connection, 123, None).await?;
//! println!("{}", org.attr("name").unwrap_or_default());
//!
//! // List its configurations
//! let configs = Configuration::get(&connection, Some(&org)).await?;
//! for config in configs.iter() {
//!     println!("- {config}");
//! }
//!
//! // Create or update
//! let mut config = Configuration::first_or_initialize(
//!     &connection,
//!     Some(&org),
//!     [("name", "web01")],
//! )
//! .await?;
//! config.set_attr("notes", "Primary web server");
//! config.save(&connection, Some(&org)).await?;
//! ```

mod errors;
mod path;
mod record;
mod resource;
mod response;

pub mod resources;

// Public exports
pub use errors::ResourceError;
pub use path::{url_for_type, ResourcePath};
pub use record::Resource;
pub use resource::ResourceKind;
pub use response::ResourceResponse;
