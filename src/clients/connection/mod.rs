//! Raw connection to the IT Glue API.
//!
//! # Overview
//!
//! - [`Connection`]: holds configuration and exposes `get()`, `post()`,
//!   `patch()`, `delete()`
//! - [`ConnectionError`]: error type for connection calls
//!
//! Resource operations in [`rest`](crate::rest) are built on top of these
//! verbs; they can also be used directly as an escape hatch for endpoints
//! without a resource kind.
//!
//! # Path Normalization
//!
//! - A leading `/` is added when absent: `organizations` -> `/organizations`
//! - Trailing `/` is stripped: `/locations/` -> `/locations`
//! - An empty path is rejected with [`ConnectionError::InvalidPath`]
//!
//! # Example
//!
//! ```rust,ignore
//! use itglue::{Connection, ItGlueConfig};
//! use serde_json::json;
//!
//! let connection = Connection::new(ItGlueConfig::from_env()?)?;
//!
//! let body = json!({"data": {"type": "organizations", "attributes": {"name": "Acme"}}});
//! let response = connection.post("/organizations", body).await?;
//! ```

mod client;
mod errors;

pub use client::Connection;
pub use errors::ConnectionError;
