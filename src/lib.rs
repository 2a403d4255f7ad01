//! # IT Glue API Rust Client
//!
//! A Rust client for the IT Glue REST API, providing validated configuration,
//! an async HTTP connection, and resource mapping for JSON:API responses.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ItGlueConfig`] and [`ItGlueConfigBuilder`]
//! - Validated newtypes for the API key and base URL
//! - A [`Connection`] with raw `get`, `post`, `patch` and `delete` calls
//! - Bracket-notation query encoding via [`QueryParams`]
//! - Resource kinds (organizations, configurations, locations, flexible
//!   assets, ...) with `get`, `filter`, `find` and friends via
//!   [`rest::ResourceKind`]
//! - Helpers for preparing flexible asset traits for upload
//!
//! ## Quick Start
//!
//! ```rust
//! use itglue::{ApiKey, ApiUrl, ItGlueConfig};
//!
//! let config = ItGlueConfig::builder()
//!     .api_url(ApiUrl::new("https://api.itglue.com").unwrap())
//!     .api_key(ApiKey::new("ITG.your-api-key").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! Or from the `ITGLUE_API_KEY` and `ITGLUE_API_URL` environment variables:
//!
//! ```rust,ignore
//! use itglue::Connection;
//!
//! let connection = Connection::from_env()?;
//! ```
//!
//! ## Working With Resources
//!
//! ```rust,ignore
//! use itglue::Connection;
//! use itglue::rest::ResourceKind;
//! use itglue::rest::resources::{Configuration, Organization};
//!
//! let connection = Connection::from_env()?;
//!
//! let org = Organization::find(&connection, 123, None).await?;
//! assert_eq!(org.id(), Some("123"));
//!
//! // GET /organizations/123/configurations?filter[name]=web01
//! let matches = Configuration::filter(&connection, Some(&org), [("name", "web01")]).await?;
//! ```
//!
//! ## Raw Requests
//!
//! Endpoints without a resource kind can be reached through the connection:
//!
//! ```rust,ignore
//! use itglue::{Connection, QueryParams};
//!
//! let params = QueryParams::new().filter("organization_id", 123).page_size(50);
//! let response = connection.get("/contacts", Some(&params)).await?;
//! println!("{}", response.body);
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is owned by each [`Connection`]
//! - **Fail-fast validation**: all newtypes validate on construction
//! - **Thread-safe**: all types are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime
//! - **No hidden requests**: nothing is retried and pages are never followed
//!   implicitly

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{ApiKey, ApiUrl, ItGlueConfig, ItGlueConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    Connection, ConnectionError, DataType, HttpClient, HttpError, HttpMethod, HttpRequest,
    HttpRequestBuilder, HttpResponse, HttpResponseError, InvalidHttpRequestError, PaginationInfo,
    QueryParams,
};

// Re-export resource types
pub use rest::{Resource, ResourceError, ResourceKind, ResourceResponse};
