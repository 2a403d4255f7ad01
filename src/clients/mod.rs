//! HTTP client types for IT Glue API communication.
//!
//! This module provides the transport layer: building requests, injecting the
//! API key, encoding query parameters, and turning responses into parsed JSON.
//!
//! # Overview
//!
//! - [`Connection`]: configured connection with `get`/`post`/`patch`/`delete`
//! - [`ConnectionError`]: errors returned by connection calls
//! - [`HttpClient`]: the async HTTP client that talks to the API
//! - [`HttpRequest`]: a request to be sent to the API
//! - [`HttpResponse`]: a parsed response, with [`PaginationInfo`]
//! - [`HttpMethod`]: supported HTTP methods (GET, POST, PATCH, DELETE)
//! - [`DataType`]: content types for request bodies
//! - [`QueryParams`]: nested query parameters in bracket notation
//!
//! # Example
//!
//! ```rust,ignore
//! use itglue::{ApiKey, ApiUrl, ItGlueConfig};
//! use itglue::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let config = ItGlueConfig::builder()
//!     .api_url(ApiUrl::new("https://api.itglue.com")?)
//!     .api_key(ApiKey::new("ITG.key")?)
//!     .build()?;
//!
//! let client = HttpClient::new(&config)?;
//! let request = HttpRequest::builder(HttpMethod::Get, "/organizations").build()?;
//! let response = client.request(request).await?;
//! ```
//!
//! # Failure Behavior
//!
//! Any non-2xx status is returned as [`HttpError::Response`] carrying the
//! status code and the parsed error body. Requests are never retried.

pub mod connection;
mod errors;
mod http_client;
mod http_request;
mod http_response;
mod query;

pub use connection::{Connection, ConnectionError};
pub use errors::{ErrorObject, HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, API_KEY_HEADER, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, PaginationInfo};
pub use query::QueryParams;
