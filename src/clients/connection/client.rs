//! Connection implementation.
//!
//! This module provides the [`Connection`] type: an explicit, per-instance
//! holder of IT Glue configuration with the raw `get`, `post`, `patch`, and
//! `delete` verbs.

use serde_json::Value;

use crate::clients::connection::ConnectionError;
use crate::clients::{DataType, HttpClient, HttpMethod, HttpRequest, HttpResponse, QueryParams};
use crate::config::ItGlueConfig;

/// A configured connection to the IT Glue API.
///
/// Every resource operation takes a `&Connection`, so independent
/// connections (different accounts, regions, or test servers) can coexist in
/// one process.
///
/// # Thread Safety
///
/// `Connection` is `Send + Sync` and can be shared across tasks behind an
/// `Arc`. Replacing credentials requires `&mut self`.
///
/// # Example
///
/// ```rust,ignore
/// use itglue::{Connection, ItGlueConfig};
///
/// let connection = Connection::new(ItGlueConfig::from_env()?)?;
///
/// let response = connection.get("/organizations", None).await?;
/// println!("{}", response.body);
/// ```
#[derive(Debug)]
pub struct Connection {
    http_client: HttpClient,
    config: ItGlueConfig,
}

// Verify Connection is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Connection>();
};

impl Connection {
    /// Creates a connection from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionError::Http`] if the HTTP client cannot be built.
    pub fn new(config: ItGlueConfig) -> Result<Self, ConnectionError> {
        let http_client = HttpClient::new(&config)?;

        tracing::debug!(api_url = %config.api_url(), "Created IT Glue connection");

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Creates a connection from the `ITGLUE_API_KEY` and `ITGLUE_API_URL`
    /// environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionError::Configuration`] if a variable is missing or
    /// invalid.
    pub fn from_env() -> Result<Self, ConnectionError> {
        Self::new(ItGlueConfig::from_env()?)
    }

    /// Returns the configuration this connection was built from.
    #[must_use]
    pub const fn config(&self) -> &ItGlueConfig {
        &self.config
    }

    /// Replaces the API key and URL used for subsequent requests.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionError::Http`] if the HTTP client cannot be rebuilt.
    /// The previous configuration stays in place on error.
    pub fn set_credentials(&mut self, config: ItGlueConfig) -> Result<(), ConnectionError> {
        self.http_client = HttpClient::new(&config)?;
        self.config = config;

        tracing::debug!(api_url = %self.config.api_url(), "Replaced IT Glue credentials");
        Ok(())
    }

    /// Sends a GET request.
    ///
    /// `params` are encoded in bracket notation (`filter[name]=Acme`).
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionError::InvalidPath`] for an empty path, and
    /// [`ConnectionError::Http`] for network failures and non-2xx responses.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let params = QueryParams::new().filter("name", "Acme");
    /// let response = connection.get("/organizations", Some(&params)).await?;
    /// ```
    pub async fn get(
        &self,
        path: &str,
        params: Option<&QueryParams>,
    ) -> Result<HttpResponse, ConnectionError> {
        self.make_request(HttpMethod::Get, path, None, params).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub async fn post(&self, path: &str, body: Value) -> Result<HttpResponse, ConnectionError> {
        self.make_request(HttpMethod::Post, path, Some(body), None)
            .await
    }

    /// Sends a PATCH request with a JSON body.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub async fn patch(&self, path: &str, body: Value) -> Result<HttpResponse, ConnectionError> {
        self.make_request(HttpMethod::Patch, path, Some(body), None)
            .await
    }

    /// Sends a DELETE request.
    ///
    /// The returned body is `Value::Null` when the API answers with no content.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub async fn delete(&self, path: &str) -> Result<HttpResponse, ConnectionError> {
        self.make_request(HttpMethod::Delete, path, None, None)
            .await
    }

    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
        params: Option<&QueryParams>,
    ) -> Result<HttpResponse, ConnectionError> {
        let normalized_path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, normalized_path);

        if let Some(body_value) = body {
            builder = builder.body(body_value).body_type(DataType::JsonApi);
        }

        for (key, value) in params.map(QueryParams::to_pairs).unwrap_or_default() {
            builder = builder.query_param(key, value);
        }

        let request = builder.build().map_err(|e| ConnectionError::Http(e.into()))?;

        self.http_client.request(request).await.map_err(Into::into)
    }
}

/// Normalizes an API path.
///
/// Leading and trailing whitespace and trailing `/` are stripped, and the
/// path always starts with a single `/`.
fn normalize_path(path: &str) -> Result<String, ConnectionError> {
    let trimmed = path.trim().trim_start_matches('/').trim_end_matches('/');

    if trimmed.is_empty() {
        return Err(ConnectionError::InvalidPath {
            path: path.to_string(),
        });
    }

    Ok(format!("/{trimmed}"))
}
