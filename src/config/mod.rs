//! Configuration types for the IT Glue client.
//!
//! # Overview
//!
//! - [`ItGlueConfig`]: the settings a [`Connection`](crate::Connection) is built from
//! - [`ItGlueConfigBuilder`]: a builder for [`ItGlueConfig`]
//! - [`ApiKey`]: a validated API key with masked debug output
//! - [`ApiUrl`]: a validated API base URL
//!
//! Configuration is a plain value. Each connection owns its own copy, so
//! several independently configured clients can live in one process.
//!
//! # Example
//!
//! ```rust
//! use itglue::{ItGlueConfig, ApiKey, ApiUrl};
//!
//! let config = ItGlueConfig::builder()
//!     .api_url(ApiUrl::new("https://api.itglue.com").unwrap())
//!     .api_key(ApiKey::new("ITG.my-key").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiKey, ApiUrl};

use std::env;

use crate::error::ConfigError;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "ITGLUE_API_KEY";

/// Environment variable holding the API base URL.
pub const API_URL_ENV: &str = "ITGLUE_API_URL";

/// Configuration for an IT Glue connection.
///
/// # Thread Safety
///
/// `ItGlueConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct ItGlueConfig {
    api_url: ApiUrl,
    api_key: ApiKey,
    user_agent_prefix: Option<String>,
}

impl ItGlueConfig {
    /// Creates a new builder for constructing an `ItGlueConfig`.
    #[must_use]
    pub fn builder() -> ItGlueConfigBuilder {
        ItGlueConfigBuilder::new()
    }

    /// Loads configuration from the `ITGLUE_API_KEY` and `ITGLUE_API_URL`
    /// environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if a variable is unset or blank,
    /// or the validation error of the corresponding newtype.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = ApiKey::new(required_env(API_KEY_ENV)?)?;
        let api_url = ApiUrl::new(required_env(API_URL_ENV)?)?;

        Ok(Self {
            api_url,
            api_key,
            user_agent_prefix: None,
        })
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn api_url(&self) -> &ApiUrl {
        &self.api_url
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

fn required_env(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::MissingEnvVar { name })
}

// Verify ItGlueConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ItGlueConfig>();
};

/// Builder for constructing [`ItGlueConfig`] instances.
///
/// `api_url` and `api_key` are required.
#[derive(Debug, Default)]
pub struct ItGlueConfigBuilder {
    api_url: Option<ApiUrl>,
    api_key: Option<ApiKey>,
    user_agent_prefix: Option<String>,
}

impl ItGlueConfigBuilder {
    /// Creates a new builder with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL (required).
    #[must_use]
    pub fn api_url(mut self, url: ApiUrl) -> Self {
        self.api_url = Some(url);
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ItGlueConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_url` or `api_key`
    /// is not set.
    pub fn build(self) -> Result<ItGlueConfig, ConfigError> {
        let api_url = self
            .api_url
            .ok_or(ConfigError::MissingRequiredField { field: "api_url" })?;
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(ItGlueConfig {
            api_url,
            api_key,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
