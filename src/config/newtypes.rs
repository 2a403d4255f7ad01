//! Validated newtype wrappers for configuration values.
//!
//! Invalid values are rejected on construction with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated IT Glue API key.
///
/// The key is sent on every request in the `x-api-key` header. Its `Debug`
/// output is masked so it never ends up in logs.
///
/// # Example
///
/// ```rust
/// use itglue::ApiKey;
///
/// let key = ApiKey::new("ITG.abc123").unwrap();
/// assert_eq!(key.as_ref(), "ITG.abc123");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty or blank.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        let key = key.trim();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key.to_string()))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated base URL for the IT Glue API.
///
/// The URL must carry a scheme and a host. A trailing slash is stripped so
/// that request paths (which always start with `/`) can be appended directly.
///
/// # Example
///
/// ```rust
/// use itglue::ApiUrl;
///
/// let url = ApiUrl::new("https://api.eu.itglue.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.eu.itglue.com");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "api.eu.itglue.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl ApiUrl {
    /// Creates a new validated API URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiUrl`] if the scheme or host is missing.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidApiUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidApiUrl { url });
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(ConfigError::InvalidApiUrl { url });
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidApiUrl { url });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_rejects_empty_string() {
        assert!(matches!(ApiKey::new(""), Err(ConfigError::EmptyApiKey)));
        assert!(matches!(ApiKey::new("   "), Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_api_key_trims_whitespace() {
        let key = ApiKey::new("  ITG.key \n").unwrap();
        assert_eq!(key.as_ref(), "ITG.key");
    }

    #[test]
    fn test_api_key_masks_value_in_debug() {
        let key = ApiKey::new("ITG.super-secret").unwrap();
        let debug_output = format!("{key:?}");
        assert_eq!(debug_output, "ApiKey(*****)");
        assert!(!debug_output.contains("super-secret"));
    }

    #[test]
    fn test_api_url_validates_format() {
        let url = ApiUrl::new("https://api.itglue.com").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_name(), "api.itglue.com");

        let url = ApiUrl::new("http://localhost:3000").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), "localhost");

        let url = ApiUrl::new("https://proxy.example.com/itglue").unwrap();
        assert_eq!(url.host_name(), "proxy.example.com");
        assert_eq!(url.as_ref(), "https://proxy.example.com/itglue");
    }

    #[test]
    fn test_api_url_strips_trailing_slash() {
        let url = ApiUrl::new("https://api.itglue.com//").unwrap();
        assert_eq!(url.as_ref(), "https://api.itglue.com");
        assert_eq!(url.to_string(), "https://api.itglue.com");
    }

    #[test]
    fn test_api_url_rejects_invalid() {
        assert!(ApiUrl::new("api.itglue.com").is_err());
        assert!(ApiUrl::new("https://").is_err());
        assert!(ApiUrl::new("://api.itglue.com").is_err());
        assert!(ApiUrl::new("https://:443").is_err());
        assert!(ApiUrl::new("").is_err());
    }
}
