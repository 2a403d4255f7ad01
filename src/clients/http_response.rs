//! HTTP response types.
//!
//! This module provides the [`HttpResponse`] type and the JSON:API
//! pagination metadata parsed from response bodies.

use std::collections::HashMap;

use serde_json::Value;

/// Pagination metadata from a JSON:API collection response.
///
/// IT Glue reports page numbers under `meta` and page URLs under `links`.
/// The client never follows these on its own; they are exposed so callers
/// can request further pages explicitly.
///
/// # Example
///
/// ```rust
/// use itglue::clients::PaginationInfo;
/// use serde_json::json;
///
/// let info = PaginationInfo::from_body(&json!({
///     "data": [],
///     "meta": {"current-page": 1, "next-page": 2, "total-pages": 4, "total-count": 200},
///     "links": {"next": "https://api.itglue.com/organizations?page%5Bnumber%5D=2"}
/// }));
///
/// assert_eq!(info.next_page, Some(2));
/// assert_eq!(info.total_count, Some(200));
/// assert!(info.has_next_page());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaginationInfo {
    /// The page this response represents.
    pub current_page: Option<u64>,
    /// The next page number, if any.
    pub next_page: Option<u64>,
    /// The previous page number, if any.
    pub prev_page: Option<u64>,
    /// Total number of pages.
    pub total_pages: Option<u64>,
    /// Total number of records across all pages.
    pub total_count: Option<u64>,
    /// Absolute URL of the next page.
    pub next_link: Option<String>,
    /// Absolute URL of the previous page.
    pub prev_link: Option<String>,
}

impl PaginationInfo {
    /// Parses pagination metadata from a response body.
    ///
    /// Missing or malformed fields are left as `None`.
    #[must_use]
    pub fn from_body(body: &Value) -> Self {
        let meta = body.get("meta");
        let links = body.get("links");

        let meta_number = |key: &str| meta.and_then(|m| m.get(key)).and_then(as_page_number);
        let link = |key: &str| {
            links
                .and_then(|l| l.get(key))
                .and_then(Value::as_str)
                .map(ToString::to_string)
        };

        Self {
            current_page: meta_number("current-page"),
            next_page: meta_number("next-page"),
            prev_page: meta_number("prev-page"),
            total_pages: meta_number("total-pages"),
            total_count: meta_number("total-count"),
            next_link: link("next"),
            prev_link: link("prev"),
        }
    }

    /// Returns `true` if the API reported a following page.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.next_page.is_some() || self.next_link.is_some()
    }

    /// Returns `true` if the API reported a preceding page.
    #[must_use]
    pub const fn has_prev_page(&self) -> bool {
        self.prev_page.is_some() || self.prev_link.is_some()
    }
}

// Page numbers arrive as numbers, numeric strings, or null.
fn as_page_number(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// An HTTP response from the IT Glue API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body; `Value::Null` when the body was empty.
    pub body: Value,
    /// Pagination metadata parsed from the body.
    pub pagination: PaginationInfo,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing pagination metadata from the body.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: Value) -> Self {
        let pagination = PaginationInfo::from_body(&body);
        Self {
            code,
            headers,
            body,
            pagination,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the JSON:API `data` member of the body, if present.
    #[must_use]
    pub fn data(&self) -> Option<&Value> {
        self.body.get("data")
    }

    /// Consumes the response and returns the parsed body.
    #[must_use]
    pub fn into_body(self) -> Value {
        self.body
    }
}
