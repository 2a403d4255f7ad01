//! Response wrapper for resource operations.
//!
//! [`ResourceResponse<T>`] pairs the parsed resources with the pagination
//! metadata of the HTTP response and implements `Deref<Target = T>`:
//!
//! ```rust,ignore
//! let response = Organization::get(&connection, None).await?;
//!
//! for org in response.iter() {
//!     println!("{org}");
//! }
//!
//! if response.has_next_page() {
//!     let next = QueryParams::new().page_number(response.pagination().next_page.unwrap_or(2));
//!     let page_two = Organization::get_with(&connection, None, &next).await?;
//! }
//! ```

use std::ops::{Deref, DerefMut};

use serde_json::Value;

use crate::clients::{HttpResponse, PaginationInfo};
use crate::rest::{Resource, ResourceError};

/// Resources returned by an operation, plus pagination metadata.
///
/// # Example
///
/// ```rust
/// use itglue::clients::PaginationInfo;
/// use itglue::rest::ResourceResponse;
///
/// let response = ResourceResponse::new(
///     vec!["a", "b"],
///     PaginationInfo { next_page: Some(2), ..PaginationInfo::default() },
/// );
///
/// assert_eq!(response.len(), 2);
/// assert!(response.has_next_page());
/// ```
#[derive(Debug, Clone)]
pub struct ResourceResponse<T> {
    data: T,
    pagination: PaginationInfo,
}

impl<T> ResourceResponse<T> {
    /// Creates a new `ResourceResponse`.
    #[must_use]
    pub const fn new(data: T, pagination: PaginationInfo) -> Self {
        Self { data, pagination }
    }

    /// Consumes the response and returns the inner data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Returns a reference to the inner data.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Returns the pagination metadata reported by the API.
    #[must_use]
    pub const fn pagination(&self) -> &PaginationInfo {
        &self.pagination
    }

    /// Returns `true` if the API reported a following page.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.pagination.has_next_page()
    }

    /// Returns `true` if the API reported a preceding page.
    #[must_use]
    pub const fn has_prev_page(&self) -> bool {
        self.pagination.has_prev_page()
    }

    /// Maps the inner data to a new type, preserving metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ResourceResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ResourceResponse {
            data: f(self.data),
            pagination: self.pagination,
        }
    }
}

impl ResourceResponse<Resource> {
    /// Parses a single-object body (`{"data": {...}}`).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MalformedResponse`] if `data` is missing or
    /// not an object, plus any error from [`Resource::from_json`].
    pub fn from_http_response(
        response: HttpResponse,
        resource_type: &str,
    ) -> Result<Self, ResourceError> {
        let HttpResponse {
            body, pagination, ..
        } = response;

        match body.get("data") {
            Some(data @ Value::Object(_)) => Ok(Self {
                data: Resource::from_json(data, resource_type)?,
                pagination,
            }),
            Some(_) => Err(ResourceError::malformed(
                resource_type,
                "expected 'data' to be an object",
            )),
            None => Err(ResourceError::malformed(resource_type, "missing key 'data'")),
        }
    }
}

impl ResourceResponse<Vec<Resource>> {
    /// Parses a collection body (`{"data": [...]}`), keeping array order.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MalformedResponse`] if `data` is missing or
    /// not an array, plus the first error from [`Resource::from_json`].
    pub fn from_http_response(
        response: HttpResponse,
        resource_type: &str,
    ) -> Result<Self, ResourceError> {
        let HttpResponse {
            body, pagination, ..
        } = response;

        let items = match body.get("data") {
            Some(Value::Array(items)) => items,
            Some(_) => {
                return Err(ResourceError::malformed(
                    resource_type,
                    "expected 'data' to be an array",
                ))
            }
            None => return Err(ResourceError::malformed(resource_type, "missing key 'data'")),
        };

        let data = items
            .iter()
            .map(|item| Resource::from_json(item, resource_type))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { data, pagination })
    }
}

/// Provides transparent access to the inner data.
impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

/// Provides mutable access to the inner data.
impl<T> DerefMut for ResourceResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

// Verify ResourceResponse is Send + Sync when T is Send + Sync
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceResponse<Resource>>();
    assert_send_sync::<ResourceResponse<Vec<Resource>>>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    fn http_response(body: Value) -> HttpResponse {
        HttpResponse::new(200, HashMap::new(), body)
    }

    #[test]
    fn test_single_resource_response() {
        let response = ResourceResponse::<Resource>::from_http_response(
            http_response(json!({"data": {"id": "123", "attributes": {"name": "Acme"}}})),
            "organizations",
        )
        .unwrap();

        assert_eq!(response.id(), Some("123"));
        assert_eq!(response.attr("name"), Some(&json!("Acme")));
    }

    #[test]
    fn test_collection_response_keeps_order() {
        let response = ResourceResponse::<Vec<Resource>>::from_http_response(
            http_response(json!({
                "data": [
                    {"id": "3", "attributes": {}},
                    {"id": "1", "attributes": {}},
                    {"id": "2", "attributes": {}}
                ],
                "meta": {"current-page": 1, "next-page": 2, "total-count": 6}
            })),
            "locations",
        )
        .unwrap();

        let ids: Vec<_> = response.iter().filter_map(Resource::id).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
        assert!(response.has_next_page());
        assert!(!response.has_prev_page());
        assert_eq!(response.pagination().total_count, Some(6));
    }

    #[test]
    fn test_empty_collection() {
        let response = ResourceResponse::<Vec<Resource>>::from_http_response(
            http_response(json!({"data": []})),
            "locations",
        )
        .unwrap();
        assert!(response.is_empty());
    }

    #[test]
    fn test_missing_data_is_malformed() {
        let result = ResourceResponse::<Resource>::from_http_response(
            http_response(json!({"meta": {}})),
            "organizations",
        );
        assert!(matches!(result, Err(ResourceError::MalformedResponse { .. })));
    }

    #[test]
    fn test_collection_rejects_object_data() {
        let result = ResourceResponse::<Vec<Resource>>::from_http_response(
            http_response(json!({"data": {"id": "1", "attributes": {}}})),
            "organizations",
        );
        assert!(matches!(result, Err(ResourceError::MalformedResponse { .. })));
    }

    #[test]
    fn test_single_rejects_array_data() {
        let result = ResourceResponse::<Resource>::from_http_response(
            http_response(json!({"data": []})),
            "organizations",
        );
        assert!(matches!(result, Err(ResourceError::MalformedResponse { .. })));
    }

    #[test]
    fn test_map_and_into_inner() {
        let response = ResourceResponse::new(vec![1, 2, 3], PaginationInfo::default());
        let doubled = response.map(|v| v.into_iter().map(|n| n * 2).collect::<Vec<_>>());
        assert_eq!(doubled.into_inner(), vec![2, 4, 6]);
    }

    #[test]
    fn test_deref_mut() {
        let mut response = ResourceResponse::new(vec![1], PaginationInfo::default());
        response.push(2);
        assert_eq!(response.data(), &vec![1, 2]);
    }
}
