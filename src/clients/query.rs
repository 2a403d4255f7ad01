//! Query parameter encoding.
//!
//! IT Glue expects nested parameters in bracket notation:
//! `filter[name]=Acme&page[size]=50`. [`QueryParams`] holds a nested map and
//! flattens it into ordered key/value pairs.
//!
//! Encoding rules:
//! - nested objects extend the key as `outer[inner]`
//! - arrays are joined with commas (`filter[id]=1,2,3`)
//! - null, empty strings, empty arrays and empty objects are dropped
//!
//! Keys are emitted in sorted order, so the same parameters always produce
//! the same query string.

use serde_json::{Map, Value};

/// A nested set of query parameters.
///
/// # Example
///
/// ```rust
/// use itglue::clients::QueryParams;
///
/// let params = QueryParams::new()
///     .filter("name", "Acme")
///     .filter("organization_type_id", 12)
///     .page_size(50)
///     .sort("-updated_at");
///
/// assert_eq!(
///     params.to_query_string(),
///     "filter[name]=Acme&filter[organization_type_id]=12&page[size]=50&sort=-updated_at"
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryParams {
    params: Map<String, Value>,
}

impl QueryParams {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a top-level parameter, replacing any previous value.
    ///
    /// Objects are encoded with bracket notation.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Adds `filter[<key>]=<value>`.
    #[must_use]
    pub fn filter(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.nested("filter", key, value)
    }

    /// Adds every pair as a `filter[<key>]` parameter.
    #[must_use]
    pub fn filters<I, K, V>(self, filters: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        filters
            .into_iter()
            .fold(self, |params, (key, value)| params.filter(key, value))
    }

    /// Sets `page[number]`.
    #[must_use]
    pub fn page_number(self, number: u64) -> Self {
        self.nested("page", "number", number)
    }

    /// Sets `page[size]`.
    #[must_use]
    pub fn page_size(self, size: u64) -> Self {
        self.nested("page", "size", size)
    }

    /// Sets the `sort` parameter (prefix with `-` for descending).
    #[must_use]
    pub fn sort(self, field: impl Into<String>) -> Self {
        self.param("sort", field.into())
    }

    /// Sets the `include` parameter for related resources.
    #[must_use]
    pub fn include(self, relationships: impl Into<String>) -> Self {
        self.param("include", relationships.into())
    }

    fn nested(mut self, namespace: &str, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let entry = self
            .params
            .entry(namespace)
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        if let Value::Object(map) = entry {
            map.insert(key.into(), value.into());
        }
        self
    }

    /// Returns `true` if at least one non-empty `filter[...]` value is set.
    #[must_use]
    pub fn has_filters(&self) -> bool {
        self.params
            .get("filter")
            .and_then(Value::as_object)
            .is_some_and(|filters| filters.values().any(|v| !is_blank(v)))
    }

    /// Returns `true` if no parameter would be emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_pairs().is_empty()
    }

    /// Flattens the parameters into ordered, unencoded key/value pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        flatten(&self.params, None, &mut pairs);
        pairs
    }

    /// Renders the parameters as a query string.
    ///
    /// Values are percent-encoded; bracketed keys are left readable.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.to_pairs()
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl From<Map<String, Value>> for QueryParams {
    fn from(params: Map<String, Value>) -> Self {
        Self { params }
    }
}

fn flatten(map: &Map<String, Value>, namespace: Option<&str>, pairs: &mut Vec<(String, String)>) {
    for (key, value) in map {
        if is_blank(value) {
            continue;
        }
        let name = namespace.map_or_else(|| key.clone(), |ns| format!("{ns}[{key}]"));
        match value {
            Value::Object(inner) => flatten(inner, Some(&name), pairs),
            Value::Array(items) => {
                let joined = items
                    .iter()
                    .filter(|item| !is_blank(item))
                    .map(scalar_to_string)
                    .collect::<Vec<_>>()
                    .join(",");
                pairs.push((name, joined));
            }
            scalar => pairs.push((name, scalar_to_string(scalar))),
        }
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.iter().all(is_blank),
        Value::Object(map) => map.values().all(is_blank),
        Value::Bool(_) | Value::Number(_) => false,
    }
}
