//! The [`Resource`] record type.
//!
//! A `Resource` is one API entity: a JSON:API type, an optional id (absent
//! until the resource is created), an attribute map, and a relationship map.
//! Values are produced by parsing responses or constructed locally before a
//! `create` call; they are never cached.
//!
//! # Attribute Access
//!
//! IT Glue attribute names are hyphenated on the wire (`organization-id`).
//! Keys are stored with underscores (`organization_id`), both when parsed and
//! when set, and every accessor accepts either spelling:
//!
//! ```rust
//! use itglue::rest::Resource;
//! use serde_json::json;
//!
//! let config = Resource::from_json(
//!     &json!({"id": "1", "attributes": {"organization-id": 42, "name": "web01"}}),
//!     "configurations",
//! )
//! .unwrap();
//!
//! assert_eq!(config.attr("organization_id"), Some(&json!(42)));
//! assert_eq!(config.attr_as::<String>("name").as_deref(), Some("web01"));
//! ```

use std::fmt::{self, Display};

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};

use crate::clients::Connection;
use crate::rest::{url_for_type, ResourceError, ResourcePath};

/// A single IT Glue resource.
///
/// Two resources are equal when their type, id and attributes are equal;
/// relationships do not take part in equality.
#[derive(Clone, Debug, Default)]
pub struct Resource {
    resource_type: String,
    id: Option<String>,
    attributes: Map<String, Value>,
    relationships: Map<String, Value>,
}

// Verify Resource is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Resource>();
};

impl Resource {
    /// Creates an unsaved resource with no attributes.
    #[must_use]
    pub fn new(resource_type: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            ..Self::default()
        }
    }

    /// Creates an unsaved resource with the given attributes.
    #[must_use]
    pub fn with_attributes(resource_type: impl Into<String>, attributes: Map<String, Value>) -> Self {
        Self {
            resource_type: resource_type.into(),
            attributes: normalize_keys(attributes),
            ..Self::default()
        }
    }

    /// Parses one JSON:API resource object.
    ///
    /// `id` and an `attributes` object are required. `relationships`
    /// defaults to empty and `type` defaults to `expected_type`. Numeric ids
    /// are stored as their decimal string and attribute keys are rewritten
    /// with underscores.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MalformedResponse`] when `data` is not an
    /// object or lacks `id` or `attributes`, and
    /// [`ResourceError::TypeMismatch`] when `type` names another resource.
    pub fn from_json(data: &Value, expected_type: &str) -> Result<Self, ResourceError> {
        let object = data
            .as_object()
            .ok_or_else(|| ResourceError::malformed(expected_type, "expected a JSON object"))?;

        if let Some(received) = object.get("type") {
            let received = received.as_str().ok_or_else(|| {
                ResourceError::malformed(expected_type, "'type' is not a string")
            })?;
            if url_for_type(received) != url_for_type(expected_type) {
                return Err(ResourceError::TypeMismatch {
                    expected: expected_type.to_string(),
                    received: received.to_string(),
                });
            }
        }

        let id = match object.get("id") {
            Some(Value::String(id)) => id.clone(),
            Some(Value::Number(id)) => id.to_string(),
            Some(_) => {
                return Err(ResourceError::malformed(
                    expected_type,
                    "'id' is not a string or number",
                ))
            }
            None => return Err(ResourceError::malformed(expected_type, "missing key 'id'")),
        };

        let attributes = object
            .get("attributes")
            .and_then(Value::as_object)
            .cloned()
            .map(normalize_keys)
            .ok_or_else(|| ResourceError::malformed(expected_type, "missing key 'attributes'"))?;

        let relationships = object
            .get("relationships")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();

        Ok(Self {
            resource_type: expected_type.to_string(),
            id: Some(id),
            attributes,
            relationships,
        })
    }

    /// Returns the JSON:API type (e.g., `organizations`).
    #[must_use]
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    /// Returns the id, or `None` for a resource that was never saved.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Sets the id.
    pub fn set_id(&mut self, id: impl Display) -> &mut Self {
        self.id = Some(id.to_string());
        self
    }

    /// Returns `true` if the resource has an id.
    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Returns the attribute map.
    #[must_use]
    pub const fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// Returns the relationship map.
    #[must_use]
    pub const fn relationships(&self) -> &Map<String, Value> {
        &self.relationships
    }

    /// Returns an attribute, matching `_` and `-` interchangeably.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&Value> {
        self.attributes.get(&attribute_key(name))
    }

    /// Returns an attribute deserialized as `T`.
    ///
    /// Returns `None` when the attribute is absent or has another shape.
    #[must_use]
    pub fn attr_as<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        self.attr(name)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    /// Sets one attribute, replacing any previous value under either
    /// spelling of the key.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        let name: String = name.into();
        self.attributes.insert(attribute_key(&name), value.into());
        self
    }

    /// Sets several attributes at once.
    pub fn set_attributes<I, K, V>(&mut self, attributes: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        for (name, value) in attributes {
            self.set_attr(name, value);
        }
        self
    }

    /// Returns the `created-at` timestamp, if present and valid RFC 3339.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp("created_at")
    }

    /// Returns the `updated-at` timestamp, if present and valid RFC 3339.
    #[must_use]
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp("updated_at")
    }

    fn timestamp(&self, name: &str) -> Option<DateTime<Utc>> {
        self.attr(name)
            .and_then(Value::as_str)
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Renders the JSON:API payload: `{type, attributes}` plus `id` once
    /// persisted.
    #[must_use]
    pub fn payload(&self) -> Value {
        let mut payload = Map::new();
        payload.insert("type".to_string(), Value::String(self.resource_type.clone()));
        payload.insert(
            "attributes".to_string(),
            Value::Object(self.attributes.clone()),
        );
        if let Some(id) = &self.id {
            payload.insert("id".to_string(), Value::String(id.clone()));
        }
        Value::Object(payload)
    }

    /// Creates the resource with a POST and reloads it from the response.
    ///
    /// `relationships` are sent as `relationships.<name>.data`, each entry
    /// rendered with [`payload`](Self::payload).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::AlreadyPersisted`] if the resource has an id,
    /// [`ResourceError::InvalidParent`] for a parent without id, and any
    /// HTTP or parse error from the request.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut config = Configuration::new_resource();
    /// config.set_attr("name", "web01");
    /// config.create(&connection, Some(&org), &[]).await?;
    /// assert!(config.is_persisted());
    /// ```
    pub async fn create(
        &mut self,
        connection: &Connection,
        parent: Option<&Self>,
        relationships: &[(&str, &[Self])],
    ) -> Result<&mut Self, ResourceError> {
        if let Some(id) = &self.id {
            return Err(ResourceError::AlreadyPersisted {
                resource_type: self.resource_type.clone(),
                id: id.clone(),
            });
        }

        let path = ResourcePath::new(&self.resource_type).scoped(parent)?.build();

        let mut payload = self.payload();
        if !relationships.is_empty() {
            let rel_payload: Map<String, Value> = relationships
                .iter()
                .map(|(name, items)| {
                    let data: Vec<Value> = items.iter().map(Self::payload).collect();
                    ((*name).to_string(), json!({ "data": data }))
                })
                .collect();
            payload["relationships"] = Value::Object(rel_payload);
        }

        tracing::debug!(resource_type = %self.resource_type, path = %path, "Creating resource");

        let response = connection
            .post(&path, json!({ "data": payload }))
            .await
            .map_err(|e| ResourceError::from_request(e, &self.resource_type, &path))?;
        self.reload(&response.body)?;
        Ok(self)
    }

    /// Updates the resource with a PATCH and reloads it from the response.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotPersisted`] if the resource has no id,
    /// [`ResourceError::NotFound`] if the API answers 404, and any other HTTP
    /// or parse error from the request.
    pub async fn update(
        &mut self,
        connection: &Connection,
        parent: Option<&Self>,
    ) -> Result<&mut Self, ResourceError> {
        let Some(id) = self.id.clone() else {
            return Err(ResourceError::NotPersisted {
                resource_type: self.resource_type.clone(),
            });
        };

        let path = ResourcePath::new(&self.resource_type)
            .scoped(parent)?
            .id(&id)
            .build();

        tracing::debug!(resource_type = %self.resource_type, id = %id, "Updating resource");

        let response = connection
            .patch(&path, json!({ "data": self.payload() }))
            .await
            .map_err(|e| ResourceError::from_request(e, &self.resource_type, &path))?;
        self.reload(&response.body)?;
        Ok(self)
    }

    /// Updates the resource when it has an id, creates it otherwise.
    ///
    /// # Errors
    ///
    /// Same as [`create`](Self::create) and [`update`](Self::update).
    pub async fn save(
        &mut self,
        connection: &Connection,
        parent: Option<&Self>,
    ) -> Result<&mut Self, ResourceError> {
        if self.is_persisted() {
            self.update(connection, parent).await
        } else {
            self.create(connection, parent, &[]).await
        }
    }

    fn reload(&mut self, body: &Value) -> Result<(), ResourceError> {
        let data = body
            .get("data")
            .ok_or_else(|| ResourceError::malformed(&self.resource_type, "missing key 'data'"))?;
        let loaded = Self::from_json(data, &self.resource_type)?;

        self.id = loaded.id;
        self.attributes = loaded.attributes;
        self.relationships = loaded.relationships;
        Ok(())
    }
}

fn attribute_key(name: &str) -> String {
    name.replace('-', "_")
}

fn normalize_keys(attributes: Map<String, Value>) -> Map<String, Value> {
    attributes
        .into_iter()
        .map(|(key, value)| (attribute_key(&key), value))
        .collect()
}

impl PartialEq for Resource {
    fn eq(&self, other: &Self) -> bool {
        self.resource_type == other.resource_type
            && self.id == other.id
            && self.attributes == other.attributes
    }
}

impl Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{} id: {}, attributes: {}>",
            self.resource_type,
            self.id.as_deref().unwrap_or("None"),
            Value::Object(self.attributes.clone())
        )
    }
}
