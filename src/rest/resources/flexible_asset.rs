//! Flexible asset resources and trait helpers.
//!
//! Flexible assets are user-defined records. A [`FlexibleAssetType`] declares
//! the schema, its [`FlexibleAssetField`]s declare the traits, and each
//! [`FlexibleAsset`] carries a `traits` attribute keyed by field name.
//!
//! Traits read from the API are not in the shape the API accepts on write:
//! ids come back as numbers and tag fields come back as objects. Use
//! [`normalize_ids`] and [`prepare_tag_traits`] before sending them back.
//!
//! ```rust
//! use itglue::rest::resources::{normalize_ids, prepare_tag_traits};
//! use serde_json::json;
//!
//! let traits = json!({
//!     "organization_id": 12,
//!     "servers": {"type": "Configurations", "values": [{"id": 7, "name": "web01"}]}
//! });
//!
//! let prepared = prepare_tag_traits(&normalize_ids(traits.as_object().unwrap(), false));
//! assert_eq!(prepared["organization_id"], json!("12"));
//! assert_eq!(prepared["servers"], json!(["7"]));
//! ```

use serde_json::{Map, Value};

use crate::rest::ResourceKind;

/// A flexible asset record (`/flexible_assets`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlexibleAsset;

impl ResourceKind for FlexibleAsset {
    const NAME: &'static str = "FlexibleAsset";
    const TYPE: &'static str = "flexible_assets";
}

/// A flexible asset schema (`/flexible_asset_types`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlexibleAssetType;

impl ResourceKind for FlexibleAssetType {
    const NAME: &'static str = "FlexibleAssetType";
    const TYPE: &'static str = "flexible_asset_types";
}

/// A field of a flexible asset schema (`/flexible_asset_fields`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlexibleAssetField;

impl ResourceKind for FlexibleAssetField {
    const NAME: &'static str = "FlexibleAssetField";
    const TYPE: &'static str = "flexible_asset_fields";
}

/// Returns a copy of `map` where non-null values of keys ending in `_id` are
/// strings.
///
/// Numbers and booleans are rendered as text; strings are kept. With
/// `recurse`, nested objects under other keys are processed the same way.
#[must_use]
pub fn normalize_ids(map: &Map<String, Value>, recurse: bool) -> Map<String, Value> {
    map.iter()
        .map(|(key, value)| {
            let normalized = match value {
                Value::Null => Value::Null,
                Value::String(_) if key.ends_with("_id") => value.clone(),
                other if key.ends_with("_id") => Value::String(other.to_string()),
                Value::Object(inner) if recurse => Value::Object(normalize_ids(inner, true)),
                other => other.clone(),
            };
            (key.clone(), normalized)
        })
        .collect()
}

/// Returns a copy of `traits` with tag fields reduced to their id lists.
///
/// A tag field is an object with a `values` array; it becomes the array of
/// its entries' `id`s as strings, skipping entries without an id. All other
/// traits are copied unchanged.
#[must_use]
pub fn prepare_tag_traits(traits: &Map<String, Value>) -> Map<String, Value> {
    traits
        .iter()
        .map(|(key, value)| {
            let prepared = match value.get("values").and_then(Value::as_array) {
                Some(tags) => Value::Array(
                    tags.iter()
                        .filter_map(|tag| tag.get("id"))
                        .filter(|id| !id.is_null())
                        .map(|id| match id {
                            Value::String(s) => Value::String(s.clone()),
                            other => Value::String(other.to_string()),
                        })
                        .collect(),
                ),
                _ => value.clone(),
            };
            (key.clone(), prepared)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_normalize_ids_converts_numbers() {
        let map = as_map(json!({"organization_id": 12, "name": "Backup", "count": 3}));
        let normalized = normalize_ids(&map, false);

        assert_eq!(normalized["organization_id"], json!("12"));
        assert_eq!(normalized["name"], json!("Backup"));
        assert_eq!(normalized["count"], json!(3));
    }

    #[test]
    fn test_normalize_ids_keeps_nulls_and_strings() {
        let map = as_map(json!({"location_id": null, "contact_id": "44"}));
        let normalized = normalize_ids(&map, false);

        assert_eq!(normalized["location_id"], Value::Null);
        assert_eq!(normalized["contact_id"], json!("44"));
    }

    #[test]
    fn test_normalize_ids_recurse() {
        let map = as_map(json!({"traits": {"configuration_id": 9}}));

        let shallow = normalize_ids(&map, false);
        assert_eq!(shallow["traits"]["configuration_id"], json!(9));

        let deep = normalize_ids(&map, true);
        assert_eq!(deep["traits"]["configuration_id"], json!("9"));
    }

    #[test]
    fn test_normalize_ids_leaves_input_untouched() {
        let map = as_map(json!({"organization_id": 1}));
        let _ = normalize_ids(&map, false);
        assert_eq!(map["organization_id"], json!(1));
    }

    #[test]
    fn test_prepare_tag_traits_reduces_tags_to_ids() {
        let traits = as_map(json!({
            "servers": {
                "type": "Configurations",
                "values": [{"id": 7, "name": "web01"}, {"name": "no id"}, {"id": "8"}]
            },
            "notes": "plain text",
            "ports": [80, 443]
        }));

        let prepared = prepare_tag_traits(&traits);

        assert_eq!(prepared["servers"], json!(["7", "8"]));
        assert_eq!(prepared["notes"], json!("plain text"));
        assert_eq!(prepared["ports"], json!([80, 443]));
    }

    #[test]
    fn test_prepare_tag_traits_keeps_objects_without_values() {
        let traits = as_map(json!({"settings": {"enabled": true}}));
        assert_eq!(prepare_tag_traits(&traits)["settings"], json!({"enabled": true}));
    }
}
