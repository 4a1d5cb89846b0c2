use crate::error::{RafflekitError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Local image used when an object carries no usable image reference.
pub const PLACEHOLDER_IMAGE: &str = "/images/nft-placeholder.png";

/// Content kind the RPC reports for structured Move objects.
pub const MOVE_OBJECT_KIND: &str = "moveObject";

/// Display metadata attached to an object for UI rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayMetadata(BTreeMap<String, String>);

impl DisplayMetadata {
    pub fn new(entries: BTreeMap<String, String>) -> Self {
        Self(entries)
    }

    /// Non-empty value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    // the RPC nests the map under `data`; non-string values are dropped
    fn from_value(value: &Value) -> Option<Self> {
        let data = value.get("data").unwrap_or(value).as_object()?;
        let entries = data
            .iter()
            .filter_map(|(key, value)| value.as_str().map(|s| (key.clone(), s.to_string())))
            .collect();
        Some(Self(entries))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DisplayMetadata {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// Raw field set of a Move object as stored on-chain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredFields(Map<String, Value>);

impl StructuredFields {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Whether `key` is present with a non-null value.
    pub fn contains(&self, key: &str) -> bool {
        self.0.get(key).is_some_and(|value| !value.is_null())
    }

    /// Text value of `key`.
    ///
    /// Plain strings are returned as-is. Wrapper structs such as `Url` or
    /// `String` arrive as `{ "type": .., "fields": { "url": .. } }`; the first
    /// string found under `url`, `name` or `value` of the nested map is used.
    /// Empty strings count as absent.
    pub fn text(&self, key: &str) -> Option<&str> {
        let value = self.0.get(key)?;
        let text = match value {
            Value::String(s) => Some(s.as_str()),
            Value::Object(inner) => inner.get("fields").and_then(|nested| {
                ["url", "name", "value"]
                    .iter()
                    .find_map(|k| nested.get(*k).and_then(Value::as_str))
            }),
            _ => None,
        };
        text.filter(|s| !s.is_empty())
    }
}

impl From<Value> for StructuredFields {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ObjectContent {
    MoveObject { fields: StructuredFields },
    Package,
}

impl ObjectContent {
    pub fn fields(&self) -> Option<&StructuredFields> {
        match self {
            ObjectContent::MoveObject { fields } => Some(fields),
            ObjectContent::Package => None,
        }
    }

    fn from_value(value: &Value) -> Option<Self> {
        let kind = value.get("dataType").and_then(Value::as_str)?;
        if kind == MOVE_OBJECT_KIND {
            let fields = value.get("fields").cloned().unwrap_or(Value::Null);
            Some(ObjectContent::MoveObject {
                fields: fields.into(),
            })
        } else {
            Some(ObjectContent::Package)
        }
    }
}

/// One object as returned by an owned-objects query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawObject {
    pub id: String,
    pub type_tag: Option<String>,
    pub display: Option<DisplayMetadata>,
    pub content: Option<ObjectContent>,
}

impl RawObject {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_type(mut self, type_tag: impl Into<String>) -> Self {
        self.type_tag = Some(type_tag.into());
        self
    }

    pub fn with_display(mut self, display: DisplayMetadata) -> Self {
        self.display = Some(display);
        self
    }

    pub fn with_fields(mut self, fields: Value) -> Self {
        self.content = Some(ObjectContent::MoveObject {
            fields: fields.into(),
        });
        self
    }

    /// Build from one entry of an owned-objects response.
    ///
    /// Accepts both the `{ "data": { .. } }` envelope and a bare object
    /// record. An entry that is not an object, or that reports an `error`
    /// without `data`, is malformed.
    pub fn from_response(entry: &Value) -> Result<Self> {
        let envelope = entry
            .as_object()
            .ok_or_else(|| RafflekitError::malformed("response entry is not an object"))?;

        let data = match envelope.get("data") {
            Some(data) if !data.is_null() => data,
            _ if envelope.contains_key("error") => {
                return Err(RafflekitError::malformed(format!(
                    "upstream reported {}",
                    envelope["error"]
                )))
            }
            _ => entry,
        };

        let data = data
            .as_object()
            .ok_or_else(|| RafflekitError::malformed("object data is not a map"))?;

        let id = data
            .get("objectId")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let content = data.get("content").and_then(ObjectContent::from_value);

        // older nodes only report the type inside `content`
        let type_tag = data
            .get("type")
            .or_else(|| data.get("content").and_then(|c| c.get("type")))
            .and_then(Value::as_str)
            .map(str::to_string);

        let display = data.get("display").and_then(DisplayMetadata::from_value);

        Ok(Self {
            id,
            type_tag,
            display,
            content,
        })
    }

    pub fn fields(&self) -> Option<&StructuredFields> {
        self.content.as_ref().and_then(ObjectContent::fields)
    }

    /// Address segment of the type, before the first `::`.
    pub fn origin_tag(&self) -> &str {
        match &self.type_tag {
            Some(type_tag) => type_tag.split("::").next().unwrap_or_default(),
            None => "",
        }
    }

    /// Struct name of the type with generic arguments removed.
    pub fn struct_name(&self) -> Option<&str> {
        let type_tag = self.type_tag.as_deref()?;
        let base = type_tag.split('<').next().unwrap_or(type_tag);
        base.rsplit("::")
            .next()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// Display-ready view of a detected collectible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedAsset {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image_ref: String,
    pub collection_label: Option<String>,
    pub origin_tag: String,
}

impl NormalizedAsset {
    pub fn has_placeholder_image(&self) -> bool {
        self.image_ref == PLACEHOLDER_IMAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_response_envelope() {
        let entry = json!({
            "data": {
                "objectId": "0x42",
                "type": "0xabc::nft::NFT",
                "display": { "data": { "name": "Cool Cat", "rank": 7 }, "error": null },
                "content": {
                    "dataType": "moveObject",
                    "type": "0xabc::nft::NFT",
                    "fields": { "name": "Cool Cat" }
                }
            }
        });

        let object = RawObject::from_response(&entry).unwrap();
        assert_eq!(object.id, "0x42");
        assert_eq!(object.type_tag.as_deref(), Some("0xabc::nft::NFT"));

        let display = object.display.as_ref().unwrap();
        assert_eq!(display.get("name"), Some("Cool Cat"));
        assert_eq!(display.get("rank"), None);
        assert!(object.fields().unwrap().contains("name"));
    }

    #[test]
    fn test_from_response_rejects_malformed() {
        assert!(RawObject::from_response(&json!("0x42")).is_err());
        assert!(RawObject::from_response(&json!({ "error": { "code": "notExists" } })).is_err());
        assert!(RawObject::from_response(&json!({ "data": 5 })).is_err());
    }

    #[test]
    fn test_type_falls_back_to_content() {
        let entry = json!({
            "data": {
                "objectId": "0x1",
                "content": { "dataType": "moveObject", "type": "0x9::card::Card", "fields": {} }
            }
        });
        let object = RawObject::from_response(&entry).unwrap();
        assert_eq!(object.type_tag.as_deref(), Some("0x9::card::Card"));
    }

    #[test]
    fn test_package_content_has_no_fields() {
        let entry = json!({
            "data": { "objectId": "0x1", "content": { "dataType": "package", "disassembled": {} } }
        });
        let object = RawObject::from_response(&entry).unwrap();
        assert_eq!(object.content, Some(ObjectContent::Package));
        assert!(object.fields().is_none());
    }

    #[test]
    fn test_nested_field_text() {
        let fields = StructuredFields::from(json!({
            "url": { "type": "0x2::url::Url", "fields": { "url": "https://img" } },
            "name": "",
            "level": 3
        }));
        assert_eq!(fields.text("url"), Some("https://img"));
        assert_eq!(fields.text("name"), None);
        assert_eq!(fields.text("level"), None);
        assert!(fields.contains("name"));
    }

    #[test]
    fn test_type_segments() {
        let object = RawObject::new("0x1").with_type("0xABC::nft::NFT<0x2::sui::SUI>");
        assert_eq!(object.origin_tag(), "0xABC");
        assert_eq!(object.struct_name(), Some("NFT"));

        let untyped = RawObject::new("0x1");
        assert_eq!(untyped.origin_tag(), "");
        assert_eq!(untyped.struct_name(), None);
    }
}
