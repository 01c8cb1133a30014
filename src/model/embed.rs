//! Embed elements: caller-defined payloads keyed by a node type/id pair.

use super::Node;
use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Opaque embed payload: every key besides the embed identity fields.
pub type EmbedPayload = Map<String, Value>;

/// `nodeType` of embeds that point at media assets.
pub const ASSET_NODE_TYPE: &str = "Asset";

/// Keys an embed element owns; they never live in the payload.
pub const RESERVED_EMBED_KEYS: [&str; 5] = ["type", "children", "nodeId", "nodeType", "isInline"];

fn is_reserved_key(key: &str) -> bool {
    RESERVED_EMBED_KEYS.contains(&key)
}

/// Identity fields of an embed plus a caller-defined payload.
///
/// `node_id` and `node_type` are required whatever `T` is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedProps<T = EmbedPayload> {
    /// Identifier of the embedded node in the content source
    pub node_id: String,
    /// Model name of the embedded node
    pub node_type: String,
    /// Whether the embed sits inline within text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_inline: Option<bool>,
    #[serde(flatten)]
    pub payload: T,
}

impl EmbedProps {
    /// Creates embed props with an empty payload.
    pub fn new(node_id: impl Into<String>, node_type: impl Into<String>) -> Self {
        Self {
            node_id: node_id.into(),
            node_type: node_type.into(),
            is_inline: None,
            payload: EmbedPayload::new(),
        }
    }
}

impl<T> EmbedProps<T> {
    /// Classifies the embed by its node type.
    pub fn kind(&self) -> EmbedKind {
        EmbedKind::from_node_type(&self.node_type)
    }

    /// Returns true if the embed is inline (absent means block).
    pub fn is_inline(&self) -> bool {
        self.is_inline.unwrap_or(false)
    }
}

/// Known embed kinds, with a fallback for caller-defined models.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EmbedKind {
    /// A media asset, rendered through the asset renderer table
    Asset,
    /// Any other model, keyed by its node type
    Model(String),
}

impl EmbedKind {
    /// Maps a `nodeType` to its embed kind.
    pub fn from_node_type(node_type: &str) -> Self {
        if node_type == ASSET_NODE_TYPE {
            EmbedKind::Asset
        } else {
            EmbedKind::Model(node_type.to_string())
        }
    }
}

/// An `embed` element.
///
/// Payload entries under a reserved key are dropped on decode and skipped
/// on encode, so the identity fields are written exactly once.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbedElement {
    pub props: EmbedProps,
    pub children: Vec<Node>,
}

#[derive(Deserialize)]
struct EmbedBody {
    #[serde(flatten)]
    props: EmbedProps,
    children: Vec<Node>,
}

impl<'de> Deserialize<'de> for EmbedElement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let EmbedBody {
            mut props,
            children,
        } = EmbedBody::deserialize(deserializer)?;
        props.payload.retain(|key, _| !is_reserved_key(key));
        Ok(Self { props, children })
    }
}

impl Serialize for EmbedElement {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("nodeId", &self.props.node_id)?;
        map.serialize_entry("nodeType", &self.props.node_type)?;
        if let Some(is_inline) = self.props.is_inline {
            map.serialize_entry("isInline", &is_inline)?;
        }
        for (key, value) in &self.props.payload {
            if !is_reserved_key(key) {
                map.serialize_entry(key, value)?;
            }
        }
        map.serialize_entry("children", &self.children)?;
        map.end()
    }
}

impl EmbedElement {
    /// Creates an embed with an empty payload and no children.
    pub fn new(node_id: impl Into<String>, node_type: impl Into<String>) -> Self {
        Self {
            props: EmbedProps::new(node_id, node_type),
            children: Vec::new(),
        }
    }

    /// Returns the id of the embedded node.
    pub fn node_id(&self) -> &str {
        &self.props.node_id
    }

    /// Returns the model name of the embedded node.
    pub fn node_type(&self) -> &str {
        &self.props.node_type
    }

    /// Classifies the embed by its node type.
    pub fn kind(&self) -> EmbedKind {
        self.props.kind()
    }

    /// Returns true if the embed is inline.
    pub fn is_inline(&self) -> bool {
        self.props.is_inline()
    }

    /// Decodes the opaque payload into a caller-defined type.
    pub fn payload_as<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(Value::Object(
            self.props.payload.clone(),
        ))?)
    }

    /// Returns the embed props with the payload decoded into `T`.
    pub fn props_as<T: DeserializeOwned>(&self) -> Result<EmbedProps<T>> {
        Ok(EmbedProps {
            node_id: self.props.node_id.clone(),
            node_type: self.props.node_type.clone(),
            is_inline: self.props.is_inline,
            payload: self.payload_as()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::ElementNode;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct PostCard {
        title: String,
        read_minutes: u32,
    }

    fn embed(value: Value) -> EmbedElement {
        match ElementNode::from_value(value).unwrap() {
            ElementNode::Embed(embed) => embed,
            other => panic!("Expected embed element, got {other:?}"),
        }
    }

    #[test]
    fn test_embed_identity_and_payload() {
        let element = embed(json!({
            "type": "embed",
            "nodeId": "ckx1",
            "nodeType": "Post",
            "isInline": true,
            "title": "Hello",
            "readMinutes": 4,
            "children": [{"text": ""}]
        }));

        assert_eq!(element.node_id(), "ckx1");
        assert_eq!(element.node_type(), "Post");
        assert!(element.is_inline());
        assert_eq!(element.kind(), EmbedKind::Model("Post".to_string()));
        assert_eq!(element.props.payload.len(), 2);
        assert!(!element.props.payload.contains_key("type"));
        assert!(!element.props.payload.contains_key("children"));

        let card: PostCard = element.payload_as().unwrap();
        assert_eq!(
            card,
            PostCard {
                title: "Hello".to_string(),
                read_minutes: 4
            }
        );

        let typed = element.props_as::<PostCard>().unwrap();
        assert_eq!(typed.node_id, "ckx1");
        assert_eq!(typed.payload.read_minutes, 4);
    }

    #[test]
    fn test_asset_kind() {
        let element = embed(json!({
            "type": "embed",
            "nodeId": "a1",
            "nodeType": "Asset",
            "children": []
        }));
        assert_eq!(element.kind(), EmbedKind::Asset);
        assert!(!element.is_inline());
    }

    #[test]
    fn test_identity_fields_required() {
        let missing_id = ElementNode::from_value(json!({
            "type": "embed",
            "nodeType": "Post",
            "children": []
        }));
        assert!(matches!(missing_id, Err(Error::Json(_))));

        let missing_type = ElementNode::from_value(json!({
            "type": "embed",
            "nodeId": "x",
            "children": []
        }));
        assert!(matches!(missing_type, Err(Error::Json(_))));

        let typed: std::result::Result<EmbedProps<PostCard>, _> =
            serde_json::from_value(json!({"title": "t", "readMinutes": 1}));
        assert!(typed.is_err());
    }

    #[test]
    fn test_payload_mismatch_is_error() {
        let element = embed(json!({
            "type": "embed",
            "nodeId": "x",
            "nodeType": "Post",
            "children": []
        }));
        assert!(matches!(element.payload_as::<PostCard>(), Err(Error::Json(_))));
    }

    #[test]
    fn test_embed_serializes_flat() {
        let mut element = EmbedElement::new("n1", "Quote");
        element
            .props
            .payload
            .insert("author".to_string(), json!("Ada"));
        let value = serde_json::to_value(ElementNode::Embed(element)).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "embed",
                "nodeId": "n1",
                "nodeType": "Quote",
                "author": "Ada",
                "children": []
            })
        );
    }

    #[test]
    fn test_direct_decode_round_trips_once() {
        let source = json!({
            "type": "embed",
            "nodeId": "1",
            "nodeType": "P",
            "title": "kept",
            "children": []
        });
        let element: EmbedElement = serde_json::from_value(source.clone()).unwrap();
        assert!(!element.props.payload.contains_key("type"));
        assert_eq!(element.props.payload.len(), 1);

        let encoded = serde_json::to_string(&ElementNode::Embed(element)).unwrap();
        assert_eq!(encoded.matches("\"type\"").count(), 1);
        let decoded: Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, source);
    }

    #[test]
    fn test_reserved_payload_keys_not_written() {
        let mut element = EmbedElement::new("n1", "Quote");
        for key in RESERVED_EMBED_KEYS {
            element.props.payload.insert(key.to_string(), json!("x"));
        }
        element.props.payload.insert("author".to_string(), json!("Ada"));

        let encoded = serde_json::to_string(&ElementNode::Embed(element)).unwrap();
        for key in RESERVED_EMBED_KEYS {
            assert_eq!(encoded.matches(&format!("\"{key}\"")).count(), usize::from(key != "isInline"));
        }

        let decoded: Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(
            decoded,
            json!({
                "type": "embed",
                "nodeId": "n1",
                "nodeType": "Quote",
                "author": "Ada",
                "children": []
            })
        );
    }
}
