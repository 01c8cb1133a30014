//! Out-of-tree resources that embed elements point at by id.

use super::AssetMimeType;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A resolved record for an embedded node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    pub id: String,
    /// Any further fields of the record
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Reference {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: Map::new(),
        }
    }

    /// Adds a field to the record.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

/// A resolved media asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetReference {
    pub id: String,
    pub mime_type: AssetMimeType,
    /// Any further fields of the asset (url, size, dimensions...)
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl AssetReference {
    pub fn new(id: impl Into<String>, mime_type: impl Into<AssetMimeType>) -> Self {
        Self {
            id: id.into(),
            mime_type: mime_type.into(),
            fields: Map::new(),
        }
    }

    /// Adds a field to the record.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// The asset `url` field, when present as a string.
    pub fn url(&self) -> Option<&str> {
        self.fields.get("url").and_then(Value::as_str)
    }
}

/// Either kind of reference. Records carrying a `mimeType` decode as assets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmbedReference {
    Asset(AssetReference),
    Reference(Reference),
}

impl EmbedReference {
    pub fn id(&self) -> &str {
        match self {
            EmbedReference::Asset(asset) => &asset.id,
            EmbedReference::Reference(reference) => &reference.id,
        }
    }

    pub fn as_asset(&self) -> Option<&AssetReference> {
        match self {
            EmbedReference::Asset(asset) => Some(asset),
            EmbedReference::Reference(_) => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            EmbedReference::Asset(asset) => asset.fields.get(key),
            EmbedReference::Reference(reference) => reference.fields.get(key),
        }
    }
}

impl From<AssetReference> for EmbedReference {
    fn from(asset: AssetReference) -> Self {
        EmbedReference::Asset(asset)
    }
}

impl From<Reference> for EmbedReference {
    fn from(reference: Reference) -> Self {
        EmbedReference::Reference(reference)
    }
}

/// References supplied alongside a document.
pub type EmbedReferences = Vec<EmbedReference>;

/// Returns the first reference with the given id.
pub fn find_reference<'a>(references: &'a [EmbedReference], id: &str) -> Option<&'a EmbedReference> {
    let found = references.iter().find(|reference| reference.id() == id);
    if found.is_none() {
        tracing::debug!(id, "no reference matches embed id");
    }
    found
}
