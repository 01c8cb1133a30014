//! The document root.

use super::node::describe_shape;
use super::{EmbedElement, ElementNode, Node};
use crate::error::{Error, Result};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::io::Read;

/// A rich-text document: an ordered sequence of top-level elements.
///
/// Two input shapes are accepted, a bare array of elements and an object
/// wrapping the array under `children`. Both decode to the same value, and
/// encoding always writes the wrapped shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RichTextContent {
    children: Vec<ElementNode>,
}

impl<'de> Deserialize<'de> for RichTextContent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_shape(value).map_err(D::Error::custom)
    }
}

impl RichTextContent {
    /// Creates a document from top-level elements.
    pub fn new(children: Vec<ElementNode>) -> Self {
        Self { children }
    }

    /// Collapses either accepted root shape into the element sequence.
    fn from_shape(value: Value) -> Result<Self> {
        let elements = match value {
            Value::Array(elements) => {
                tracing::debug!(elements = elements.len(), "normalized bare content array");
                elements
            }
            Value::Object(mut map) => match map.remove("children") {
                Some(Value::Array(elements)) => {
                    tracing::debug!(elements = elements.len(), "normalized wrapped content");
                    elements
                }
                Some(other) => {
                    return Err(Error::UnrecognizedNode(format!(
                        "document children must be an array, got {}",
                        describe_shape(&other)
                    )));
                }
                None => {
                    return Err(Error::UnrecognizedNode(describe_shape(&Value::Object(map))));
                }
            },
            other => return Err(Error::UnrecognizedNode(describe_shape(&other))),
        };

        let children = elements
            .into_iter()
            .map(ElementNode::from_value)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { children })
    }

    /// Decodes a document from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decodes a document from JSON bytes.
    pub fn from_json_slice(json: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(json)?)
    }

    /// Decodes a document from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Self::from_json_slice(&buf)
    }

    /// Decodes a document from an undecoded JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Encodes the document in the wrapped `{"children": [...]}` shape.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn children(&self) -> &[ElementNode] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<ElementNode> {
        &mut self.children
    }

    pub fn into_children(self) -> Vec<ElementNode> {
        self.children
    }

    /// Appends a top-level element.
    pub fn push(&mut self, element: impl Into<ElementNode>) {
        self.children.push(element.into());
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the text of each top-level element, one per line.
    pub fn plain_text(&self) -> String {
        self.children
            .iter()
            .map(ElementNode::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Returns every embed element in document order.
    pub fn embeds(&self) -> Vec<&EmbedElement> {
        let mut found = Vec::new();
        for element in &self.children {
            collect_embeds(element, &mut found);
        }
        found
    }
}

fn collect_embeds<'a>(element: &'a ElementNode, found: &mut Vec<&'a EmbedElement>) {
    if let ElementNode::Embed(embed) = element {
        found.push(embed);
    }
    for child in element.children() {
        if let Node::Element(nested) = child {
            collect_embeds(nested, found);
        }
    }
}

impl From<Vec<ElementNode>> for RichTextContent {
    fn from(children: Vec<ElementNode>) -> Self {
        Self::new(children)
    }
}

impl FromIterator<ElementNode> for RichTextContent {
    fn from_iter<I: IntoIterator<Item = ElementNode>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
