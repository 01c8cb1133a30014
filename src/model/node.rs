//! Nodes, text leaves and marks.

use super::ElementNode;
use crate::error::{Error, Result};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Inline style flags attached to a text leaf.
///
/// The flags are independent; any subset may be set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mark {
    /// Bold text
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    /// Italic text
    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,
    /// Underline
    #[serde(default, skip_serializing_if = "is_false")]
    pub underline: bool,
    /// Inline code
    #[serde(default, skip_serializing_if = "is_false")]
    pub code: bool,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

impl Mark {
    /// Creates an empty mark set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a mark set with the given flag enabled.
    pub fn with(mut self, kind: MarkKind) -> Self {
        match kind {
            MarkKind::Bold => self.bold = true,
            MarkKind::Italic => self.italic = true,
            MarkKind::Underline => self.underline = true,
            MarkKind::Code => self.code = true,
        }
        self
    }

    /// Returns true if the given flag is set.
    pub fn contains(&self, kind: MarkKind) -> bool {
        match kind {
            MarkKind::Bold => self.bold,
            MarkKind::Italic => self.italic,
            MarkKind::Underline => self.underline,
            MarkKind::Code => self.code,
        }
    }

    /// Returns true if no flag is set.
    pub fn is_plain(&self) -> bool {
        !(self.bold || self.italic || self.underline || self.code)
    }

    /// Iterates over the set flags in table order.
    pub fn kinds(&self) -> impl Iterator<Item = MarkKind> + '_ {
        MarkKind::ALL.into_iter().filter(|kind| self.contains(*kind))
    }
}

/// A single mark flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkKind {
    Bold,
    Italic,
    Underline,
    Code,
}

impl MarkKind {
    /// Every mark, in renderer table order.
    pub const ALL: [MarkKind; 4] = [
        MarkKind::Bold,
        MarkKind::Italic,
        MarkKind::Underline,
        MarkKind::Code,
    ];

    /// Key of this mark in a renderer table.
    pub fn renderer_key(&self) -> &'static str {
        match self {
            MarkKind::Bold => "bold",
            MarkKind::Italic => "italic",
            MarkKind::Underline => "underline",
            MarkKind::Code => "code",
        }
    }
}

/// A text leaf with uniform marks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    /// The text content
    pub text: String,
    /// Marks applied to the whole leaf
    #[serde(flatten)]
    pub marks: Mark,
}

impl Text {
    /// Creates an unmarked text leaf.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marks: Mark::default(),
        }
    }

    /// Creates a text leaf with the given marks.
    pub fn with_marks(text: impl Into<String>, marks: Mark) -> Self {
        Self {
            text: text.into(),
            marks,
        }
    }

    /// Sets the bold mark.
    pub fn bold(mut self) -> Self {
        self.marks.bold = true;
        self
    }

    /// Sets the italic mark.
    pub fn italic(mut self) -> Self {
        self.marks.italic = true;
        self
    }

    /// Sets the underline mark.
    pub fn underline(mut self) -> Self {
        self.marks.underline = true;
        self
    }

    /// Sets the inline code mark.
    pub fn code(mut self) -> Self {
        self.marks.code = true;
        self
    }

    /// Returns true if this leaf has no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Any node of the content tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    /// A structural or specialized element
    Element(ElementNode),
    /// A text leaf
    Text(Text),
}

impl Node {
    /// Decodes a node from an undecoded JSON value, classifying it by shape.
    pub fn from_value(value: Value) -> Result<Self> {
        if is_element_value(&value) {
            ElementNode::from_value(value).map(Node::Element)
        } else if is_text_value(&value) {
            Ok(Node::Text(serde_json::from_value(value)?))
        } else {
            Err(Error::UnrecognizedNode(describe_shape(&value)))
        }
    }

    /// Returns true if this node is an element.
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    /// Returns true if this node is a text leaf.
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Returns the element, if this node is one.
    pub fn as_element(&self) -> Option<&ElementNode> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Returns the text leaf, if this node is one.
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Node::Text(text) => Some(text),
            Node::Element(_) => None,
        }
    }

    /// Returns the concatenated text of this node and its descendants.
    pub fn plain_text(&self) -> String {
        match self {
            Node::Element(element) => element.plain_text(),
            Node::Text(text) => text.text.clone(),
        }
    }
}

impl From<ElementNode> for Node {
    fn from(element: ElementNode) -> Self {
        Node::Element(element)
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Node::Text(text)
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Node::from_value(value).map_err(D::Error::custom)
    }
}

/// Returns true if the node is an element.
pub fn is_element(node: &Node) -> bool {
    node.is_element()
}

/// Returns true if the node is a text leaf.
pub fn is_text(node: &Node) -> bool {
    node.is_text()
}

/// Returns true if an undecoded value has the element shape
/// (an object carrying both `type` and `children`).
pub fn is_element_value(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|map| map.contains_key("type") && map.contains_key("children"))
}

/// Returns true if an undecoded value has the text-leaf shape
/// (an object carrying a string `text`).
pub fn is_text_value(value: &Value) -> bool {
    value
        .as_object()
        .and_then(|map| map.get("text"))
        .is_some_and(Value::is_string)
}

/// Short description of a value for error messages.
pub(crate) fn describe_shape(value: &Value) -> String {
    match value {
        Value::Object(map) => {
            let keys: Vec<&str> = map.keys().map(String::as_str).collect();
            format!("object with keys [{}]", keys.join(", "))
        }
        Value::Array(_) => "array".to_string(),
        Value::String(_) => "string".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Null => "null".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_marks_are_independent() {
        let marks = Mark::new().with(MarkKind::Bold).with(MarkKind::Code);
        assert!(marks.contains(MarkKind::Bold));
        assert!(marks.contains(MarkKind::Code));
        assert!(!marks.contains(MarkKind::Italic));
        assert_eq!(
            marks.kinds().collect::<Vec<_>>(),
            vec![MarkKind::Bold, MarkKind::Code]
        );
        assert!(!marks.is_plain());
        assert!(Mark::default().is_plain());
    }

    #[test]
    fn test_text_decodes_marks() {
        let text: Text =
            serde_json::from_value(json!({"text": "hi", "bold": true, "underline": true}))
                .unwrap();
        assert_eq!(text.text, "hi");
        assert!(text.marks.bold);
        assert!(text.marks.underline);
        assert!(!text.marks.italic);
        assert!(!text.marks.code);
    }

    #[test]
    fn test_unset_marks_omitted() {
        let value = serde_json::to_value(Text::new("plain").italic()).unwrap();
        assert_eq!(value, json!({"text": "plain", "italic": true}));
    }

    #[test]
    fn test_node_shape_classification() {
        let text = Node::from_value(json!({"text": "leaf"})).unwrap();
        assert!(is_text(&text));
        assert!(!is_element(&text));

        let element =
            Node::from_value(json!({"type": "paragraph", "children": [{"text": "x"}]})).unwrap();
        assert!(is_element(&element));
        assert_eq!(element.plain_text(), "x");
    }

    #[test]
    fn test_value_predicates() {
        assert!(is_element_value(&json!({"type": "paragraph", "children": []})));
        assert!(!is_element_value(&json!({"type": "paragraph"})));
        assert!(is_text_value(&json!({"text": ""})));
        assert!(!is_text_value(&json!({"text": 3})));
        assert!(!is_text_value(&json!("text")));
    }

    #[test]
    fn test_unrecognized_node() {
        let err = Node::from_value(json!({"value": 1})).unwrap_err();
        match err {
            Error::UnrecognizedNode(shape) => assert!(shape.contains("value")),
            other => panic!("Expected UnrecognizedNode, got {other:?}"),
        }
        assert!(Node::from_value(json!(null)).is_err());
    }
}
