//! # rich-text-types
//!
//! A typed schema for rich-text documents and for the renderer contracts
//! used to turn them into UI output.
//!
//! ## Content model
//!
//! - [`Node`]: either an [`ElementNode`] or a [`Text`] leaf
//! - [`ElementNode`]: a closed sum type keyed on the `type` discriminator,
//!   each variant owning exactly its own fields
//! - [`Text`]: a string plus independent [`Mark`] flags
//! - [`RichTextContent`]: the document root, accepting both the bare-array
//!   and the `{"children": [...]}` input shapes
//!
//! ## Renderer contracts
//!
//! - [`NodeRendererType`]: optional callbacks keyed by element, mark and
//!   embed kind
//! - [`RichTextProps`]: content, renderers and resolved references for one
//!   renderer invocation
//!
//! ## Quick Start
//!
//! ```
//! use rich_text_types::{is_text, RichTextContent};
//!
//! fn main() -> rich_text_types::Result<()> {
//!     let content = RichTextContent::from_json_str(
//!         r#"[{"type":"paragraph","children":[{"text":"hi","bold":true}]}]"#,
//!     )?;
//!
//!     let paragraph = &content.children()[0];
//!     assert!(is_text(&paragraph.children()[0]));
//!     assert_eq!(content.plain_text(), "hi");
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod model;
pub mod render;

// Re-exports
pub use error::{Error, Result};
pub use model::{
    find_reference, is_element, is_element_value, is_text, is_text_value, AssetMimeType,
    AssetReference, BlockType, ClassElement, ClassProps, Element, ElementNode, ElementType,
    EmbedElement, EmbedKind, EmbedPayload, EmbedProps, EmbedReference, EmbedReferences,
    IFrameElement, IFrameProps, ImageElement, ImageMimeType, ImageProps, LinkElement, LinkProps,
    Mark, MarkKind, Node, Reference, RichTextContent, Text, VideoElement, VideoMimeType,
    VideoProps,
};
pub use render::{
    AssetRendererType, DefaultElementProps, EmbedRendererProps, NodeRendererType,
    RemoveEmptyElementType, RichTextProps,
};

use serde_json::Value;

/// Decodes a document from a JSON string.
///
/// Accepts both the bare-array and the wrapped `{"children": [...]}` shape.
///
/// # Example
///
/// ```
/// let bare = rich_text_types::parse_content(r#"[]"#)?;
/// let wrapped = rich_text_types::parse_content(r#"{"children":[]}"#)?;
/// assert_eq!(bare, wrapped);
/// # Ok::<(), rich_text_types::Error>(())
/// ```
pub fn parse_content(json: &str) -> Result<RichTextContent> {
    RichTextContent::from_json_str(json)
}

/// Decodes a single node from an undecoded JSON value.
pub fn parse_node(value: Value) -> Result<Node> {
    Node::from_value(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_image_conforms_to_element_node() {
        let node = parse_node(json!({"type": "image", "src": "x.png", "children": []})).unwrap();
        assert!(is_element(&node));

        let element = node.as_element().unwrap();
        assert_eq!(element.element_type(), ElementType::Image);
        assert!(matches!(element, ElementNode::Image(image) if image.props.src == "x.png"));
    }

    #[test]
    fn test_paragraph_document() {
        let content =
            parse_content(r#"[{"type":"paragraph","children":[{"text":"hi","bold":true}]}]"#)
                .unwrap();

        assert_eq!(content.len(), 1);
        let leaf = content.children()[0].children()[0].as_text().unwrap();
        assert_eq!(leaf.text, "hi");
        assert!(leaf.marks.bold);
        assert!(!leaf.marks.italic);
    }

    #[test]
    fn test_root_shapes_normalize() {
        let elements = json!([
            {"type": "block-quote", "children": [{"text": "quoted"}]},
            {"type": "link", "href": "https://example.com", "children": [{"text": "go"}]}
        ]);
        let bare = RichTextContent::from_value(elements.clone()).unwrap();
        let wrapped = RichTextContent::from_value(json!({ "children": elements })).unwrap();
        assert_eq!(bare, wrapped);
    }

    #[test]
    fn test_embed_always_has_identity() {
        let ok = parse_node(json!({
            "type": "embed",
            "nodeId": "1",
            "nodeType": "Post",
            "children": []
        }));
        assert!(ok.is_ok());

        let err = parse_node(json!({"type": "embed", "children": []}));
        assert!(err.is_err());
    }

    #[test]
    fn test_all_marks_combine() {
        let node = parse_node(json!({
            "text": "all",
            "bold": true,
            "italic": true,
            "underline": true,
            "code": true
        }))
        .unwrap();
        let text = node.as_text().unwrap();
        assert_eq!(text.marks.kinds().count(), 4);
    }

    #[test]
    fn test_full_document_round_trip() {
        let source = json!({"children": [
            {"type": "heading-one", "children": [{"text": "Guide"}]},
            {"type": "numbered-list", "children": [
                {"type": "list-item", "children": [
                    {"type": "list-item-child", "children": [{"text": "Install", "code": true}]}
                ]}
            ]},
            {"type": "table", "children": [
                {"type": "table_head", "children": [
                    {"type": "table_row", "children": [
                        {"type": "table_header_cell", "children": [{"text": "Name"}]}
                    ]}
                ]},
                {"type": "table_body", "children": [
                    {"type": "table_row", "children": [
                        {"type": "table_cell", "children": [{"text": "Ada"}]}
                    ]}
                ]}
            ]},
            {"type": "class", "className": "note", "children": [{"text": "Heads up"}]},
            {"type": "video", "src": "https://cdn/v.mp4", "width": 640, "children": [{"text": ""}]},
            {"type": "iframe", "url": "https://player/1", "height": 315, "children": [{"text": ""}]},
            {"type": "code-block", "children": [{"text": "let x = 1;"}]}
        ]});

        let content = RichTextContent::from_value(source.clone()).unwrap();
        assert_eq!(content.len(), 7);
        assert_eq!(serde_json::to_value(&content).unwrap(), source);
    }
}
