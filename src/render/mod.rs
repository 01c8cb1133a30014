//! Renderer contracts.
//!
//! This module only describes what a renderer receives: the renderer table,
//! the props each callback is called with, and the invocation bundle
//! [`RichTextProps`]. Walking the tree and producing output is up to the
//! consumer.

mod options;
mod props;
mod renderers;

pub use options::RemoveEmptyElementType;
pub use props::{
    ClassRendererProps, DefaultElementProps, EmbedRendererProps, IFrameRendererProps,
    ImageRendererProps, LinkRendererProps, VideoRendererProps,
};
pub use renderers::{
    AssetRendererType, ClassNodeRenderer, DefaultNodeRenderer, EmbedNodeRenderer,
    IFrameNodeRenderer, ImageNodeRenderer, LinkNodeRenderer, NodeRendererType,
    VideoNodeRenderer, ASSET_GROUPS, RENDERER_KEYS,
};

use crate::model::{find_reference, EmbedElement, EmbedReference, EmbedReferences, RichTextContent};

/// Everything a renderer is invoked with.
#[derive(Debug)]
pub struct RichTextProps<O> {
    /// The document to render
    pub content: RichTextContent,
    /// Caller-supplied renderers; absent entries use the consumer's fallback
    pub renderers: Option<NodeRendererType<O>>,
    /// Resolved records for embed and asset elements
    pub references: Option<EmbedReferences>,
}

impl<O> RichTextProps<O> {
    /// Creates props with no renderers and no references.
    pub fn new(content: RichTextContent) -> Self {
        Self {
            content,
            renderers: None,
            references: None,
        }
    }

    pub fn with_renderers(mut self, renderers: NodeRendererType<O>) -> Self {
        self.renderers = Some(renderers);
        self
    }

    pub fn with_references(mut self, references: EmbedReferences) -> Self {
        self.references = Some(references);
        self
    }

    /// Returns the reference whose id matches the embed's node id.
    pub fn resolve_embed(&self, embed: &EmbedElement) -> Option<&EmbedReference> {
        let references = self.references.as_deref()?;
        find_reference(references, embed.node_id())
    }

    /// Returns the renderer table, if any.
    pub fn renderers(&self) -> Option<&NodeRendererType<O>> {
        self.renderers.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AssetReference, Reference};

    fn content() -> RichTextContent {
        RichTextContent::from_json_str(
            r#"{"children":[
                {"type":"embed","nodeId":"a1","nodeType":"Asset","children":[{"text":""}]},
                {"type":"embed","nodeId":"p9","nodeType":"Post","children":[{"text":""}]}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_resolve_embed_by_node_id() {
        let props: RichTextProps<String> = RichTextProps::new(content()).with_references(vec![
            AssetReference::new("a1", "image/png")
                .with_field("url", "https://cdn/a1.png")
                .into(),
            Reference::new("p1").into(),
        ]);

        let embeds = props.content.embeds();
        let asset = props.resolve_embed(embeds[0]).unwrap();
        assert_eq!(asset.as_asset().unwrap().url(), Some("https://cdn/a1.png"));
        assert!(props.resolve_embed(embeds[1]).is_none());
    }

    #[test]
    fn test_resolve_without_references() {
        let props: RichTextProps<String> = RichTextProps::new(content());
        let embeds = props.content.embeds();
        assert!(props.resolve_embed(embeds[0]).is_none());
        assert!(props.renderers().is_none());
    }

    #[test]
    fn test_with_renderers() {
        let props = RichTextProps::new(RichTextContent::default()).with_renderers(
            NodeRendererType::new().with_embed("Post", |p: EmbedRendererProps<String>| p.children),
        );
        assert!(props.renderers().unwrap().contains_key("embed"));
    }
}
