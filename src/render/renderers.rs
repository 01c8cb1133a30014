//! Renderer tables: optional callbacks keyed by element, mark and embed kind.
//!
//! An absent entry means the consumer applies its own fallback for that kind.

use super::props::{
    ClassRendererProps, DefaultElementProps, EmbedRendererProps, IFrameRendererProps,
    ImageRendererProps, LinkRendererProps, VideoRendererProps,
};
use crate::model::{AssetMimeType, BlockType, EmbedElement, EmbedKind, EmbedReference, MarkKind};
use std::collections::HashMap;
use std::fmt;

pub type DefaultNodeRenderer<O> = Box<dyn Fn(DefaultElementProps<O>) -> O + Send + Sync>;
pub type LinkNodeRenderer<O> = Box<dyn Fn(LinkRendererProps<O>) -> O + Send + Sync>;
pub type ClassNodeRenderer<O> = Box<dyn Fn(ClassRendererProps<O>) -> O + Send + Sync>;
pub type ImageNodeRenderer<O> = Box<dyn Fn(ImageRendererProps) -> O + Send + Sync>;
pub type VideoNodeRenderer<O> = Box<dyn Fn(VideoRendererProps) -> O + Send + Sync>;
pub type IFrameNodeRenderer<O> = Box<dyn Fn(IFrameRendererProps) -> O + Send + Sync>;
pub type EmbedNodeRenderer<O> = Box<dyn Fn(EmbedRendererProps<O>) -> O + Send + Sync>;

/// Top-level media groups with a dedicated asset renderer slot.
pub const ASSET_GROUPS: [&str; 7] = [
    "application",
    "audio",
    "font",
    "image",
    "model",
    "text",
    "video",
];

/// Fixed keys of [`NodeRendererType`], in table order.
pub const RENDERER_KEYS: [&str; 30] = [
    "a",
    "class",
    "img",
    "video",
    "iframe",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "p",
    "ul",
    "ol",
    "li",
    "list_item_child",
    "table",
    "table_head",
    "table_body",
    "table_row",
    "table_cell",
    "table_header_cell",
    "blockquote",
    "bold",
    "italic",
    "underline",
    "code",
    "code_block",
    "Asset",
    "embed",
];

/// Asset renderers keyed by top-level media group.
pub struct AssetRendererType<O> {
    pub application: Option<EmbedNodeRenderer<O>>,
    pub audio: Option<EmbedNodeRenderer<O>>,
    pub font: Option<EmbedNodeRenderer<O>>,
    pub image: Option<EmbedNodeRenderer<O>>,
    pub model: Option<EmbedNodeRenderer<O>>,
    pub text: Option<EmbedNodeRenderer<O>>,
    pub video: Option<EmbedNodeRenderer<O>>,
    /// Renderers for any other group
    pub other: HashMap<String, EmbedNodeRenderer<O>>,
}

impl<O> Default for AssetRendererType<O> {
    fn default() -> Self {
        Self {
            application: None,
            audio: None,
            font: None,
            image: None,
            model: None,
            text: None,
            video: None,
            other: HashMap::new(),
        }
    }
}

impl<O> AssetRendererType<O> {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot_mut(&mut self, group: &str) -> Option<&mut Option<EmbedNodeRenderer<O>>> {
        match group {
            "application" => Some(&mut self.application),
            "audio" => Some(&mut self.audio),
            "font" => Some(&mut self.font),
            "image" => Some(&mut self.image),
            "model" => Some(&mut self.model),
            "text" => Some(&mut self.text),
            "video" => Some(&mut self.video),
            _ => None,
        }
    }

    /// Returns the renderer for a media group.
    pub fn get(&self, group: &str) -> Option<&EmbedNodeRenderer<O>> {
        let named = match group {
            "application" => &self.application,
            "audio" => &self.audio,
            "font" => &self.font,
            "image" => &self.image,
            "model" => &self.model,
            "text" => &self.text,
            "video" => &self.video,
            _ => return self.other.get(group),
        };
        named.as_ref()
    }

    /// Returns the renderer for an asset's MIME type.
    pub fn for_mime(&self, mime: &AssetMimeType) -> Option<&EmbedNodeRenderer<O>> {
        self.get(mime.group())
    }

    /// Sets the renderer for a media group.
    pub fn with<F>(mut self, group: impl Into<String>, renderer: F) -> Self
    where
        F: Fn(EmbedRendererProps<O>) -> O + Send + Sync + 'static,
    {
        let group = group.into();
        let renderer: EmbedNodeRenderer<O> = Box::new(renderer);
        if !ASSET_GROUPS.contains(&group.as_str()) {
            self.other.insert(group, renderer);
        } else if let Some(slot) = self.slot_mut(&group) {
            *slot = Some(renderer);
        }
        self
    }

    /// Groups that have a renderer; named groups first, then the others sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = ASSET_GROUPS
            .into_iter()
            .filter(|group| self.get(group).is_some())
            .collect();
        let mut other: Vec<&str> = self.other.keys().map(String::as_str).collect();
        other.sort_unstable();
        keys.extend(other);
        keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys().is_empty()
    }

    /// Layers `overrides` over `self`; entries in `overrides` win.
    pub fn merge(self, overrides: Self) -> Self {
        let mut other = self.other;
        other.extend(overrides.other);
        Self {
            application: overrides.application.or(self.application),
            audio: overrides.audio.or(self.audio),
            font: overrides.font.or(self.font),
            image: overrides.image.or(self.image),
            model: overrides.model.or(self.model),
            text: overrides.text.or(self.text),
            video: overrides.video.or(self.video),
            other,
        }
    }
}

impl<O> fmt::Debug for AssetRendererType<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssetRendererType")
            .field("keys", &self.keys())
            .finish()
    }
}

/// The renderer table for a document.
pub struct NodeRendererType<O> {
    pub a: Option<LinkNodeRenderer<O>>,
    pub class: Option<ClassNodeRenderer<O>>,
    pub img: Option<ImageNodeRenderer<O>>,
    pub video: Option<VideoNodeRenderer<O>>,
    pub iframe: Option<IFrameNodeRenderer<O>>,
    pub h1: Option<DefaultNodeRenderer<O>>,
    pub h2: Option<DefaultNodeRenderer<O>>,
    pub h3: Option<DefaultNodeRenderer<O>>,
    pub h4: Option<DefaultNodeRenderer<O>>,
    pub h5: Option<DefaultNodeRenderer<O>>,
    pub h6: Option<DefaultNodeRenderer<O>>,
    pub p: Option<DefaultNodeRenderer<O>>,
    pub ul: Option<DefaultNodeRenderer<O>>,
    pub ol: Option<DefaultNodeRenderer<O>>,
    pub li: Option<DefaultNodeRenderer<O>>,
    pub list_item_child: Option<DefaultNodeRenderer<O>>,
    pub table: Option<DefaultNodeRenderer<O>>,
    pub table_head: Option<DefaultNodeRenderer<O>>,
    pub table_body: Option<DefaultNodeRenderer<O>>,
    pub table_row: Option<DefaultNodeRenderer<O>>,
    pub table_cell: Option<DefaultNodeRenderer<O>>,
    pub table_header_cell: Option<DefaultNodeRenderer<O>>,
    pub blockquote: Option<DefaultNodeRenderer<O>>,
    pub bold: Option<DefaultNodeRenderer<O>>,
    pub italic: Option<DefaultNodeRenderer<O>>,
    pub underline: Option<DefaultNodeRenderer<O>>,
    pub code: Option<DefaultNodeRenderer<O>>,
    pub code_block: Option<DefaultNodeRenderer<O>>,
    /// Renderers for `Asset` embeds, by media group
    pub asset: AssetRendererType<O>,
    /// Renderers for other embeds, by node type
    pub embed: HashMap<String, EmbedNodeRenderer<O>>,
}

impl<O> Default for NodeRendererType<O> {
    fn default() -> Self {
        Self {
            a: None,
            class: None,
            img: None,
            video: None,
            iframe: None,
            h1: None,
            h2: None,
            h3: None,
            h4: None,
            h5: None,
            h6: None,
            p: None,
            ul: None,
            ol: None,
            li: None,
            list_item_child: None,
            table: None,
            table_head: None,
            table_body: None,
            table_row: None,
            table_cell: None,
            table_header_cell: None,
            blockquote: None,
            bold: None,
            italic: None,
            underline: None,
            code: None,
            code_block: None,
            asset: AssetRendererType::default(),
            embed: HashMap::new(),
        }
    }
}

impl<O> NodeRendererType<O> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    fn block_slot(&self, kind: BlockType) -> &Option<DefaultNodeRenderer<O>> {
        match kind {
            BlockType::BulletedList => &self.ul,
            BlockType::NumberedList => &self.ol,
            BlockType::ListItem => &self.li,
            BlockType::ListItemChild => &self.list_item_child,
            BlockType::Table => &self.table,
            BlockType::TableHead => &self.table_head,
            BlockType::TableBody => &self.table_body,
            BlockType::TableRow => &self.table_row,
            BlockType::TableCell => &self.table_cell,
            BlockType::TableHeaderCell => &self.table_header_cell,
            BlockType::BlockQuote => &self.blockquote,
            BlockType::Paragraph => &self.p,
            BlockType::HeadingOne => &self.h1,
            BlockType::HeadingTwo => &self.h2,
            BlockType::HeadingThree => &self.h3,
            BlockType::HeadingFour => &self.h4,
            BlockType::HeadingFive => &self.h5,
            BlockType::HeadingSix => &self.h6,
            BlockType::CodeBlock => &self.code_block,
        }
    }

    fn block_slot_mut(&mut self, kind: BlockType) -> &mut Option<DefaultNodeRenderer<O>> {
        match kind {
            BlockType::BulletedList => &mut self.ul,
            BlockType::NumberedList => &mut self.ol,
            BlockType::ListItem => &mut self.li,
            BlockType::ListItemChild => &mut self.list_item_child,
            BlockType::Table => &mut self.table,
            BlockType::TableHead => &mut self.table_head,
            BlockType::TableBody => &mut self.table_body,
            BlockType::TableRow => &mut self.table_row,
            BlockType::TableCell => &mut self.table_cell,
            BlockType::TableHeaderCell => &mut self.table_header_cell,
            BlockType::BlockQuote => &mut self.blockquote,
            BlockType::Paragraph => &mut self.p,
            BlockType::HeadingOne => &mut self.h1,
            BlockType::HeadingTwo => &mut self.h2,
            BlockType::HeadingThree => &mut self.h3,
            BlockType::HeadingFour => &mut self.h4,
            BlockType::HeadingFive => &mut self.h5,
            BlockType::HeadingSix => &mut self.h6,
            BlockType::CodeBlock => &mut self.code_block,
        }
    }

    fn mark_slot(&self, kind: MarkKind) -> &Option<DefaultNodeRenderer<O>> {
        match kind {
            MarkKind::Bold => &self.bold,
            MarkKind::Italic => &self.italic,
            MarkKind::Underline => &self.underline,
            MarkKind::Code => &self.code,
        }
    }

    fn mark_slot_mut(&mut self, kind: MarkKind) -> &mut Option<DefaultNodeRenderer<O>> {
        match kind {
            MarkKind::Bold => &mut self.bold,
            MarkKind::Italic => &mut self.italic,
            MarkKind::Underline => &mut self.underline,
            MarkKind::Code => &mut self.code,
        }
    }

    /// Returns the renderer for a structural block.
    pub fn block(&self, kind: BlockType) -> Option<&DefaultNodeRenderer<O>> {
        self.block_slot(kind).as_ref()
    }

    /// Returns the renderer for a heading level (1-6).
    pub fn heading(&self, level: u8) -> Option<&DefaultNodeRenderer<O>> {
        if !(1..=6).contains(&level) {
            return None;
        }
        self.block(BlockType::heading(level))
    }

    /// Returns the renderer for a mark.
    pub fn mark(&self, kind: MarkKind) -> Option<&DefaultNodeRenderer<O>> {
        self.mark_slot(kind).as_ref()
    }

    /// Returns the renderer for embeds of the given node type.
    pub fn embed(&self, node_type: &str) -> Option<&EmbedNodeRenderer<O>> {
        self.embed.get(node_type)
    }

    /// Returns the asset renderer for a MIME type.
    pub fn asset(&self, mime: &AssetMimeType) -> Option<&EmbedNodeRenderer<O>> {
        self.asset.for_mime(mime)
    }

    /// Selects the renderer for an embed element.
    ///
    /// `Asset` embeds whose reference is an asset use the asset table for the
    /// asset's MIME type; every other embed, and any asset without a matching
    /// entry, uses the embed table keyed by node type.
    pub fn embed_renderer_for(
        &self,
        embed: &EmbedElement,
        reference: Option<&EmbedReference>,
    ) -> Option<&EmbedNodeRenderer<O>> {
        if embed.kind() == EmbedKind::Asset {
            let by_mime = reference
                .and_then(EmbedReference::as_asset)
                .and_then(|asset| self.asset(&asset.mime_type));
            if by_mime.is_some() {
                return by_mime;
            }
        }
        self.embed(embed.node_type())
    }

    /// Returns true if the table has an entry under `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        match key {
            "a" => self.a.is_some(),
            "class" => self.class.is_some(),
            "img" => self.img.is_some(),
            "video" => self.video.is_some(),
            "iframe" => self.iframe.is_some(),
            "h1" => self.h1.is_some(),
            "h2" => self.h2.is_some(),
            "h3" => self.h3.is_some(),
            "h4" => self.h4.is_some(),
            "h5" => self.h5.is_some(),
            "h6" => self.h6.is_some(),
            "p" => self.p.is_some(),
            "ul" => self.ul.is_some(),
            "ol" => self.ol.is_some(),
            "li" => self.li.is_some(),
            "list_item_child" => self.list_item_child.is_some(),
            "table" => self.table.is_some(),
            "table_head" => self.table_head.is_some(),
            "table_body" => self.table_body.is_some(),
            "table_row" => self.table_row.is_some(),
            "table_cell" => self.table_cell.is_some(),
            "table_header_cell" => self.table_header_cell.is_some(),
            "blockquote" => self.blockquote.is_some(),
            "bold" => self.bold.is_some(),
            "italic" => self.italic.is_some(),
            "underline" => self.underline.is_some(),
            "code" => self.code.is_some(),
            "code_block" => self.code_block.is_some(),
            "Asset" => !self.asset.is_empty(),
            "embed" => !self.embed.is_empty(),
            _ => false,
        }
    }

    /// Keys that have an entry, in table order.
    pub fn keys(&self) -> Vec<&'static str> {
        RENDERER_KEYS
            .into_iter()
            .filter(|key| self.contains_key(key))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.keys().is_empty()
    }

    /// Sets the renderer for a structural block.
    pub fn with_block<F>(mut self, kind: BlockType, renderer: F) -> Self
    where
        F: Fn(DefaultElementProps<O>) -> O + Send + Sync + 'static,
    {
        *self.block_slot_mut(kind) = Some(Box::new(renderer));
        self
    }

    /// Sets the renderer for a mark.
    pub fn with_mark<F>(mut self, kind: MarkKind, renderer: F) -> Self
    where
        F: Fn(DefaultElementProps<O>) -> O + Send + Sync + 'static,
    {
        *self.mark_slot_mut(kind) = Some(Box::new(renderer));
        self
    }

    pub fn with_link<F>(mut self, renderer: F) -> Self
    where
        F: Fn(LinkRendererProps<O>) -> O + Send + Sync + 'static,
    {
        self.a = Some(Box::new(renderer));
        self
    }

    pub fn with_class<F>(mut self, renderer: F) -> Self
    where
        F: Fn(ClassRendererProps<O>) -> O + Send + Sync + 'static,
    {
        self.class = Some(Box::new(renderer));
        self
    }

    pub fn with_image<F>(mut self, renderer: F) -> Self
    where
        F: Fn(ImageRendererProps) -> O + Send + Sync + 'static,
    {
        self.img = Some(Box::new(renderer));
        self
    }

    pub fn with_video<F>(mut self, renderer: F) -> Self
    where
        F: Fn(VideoRendererProps) -> O + Send + Sync + 'static,
    {
        self.video = Some(Box::new(renderer));
        self
    }

    pub fn with_iframe<F>(mut self, renderer: F) -> Self
    where
        F: Fn(IFrameRendererProps) -> O + Send + Sync + 'static,
    {
        self.iframe = Some(Box::new(renderer));
        self
    }

    /// Sets the renderer for embeds of a node type.
    pub fn with_embed<F>(mut self, node_type: impl Into<String>, renderer: F) -> Self
    where
        F: Fn(EmbedRendererProps<O>) -> O + Send + Sync + 'static,
    {
        self.embed.insert(node_type.into(), Box::new(renderer));
        self
    }

    /// Sets the asset renderer for a media group.
    pub fn with_asset<F>(mut self, group: impl Into<String>, renderer: F) -> Self
    where
        F: Fn(EmbedRendererProps<O>) -> O + Send + Sync + 'static,
    {
        self.asset = self.asset.with(group, renderer);
        self
    }

    /// Layers `overrides` over `self`; entries in `overrides` win and absent
    /// entries fall back to `self`.
    pub fn merge(self, overrides: Self) -> Self {
        tracing::trace!(
            base = ?self.keys(),
            overrides = ?overrides.keys(),
            "merging renderer tables"
        );

        let mut embed = self.embed;
        embed.extend(overrides.embed);

        Self {
            a: overrides.a.or(self.a),
            class: overrides.class.or(self.class),
            img: overrides.img.or(self.img),
            video: overrides.video.or(self.video),
            iframe: overrides.iframe.or(self.iframe),
            h1: overrides.h1.or(self.h1),
            h2: overrides.h2.or(self.h2),
            h3: overrides.h3.or(self.h3),
            h4: overrides.h4.or(self.h4),
            h5: overrides.h5.or(self.h5),
            h6: overrides.h6.or(self.h6),
            p: overrides.p.or(self.p),
            ul: overrides.ul.or(self.ul),
            ol: overrides.ol.or(self.ol),
            li: overrides.li.or(self.li),
            list_item_child: overrides.list_item_child.or(self.list_item_child),
            table: overrides.table.or(self.table),
            table_head: overrides.table_head.or(self.table_head),
            table_body: overrides.table_body.or(self.table_body),
            table_row: overrides.table_row.or(self.table_row),
            table_cell: overrides.table_cell.or(self.table_cell),
            table_header_cell: overrides.table_header_cell.or(self.table_header_cell),
            blockquote: overrides.blockquote.or(self.blockquote),
            bold: overrides.bold.or(self.bold),
            italic: overrides.italic.or(self.italic),
            underline: overrides.underline.or(self.underline),
            code: overrides.code.or(self.code),
            code_block: overrides.code_block.or(self.code_block),
            asset: self.asset.merge(overrides.asset),
            embed,
        }
    }
}

impl<O> fmt::Debug for NodeRendererType<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRendererType")
            .field("keys", &self.keys())
            .field("asset", &self.asset)
            .finish()
    }
}
