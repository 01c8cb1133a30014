//! Props handed to renderer callbacks.
//!
//! `O` is the caller's output type: whatever a renderer produces for one
//! node. Rendered children are passed in as an `O` as well.

use crate::model::{
    AssetMimeType, ClassProps, EmbedProps, EmbedReference, IFrameProps, ImageProps, LinkProps,
    VideoProps,
};
use serde_json::Number;

/// Props for renderers that only wrap their children.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefaultElementProps<O> {
    pub children: O,
}

impl<O> DefaultElementProps<O> {
    pub fn new(children: O) -> Self {
        Self { children }
    }
}

/// Props for the `class` renderer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassRendererProps<O> {
    pub children: O,
    pub class_name: Option<String>,
}

impl<O> ClassRendererProps<O> {
    pub fn new(children: O, props: &ClassProps) -> Self {
        Self {
            children,
            class_name: Some(props.class_name.clone()),
        }
    }
}

/// Props for the link (`a`) renderer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkRendererProps<O> {
    pub children: O,
    pub href: Option<String>,
    pub class_name: Option<String>,
    pub rel: Option<String>,
    pub id: Option<String>,
    pub title: Option<String>,
    pub open_in_new_tab: Option<bool>,
}

impl<O> LinkRendererProps<O> {
    pub fn new(children: O, props: &LinkProps) -> Self {
        Self {
            children,
            href: Some(props.href.clone()),
            class_name: props.class_name.clone(),
            rel: props.rel.clone(),
            id: props.id.clone(),
            title: props.title.clone(),
            open_in_new_tab: props.open_in_new_tab,
        }
    }

    /// Returns true if the link should open in a new browsing context.
    pub fn opens_in_new_tab(&self) -> bool {
        self.open_in_new_tab.unwrap_or(false)
    }
}

/// Props for the image (`img`) renderer; every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageRendererProps {
    pub src: Option<String>,
    pub title: Option<String>,
    pub width: Option<Number>,
    pub height: Option<Number>,
    pub handle: Option<String>,
    pub mime_type: Option<AssetMimeType>,
    pub alt_text: Option<String>,
}

impl From<&ImageProps> for ImageRendererProps {
    fn from(props: &ImageProps) -> Self {
        Self {
            src: Some(props.src.clone()),
            title: props.title.clone(),
            width: props.width.clone(),
            height: props.height.clone(),
            handle: props.handle.clone(),
            mime_type: props.mime_type.clone(),
            alt_text: props.alt_text.clone(),
        }
    }
}

/// Props for the video renderer; every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoRendererProps {
    pub src: Option<String>,
    pub title: Option<String>,
    pub width: Option<Number>,
    pub height: Option<Number>,
    pub handle: Option<String>,
}

impl From<&VideoProps> for VideoRendererProps {
    fn from(props: &VideoProps) -> Self {
        Self {
            src: Some(props.src.clone()),
            title: props.title.clone(),
            width: props.width.clone(),
            height: props.height.clone(),
            handle: props.handle.clone(),
        }
    }
}

/// Props for the iframe renderer; every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IFrameRendererProps {
    pub url: Option<String>,
    pub width: Option<Number>,
    pub height: Option<Number>,
}

impl From<&IFrameProps> for IFrameRendererProps {
    fn from(props: &IFrameProps) -> Self {
        Self {
            url: Some(props.url.clone()),
            width: props.width.clone(),
            height: props.height.clone(),
        }
    }
}

/// Props for embed and asset renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbedRendererProps<O> {
    /// Identity and payload of the embed element
    pub embed: EmbedProps,
    /// The reference whose id matches the embed's node id, if supplied
    pub reference: Option<EmbedReference>,
    pub children: O,
}

impl<O> EmbedRendererProps<O> {
    pub fn new(embed: EmbedProps, reference: Option<EmbedReference>, children: O) -> Self {
        Self {
            embed,
            reference,
            children,
        }
    }
}
