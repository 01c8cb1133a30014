//! Element kinds, structural elements and the specialized element records.

use super::node::describe_shape;
use super::{AssetMimeType, EmbedElement, Node};
use crate::error::{Error, Result};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};
use std::fmt;
use std::str::FromStr;

/// The `type` discriminator of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementType {
    #[serde(rename = "bulleted-list")]
    BulletedList,
    #[serde(rename = "numbered-list")]
    NumberedList,
    #[serde(rename = "list-item")]
    ListItem,
    #[serde(rename = "list-item-child")]
    ListItemChild,
    #[serde(rename = "table")]
    Table,
    #[serde(rename = "table_head")]
    TableHead,
    #[serde(rename = "table_body")]
    TableBody,
    #[serde(rename = "table_row")]
    TableRow,
    #[serde(rename = "table_cell")]
    TableCell,
    #[serde(rename = "table_header_cell")]
    TableHeaderCell,
    #[serde(rename = "block-quote")]
    BlockQuote,
    #[serde(rename = "paragraph")]
    Paragraph,
    #[serde(rename = "heading-one")]
    HeadingOne,
    #[serde(rename = "heading-two")]
    HeadingTwo,
    #[serde(rename = "heading-three")]
    HeadingThree,
    #[serde(rename = "heading-four")]
    HeadingFour,
    #[serde(rename = "heading-five")]
    HeadingFive,
    #[serde(rename = "heading-six")]
    HeadingSix,
    #[serde(rename = "class")]
    Class,
    #[serde(rename = "link")]
    Link,
    #[serde(rename = "image")]
    Image,
    #[serde(rename = "video")]
    Video,
    #[serde(rename = "iframe")]
    IFrame,
    #[serde(rename = "embed")]
    Embed,
    #[serde(rename = "code-block")]
    CodeBlock,
}

impl ElementType {
    /// Every element type, in declaration order.
    pub const ALL: [ElementType; 25] = [
        ElementType::BulletedList,
        ElementType::NumberedList,
        ElementType::ListItem,
        ElementType::ListItemChild,
        ElementType::Table,
        ElementType::TableHead,
        ElementType::TableBody,
        ElementType::TableRow,
        ElementType::TableCell,
        ElementType::TableHeaderCell,
        ElementType::BlockQuote,
        ElementType::Paragraph,
        ElementType::HeadingOne,
        ElementType::HeadingTwo,
        ElementType::HeadingThree,
        ElementType::HeadingFour,
        ElementType::HeadingFive,
        ElementType::HeadingSix,
        ElementType::Class,
        ElementType::Link,
        ElementType::Image,
        ElementType::Video,
        ElementType::IFrame,
        ElementType::Embed,
        ElementType::CodeBlock,
    ];

    /// Wire spelling of the discriminator.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::BulletedList => "bulleted-list",
            ElementType::NumberedList => "numbered-list",
            ElementType::ListItem => "list-item",
            ElementType::ListItemChild => "list-item-child",
            ElementType::Table => "table",
            ElementType::TableHead => "table_head",
            ElementType::TableBody => "table_body",
            ElementType::TableRow => "table_row",
            ElementType::TableCell => "table_cell",
            ElementType::TableHeaderCell => "table_header_cell",
            ElementType::BlockQuote => "block-quote",
            ElementType::Paragraph => "paragraph",
            ElementType::HeadingOne => "heading-one",
            ElementType::HeadingTwo => "heading-two",
            ElementType::HeadingThree => "heading-three",
            ElementType::HeadingFour => "heading-four",
            ElementType::HeadingFive => "heading-five",
            ElementType::HeadingSix => "heading-six",
            ElementType::Class => "class",
            ElementType::Link => "link",
            ElementType::Image => "image",
            ElementType::Video => "video",
            ElementType::IFrame => "iframe",
            ElementType::Embed => "embed",
            ElementType::CodeBlock => "code-block",
        }
    }

    /// Key of this element type in a renderer table.
    pub fn renderer_key(&self) -> &'static str {
        match self {
            ElementType::BulletedList => "ul",
            ElementType::NumberedList => "ol",
            ElementType::ListItem => "li",
            ElementType::ListItemChild => "list_item_child",
            ElementType::Table => "table",
            ElementType::TableHead => "table_head",
            ElementType::TableBody => "table_body",
            ElementType::TableRow => "table_row",
            ElementType::TableCell => "table_cell",
            ElementType::TableHeaderCell => "table_header_cell",
            ElementType::BlockQuote => "blockquote",
            ElementType::Paragraph => "p",
            ElementType::HeadingOne => "h1",
            ElementType::HeadingTwo => "h2",
            ElementType::HeadingThree => "h3",
            ElementType::HeadingFour => "h4",
            ElementType::HeadingFive => "h5",
            ElementType::HeadingSix => "h6",
            ElementType::Class => "class",
            ElementType::Link => "a",
            ElementType::Image => "img",
            ElementType::Video => "video",
            ElementType::IFrame => "iframe",
            ElementType::Embed => "embed",
            ElementType::CodeBlock => "code_block",
        }
    }

    /// Returns true for the types that carry their own extra fields.
    pub fn is_specialized(&self) -> bool {
        matches!(
            self,
            ElementType::Class
                | ElementType::Link
                | ElementType::Image
                | ElementType::Video
                | ElementType::IFrame
                | ElementType::Embed
        )
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ElementType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::UnknownElementType(s.to_string()))
    }
}

/// Structural element kinds: every element type without extra fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockType {
    #[serde(rename = "bulleted-list")]
    BulletedList,
    #[serde(rename = "numbered-list")]
    NumberedList,
    #[serde(rename = "list-item")]
    ListItem,
    #[serde(rename = "list-item-child")]
    ListItemChild,
    #[serde(rename = "table")]
    Table,
    #[serde(rename = "table_head")]
    TableHead,
    #[serde(rename = "table_body")]
    TableBody,
    #[serde(rename = "table_row")]
    TableRow,
    #[serde(rename = "table_cell")]
    TableCell,
    #[serde(rename = "table_header_cell")]
    TableHeaderCell,
    #[serde(rename = "block-quote")]
    BlockQuote,
    #[serde(rename = "paragraph")]
    Paragraph,
    #[serde(rename = "heading-one")]
    HeadingOne,
    #[serde(rename = "heading-two")]
    HeadingTwo,
    #[serde(rename = "heading-three")]
    HeadingThree,
    #[serde(rename = "heading-four")]
    HeadingFour,
    #[serde(rename = "heading-five")]
    HeadingFive,
    #[serde(rename = "heading-six")]
    HeadingSix,
    #[serde(rename = "code-block")]
    CodeBlock,
}

impl BlockType {
    /// Returns the heading type for a level, clamping to 1..=6.
    pub fn heading(level: u8) -> Self {
        match level {
            0 | 1 => BlockType::HeadingOne,
            2 => BlockType::HeadingTwo,
            3 => BlockType::HeadingThree,
            4 => BlockType::HeadingFour,
            5 => BlockType::HeadingFive,
            _ => BlockType::HeadingSix,
        }
    }

    /// Heading level (1-6), or None for non-heading blocks.
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            BlockType::HeadingOne => Some(1),
            BlockType::HeadingTwo => Some(2),
            BlockType::HeadingThree => Some(3),
            BlockType::HeadingFour => Some(4),
            BlockType::HeadingFive => Some(5),
            BlockType::HeadingSix => Some(6),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        ElementType::from(*self).as_str()
    }

    pub fn renderer_key(&self) -> &'static str {
        ElementType::from(*self).renderer_key()
    }
}

impl From<BlockType> for ElementType {
    fn from(block: BlockType) -> Self {
        match block {
            BlockType::BulletedList => ElementType::BulletedList,
            BlockType::NumberedList => ElementType::NumberedList,
            BlockType::ListItem => ElementType::ListItem,
            BlockType::ListItemChild => ElementType::ListItemChild,
            BlockType::Table => ElementType::Table,
            BlockType::TableHead => ElementType::TableHead,
            BlockType::TableBody => ElementType::TableBody,
            BlockType::TableRow => ElementType::TableRow,
            BlockType::TableCell => ElementType::TableCell,
            BlockType::TableHeaderCell => ElementType::TableHeaderCell,
            BlockType::BlockQuote => ElementType::BlockQuote,
            BlockType::Paragraph => ElementType::Paragraph,
            BlockType::HeadingOne => ElementType::HeadingOne,
            BlockType::HeadingTwo => ElementType::HeadingTwo,
            BlockType::HeadingThree => ElementType::HeadingThree,
            BlockType::HeadingFour => ElementType::HeadingFour,
            BlockType::HeadingFive => ElementType::HeadingFive,
            BlockType::HeadingSix => ElementType::HeadingSix,
            BlockType::CodeBlock => ElementType::CodeBlock,
        }
    }
}

impl TryFrom<ElementType> for BlockType {
    type Error = Error;

    fn try_from(kind: ElementType) -> Result<Self> {
        Ok(match kind {
            ElementType::BulletedList => BlockType::BulletedList,
            ElementType::NumberedList => BlockType::NumberedList,
            ElementType::ListItem => BlockType::ListItem,
            ElementType::ListItemChild => BlockType::ListItemChild,
            ElementType::Table => BlockType::Table,
            ElementType::TableHead => BlockType::TableHead,
            ElementType::TableBody => BlockType::TableBody,
            ElementType::TableRow => BlockType::TableRow,
            ElementType::TableCell => BlockType::TableCell,
            ElementType::TableHeaderCell => BlockType::TableHeaderCell,
            ElementType::BlockQuote => BlockType::BlockQuote,
            ElementType::Paragraph => BlockType::Paragraph,
            ElementType::HeadingOne => BlockType::HeadingOne,
            ElementType::HeadingTwo => BlockType::HeadingTwo,
            ElementType::HeadingThree => BlockType::HeadingThree,
            ElementType::HeadingFour => BlockType::HeadingFour,
            ElementType::HeadingFive => BlockType::HeadingFive,
            ElementType::HeadingSix => BlockType::HeadingSix,
            ElementType::CodeBlock => BlockType::CodeBlock,
            ElementType::Class
            | ElementType::Link
            | ElementType::Image
            | ElementType::Video
            | ElementType::IFrame
            | ElementType::Embed => return Err(Error::NotABlockType(kind)),
        })
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structural element: a block kind and its children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Block kind
    #[serde(rename = "type")]
    pub kind: BlockType,
    /// Child nodes in document order
    pub children: Vec<Node>,
}

impl Element {
    /// Creates an element with no children.
    pub fn new(kind: BlockType) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    /// Creates an element with the given children.
    pub fn with_children(kind: BlockType, children: Vec<Node>) -> Self {
        Self { kind, children }
    }

    /// Creates a paragraph holding a single unmarked text leaf.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::with_children(
            BlockType::Paragraph,
            vec![Node::Text(super::Text::new(text))],
        )
    }

    /// Appends a child node.
    pub fn push(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }
}

/// Fields of a `class` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassProps {
    pub class_name: String,
}

/// Fields of a `link` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkProps {
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Open the target in a new browsing context
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_in_new_tab: Option<bool>,
}

/// Fields of an `image` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageProps {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Width in pixels; integral or fractional
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Number>,
    /// Height in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Number>,
    /// Asset handle in the content source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<AssetMimeType>,
    /// Alternative text for accessibility
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
}

/// Fields of a `video` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoProps {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
}

/// Fields of an `iframe` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IFrameProps {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Number>,
}

/// A `class` element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassElement {
    #[serde(flatten)]
    pub props: ClassProps,
    pub children: Vec<Node>,
}

/// A `link` element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkElement {
    #[serde(flatten)]
    pub props: LinkProps,
    pub children: Vec<Node>,
}

/// An `image` element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageElement {
    #[serde(flatten)]
    pub props: ImageProps,
    pub children: Vec<Node>,
}

/// A `video` element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoElement {
    #[serde(flatten)]
    pub props: VideoProps,
    pub children: Vec<Node>,
}

/// An `iframe` element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IFrameElement {
    #[serde(flatten)]
    pub props: IFrameProps,
    pub children: Vec<Node>,
}

/// Any element of the content tree.
///
/// The `type` key selects the variant; each variant owns exactly the fields
/// its kind defines. Keys a variant does not own are dropped on decode.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementNode {
    Block(Element),
    Class(ClassElement),
    Link(LinkElement),
    Image(ImageElement),
    Video(VideoElement),
    IFrame(IFrameElement),
    Embed(EmbedElement),
}

/// Children-only view used when decoding structural blocks.
#[derive(Deserialize)]
struct BlockBody {
    children: Vec<Node>,
}

impl ElementNode {
    /// Decodes an element from an undecoded JSON object.
    pub fn from_value(value: Value) -> Result<Self> {
        let mut map = match value {
            Value::Object(map) => map,
            other => return Err(Error::UnrecognizedNode(describe_shape(&other))),
        };
        let kind: ElementType = match map.remove("type") {
            Some(Value::String(tag)) => tag.parse()?,
            Some(other) => return Err(Error::UnknownElementType(other.to_string())),
            None => {
                return Err(Error::UnrecognizedNode(describe_shape(&Value::Object(map))));
            }
        };
        let body = Value::Object(map);

        Ok(match kind {
            ElementType::Class => ElementNode::Class(serde_json::from_value(body)?),
            ElementType::Link => ElementNode::Link(serde_json::from_value(body)?),
            ElementType::Image => ElementNode::Image(serde_json::from_value(body)?),
            ElementType::Video => ElementNode::Video(serde_json::from_value(body)?),
            ElementType::IFrame => ElementNode::IFrame(serde_json::from_value(body)?),
            ElementType::Embed => ElementNode::Embed(serde_json::from_value(body)?),
            block => {
                let BlockBody { children } = serde_json::from_value(body)?;
                ElementNode::Block(Element {
                    kind: BlockType::try_from(block)?,
                    children,
                })
            }
        })
    }

    /// Returns the `type` discriminator of this element.
    pub fn element_type(&self) -> ElementType {
        match self {
            ElementNode::Block(element) => element.kind.into(),
            ElementNode::Class(_) => ElementType::Class,
            ElementNode::Link(_) => ElementType::Link,
            ElementNode::Image(_) => ElementType::Image,
            ElementNode::Video(_) => ElementType::Video,
            ElementNode::IFrame(_) => ElementType::IFrame,
            ElementNode::Embed(_) => ElementType::Embed,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            ElementNode::Block(e) => &e.children,
            ElementNode::Class(e) => &e.children,
            ElementNode::Link(e) => &e.children,
            ElementNode::Image(e) => &e.children,
            ElementNode::Video(e) => &e.children,
            ElementNode::IFrame(e) => &e.children,
            ElementNode::Embed(e) => &e.children,
        }
    }

    pub fn children_mut(&mut self) -> &mut Vec<Node> {
        match self {
            ElementNode::Block(e) => &mut e.children,
            ElementNode::Class(e) => &mut e.children,
            ElementNode::Link(e) => &mut e.children,
            ElementNode::Image(e) => &mut e.children,
            ElementNode::Video(e) => &mut e.children,
            ElementNode::IFrame(e) => &mut e.children,
            ElementNode::Embed(e) => &mut e.children,
        }
    }

    /// Returns the concatenated text of all descendant text leaves.
    pub fn plain_text(&self) -> String {
        let mut result = String::new();
        for child in self.children() {
            match child {
                Node::Text(text) => result.push_str(&text.text),
                Node::Element(element) => result.push_str(&element.plain_text()),
            }
        }
        result
    }

    /// Returns true if this element has no children, or only text leaves
    /// whose text is blank.
    pub fn is_empty(&self) -> bool {
        self.children().iter().all(|child| match child {
            Node::Text(text) => text.text.trim().is_empty(),
            Node::Element(_) => false,
        })
    }
}

impl From<Element> for ElementNode {
    fn from(element: Element) -> Self {
        ElementNode::Block(element)
    }
}

/// Borrowed, internally tagged view used to write the `type` key of
/// specialized elements.
#[derive(Serialize)]
#[serde(tag = "type")]
enum TaggedRef<'a> {
    #[serde(rename = "class")]
    Class(&'a ClassElement),
    #[serde(rename = "link")]
    Link(&'a LinkElement),
    #[serde(rename = "image")]
    Image(&'a ImageElement),
    #[serde(rename = "video")]
    Video(&'a VideoElement),
    #[serde(rename = "iframe")]
    IFrame(&'a IFrameElement),
    #[serde(rename = "embed")]
    Embed(&'a EmbedElement),
}

impl Serialize for ElementNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            ElementNode::Block(element) => element.serialize(serializer),
            ElementNode::Class(e) => TaggedRef::Class(e).serialize(serializer),
            ElementNode::Link(e) => TaggedRef::Link(e).serialize(serializer),
            ElementNode::Image(e) => TaggedRef::Image(e).serialize(serializer),
            ElementNode::Video(e) => TaggedRef::Video(e).serialize(serializer),
            ElementNode::IFrame(e) => TaggedRef::IFrame(e).serialize(serializer),
            ElementNode::Embed(e) => TaggedRef::Embed(e).serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ElementNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        ElementNode::from_value(value).map_err(D::Error::custom)
    }
}
