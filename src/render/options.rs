//! Options for which empty elements a renderer should drop.

use crate::model::{BlockType, ElementNode};
use serde::{Deserialize, Serialize};

/// Element kinds to drop when they have no text.
///
/// Absent keys decode as `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoveEmptyElementType {
    pub h1: bool,
    pub h2: bool,
    pub h3: bool,
    pub h4: bool,
    pub h5: bool,
    pub h6: bool,
    pub table_head: bool,
}

impl RemoveEmptyElementType {
    /// Creates options that keep every element.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that drop every empty heading and empty table head.
    pub fn headings_and_table_head() -> Self {
        Self {
            h1: true,
            h2: true,
            h3: true,
            h4: true,
            h5: true,
            h6: true,
            table_head: true,
        }
    }

    /// Sets removal for one heading level (1-6); other levels are ignored.
    pub fn with_heading(mut self, level: u8, remove: bool) -> Self {
        match level {
            1 => self.h1 = remove,
            2 => self.h2 = remove,
            3 => self.h3 = remove,
            4 => self.h4 = remove,
            5 => self.h5 = remove,
            6 => self.h6 = remove,
            _ => {}
        }
        self
    }

    /// Sets removal for the table head.
    pub fn with_table_head(mut self, remove: bool) -> Self {
        self.table_head = remove;
        self
    }

    /// Returns true if empty elements of this kind should be dropped.
    pub fn should_remove(&self, kind: BlockType) -> bool {
        match kind {
            BlockType::HeadingOne => self.h1,
            BlockType::HeadingTwo => self.h2,
            BlockType::HeadingThree => self.h3,
            BlockType::HeadingFour => self.h4,
            BlockType::HeadingFive => self.h5,
            BlockType::HeadingSix => self.h6,
            BlockType::TableHead => self.table_head,
            _ => false,
        }
    }

    /// Returns true if this element is empty and its kind is flagged.
    pub fn removes(&self, element: &ElementNode) -> bool {
        match element {
            ElementNode::Block(block) => self.should_remove(block.kind) && element.is_empty(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Element, Node, Text};

    #[test]
    fn test_default_keeps_everything() {
        let options = RemoveEmptyElementType::default();
        assert!(!options.should_remove(BlockType::HeadingOne));
        assert!(!options.should_remove(BlockType::TableHead));
    }

    #[test]
    fn test_preset_and_builders() {
        let options = RemoveEmptyElementType::headings_and_table_head();
        assert!(options.should_remove(BlockType::HeadingSix));
        assert!(options.should_remove(BlockType::TableHead));
        assert!(!options.should_remove(BlockType::Paragraph));

        let options = RemoveEmptyElementType::new()
            .with_heading(2, true)
            .with_heading(9, true)
            .with_table_head(true);
        assert!(options.h2);
        assert!(!options.h1);
        assert!(options.table_head);
    }

    #[test]
    fn test_decodes_partial_table() {
        let options: RemoveEmptyElementType =
            serde_json::from_str(r#"{"h1": true, "table_head": true}"#).unwrap();
        assert!(options.h1);
        assert!(options.table_head);
        assert!(!options.h3);
    }

    #[test]
    fn test_removes_only_empty_flagged() {
        let options = RemoveEmptyElementType::new().with_heading(1, true);

        let empty = ElementNode::from(Element::with_children(
            BlockType::HeadingOne,
            vec![Node::Text(Text::new(""))],
        ));
        let titled = ElementNode::from(Element::with_children(
            BlockType::HeadingOne,
            vec![Node::Text(Text::new("Title"))],
        ));
        let empty_paragraph = ElementNode::from(Element::new(BlockType::Paragraph));

        assert!(options.removes(&empty));
        assert!(!options.removes(&titled));
        assert!(!options.removes(&empty_paragraph));
    }
}
