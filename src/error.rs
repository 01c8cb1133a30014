//! Error types for rich-text-types.

use crate::model::ElementType;
use std::io;
use thiserror::Error;

/// Result type alias for rich-text-types operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for rich-text-types.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while reading content.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The content is not valid JSON or does not match the document shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An element carries a `type` outside the known set.
    #[error("Unknown element type: {0}")]
    UnknownElementType(String),

    /// A value is neither an element nor a text leaf.
    #[error("Unrecognized node shape: {0}")]
    UnrecognizedNode(String),

    /// A specialized element type was used where a structural block is required.
    #[error("Not a structural block type: {0}")]
    NotABlockType(ElementType),
}
