//! Rich-text content model.
//!
//! A document is a tree: elements carry a `type` discriminator and ordered
//! children, text leaves carry a string and independent marks. Embed and
//! image elements may point at out-of-tree [`Reference`]s by id.

mod content;
mod element;
mod embed;
mod mime;
mod node;
mod reference;

pub use content::*;
pub use element::*;
pub use embed::*;
pub use mime::*;
pub use node::*;
pub use reference::*;
