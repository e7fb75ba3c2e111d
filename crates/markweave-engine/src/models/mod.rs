//! # Document Model
//!
//! The parser's output contract, consumed by rendering layers.
//!
//! ## Modules
//!
//! - **`span`**: half-open byte ranges into clean strings
//! - **`inline`**: formatting styles, spans, and annotated text
//! - **`block`**: the tagged block-node tree
//!
//! Everything here derives serde so downstream tools can transport the tree.

pub mod block;
pub mod inline;
pub mod span;

pub use block::{Alignment, Block, Document, ListBlock, ListItem, TableBlock, TableCell, TableRow};
pub use inline::{FormattedText, Formatting, Style};
pub use span::Span;
