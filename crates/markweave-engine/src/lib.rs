//! # markweave-engine
//!
//! A deterministic, rule-based, two-stage Markdown parser.
//!
//! A [`Flavor`] carries two explicit, ordered rule lists: block rules that
//! partition lines into structural blocks, and inline rules that strip
//! formatting markers out of textual content while tracking what the
//! markers meant as offset spans. Full CommonMark conformance is a
//! non-goal; pluggable, deterministic rules are the point.
//!
//! ```
//! use markweave_engine::{parse, Block};
//!
//! let doc = parse("# Title\n\nSome **bold** text.").unwrap();
//! assert_eq!(doc.blocks.len(), 2);
//! assert!(matches!(doc.blocks[0], Block::Heading { level: 1, .. }));
//! ```
//!
//! Rendering, theming, and GUI bindings live elsewhere; this crate stops
//! at the block tree.

pub mod error;
pub mod flavor;
pub mod models;
pub mod parsing;

// Re-export key types for easier usage
pub use error::ParseError;
pub use flavor::Flavor;
pub use models::{
    Alignment, Block, Document, FormattedText, Formatting, ListBlock, ListItem, Span, Style,
    TableBlock, TableCell, TableRow,
};
pub use parsing::{parse, parse_with};
