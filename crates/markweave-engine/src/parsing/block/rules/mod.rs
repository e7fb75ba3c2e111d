//! Built-in block rules, one file per block kind.
//!
//! Standard registration order: heading, thematic break, quote, list,
//! fenced code, indented code, table, image, then the paragraph catch-all.
//! The order matters; the paragraph rule must stay last.

pub mod fenced_code;
pub mod heading;
pub mod image;
pub mod indented_code;
pub mod list;
pub mod paragraph;
pub mod quote;
pub mod table;
pub mod thematic_break;

pub use fenced_code::FencedCodeRule;
pub use heading::HeadingRule;
pub use image::ImageRule;
pub use indented_code::IndentedCodeRule;
pub use list::ListRule;
pub use paragraph::ParagraphRule;
pub use quote::QuoteRule;
pub use table::TableRule;
pub use thematic_break::ThematicBreakRule;
