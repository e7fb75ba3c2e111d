//! Built-in inline rules, one file per syntax.
//!
//! Standard dispatch priority: image, link, short link, bold, italic,
//! strike, subscript, superscript, code, then the plain-text terminal.
//! Lookaround patterns use `fancy_regex`; plain shapes use `regex`.

pub mod bold;
pub mod code;
pub mod image;
pub mod italic;
pub mod link;
pub mod script;
pub mod short_link;
pub mod strike;
pub mod text;

pub use bold::BoldRule;
pub use code::CodeRule;
pub use image::InlineImageRule;
pub use italic::ItalicRule;
pub use link::LinkRule;
pub use script::{SubscriptRule, SuperscriptRule};
pub use short_link::ShortLinkRule;
pub use strike::StrikeRule;
pub use text::PlainTextRule;
