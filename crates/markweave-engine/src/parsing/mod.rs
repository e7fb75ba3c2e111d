//! # Parsing
//!
//! The two-stage pipeline: block structure first, inline formatting second.
//!
//! ## Stages
//!
//! 1. **Block parsing** (`block`): a line-oriented state machine drives an
//!    ordered block rule list over the document, producing typed blocks.
//!    Block rules call back into the annotator for their textual content,
//!    or recurse into the block parser for nested structure.
//! 2. **Inline annotation** (`inline`): per textual leaf, an ordered
//!    inline rule list strips syntax markers out of the line while keeping
//!    every discovered span's offsets consistent (`offset`).
//!
//! Both stages are pure and deterministic: identical input always yields a
//! structurally identical tree.

pub mod block;
pub mod inline;
pub mod offset;

use crate::error::ParseError;
use crate::flavor::Flavor;
use crate::models::Document;

use block::BlockParser;

/// Parses a document with the standard flavor.
pub fn parse(text: &str) -> Result<Document, ParseError> {
    parse_with(text, &Flavor::standard())
}

/// Parses a document with a caller-supplied flavor.
///
/// Input uses `\n` line separators; other line-ending conventions are the
/// caller's to normalize beforehand.
pub fn parse_with(text: &str, flavor: &Flavor) -> Result<Document, ParseError> {
    let parser = BlockParser::new(flavor);
    Ok(Document {
        blocks: parser.parse(text)?,
    })
}
