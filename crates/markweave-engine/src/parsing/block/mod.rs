//! # Block Parsing
//!
//! The first stage of the pipeline: a line-oriented state machine that
//! partitions the document into typed blocks.
//!
//! ## Algorithm
//!
//! The engine only iterates over the lines and delegates recognition to an
//! ordered rule list. Leading blank lines are dropped unconditionally
//! before dispatch, so a rule is never asked to special-case a blank first
//! line. The first rule to claim the head of the line stream wins; the
//! engine advances past the consumed lines and appends the produced block.
//!
//! ## Progress
//!
//! A positive match must consume at least one line. If no rule matches at
//! all the engine aborts with [`ParseError::NoRuleMatched`] rather than
//! risk spinning forever: with the paragraph catch-all registered last
//! this is unreachable, so reaching it means the flavor is mis-built.
//!
//! ## Modules
//!
//! - **`rules`**: the built-in rule set, one file per block kind

pub mod rules;

use crate::error::ParseError;
use crate::flavor::Flavor;
use crate::models::{Block, FormattedText};
use crate::parsing::inline::FormattingParser;

/// Upper bound on nested block recursion (quotes in quotes in ...).
pub const MAX_NESTING_DEPTH: usize = 100;

/// A positive match: the produced block and how many lines it consumed.
#[derive(Debug)]
pub struct BlockMatch {
    pub consumed: usize,
    pub block: Block,
}

/// Recognizes one block kind at the head of the remaining line stream.
///
/// The first line is guaranteed non-blank. A rule must only consume lines
/// it has definitively matched, and never zero lines on a positive match.
pub trait BlockRule: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Inspects the leading lines and either claims N >= 1 of them,
    /// producing one block, or declines.
    fn try_match(
        &self,
        lines: &[&str],
        ctx: &BlockContext<'_>,
    ) -> Result<Option<BlockMatch>, ParseError>;
}

/// Handle given to block rules for inline annotation and nested parsing.
pub struct BlockContext<'p> {
    parser: &'p BlockParser<'p>,
    depth: usize,
}

impl BlockContext<'_> {
    /// Runs the inline annotator over one piece of textual content.
    #[must_use]
    pub fn annotate(&self, text: &str) -> FormattedText {
        self.parser.inline.annotate(text)
    }

    /// Nesting depth of the surrounding parse, counted in
    /// [`Self::parse_nested`] calls. Rules that recurse internally add
    /// their own levels on top of this when checking
    /// [`MAX_NESTING_DEPTH`].
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Recursively parses `lines` as a nested block sequence.
    ///
    /// Past [`MAX_NESTING_DEPTH`] the remainder degrades to a single
    /// paragraph instead of recursing further, so adversarial nesting
    /// cannot exhaust the call stack.
    pub fn parse_nested(&self, lines: &[&str]) -> Result<Vec<Block>, ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            log::warn!("nesting deeper than {MAX_NESTING_DEPTH}, flattening to a paragraph");
            let joined = lines.join("\n");
            if joined.trim().is_empty() {
                return Ok(Vec::new());
            }
            return Ok(vec![Block::Paragraph {
                content: self.annotate(joined.trim()),
            }]);
        }
        self.parser.parse_lines(lines, self.depth + 1)
    }
}

/// Drives an ordered block rule list over the lines of a document.
pub struct BlockParser<'f> {
    rules: &'f [Box<dyn BlockRule>],
    inline: FormattingParser<'f>,
}

impl<'f> BlockParser<'f> {
    #[must_use]
    pub fn new(flavor: &'f Flavor) -> Self {
        Self {
            rules: flavor.block_rules(),
            inline: FormattingParser::new(flavor.inline_rules()),
        }
    }

    /// Parses a whole document into its top-level block sequence.
    ///
    /// Input uses `\n` separators; other line-ending conventions are the
    /// caller's to normalize beforehand.
    pub fn parse(&self, text: &str) -> Result<Vec<Block>, ParseError> {
        let lines: Vec<&str> = text.split('\n').collect();
        self.parse_lines(&lines, 0)
    }

    fn parse_lines(&self, mut lines: &[&str], depth: usize) -> Result<Vec<Block>, ParseError> {
        let ctx = BlockContext { parser: self, depth };
        let mut blocks = Vec::new();

        'lines: while !lines.is_empty() {
            let first = lines[0];
            if first.trim().is_empty() {
                lines = &lines[1..];
                continue;
            }

            for rule in self.rules {
                if let Some(m) = rule.try_match(lines, &ctx)? {
                    debug_assert!(m.consumed > 0, "rule {} consumed zero lines", rule.name());
                    log::debug!("rule {} consumed {} line(s)", rule.name(), m.consumed);
                    blocks.push(m.block);
                    lines = &lines[m.consumed.min(lines.len())..];
                    continue 'lines;
                }
            }

            return Err(ParseError::NoRuleMatched {
                line: first.to_string(),
            });
        }

        Ok(blocks)
    }
}
