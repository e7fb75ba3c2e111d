use std::sync::LazyLock;

use regex::Regex;

use crate::error::ParseError;
use crate::models::Block;
use crate::parsing::block::{BlockContext, BlockMatch, BlockRule};

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").expect("heading pattern is valid"));

/// ATX headings: one to six `#` followed by whitespace and content.
///
/// Seven or more hashes cannot satisfy the pattern (the run would have to
/// continue into the required whitespace), so such lines fall through to
/// the paragraph rule as literal text.
pub struct HeadingRule;

impl BlockRule for HeadingRule {
    fn name(&self) -> &'static str {
        "heading"
    }

    fn try_match(
        &self,
        lines: &[&str],
        ctx: &BlockContext<'_>,
    ) -> Result<Option<BlockMatch>, ParseError> {
        let Some(caps) = HEADING.captures(lines[0]) else {
            return Ok(None);
        };
        let level = caps[1].len() as u8;
        let content = ctx.annotate(caps[2].trim_end());
        Ok(Some(BlockMatch {
            consumed: 1,
            block: Block::Heading { level, content },
        }))
    }
}
