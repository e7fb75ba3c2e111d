use std::sync::LazyLock;

use regex::Regex;

use crate::error::ParseError;
use crate::models::Block;
use crate::parsing::block::{BlockContext, BlockMatch, BlockRule};

static THEMATIC_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s{0,3}(\*{3,}|-{3,}|_{3,})\s*$").expect("thematic break pattern is valid")
});

/// Thematic breaks: `***`, `---`, or `___` repeated three or more times.
pub struct ThematicBreakRule;

impl BlockRule for ThematicBreakRule {
    fn name(&self) -> &'static str {
        "thematic_break"
    }

    fn try_match(
        &self,
        lines: &[&str],
        _ctx: &BlockContext<'_>,
    ) -> Result<Option<BlockMatch>, ParseError> {
        if !THEMATIC_BREAK.is_match(lines[0]) {
            return Ok(None);
        }
        Ok(Some(BlockMatch {
            consumed: 1,
            block: Block::ThematicBreak,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_all_three_markers() {
        assert!(THEMATIC_BREAK.is_match("---"));
        assert!(THEMATIC_BREAK.is_match("*****"));
        assert!(THEMATIC_BREAK.is_match("  ___  "));
    }

    #[test]
    fn two_markers_are_not_enough() {
        assert!(!THEMATIC_BREAK.is_match("--"));
    }

    #[test]
    fn mixed_markers_do_not_match() {
        assert!(!THEMATIC_BREAK.is_match("-*-"));
    }
}
