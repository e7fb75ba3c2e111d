use std::sync::LazyLock;

use regex::Regex;

use crate::error::ParseError;
use crate::models::Block;
use crate::parsing::block::{BlockContext, BlockMatch, BlockRule};

/// Line shapes that end a paragraph and should be offered to the earlier
/// rules on the next dispatch. Tables are absent: recognizing one takes a
/// two-line lookahead, so a table needs a block boundary before it.
static INTERRUPTERS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^#{1,6}\s+.+$",                  // heading
        r"^\s{0,3}(\*{3,}|-{3,}|_{3,})\s*$", // thematic break
        r"^(`{3,}|~{3,})",                 // fence opener
        r"^\s{0,3}>",                      // quote
        r"^\s{0,3}(\d+\.|[-*+])\s+\S",     // list marker
        r"^! ?\[.+?\]\(.+?\)\s*$",         // standalone image
    ]
    .iter()
    .map(|p| Regex::new(p).expect("interrupter pattern is valid"))
    .collect()
});

/// The catch-all, registered last: consumes contiguous non-blank lines
/// that no other block opener shape claims, joins them with `\n`, and
/// annotates the joined content.
///
/// This rule always matches, which is what makes the engine's
/// no-rule-matched error a configuration bug rather than a data error.
pub struct ParagraphRule;

impl ParagraphRule {
    fn interrupts(line: &str) -> bool {
        INTERRUPTERS.iter().any(|p| p.is_match(line))
    }
}

impl BlockRule for ParagraphRule {
    fn name(&self) -> &'static str {
        "paragraph"
    }

    fn try_match(
        &self,
        lines: &[&str],
        ctx: &BlockContext<'_>,
    ) -> Result<Option<BlockMatch>, ParseError> {
        let mut consumed = 1;
        while consumed < lines.len() {
            let line = lines[consumed];
            if line.trim().is_empty() || Self::interrupts(line) {
                break;
            }
            consumed += 1;
        }

        let content = ctx.annotate(&lines[..consumed].join("\n"));
        Ok(Some(BlockMatch {
            consumed,
            block: Block::Paragraph { content },
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_openers_interrupt() {
        assert!(ParagraphRule::interrupts("# heading"));
        assert!(ParagraphRule::interrupts("---"));
        assert!(ParagraphRule::interrupts("```rust"));
        assert!(ParagraphRule::interrupts("> quote"));
        assert!(ParagraphRule::interrupts("- item"));
        assert!(ParagraphRule::interrupts("1. item"));
    }

    #[test]
    fn running_text_does_not_interrupt() {
        assert!(!ParagraphRule::interrupts("plain continuation"));
        assert!(!ParagraphRule::interrupts("####### seven hashes"));
        assert!(!ParagraphRule::interrupts("|not|a|table|start"));
    }
}
