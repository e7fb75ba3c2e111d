use std::sync::LazyLock;

use regex::Regex;

use crate::error::ParseError;
use crate::models::Block;
use crate::parsing::block::{BlockContext, BlockMatch, BlockRule};

static FENCE_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(`{3,}|~{3,})(.*)$").expect("fence pattern is valid"));

/// Fenced code blocks, ``` or ~~~ delimited.
///
/// Content between the fences is kept verbatim, internal blank lines
/// included; nothing inside is block- or inline-parsed. The closing fence
/// must repeat the opening fence character. An unclosed fence runs to the
/// end of the input, matching the permissive stance of the rest of the
/// parser.
pub struct FencedCodeRule;

impl FencedCodeRule {
    fn closes(fence_char: char, line: &str) -> bool {
        let t = line.trim();
        t.len() >= 3 && t.chars().all(|c| c == fence_char)
    }
}

impl BlockRule for FencedCodeRule {
    fn name(&self) -> &'static str {
        "fenced_code"
    }

    fn try_match(
        &self,
        lines: &[&str],
        _ctx: &BlockContext<'_>,
    ) -> Result<Option<BlockMatch>, ParseError> {
        let Some(caps) = FENCE_OPEN.captures(lines[0]) else {
            return Ok(None);
        };
        let fence_char = if caps[1].starts_with('`') { '`' } else { '~' };
        // First word of the info string; anything after it is ignored.
        let language = caps[2]
            .trim()
            .split_whitespace()
            .next()
            .map(str::to_string);

        let mut consumed = lines.len();
        let mut content_end = lines.len();
        for (i, line) in lines.iter().enumerate().skip(1) {
            if Self::closes(fence_char, line) {
                consumed = i + 1;
                content_end = i;
                break;
            }
        }

        Ok(Some(BlockMatch {
            consumed,
            block: Block::CodeBlock {
                language,
                content: lines[1..content_end].join("\n"),
            },
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opener_captures_the_language_tag() {
        let caps = FENCE_OPEN.captures("```rust").unwrap();
        assert_eq!(&caps[2], "rust");
    }

    #[test]
    fn tilde_fences_open_too() {
        assert!(FENCE_OPEN.is_match("~~~"));
    }

    #[test]
    fn closing_requires_the_same_character() {
        assert!(FencedCodeRule::closes('`', "```"));
        assert!(FencedCodeRule::closes('`', "  ````  "));
        assert!(!FencedCodeRule::closes('`', "~~~"));
        assert!(!FencedCodeRule::closes('`', "``"));
    }
}
