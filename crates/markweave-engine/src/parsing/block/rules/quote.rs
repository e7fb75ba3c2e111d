use std::sync::LazyLock;

use regex::Regex;

use crate::error::ParseError;
use crate::models::Block;
use crate::parsing::block::{BlockContext, BlockMatch, BlockRule};

static QUOTE_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s{0,3}>").expect("quote pattern is valid"));

static QUOTE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*>").expect("quote pattern is valid"));

/// Block quotes: contiguous `>`-prefixed lines.
///
/// Each line loses one `>` and at most one following space, then the
/// stripped lines are re-parsed as a nested block sequence, so quotes can
/// hold lists, code, further quotes, and so on. `>>` deepens naturally:
/// the inner parse sees `>`-prefixed lines again.
pub struct QuoteRule;

impl QuoteRule {
    fn strip_marker(line: &str) -> &str {
        let rest = line.trim_start();
        let rest = rest.strip_prefix('>').unwrap_or(rest);
        rest.strip_prefix(' ').unwrap_or(rest)
    }
}

impl BlockRule for QuoteRule {
    fn name(&self) -> &'static str {
        "quote"
    }

    fn try_match(
        &self,
        lines: &[&str],
        ctx: &BlockContext<'_>,
    ) -> Result<Option<BlockMatch>, ParseError> {
        if !QUOTE_OPEN.is_match(lines[0]) {
            return Ok(None);
        }

        let mut consumed = 1;
        while consumed < lines.len() && QUOTE_LINE.is_match(lines[consumed]) {
            consumed += 1;
        }

        let inner: Vec<&str> = lines[..consumed]
            .iter()
            .map(|l| Self::strip_marker(l))
            .collect();
        let children = ctx.parse_nested(&inner)?;

        Ok(Some(BlockMatch {
            consumed,
            block: Block::Quote { children },
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_takes_one_marker_and_one_space() {
        assert_eq!(QuoteRule::strip_marker("> quoted"), "quoted");
        assert_eq!(QuoteRule::strip_marker(">quoted"), "quoted");
        assert_eq!(QuoteRule::strip_marker(">  spaced"), " spaced");
        assert_eq!(QuoteRule::strip_marker(">> nested"), "> nested");
    }

    #[test]
    fn only_lightly_indented_lines_open_a_quote() {
        assert!(QUOTE_OPEN.is_match("   > x"));
        assert!(!QUOTE_OPEN.is_match("    > x"));
    }
}
