use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Span, Style};
use crate::parsing::inline::{InlineMatch, InlineRule};

static CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("code pattern is valid"));

/// Inline code: `` `code` ``.
///
/// Intentionally last before the plain-text terminal, so emphasis inside
/// backticks is still recognized by the earlier rules; content inside the
/// backticks is otherwise kept as-is.
pub struct CodeRule;

impl InlineRule for CodeRule {
    fn name(&self) -> &'static str {
        "code"
    }

    fn find_matches(&self, line: &str) -> Vec<InlineMatch> {
        CODE.find_iter(line)
            .map(|m| InlineMatch {
                span: Span::new(m.start(), m.end()),
                prefix_len: 1,
                suffix_len: 1,
                style: Style::Code,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_backtick_pairs() {
        let matches = CodeRule.find_matches("run `ls` then `pwd`");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].span, Span::new(4, 8));
        assert_eq!(matches[1].span, Span::new(14, 19));
    }

    #[test]
    fn unclosed_backtick_does_not_match() {
        assert!(CodeRule.find_matches("a ` b").is_empty());
    }

    #[test]
    fn empty_code_does_not_match() {
        assert!(CodeRule.find_matches("a `` b").is_empty());
    }
}
