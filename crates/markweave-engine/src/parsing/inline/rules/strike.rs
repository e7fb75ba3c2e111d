use std::sync::LazyLock;

use fancy_regex::Regex;

use crate::models::{Span, Style};
use crate::parsing::inline::{InlineMatch, InlineRule};

static STRIKE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?<!~)(~~)(?!~)(.+?)(?<!~)(~~)(?!~)").expect("strike pattern is valid")
});

/// Strikethrough: `~~text~~`. Single tildes are subscript territory.
pub struct StrikeRule;

impl InlineRule for StrikeRule {
    fn name(&self) -> &'static str {
        "strike"
    }

    fn find_matches(&self, line: &str) -> Vec<InlineMatch> {
        STRIKE
            .find_iter(line)
            .filter_map(Result::ok)
            .map(|m| InlineMatch {
                span: Span::new(m.start(), m.end()),
                prefix_len: 2,
                suffix_len: 2,
                style: Style::Strike,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_double_tildes() {
        let matches = StrikeRule.find_matches("a ~~gone~~ b");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].span, Span::new(2, 10));
    }

    #[test]
    fn single_tildes_do_not_match() {
        assert!(StrikeRule.find_matches("H~2~O").is_empty());
    }
}
