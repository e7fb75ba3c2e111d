use std::sync::LazyLock;

use fancy_regex::Regex;

use crate::models::{Span, Style};
use crate::parsing::inline::{InlineMatch, InlineRule};

static SUBSCRIPT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?<!~)(~)(?!~)(.+?)(?<!~)(~)(?!~)").expect("subscript pattern is valid")
});

static SUPERSCRIPT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\^)(.+?)(\^)").expect("superscript pattern is valid"));

/// Subscript: `~text~`. Runs after [`super::StrikeRule`] so double tildes
/// are already claimed; the lookarounds keep it off stray `~~` remnants.
pub struct SubscriptRule;

impl InlineRule for SubscriptRule {
    fn name(&self) -> &'static str {
        "subscript"
    }

    fn find_matches(&self, line: &str) -> Vec<InlineMatch> {
        single_marker_matches(&SUBSCRIPT, line, Style::Subscript)
    }
}

/// Superscript: `^text^`.
pub struct SuperscriptRule;

impl InlineRule for SuperscriptRule {
    fn name(&self) -> &'static str {
        "superscript"
    }

    fn find_matches(&self, line: &str) -> Vec<InlineMatch> {
        single_marker_matches(&SUPERSCRIPT, line, Style::Superscript)
    }
}

fn single_marker_matches(pattern: &Regex, line: &str, style: Style) -> Vec<InlineMatch> {
    pattern
        .find_iter(line)
        .filter_map(Result::ok)
        .map(|m| InlineMatch {
            span: Span::new(m.start(), m.end()),
            prefix_len: 1,
            suffix_len: 1,
            style: style.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscript_matches_single_tildes() {
        let matches = SubscriptRule.find_matches("H~2~O");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].span, Span::new(1, 4));
    }

    #[test]
    fn subscript_skips_double_tildes() {
        assert!(SubscriptRule.find_matches("~~strike~~").is_empty());
    }

    #[test]
    fn superscript_matches_carets() {
        let matches = SuperscriptRule.find_matches("x^2^ + y^3^");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].span, Span::new(1, 4));
        assert_eq!(matches[1].span, Span::new(8, 11));
    }
}
