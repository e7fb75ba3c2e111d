use fancy_regex::Regex;

use crate::models::{Span, Style};
use crate::parsing::inline::{InlineMatch, InlineRule};

/// Double-marker bold emphasis, e.g. `**bold**` or `__bold__`.
///
/// The marker is configurable so a flavor can register one instance per
/// marker character. The trailing lookahead keeps a triple marker from
/// closing early.
pub struct BoldRule {
    pattern: Regex,
}

impl BoldRule {
    #[must_use]
    pub fn new(marker: char) -> Self {
        let m = regex::escape(&marker.to_string());
        let pattern = Regex::new(&format!("({m}{{2}})(.+?)({m}{{2}})(?!{m})"))
            .expect("bold pattern is valid");
        Self { pattern }
    }
}

impl InlineRule for BoldRule {
    fn name(&self) -> &'static str {
        "bold"
    }

    fn find_matches(&self, line: &str) -> Vec<InlineMatch> {
        self.pattern
            .find_iter(line)
            .filter_map(Result::ok)
            .map(|m| InlineMatch {
                span: Span::new(m.start(), m.end()),
                prefix_len: 2,
                suffix_len: 2,
                style: Style::Bold,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_star_pairs() {
        let rule = BoldRule::new('*');
        let matches = rule.find_matches("a **b** c **d**");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].span, Span::new(2, 7));
        assert_eq!(matches[1].span, Span::new(10, 15));
    }

    #[test]
    fn single_markers_do_not_match() {
        let rule = BoldRule::new('*');
        assert!(rule.find_matches("a *b* c").is_empty());
    }

    #[test]
    fn underscore_instance_ignores_stars() {
        let rule = BoldRule::new('_');
        assert!(rule.find_matches("**not underscore**").is_empty());
        assert_eq!(rule.find_matches("__yes__").len(), 1);
    }
}
