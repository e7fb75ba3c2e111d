use fancy_regex::Regex;

use crate::models::{Span, Style};
use crate::parsing::inline::{InlineMatch, InlineRule};

/// Single-marker italic emphasis, e.g. `*italic*` or `_italic_`.
///
/// Lookarounds on both delimiters keep the rule away from double markers,
/// which belong to [`super::BoldRule`] instances earlier in the priority
/// order.
pub struct ItalicRule {
    pattern: Regex,
}

impl ItalicRule {
    #[must_use]
    pub fn new(marker: char) -> Self {
        let m = regex::escape(&marker.to_string());
        let pattern = Regex::new(&format!("(?<!{m})({m})(?!{m})(.+?)(?<!{m})({m})(?!{m})"))
            .expect("italic pattern is valid");
        Self { pattern }
    }
}

impl InlineRule for ItalicRule {
    fn name(&self) -> &'static str {
        "italic"
    }

    fn find_matches(&self, line: &str) -> Vec<InlineMatch> {
        self.pattern
            .find_iter(line)
            .filter_map(Result::ok)
            .map(|m| InlineMatch {
                span: Span::new(m.start(), m.end()),
                prefix_len: 1,
                suffix_len: 1,
                style: Style::Italic,
            })
            .collect()
    }
}
