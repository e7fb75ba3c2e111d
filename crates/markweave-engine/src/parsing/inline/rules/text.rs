use crate::models::{Span, Style};
use crate::parsing::inline::{InlineMatch, InlineRule};

/// Terminal fallback: claims the whole remaining line as one plain-text
/// span.
///
/// Must be registered last. Running the annotator over an already-clean
/// string therefore produces exactly one full-length text span, which is
/// what makes annotation idempotent.
pub struct PlainTextRule;

impl InlineRule for PlainTextRule {
    fn name(&self) -> &'static str {
        "text"
    }

    fn find_matches(&self, line: &str) -> Vec<InlineMatch> {
        if line.is_empty() {
            return Vec::new();
        }
        vec![InlineMatch {
            span: Span::new(0, line.len()),
            prefix_len: 0,
            suffix_len: 0,
            style: Style::Text,
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claims_the_whole_line() {
        let matches = PlainTextRule.find_matches("hello");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].span, Span::new(0, 5));
        assert_eq!(matches[0].style, Style::Text);
    }

    #[test]
    fn empty_line_yields_nothing() {
        assert!(PlainTextRule.find_matches("").is_empty());
    }
}
