use std::sync::LazyLock;

use fancy_regex::Regex;

use crate::models::{Span, Style};
use crate::parsing::inline::{InlineMatch, InlineRule};

static LINK: LazyLock<Regex> = LazyLock::new(|| {
    // The negative lookbehind suppresses link-shaped syntax preceded by an
    // image marker; that position belongs to the inline image rule.
    Regex::new(r#"(?<!!)\[(.+?)\]\(([^)\s]+?)(?:\s+"(.*?)")?\)"#).expect("link pattern is valid")
});

/// Inline links: `[text](url)` with an optional quoted title.
///
/// The link text survives as the span content; the brackets, url, and title
/// are all stripped into the payload.
pub struct LinkRule;

impl InlineRule for LinkRule {
    fn name(&self) -> &'static str {
        "link"
    }

    fn find_matches(&self, line: &str) -> Vec<InlineMatch> {
        LINK.captures_iter(line)
            .filter_map(Result::ok)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let text = caps.get(1)?;
                let url = caps.get(2)?;
                let title = caps.get(3).map(|t| t.as_str().to_string());
                Some(InlineMatch {
                    span: Span::new(whole.start(), whole.end()),
                    prefix_len: 1,
                    suffix_len: whole.end() - text.end(),
                    style: Style::Link {
                        url: url.as_str().to_string(),
                        title,
                    },
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_text_and_url() {
        let matches = LinkRule.find_matches("see [docs](https://example.com)");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].span, Span::new(4, 31));
        assert_eq!(matches[0].prefix_len, 1);
        // "](https://example.com)" is the suffix after the link text
        assert_eq!(matches[0].suffix_len, 22);
        assert!(matches!(
            &matches[0].style,
            Style::Link { url, title: None } if url == "https://example.com"
        ));
    }

    #[test]
    fn captures_optional_title() {
        let matches = LinkRule.find_matches(r#"[a](u "t")"#);
        assert!(matches!(
            &matches[0].style,
            Style::Link { url, title: Some(t) } if url == "u" && t == "t"
        ));
    }

    #[test]
    fn image_marker_suppresses_the_match() {
        assert!(LinkRule.find_matches("![alt](url)").is_empty());
        assert_eq!(LinkRule.find_matches("a [x](y), not !").len(), 1);
    }
}
