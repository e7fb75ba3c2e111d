use regex::Regex;

use crate::models::{Span, Style};
use crate::parsing::inline::{InlineMatch, InlineRule};

const URL_CHECKED: &str = r"<(\w+://[^\s/$.?#][^\s]*)>";
const LIBERAL: &str = r"<(.+?)>";

/// Autolinks: `<https://example.com>`.
///
/// By default only scheme-qualified URLs are recognized; [`Self::liberal`]
/// accepts any non-empty angle-bracketed text, for dialects that want it.
pub struct ShortLinkRule {
    pattern: Regex,
}

impl ShortLinkRule {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(URL_CHECKED).expect("short link pattern is valid"),
        }
    }

    /// Matches any `<...>` content instead of requiring a URL shape.
    #[must_use]
    pub fn liberal() -> Self {
        Self {
            pattern: Regex::new(LIBERAL).expect("short link pattern is valid"),
        }
    }
}

impl Default for ShortLinkRule {
    fn default() -> Self {
        Self::new()
    }
}

impl InlineRule for ShortLinkRule {
    fn name(&self) -> &'static str {
        "short_link"
    }

    fn find_matches(&self, line: &str) -> Vec<InlineMatch> {
        self.pattern
            .captures_iter(line)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let url = caps.get(1)?.as_str().to_string();
                Some(InlineMatch {
                    span: Span::new(whole.start(), whole.end()),
                    prefix_len: 1,
                    suffix_len: 1,
                    style: Style::Link { url, title: None },
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_scheme_qualified_urls() {
        let matches = ShortLinkRule::new().find_matches("go to <https://example.com/a> now");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].span, Span::new(6, 29));
        assert!(matches!(
            &matches[0].style,
            Style::Link { url, title: None } if url == "https://example.com/a"
        ));
    }

    #[test]
    fn rejects_non_urls_by_default() {
        assert!(ShortLinkRule::new().find_matches("a <tag> b").is_empty());
    }

    #[test]
    fn liberal_mode_accepts_anything() {
        assert_eq!(ShortLinkRule::liberal().find_matches("a <tag> b").len(), 1);
    }
}
