use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Span, Style};
use crate::parsing::inline::{InlineMatch, InlineRule};

static IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"!\[(.+?)\]\(([^)\s]+?)(?:\s+"(.*?)")?\)"#).expect("image pattern is valid")
});

/// Inline image references: `![alt](url)`.
///
/// Runs before the link rule so the whole marker is claimed in one piece;
/// the alt text survives as the span content. Loading the image itself is
/// the renderer's problem.
pub struct InlineImageRule;

impl InlineRule for InlineImageRule {
    fn name(&self) -> &'static str {
        "image"
    }

    fn find_matches(&self, line: &str) -> Vec<InlineMatch> {
        IMAGE
            .captures_iter(line)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let alt = caps.get(1)?;
                let url = caps.get(2)?.as_str().to_string();
                Some(InlineMatch {
                    span: Span::new(whole.start(), whole.end()),
                    prefix_len: 2,
                    suffix_len: whole.end() - alt.end(),
                    style: Style::Image {
                        url,
                        alt: alt.as_str().to_string(),
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
    fn matches_image_syntax() {
        let matches = InlineImageRule.find_matches("a ![logo](img.png) b");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].span, Span::new(2, 18));
        assert_eq!(matches[0].prefix_len, 2);
        assert_eq!(matches[0].suffix_len, 10);
        assert!(matches!(
            &matches[0].style,
            Style::Image { url, alt } if url == "img.png" && alt == "logo"
        ));
    }

    #[test]
    fn plain_links_are_not_images() {
        assert!(InlineImageRule.find_matches("[text](url)").is_empty());
    }
}
