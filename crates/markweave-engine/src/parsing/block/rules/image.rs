use std::sync::LazyLock;

use regex::Regex;

use crate::error::ParseError;
use crate::models::Block;
use crate::parsing::block::{BlockContext, BlockMatch, BlockRule};

static IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^! ?\[(.+?)\]\(([^)\s]+?)(?:\s+"(.*?)")?\)\s*$"#)
        .expect("image pattern is valid")
});

/// A line that is entirely one image reference becomes a standalone image
/// block. Images embedded in running text are the inline image rule's
/// business instead.
pub struct ImageRule;

impl BlockRule for ImageRule {
    fn name(&self) -> &'static str {
        "image"
    }

    fn try_match(
        &self,
        lines: &[&str],
        _ctx: &BlockContext<'_>,
    ) -> Result<Option<BlockMatch>, ParseError> {
        let Some(caps) = IMAGE.captures(lines[0]) else {
            return Ok(None);
        };
        Ok(Some(BlockMatch {
            consumed: 1,
            block: Block::Image {
                url: caps[2].to_string(),
                alt: caps[1].to_string(),
                title: caps.get(3).map(|t| t.as_str().to_string()),
            },
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_line_image_matches() {
        let caps = IMAGE.captures("![alt text](image.png)").unwrap();
        assert_eq!(&caps[1], "alt text");
        assert_eq!(&caps[2], "image.png");
    }

    #[test]
    fn spaced_marker_and_title_are_accepted() {
        let caps = IMAGE.captures(r#"! [alt](a.png "caption")"#).unwrap();
        assert_eq!(&caps[3], "caption");
    }

    #[test]
    fn trailing_text_disqualifies_the_line() {
        assert!(IMAGE.captures("![alt](a.png) trailing").is_none());
    }
}
