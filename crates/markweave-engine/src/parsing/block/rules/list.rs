use std::sync::LazyLock;

use regex::Regex;

use crate::error::ParseError;
use crate::models::{Block, ListBlock, ListItem};
use crate::parsing::block::{BlockContext, BlockMatch, BlockRule, MAX_NESTING_DEPTH};

static ORDERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)\d+\.\s+(.+)$").expect("list pattern is valid"));

static UNORDERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)[-*+]\s+(.+)$").expect("list pattern is valid"));

/// One marker line, classified.
struct MarkerLine<'a> {
    indent: usize,
    ordered: bool,
    text: &'a str,
}

fn classify(line: &str) -> Option<MarkerLine<'_>> {
    for (pattern, ordered) in [(&ORDERED, true), (&UNORDERED, false)] {
        if let Some(caps) = pattern.captures(line) {
            let indent = caps.get(1).map_or(0, |m| m.len());
            let text = caps.get(2).map_or("", |m| m.as_str()).trim();
            return Some(MarkerLine {
                indent,
                ordered,
                text,
            });
        }
    }
    None
}

/// Ordered (`1.`) and unordered (`-`, `*`, `+`) lists.
///
/// Consumes contiguous marker lines. A deeper-indented marker line opens a
/// child list on the most recent item, one logical level down; a
/// shallower one returns to the enclosing list. Sibling items may mix
/// marker styles; each list's ordered flag comes from its first item.
///
/// A marker with no content on its line does not classify as a list line
/// at all: it terminates the list and falls through to later rules. Items
/// therefore always have first-line inline content.
pub struct ListRule;

impl ListRule {
    fn build(
        entries: &[MarkerLine<'_>],
        pos: &mut usize,
        indent: usize,
        level: u8,
        ctx: &BlockContext<'_>,
    ) -> ListBlock {
        let mut list = ListBlock {
            ordered: entries[*pos].ordered,
            level,
            items: Vec::new(),
        };

        while *pos < entries.len() {
            let entry = &entries[*pos];
            if entry.indent == indent {
                list.items.push(ListItem {
                    content: ctx.annotate(entry.text),
                    children: Vec::new(),
                });
                *pos += 1;
            } else if entry.indent > indent {
                // Quote nesting (ctx.depth) and list nesting share the
                // same bound; past it, deeper entries stay at this level.
                if ctx.depth() + usize::from(level) >= MAX_NESTING_DEPTH {
                    log::warn!(
                        "list nesting deeper than {MAX_NESTING_DEPTH}, keeping items at the current level"
                    );
                    list.items.push(ListItem {
                        content: ctx.annotate(entry.text),
                        children: Vec::new(),
                    });
                    *pos += 1;
                    continue;
                }
                let child = Self::build(entries, pos, entry.indent, level.saturating_add(1), ctx);
                if let Some(item) = list.items.last_mut() {
                    item.children.push(child);
                }
            } else {
                break;
            }
        }

        list
    }
}

impl BlockRule for ListRule {
    fn name(&self) -> &'static str {
        "list"
    }

    fn try_match(
        &self,
        lines: &[&str],
        ctx: &BlockContext<'_>,
    ) -> Result<Option<BlockMatch>, ParseError> {
        let Some(first) = classify(lines[0]) else {
            return Ok(None);
        };
        // A heavily indented opener is indented code, not a new list.
        if first.indent > 3 {
            return Ok(None);
        }

        let mut entries = vec![first];
        let mut consumed = 1;
        while consumed < lines.len() {
            let Some(entry) = classify(lines[consumed]) else {
                break;
            };
            entries.push(entry);
            consumed += 1;
        }

        let mut pos = 0;
        let block = Self::build(&entries, &mut pos, entries[0].indent, 0, ctx);

        Ok(Some(BlockMatch {
            consumed,
            block: Block::List(block),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_reads_indent_marker_and_text() {
        let entry = classify("  2. content here").unwrap();
        assert_eq!(entry.indent, 2);
        assert!(entry.ordered);
        assert_eq!(entry.text, "content here");

        let entry = classify("+ plus marker").unwrap();
        assert!(!entry.ordered);
        assert_eq!(entry.text, "plus marker");
    }

    #[test]
    fn marker_without_content_is_not_a_list_line() {
        assert!(classify("- ").is_none());
        assert!(classify("-").is_none());
    }

    #[test]
    fn plain_text_is_not_a_list_line() {
        assert!(classify("just a sentence").is_none());
        assert!(classify("1984. was a year").is_some()); // ordered-marker shape wins
    }
}
