//! # Inline Formatting
//!
//! The second stage of the pipeline: the annotator transforms one line of
//! text to a "clean" state and delegates recognition to an ordered rule
//! list.
//!
//! ## Algorithm
//!
//! For each rule in priority order, the engine asks for all matches against
//! the *current* line state, then consumes them left-to-right. Consuming a
//! match strips its prefix/suffix marker bytes, splices the inner content
//! back in place of the matched range, re-bases every pending sibling match
//! and every committed span (see [`crate::parsing::offset`]), and commits
//! one span over the now-current line.
//!
//! ## Invariants
//!
//! - After annotation, every committed span indexes the *final* clean
//!   string, not the raw input.
//! - Spans nest but never partially overlap: a later-priority match that
//!   would partially overlap a committed span is dropped, so the
//!   earlier-priority claim wins deterministically.
//!
//! ## Modules
//!
//! - **`rules`**: the built-in rule set, one file per syntax

pub mod rules;

use std::collections::VecDeque;

use crate::models::{FormattedText, Formatting, Span, Style};
use crate::parsing::offset::Strip;

/// One recognized piece of inline syntax in the current line state.
#[derive(Debug, Clone)]
pub struct InlineMatch {
    /// Matched byte range in the current (partially cleaned) line,
    /// including the syntax markers.
    pub span: Span,
    /// Marker bytes to delete from the front of the range.
    pub prefix_len: usize,
    /// Marker bytes to delete from the back of the range.
    pub suffix_len: usize,
    /// Formatting to commit over the surviving inner content.
    pub style: Style,
}

impl InlineMatch {
    fn strip(&self) -> Strip {
        Strip {
            start: self.span.start,
            end: self.span.end,
            prefix_len: self.prefix_len,
            suffix_len: self.suffix_len,
        }
    }
}

/// Recognizes one inline syntax.
///
/// Implementations must return matches ordered by start position, mutually
/// non-overlapping, each with a valid in-bounds range no shorter than its
/// combined marker lengths. Matching must not mutate shared state; rules
/// are shared across threads.
pub trait InlineRule: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// All matches of this rule against the current line state.
    fn find_matches(&self, line: &str) -> Vec<InlineMatch>;
}

/// Drives an ordered inline rule list over single lines of text.
pub struct FormattingParser<'a> {
    rules: &'a [Box<dyn InlineRule>],
}

impl<'a> FormattingParser<'a> {
    #[must_use]
    pub fn new(rules: &'a [Box<dyn InlineRule>]) -> Self {
        Self { rules }
    }

    /// Annotates one piece of textual content.
    ///
    /// Blank input short-circuits: the clean string equals the input and no
    /// spans are produced. Otherwise returns the fully stripped line and
    /// the committed spans in commit order (rule-major, left-to-right
    /// within a rule).
    pub fn annotate(&self, text: &str) -> FormattedText {
        if text.trim().is_empty() {
            return FormattedText::plain(text);
        }

        let mut line = text.to_string();
        let mut committed: Vec<Formatting> = Vec::new();

        for rule in self.rules {
            let mut pending: VecDeque<InlineMatch> = rule.find_matches(&line).into();
            while let Some(m) = pending.pop_front() {
                debug_assert!(
                    m.span.end <= line.len()
                        && !m.span.is_empty()
                        && m.span.len() >= m.prefix_len + m.suffix_len,
                    "rule {} produced an invalid match {:?} for line {:?}",
                    rule.name(),
                    m.span,
                    line,
                );

                if committed.iter().any(|f| f.span.partially_overlaps(m.span)) {
                    log::trace!(
                        "dropping {} match at {}..{}: partial overlap with a committed span",
                        rule.name(),
                        m.span.start,
                        m.span.end,
                    );
                    continue;
                }

                let strip = m.strip();
                let inner =
                    line[m.span.start + m.prefix_len..m.span.end - m.suffix_len].to_string();
                line.replace_range(m.span.start..m.span.end, &inner);
                log::trace!("{}: stripped {:?} at {}", rule.name(), inner, m.span.start);

                for p in pending.iter_mut() {
                    p.span = strip.rebase_span(p.span);
                }
                for f in committed.iter_mut() {
                    f.span = strip.rebase_span(f.span);
                }
                committed.push(Formatting {
                    span: strip.rebase_span(m.span),
                    style: m.style,
                });
            }
        }

        FormattedText {
            clean: line,
            spans: committed,
        }
    }
}
