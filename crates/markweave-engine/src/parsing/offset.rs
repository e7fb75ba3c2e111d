//! Range re-basing for in-place marker stripping.
//!
//! When the annotator strips syntax markers out of a line, every index that
//! referred to the old line state has to be re-derived: the spans already
//! committed, the pending sibling matches, and the consumed match's own
//! range. All of it goes through one pure primitive so the boundary
//! semantics cannot drift between call sites.

use crate::models::Span;

/// Re-derives a byte position after `removed` bytes were deleted at `at`.
///
/// Positions at or before the removal keep their value, positions at or
/// past its exclusive end shift left by the removed length, and positions
/// inside the removed region collapse to its start.
#[must_use]
pub fn position_after_removal(pos: usize, at: usize, removed: usize) -> usize {
    if pos <= at {
        pos
    } else if pos >= at + removed {
        pos - removed
    } else {
        at
    }
}

/// The geometry of one consumed inline match: where it sat in the line and
/// how many marker bytes were stripped at each end.
#[derive(Debug, Clone, Copy)]
pub struct Strip {
    /// Start of the matched range in the pre-strip line.
    pub start: usize,
    /// Exclusive end of the matched range in the pre-strip line.
    pub end: usize,
    /// Marker bytes deleted from the front of the range.
    pub prefix_len: usize,
    /// Marker bytes deleted from the back of the range.
    pub suffix_len: usize,
}

impl Strip {
    /// Re-derives one byte position across both deletions.
    ///
    /// The suffix removal is applied in post-prefix coordinates, which is
    /// why its offset is `end - prefix_len - suffix_len`.
    #[must_use]
    pub fn rebase_position(self, pos: usize) -> usize {
        let pos = position_after_removal(pos, self.start, self.prefix_len);
        position_after_removal(pos, self.end - self.prefix_len - self.suffix_len, self.suffix_len)
    }

    /// Re-derives a span across both deletions.
    ///
    /// Applied to the match's own range this yields exactly the range of
    /// the surviving inner content,
    /// `[start, end - prefix_len - suffix_len)`.
    #[must_use]
    pub fn rebase_span(self, span: Span) -> Span {
        Span::new(self.rebase_position(span.start), self.rebase_position(span.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_before_removal_is_unchanged() {
        assert_eq!(position_after_removal(3, 5, 2), 3);
    }

    #[test]
    fn position_at_removal_start_does_not_shift() {
        // The chosen boundary semantic: an index exactly at the start of a
        // removed region keeps its value.
        assert_eq!(position_after_removal(5, 5, 2), 5);
    }

    #[test]
    fn position_at_removal_end_shifts_fully() {
        assert_eq!(position_after_removal(7, 5, 2), 5);
    }

    #[test]
    fn position_past_removal_shifts() {
        assert_eq!(position_after_removal(10, 5, 2), 8);
    }

    #[test]
    fn position_inside_removal_clamps_to_start() {
        assert_eq!(position_after_removal(6, 5, 2), 5);
    }

    // "bold *it* end": italic match at [5, 9), one marker byte each end.
    const STRIP: Strip = Strip {
        start: 5,
        end: 9,
        prefix_len: 1,
        suffix_len: 1,
    };

    #[test]
    fn own_range_rebases_to_content_range() {
        assert_eq!(STRIP.rebase_span(Span::new(5, 9)), Span::new(5, 7));
    }

    #[test]
    fn span_left_of_match_is_unchanged() {
        // Ends exactly where the match starts: abutting, not shifted.
        assert_eq!(STRIP.rebase_span(Span::new(0, 5)), Span::new(0, 5));
    }

    #[test]
    fn span_right_of_match_shifts_by_both_deletions() {
        assert_eq!(STRIP.rebase_span(Span::new(9, 13)), Span::new(7, 11));
    }

    #[test]
    fn span_containing_match_shrinks_by_both_deletions() {
        assert_eq!(STRIP.rebase_span(Span::new(0, 13)), Span::new(0, 11));
    }

    #[test]
    fn position_inside_content_shifts_by_prefix_only() {
        assert_eq!(STRIP.rebase_position(6), 5);
        assert_eq!(STRIP.rebase_position(8), 7);
    }

    #[test]
    fn zero_length_strip_is_identity() {
        let noop = Strip {
            start: 2,
            end: 6,
            prefix_len: 0,
            suffix_len: 0,
        };
        assert_eq!(noop.rebase_span(Span::new(0, 10)), Span::new(0, 10));
    }
}
