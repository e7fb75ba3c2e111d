use serde::{Deserialize, Serialize};

/// A half-open byte range `[start, end)` into a clean string.
///
/// Formatting spans store byte offsets rather than copied text. Offsets
/// originate from regex matches, so they always sit on UTF-8 character
/// boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of clean-string bytes the span covers. An inverted span
    /// (end before start) counts as zero rather than wrapping.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span covers no clean-string content.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Returns true if `other` lies fully within this span.
    #[must_use]
    pub fn contains(self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Returns true if the spans intersect with neither containing the other.
    ///
    /// This is the forbidden configuration for committed formatting spans:
    /// nesting (full containment) is fine, partial overlap is not.
    #[must_use]
    pub fn partially_overlaps(self, other: Span) -> bool {
        self.start < other.end
            && other.start < self.end
            && !self.contains(other)
            && !other.contains(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_and_empty() {
        assert_eq!(Span::new(2, 7).len(), 5);
        assert!(Span::new(3, 3).is_empty());
        assert!(Span::new(5, 3).is_empty());
    }

    #[test]
    fn containment() {
        let outer = Span::new(0, 10);
        assert!(outer.contains(Span::new(0, 10)));
        assert!(outer.contains(Span::new(3, 7)));
        assert!(!outer.contains(Span::new(3, 11)));
    }

    #[test]
    fn partial_overlap() {
        let a = Span::new(0, 5);
        assert!(a.partially_overlaps(Span::new(3, 8)));
        assert!(Span::new(3, 8).partially_overlaps(a));
        // nesting is not partial overlap
        assert!(!a.partially_overlaps(Span::new(1, 4)));
        // disjoint and abutting spans do not overlap
        assert!(!a.partially_overlaps(Span::new(5, 9)));
        assert!(!a.partially_overlaps(Span::new(7, 9)));
    }
}
