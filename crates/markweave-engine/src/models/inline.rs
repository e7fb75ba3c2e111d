use serde::{Deserialize, Serialize};

use super::span::Span;

/// The formatting carried by one inline span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Style {
    Bold,
    Italic,
    Strike,
    Code,
    Subscript,
    Superscript,
    /// An inline link. `title` is the optional quoted title from
    /// `[text](url "title")`; autolinks carry no title.
    Link { url: String, title: Option<String> },
    /// An inline image reference. The alt text doubles as the span content.
    Image { url: String, alt: String },
    /// Terminal fallback covering unformatted text.
    Text,
}

/// One typed formatting span over a clean string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formatting {
    pub span: Span,
    pub style: Style,
}

/// The annotator's output for one piece of textual content: the line with
/// all recognized syntax markers stripped, plus the spans describing what
/// the markers meant.
///
/// # Invariants
///
/// - Every span is a valid in-bounds range into `clean`.
/// - Spans may nest (full containment) but never partially overlap.
/// - Spans appear in commit order: rule-major, left-to-right within a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedText {
    pub clean: String,
    pub spans: Vec<Formatting>,
}

impl FormattedText {
    /// Wraps text that carries no formatting at all.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            clean: text.into(),
            spans: Vec::new(),
        }
    }
}
