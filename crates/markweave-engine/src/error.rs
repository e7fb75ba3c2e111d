/// Errors produced by the block parser engine.
///
/// Markdown parsing is permissive: content that fails to match a specific
/// rule falls through to the paragraph catch-all, so there is no "invalid
/// input" variant. The only failure is a mis-assembled rule list.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// No block rule claimed the current line. Raised to guarantee forward
    /// progress; with a correctly assembled flavor (paragraph rule last)
    /// this is unreachable, so hitting it means the flavor is mis-built.
    #[error("no block rule matched (is the paragraph fallback registered last?), breaking line: {line:?}")]
    NoRuleMatched { line: String },
}
