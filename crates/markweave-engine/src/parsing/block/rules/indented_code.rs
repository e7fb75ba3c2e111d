use crate::error::ParseError;
use crate::models::Block;
use crate::parsing::block::{BlockContext, BlockMatch, BlockRule};

/// Indented code: contiguous non-blank lines indented by at least four
/// spaces or a tab, with that indent stripped from each line.
///
/// Registered after the list rule, which claims its own deeper-indented
/// marker lines first.
pub struct IndentedCodeRule;

impl IndentedCodeRule {
    fn is_indented(line: &str) -> bool {
        line.starts_with("    ") || line.starts_with('\t')
    }

    /// Strips one tab or up to four leading spaces.
    fn strip_indent(line: &str) -> &str {
        if let Some(rest) = line.strip_prefix('\t') {
            return rest;
        }
        let n = line.bytes().take(4).take_while(|b| *b == b' ').count();
        &line[n..]
    }
}

impl BlockRule for IndentedCodeRule {
    fn name(&self) -> &'static str {
        "indented_code"
    }

    fn try_match(
        &self,
        lines: &[&str],
        _ctx: &BlockContext<'_>,
    ) -> Result<Option<BlockMatch>, ParseError> {
        if !Self::is_indented(lines[0]) {
            return Ok(None);
        }

        let mut consumed = 0;
        while consumed < lines.len()
            && Self::is_indented(lines[consumed])
            && !lines[consumed].trim().is_empty()
        {
            consumed += 1;
        }

        let content = lines[..consumed]
            .iter()
            .map(|l| Self::strip_indent(l))
            .collect::<Vec<_>>()
            .join("\n");

        Ok(Some(BlockMatch {
            consumed,
            block: Block::CodeBlock {
                language: None,
                content,
            },
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_spaces_or_a_tab_count_as_indented() {
        assert!(IndentedCodeRule::is_indented("    x"));
        assert!(IndentedCodeRule::is_indented("\tx"));
        assert!(!IndentedCodeRule::is_indented("   x"));
    }

    #[test]
    fn strip_takes_at_most_four_spaces() {
        assert_eq!(IndentedCodeRule::strip_indent("    x"), "x");
        assert_eq!(IndentedCodeRule::strip_indent("      x"), "  x");
        assert_eq!(IndentedCodeRule::strip_indent("\t\tx"), "\tx");
    }
}
