use std::sync::LazyLock;

use regex::Regex;

use crate::error::ParseError;
use crate::models::{Alignment, Block, TableBlock, TableCell, TableRow};
use crate::parsing::block::{BlockContext, BlockMatch, BlockRule};

static DELIMITER_CELL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^:?-+:?$").expect("delimiter pattern is valid"));

/// GFM-style tables: a header row, a delimiter row, then body rows.
///
/// The delimiter row fixes the column count and per-column alignment; a
/// header with a different cell count means no match, and the lines fall
/// through to the paragraph rule. Body rows are padded or truncated to the
/// column count.
pub struct TableRule;

impl TableRule {
    fn split_row(line: &str) -> Vec<&str> {
        let t = line.trim();
        let t = t.strip_prefix('|').unwrap_or(t);
        let t = t.strip_suffix('|').unwrap_or(t);
        t.split('|').map(str::trim).collect()
    }

    fn delimiter_alignments(line: &str) -> Option<Vec<Alignment>> {
        let cells = Self::split_row(line);
        let mut alignments = Vec::with_capacity(cells.len());
        for cell in cells {
            if !DELIMITER_CELL.is_match(cell) {
                return None;
            }
            alignments.push(match (cell.starts_with(':'), cell.ends_with(':')) {
                (true, true) => Alignment::Center,
                (true, false) => Alignment::Left,
                (false, true) => Alignment::Right,
                (false, false) => Alignment::None,
            });
        }
        Some(alignments)
    }

    fn make_row(cells: &[&str], alignments: &[Alignment], ctx: &BlockContext<'_>) -> TableRow {
        TableRow {
            cells: alignments
                .iter()
                .enumerate()
                .map(|(i, alignment)| TableCell {
                    content: ctx.annotate(cells.get(i).copied().unwrap_or("")),
                    alignment: *alignment,
                })
                .collect(),
        }
    }
}

impl BlockRule for TableRule {
    fn name(&self) -> &'static str {
        "table"
    }

    fn try_match(
        &self,
        lines: &[&str],
        ctx: &BlockContext<'_>,
    ) -> Result<Option<BlockMatch>, ParseError> {
        if lines.len() < 2 || !lines[0].contains('|') {
            return Ok(None);
        }
        let Some(alignments) = Self::delimiter_alignments(lines[1]) else {
            return Ok(None);
        };
        let header_cells = Self::split_row(lines[0]);
        if header_cells.len() != alignments.len() {
            return Ok(None);
        }

        let header = Self::make_row(&header_cells, &alignments, ctx);

        let mut rows = Vec::new();
        let mut consumed = 2;
        while consumed < lines.len() {
            let line = lines[consumed];
            if line.trim().is_empty() || !line.contains('|') {
                break;
            }
            rows.push(Self::make_row(&Self::split_row(line), &alignments, ctx));
            consumed += 1;
        }

        Ok(Some(BlockMatch {
            consumed,
            block: Block::Table(TableBlock { header, rows }),
        }))
    }
}
