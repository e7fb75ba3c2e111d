use serde::{Deserialize, Serialize};

use super::inline::FormattedText;

/// A parsed document: an ordered sequence of top-level blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

/// A structural block of the document.
///
/// Blocks own their children outright: the model is a tree with no sharing
/// and no cycles. Textual leaves carry annotated [`FormattedText`]; code
/// blocks keep their content verbatim and untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    /// ATX heading, level 1-6.
    Heading { level: u8, content: FormattedText },
    Paragraph { content: FormattedText },
    ThematicBreak,
    /// Fenced or indented code. `language` comes from the opening fence's
    /// info tag; indented code never has one.
    CodeBlock {
        language: Option<String>,
        content: String,
    },
    /// Block quote: the stripped inner lines re-parsed as a block sequence.
    Quote { children: Vec<Block> },
    List(ListBlock),
    Table(TableBlock),
    /// A standalone image on its own line.
    Image {
        url: String,
        alt: String,
        title: Option<String>,
    },
}

/// One list at one nesting level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListBlock {
    /// True for `1.`-style markers, false for `-`/`*`/`+`. Taken from the
    /// first item; siblings may mix marker styles.
    pub ordered: bool,
    /// Logical nesting depth: 0 for a top-level list, parent + 1 for each
    /// nested child list.
    pub level: u8,
    pub items: Vec<ListItem>,
}

/// One list item: its marker line's inline content plus any child lists
/// opened by deeper-indented marker lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub content: FormattedText,
    pub children: Vec<ListBlock>,
}

/// Column alignment from a table's delimiter row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alignment {
    /// `---`: no alignment specified.
    None,
    /// `:---`
    Left,
    /// `:---:`
    Center,
    /// `---:`
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    pub content: FormattedText,
    pub alignment: Alignment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

/// A GFM-style table: one header row and zero or more body rows, all rows
/// padded or truncated to the delimiter row's column count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableBlock {
    pub header: TableRow,
    pub rows: Vec<TableRow>,
}
