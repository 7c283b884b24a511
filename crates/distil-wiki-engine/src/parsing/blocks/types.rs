use serde::Serialize;

use crate::parsing::inline::InlineSequence;

/// A parsed block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Block {
    /// `= h1 =`, `== h2 ==` or `=== h3 ===`. `level` is always 1 to 3.
    Heading { level: u8, text: InlineSequence },
    /// Consecutive text lines, joined with `\n`.
    Paragraph { text: InlineSequence },
    /// One list run: its top-level items, each holding its nested items.
    /// A blank line or a non-list line ends the run.
    List(Vec<ListItem>),
    /// A `{{{ ... }}}` block; lines are kept verbatim.
    Preformatted { lines: Vec<String> },
}

/// One list item and the deeper items nested under it.
///
/// `children` only ever hold items at `depth + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    /// `1.` style marker rather than `*`.
    pub ordered: bool,
    pub depth: usize,
    pub text: InlineSequence,
    pub children: Vec<ListItem>,
}
