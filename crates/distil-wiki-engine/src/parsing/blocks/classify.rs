use super::open::{BlockOpen, try_open};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone, Copy)]
pub struct LineClass<'a> {
    /// Line text without its terminator or trailing whitespace.
    pub text: &'a str,
    /// Whether the line is blank (whitespace only).
    pub is_blank: bool,
    /// Count of leading spaces. Tabs and other whitespace do not indent.
    pub indent: usize,
    /// The block construct this line opens, if any.
    pub open: Option<BlockOpen<'a>>,
}

/// Classifies individual lines for the block parsing phase.
pub struct WikiLineClassifier;

impl WikiLineClassifier {
    /// Classifies a line into a [`LineClass`] containing local facts.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let text = line.trim_end();
        LineClass {
            text,
            is_blank: text.is_empty(),
            indent: text.len() - text.trim_start_matches(' ').len(),
            open: try_open(text),
        }
    }
}
