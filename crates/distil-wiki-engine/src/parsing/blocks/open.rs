use super::kinds::{Heading, ListLine, ListMarker, Preformat};

/// A block construct recognised from the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOpen<'a> {
    Preformat { rest: &'a str },
    Heading { level: u8, inner: &'a str },
    ListItem(ListLine<'a>),
}

/// Classifies a line (trailing whitespace removed) by its prefix.
pub fn try_open(line: &str) -> Option<BlockOpen<'_>> {
    // Precedence: preformat, then heading, then list item.
    if let Some(rest) = Preformat::open(line) {
        return Some(BlockOpen::Preformat { rest });
    }
    if let Some((level, inner)) = Heading::parse(line) {
        return Some(BlockOpen::Heading { level, inner });
    }
    ListMarker::parse(line).map(BlockOpen::ListItem)
}
