/// Heading block type: `= Title =`, `== Section ==`, `=== Sub ===`.
///
/// The opening and closing runs of `=` must have the same length, and only
/// lengths 1 to 3 count.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '=';
    pub const MAX_LEVEL: usize = 3;

    /// Parses a heading line (trailing whitespace already removed).
    ///
    /// Returns the level and the trimmed inner text, or `None` when the line
    /// is paragraph text.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let open = line.len() - line.trim_start_matches(Self::MARKER).len();
        let close = line.len() - line.trim_end_matches(Self::MARKER).len();
        if open == 0 || open > Self::MAX_LEVEL || open != close || line.len() <= open + close {
            return None;
        }
        let inner = line[open..line.len() - close].trim();
        if inner.is_empty() {
            return None;
        }
        Some((open as u8, inner))
    }
}
