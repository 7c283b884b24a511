/// A cursor for scanning inline markup with an explicit position.
///
/// Markers are all ASCII, so byte-level matching never splits a UTF-8
/// sequence; plain text is consumed a whole `char` at a time.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being parsed.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s.as_bytes()[self.i.min(self.s.len())..].starts_with(pat)
    }

    /// Advances past one `char`, returning it.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.s.get(self.i..)?.chars().next()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Advances by `n` bytes. Callers only skip over ASCII markers.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Byte index of the end of the current physical line.
    pub fn line_end(&self) -> usize {
        let from = self.i.min(self.s.len());
        self.s.as_bytes()[from..]
            .iter()
            .position(|&b| b == b'\n')
            .map_or(self.s.len(), |off| from + off)
    }

    /// Finds `pat` within `[from, line_end)`, returning its start index.
    ///
    /// `accept` can veto a candidate position (e.g. `//` after a colon).
    pub fn find_on_line(
        &self,
        from: usize,
        pat: &[u8],
        accept: impl Fn(usize) -> bool,
    ) -> Option<usize> {
        let end = self.line_end();
        let bytes = self.s.as_bytes();
        let mut at = from;
        while at + pat.len() <= end {
            if bytes[at..].starts_with(pat) && accept(at) {
                return Some(at);
            }
            at += 1;
        }
        None
    }
}
