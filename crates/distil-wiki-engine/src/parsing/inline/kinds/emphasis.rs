/// The three symmetric emphasis spans. Each opens and closes with the same
/// delimiter, on one physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Bold,
    Italic,
    Highlight,
}

impl Emphasis {
    /// Scan order when the cursor sits on a possible delimiter.
    pub const ALL: [Emphasis; 3] = [Emphasis::Bold, Emphasis::Italic, Emphasis::Highlight];

    pub fn delimiter(self) -> &'static [u8] {
        match self {
            Emphasis::Bold => b"**",
            Emphasis::Italic => b"//",
            Emphasis::Highlight => b"+++",
        }
    }

    /// Whether a delimiter starting at byte `at` of `s` counts as one.
    ///
    /// `//` directly after a colon is part of a scheme (`http://`), never
    /// an italic marker.
    pub fn delimiter_allowed(self, s: &str, at: usize) -> bool {
        match self {
            Emphasis::Italic => at == 0 || s.as_bytes()[at - 1] != b':',
            Emphasis::Bold | Emphasis::Highlight => true,
        }
    }
}
