/// Bracketed wiki-link: `[Page Name]`.
pub struct WikiLink;

impl WikiLink {
    pub const OPEN: &'static [u8; 1] = b"[";
    pub const CLOSE: &'static [u8; 1] = b"]";
    /// Punctuation kept in a link key; everything else non-alphanumeric is dropped.
    pub const KEY_PUNCTUATION: &'static [char] = &['-', '_', '.', ':'];
}

/// Citation link: `[cite:smith2020]`.
pub struct CiteLink;

impl CiteLink {
    pub const OPEN: &'static [u8; 6] = b"[cite:";
    pub const CLOSE: &'static [u8; 1] = b"]";
}

/// Normalizes a wiki-link label into the key used to look the page up.
///
/// Lower-cases, turns each whitespace run into a single hyphen and strips
/// punctuation other than [`WikiLink::KEY_PUNCTUATION`].
pub fn wiki_key(label: &str) -> String {
    label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || WikiLink::KEY_PUNCTUATION.contains(c))
        .collect()
}
