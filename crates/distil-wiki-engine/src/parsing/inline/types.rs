use serde::Serialize;

use super::kinds::wiki_key;

/// A parsed inline span.
///
/// Spans never nest: every formatted variant carries its literal content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Span {
    /// Plain text outside any construct.
    Text(String),
    Bold(String),
    Italic(String),
    Highlight(String),
    /// Monospace text between backticks.
    Code(String),
    /// A `[Page Name]` link, holding the label as written.
    WikiLink(String),
    /// A `[cite:key]` link, holding the cite key verbatim.
    CiteLink(String),
    /// A bare `http://` or `https://` URL.
    Url(String),
}

impl Span {
    /// The resolver lookup key of a link span; `None` for non-link spans.
    pub fn link_key(&self) -> Option<String> {
        match self {
            Span::WikiLink(label) => Some(wiki_key(label)),
            Span::CiteLink(key) => Some(key.clone()),
            _ => None,
        }
    }
}

/// The inline content of one block.
pub type InlineSequence = Vec<Span>;
