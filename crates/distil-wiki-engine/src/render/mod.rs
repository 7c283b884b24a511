//! HTML rendering of a parsed [`Document`].
//!
//! Rendering is pure given the resolver: the same document, resolver answers
//! and options always produce the same string. All text and attribute values
//! are escaped; the only raw markup in the output is what the renderer emits.

mod html;
pub mod resolver;
pub mod typography;

use crate::parsing::Document;

pub use resolver::{
    DEFAULT_BIB_URL_PREFIX, DEFAULT_WIKI_URL_PREFIX, LinkKind, LinkResolver, MapResolver, NoLinks,
    ResolvedLink,
};

/// Knobs for [`render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Added to each heading level; the result is capped at `h6`.
    pub heading_offset: u8,
    /// Apply smart quotes, dashes, arrows and abbreviation styling to text.
    pub typography: bool,
    /// Href prefix for wiki links the resolver could not find.
    pub wiki_url_prefix: String,
    /// Href prefix for citations the resolver could not find.
    pub bib_url_prefix: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            heading_offset: 0,
            typography: false,
            wiki_url_prefix: DEFAULT_WIKI_URL_PREFIX.to_string(),
            bib_url_prefix: DEFAULT_BIB_URL_PREFIX.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError<E: std::error::Error + 'static> {
    #[error("link resolver failed on {kind} link `{key}`")]
    Resolver {
        kind: LinkKind,
        key: String,
        #[source]
        source: E,
    },
}

/// Renders `doc` to an HTML fragment, one block per line.
///
/// A resolver error stops rendering; no partial output is returned.
pub fn render<R: LinkResolver>(
    doc: &Document,
    resolver: &R,
    options: &RenderOptions,
) -> Result<String, RenderError<R::Error>> {
    html::HtmlWriter::new(resolver, options).document(doc)
}
