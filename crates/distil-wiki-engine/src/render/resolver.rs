use std::collections::HashSet;
use std::convert::Infallible;
use std::fmt;

/// Default URL prefix for wiki pages.
pub const DEFAULT_WIKI_URL_PREFIX: &str = "/wiki/";
/// Default URL prefix for bibliography entries.
pub const DEFAULT_BIB_URL_PREFIX: &str = "/bib/";

/// Which kind of link a lookup was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Wiki,
    Cite,
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkKind::Wiki => f.write_str("wiki"),
            LinkKind::Cite => f.write_str("cite"),
        }
    }
}

/// Where a resolved link points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLink {
    /// Text to show instead of the link as written; `None` keeps the source text.
    pub display_text: Option<String>,
    pub target_url: String,
}

impl ResolvedLink {
    pub fn to(target_url: impl Into<String>) -> Self {
        Self {
            display_text: None,
            target_url: target_url.into(),
        }
    }
}

/// Host-provided link lookup.
///
/// `Ok(None)` means the target does not exist and the link is rendered as
/// unresolved. An `Err` aborts rendering and is handed back to the caller.
/// Lookups must complete synchronously.
pub trait LinkResolver {
    type Error: std::error::Error + 'static;

    fn resolve_wiki_link(&self, key: &str) -> Result<Option<ResolvedLink>, Self::Error>;

    fn resolve_cite_link(&self, cite_key: &str) -> Result<Option<ResolvedLink>, Self::Error>;
}

impl<R: LinkResolver + ?Sized> LinkResolver for &R {
    type Error = R::Error;

    fn resolve_wiki_link(&self, key: &str) -> Result<Option<ResolvedLink>, Self::Error> {
        (**self).resolve_wiki_link(key)
    }

    fn resolve_cite_link(&self, cite_key: &str) -> Result<Option<ResolvedLink>, Self::Error> {
        (**self).resolve_cite_link(cite_key)
    }
}

/// Resolves nothing: every link renders as unresolved.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLinks;

impl LinkResolver for NoLinks {
    type Error = Infallible;

    fn resolve_wiki_link(&self, _key: &str) -> Result<Option<ResolvedLink>, Infallible> {
        Ok(None)
    }

    fn resolve_cite_link(&self, _cite_key: &str) -> Result<Option<ResolvedLink>, Infallible> {
        Ok(None)
    }
}

/// In-memory resolver over known page keys and cite keys.
#[derive(Debug, Clone)]
pub struct MapResolver {
    wiki_pages: HashSet<String>,
    cite_keys: HashSet<String>,
    wiki_url_prefix: String,
    bib_url_prefix: String,
}

impl Default for MapResolver {
    fn default() -> Self {
        Self {
            wiki_pages: HashSet::new(),
            cite_keys: HashSet::new(),
            wiki_url_prefix: DEFAULT_WIKI_URL_PREFIX.to_string(),
            bib_url_prefix: DEFAULT_BIB_URL_PREFIX.to_string(),
        }
    }
}

impl MapResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefixes(mut self, wiki: impl Into<String>, bib: impl Into<String>) -> Self {
        self.wiki_url_prefix = wiki.into();
        self.bib_url_prefix = bib.into();
        self
    }

    pub fn with_wiki_page(mut self, key: impl Into<String>) -> Self {
        self.wiki_pages.insert(key.into());
        self
    }

    pub fn with_cite_key(mut self, cite_key: impl Into<String>) -> Self {
        self.cite_keys.insert(cite_key.into());
        self
    }
}

impl LinkResolver for MapResolver {
    type Error = Infallible;

    fn resolve_wiki_link(&self, key: &str) -> Result<Option<ResolvedLink>, Infallible> {
        Ok(self
            .wiki_pages
            .contains(key)
            .then(|| ResolvedLink::to(format!("{}{key}", self.wiki_url_prefix))))
    }

    fn resolve_cite_link(&self, cite_key: &str) -> Result<Option<ResolvedLink>, Infallible> {
        Ok(self
            .cite_keys
            .contains(cite_key)
            .then(|| ResolvedLink::to(format!("{}{cite_key}", self.bib_url_prefix))))
    }
}
