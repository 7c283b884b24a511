//! Link resolution and note loading against a Distil library on disk.
//!
//! Layout under the library root:
//!
//! - `wiki/<key>/<key>.wiki`: one wiki page per directory
//! - `bibs/<cite-key>/`: one directory per bibliography entry

use distil_wiki_engine::{LinkResolver, RenderOptions, ResolvedLink};
use relative_path::{RelativePath, RelativePathBuf};
use std::path::{Path, PathBuf};

const WIKI_SUBDIR: &str = "wiki";
const BIBS_SUBDIR: &str = "bibs";
const WIKI_EXTENSION: &str = "wiki";

#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    #[error("Invalid library directory: {0}")]
    InvalidLibraryDir(PathBuf),
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Resolves wiki and cite links by checking which pages and bib entries
/// exist in the library.
#[derive(Debug, Clone)]
pub struct LibraryResolver {
    root: PathBuf,
    wiki_url_prefix: String,
    bib_url_prefix: String,
}

impl LibraryResolver {
    pub fn open(root: impl Into<PathBuf>, options: &RenderOptions) -> Result<Self, LibraryError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(LibraryError::InvalidLibraryDir(root));
        }
        Ok(Self {
            root,
            wiki_url_prefix: options.wiki_url_prefix.clone(),
            bib_url_prefix: options.bib_url_prefix.clone(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Reads a wiki page by key. A missing page reads as empty text.
    pub fn read_wiki_page(&self, key: &str) -> Result<String, LibraryError> {
        let Some(relative) = wiki_page_path(key) else {
            return Ok(String::new());
        };
        let path = relative.to_path(&self.root);
        if !self.exists(&relative)? {
            return Ok(String::new());
        }
        let text = std::fs::read_to_string(&path)
            .map_err(|source| LibraryError::Io { path, source })?;
        Ok(clean_note_text(&text))
    }

    fn exists(&self, relative: &RelativePath) -> Result<bool, LibraryError> {
        let path = relative.to_path(&self.root);
        path.try_exists()
            .map_err(|source| LibraryError::Io { path, source })
    }
}

impl LinkResolver for LibraryResolver {
    type Error = LibraryError;

    fn resolve_wiki_link(&self, key: &str) -> Result<Option<ResolvedLink>, LibraryError> {
        let Some(relative) = wiki_page_path(key) else {
            return Ok(None);
        };
        Ok(self
            .exists(&relative)?
            .then(|| ResolvedLink::to(format!("{}{key}", self.wiki_url_prefix))))
    }

    fn resolve_cite_link(&self, cite_key: &str) -> Result<Option<ResolvedLink>, LibraryError> {
        let Some(relative) = bib_dir_path(cite_key) else {
            return Ok(None);
        };
        Ok(self
            .exists(&relative)?
            .then(|| ResolvedLink::to(format!("{}{cite_key}", self.bib_url_prefix))))
    }
}

/// Keys become directory names, so anything that could escape the library
/// is treated as not found.
fn is_safe_component(key: &str) -> bool {
    !key.is_empty() && !key.starts_with('.') && !key.contains(['/', '\\'])
}

fn wiki_page_path(key: &str) -> Option<RelativePathBuf> {
    if !is_safe_component(key) {
        log::debug!("refusing wiki key {key:?} as a library path");
        return None;
    }
    Some(
        RelativePathBuf::from(WIKI_SUBDIR)
            .join(key)
            .join(format!("{key}.{WIKI_EXTENSION}")),
    )
}

fn bib_dir_path(cite_key: &str) -> Option<RelativePathBuf> {
    if !is_safe_component(cite_key) {
        log::debug!("refusing cite key {cite_key:?} as a library path");
        return None;
    }
    Some(RelativePathBuf::from(BIBS_SUBDIR).join(cite_key))
}

/// Trailing whitespace is dropped and line endings become `\n`.
pub fn clean_note_text(text: &str) -> String {
    text.trim_end().replace("\r\n", "\n").replace('\r', "\n")
}
