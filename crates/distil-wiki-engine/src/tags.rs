//! Topic tag normalization and display grouping.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

/// Punctuation that survives normalization; everything else non-alphanumeric
/// is stripped.
pub const ALLOWED_PUNCTUATION: [char; 4] = ['-', '_', '.', ':'];

/// Number of columns tags are split into for display.
pub const DISPLAY_COLUMNS: usize = 4;

const NAMESPACE_SEPARATOR: char = ':';

/// A normalized topic tag. Only constructed through [`normalize_tag`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Lower-cases `raw` and strips disallowed characters. Only the first colon is
/// kept. Returns `None` when nothing is left.
pub fn normalize_tag(raw: &str) -> Option<Tag> {
    let mut seen_separator = false;
    let normalized: String = raw
        .to_lowercase()
        .chars()
        .filter(|&c| {
            if c == NAMESPACE_SEPARATOR {
                !std::mem::replace(&mut seen_separator, true)
            } else {
                c.is_alphanumeric() || ALLOWED_PUNCTUATION.contains(&c)
            }
        })
        .collect();

    (!normalized.is_empty()).then_some(Tag(normalized))
}

/// Splits free-form tag input at whitespace and commas.
pub fn split_tag_input(input: &str) -> impl Iterator<Item = &str> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
}

/// A deduplicated, sorted set of tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagSet(BTreeSet<Tag>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes and inserts `raw`. Returns `false` if it normalized to
    /// nothing or was already present.
    pub fn insert(&mut self, raw: &str) -> bool {
        match normalize_tag(raw) {
            Some(tag) => self.0.insert(tag),
            None => false,
        }
    }

    /// Inserts every tag found in free-form input.
    pub fn extend_from_input(&mut self, input: &str) {
        for raw in split_tag_input(input) {
            self.insert(raw);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, raw: &str) -> bool {
        normalize_tag(raw).is_some_and(|tag| self.0.contains(&tag))
    }

    /// Splits the sorted tags into at most `n` columns of `⌈len/n⌉` tags each.
    /// The last column may be shorter; an empty set has no columns.
    pub fn columns(&self, n: usize) -> Vec<Vec<&Tag>> {
        let tags: Vec<&Tag> = self.0.iter().collect();
        if tags.is_empty() {
            return vec![];
        }
        let per_column = tags.len().div_ceil(n.max(1));
        tags.chunks(per_column).map(<[&Tag]>::to_vec).collect()
    }
}

impl<'a> Extend<&'a str> for TagSet {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for raw in iter {
            self.insert(raw);
        }
    }
}

impl<'a> FromIterator<&'a str> for TagSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
