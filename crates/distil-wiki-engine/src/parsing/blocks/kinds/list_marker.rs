use std::sync::OnceLock;

use regex::Regex;

/// The marker that starts a list item line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMarker {
    /// `* item`
    Bullet,
    /// `1. item` (any run of digits)
    Numbered,
}

/// A list item line split into its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLine<'a> {
    pub marker: ListMarker,
    /// Leading spaces before the marker.
    pub indent: usize,
    pub content: &'a str,
}

impl ListMarker {
    pub const BULLET: char = '*';

    pub fn is_ordered(self) -> bool {
        matches!(self, ListMarker::Numbered)
    }

    /// Matches `<spaces><marker><space><content>` on a line whose trailing
    /// whitespace is already removed.
    pub fn parse(line: &str) -> Option<ListLine<'_>> {
        static LIST_ITEM: OnceLock<Regex> = OnceLock::new();
        let re = LIST_ITEM.get_or_init(|| {
            Regex::new(r"^( *)(\*|[0-9]+\.) (.*)$").expect("Invalid list item regex")
        });

        let caps = re.captures(line)?;
        let indent = caps.get(1).map_or(0, |m| m.len());
        let marker = if caps.get(2)?.as_str().starts_with(Self::BULLET) {
            ListMarker::Bullet
        } else {
            ListMarker::Numbered
        };
        let content = caps.get(3)?.as_str().trim_start();
        Some(ListLine {
            marker,
            indent,
            content,
        })
    }
}
