pub mod blocks;
pub mod inline;
pub mod markup;
pub mod snapshot;

#[cfg(test)]
mod tests;

use std::borrow::Cow;

use serde::Serialize;

use blocks::{Block, BlockBuilder, WikiLineClassifier};

/// A parsed wiki document: top-level blocks in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Serializes the tree back to wiki markup. See [`markup::to_markup`].
    pub fn to_markup(&self) -> String {
        markup::to_markup(self)
    }
}

/// Parses raw wiki text into a [`Document`].
///
/// Total: every input has a parse, and malformed markup degrades to text.
pub fn parse_blocks(raw_text: &str) -> Document {
    let text = normalize_line_endings(raw_text);
    let classifier = WikiLineClassifier;
    let mut builder = BlockBuilder::new();

    for line in text.lines() {
        let lc = classifier.classify(line);
        builder.push(&lc);
    }

    Document {
        blocks: builder.finish(),
    }
}

/// `\r\n` and lone `\r` both end a line.
fn normalize_line_endings(s: &str) -> Cow<'_, str> {
    if s.contains('\r') {
        Cow::Owned(s.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(s)
    }
}
