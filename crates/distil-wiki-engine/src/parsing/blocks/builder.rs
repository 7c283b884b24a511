use crate::parsing::inline::parse_inline;

use super::{
    classify::LineClass,
    kinds::Preformat,
    lists::ListStack,
    open::BlockOpen,
    types::Block,
};

#[derive(Debug)]
enum LeafState<'a> {
    None,
    Paragraph { lines: Vec<&'a str> },
    Preformat { lines: Vec<&'a str> },
}

/// Phase 2 of block parsing: a single forward pass over classified lines.
///
/// At most one leaf (paragraph or preformatted block) is open at a time, plus
/// the stack of open list items.
pub struct BlockBuilder<'a> {
    lists: ListStack,
    leaf: LeafState<'a>,
    out: Vec<Block>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new() -> Self {
        Self {
            lists: ListStack::default(),
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass<'a>) {
        if self.in_preformat() {
            self.consume_preformat_line(c.text);
            return;
        }

        if c.is_blank {
            self.close_open_blocks();
            return;
        }

        match c.open {
            Some(BlockOpen::Preformat { rest }) => {
                self.close_open_blocks();
                self.open_preformat(rest);
            }
            Some(BlockOpen::Heading { level, inner }) => {
                self.close_open_blocks();
                self.out.push(Block::Heading {
                    level,
                    text: parse_inline(inner),
                });
            }
            Some(BlockOpen::ListItem(line)) => {
                self.flush_paragraph();
                self.lists
                    .push_item(line.marker.is_ordered(), line.indent, line.content);
            }
            None if self.lists.is_open() && c.indent > 0 => {
                self.lists.continue_item(&c.text[c.indent..]);
            }
            None => {
                self.lists.close_all(&mut self.out);
                self.extend_paragraph(c.text);
            }
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        if let LeafState::Preformat { .. } = self.leaf {
            log::debug!("preformatted block not closed before end of input");
            self.flush_preformat();
        }
        self.close_open_blocks();
        self.out
    }

    fn in_preformat(&self) -> bool {
        matches!(self.leaf, LeafState::Preformat { .. })
    }

    fn close_open_blocks(&mut self) {
        self.flush_paragraph();
        self.lists.close_all(&mut self.out);
    }

    fn open_preformat(&mut self, rest: &'a str) {
        if let Some(before) = Preformat::close(rest) {
            // Opened and closed on one line.
            if !before.is_empty() {
                self.out.push(Block::Preformatted {
                    lines: vec![before.to_string()],
                });
            }
            return;
        }

        let lines = if rest.is_empty() { vec![] } else { vec![rest] };
        self.leaf = LeafState::Preformat { lines };
    }

    fn consume_preformat_line(&mut self, text: &'a str) {
        let LeafState::Preformat { lines } = &mut self.leaf else {
            return;
        };
        match Preformat::close(text) {
            Some(before) => {
                if !before.is_empty() {
                    lines.push(before);
                }
                self.flush_preformat();
            }
            None => lines.push(text),
        }
    }

    fn extend_paragraph(&mut self, line: &'a str) {
        match &mut self.leaf {
            LeafState::Paragraph { lines } => lines.push(line),
            _ => self.leaf = LeafState::Paragraph { lines: vec![line] },
        }
    }

    fn flush_paragraph(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Paragraph { lines } = prev {
            self.out.push(Block::Paragraph {
                text: parse_inline(&lines.join("\n")),
            });
        } else {
            self.leaf = prev; // put back non-paragraph leaf
        }
    }

    fn flush_preformat(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Preformat { lines } = prev {
            if !lines.is_empty() {
                self.out.push(Block::Preformatted {
                    lines: lines.into_iter().map(str::to_string).collect(),
                });
            }
        } else {
            self.leaf = prev;
        }
    }
}

impl Default for BlockBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}
