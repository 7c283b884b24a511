use crate::parsing::inline::parse_inline;

use super::types::{Block, ListItem};

/// Deepest nesting a list item can reach; deeper indentation is clamped.
pub const MAX_LIST_DEPTH: usize = 32;

#[derive(Debug)]
struct OpenItem {
    ordered: bool,
    text: String,
    children: Vec<ListItem>,
}

/// The path of list items currently open, one per depth, plus the finished
/// top-level items of the current run.
///
/// `open[d]` is the open item at depth `d`, so a new item can attach to
/// at most `open.len()` and everything at or below its depth is closed first.
/// No recursion is involved, however deep the indentation.
#[derive(Debug, Default)]
pub struct ListStack {
    open: Vec<OpenItem>,
    run: Vec<ListItem>,
}

impl ListStack {
    pub fn is_open(&self) -> bool {
        !self.open.is_empty()
    }

    /// Opens an item for a list line indented by `indent` spaces.
    ///
    /// Depth is `indent / 2`, clamped to one below the deepest open item and
    /// to [`MAX_LIST_DEPTH`].
    pub fn push_item(&mut self, ordered: bool, indent: usize, content: &str) {
        let wanted = indent / 2;
        let depth = wanted.min(self.open.len()).min(MAX_LIST_DEPTH);
        if depth != wanted || indent % 2 != 0 {
            log::debug!("list item indent {indent} clamped to depth {depth}");
        }

        self.close_to(depth);
        self.open.push(OpenItem {
            ordered,
            text: content.to_string(),
            children: vec![],
        });
    }

    /// Appends an indented continuation line to the innermost open item.
    pub fn continue_item(&mut self, line: &str) {
        if let Some(item) = self.open.last_mut() {
            item.text.push('\n');
            item.text.push_str(line);
        }
    }

    /// Closes the whole run and emits it as one [`Block::List`].
    pub fn close_all(&mut self, out: &mut Vec<Block>) {
        self.close_to(0);
        if !self.run.is_empty() {
            out.push(Block::List(std::mem::take(&mut self.run)));
        }
    }

    /// Pops open items until only `depth` remain, attaching each to its parent.
    fn close_to(&mut self, depth: usize) {
        while self.open.len() > depth {
            let Some(open) = self.open.pop() else { break };
            let item = ListItem {
                ordered: open.ordered,
                depth: self.open.len(),
                text: parse_inline(&open.text),
                children: open.children,
            };
            match self.open.last_mut() {
                Some(parent) => parent.children.push(item),
                None => self.run.push(item),
            }
        }
    }
}
