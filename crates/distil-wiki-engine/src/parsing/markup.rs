//! Serializes a [`Document`] back to canonical wiki markup.
//!
//! Inline content is reproduced exactly, so `parse_blocks(&doc.to_markup())`
//! yields `doc` again. Block layout is normalized: one blank line between
//! blocks, two spaces of indentation per list level, `1.` for every ordered
//! marker.

use super::{
    Document,
    blocks::{Block, ListItem, kinds::Preformat},
    inline::Span,
};

pub fn to_markup(doc: &Document) -> String {
    doc.blocks
        .iter()
        .map(block_markup)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn block_markup(block: &Block) -> String {
    match block {
        Block::Heading { level, text } => {
            let marker = "=".repeat(usize::from(*level));
            format!("{marker} {} {marker}", inline_markup(text))
        }
        Block::Paragraph { text } => inline_markup(text),
        Block::List(items) => {
            let mut out = String::new();
            for item in items {
                list_markup(item, &mut out);
            }
            out.truncate(out.trim_end_matches('\n').len());
            out
        }
        Block::Preformatted { lines } => {
            format!("{}\n{}\n{}", Preformat::OPEN, lines.join("\n"), Preformat::CLOSE)
        }
    }
}

/// Writes an item and its descendants, one line each.
fn list_markup(item: &ListItem, out: &mut String) {
    let indent = "  ".repeat(item.depth);
    let marker = if item.ordered { "1." } else { "*" };
    let text = inline_markup(&item.text);
    let mut lines = text.split('\n');

    out.push_str(&format!("{indent}{marker} {}\n", lines.next().unwrap_or_default()));
    for continuation in lines {
        out.push_str(&format!("{indent}  {continuation}\n"));
    }
    for child in &item.children {
        list_markup(child, out);
    }
}

pub fn inline_markup(spans: &[Span]) -> String {
    spans
        .iter()
        .map(|span| match span {
            Span::Text(t) | Span::Url(t) => t.clone(),
            Span::Bold(t) => format!("**{t}**"),
            Span::Italic(t) => format!("//{t}//"),
            Span::Highlight(t) => format!("+++{t}+++"),
            Span::Code(t) => format!("`{t}`"),
            Span::WikiLink(label) => format!("[{label}]"),
            Span::CiteLink(key) => format!("[cite:{key}]"),
        })
        .collect()
}
