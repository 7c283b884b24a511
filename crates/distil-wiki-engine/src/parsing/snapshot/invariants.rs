use crate::parsing::{
    Document,
    blocks::{Block, ListItem, MAX_LIST_DEPTH},
    inline::Span,
};

/// Validates parser output invariants.
///
/// Asserts that:
/// - Heading levels are 1 to 3
/// - List runs are non-empty and every list child sits exactly one level below its parent, within the cap
/// - Inline sequences have no empty spans and no adjacent `Text` spans
/// - Span content never contains a line break, except plain text
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(doc: &Document) {
    for block in &doc.blocks {
        match block {
            Block::Heading { level, text } => {
                assert!(
                    (1..=3).contains(level),
                    "heading level out of range: {level}"
                );
                check_inline(text);
            }
            Block::Paragraph { text } => check_inline(text),
            Block::List(items) => {
                assert!(!items.is_empty(), "empty list run emitted");
                for item in items {
                    assert_eq!(item.depth, 0, "top-level list item has depth {}", item.depth);
                    check_item(item);
                }
            }
            Block::Preformatted { lines } => {
                assert!(!lines.is_empty(), "empty preformatted block emitted");
            }
        }
    }
}

fn check_item(item: &ListItem) {
    assert!(
        item.depth <= MAX_LIST_DEPTH,
        "list depth {} exceeds cap {MAX_LIST_DEPTH}",
        item.depth
    );
    check_inline(&item.text);
    for child in &item.children {
        assert_eq!(
            child.depth,
            item.depth + 1,
            "child at depth {} under parent at depth {}",
            child.depth,
            item.depth
        );
        check_item(child);
    }
}

fn check_inline(spans: &[Span]) {
    for pair in spans.windows(2) {
        assert!(
            !matches!(pair, [Span::Text(_), Span::Text(_)]),
            "adjacent text spans: {pair:?}"
        );
    }
    for span in spans {
        let content = match span {
            Span::Text(t) => {
                assert!(!t.is_empty(), "empty text span");
                continue;
            }
            Span::Bold(t)
            | Span::Italic(t)
            | Span::Highlight(t)
            | Span::Code(t)
            | Span::WikiLink(t)
            | Span::CiteLink(t)
            | Span::Url(t) => t,
        };
        assert!(!content.is_empty(), "empty span: {span:?}");
        assert!(!content.contains('\n'), "span crosses a line: {span:?}");
    }
}
