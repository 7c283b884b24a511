pub mod parsing;
pub mod render;
pub mod tags;

// Re-export key types for easier usage
pub use parsing::{
    Document,
    blocks::{Block, ListItem, MAX_LIST_DEPTH},
    inline::{InlineSequence, Span, parse_inline, wiki_key},
    parse_blocks,
};
pub use render::{
    LinkKind, LinkResolver, MapResolver, NoLinks, RenderError, RenderOptions, ResolvedLink,
    render,
};
pub use tags::{DISPLAY_COLUMNS, Tag, TagSet, normalize_tag, split_tag_input};

/// Parses `raw_text` and renders it in one step.
pub fn render_html<R: LinkResolver>(
    raw_text: &str,
    resolver: &R,
    options: &RenderOptions,
) -> Result<String, RenderError<R::Error>> {
    render(&parse_blocks(raw_text), resolver, options)
}
