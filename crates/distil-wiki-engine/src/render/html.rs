use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::parsing::{
    Document,
    blocks::{Block, ListItem},
    inline::Span,
};

use super::{
    RenderError, RenderOptions,
    resolver::{LinkKind, LinkResolver, ResolvedLink},
    typography,
};

const MAX_HEADING_LEVEL: u8 = 6;

const CLASS_RESOLVED: &str = "wiki-normal";
const CLASS_UNRESOLVED: &str = "wiki-not-found";
const CLASS_EXTERNAL: &str = "external";

/// Accumulates the HTML for one document.
pub(super) struct HtmlWriter<'r, R: LinkResolver> {
    resolver: &'r R,
    options: &'r RenderOptions,
    out: String,
}

impl<'r, R: LinkResolver> HtmlWriter<'r, R> {
    pub(super) fn new(resolver: &'r R, options: &'r RenderOptions) -> Self {
        Self {
            resolver,
            options,
            out: String::new(),
        }
    }

    pub(super) fn document(mut self, doc: &Document) -> Result<String, RenderError<R::Error>> {
        for block in &doc.blocks {
            self.block(block)?;
            self.out.push('\n');
        }
        Ok(self.out)
    }

    fn block(&mut self, block: &Block) -> Result<(), RenderError<R::Error>> {
        match block {
            Block::Heading { level, text } => {
                let level = level
                    .saturating_add(self.options.heading_offset)
                    .min(MAX_HEADING_LEVEL);
                self.out.push_str(&format!("<h{level}>"));
                self.inline(text)?;
                self.out.push_str(&format!("</h{level}>"));
            }
            Block::Paragraph { text } => {
                self.out.push_str("<p>");
                self.inline(text)?;
                self.out.push_str("</p>");
            }
            Block::Preformatted { lines } => {
                self.out.push_str("<pre>");
                self.out.push_str(&encode_text(&lines.join("\n")));
                self.out.push_str("</pre>");
            }
            Block::List(items) => self.list(items)?,
        }
        Ok(())
    }

    /// Writes sibling items, opening a new `<ul>`/`<ol>` whenever the marker
    /// kind changes.
    fn list(&mut self, items: &[ListItem]) -> Result<(), RenderError<R::Error>> {
        let mut open: Option<bool> = None;
        for item in items {
            if open != Some(item.ordered) {
                if let Some(ordered) = open {
                    self.out.push_str(container(ordered).1);
                }
                self.out.push_str(container(item.ordered).0);
                open = Some(item.ordered);
            }
            self.out.push_str("<li>");
            self.inline(&item.text)?;
            if !item.children.is_empty() {
                self.list(&item.children)?;
            }
            self.out.push_str("</li>");
        }
        if let Some(ordered) = open {
            self.out.push_str(container(ordered).1);
        }
        Ok(())
    }

    fn inline(&mut self, spans: &[Span]) -> Result<(), RenderError<R::Error>> {
        let options = self.options;
        for (i, span) in spans.iter().enumerate() {
            match span {
                Span::Text(t) => self.text(t, i == 0),
                Span::Bold(t) => self.wrapped("b", t),
                Span::Italic(t) => self.wrapped("i", t),
                Span::Highlight(t) => self.wrapped("mark", t),
                Span::Code(t) => self.wrapped("code", t),
                Span::WikiLink(source_text) | Span::CiteLink(source_text) => {
                    let (kind, prefix) = match span {
                        Span::CiteLink(_) => (LinkKind::Cite, &options.bib_url_prefix),
                        _ => (LinkKind::Wiki, &options.wiki_url_prefix),
                    };
                    let key = span.link_key().unwrap_or_else(|| source_text.clone());
                    let resolved = self.resolve(kind, &key)?;
                    self.link(resolved, prefix, &key, source_text);
                }
                Span::Url(url) => self.anchor(CLASS_EXTERNAL, url, url),
            }
        }
        Ok(())
    }

    /// Only the first span of a block can begin a line; later text spans
    /// follow another span on the same line.
    fn text(&mut self, t: &str, at_line_start: bool) {
        let escaped = encode_text(t);
        if self.options.typography {
            self.out.push_str(&typography::apply(&escaped, at_line_start));
        } else {
            self.out.push_str(&escaped);
        }
    }

    fn resolve(
        &self,
        kind: LinkKind,
        key: &str,
    ) -> Result<Option<ResolvedLink>, RenderError<R::Error>> {
        match kind {
            LinkKind::Wiki => self.resolver.resolve_wiki_link(key),
            LinkKind::Cite => self.resolver.resolve_cite_link(key),
        }
        .map_err(|source| RenderError::Resolver {
            kind,
            key: key.to_string(),
            source,
        })
    }

    fn wrapped(&mut self, tag: &str, t: &str) {
        self.out.push_str(&format!("<{tag}>{}</{tag}>", encode_text(t)));
    }

    fn link(&mut self, resolved: Option<ResolvedLink>, prefix: &str, key: &str, source_text: &str) {
        match resolved {
            Some(link) => {
                let display = link.display_text.as_deref().unwrap_or(source_text);
                self.anchor(CLASS_RESOLVED, &link.target_url, display);
            }
            None => {
                log::trace!("unresolved link target {key}");
                self.anchor(CLASS_UNRESOLVED, &format!("{prefix}{key}"), source_text);
            }
        }
    }

    fn anchor(&mut self, class: &str, href: &str, display: &str) {
        self.out.push_str(&format!(
            "<a class=\"{class}\" href=\"{}\">{}</a>",
            encode_double_quoted_attribute(href),
            encode_text(display)
        ));
    }
}

fn container(ordered: bool) -> (&'static str, &'static str) {
    if ordered {
        ("<ol>", "</ol>")
    } else {
        ("<ul>", "</ul>")
    }
}
