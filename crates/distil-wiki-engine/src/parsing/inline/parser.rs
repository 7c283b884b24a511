use super::{
    cursor::Cursor,
    kinds::{AutoUrl, CiteLink, CodeSpan, Emphasis, WikiLink},
    types::{InlineSequence, Span},
};

/// Outcome of trying one construct at the cursor.
enum Attempt {
    Parsed(Span),
    /// The opener matched but never closed on its line. Its bytes are
    /// emitted as literal text and scanning resumes after them.
    Unclosed(usize),
}

/// Parses inline markup into a sequence of [`Span`]s.
///
/// Never fails. Constructs only close on the physical line they open on, and
/// unterminated openers fall back to literal text. Adjacent text is
/// coalesced into a single [`Span::Text`].
pub fn parse_inline(s: &str) -> InlineSequence {
    let mut cur = Cursor::new(s);
    let mut out = SpanBuf::default();

    while !cur.eof() {
        let start = cur.i;
        match try_parse_span(&mut cur) {
            Some(Attempt::Parsed(span)) => out.push(span),
            Some(Attempt::Unclosed(len)) => {
                cur.bump_n(len);
                out.push_text(&s[start..cur.i]);
            }
            None => {
                cur.bump();
                out.push_text(&s[start..cur.i]);
            }
        }
    }

    out.finish()
}

/// Accumulates spans, merging runs of plain text.
#[derive(Default)]
struct SpanBuf {
    spans: Vec<Span>,
    text: String,
}

impl SpanBuf {
    fn push_text(&mut self, t: &str) {
        self.text.push_str(t);
    }

    fn push(&mut self, span: Span) {
        self.flush_text();
        self.spans.push(span);
    }

    fn flush_text(&mut self) {
        if !self.text.is_empty() {
            self.spans.push(Span::Text(std::mem::take(&mut self.text)));
        }
    }

    fn finish(mut self) -> InlineSequence {
        self.flush_text();
        self.spans
    }
}

/// Dispatches on the byte under the cursor, in precedence order.
fn try_parse_span(cur: &mut Cursor<'_>) -> Option<Attempt> {
    match cur.peek()? {
        b'[' => try_parse_cite_link(cur).or_else(|| try_parse_wiki_link(cur)),
        b'*' | b'/' | b'+' => try_parse_emphasis(cur),
        b'`' => try_parse_code_span(cur),
        b'h' => try_parse_url(cur),
        _ => None,
    }
}

/// `[cite:key]`. Returns `None` (deferring to wiki-link parsing) when the
/// brackets don't close or the key is empty.
fn try_parse_cite_link(cur: &mut Cursor<'_>) -> Option<Attempt> {
    if !cur.starts_with(CiteLink::OPEN) {
        return None;
    }
    let key_start = cur.i + CiteLink::OPEN.len();
    let close = cur.find_on_line(key_start, CiteLink::CLOSE, |_| true)?;
    if close == key_start {
        return None;
    }
    let key = cur.s[key_start..close].to_string();
    cur.i = close + CiteLink::CLOSE.len();
    Some(Attempt::Parsed(Span::CiteLink(key)))
}

fn try_parse_wiki_link(cur: &mut Cursor<'_>) -> Option<Attempt> {
    if !cur.starts_with(WikiLink::OPEN) {
        return None;
    }
    let label_start = cur.i + WikiLink::OPEN.len();
    let Some(close) = cur.find_on_line(label_start, WikiLink::CLOSE, |_| true) else {
        return Some(Attempt::Unclosed(WikiLink::OPEN.len()));
    };
    let label = &cur.s[label_start..close];
    if label.trim().is_empty() {
        return Some(Attempt::Unclosed(WikiLink::OPEN.len()));
    }
    let label = label.to_string();
    cur.i = close + WikiLink::CLOSE.len();
    Some(Attempt::Parsed(Span::WikiLink(label)))
}

/// Bold, italic or highlight. Content must be non-empty, and nothing inside
/// is interpreted: only the matching closer is searched for.
fn try_parse_emphasis(cur: &mut Cursor<'_>) -> Option<Attempt> {
    let s = cur.s;
    let kind = Emphasis::ALL
        .into_iter()
        .find(|k| cur.starts_with(k.delimiter()) && k.delimiter_allowed(s, cur.i))?;
    let delim = kind.delimiter();
    let content_start = cur.i + delim.len();

    let Some(close) =
        cur.find_on_line(content_start + 1, delim, |at| kind.delimiter_allowed(s, at))
    else {
        return Some(Attempt::Unclosed(delim.len()));
    };

    let content = s[content_start..close].to_string();
    cur.i = close + delim.len();
    Some(Attempt::Parsed(match kind {
        Emphasis::Bold => Span::Bold(content),
        Emphasis::Italic => Span::Italic(content),
        Emphasis::Highlight => Span::Highlight(content),
    }))
}

fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<Attempt> {
    if !cur.starts_with(CodeSpan::TICK) {
        return None;
    }
    let content_start = cur.i + CodeSpan::TICK.len();
    let Some(close) = cur.find_on_line(content_start + 1, CodeSpan::TICK, |_| true) else {
        return Some(Attempt::Unclosed(CodeSpan::TICK.len()));
    };
    let content = cur.s[content_start..close].to_string();
    cur.i = close + CodeSpan::TICK.len();
    Some(Attempt::Parsed(Span::Code(content)))
}

fn try_parse_url(cur: &mut Cursor<'_>) -> Option<Attempt> {
    let start = cur.i;
    let len = AutoUrl::scan(&cur.s[start..])?;
    cur.i = start + len;
    Some(Attempt::Parsed(Span::Url(cur.s[start..cur.i].to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> Span {
        Span::Text(s.to_string())
    }

    #[test]
    fn parse_simple_text() {
        assert_eq!(parse_inline("hello world"), vec![text("hello world")]);
    }

    #[test]
    fn empty_input_has_no_spans() {
        assert!(parse_inline("").is_empty());
    }

    #[test]
    fn parse_bold_and_italic() {
        assert_eq!(
            parse_inline("**bold** and //italic//"),
            vec![
                Span::Bold("bold".into()),
                text(" and "),
                Span::Italic("italic".into()),
            ]
        );
    }

    #[test]
    fn parse_highlight() {
        assert_eq!(
            parse_inline("a +++key point+++ b"),
            vec![text("a "), Span::Highlight("key point".into()), text(" b")]
        );
    }

    #[test]
    fn parse_wiki_link_keeps_label() {
        let spans = parse_inline("[Some Page]");
        assert_eq!(spans, vec![Span::WikiLink("Some Page".into())]);
        assert_eq!(spans[0].link_key().as_deref(), Some("some-page"));
    }

    #[test]
    fn parse_cite_link_preserves_case() {
        assert_eq!(
            parse_inline("see [cite:Smith2020]"),
            vec![text("see "), Span::CiteLink("Smith2020".into())]
        );
    }

    #[test]
    fn unclosed_bold_becomes_text() {
        assert_eq!(
            parse_inline("**bold without close"),
            vec![text("**bold without close")]
        );
    }

    #[test]
    fn unclosed_opener_does_not_swallow_later_spans() {
        assert_eq!(
            parse_inline("**a //b//"),
            vec![text("**a "), Span::Italic("b".into())]
        );
    }

    #[test]
    fn spans_do_not_nest() {
        assert_eq!(
            parse_inline("**a //b// [c]**"),
            vec![Span::Bold("a //b// [c]".into())]
        );
    }

    #[test]
    fn spans_do_not_cross_lines() {
        assert_eq!(parse_inline("**a\nb**"), vec![text("**a\nb**")]);
        assert_eq!(
            parse_inline("[a\nb] **c**"),
            vec![text("[a\nb] "), Span::Bold("c".into())]
        );
    }

    #[test]
    fn empty_content_is_literal() {
        assert_eq!(parse_inline("****"), vec![text("****")]);
        assert_eq!(parse_inline("[] [ ]"), vec![text("[] [ ]")]);
        assert_eq!(parse_inline("``"), vec![text("``")]);
    }

    #[test]
    fn parse_code_span() {
        assert_eq!(
            parse_inline("run `make **all**`"),
            vec![text("run "), Span::Code("make **all**".into())]
        );
    }

    #[test]
    fn parse_url_strips_trailing_punctuation() {
        assert_eq!(
            parse_inline("see http://example.org/a."),
            vec![
                text("see "),
                Span::Url("http://example.org/a".into()),
                text("."),
            ]
        );
    }

    #[test]
    fn url_scheme_does_not_open_italic() {
        assert_eq!(
            parse_inline("http://a.org and //it//"),
            vec![
                Span::Url("http://a.org".into()),
                text(" and "),
                Span::Italic("it".into()),
            ]
        );
    }

    #[test]
    fn url_scheme_does_not_close_italic() {
        assert_eq!(
            parse_inline("//see http://x//"),
            vec![Span::Italic("see http://x".into())]
        );
    }

    #[test]
    fn multibyte_text_around_spans() {
        assert_eq!(
            parse_inline("café **forte** é"),
            vec![text("café "), Span::Bold("forte".into()), text(" é")]
        );
    }

    #[test]
    fn stray_markers_coalesce_into_one_text() {
        assert_eq!(parse_inline("a ** b // c"), vec![text("a ** b // c")]);
    }
}
