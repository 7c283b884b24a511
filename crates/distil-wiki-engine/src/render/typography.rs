//! Typographic clean-up of already-escaped text.
//!
//! Operates on HTML-escaped input, so `>` is matched as `&gt;` and `<` as
//! `&lt;`. The output may contain entities and `<i>` tags.

use std::sync::OnceLock;

use regex::{Captures, Regex};

const ARROWS: [(&str, &str); 7] = [
    ("&lt;-&gt;", "&harr;"),
    ("&lt;--&gt;", "&harr;"),
    ("&lt;=&gt;", "&hArr;"),
    ("&lt;==&gt;", "&hArr;"),
    ("-&gt;", "&rarr;"),
    ("=&gt;", "&rArr;"),
    ("&gt;&gt;", "&raquo;"),
];

fn regex(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("Invalid typography regex"))
}

/// Applies every rewrite in order: quotes, abbreviations, multi-character
/// sequences, then dashes (so `<-->` is an arrow, not a dash).
///
/// `at_line_start` says whether `escaped` begins a physical line. Text that
/// follows another span on the same line does not.
pub fn apply(escaped: &str, at_line_start: bool) -> String {
    let s = smart_quotes(escaped, at_line_start);
    let s = abbreviations(&s);
    let s = multi_char_sequences(&s);
    dashes(&s)
}

/// A `"` at the start of a line, or after a space or `(`, opens; any other
/// closes.
fn smart_quotes(s: &str, at_line_start: bool) -> String {
    static LEADING: OnceLock<Regex> = OnceLock::new();
    static AFTER_SPACE: OnceLock<Regex> = OnceLock::new();

    let s = regex(&LEADING, r#"(?m)^""#).replace_all(s, |caps: &Captures<'_>| {
        let mid_line = caps.get(0).is_some_and(|m| m.start() == 0) && !at_line_start;
        if mid_line { "\"" } else { "&ldquo;" }
    });
    let s = regex(&AFTER_SPACE, r#"([ (])""#).replace_all(&s, "${1}&ldquo;");
    s.replace('"', "&rdquo;")
}

/// Italicizes `etc.`, `eg`/`ie` before `.` or `,`, and `vs`/`aka` before a
/// space or `.`, as whole words only.
fn abbreviations(s: &str) -> String {
    static ABBREV: OnceLock<Regex> = OnceLock::new();

    regex(&ABBREV, r"\b(etc|eg|ie|vs|aka)([., ])")
        .replace_all(s, |caps: &Captures<'_>| {
            let (word, punct) = (&caps[1], &caps[2]);
            let styled = matches!(
                (word, punct),
                ("etc", ".") | ("eg" | "ie", "." | ",") | ("vs" | "aka", "." | " ")
            );
            if styled {
                format!("<i>{word}</i>{punct}")
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

fn multi_char_sequences(s: &str) -> String {
    let mut s = s.replace("...", "&hellip;");
    for (from, to) in ARROWS {
        s = s.replace(from, to);
    }
    s
}

/// `--` and a spaced ` - ` become em-dashes; `3-5` gets an en-dash.
fn dashes(s: &str) -> String {
    static SPACED: OnceLock<Regex> = OnceLock::new();
    static RANGE: OnceLock<Regex> = OnceLock::new();

    let s = s.replace("--", "&mdash;");
    let s = regex(&SPACED, r"(\s)-(\s)").replace_all(&s, "${1}&mdash;${2}");
    regex(&RANGE, r"(\d)-(\d)")
        .replace_all(&s, "${1}&ndash;${2}")
        .into_owned()
}
