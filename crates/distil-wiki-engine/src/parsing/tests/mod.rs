//! Block-level tests for the parsing module.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    Document,
    blocks::{Block, ListItem},
    inline::Span,
    parse_blocks, snapshot,
};

fn text(s: &str) -> Span {
    Span::Text(s.to_string())
}

fn item(ordered: bool, depth: usize, s: &str, children: Vec<ListItem>) -> ListItem {
    ListItem {
        ordered,
        depth,
        text: vec![text(s)],
        children,
    }
}

fn parse_checked(src: &str) -> Document {
    let doc = parse_blocks(src);
    snapshot::invariants(&doc);
    doc
}

#[test]
fn heading_level_one() {
    let doc = parse_checked("= Title =");
    assert_eq!(
        doc.blocks,
        vec![Block::Heading {
            level: 1,
            text: vec![text("Title")],
        }]
    );
}

#[test]
fn heading_with_inline_markup() {
    let doc = parse_checked("== On **bold** claims ==");
    assert_eq!(
        doc.blocks,
        vec![Block::Heading {
            level: 2,
            text: vec![text("On "), Span::Bold("bold".into()), text(" claims")],
        }]
    );
}

#[test]
fn four_equals_is_paragraph_text() {
    let doc = parse_checked("==== Not a heading ====");
    assert_eq!(
        doc.blocks,
        vec![Block::Paragraph {
            text: vec![text("==== Not a heading ====")],
        }]
    );
}

#[test]
fn paragraph_lines_join_and_blank_separates() {
    let doc = parse_checked("first line\nsecond line\n\nnext para");
    assert_eq!(
        doc.blocks,
        vec![
            Block::Paragraph {
                text: vec![text("first line\nsecond line")],
            },
            Block::Paragraph {
                text: vec![text("next para")],
            },
        ]
    );
}

#[test]
fn consecutive_blank_lines_are_one_separator() {
    let doc = parse_checked("a\n\n\n\nb");
    assert_eq!(doc.blocks.len(), 2);
}

#[test]
fn nested_ordered_list() {
    let doc = parse_checked("1. top\n  1. nested\n");
    assert_eq!(
        doc.blocks,
        vec![Block::List(vec![item(
            true,
            0,
            "top",
            vec![item(true, 1, "nested", vec![])],
        )])]
    );
}

#[test]
fn mixed_markers_are_siblings_by_depth() {
    let doc = parse_checked("* a\n1. b\n  * c\n  2. d\n");
    assert_eq!(
        doc.blocks,
        vec![Block::List(vec![
            item(false, 0, "a", vec![]),
            item(
                true,
                0,
                "b",
                vec![item(false, 1, "c", vec![]), item(true, 1, "d", vec![])],
            ),
        ])]
    );
}

#[test]
fn dedent_returns_to_ancestor_level() {
    let doc = parse_checked("* a\n  * b\n    * c\n  * d\n* e");
    assert_eq!(
        doc.blocks,
        vec![Block::List(vec![
            item(
                false,
                0,
                "a",
                vec![
                    item(false, 1, "b", vec![item(false, 2, "c", vec![])]),
                    item(false, 1, "d", vec![]),
                ],
            ),
            item(false, 0, "e", vec![]),
        ])]
    );
}

#[test]
fn misaligned_indent_is_clamped() {
    // 3 spaces floors to depth 1; 10 spaces can only go one level deeper.
    let doc = parse_checked("* a\n   * b\n          * c");
    assert_eq!(
        doc.blocks,
        vec![Block::List(vec![item(
            false,
            0,
            "a",
            vec![item(false, 1, "b", vec![item(false, 2, "c", vec![])])],
        )])]
    );
}

#[test]
fn blank_line_closes_list_run() {
    let doc = parse_checked("* a\n\n  * b");
    assert_eq!(
        doc.blocks,
        vec![
            Block::List(vec![item(false, 0, "a", vec![])]),
            Block::List(vec![item(false, 0, "b", vec![])]),
        ]
    );
}

#[test]
fn indented_text_continues_list_item() {
    let doc = parse_checked("* a long\n  item\nplain after");
    assert_eq!(
        doc.blocks,
        vec![
            Block::List(vec![item(false, 0, "a long\nitem", vec![])]),
            Block::Paragraph {
                text: vec![text("plain after")],
            },
        ]
    );
}

#[rstest]
#[case("* a\n\t* b", "\t* b")]
#[case("1. a\n\u{a0}1. b", "\u{a0}1. b")]
fn non_space_indent_ends_the_list(#[case] src: &str, #[case] para: &str) {
    let doc = parse_checked(src);
    assert_eq!(doc.blocks.len(), 2);
    assert!(matches!(&doc.blocks[0], Block::List(items) if items.len() == 1));
    assert_eq!(
        doc.blocks[1],
        Block::Paragraph {
            text: vec![text(para)],
        }
    );
}

#[test]
fn continuation_keeps_non_space_whitespace() {
    let doc = parse_checked("* a\n \u{a0}1. b");
    assert_eq!(
        doc.blocks,
        vec![Block::List(vec![item(false, 0, "a\n\u{a0}1. b", vec![])])]
    );
}

#[test]
fn list_after_paragraph_flushes_it() {
    let doc = parse_checked("intro:\n* a");
    assert_eq!(
        doc.blocks,
        vec![
            Block::Paragraph {
                text: vec![text("intro:")],
            },
            Block::List(vec![item(false, 0, "a", vec![])]),
        ]
    );
}

#[test]
fn heading_closes_list_and_paragraph() {
    let doc = parse_checked("* a\n= H =\ntext\n== I ==");
    assert_eq!(
        doc.blocks,
        vec![
            Block::List(vec![item(false, 0, "a", vec![])]),
            Block::Heading {
                level: 1,
                text: vec![text("H")],
            },
            Block::Paragraph {
                text: vec![text("text")],
            },
            Block::Heading {
                level: 2,
                text: vec![text("I")],
            },
        ]
    );
}

#[test]
fn mid_line_marker_does_not_start_block() {
    let doc = parse_checked("costs * 2 and = x =");
    assert_eq!(doc.blocks.len(), 1);
    assert!(matches!(doc.blocks[0], Block::Paragraph { .. }));
}

#[test]
fn preformatted_is_a_raw_zone() {
    let doc = parse_checked("{{{\n= not heading =\n* not list\n\n}}}\nafter");
    assert_eq!(
        doc.blocks,
        vec![
            Block::Preformatted {
                lines: vec![
                    "= not heading =".into(),
                    "* not list".into(),
                    "".into(),
                ],
            },
            Block::Paragraph {
                text: vec![text("after")],
            },
        ]
    );
}

#[test]
fn preformatted_on_one_line() {
    let doc = parse_checked("{{{raw <b>}}}");
    assert_eq!(
        doc.blocks,
        vec![Block::Preformatted {
            lines: vec!["raw <b>".into()],
        }]
    );
}

#[test]
fn unterminated_preformatted_runs_to_end() {
    let doc = parse_checked("{{{first\nsecond");
    assert_eq!(
        doc.blocks,
        vec![Block::Preformatted {
            lines: vec!["first".into(), "second".into()],
        }]
    );
}

#[test]
fn windows_line_endings() {
    let doc = parse_checked("= T =\r\n\r\nbody\rmore\r\n");
    assert_eq!(
        doc.blocks,
        vec![
            Block::Heading {
                level: 1,
                text: vec![text("T")],
            },
            Block::Paragraph {
                text: vec![text("body\nmore")],
            },
        ]
    );
}

#[test]
fn empty_document() {
    assert!(parse_checked("").is_empty());
}

#[test]
fn blank_lines_only() {
    assert!(parse_checked("\n  \n\t\n").is_empty());
}

#[rstest]
#[case("**")]
#[case("[")]
#[case("[cite:")]
#[case("= =")]
#[case("{{{")]
#[case("}}}")]
#[case("* \n  *\n    * *")]
#[case("\u{0}\u{feff}**é//ü+++")]
#[case("  \n    1.\n1. \n")]
#[case("= [ ** // +++ ` =")]
fn malformed_input_degrades_without_panicking(#[case] src: &str) {
    let doc = parse_checked(src);
    assert_eq!(parse_blocks(&doc.to_markup()), doc);
}

#[test]
fn deep_indentation_is_bounded() {
    let src: String = (0..500)
        .map(|level| format!("{}* level {level}\n", "  ".repeat(level)))
        .collect();
    let doc = parse_checked(&src);
    assert_eq!(doc.blocks.len(), 1);
}

#[rstest]
#[case("= Title =\n\nSome **bold** text\nand a [Wiki Page].")]
#[case("== Refs ==\n* [cite:Knuth1984] on //literate// programming\n  1. see http://example.org\n")]
#[case("{{{\n  keep   spacing\n}}}\n\n+++note+++ `code`")]
#[case("* a\n\n* b\n1. c\n\n  2. d")]
#[case("* a\n\t* b")]
#[case("* a\n \u{a0}1. b")]
#[case("1. a\n  \t  * b\n\u{3000}* c")]
fn reparsing_markup_is_idempotent(#[case] src: &str) {
    let doc = parse_checked(src);
    let markup = doc.to_markup();
    let reparsed = parse_checked(&markup);
    assert_eq!(reparsed, doc);
    assert_eq!(reparsed.to_markup(), markup);
}

/// Seeded xorshift64, so every run generates the same inputs.
struct XorShift(u64);

impl XorShift {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }

    fn pick<'a>(&mut self, from: &[&'a str]) -> &'a str {
        from[(self.next() % from.len() as u64) as usize]
    }
}

const FRAGMENTS: &[&str] = &[
    " ", "  ", "\t", "\u{a0}", "\u{3000}", "\n", "\n", "\r\n", "\r", "*", "* ", "1. ",
    "12.", "=", "= ", " =", "==", "{{{", "}}}", "**", "//", "+++", "`", "[", "]", "cite:",
    "http://", "x.org", "a", "é", "word", ".", ",", "\"", ":", "\u{0}",
];

#[test]
fn generated_input_keeps_invariants_and_round_trips() {
    let mut rng = XorShift(0x9e37_79b9_7f4a_7c15);
    for _ in 0..2000 {
        let len = rng.next() % 40;
        let src: String = (0..len).map(|_| rng.pick(FRAGMENTS)).collect();

        let doc = parse_checked(&src);
        let markup = doc.to_markup();
        let reparsed = parse_blocks(&markup);
        assert_eq!(reparsed, doc, "round trip changed the tree for {src:?}");
        snapshot::invariants(&reparsed);
    }
}
