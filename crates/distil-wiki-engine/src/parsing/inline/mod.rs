//! # Inline Parsing
//!
//! Cursor-based, single-pass inline parsing of wiki text.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and runs over the text of
//! each heading, paragraph and list item. Every construct must open and close
//! on one physical line, and constructs never nest: once a span opens, only
//! its own closer is looked for.
//!
//! ## Modules
//!
//! - **`types`**: `Span` enum and the `InlineSequence` alias
//! - **`kinds`**: delimiter constants per construct, plus `wiki_key`
//! - **`cursor`**: `Cursor` for scanning with an explicit position
//! - **`parser`**: `parse_inline()` entry point with `try_parse_*` helpers
//!
//! ## Precedence
//!
//! At `[`, a `[cite:...]` link is tried before a plain wiki-link. An opener
//! without a closer on the same line is kept as literal text.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use kinds::wiki_key;
pub use parser::parse_inline;
pub use types::{InlineSequence, Span};
