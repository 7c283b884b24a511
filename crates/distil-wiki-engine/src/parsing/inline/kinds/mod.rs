//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Emphasis`**: `**bold**`, `//italic//`, `+++highlight+++`
//! - **`CodeSpan`**: `` `code` `` (Trac monospace)
//! - **`WikiLink`** / **`CiteLink`**: `[Page Name]`, `[cite:key]`
//! - **`AutoUrl`**: bare `http://` and `https://` links
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in parser code.

pub mod code_span;
pub mod emphasis;
pub mod link;
pub mod url;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::{CiteLink, WikiLink, wiki_key};
pub use url::AutoUrl;
