//! # Block Parsing
//!
//! Two-phase, line-oriented block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` containing local facts (blank, indentation, which block
//!    construct its prefix opens)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` walks the classified
//!    lines once, keeping the open paragraph/preformatted leaf and a stack of
//!    open list items, and emits `Block`s as they close
//!
//! ## Modules
//!
//! - **`types`**: `Block` and `ListItem`
//! - **`kinds`**: block syntax with owned delimiters (Heading, ListMarker, Preformat)
//! - **`classify`**: `WikiLineClassifier` produces a `LineClass` per line
//! - **`open`**: `try_open` dispatch for detecting block openers
//! - **`lists`**: `ListStack`, indentation-to-tree construction
//! - **`builder`**: `BlockBuilder` state machine
//!
//! ## Key Invariants
//!
//! - Nesting is decided by indentation alone (2 spaces per level), never by
//!   marker type
//! - Preformatted blocks are raw zones: no block or inline parsing inside
//! - Every input has a parse; nothing here returns an error

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod lists;
pub mod open;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, WikiLineClassifier};
pub use lists::MAX_LIST_DEPTH;
pub use types::{Block, ListItem};
