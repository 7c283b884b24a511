//! # Snapshot Testing Support
//!
//! Runtime checks for parser correctness, shared by unit tests and the
//! integration tests under `tests/`.
//!
//! Parsing behavior is pinned by fixture snapshots of the tree and the
//! rendered HTML plus these structural invariants, rather than by a separate
//! formal grammar.

pub mod invariants;

pub use invariants::check as invariants;
