//! # Snapshot Testing Support
//!
//! Utilities for testing the parse pipeline via snapshot assertions and
//! invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts a [`ParsedPoem`](crate::parsing::ParsedPoem) to a
//!   stable, serializable `Snap` for `insta` snapshot testing
//! - **`invariants`**: Runtime checks for pipeline correctness (spans in
//!   bounds, nodes covering the text, fragments inside their lines, ids
//!   increasing, fragments rejoining to marker content)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
