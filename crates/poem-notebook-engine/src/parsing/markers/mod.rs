//! # Marker Parsing
//!
//! Cursor-based scanning for `{...}` alternate-version spans.
//!
//! ## Architecture
//!
//! Each field of a poem is parsed on its own, but all fields share one
//! annotation cursor so hover notes are consumed in field order
//! (original, phonetic, translation). Spans are recorded against the
//! bracketed text; delimiters are only removed when text is displayed.
//!
//! ## Modules
//!
//! - **`types`**: `MarkerNode`, `Marker`, `Segment`, `ParsedText`
//! - **`kinds`**: Delimiter constants (`Alternate`)
//! - **`cursor`**: `Cursor` for byte-wise scanning
//! - **`parser`**: `parse_markers()` entry point

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_markers;
pub use types::{Marker, MarkerNode, ParsedText, Segment};
