//! # Marker Kinds
//!
//! Delimiter ownership for the marker syntax: all delimiter constants live
//! here, and the parser and projector refer to them rather than hardcoding
//! `{` or `}`.

pub mod alternate;

pub use alternate::Alternate;
