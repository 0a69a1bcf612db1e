//! # Rendering
//!
//! Turns a parsed poem into display structure ([`PoemView`]) and HTML.
//!
//! - **`view`**: Title rows, continuous text blocks and the paired grid
//! - **`index`**: `MarkerIndex`, marker id to fragment locations
//! - **`html`**: Escaped HTML for lines, cells, pages and whole notebooks

pub mod html;
pub mod index;
pub mod view;

pub use html::render_notebook_html;
pub use index::{FragmentLocation, MarkerEntry, MarkerIndex};
pub use view::{Cell, DisplayLine, PoemView, Stanza, TextBlock, render_poem};
