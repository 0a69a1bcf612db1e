pub mod io;
pub mod models;
pub mod notebook;
pub mod parsing;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::{Bundle, LoadError, ValidationError, build_bundle, load_poems};
pub use models::{AnnotationList, Field, MarkerId, Poem, PoemText};
pub use notebook::{Action, Notebook, PageFace, Trigger};
pub use parsing::{ParsedPoem, align::Pairing, parse_poem};
pub use render::{PoemView, render_notebook_html, render_poem};
