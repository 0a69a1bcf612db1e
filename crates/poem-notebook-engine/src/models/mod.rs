pub mod field;
pub mod poem;

pub use field::{Field, MarkerId};
pub use poem::{AnnotationCursor, AnnotationList, Poem, PoemText};
