mod error_screen;
mod marked_text;
mod notebook_view;
mod page;
mod stanza_grid;
mod title_block;

pub use error_screen::LoadErrorScreen;
pub use marked_text::{MarkedLines, TextBlockView};
pub use notebook_view::{NotebookView, trigger_for_key};
pub use page::Page;
pub use stanza_grid::StanzaGrid;
pub use title_block::TitleBlock;
