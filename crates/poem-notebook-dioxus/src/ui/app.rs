use dioxus::prelude::*;
use poem_notebook_engine::{Pairing, PoemView, load_poems, render_poem};
use std::path::{Path, PathBuf};

use super::components::{LoadErrorScreen, NotebookView};

const NOTEBOOK_CSS: &str = include_str!("../assets/notebook.css");

/// Loads and lays out every poem, or describes why that failed.
pub fn load_views(poems_path: &Path, pairing: Pairing) -> Result<Vec<PoemView>, String> {
    let poems = load_poems(poems_path).map_err(|e| {
        log::error!("Failed to load poems from {}: {e}", poems_path.display());
        e.to_string()
    })?;
    log::info!("Loaded {} poems from {}", poems.len(), poems_path.display());
    Ok(poems.iter().map(|poem| render_poem(poem, pairing)).collect())
}

#[component]
pub fn App(poems_path: PathBuf, pairing: Pairing) -> Element {
    let loaded = use_hook(|| load_views(&poems_path, pairing));

    rsx! {
        style { {NOTEBOOK_CSS} }
        {match loaded {
            Ok(views) => rsx! { NotebookView { views } },
            Err(message) => rsx! {
                LoadErrorScreen { path: poems_path.clone(), message }
            },
        }}
    }
}
