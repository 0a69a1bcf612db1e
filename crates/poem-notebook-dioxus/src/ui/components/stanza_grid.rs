use dioxus::prelude::*;
use poem_notebook_engine::{MarkerId, PoemView};

use super::MarkedLines;

/// Original and translation units side by side, one row per pair.
#[component]
pub fn StanzaGrid(view: PoemView, hovered: Signal<Option<MarkerId>>) -> Element {
    let original_lang = view.original.lang.clone();
    let translation_lang = view.translation_lang.clone();

    rsx! {
        div {
            class: "stanza-grid",
            for row in view.rows {
                div {
                    class: "stanza-row",
                    div {
                        class: "stanza-cell original",
                        lang: original_lang.clone(),
                        MarkedLines { lines: row.original.unwrap_or_default(), hovered }
                    }
                    div {
                        class: "stanza-cell translation",
                        lang: translation_lang.clone(),
                        MarkedLines { lines: row.translation.unwrap_or_default(), hovered }
                    }
                }
            }
        }
    }
}
