use dioxus::prelude::*;
use poem_notebook_engine::{
    MarkerId, PageFace, PoemView,
    notebook::{footer_label, toggle_label},
};

use super::{StanzaGrid, TextBlockView, TitleBlock};

/// One poem page in the stack.
#[component]
pub fn Page(
    view: PoemView,
    face: PageFace,
    page_count: usize,
    translation_visible: bool,
    hovered: Signal<Option<MarkerId>>,
    on_toggle: EventHandler<()>,
) -> Element {
    let class = match (face.active, face.flipped) {
        (true, _) => "page active",
        (false, true) => "page flipped",
        (false, false) => "page",
    };
    let label = format!("Poem {}: {}", face.index + 1, view.title);
    let z_index = face.z_index;

    rsx! {
        article {
            class,
            style: "z-index: {z_index};",
            "aria-label": "{label}",
            div {
                class: "page-content",
                TitleBlock { rows: view.title_rows.clone() }
                div {
                    class: "poem-body",
                    // The grid carries the original too, so it replaces the
                    // continuous text rather than following it.
                    if translation_visible {
                        StanzaGrid { view: view.clone(), hovered }
                    } else {
                        TextBlockView { block: view.original.clone(), class: "original", hovered }
                        if let Some(phonetic) = view.phonetic.clone() {
                            TextBlockView { block: phonetic, class: "phonetic", hovered }
                        }
                    }
                }
            }
            footer {
                button {
                    class: "toggle-translation",
                    r#type: "button",
                    onclick: move |_| on_toggle.call(()),
                    {toggle_label(translation_visible)}
                }
                span { class: "page-count", {footer_label(face.index, page_count)} }
            }
        }
    }
}
