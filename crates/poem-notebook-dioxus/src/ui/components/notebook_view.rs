use dioxus::prelude::*;
use poem_notebook_engine::{Action, MarkerId, Notebook, PoemView, Trigger, notebook::action_for};

use super::Page;

/// Maps a key press to the notebook trigger it stands for.
pub fn trigger_for_key(key: &Key) -> Option<Trigger> {
    match key {
        Key::ArrowRight => Some(Trigger::ArrowRight),
        Key::ArrowLeft => Some(Trigger::ArrowLeft),
        Key::Enter => Some(Trigger::CoverClick),
        Key::Character(c) if c == "o" => Some(Trigger::CoverClick),
        Key::Character(c) if c == "t" => Some(Trigger::ToggleButton),
        _ => None,
    }
}

fn dispatch(mut notebook: Signal<Notebook>, trigger: Trigger) {
    let Some(action) = action_for(trigger) else {
        return;
    };
    // Pages stay behind the cover until it is opened.
    if !notebook.read().is_open() && action != Action::Open {
        return;
    }
    if notebook.write().apply(action) {
        log::debug!("{trigger:?} -> {action:?}");
    }
}

fn cover_label(page_count: usize) -> String {
    match page_count {
        1 => "1 poem".to_string(),
        n => format!("{n} poems"),
    }
}

/// The whole notebook: cover, page stack and navigation.
#[component]
pub fn NotebookView(views: Vec<PoemView>) -> Element {
    let page_count = views.len();
    let notebook = use_signal(|| Notebook::new(page_count));
    let hovered = use_signal(|| None::<MarkerId>);
    let nb = notebook.read().clone();
    let summary = cover_label(page_count);

    rsx! {
        div {
            class: "notebook",
            tabindex: "0",
            autofocus: true,
            onkeydown: move |evt: Event<KeyboardData>| {
                if let Some(trigger) = trigger_for_key(&evt.key()) {
                    evt.prevent_default();
                    dispatch(notebook, trigger);
                }
            },

            if !nb.is_open() {
                div {
                    class: "notebook-cover",
                    onclick: move |_| dispatch(notebook, Trigger::CoverClick),
                    h1 { "Poem Notebook" }
                    p { "{summary}" }
                    p { class: "cover-hint", "Click or press Enter to open" }
                }
            } else {
                div {
                    class: "page-stack",
                    for (face, view) in nb.faces().zip(views.iter().cloned()) {
                        Page {
                            view,
                            face,
                            page_count,
                            translation_visible: nb.translation_visible(face.index),
                            hovered,
                            on_toggle: move |_| dispatch(notebook, Trigger::ToggleButton),
                        }
                    }
                }
                nav {
                    class: "notebook-nav",
                    button {
                        class: "prev",
                        r#type: "button",
                        disabled: !nb.can_go_back(),
                        onclick: move |_| dispatch(notebook, Trigger::PrevButton),
                        "Previous"
                    }
                    button {
                        class: "next",
                        r#type: "button",
                        disabled: !nb.can_go_forward(),
                        onclick: move |_| dispatch(notebook, Trigger::NextButton),
                        "Next"
                    }
                }
            }
        }
    }
}
