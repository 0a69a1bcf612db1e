use dioxus::prelude::*;
use std::path::PathBuf;

/// Full-window screen shown when the collection cannot be loaded.
#[component]
pub fn LoadErrorScreen(path: PathBuf, message: String) -> Element {
    let path = path.display().to_string();

    rsx! {
        div {
            class: "load-error",
            h1 { "Could not load poems" }
            p {
                "Source: "
                code { "{path}" }
            }
            pre { class: "load-error-details", "{message}" }
            p {
                class: "load-error-hint",
                "Pass a manifest directory or bundle file as the first argument."
            }
        }
    }
}
