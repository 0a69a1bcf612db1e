use dioxus::prelude::*;
use poem_notebook_engine::parsing::align::Row;

/// Title, its translation, and the phonetic title when present.
#[component]
pub fn TitleBlock(rows: Vec<Row<String>>) -> Element {
    if rows.is_empty() {
        return rsx! {};
    }

    rsx! {
        header {
            class: "poem-title",
            for (i, row) in rows.into_iter().enumerate() {
                if let Some(text) = row.original {
                    if i == 0 {
                        h2 { "{text}" }
                    } else {
                        p { class: "title-phonetic", "{text}" }
                    }
                }
                if let Some(text) = row.translation {
                    h3 { class: "title-translation", "{text}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use poem_notebook_engine::{Pairing, Poem, render_poem};

    fn render_title(poem: &Poem) -> String {
        let rows = render_poem(poem, Pairing::Stanza).title_rows;
        let mut dom = VirtualDom::new_with_props(TitleBlock, TitleBlockProps { rows });
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_title_with_translation_and_phonetic() {
        let mut poem = Poem::new("Ghazal", "a", "b").with_title_translation("Song");
        poem.title_phonetic = Some("gha-zal".into());
        let html = render_title(&poem);

        assert!(html.contains("<h2>Ghazal</h2>"));
        assert!(html.contains(r#"<h3 class="title-translation">Song</h3>"#));
        assert!(html.contains(r#"<p class="title-phonetic">gha-zal</p>"#));
    }

    #[test]
    fn test_untitled_poem_renders_nothing() {
        let poem = Poem::new("Hidden", "a", "b").untitled();
        assert!(!render_title(&poem).contains("Hidden"));
    }
}
