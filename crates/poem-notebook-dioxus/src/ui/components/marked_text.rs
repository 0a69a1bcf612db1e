use dioxus::prelude::*;
use poem_notebook_engine::{
    MarkerId,
    parsing::markers::Segment,
    render::{DisplayLine, TextBlock},
};

/// Stands in for an empty line or grid cell.
pub const PLACEHOLDER: &str = "\u{a0}";

fn render_segment(segment: Segment, mut hovered: Signal<Option<MarkerId>>) -> Element {
    match segment {
        Segment::Text(text) => rsx! { "{text}" },
        Segment::Marker { id, text, hover } => {
            // Every fragment of the hovered marker lights up, across fields.
            let class = if hovered() == Some(id) {
                "marker highlighted"
            } else {
                "marker"
            };
            rsx! {
                span {
                    class,
                    "data-marker-id": "{id}",
                    title: "{hover}",
                    onmouseenter: move |_| hovered.set(Some(id)),
                    onmouseleave: move |_| hovered.set(None),
                    "{text}"
                }
            }
        }
    }
}

/// Display lines separated by breaks.
#[component]
pub fn MarkedLines(lines: Vec<DisplayLine>, hovered: Signal<Option<MarkerId>>) -> Element {
    if lines.is_empty() {
        return rsx! { {PLACEHOLDER} };
    }

    rsx! {
        for (i, line) in lines.into_iter().enumerate() {
            if i > 0 {
                br {}
            }
            if line.is_placeholder() {
                {PLACEHOLDER}
            } else {
                for segment in line.segments {
                    {render_segment(segment, hovered)}
                }
            }
        }
    }
}

/// A field as continuous text, one blank break between stanzas.
#[component]
pub fn TextBlockView(
    block: TextBlock,
    class: &'static str,
    hovered: Signal<Option<MarkerId>>,
) -> Element {
    rsx! {
        p {
            class,
            lang: block.lang.clone(),
            for (i, stanza) in block.stanzas.into_iter().enumerate() {
                if i > 0 {
                    br {}
                    br {}
                }
                MarkedLines { lines: stanza, hovered }
            }
        }
    }
}
