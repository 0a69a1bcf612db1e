//! HTML output for the notebook.
//!
//! All text and attribute values go through `html_escape`. Marker runs become
//! `<span class="marker">` elements carrying the shared marker id and the
//! hover note as `title`.

use html_escape::{encode_double_quoted_attribute, encode_text};
use log::debug;

use crate::models::Poem;
use crate::notebook::footer_label;
use crate::parsing::{align::Pairing, markers::Segment};

use super::view::{Cell, DisplayLine, PoemView, TextBlock, render_poem};

/// Content of an empty line or a missing grid cell.
pub const PLACEHOLDER: &str = "&nbsp;";

const BREAK: &str = "<br />";

pub fn render_segments(segments: &[Segment]) -> String {
    let mut out = String::new();
    for seg in segments {
        match seg {
            Segment::Text(t) => out.push_str(&encode_text(t)),
            Segment::Marker { id, text, hover } => {
                out.push_str(&format!(
                    r#"<span class="marker" data-marker-id="{id}" title="{}">{}</span>"#,
                    encode_double_quoted_attribute(hover),
                    encode_text(text)
                ));
            }
        }
    }
    out
}

pub fn render_line(line: &DisplayLine) -> String {
    if line.is_placeholder() {
        PLACEHOLDER.to_string()
    } else {
        render_segments(&line.segments)
    }
}

fn render_lines(lines: &[DisplayLine]) -> String {
    lines
        .iter()
        .map(render_line)
        .collect::<Vec<_>>()
        .join(BREAK)
}

/// Lines of a grid cell joined by breaks; a missing cell is a placeholder.
pub fn render_cell(cell: Option<&Cell>) -> String {
    match cell {
        Some(lines) if !lines.is_empty() => render_lines(lines),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Continuous text: lines joined by breaks, one empty break between stanzas.
pub fn render_text_block(block: &TextBlock) -> String {
    block
        .stanzas
        .iter()
        .map(|stanza| render_lines(stanza))
        .collect::<Vec<_>>()
        .join(&format!("{BREAK}{BREAK}"))
}

fn lang_attr(lang: Option<&str>) -> String {
    lang.map(|l| format!(r#" lang="{}""#, encode_double_quoted_attribute(l)))
        .unwrap_or_default()
}

fn render_header(view: &PoemView) -> String {
    if view.title_rows.is_empty() {
        return String::new();
    }
    let mut out = String::from("<header>");
    for (i, row) in view.title_rows.iter().enumerate() {
        if let Some(text) = &row.original {
            let text = encode_text(text);
            if i == 0 {
                out.push_str(&format!("<h2>{text}</h2>"));
            } else {
                out.push_str(&format!(r#"<p class="title-phonetic">{text}</p>"#));
            }
        }
        if let Some(text) = &row.translation {
            out.push_str(&format!(
                r#"<h3 class="title-translation">{}</h3>"#,
                encode_text(text)
            ));
        }
    }
    out.push_str("</header>\n");
    out
}

/// Renders one `article.page`. `index` is zero-based.
pub fn render_page(view: &PoemView, index: usize, count: usize) -> String {
    let mut out = format!(
        "<article class=\"page{}\" data-page=\"{}\" aria-label=\"Poem {}: {}\">\n",
        if index == 0 { " active" } else { "" },
        index + 1,
        index + 1,
        encode_double_quoted_attribute(&view.title)
    );
    out.push_str("<div class=\"page-content\">\n");
    out.push_str(&render_header(view));
    out.push_str("<div class=\"poem-body\">\n");

    out.push_str(&format!(
        "<p class=\"original\"{}>{}</p>\n",
        lang_attr(view.original.lang.as_deref()),
        render_text_block(&view.original)
    ));
    if let Some(phonetic) = &view.phonetic {
        out.push_str(&format!(
            "<p class=\"phonetic\"{}>{}</p>\n",
            lang_attr(phonetic.lang.as_deref()),
            render_text_block(phonetic)
        ));
    }

    // No script ships with the export, so the grid is always shown.
    out.push_str("<div class=\"stanza-grid\">\n");
    for row in &view.rows {
        out.push_str(&format!(
            "<div class=\"stanza-row\"><div class=\"stanza-cell original\"{}>{}</div><div class=\"stanza-cell translation\"{}>{}</div></div>\n",
            lang_attr(view.original.lang.as_deref()),
            render_cell(row.original.as_ref()),
            lang_attr(view.translation_lang.as_deref()),
            render_cell(row.translation.as_ref())
        ));
    }
    out.push_str("</div>\n</div>\n</div>\n");

    out.push_str(&format!(
        "<footer><span class=\"page-count\">{}</span></footer>\n",
        footer_label(index, count)
    ));
    out.push_str("</article>\n");
    out
}

/// Renders every poem as a page of one standalone HTML document.
pub fn render_notebook_html(poems: &[Poem], pairing: Pairing) -> String {
    let count = poems.len();
    let mut out = String::from(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\" />\n<title>Poem Notebook</title>\n</head>\n<body>\n<main class=\"notebook\">\n",
    );
    for (i, poem) in poems.iter().enumerate() {
        let view = render_poem(poem, pairing);
        debug!(
            "Rendering page {} \"{}\" ({} rows, {} markers)",
            i + 1,
            view.title,
            view.rows.len(),
            view.markers.len()
        );
        out.push_str(&render_page(&view, i, count));
    }
    out.push_str("</main>\n</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Field, MarkerId};
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    #[test]
    fn marker_run_carries_id_and_hover() {
        let segments = vec![
            Segment::Text("Hello ".into()),
            Segment::Marker {
                id: MarkerId::new(Field::Original, 0),
                text: "world".into(),
                hover: "planet".into(),
            },
            Segment::Text(", friend".into()),
        ];
        assert_snapshot!(
            render_segments(&segments),
            @r#"Hello <span class="marker" data-marker-id="orig-0" title="planet">world</span>, friend"#
        );
    }

    #[test]
    fn text_and_hover_are_escaped() {
        let segments = vec![
            Segment::Text("<b>&".into()),
            Segment::Marker {
                id: MarkerId::new(Field::Translation, 2),
                text: "a<b".into(),
                hover: "say \"hi\"".into(),
            },
        ];
        let html = render_segments(&segments);
        assert!(html.starts_with("&lt;b&gt;&amp;"));
        assert!(html.contains(r#"title="say &quot;hi&quot;""#));
        assert!(html.contains(">a&lt;b</span>"));
    }

    #[test]
    fn empty_line_and_missing_cell_are_placeholders() {
        assert_eq!(render_line(&DisplayLine::default()), PLACEHOLDER);
        assert_eq!(render_cell(None), PLACEHOLDER);
        assert_eq!(render_cell(Some(&vec![])), PLACEHOLDER);
    }

    #[test]
    fn multi_line_marker_renders_one_span_per_line() {
        let poem = Poem::new("t", "{line one\nline two}", "x").with_hover_text(["note"]);
        let view = render_poem(&poem, Pairing::Stanza);
        assert_snapshot!(
            render_cell(view.rows[0].original.as_ref()),
            @r#"<span class="marker" data-marker-id="orig-0" title="note">line one</span><br /><span class="marker" data-marker-id="orig-0" title="note">line two</span>"#
        );
    }

    #[test]
    fn continuous_text_collapses_blank_runs() {
        let poem = Poem::new("t", "a\nb\n\n\n\nc", "x");
        let view = render_poem(&poem, Pairing::Stanza);
        assert_eq!(render_text_block(&view.original), "a<br />b<br /><br />c");
    }

    #[test]
    fn page_structure() {
        let poem = Poem::new("Title & more", "a\n\nb", "x")
            .with_title_translation("Translated")
            .with_hover_text(["n"]);
        let view = render_poem(&poem, Pairing::Stanza);
        let html = render_page(&view, 0, 2);

        assert!(html.starts_with(
            r#"<article class="page active" data-page="1" aria-label="Poem 1: Title &amp; more">"#
        ));
        assert!(html.contains("<h2>Title &amp; more</h2>"));
        assert!(html.contains(r#"<h3 class="title-translation">Translated</h3>"#));
        assert!(html.contains(r#"<p class="original">a<br /><br />b</p>"#));
        assert_eq!(html.matches(r#"<div class="stanza-row">"#).count(), 2);
        assert!(html.contains(
            r#"<div class="stanza-cell translation">&nbsp;</div>"#
        ));
        assert!(html.contains(r#"<div class="stanza-grid">"#));
        assert!(!html.contains("hidden"));
        assert!(!html.contains("<button"));
        assert!(html.contains(r#"<footer><span class="page-count">Page 1 of 2</span></footer>"#));
    }

    #[test]
    fn untitled_page_has_no_header() {
        let poem = Poem::new("Hidden", "a", "b").untitled();
        let html = render_page(&render_poem(&poem, Pairing::Stanza), 1, 2);
        assert!(!html.contains("<header>"));
        assert!(html.contains(r#"aria-label="Poem 2: Hidden""#));
        assert!(html.starts_with(r#"<article class="page" "#));
    }

    #[test]
    fn notebook_document_wraps_every_page() {
        let poems = vec![Poem::new("one", "a", "b"), Poem::new("two", "c", "d")];
        let html = render_notebook_html(&poems, Pairing::Line);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert_eq!(html.matches("<article ").count(), 2);
        assert!(html.contains("Page 2 of 2"));
        assert!(html.ends_with("</html>\n"));
    }
}
