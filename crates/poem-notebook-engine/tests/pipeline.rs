use std::fs;
use std::time::{Duration, Instant};

use insta::assert_snapshot;
use poem_notebook_engine::{
    Action, Field, MarkerId, Notebook, Pairing, Poem, build_bundle, load_poems,
    parsing::{parse_poem, snapshot},
    render::{html::render_cell, render_notebook_html, render_poem},
};
use pretty_assertions::assert_eq;

const GHAZAL: &str = r#"title = "Ghazal"
titleTranslation = "Song"
original = """
Hello {world}, friend
second line

{line one
line two}"""
translation = """
Hola mundo

{verse}"""
hoverText = ["planet", "note", "stanza"]
"#;

fn write_manifest(dir: &std::path::Path) {
    fs::write(dir.join("index.json"), r#"{"files": ["ghazal.toml"]}"#).unwrap();
    fs::write(dir.join("ghazal.toml"), GHAZAL).unwrap();
}

#[test]
fn load_render_and_navigate() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path());

    let poems = load_poems(dir.path()).unwrap();
    assert_eq!(poems.len(), 1);

    let parsed = parse_poem(&poems[0]);
    snapshot::invariants(&parsed);
    let ids: Vec<String> = parsed.markers().map(|m| m.id.to_string()).collect();
    assert_eq!(ids, vec!["orig-0", "orig-1", "trans-2"]);

    let view = render_poem(&poems[0], Pairing::Stanza);
    assert_eq!(view.rows.len(), 2);
    assert_snapshot!(
        render_cell(view.rows[1].original.as_ref()),
        @r#"<span class="marker" data-marker-id="orig-1" title="note">line one</span><br /><span class="marker" data-marker-id="orig-1" title="note">line two</span>"#
    );

    let html = render_notebook_html(&poems, Pairing::Stanza);
    assert_eq!(html.matches(r#"data-marker-id="orig-1""#).count(), 4);

    let mut notebook = Notebook::new(poems.len());
    assert!(notebook.apply(Action::ToggleTranslation));
    assert!(!notebook.apply(Action::NextPage));
}

#[test]
fn bundle_built_from_manifest_loads_the_same_poems() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path());

    let bundle = build_bundle(dir.path()).unwrap();
    let path = dir.path().join("poems-bundle.json");
    fs::write(&path, bundle.to_pretty_json().unwrap()).unwrap();

    assert_eq!(load_poems(&path).unwrap(), load_poems(dir.path()).unwrap());
}

#[test]
fn snapshot_of_exhausted_annotations() {
    let poem = Poem::new("t", "{first} and {second}", "x").with_hover_text(["only"]);
    let parsed = parse_poem(&poem);
    snapshot::invariants(&parsed);

    assert_snapshot!(snapshot::normalize(&parsed).to_string(), @r#"
    # t
    [original]
    Marker(orig-0) 0..7 "{first}" hover="only"
    Text 7..12 " and "
    Unannotated 12..20 "{second}"
    line 0 0..20 "{first} and {second}"
      orig-0 start+end 0..7 "first"
      - start+end 12..20 "second"
    [translation]
    Text 0..1 "x"
    line 0 0..1 "x"
    "#);
    assert_eq!(
        parsed.field(Field::Original).unwrap().display_text(),
        "first and second"
    );
}

#[test]
fn dense_markers_near_the_field_limit() {
    let count = 33_333;
    let text = "{}\n".repeat(count);
    let poem = Poem::new("dense", text.trim_end(), "x")
        .with_hover_text((0..count).map(|i| format!("n{i}")));

    let started = Instant::now();
    let view = render_poem(&poem, Pairing::Line);
    let elapsed = started.elapsed();

    assert_eq!(view.rows.len(), count);
    assert_eq!(view.markers.len(), count);
    let last = MarkerId::new(Field::Original, count - 1);
    assert_eq!(view.markers.number(last), Some(count));
    assert_eq!(view.markers.hover(last), Some("n33332"));
    assert_eq!(view.markers.fragments(last)[0].line, count - 1);
    assert!(elapsed < Duration::from_secs(5), "render took {elapsed:?}");
}
