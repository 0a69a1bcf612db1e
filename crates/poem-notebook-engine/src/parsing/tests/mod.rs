//! Pipeline tests for the parsing module.
//!
//! Snapshots use the compact text form of [`Snap`](crate::parsing::snapshot::Snap)
//! inline, so expected structure sits next to the input.

use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::models::{Field, MarkerId, Poem};
use crate::parsing::{parse_poem, snapshot};

#[test]
fn snapshot_marker_across_fields() {
    let poem = Poem::new("T", "a {b}\nc", "{x\ny}").with_hover_text(["n", "m"]);
    let parsed = parse_poem(&poem);
    snapshot::invariants(&parsed);

    assert_snapshot!(snapshot::normalize(&parsed).to_string(), @r#"
    # T
    [original]
    Text 0..2 "a "
    Marker(orig-0) 2..5 "{b}" hover="n"
    Text 5..7 "\nc"
    line 0 0..5 "a {b}"
      orig-0 start+end 2..5 "b"
    line 1 6..7 "c"
    [translation]
    Marker(trans-1) 0..5 "{x\ny}" hover="m"
    line 0 0..2 "{x"
      trans-1 start 0..2 "x"
    line 1 3..5 "y}"
      trans-1 end 0..2 "y"
    "#);
}

#[rstest]
#[case("plain text only", "no markers here")]
#[case("{one}\n\n{two\nthree}", "{a} b {c}")]
#[case("{unterminated", "stray } brace")]
#[case("{}\n{  }\n\n\n{x}", "{\n}")]
#[case("line\r\nbreaks {are\r\nnormalized}", "x")]
#[case("अथ {डपु\nभय} मु", "{fear}")]
fn invariants_hold(#[case] original: &str, #[case] translation: &str) {
    let poem = Poem::new("t", original, translation).with_hover_text(["1", "2", "3"]);
    let parsed = parse_poem(&poem);
    snapshot::invariants(&parsed);
}

#[test]
fn cursor_is_shared_in_field_order() {
    let poem = Poem::new("t", "{a}", "{c}")
        .with_phonetic("{b}")
        .with_hover_text(["o", "p", "t"]);
    let parsed = parse_poem(&poem);

    let ids: Vec<String> = parsed.markers().map(|m| m.id.to_string()).collect();
    assert_eq!(ids, vec!["orig-0", "phon-1", "trans-2"]);
    assert_eq!(parsed.fields.len(), 3);
}

#[test]
fn missing_phonetic_consumes_nothing() {
    let poem = Poem::new("t", "{a}", "{c}").with_hover_text(["o", "t"]);
    let parsed = parse_poem(&poem);

    assert!(parsed.field(Field::Phonetic).is_none());
    let trans = parsed.field(Field::Translation).unwrap();
    assert_eq!(trans.parsed.markers[0].hover, "t");
    assert_eq!(trans.parsed.markers[0].id.to_string(), "trans-1");
}

#[test]
fn text_without_delimiters_parses_to_itself() {
    let poem = Poem::new("t", "first line\nsecond line", "one\n\ntwo");
    let parsed = parse_poem(&poem);
    for pf in &parsed.fields {
        assert!(pf.parsed.markers.is_empty());
        assert_eq!(pf.display_text(), pf.source);
    }
}

#[test]
fn markers_past_the_notes_are_plain() {
    let poem = Poem::new("t", "{a} {b}", "{c}").with_hover_text(["only"]);
    let parsed = parse_poem(&poem);

    assert_eq!(parsed.markers().count(), 1);
    let trans = parsed.field(Field::Translation).unwrap();
    assert_eq!(trans.display_text(), "c");
    assert!(trans.lines[0].fragments[0].id.is_none());
}

#[test]
fn marker_lookup_by_id() {
    let poem = Poem::new("t", "x", "{y}").with_hover_text(["hover"]);
    let parsed = parse_poem(&poem);
    let id = parsed.markers().next().unwrap().id;
    assert_eq!(parsed.marker(id).map(|m| m.hover.as_str()), Some("hover"));
}

#[test]
fn marker_lookup_after_an_earlier_field() {
    let poem = Poem::new("t", "{a} {b}", "{c} {d}").with_hover_text(["1", "2", "3", "4"]);
    let parsed = parse_poem(&poem);
    let trans = &parsed.field(Field::Translation).unwrap().parsed;

    assert_eq!(
        trans.marker(MarkerId::new(Field::Translation, 3)).map(|m| m.hover.as_str()),
        Some("4")
    );
    assert!(trans.marker(MarkerId::new(Field::Translation, 1)).is_none());
    assert!(trans.marker(MarkerId::new(Field::Original, 2)).is_none());
    assert!(trans.marker(MarkerId::new(Field::Translation, 4)).is_none());
}
