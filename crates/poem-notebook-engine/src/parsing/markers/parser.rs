use log::debug;

use crate::models::{AnnotationCursor, Field, MarkerId};
use crate::parsing::text::Span;

use super::{
    cursor::Cursor,
    kinds::Alternate,
    types::{Marker, MarkerNode, ParsedText},
};

/// Parses one field's text into [`MarkerNode`]s, consuming hover notes.
///
/// # Arguments
/// - `field`: Which text this is; selects the marker id prefix
/// - `s`: The line-ending-normalized text
/// - `notes`: The poem's annotation cursor, advanced once per marker
///
/// # Degradation
/// Delimited spans found after `notes` is exhausted become
/// [`MarkerNode::Unannotated`] and do not advance the cursor. An unterminated
/// `{` turns the remainder of the text into plain text.
///
/// # Returns
/// Nodes covering the entire input plus the annotated markers. Never fails.
pub fn parse_markers(field: Field, s: &str, notes: &mut AnnotationCursor<'_>) -> ParsedText {
    let mut cur = Cursor::new(s);
    let mut nodes = vec![];
    let mut markers = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<MarkerNode>, start: usize, end: usize) {
        if end > start {
            out.push(MarkerNode::Text(Span { start, end }));
        }
    }

    while !cur.eof() {
        if cur.peek() != Some(Alternate::OPEN) {
            cur.bump();
            continue;
        }
        let Some((full, inner)) = try_parse_alternate(&mut cur) else {
            // No closing delimiter anywhere after this point.
            cur.finish();
            break;
        };
        flush_text(&mut nodes, text_start, full.start);
        text_start = full.end;

        match notes.take() {
            Some((index, hover)) => {
                let id = MarkerId::new(field, index);
                nodes.push(MarkerNode::Marker { full, inner, id });
                markers.push(Marker {
                    id,
                    full,
                    inner,
                    hover: hover.to_string(),
                });
            }
            None => {
                debug!(
                    "{} span at {}..{} has no hover note left; rendering as plain text",
                    field.key(),
                    full.start,
                    full.end
                );
                nodes.push(MarkerNode::Unannotated { full, inner });
            }
        }
    }

    flush_text(&mut nodes, text_start, cur.pos());
    ParsedText {
        field,
        nodes,
        markers,
    }
}

/// Attempts to parse `{...}` at the current position.
///
/// Returns `(full, inner)` spans. On failure the cursor is restored.
fn try_parse_alternate(cur: &mut Cursor<'_>) -> Option<(Span, Span)> {
    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // {
    let inner_start = cur.pos();

    if !cur.advance_to(Alternate::CLOSE) {
        *cur = saved;
        return None;
    }
    let inner_end = cur.pos();
    cur.bump(); // }

    Some((
        Span {
            start,
            end: cur.pos(),
        },
        Span {
            start: inner_start,
            end: inner_end,
        },
    ))
}
