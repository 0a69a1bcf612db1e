use serde::Serialize;

use crate::models::{Field, MarkerId};
use crate::parsing::text::Span;

/// A parsed node with byte spans into the field text.
///
/// All variants store spans rather than text; `full` spans include the
/// delimiters so they can be intersected with unstripped line spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerNode {
    /// Plain text outside any delimited span.
    Text(Span),
    /// A delimited span that consumed a hover note.
    Marker {
        /// Full span including `{` and `}`.
        full: Span,
        /// Content between the delimiters.
        inner: Span,
        id: MarkerId,
    },
    /// A delimited span found after the hover notes ran out. Rendered as
    /// plain text with its delimiters stripped.
    Unannotated { full: Span, inner: Span },
}

impl MarkerNode {
    /// Extracts the full span from any variant.
    pub fn full_span(&self) -> Span {
        match self {
            MarkerNode::Text(sp) => *sp,
            MarkerNode::Marker { full, .. } | MarkerNode::Unannotated { full, .. } => *full,
        }
    }
}

/// A discovered alternate-version span with its hover note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Marker {
    pub id: MarkerId,
    /// Absolute span in the bracketed text, delimiters included.
    pub full: Span,
    /// Content between the delimiters.
    pub inner: Span,
    pub hover: String,
}

/// A flat display segment, with delimiters already removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Segment {
    Text(String),
    Marker {
        id: MarkerId,
        text: String,
        hover: String,
    },
}

/// Parser output for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedText {
    pub field: Field,
    /// Nodes covering the whole text in order.
    pub nodes: Vec<MarkerNode>,
    /// Annotated markers in discovery order.
    pub markers: Vec<Marker>,
}

impl ParsedText {
    /// Looks up a marker of this field by id.
    ///
    /// Markers of one field consume consecutive hover notes, so the id's
    /// index minus the first marker's index is its position.
    pub fn marker(&self, id: MarkerId) -> Option<&Marker> {
        let first = self.markers.first()?.id.index;
        let pos = id.index.checked_sub(first)?;
        self.markers.get(pos).filter(|m| m.id == id)
    }

    /// Flattens the nodes into display segments over `text`.
    ///
    /// Adjacent plain runs (including unannotated spans) are merged, so a
    /// text without delimiters yields exactly one segment equal to the text.
    pub fn segments(&self, text: &str) -> Vec<Segment> {
        let mut out: Vec<Segment> = vec![];
        for node in &self.nodes {
            match node {
                MarkerNode::Text(sp) | MarkerNode::Unannotated { inner: sp, .. } => {
                    push_text(&mut out, sp.slice(text));
                }
                MarkerNode::Marker { inner, id, .. } => {
                    let hover = self
                        .marker(*id)
                        .map(|m| m.hover.clone())
                        .unwrap_or_default();
                    out.push(Segment::Marker {
                        id: *id,
                        text: inner.slice(text).to_string(),
                        hover,
                    });
                }
            }
        }
        out
    }

    /// The text as displayed: delimiters stripped, markers inlined.
    pub fn display_text(&self, text: &str) -> String {
        self.segments(text)
            .into_iter()
            .map(|s| match s {
                Segment::Text(t) => t,
                Segment::Marker { text, .. } => text,
            })
            .collect()
    }
}

fn push_text(out: &mut Vec<Segment>, s: &str) {
    if s.is_empty() {
        return;
    }
    if let Some(Segment::Text(prev)) = out.last_mut() {
        prev.push_str(s);
    } else {
        out.push(Segment::Text(s.to_string()));
    }
}
