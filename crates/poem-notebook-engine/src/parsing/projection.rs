//! # Line Projection
//!
//! Re-expresses marker spans, recorded against a whole field, per line.
//!
//! Lines are computed on the bracketed text so line numbers stay identical
//! to the source. A marker crossing line breaks is cut into one
//! [`MarkerFragment`] per line it touches; all of them keep the marker's id.
//! Delimiters are trimmed only when a fragment's display text is taken:
//! the leading `{` on the starting fragment and the trailing `}` on the
//! ending one.

use serde::Serialize;

use crate::models::MarkerId;

use super::markers::{MarkerNode, ParsedText, Segment, kinds::Alternate};
use super::text::{Span, lines_with_spans};

/// The portion of one delimited span that falls on one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkerFragment {
    /// Parent marker, or `None` for an unannotated span.
    pub id: Option<MarkerId>,
    /// The span's opening delimiter is on this line.
    pub is_start: bool,
    /// The span's closing delimiter is on this line.
    pub is_end: bool,
    /// Line-relative span, delimiters included.
    pub span: Span,
}

impl MarkerFragment {
    /// Display text of the fragment within `line`, delimiters trimmed.
    pub fn text<'a>(&self, line: &'a str) -> &'a str {
        Alternate::trim_fragment(self.span.slice(line), self.is_start, self.is_end)
    }
}

/// One line of a field with the fragments overlapping it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectedLine {
    /// Zero-based line number within the field.
    pub index: usize,
    /// Absolute span of the line, excluding its line feed.
    pub span: Span,
    /// Fragments ordered by their start within the line.
    pub fragments: Vec<MarkerFragment>,
}

impl ProjectedLine {
    /// The untrimmed line text.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.slice(source)
    }

    /// A line with no fragments and only whitespace.
    pub fn is_blank(&self, source: &str) -> bool {
        self.fragments.is_empty() && self.text(source).trim().is_empty()
    }

    /// Builds display segments: plain runs verbatim, marker fragments with
    /// their hover text, unannotated fragments merged into plain text.
    pub fn segments(&self, source: &str, parsed: &ParsedText) -> Vec<Segment> {
        let line = self.text(source);
        let mut out = vec![];
        let mut plain = String::new();
        let mut pos = 0;

        for frag in &self.fragments {
            plain.push_str(&line[pos..frag.span.start]);
            pos = frag.span.end;
            match frag.id {
                None => plain.push_str(frag.text(line)),
                Some(id) => {
                    if !plain.is_empty() {
                        out.push(Segment::Text(std::mem::take(&mut plain)));
                    }
                    let hover = parsed
                        .marker(id)
                        .map(|m| m.hover.clone())
                        .unwrap_or_default();
                    out.push(Segment::Marker {
                        id,
                        text: frag.text(line).to_string(),
                        hover,
                    });
                }
            }
        }
        plain.push_str(&line[pos..]);
        if !plain.is_empty() {
            out.push(Segment::Text(plain));
        }
        out
    }
}

/// Splits `source` into lines and attaches each delimited span of `parsed`
/// to every line it overlaps.
///
/// Lines and spans are both ordered by offset, so one forward pass over the
/// spans serves all lines.
///
/// `parsed` must come from parsing this same `source`.
pub fn project_lines(source: &str, parsed: &ParsedText) -> Vec<ProjectedLine> {
    let delimited: Vec<(Span, Option<MarkerId>)> = parsed
        .nodes
        .iter()
        .filter_map(|n| match n {
            MarkerNode::Text(_) => None,
            MarkerNode::Marker { full, id, .. } => Some((*full, Some(*id))),
            MarkerNode::Unannotated { full, .. } => Some((*full, None)),
        })
        .collect();

    let mut first = 0;
    lines_with_spans(source)
        .map(|line| {
            // Spans ending at or before this line can't reach later lines.
            while delimited
                .get(first)
                .is_some_and(|(full, _)| full.end <= line.span.start)
            {
                first += 1;
            }
            let fragments: Vec<MarkerFragment> = delimited[first..]
                .iter()
                .take_while(|(full, _)| full.start <= line.span.end)
                .filter(|(full, _)| line.span.overlaps(*full))
                .map(|&(full, id)| MarkerFragment {
                    id,
                    is_start: line.span.start <= full.start && full.start < line.span.end,
                    is_end: line.span.start < full.end && full.end <= line.span.end,
                    span: full.relative_to(line.span),
                })
                .collect();
            ProjectedLine {
                index: line.index,
                span: line.span,
                fragments,
            }
        })
        .collect()
}

/// Reassembles a marker's content from its fragments, joined by line feeds.
pub fn marker_content(source: &str, lines: &[ProjectedLine], id: MarkerId) -> String {
    lines
        .iter()
        .flat_map(|line| {
            let text = line.text(source);
            line.fragments
                .iter()
                .filter(move |f| f.id == Some(id))
                .map(move |f| f.text(text))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
