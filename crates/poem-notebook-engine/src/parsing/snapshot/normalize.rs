use std::fmt;

use serde::Serialize;

use crate::parsing::{
    ParsedPoem,
    markers::MarkerNode,
    text::{Span, preview},
};

/// Snapshot of a parsed poem for testing with `insta`.
#[derive(Serialize)]
pub struct Snap {
    pub title: String,
    pub fields: Vec<FieldSnap>,
}

/// Snapshot of one parsed field.
#[derive(Serialize)]
pub struct FieldSnap {
    /// Field name as used in poem files (e.g., "original").
    pub field: String,
    /// Parser nodes in order.
    pub nodes: Vec<NodeSnap>,
    /// Projected lines, including those without fragments.
    pub lines: Vec<LineSnap>,
}

#[derive(Serialize)]
pub struct NodeSnap {
    /// "Text", "Marker(orig-0)" or "Unannotated".
    pub kind: String,
    /// Byte span as (start, end) tuple, delimiters included.
    pub span: (usize, usize),
    /// Preview of node text (truncated for readability).
    pub text: String,
    /// Hover note for markers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover: Option<String>,
}

#[derive(Serialize)]
pub struct LineSnap {
    pub index: usize,
    pub span: (usize, usize),
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fragments: Vec<FragmentSnap>,
}

#[derive(Serialize)]
pub struct FragmentSnap {
    /// Marker id, or "-" for an unannotated span.
    pub id: String,
    /// "start", "end", "start+end" or "middle".
    pub edge: String,
    /// Line-relative span.
    pub span: (usize, usize),
    /// Display text with delimiters trimmed.
    pub text: String,
}

fn tuple(sp: Span) -> (usize, usize) {
    (sp.start, sp.end)
}

/// Converts a parsed poem into a serializable snapshot.
pub fn normalize(parsed: &ParsedPoem<'_>) -> Snap {
    let fields = parsed
        .fields
        .iter()
        .map(|pf| {
            let nodes = pf
                .parsed
                .nodes
                .iter()
                .map(|n| {
                    let (kind, hover) = match n {
                        MarkerNode::Text(_) => ("Text".to_string(), None),
                        MarkerNode::Marker { id, .. } => (
                            format!("Marker({id})"),
                            pf.parsed.marker(*id).map(|m| m.hover.clone()),
                        ),
                        MarkerNode::Unannotated { .. } => ("Unannotated".to_string(), None),
                    };
                    NodeSnap {
                        kind,
                        span: tuple(n.full_span()),
                        text: preview(pf.source, n.full_span(), 60),
                        hover,
                    }
                })
                .collect();

            let lines = pf
                .lines
                .iter()
                .map(|line| {
                    let text = line.text(pf.source);
                    let fragments = line
                        .fragments
                        .iter()
                        .map(|f| FragmentSnap {
                            id: f.id.map_or_else(|| "-".to_string(), |id| id.to_string()),
                            edge: match (f.is_start, f.is_end) {
                                (true, true) => "start+end",
                                (true, false) => "start",
                                (false, true) => "end",
                                (false, false) => "middle",
                            }
                            .to_string(),
                            span: tuple(f.span),
                            text: f.text(text).to_string(),
                        })
                        .collect();
                    LineSnap {
                        index: line.index,
                        span: tuple(line.span),
                        text: preview(pf.source, line.span, 80),
                        fragments,
                    }
                })
                .collect();

            FieldSnap {
                field: pf.field.key().to_string(),
                nodes,
                lines,
            }
        })
        .collect();

    Snap {
        title: parsed.poem.title.clone(),
        fields,
    }
}

/// Compact text form used by inline `insta` snapshots.
///
/// One line per node, line and fragment; no trailing newline.
impl fmt::Display for Snap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = vec![format!("# {}", self.title)];
        for field in &self.fields {
            out.push(format!("[{}]", field.field));
            for n in &field.nodes {
                let mut row = format!("{} {}..{} {:?}", n.kind, n.span.0, n.span.1, n.text);
                if let Some(hover) = &n.hover {
                    row.push_str(&format!(" hover={hover:?}"));
                }
                out.push(row);
            }
            for line in &field.lines {
                out.push(format!(
                    "line {} {}..{} {:?}",
                    line.index, line.span.0, line.span.1, line.text
                ));
                for frag in &line.fragments {
                    out.push(format!(
                        "  {} {} {}..{} {:?}",
                        frag.id, frag.edge, frag.span.0, frag.span.1, frag.text
                    ));
                }
            }
        }
        write!(f, "{}", out.join("\n"))
    }
}
