use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::MarkerId;
use crate::parsing::{ParsedPoem, text::Span};

/// Where one fragment of a marker sits within its field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FragmentLocation {
    /// Zero-based line within the marker's field.
    pub line: usize,
    /// Line-relative span, delimiters included.
    pub span: Span,
    pub is_start: bool,
    pub is_end: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkerEntry {
    /// One-based position in id order, for numbered notes.
    pub number: usize,
    pub hover: String,
    /// Fragments in line order.
    pub fragments: Vec<FragmentLocation>,
}

/// Marker id to fragment locations for one poem.
///
/// Frontends use this to highlight every fragment sharing a hovered id
/// and to number markers for note lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MarkerIndex {
    entries: BTreeMap<MarkerId, MarkerEntry>,
}

impl MarkerIndex {
    pub fn build(parsed: &ParsedPoem<'_>) -> Self {
        let mut entries = BTreeMap::new();
        for pf in &parsed.fields {
            for marker in &pf.parsed.markers {
                entries.insert(
                    marker.id,
                    MarkerEntry {
                        number: 0,
                        hover: marker.hover.clone(),
                        fragments: vec![],
                    },
                );
            }
            for line in &pf.lines {
                for frag in &line.fragments {
                    let Some(entry) = frag.id.and_then(|id| entries.get_mut(&id)) else {
                        continue;
                    };
                    entry.fragments.push(FragmentLocation {
                        line: line.index,
                        span: frag.span,
                        is_start: frag.is_start,
                        is_end: frag.is_end,
                    });
                }
            }
        }
        for (i, entry) in entries.values_mut().enumerate() {
            entry.number = i + 1;
        }
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: MarkerId) -> Option<&MarkerEntry> {
        self.entries.get(&id)
    }

    pub fn hover(&self, id: MarkerId) -> Option<&str> {
        self.get(id).map(|e| e.hover.as_str())
    }

    pub fn fragments(&self, id: MarkerId) -> &[FragmentLocation] {
        self.get(id).map(|e| e.fragments.as_slice()).unwrap_or(&[])
    }

    /// One-based position of `id` in id order, for numbered notes.
    pub fn number(&self, id: MarkerId) -> Option<usize> {
        self.get(id).map(|e| e.number)
    }

    pub fn iter(&self) -> impl Iterator<Item = (MarkerId, &MarkerEntry)> {
        self.entries.iter().map(|(id, e)| (*id, e))
    }
}
