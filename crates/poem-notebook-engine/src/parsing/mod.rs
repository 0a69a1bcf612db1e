pub mod align;
pub mod markers;
pub mod normalize;
pub mod projection;
pub mod snapshot;
pub mod text;

#[cfg(test)]
mod tests;

use log::debug;

use crate::models::{Field, MarkerId, Poem};

use markers::{Marker, ParsedText, Segment, parse_markers};
use projection::{ProjectedLine, project_lines};

/// One field of a poem after marker parsing and line projection.
#[derive(Debug, Clone)]
pub struct ParsedField<'a> {
    pub field: Field,
    /// The normalized, still-bracketed text all spans point into.
    pub source: &'a str,
    pub parsed: ParsedText,
    pub lines: Vec<ProjectedLine>,
}

impl ParsedField<'_> {
    /// Whole-field segments for continuous (paragraph) display.
    pub fn segments(&self) -> Vec<Segment> {
        self.parsed.segments(self.source)
    }

    /// Display segments of one projected line.
    pub fn line_segments(&self, line: &ProjectedLine) -> Vec<Segment> {
        line.segments(self.source, &self.parsed)
    }

    pub fn display_text(&self) -> String {
        self.parsed.display_text(self.source)
    }
}

/// Every present field of a poem, parsed with one shared annotation cursor.
#[derive(Debug, Clone)]
pub struct ParsedPoem<'a> {
    pub poem: &'a Poem,
    /// Present fields in [`Field::ORDER`].
    pub fields: Vec<ParsedField<'a>>,
}

impl<'a> ParsedPoem<'a> {
    pub fn field(&self, field: Field) -> Option<&ParsedField<'a>> {
        self.fields.iter().find(|f| f.field == field)
    }

    /// All annotated markers across fields, in id order.
    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.fields.iter().flat_map(|f| f.parsed.markers.iter())
    }

    pub fn marker(&self, id: MarkerId) -> Option<&Marker> {
        self.field(id.field).and_then(|f| f.parsed.marker(id))
    }
}

/// Runs the parse pipeline over a poem.
///
/// Fields are visited in [`Field::ORDER`] and share one annotation cursor,
/// so a marker's id index is the position of its hover note. A missing
/// phonetic field consumes nothing.
pub fn parse_poem(poem: &Poem) -> ParsedPoem<'_> {
    let mut notes = poem.hover_text.cursor();
    let mut fields = Vec::with_capacity(Field::ORDER.len());

    for field in Field::ORDER {
        let Some(text) = poem.text(field) else {
            continue;
        };
        let source = text.content.as_str();
        let parsed = parse_markers(field, source, &mut notes);
        let lines = project_lines(source, &parsed);
        fields.push(ParsedField {
            field,
            source,
            parsed,
            lines,
        });
    }

    let unused = poem.hover_text.len() - notes.position();
    if unused > 0 {
        debug!("\"{}\": {unused} hover note(s) left unused", poem.title);
    }

    ParsedPoem { poem, fields }
}
