use serde::Serialize;

use crate::models::{Field, Poem};
use crate::parsing::{
    ParsedField, ParsedPoem,
    align::{Pairing, Row, group_lines, pair_rows},
    markers::Segment,
    parse_poem,
};

use super::index::MarkerIndex;

/// One display line: segments with the line's outer whitespace trimmed.
///
/// An empty segment list renders as a placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DisplayLine {
    pub segments: Vec<Segment>,
}

impl DisplayLine {
    pub fn new(mut segments: Vec<Segment>) -> Self {
        if let Some(Segment::Text(t)) = segments.first_mut() {
            *t = t.trim_start().to_string();
        }
        if let Some(Segment::Text(t)) = segments.last_mut() {
            *t = t.trim_end().to_string();
        }
        segments.retain(|s| !matches!(s, Segment::Text(t) if t.is_empty()));
        Self { segments }
    }

    pub fn is_placeholder(&self) -> bool {
        self.segments.is_empty()
    }

    /// Plain display text, markers inlined.
    pub fn text(&self) -> String {
        self.segments
            .iter()
            .map(|s| match s {
                Segment::Text(t) => t.as_str(),
                Segment::Marker { text, .. } => text.as_str(),
            })
            .collect()
    }
}

pub type Stanza = Vec<DisplayLine>;

/// Lines of one grid unit. A missing cell in a [`Row`] is a placeholder.
pub type Cell = Vec<DisplayLine>;

/// A field shown as continuous text, split into stanzas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextBlock {
    pub field: Field,
    pub lang: Option<String>,
    pub stanzas: Vec<Stanza>,
}

/// Everything a frontend needs to draw one poem page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoemView {
    pub title: String,
    pub untitled: bool,
    /// Row 0 pairs the title with its translation; row 1, when present,
    /// holds the phonetic title. Empty for untitled poems.
    pub title_rows: Vec<Row<String>>,
    pub original: TextBlock,
    pub phonetic: Option<TextBlock>,
    pub translation_lang: Option<String>,
    pub pairing: Pairing,
    /// Original/translation units paired by position.
    pub rows: Vec<Row<Cell>>,
    pub markers: MarkerIndex,
}

/// Parses and renders one poem.
pub fn render_poem(poem: &Poem, pairing: Pairing) -> PoemView {
    PoemView::from_parsed(&parse_poem(poem), pairing)
}

impl PoemView {
    pub fn from_parsed(parsed: &ParsedPoem<'_>, pairing: Pairing) -> Self {
        let poem = parsed.poem;

        let title_rows = if poem.untitled {
            vec![]
        } else {
            let mut rows = vec![Row {
                original: Some(poem.title.clone()),
                translation: poem.title_translation.clone(),
            }];
            if let Some(phonetic) = &poem.title_phonetic {
                rows.push(Row {
                    original: Some(phonetic.clone()),
                    translation: None,
                });
            }
            rows
        };

        let original = parsed
            .field(Field::Original)
            .map(|pf| continuous(poem, pf))
            .unwrap_or_else(|| TextBlock {
                field: Field::Original,
                lang: None,
                stanzas: vec![],
            });

        let rows = pair_rows(
            units(parsed.field(Field::Original), pairing),
            units(parsed.field(Field::Translation), pairing),
        );

        Self {
            title: poem.title.clone(),
            untitled: poem.untitled,
            title_rows,
            original,
            phonetic: parsed
                .field(Field::Phonetic)
                .map(|pf| continuous(poem, pf)),
            translation_lang: poem.translation.lang.clone(),
            pairing,
            rows,
            markers: MarkerIndex::build(parsed),
        }
    }
}

fn continuous(poem: &Poem, pf: &ParsedField<'_>) -> TextBlock {
    TextBlock {
        field: pf.field,
        lang: poem.text(pf.field).and_then(|t| t.lang.clone()),
        stanzas: units(Some(pf), Pairing::Stanza),
    }
}

fn units(pf: Option<&ParsedField<'_>>, pairing: Pairing) -> Vec<Cell> {
    let Some(pf) = pf else {
        return vec![];
    };
    group_lines(&pf.lines, pf.source, pairing)
        .into_iter()
        .map(|group| {
            group
                .iter()
                .map(|line| DisplayLine::new(pf.line_segments(line)))
                .collect()
        })
        .collect()
}
