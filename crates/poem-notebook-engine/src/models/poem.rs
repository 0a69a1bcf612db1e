use serde::Serialize;

use crate::parsing::normalize::normalize_line_endings;

use super::field::Field;

/// One text field of a poem with its display language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoemText {
    /// Line-ending-normalized content, markers still bracketed.
    pub content: String,
    /// Language tag for display and accessibility. Not processed by the core.
    pub lang: Option<String>,
}

impl PoemText {
    pub fn new(content: &str) -> Self {
        Self {
            content: normalize_line_endings(content).into_owned(),
            lang: None,
        }
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }
}

/// Ordered hover notes shared by every field of one poem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnnotationList(Vec<String>);

impl AnnotationList {
    pub fn new(notes: Vec<String>) -> Self {
        Self(notes)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Starts a fresh consumption pass over the notes.
    pub fn cursor(&self) -> AnnotationCursor<'_> {
        AnnotationCursor {
            notes: &self.0,
            next: 0,
        }
    }
}

/// Read position into an [`AnnotationList`], advanced once per marker.
///
/// One cursor is threaded through a single poem's fields in
/// [`Field::ORDER`]; it is never shared between poems.
#[derive(Debug, Clone)]
pub struct AnnotationCursor<'a> {
    notes: &'a [String],
    next: usize,
}

impl<'a> AnnotationCursor<'a> {
    /// Index the next consumed note will have.
    pub fn position(&self) -> usize {
        self.next
    }

    pub fn is_exhausted(&self) -> bool {
        self.next >= self.notes.len()
    }

    /// Consumes the next note, returning its index and text.
    ///
    /// Once exhausted, returns `None` without advancing.
    pub fn take(&mut self) -> Option<(usize, &'a str)> {
        let note = self.notes.get(self.next)?;
        let index = self.next;
        self.next += 1;
        Some((index, note.as_str()))
    }
}

/// A validated poem, immutable after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Poem {
    pub title: String,
    pub title_phonetic: Option<String>,
    pub title_translation: Option<String>,
    pub original: PoemText,
    pub phonetic: Option<PoemText>,
    pub translation: PoemText,
    pub hover_text: AnnotationList,
    /// When set, frontends hide the title block; the title still labels the page.
    pub untitled: bool,
}

impl Poem {
    pub fn new(title: &str, original: &str, translation: &str) -> Self {
        Self {
            title: title.to_string(),
            title_phonetic: None,
            title_translation: None,
            original: PoemText::new(original),
            phonetic: None,
            translation: PoemText::new(translation),
            hover_text: AnnotationList::default(),
            untitled: false,
        }
    }

    pub fn with_phonetic(mut self, phonetic: &str) -> Self {
        self.phonetic = Some(PoemText::new(phonetic));
        self
    }

    pub fn with_hover_text<I, S>(mut self, notes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hover_text = AnnotationList::new(notes.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_title_translation(mut self, title: &str) -> Self {
        self.title_translation = Some(title.to_string());
        self
    }

    pub fn untitled(mut self) -> Self {
        self.untitled = true;
        self
    }

    /// Returns the text stored for `field`, if the poem has one.
    pub fn text(&self, field: Field) -> Option<&PoemText> {
        match field {
            Field::Original => Some(&self.original),
            Field::Phonetic => self.phonetic.as_ref(),
            Field::Translation => Some(&self.translation),
        }
    }
}
