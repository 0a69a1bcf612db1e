use crate::models::{AnnotationList, Poem, PoemText};

use super::raw::RawPoem;

/// Text fields at or above this many characters are rejected.
pub const MAX_FIELD_CHARS: usize = 100_000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required field `{0}`")]
    Missing(&'static str),
    #[error("field `{0}` is empty")]
    Empty(&'static str),
    #[error("field `{field}` has {chars} characters (limit {limit})", limit = MAX_FIELD_CHARS)]
    TooLong { field: &'static str, chars: usize },
    #[error("hoverText entry {0} is empty")]
    EmptyHoverText(usize),
}

fn check_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty(field));
    }
    let chars = value.chars().count();
    if chars >= MAX_FIELD_CHARS {
        return Err(ValidationError::TooLong { field, chars });
    }
    Ok(())
}

fn required<'a>(field: &'static str, value: &'a Option<String>) -> Result<&'a str, ValidationError> {
    let value = value.as_deref().ok_or(ValidationError::Missing(field))?;
    check_text(field, value)?;
    Ok(value)
}

fn optional<'a>(
    field: &'static str,
    value: &'a Option<String>,
) -> Result<Option<&'a str>, ValidationError> {
    value
        .as_deref()
        .map(|v| check_text(field, v).map(|()| v))
        .transpose()
}

fn with_lang(text: PoemText, lang: &Option<String>) -> PoemText {
    match lang {
        Some(lang) => text.with_lang(lang),
        None => text,
    }
}

impl RawPoem {
    /// Checks the input contract and builds the immutable [`Poem`].
    pub fn validate(&self) -> Result<Poem, ValidationError> {
        let title = required("title", &self.title)?;
        let original = required("original", &self.original)?;
        let translation = required("translation", &self.translation)?;
        let title_phonetic = optional("titlePhonetic", &self.title_phonetic)?;
        let title_translation = optional("titleTranslation", &self.title_translation)?;
        let phonetic = optional("phonetic", &self.phonetic)?;

        let notes = self.hover_text.clone().unwrap_or_default();
        if let Some(i) = notes.iter().position(|n| n.trim().is_empty()) {
            return Err(ValidationError::EmptyHoverText(i));
        }

        Ok(Poem {
            title: title.to_string(),
            title_phonetic: title_phonetic.map(str::to_string),
            title_translation: title_translation.map(str::to_string),
            original: with_lang(PoemText::new(original), &self.original_lang),
            phonetic: phonetic.map(|p| with_lang(PoemText::new(p), &self.phonetic_lang)),
            translation: with_lang(PoemText::new(translation), &self.translation_lang),
            hover_text: AnnotationList::new(notes),
            untitled: self.untitled.unwrap_or(false),
        })
    }
}
