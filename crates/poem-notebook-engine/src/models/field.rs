use std::fmt;

use serde::Serialize;

/// One of the three parallel texts of a poem.
///
/// Variant order is the order markers are discovered in, and therefore the
/// order the shared annotation list is consumed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Original,
    Phonetic,
    Translation,
}

impl Field {
    /// All fields in annotation consumption order.
    pub const ORDER: [Field; 3] = [Field::Original, Field::Phonetic, Field::Translation];

    /// Prefix used when building marker ids for this field.
    pub fn id_prefix(self) -> &'static str {
        match self {
            Field::Original => "orig-",
            Field::Phonetic => "phon-",
            Field::Translation => "trans-",
        }
    }

    /// The key used for this field in poem source files.
    pub fn key(self) -> &'static str {
        match self {
            Field::Original => "original",
            Field::Phonetic => "phonetic",
            Field::Translation => "translation",
        }
    }
}

/// Identity of one logical marker.
///
/// `index` is the position of the consumed hover note in the poem's
/// annotation list, so ids are unique across all fields of a poem. Every
/// fragment of a multi-line marker carries the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkerId {
    pub field: Field,
    pub index: usize,
}

impl MarkerId {
    pub fn new(field: Field, index: usize) -> Self {
        Self { field, index }
    }
}

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.field.id_prefix(), self.index)
    }
}

impl Serialize for MarkerId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
