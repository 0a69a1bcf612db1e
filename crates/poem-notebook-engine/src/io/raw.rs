use relative_path::RelativePathBuf;
use serde::{Deserialize, Serialize};

/// A poem exactly as written in a source file, before validation.
///
/// Required fields are optional here so validation can name what is
/// missing instead of surfacing a deserializer message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPoem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_phonetic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_translation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phonetic_lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation_lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_text: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub untitled: Option<bool>,
}

/// `index.json` of a manifest directory.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    pub files: Vec<RelativePathBuf>,
}

pub const BUNDLE_VERSION: u32 = 1;

/// A prebuilt collection: every poem of a manifest in one JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
    #[serde(default)]
    pub files: Vec<String>,
    pub poems: Vec<RawPoem>,
}

impl Bundle {
    /// Pretty JSON with a trailing newline, as written to disk.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        let mut out = serde_json::to_string_pretty(self)?;
        out.push('\n');
        Ok(out)
    }
}
