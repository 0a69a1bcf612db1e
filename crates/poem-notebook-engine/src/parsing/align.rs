//! # Stanza/Line Alignment
//!
//! Splits the original and translation into units and pairs them by
//! position. No content-based matching is attempted: poems are authored so
//! that unit counts line up, and a mismatch shows as placeholder cells.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::normalize::normalize_line_endings;
use super::projection::ProjectedLine;

/// Granularity of the paired grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pairing {
    /// Blank-line-separated stanzas; empty stanzas are dropped.
    #[default]
    Stanza,
    /// Single lines; empty lines are kept to hold vertical alignment.
    Line,
}

/// One positional pairing. `None` is an empty placeholder cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row<T> {
    pub original: Option<T>,
    pub translation: Option<T>,
}

/// Pairs units by index, producing `max(len)` rows.
pub fn pair_rows<T>(original: Vec<T>, translation: Vec<T>) -> Vec<Row<T>> {
    let count = original.len().max(translation.len());
    let mut original = original.into_iter();
    let mut translation = translation.into_iter();
    (0..count)
        .map(|_| Row {
            original: original.next(),
            translation: translation.next(),
        })
        .collect()
}

fn stanza_break() -> &'static Regex {
    static STANZA_BREAK: OnceLock<Regex> = OnceLock::new();
    STANZA_BREAK.get_or_init(|| Regex::new(r"\n\s*\n+").expect("Invalid stanza break regex"))
}

/// Splits on blank-line boundaries, trimming each stanza and dropping
/// empty ones.
pub fn split_stanzas(text: &str) -> Vec<String> {
    let normalized = normalize_line_endings(text);
    stanza_break()
        .split(&normalized)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Splits on line feeds, trimming each line and keeping empty ones.
pub fn split_lines(text: &str) -> Vec<String> {
    normalize_line_endings(text)
        .split('\n')
        .map(|l| l.trim().to_string())
        .collect()
}

pub fn split_units(text: &str, pairing: Pairing) -> Vec<String> {
    match pairing {
        Pairing::Stanza => split_stanzas(text),
        Pairing::Line => split_lines(text),
    }
}

/// Splits both texts and pairs their units positionally.
pub fn align_texts(original: &str, translation: &str, pairing: Pairing) -> Vec<Row<String>> {
    pair_rows(
        split_units(original, pairing),
        split_units(translation, pairing),
    )
}

/// One-based numbers of the units that have no counterpart on the other
/// side, counted on the raw text.
///
/// A marker spanning a blank line is still a stanza break here, unlike in
/// [`group_lines`].
pub fn unpaired_units(original: &str, translation: &str, pairing: Pairing) -> Vec<usize> {
    align_texts(original, translation, pairing)
        .iter()
        .enumerate()
        .filter(|(_, row)| row.original.is_none() || row.translation.is_none())
        .map(|(i, _)| i + 1)
        .collect()
}

/// Groups projected lines into units without re-splitting the text, so
/// marker fragments keep their coordinates.
///
/// In stanza mode a group is a maximal run of non-blank lines, which is the
/// same boundary [`split_stanzas`] uses on the raw text.
pub fn group_lines<'a>(
    lines: &'a [ProjectedLine],
    source: &str,
    pairing: Pairing,
) -> Vec<&'a [ProjectedLine]> {
    match pairing {
        Pairing::Line => lines.chunks(1).collect(),
        Pairing::Stanza => lines
            .split(|line| line.is_blank(source))
            .filter(|group| !group.is_empty())
            .collect(),
    }
}
