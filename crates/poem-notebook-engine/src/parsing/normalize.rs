//! Line-ending normalization applied to every text before parsing.

use std::borrow::Cow;

/// Converts CRLF and lone CR line endings to LF.
///
/// Borrows when the text contains no carriage return.
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Total form of the normalizer for text that may be absent: `None` becomes
/// the empty string.
///
/// The loaders reject non-string fields before a [`Poem`](crate::Poem) is
/// built, so this serves callers holding raw optional text.
pub fn normalize_field(text: Option<&str>) -> Cow<'_, str> {
    match text {
        Some(text) => normalize_line_endings(text),
        None => Cow::Borrowed(""),
    }
}
