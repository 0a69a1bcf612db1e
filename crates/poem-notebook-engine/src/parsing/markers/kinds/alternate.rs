/// An alternate-version span: `{content}` with an associated hover note.
///
/// The content may contain line breaks. It runs to the first `CLOSE`, so an
/// inner `OPEN` is literal content.
pub struct Alternate;

impl Alternate {
    pub const OPEN: u8 = b'{';
    pub const CLOSE: u8 = b'}';

    /// Strips one leading `OPEN` (when `is_start`) and one trailing `CLOSE`
    /// (when `is_end`) from a projected fragment.
    pub fn trim_fragment(text: &str, is_start: bool, is_end: bool) -> &str {
        let mut out = text;
        if is_start {
            out = out.strip_prefix(Self::OPEN as char).unwrap_or(out);
        }
        if is_end {
            out = out.strip_suffix(Self::CLOSE as char).unwrap_or(out);
        }
        out
    }
}
