use super::span::Span;

/// Extracts text for a span, truncating to at most `max` bytes with a "..."
/// suffix if needed. Truncation backs off to the nearest char boundary.
///
/// Used for human-readable snapshot output.
pub fn preview(text: &str, sp: Span, max: usize) -> String {
    let mut s = sp.slice(text).to_string();
    if s.len() > max {
        let mut cut = max;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        s.truncate(cut);
        s.push_str("...");
    }
    s
}
