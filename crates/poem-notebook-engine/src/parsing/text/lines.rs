use super::span::Span;

/// A reference to a single line of a text with its byte span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// Zero-based line number.
    pub index: usize,
    /// Byte span of this line in the text, excluding the line feed.
    pub span: Span,
    /// The line text, untrimmed.
    pub text: &'a str,
}

/// Returns an iterator over the LF-separated lines of `text` with their spans.
///
/// Each consumed line feed costs one byte between consecutive lines; nothing
/// is charged after the last line. A text ending in `\n` yields a final empty
/// line, and the empty text yields a single empty line.
pub fn lines_with_spans(text: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let mut offset = 0usize;
    text.split('\n').enumerate().map(move |(index, line)| {
        let start = offset;
        offset += line.len() + 1;
        LineRef {
            index,
            span: Span {
                start,
                end: start + line.len(),
            },
            text: line,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_skip_line_feeds() {
        let lines: Vec<_> = lines_with_spans("ab\ncde\n\nf").collect();
        let spans: Vec<_> = lines.iter().map(|l| (l.span.start, l.span.end)).collect();
        assert_eq!(spans, vec![(0, 2), (3, 6), (7, 7), (8, 9)]);
        assert_eq!(lines[1].text, "cde");
        assert_eq!(lines[3].index, 3);
    }

    #[test]
    fn trailing_line_feed_yields_empty_last_line() {
        let lines: Vec<_> = lines_with_spans("a\n").collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].span, Span { start: 2, end: 2 });
    }

    #[test]
    fn empty_text_is_one_empty_line() {
        let lines: Vec<_> = lines_with_spans("").collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].span.is_empty());
    }

    #[test]
    fn spans_slice_back_to_line_text() {
        let text = "डपु अथमु ..\n\nमुद्दत खां";
        for line in lines_with_spans(text) {
            assert_eq!(line.span.slice(text), line.text);
        }
    }
}
