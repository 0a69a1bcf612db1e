use serde::Serialize;

/// A byte range `[start, end)` into a normalized poem text.
///
/// Parsed structures store spans rather than copied text, so slicing the
/// source with any span reproduces the exact bracketed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Whether the two ranges share at least one position.
    ///
    /// An empty `self` (a blank line) overlaps `other` when it sits strictly
    /// inside it, which keeps blank lines in the middle of a multi-line
    /// marker attached to that marker.
    #[must_use]
    pub fn overlaps(self, other: Span) -> bool {
        if self.is_empty() {
            return other.start < self.start && self.start < other.end;
        }
        self.start < other.end && other.start < self.end
    }

    /// Clamps `self` to `bounds` and re-expresses it relative to `bounds.start`.
    #[must_use]
    pub fn relative_to(self, bounds: Span) -> Span {
        let start = self.start.max(bounds.start).min(bounds.end);
        let end = self.end.min(bounds.end).max(start);
        Span {
            start: start - bounds.start,
            end: end - bounds.start,
        }
    }

    /// Returns the text covered by this span.
    ///
    /// # Panics
    /// Panics if the span is out of bounds or not on char boundaries.
    pub fn slice(self, text: &str) -> &str {
        &text[self.start..self.end]
    }
}
