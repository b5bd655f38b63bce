//! Half-open character intervals

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Half-open interval `[start, end)` of character indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Span {
    /// First character of the span
    pub start: usize,
    /// One past the last character of the span
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {start} past end {end}");
        Self { start, end }
    }

    /// Number of characters covered
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers no characters
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Index range for slicing
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The covered characters of `text`
    #[inline]
    pub fn slice<'a>(&self, text: &'a [char]) -> &'a [char] {
        &text[self.range()]
    }

    /// The covered characters collected into a string
    pub fn to_text(&self, text: &[char]) -> String {
        self.slice(text).iter().collect()
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.range()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_basics() {
        let span = Span::new(2, 5);
        assert_eq!(span.len(), 3);
        assert!(!span.is_empty());
        assert!(Span::new(4, 4).is_empty());
        assert_eq!(Range::from(span), 2..5);
    }

    #[test]
    fn test_span_slice() {
        let text: Vec<char> = "привет мир".chars().collect();
        let span = Span::new(7, 10);
        assert_eq!(span.slice(&text), &['м', 'и', 'р']);
        assert_eq!(span.to_text(&text), "мир");
    }

    #[test]
    fn test_span_ordering() {
        let mut spans = vec![Span::new(5, 6), Span::new(0, 2), Span::new(3, 4)];
        spans.sort();
        assert_eq!(spans, vec![Span::new(0, 2), Span::new(3, 4), Span::new(5, 6)]);
    }
}
