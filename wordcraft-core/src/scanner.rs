//! Word and run scanning
//!
//! Both scanners share one algorithm: skip characters outside the membership
//! class to find a start, then consume members to find the end. Words use
//! [`is_letter_or_digit`]; runs use the negation of [`is_letter_or_space`],
//! so a digit belongs to a word for one scan and to a run for the other.

use crate::charclass::{is_letter_or_digit, is_letter_or_space};
use crate::span::Span;

/// Membership test selecting which characters a scan collects
pub type Membership = fn(char) -> bool;

fn is_run_member(ch: char) -> bool {
    !is_letter_or_space(ch)
}

/// Find the first maximal span of members at or after `offset`
pub fn find_span(text: &[char], offset: usize, member: Membership) -> Option<Span> {
    let start = offset + text.get(offset..)?.iter().position(|&ch| member(ch))?;
    let end = text[start..]
        .iter()
        .position(|&ch| !member(ch))
        .map_or(text.len(), |len| start + len);
    Some(Span::new(start, end))
}

/// Find the first word at or after `offset`
pub fn find_word(text: &[char], offset: usize) -> Option<Span> {
    find_span(text, offset, is_letter_or_digit)
}

/// Find the first non-alphabetic run at or after `offset`
pub fn find_run(text: &[char], offset: usize) -> Option<Span> {
    find_span(text, offset, is_run_member)
}

/// Lazy left-to-right scan over a text
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    text: &'a [char],
    offset: usize,
    member: Membership,
}

impl<'a> Scanner<'a> {
    /// Create a scanner with a custom membership test
    pub fn new(text: &'a [char], member: Membership) -> Self {
        Self {
            text,
            offset: 0,
            member,
        }
    }

    /// Offset where the next search starts
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl Iterator for Scanner<'_> {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        let span = find_span(self.text, self.offset, self.member)?;
        self.offset = span.end;
        Some(span)
    }
}

/// Scan all words of `text`
pub fn scan_words(text: &[char]) -> Scanner<'_> {
    Scanner::new(text, is_letter_or_digit)
}

/// Scan all non-alphabetic runs of `text`
pub fn scan_runs(text: &[char]) -> Scanner<'_> {
    Scanner::new(text, is_run_member)
}
