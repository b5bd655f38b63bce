//! Buffer strategy: edit a fixed-size character buffer
//!
//! The two length-preserving operations rewrite an exclusively borrowed
//! buffer in place. The variable-length operations cannot, so they size a
//! new buffer exactly (or by its upper bound) and block-copy into it.

use super::{is_bounded_by_letters, Strategy, TextEditor};
use crate::error::{check_position, Result};
use crate::predicate::WordPredicate;
use crate::scanner::{find_run, find_word};
use crate::span::Span;
use smallvec::SmallVec;

/// Matched spans of one pass; most texts edit only a handful of words
type SpanList = SmallVec<[Span; 16]>;

/// Buffer-backed editor
#[derive(Debug, Clone, Copy, Default)]
pub struct BufferEditor;

/// Replace the character at in-word offset `position` of every word longer
/// than `position`, in place.
///
/// The buffer is left untouched when `position` is negative.
pub fn replace_letter_by_position_in_word_in_place(
    text: &mut [char],
    position: isize,
    replacement: char,
) -> Result<()> {
    let position = check_position(position)?;
    let mut offset = 0;

    while let Some(word) = find_word(text, offset) {
        if word.len() > position {
            text[word.start + position] = replacement;
        }
        offset = word.end;
    }

    Ok(())
}

/// Replace `target` with `replacement` wherever it directly follows
/// `before`, in place.
pub fn replace_each_letter_after_in_place(
    text: &mut [char],
    before: char,
    target: char,
    replacement: char,
) {
    let mut i = 0;
    while i + 1 < text.len() {
        if text[i] == before && text[i + 1] == target {
            text[i + 1] = replacement;
            i += 1;
        }
        i += 1;
    }
}

/// Replace every word satisfying `predicate`, returning a new buffer
pub fn replace_each_word_by_predicate_in_buffer(
    text: &[char],
    predicate: &dyn WordPredicate,
    replacement: &[char],
) -> Vec<char> {
    let matched = matching_words(text, predicate);
    let mut edited = vec!['\0'; edited_length(text.len(), replacement.len(), &matched)];
    let mut text_offset = 0;
    let mut edited_offset = 0;

    for word in &matched {
        let gap = word.start - text_offset;
        edited[edited_offset..edited_offset + gap]
            .copy_from_slice(&text[text_offset..word.start]);
        edited_offset += gap;
        edited[edited_offset..edited_offset + replacement.len()].copy_from_slice(replacement);
        edited_offset += replacement.len();
        text_offset = word.end;
    }
    edited[edited_offset..].copy_from_slice(&text[text_offset..]);

    edited
}

/// Remove non-alphabetic runs, returning a new buffer
pub fn remove_all_non_alphabetic_except_spaces_in_buffer(text: &[char]) -> Vec<char> {
    // Every run is at least one character and shrinks to at most one
    let mut edited = vec!['\0'; text.len()];
    let mut text_offset = 0;
    let mut edited_offset = 0;

    while let Some(run) = find_run(text, text_offset) {
        let gap = run.start - text_offset;
        edited[edited_offset..edited_offset + gap]
            .copy_from_slice(&text[text_offset..run.start]);
        edited_offset += gap;
        if is_bounded_by_letters(text, run) {
            edited[edited_offset] = ' ';
            edited_offset += 1;
        }
        text_offset = run.end;
    }
    let tail = text.len() - text_offset;
    edited[edited_offset..edited_offset + tail].copy_from_slice(&text[text_offset..]);
    edited.truncate(edited_offset + tail);

    edited
}

fn matching_words(text: &[char], predicate: &dyn WordPredicate) -> SpanList {
    let mut matched = SpanList::new();
    let mut offset = 0;

    while let Some(word) = find_word(text, offset) {
        if predicate.test(&word.to_text(text)) {
            matched.push(word);
        }
        offset = word.end;
    }

    matched
}

fn edited_length(text_len: usize, replacement_len: usize, matched: &[Span]) -> usize {
    let removed: usize = matched.iter().map(Span::len).sum();
    text_len + replacement_len * matched.len() - removed
}

fn to_buffer(text: &str) -> Vec<char> {
    text.chars().collect()
}

fn from_buffer(buffer: &[char]) -> String {
    buffer.iter().collect()
}

impl TextEditor for BufferEditor {
    fn replace_letter_by_position_in_word(
        &self,
        text: &str,
        position: isize,
        replacement: char,
    ) -> Result<String> {
        let mut buffer = to_buffer(text);
        replace_letter_by_position_in_word_in_place(&mut buffer, position, replacement)?;
        Ok(from_buffer(&buffer))
    }

    fn replace_each_letter_after(
        &self,
        text: &str,
        before: char,
        target: char,
        replacement: char,
    ) -> Result<String> {
        let mut buffer = to_buffer(text);
        replace_each_letter_after_in_place(&mut buffer, before, target, replacement);
        Ok(from_buffer(&buffer))
    }

    fn replace_each_word_by_predicate(
        &self,
        text: &str,
        predicate: &dyn WordPredicate,
        replacement: &str,
    ) -> Result<String> {
        let edited = replace_each_word_by_predicate_in_buffer(
            &to_buffer(text),
            predicate,
            &to_buffer(replacement),
        );
        Ok(from_buffer(&edited))
    }

    fn remove_all_non_alphabetic_except_spaces(&self, text: &str) -> Result<String> {
        let edited = remove_all_non_alphabetic_except_spaces_in_buffer(&to_buffer(text));
        Ok(from_buffer(&edited))
    }

    fn strategy(&self) -> Strategy {
        Strategy::Buffer
    }
}
