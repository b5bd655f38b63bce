//! Sequence strategy: scan an immutable character sequence and assemble the
//! output into a new string

use super::{is_bounded_by_letters, Strategy, TextEditor};
use crate::error::{check_position, Result};
use crate::predicate::WordPredicate;
use crate::scanner::{scan_runs, scan_words};

/// Reference editor
#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceEditor;

impl TextEditor for SequenceEditor {
    fn replace_letter_by_position_in_word(
        &self,
        text: &str,
        position: isize,
        replacement: char,
    ) -> Result<String> {
        let position = check_position(position)?;
        let chars: Vec<char> = text.chars().collect();
        let mut output = String::with_capacity(text.len());
        let mut offset = 0;

        for word in scan_words(&chars).filter(|word| word.len() > position) {
            let at = word.start + position;
            output.extend(&chars[offset..at]);
            output.push(replacement);
            offset = at + 1;
        }
        output.extend(&chars[offset..]);

        Ok(output)
    }

    fn replace_each_letter_after(
        &self,
        text: &str,
        before: char,
        target: char,
        replacement: char,
    ) -> Result<String> {
        let mut output = String::with_capacity(text.len());
        let mut chars = text.chars().peekable();

        while let Some(ch) = chars.next() {
            output.push(ch);
            if ch == before && chars.next_if_eq(&target).is_some() {
                output.push(replacement);
            }
        }

        Ok(output)
    }

    fn replace_each_word_by_predicate(
        &self,
        text: &str,
        predicate: &dyn WordPredicate,
        replacement: &str,
    ) -> Result<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut output = String::with_capacity(text.len());
        let mut offset = 0;

        for word in scan_words(&chars) {
            if predicate.test(&word.to_text(&chars)) {
                output.extend(&chars[offset..word.start]);
                output.push_str(replacement);
                offset = word.end;
            }
        }
        output.extend(&chars[offset..]);

        Ok(output)
    }

    fn remove_all_non_alphabetic_except_spaces(&self, text: &str) -> Result<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut output = String::with_capacity(text.len());
        let mut offset = 0;

        for run in scan_runs(&chars) {
            output.extend(&chars[offset..run.start]);
            if is_bounded_by_letters(&chars, run) {
                output.push(' ');
            }
            offset = run.end;
        }
        output.extend(&chars[offset..]);

        Ok(output)
    }

    fn strategy(&self) -> Strategy {
        Strategy::Sequence
    }
}
