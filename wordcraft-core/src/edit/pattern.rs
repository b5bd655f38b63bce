//! Pattern strategy: regular-expression matching over the UTF-8 string
//!
//! The character classes below spell out the same alphabet as
//! [`crate::charclass`]. `(?i)` is deliberately absent: Unicode case folding
//! would pull in characters such as the Kelvin sign.

use super::{Strategy, TextEditor};
use crate::charclass::is_letter;
use crate::error::{check_position, EditError, Result};
use crate::predicate::WordPredicate;
use regex::{NoExpand, Regex};
use std::sync::OnceLock;

/// Maximal runs of letters and digits
pub const WORD_PATTERN: &str = "[a-zA-Zа-яА-ЯёЁ0-9]+";

/// Maximal runs of characters that are neither letters nor whitespace
pub const RUN_PATTERN: &str = r"[^a-zA-Zа-яА-ЯёЁ\s]+";

static WORD_REGEX: OnceLock<Regex> = OnceLock::new();
static RUN_REGEX: OnceLock<Regex> = OnceLock::new();

fn word_regex() -> &'static Regex {
    WORD_REGEX.get_or_init(|| Regex::new(WORD_PATTERN).expect("word pattern is a valid regex"))
}

fn run_regex() -> &'static Regex {
    RUN_REGEX.get_or_init(|| Regex::new(RUN_PATTERN).expect("run pattern is a valid regex"))
}

/// Regex-backed editor
#[derive(Debug, Clone, Copy)]
pub struct PatternEditor {
    words: &'static Regex,
    runs: &'static Regex,
}

impl PatternEditor {
    /// Create an editor sharing the process-wide compiled patterns
    pub fn new() -> Self {
        Self {
            words: word_regex(),
            runs: run_regex(),
        }
    }
}

impl Default for PatternEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextEditor for PatternEditor {
    fn replace_letter_by_position_in_word(
        &self,
        text: &str,
        position: isize,
        replacement: char,
    ) -> Result<String> {
        let position = check_position(position)?;
        let mut output = String::with_capacity(text.len());
        let mut last = 0;

        for word in self.words.find_iter(text) {
            if let Some((index, ch)) = word.as_str().char_indices().nth(position) {
                let at = word.start() + index;
                output.push_str(&text[last..at]);
                output.push(replacement);
                last = at + ch.len_utf8();
            }
        }
        output.push_str(&text[last..]);

        Ok(output)
    }

    fn replace_each_letter_after(
        &self,
        text: &str,
        before: char,
        target: char,
        replacement: char,
    ) -> Result<String> {
        let wrong: String = [before, target].iter().collect();
        let right: String = [before, replacement].iter().collect();
        let pair = Regex::new(&regex::escape(&wrong)).map_err(|e| {
            EditError::invalid_argument(format!("cannot match {wrong:?} as a pattern: {e}"))
        })?;

        Ok(pair.replace_all(text, NoExpand(&right)).into_owned())
    }

    fn replace_each_word_by_predicate(
        &self,
        text: &str,
        predicate: &dyn WordPredicate,
        replacement: &str,
    ) -> Result<String> {
        let mut output = String::with_capacity(text.len());
        let mut last = 0;

        for word in self.words.find_iter(text) {
            if predicate.test(word.as_str()) {
                output.push_str(&text[last..word.start()]);
                output.push_str(replacement);
                last = word.end();
            }
        }
        output.push_str(&text[last..]);

        Ok(output)
    }

    fn remove_all_non_alphabetic_except_spaces(&self, text: &str) -> Result<String> {
        let mut output = String::with_capacity(text.len());
        let mut last = 0;

        for run in self.runs.find_iter(text) {
            output.push_str(&text[last..run.start()]);
            let before = text[..run.start()].chars().next_back();
            let after = text[run.end()..].chars().next();
            if before.is_some_and(is_letter) && after.is_some_and(is_letter) {
                output.push(' ');
            }
            last = run.end();
        }
        output.push_str(&text[last..]);

        Ok(output)
    }

    fn strategy(&self) -> Strategy {
        Strategy::Pattern
    }
}
