//! Edit operations and their execution strategies
//!
//! Every strategy implements [`TextEditor`] and must produce identical output
//! for identical input. [`SequenceEditor`] is the reference; [`BufferEditor`]
//! and [`PatternEditor`] reach the same result through a mutable character
//! buffer and through regular expressions respectively.

use crate::charclass::is_letter;
use crate::error::{check_position, Result};
use crate::predicate::WordPredicate;
use crate::span::Span;
use std::fmt;
use std::str::FromStr;

pub mod buffer;
pub mod pattern;
pub mod sequence;

pub use buffer::BufferEditor;
pub use pattern::PatternEditor;
pub use sequence::SequenceEditor;

/// Execution strategy selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Regular-expression matching over the UTF-8 string
    Pattern,
    /// Immutable character sequence assembled into a new string
    #[default]
    Sequence,
    /// Mutable fixed-size character buffer
    Buffer,
}

impl Strategy {
    /// Every strategy, in display order
    pub const ALL: [Strategy; 3] = [Strategy::Pattern, Strategy::Sequence, Strategy::Buffer];

    /// Canonical name
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Pattern => "pattern",
            Strategy::Sequence => "sequence",
            Strategy::Buffer => "buffer",
        }
    }

    /// One-line description for listings
    pub fn description(&self) -> &'static str {
        match self {
            Strategy::Pattern => "regular-expression matching over the UTF-8 string",
            Strategy::Sequence => "character sequence scan assembling a new string (reference)",
            Strategy::Buffer => "fixed-size character buffer, edited in place where possible",
        }
    }

    /// Editor implementing this strategy
    pub fn editor(&self) -> Box<dyn TextEditor> {
        match self {
            Strategy::Pattern => Box::new(PatternEditor::new()),
            Strategy::Sequence => Box::new(SequenceEditor),
            Strategy::Buffer => Box::new(BufferEditor),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown strategy name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy '{0}' (expected pattern, sequence or buffer)")]
pub struct ParseStrategyError(pub String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pattern" | "regex" => Ok(Strategy::Pattern),
            "sequence" | "string" => Ok(Strategy::Sequence),
            "buffer" | "char-array" => Ok(Strategy::Buffer),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

/// Editor for the given strategy
pub fn editor_for(strategy: Strategy) -> Box<dyn TextEditor> {
    strategy.editor()
}

/// One edit operation together with its parameters
pub enum Edit {
    /// Replace the character at `position` inside every longer word
    ReplaceLetterByPosition {
        /// Zero-based offset inside the word
        position: isize,
        /// Character written at that offset
        replacement: char,
    },
    /// Replace `target` wherever it directly follows `before`
    ReplaceLetterAfter {
        /// Trigger character
        before: char,
        /// Character to replace
        target: char,
        /// Character written instead of `target`
        replacement: char,
    },
    /// Replace every word satisfying `predicate` with `replacement`
    ReplaceWords {
        /// Word selector
        predicate: Box<dyn WordPredicate>,
        /// Text written in place of each selected word
        replacement: String,
    },
    /// Remove non-alphabetic runs, merging letters with a single space
    StripNonAlphabetic,
}

impl Edit {
    /// Build a [`Edit::ReplaceWords`] from any predicate
    pub fn replace_words(
        predicate: impl WordPredicate + 'static,
        replacement: impl Into<String>,
    ) -> Self {
        Edit::ReplaceWords {
            predicate: Box::new(predicate),
            replacement: replacement.into(),
        }
    }

    /// Operation name
    pub fn name(&self) -> &'static str {
        match self {
            Edit::ReplaceLetterByPosition { .. } => "replace_letter_by_position",
            Edit::ReplaceLetterAfter { .. } => "replace_letter_after",
            Edit::ReplaceWords { .. } => "replace_words",
            Edit::StripNonAlphabetic => "strip_non_alphabetic",
        }
    }

    /// Whether the operation always preserves the text length
    pub fn is_fixed_length(&self) -> bool {
        matches!(
            self,
            Edit::ReplaceLetterByPosition { .. } | Edit::ReplaceLetterAfter { .. }
        )
    }

    /// Check the parameters without touching any text
    pub fn validate(&self) -> Result<()> {
        if let Edit::ReplaceLetterByPosition { position, .. } = self {
            check_position(*position)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edit::ReplaceLetterByPosition {
                position,
                replacement,
            } => f
                .debug_struct("ReplaceLetterByPosition")
                .field("position", position)
                .field("replacement", replacement)
                .finish(),
            Edit::ReplaceLetterAfter {
                before,
                target,
                replacement,
            } => f
                .debug_struct("ReplaceLetterAfter")
                .field("before", before)
                .field("target", target)
                .field("replacement", replacement)
                .finish(),
            Edit::ReplaceWords { replacement, .. } => f
                .debug_struct("ReplaceWords")
                .field("predicate", &"<dyn WordPredicate>")
                .field("replacement", replacement)
                .finish(),
            Edit::StripNonAlphabetic => f.write_str("StripNonAlphabetic"),
        }
    }
}

/// Pluggable execution strategy for the four edit operations
pub trait TextEditor: Send + Sync {
    /// Replace the character at in-word offset `position` of every word
    /// longer than `position`.
    ///
    /// Fails with `InvalidArgument` when `position` is negative.
    fn replace_letter_by_position_in_word(
        &self,
        text: &str,
        position: isize,
        replacement: char,
    ) -> Result<String>;

    /// Replace `target` with `replacement` wherever it directly follows
    /// `before`. A replaced character is never reconsidered as a trigger.
    fn replace_each_letter_after(
        &self,
        text: &str,
        before: char,
        target: char,
        replacement: char,
    ) -> Result<String>;

    /// Replace every word satisfying `predicate` with `replacement`
    fn replace_each_word_by_predicate(
        &self,
        text: &str,
        predicate: &dyn WordPredicate,
        replacement: &str,
    ) -> Result<String>;

    /// Remove every run of characters that are neither letters nor
    /// whitespace. A run with letters on both sides becomes a single space.
    fn remove_all_non_alphabetic_except_spaces(&self, text: &str) -> Result<String>;

    /// Strategy implemented by this editor
    fn strategy(&self) -> Strategy;

    /// Apply an [`Edit`] description
    fn apply(&self, text: &str, edit: &Edit) -> Result<String> {
        match edit {
            Edit::ReplaceLetterByPosition {
                position,
                replacement,
            } => self.replace_letter_by_position_in_word(text, *position, *replacement),
            Edit::ReplaceLetterAfter {
                before,
                target,
                replacement,
            } => self.replace_each_letter_after(text, *before, *target, *replacement),
            Edit::ReplaceWords {
                predicate,
                replacement,
            } => self.replace_each_word_by_predicate(text, predicate.as_ref(), replacement),
            Edit::StripNonAlphabetic => self.remove_all_non_alphabetic_except_spaces(text),
        }
    }
}

/// Whether the characters directly around `run` both exist and are letters
pub(crate) fn is_bounded_by_letters(text: &[char], run: Span) -> bool {
    let before = run.start.checked_sub(1).and_then(|index| text.get(index));
    let after = text.get(run.end);
    matches!((before, after), (Some(&b), Some(&a)) if is_letter(b) && is_letter(a))
}
