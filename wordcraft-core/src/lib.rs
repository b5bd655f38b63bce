//! Word scanning and position-aware text editing
//!
//! This crate locates "word" tokens (maximal runs of letters and digits) in a
//! text and applies four families of edits to them:
//!
//! - replacing the character at a fixed offset inside every word,
//! - replacing a character wherever it follows a trigger character,
//! - replacing whole words selected by a [`WordPredicate`],
//! - removing non-alphabetic runs, merging letters with a single space.
//!
//! # Architecture
//!
//! - [`charclass`]: letter/digit/whitespace classification tables
//! - [`scanner`]: word and non-alphabetic run scanning
//! - [`predicate`]: composable word predicates
//! - [`edit`]: the operations, implemented once per [`Strategy`]
//!
//! All strategies produce identical output; the free functions at the crate
//! root use the reference [`SequenceEditor`].
//!
//! # Example
//!
//! ```rust
//! use wordcraft_core::predicate::{length_equals, starts_with_consonant, WordPredicate};
//!
//! let text = "First(1) word, second(2) word, third(3) word - six(6) words!";
//!
//! let edited = wordcraft_core::replace_letter_by_position_in_word(text, 2, '_').unwrap();
//! assert_eq!(edited, "Fi_st(1) wo_d, se_ond(2) wo_d, th_rd(3) wo_d - si_(6) wo_ds!");
//!
//! let predicate = length_equals(4).and(starts_with_consonant());
//! let edited = wordcraft_core::replace_each_word_by_predicate(text, &predicate, "").unwrap();
//! assert_eq!(edited, "First(1) , second(2) , third(3)  - six(6) words!");
//!
//! let edited = wordcraft_core::remove_all_non_alphabetic_except_spaces(text).unwrap();
//! assert_eq!(edited, "First word second word third word  six words");
//! ```

pub mod charclass;
pub mod edit;
pub mod error;
pub mod predicate;
pub mod scanner;
pub mod span;

pub use charclass::CharClass;
pub use edit::{
    editor_for, BufferEditor, Edit, ParseStrategyError, PatternEditor, SequenceEditor, Strategy,
    TextEditor,
};
pub use error::{EditError, ErrorKind, Result};
pub use predicate::WordPredicate;
pub use scanner::{find_run, find_word, scan_runs, scan_words, Scanner};
pub use span::Span;

/// Replace the character at in-word offset `position` of every word longer
/// than `position`
pub fn replace_letter_by_position_in_word(
    text: &str,
    position: isize,
    replacement: char,
) -> Result<String> {
    SequenceEditor.replace_letter_by_position_in_word(text, position, replacement)
}

/// Replace `target` with `replacement` wherever it directly follows `before`
pub fn replace_each_letter_after(
    text: &str,
    before: char,
    target: char,
    replacement: char,
) -> Result<String> {
    SequenceEditor.replace_each_letter_after(text, before, target, replacement)
}

/// Replace every word satisfying `predicate` with `replacement`
pub fn replace_each_word_by_predicate<P>(
    text: &str,
    predicate: &P,
    replacement: &str,
) -> Result<String>
where
    P: WordPredicate,
{
    SequenceEditor.replace_each_word_by_predicate(text, predicate, replacement)
}

/// Remove non-alphabetic runs; runs between two letters become a space
pub fn remove_all_non_alphabetic_except_spaces(text: &str) -> Result<String> {
    SequenceEditor.remove_all_non_alphabetic_except_spaces(text)
}
