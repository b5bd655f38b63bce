//! Word predicates
//!
//! A predicate is a pure classifier over the text of a single word. The
//! library offers length and first-letter tests; any two predicates compose
//! into their conjunction with [`WordPredicate::and`].
//!
//! ```rust
//! use wordcraft_core::predicate::{length_equals, starts_with_consonant, WordPredicate};
//!
//! let short_consonant = length_equals(4).and(starts_with_consonant());
//! assert!(short_consonant.test("word"));
//! assert!(!short_consonant.test("also"));
//! assert!(!short_consonant.test("words"));
//! ```

use crate::charclass::to_lower;
use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

static VOWELS: OnceLock<HashSet<char>> = OnceLock::new();
static CONSONANTS: OnceLock<HashSet<char>> = OnceLock::new();

fn vowels() -> &'static HashSet<char> {
    VOWELS.get_or_init(|| "aeiou".chars().chain("аеёиоуыэюя".chars()).collect())
}

fn consonants() -> &'static HashSet<char> {
    CONSONANTS.get_or_init(|| {
        "bcdfghjklmnpqrstvwxyz"
            .chars()
            .chain("бвгджзйклмнпрстфхцчшщъь".chars())
            .collect()
    })
}

/// Check if a letter is a Latin or Cyrillic vowel, ignoring case
pub fn is_vowel(ch: char) -> bool {
    vowels().contains(&to_lower(ch))
}

/// Check if a letter is a Latin or Cyrillic consonant, ignoring case
pub fn is_consonant(ch: char) -> bool {
    consonants().contains(&to_lower(ch))
}

/// Pure boolean classifier over a word's text
pub trait WordPredicate: Send + Sync {
    /// Evaluate the predicate on `word`
    fn test(&self, word: &str) -> bool;

    /// Conjunction of `self` and `other`
    fn and<P>(self, other: P) -> And<Self, P>
    where
        Self: Sized,
        P: WordPredicate,
    {
        And {
            left: self,
            right: other,
        }
    }

    /// Move the predicate behind a trait object
    fn boxed<'a>(self) -> Box<dyn WordPredicate + 'a>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }
}

impl<P: WordPredicate + ?Sized> WordPredicate for &P {
    fn test(&self, word: &str) -> bool {
        (**self).test(word)
    }
}

impl<P: WordPredicate + ?Sized> WordPredicate for Box<P> {
    fn test(&self, word: &str) -> bool {
        (**self).test(word)
    }
}

/// Word length in characters equals a fixed value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthEquals(pub usize);

impl WordPredicate for LengthEquals {
    fn test(&self, word: &str) -> bool {
        word.chars().count() == self.0
    }
}

/// Word starts with a vowel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StartsWithVowel;

impl WordPredicate for StartsWithVowel {
    fn test(&self, word: &str) -> bool {
        word.chars().next().is_some_and(is_vowel)
    }
}

/// Word starts with a consonant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StartsWithConsonant;

impl WordPredicate for StartsWithConsonant {
    fn test(&self, word: &str) -> bool {
        word.chars().next().is_some_and(is_consonant)
    }
}

/// Word starts with exactly the given character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartsWith(pub char);

impl WordPredicate for StartsWith {
    fn test(&self, word: &str) -> bool {
        word.starts_with(self.0)
    }
}

/// Conjunction of two predicates, see [`WordPredicate::and`]
#[derive(Debug, Clone, Copy)]
pub struct And<L, R> {
    left: L,
    right: R,
}

impl<L: WordPredicate, R: WordPredicate> WordPredicate for And<L, R> {
    fn test(&self, word: &str) -> bool {
        self.left.test(word) && self.right.test(word)
    }
}

/// Predicate backed by a closure, see [`from_fn`]
#[derive(Clone, Copy)]
pub struct FnPredicate<F>(F);

impl<F> fmt::Debug for FnPredicate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FnPredicate").field(&"<fn>").finish()
    }
}

impl<F> WordPredicate for FnPredicate<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn test(&self, word: &str) -> bool {
        (self.0)(word)
    }
}

/// Word length equals `length`
pub fn length_equals(length: usize) -> LengthEquals {
    LengthEquals(length)
}

/// First character is a vowel
pub fn starts_with_vowel() -> StartsWithVowel {
    StartsWithVowel
}

/// First character is a consonant
pub fn starts_with_consonant() -> StartsWithConsonant {
    StartsWithConsonant
}

/// First character is exactly `prefix`
pub fn starts_with(prefix: char) -> StartsWith {
    StartsWith(prefix)
}

/// Lift a closure into a predicate
pub fn from_fn<F>(f: F) -> FnPredicate<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    FnPredicate(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_equals_counts_characters() {
        assert!(length_equals(3).test("six"));
        assert!(length_equals(3).test("мир"));
        assert!(!length_equals(3).test("word"));
        assert!(length_equals(0).test(""));
    }

    #[test]
    fn test_vowel_prefix() {
        for word in ["apple", "Echo", "ёж", "Яблоко", "undo"] {
            assert!(starts_with_vowel().test(word), "{word}");
            assert!(!starts_with_consonant().test(word), "{word}");
        }
    }

    #[test]
    fn test_consonant_prefix() {
        for word in ["word", "Yes", "Zebra", "мир", "Щука", "ъ"] {
            assert!(starts_with_consonant().test(word), "{word}");
            assert!(!starts_with_vowel().test(word), "{word}");
        }
    }

    #[test]
    fn test_neither_vowel_nor_consonant() {
        for word in ["", "1st", "αβ", "_x"] {
            assert!(!starts_with_vowel().test(word), "{word:?}");
            assert!(!starts_with_consonant().test(word), "{word:?}");
        }
    }

    #[test]
    fn test_starts_with_is_case_sensitive() {
        assert!(starts_with('w').test("word"));
        assert!(!starts_with('w').test("Word"));
        assert!(!starts_with('w').test(""));
    }

    #[test]
    fn test_and_composition() {
        let predicate = length_equals(5).and(starts_with_consonant());
        assert!(predicate.test("First"));
        assert!(predicate.test("third"));
        assert!(!predicate.test("words1"));
        assert!(!predicate.test("apple"));

        let nested = length_equals(5)
            .and(starts_with_consonant())
            .and(starts_with('t'));
        assert!(nested.test("third"));
        assert!(!nested.test("First"));
    }

    #[test]
    fn test_boxed_and_borrowed_predicates() {
        let chain: Vec<Box<dyn WordPredicate>> =
            vec![length_equals(4).boxed(), starts_with_vowel().boxed()];
        let combined = chain
            .into_iter()
            .reduce(|acc, next| acc.and(next).boxed())
            .unwrap();
        assert!(combined.test("also"));
        assert!(!combined.test("word"));

        let base = length_equals(2);
        let borrowed = (&base).and(&base);
        assert!(borrowed.test("ok"));
    }

    #[test]
    fn test_from_fn() {
        let has_digit = from_fn(|word: &str| word.chars().any(|ch| ch.is_ascii_digit()));
        assert!(has_digit.test("abc1"));
        assert!(!has_digit.test("abc"));
        assert!(format!("{has_digit:?}").contains("FnPredicate"));
    }
}
