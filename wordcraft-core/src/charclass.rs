//! Character classification for word scanning
//!
//! Letters are the Latin and Cyrillic alphabets in both cases, digits are
//! ASCII `0-9`, and whitespace is the Unicode `White_Space` property. Every
//! other character classifies as [`CharClass::Other`].

use std::collections::HashSet;
use std::sync::OnceLock;

/// Classification of a single character
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Latin or Cyrillic letter
    Letter,
    /// ASCII decimal digit
    Digit,
    /// Whitespace character
    Whitespace,
    /// Punctuation, symbols and letters of other scripts
    Other,
}

const ASCII_LETTER: u8 = 0b01;
const ASCII_DIGIT: u8 = 0b10;

/// Lookup table with an ASCII fast path
#[derive(Debug)]
struct AlphabetTable {
    ascii: [u8; 128],
    non_ascii_letters: HashSet<char>,
}

impl AlphabetTable {
    fn new() -> Self {
        let mut ascii = [0u8; 128];
        for ch in ('a'..='z').chain('A'..='Z') {
            ascii[ch as usize] |= ASCII_LETTER;
        }
        for ch in '0'..='9' {
            ascii[ch as usize] |= ASCII_DIGIT;
        }

        let non_ascii_letters = ('а'..='я')
            .chain('А'..='Я')
            .chain(['ё', 'Ё'])
            .collect();

        Self {
            ascii,
            non_ascii_letters,
        }
    }

    #[inline]
    fn is_letter(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii[ch as usize] & ASCII_LETTER != 0
        } else {
            self.non_ascii_letters.contains(&ch)
        }
    }

    #[inline]
    fn is_digit(&self, ch: char) -> bool {
        ch.is_ascii() && self.ascii[ch as usize] & ASCII_DIGIT != 0
    }
}

static ALPHABET: OnceLock<AlphabetTable> = OnceLock::new();

fn alphabet() -> &'static AlphabetTable {
    ALPHABET.get_or_init(AlphabetTable::new)
}

/// Classify a character
pub fn classify(ch: char) -> CharClass {
    if is_letter(ch) {
        CharClass::Letter
    } else if is_digit(ch) {
        CharClass::Digit
    } else if is_whitespace(ch) {
        CharClass::Whitespace
    } else {
        CharClass::Other
    }
}

/// Check if character is a Latin or Cyrillic letter
#[inline]
pub fn is_letter(ch: char) -> bool {
    alphabet().is_letter(ch)
}

/// Check if character is an ASCII digit
#[inline]
pub fn is_digit(ch: char) -> bool {
    alphabet().is_digit(ch)
}

/// Check if character is whitespace
#[inline]
pub fn is_whitespace(ch: char) -> bool {
    ch.is_whitespace()
}

/// Membership test for words
#[inline]
pub fn is_letter_or_digit(ch: char) -> bool {
    is_letter(ch) || is_digit(ch)
}

/// Complement of the membership test for non-alphabetic runs
#[inline]
pub fn is_letter_or_space(ch: char) -> bool {
    is_letter(ch) || is_whitespace(ch)
}

/// Lower-case a character when the mapping is a single character
pub(crate) fn to_lower(ch: char) -> char {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_letters() {
        for ch in ('a'..='z').chain('A'..='Z') {
            assert_eq!(classify(ch), CharClass::Letter, "{ch:?}");
        }
    }

    #[test]
    fn test_cyrillic_letters() {
        for ch in "абвгдеёжзийклмнопрстуфхцчшщъыьэюя".chars() {
            assert!(is_letter(ch), "{ch:?}");
            assert!(is_letter(to_lower(ch).to_uppercase().next().unwrap()));
        }
        assert!(is_letter('Ё'));
        assert!(is_letter('Я'));
    }

    #[test]
    fn test_digits() {
        for ch in '0'..='9' {
            assert_eq!(classify(ch), CharClass::Digit);
            assert!(is_letter_or_digit(ch));
            assert!(!is_letter_or_space(ch));
        }
        // Arabic-Indic digit three is not part of the alphabet
        assert_eq!(classify('\u{0663}'), CharClass::Other);
    }

    #[test]
    fn test_whitespace() {
        for ch in [' ', '\t', '\n', '\r', '\u{00A0}', '\u{3000}'] {
            assert_eq!(classify(ch), CharClass::Whitespace, "{ch:?}");
            assert!(is_letter_or_space(ch));
            assert!(!is_letter_or_digit(ch));
        }
    }

    #[test]
    fn test_other_scripts_and_symbols() {
        for ch in ['α', 'Ω', '日', 'é', '-', '(', '!', '_', '🎉', '\0'] {
            assert_eq!(classify(ch), CharClass::Other, "{ch:?}");
        }
    }

    #[test]
    fn test_to_lower() {
        assert_eq!(to_lower('A'), 'a');
        assert_eq!(to_lower('Ё'), 'ё');
        assert_eq!(to_lower('x'), 'x');
        // 'İ' lower-cases to two characters and is left alone
        assert_eq!(to_lower('İ'), 'İ');
    }
}
