//! Lowercase letter representation.

use std::fmt::{self, Display};

/// A single lowercase ASCII letter in the range `a`-`z`.
///
/// Every cell of a finished grid holds exactly one `Letter`, so invalid
/// characters are rejected at construction time.
///
/// # Examples
///
/// ```
/// use wordhunt_core::Letter;
///
/// let letter = Letter::new('q').unwrap();
/// assert_eq!(letter.as_char(), 'q');
/// assert_eq!(letter.index(), 16);
/// assert!(Letter::new('Q').is_none());
/// assert!(Letter::new('7').is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

/// Error returned when a character is not an ASCII letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid letter: {ch:?}")]
pub struct InvalidLetterError {
    /// The rejected character.
    pub ch: char,
}

impl Letter {
    /// Number of letters in the alphabet.
    pub const COUNT: usize = 26;

    /// All letters from `a` to `z`, in order.
    pub const ALL: [Self; Self::COUNT] = {
        let mut all = [Self(b'a'); Self::COUNT];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < Self::COUNT {
            all[i] = Self(b'a' + i as u8);
            i += 1;
        }
        all
    };

    /// Creates a letter from a lowercase ASCII character.
    ///
    /// Returns `None` for anything outside `a`-`z`.
    #[must_use]
    pub const fn new(ch: char) -> Option<Self> {
        if ch.is_ascii_lowercase() {
            #[allow(clippy::cast_possible_truncation)]
            let byte = ch as u8;
            Some(Self(byte))
        } else {
            None
        }
    }

    /// Creates a letter from an ASCII letter of either case, lowercasing it.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidLetterError`] if `ch` is not an ASCII letter.
    pub fn from_ascii_ignore_case(ch: char) -> Result<Self, InvalidLetterError> {
        Self::new(ch.to_ascii_lowercase()).ok_or(InvalidLetterError { ch })
    }

    /// Creates the letter at `index` in the alphabet (`0` is `a`).
    ///
    /// # Panics
    ///
    /// Panics if `index` is 26 or greater.
    #[must_use]
    pub fn from_index(index: u8) -> Self {
        assert!(
            usize::from(index) < Self::COUNT,
            "Invalid letter index: {index}"
        );
        Self(b'a' + index)
    }

    /// Returns the position of this letter in the alphabet (`a` is `0`).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0 - b'a'
    }

    /// Returns the lowercase character.
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Returns the uppercase character, as shown to players.
    #[must_use]
    pub const fn to_uppercase(self) -> char {
        self.0.to_ascii_uppercase() as char
    }

    /// Parses every character of `word` as a letter, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns the first character that is not an ASCII letter.
    pub fn parse_word(word: &str) -> Result<Vec<Self>, InvalidLetterError> {
        word.chars().map(Self::from_ascii_ignore_case).collect()
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.as_char(), f)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.as_char()
    }
}

impl TryFrom<char> for Letter {
    type Error = InvalidLetterError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Self::new(ch).ok_or(InvalidLetterError { ch })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        assert_eq!(Letter::ALL.len(), 26);
        assert_eq!(Letter::ALL[0].as_char(), 'a');
        assert_eq!(Letter::ALL[25].as_char(), 'z');

        for (i, letter) in Letter::ALL.into_iter().enumerate() {
            assert_eq!(usize::from(letter.index()), i);
            assert_eq!(Letter::from_index(letter.index()), letter);
        }

        assert_eq!(format!("{}", Letter::from_index(2)), "c");
        assert_eq!(Letter::from_index(2).to_uppercase(), 'C');
        let ch: char = Letter::from_index(25).into();
        assert_eq!(ch, 'z');
    }

    #[test]
    fn test_rejects_non_lowercase() {
        assert_eq!(Letter::new('A'), None);
        assert_eq!(Letter::new('é'), None);
        assert_eq!(Letter::try_from(' '), Err(InvalidLetterError { ch: ' ' }));
        assert_eq!(
            Letter::from_ascii_ignore_case('M').map(Letter::as_char),
            Ok('m')
        );
    }

    #[test]
    fn test_parse_word() {
        let letters = Letter::parse_word("Meow").unwrap();
        let text: String = letters.into_iter().map(Letter::as_char).collect();
        assert_eq!(text, "meow");

        assert_eq!(
            Letter::parse_word("no-way"),
            Err(InvalidLetterError { ch: '-' })
        );
    }

    #[test]
    #[should_panic(expected = "Invalid letter index: 26")]
    fn test_from_index_out_of_range_panics() {
        let _ = Letter::from_index(26);
    }
}
