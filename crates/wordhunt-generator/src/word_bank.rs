//! Candidate word catalogs.

use std::collections::HashSet;

use rand::{Rng, seq::index};
use wordhunt_core::Letter;

/// The built-in catalog of pet-themed words.
pub const BUILTIN_WORDS: [&str; 100] = [
    "cat", "dog", "fish", "bird", "mouse", "love", "play", "food", "water", "sleep", "happy",
    "cute", "soft", "warm", "cozy", "purr", "meow", "paw", "tail", "fur", "milk", "toy",
    "ball", "yarn", "box", "bed", "home", "friend", "pet", "care", "jump", "run", "walk",
    "sit", "rest", "eat", "drink", "clean", "wash", "groom", "sun", "moon", "star", "sky",
    "tree", "grass", "flower", "leaf", "wind", "rain", "book", "pen", "desk", "chair", "lamp",
    "door", "window", "wall", "floor", "roof", "red", "blue", "pink", "green", "yellow",
    "white", "black", "gray", "brown", "orange", "one", "two", "three", "four", "five", "six",
    "seven", "eight", "nine", "ten", "day", "night", "time", "hour", "week", "year", "today",
    "now", "soon", "late", "good", "nice", "kind", "sweet", "cool", "fun", "joy", "smile",
    "laugh", "dream",
];

/// Errors that can occur when building a [`WordBank`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum WordBankError {
    /// The catalog contains no words.
    #[display("word bank is empty")]
    Empty,
    /// A word is empty or contains something other than lowercase ASCII letters.
    #[display("invalid word {word:?}")]
    InvalidWord {
        /// The rejected word.
        word: String,
    },
    /// A word appears more than once.
    #[display("duplicate word {word:?}")]
    DuplicateWord {
        /// The repeated word.
        word: String,
    },
}

/// A fixed catalog of candidate words.
///
/// Every word is non-empty lowercase ASCII and appears once, so any sample
/// drawn from the bank is a set of distinct, placeable words.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg64;
/// use wordhunt_generator::WordBank;
///
/// let bank = WordBank::default();
/// let mut rng = Pcg64::seed_from_u64(7);
/// let words = bank.select_words(5, &mut rng);
/// assert_eq!(words.len(), 5);
/// assert!(words.iter().all(|word| bank.contains(word)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    words: Vec<String>,
}

impl WordBank {
    /// Creates a word bank from a custom catalog.
    ///
    /// # Errors
    ///
    /// Returns [`WordBankError`] if the catalog is empty, a word is not
    /// made of lowercase ASCII letters, or a word is repeated.
    pub fn new<I, S>(words: I) -> Result<Self, WordBankError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = words.into_iter().map(Into::into).collect::<Vec<String>>();
        if words.is_empty() {
            return Err(WordBankError::Empty);
        }
        let mut seen = HashSet::with_capacity(words.len());
        for word in &words {
            if word.is_empty() || !word.chars().all(|ch| Letter::new(ch).is_some()) {
                return Err(WordBankError::InvalidWord { word: word.clone() });
            }
            if !seen.insert(word.as_str()) {
                return Err(WordBankError::DuplicateWord { word: word.clone() });
            }
        }
        Ok(Self { words })
    }

    /// Returns the number of words in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the catalog is empty. Never true for a constructed bank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns `true` if `word` is in the catalog.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Returns the catalog in its original order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Draws `count` distinct words uniformly at random, without replacement.
    ///
    /// If `count` exceeds the catalog size, every word is returned (in
    /// random order).
    pub fn select_words<R>(&self, count: usize, rng: &mut R) -> Vec<String>
    where
        R: Rng + ?Sized,
    {
        let amount = count.min(self.words.len());
        index::sample(rng, self.words.len(), amount)
            .into_iter()
            .map(|i| self.words[i].clone())
            .collect()
    }
}

impl Default for WordBank {
    fn default() -> Self {
        Self {
            words: BUILTIN_WORDS.iter().map(|&word| word.to_owned()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let bank = WordBank::default();
        assert_eq!(bank.len(), 100);
        assert_eq!(WordBank::new(BUILTIN_WORDS), Ok(bank));
    }

    #[test]
    fn test_rejects_invalid_catalogs() {
        assert_eq!(
            WordBank::new(Vec::<String>::new()),
            Err(WordBankError::Empty)
        );
        assert_eq!(
            WordBank::new(["cat", "Dog"]),
            Err(WordBankError::InvalidWord {
                word: "Dog".to_owned()
            })
        );
        assert_eq!(
            WordBank::new(["cat", ""]),
            Err(WordBankError::InvalidWord {
                word: String::new()
            })
        );
        assert_eq!(
            WordBank::new(["cat", "dog", "cat"]),
            Err(WordBankError::DuplicateWord {
                word: "cat".to_owned()
            })
        );
    }

    #[test]
    fn test_select_words_distinct() {
        let bank = WordBank::default();
        let mut rng = Pcg64::seed_from_u64(42);
        for count in [0, 1, 5, 10, 100] {
            let words = bank.select_words(count, &mut rng);
            assert_eq!(words.len(), count);
            let unique = words.iter().collect::<HashSet<_>>();
            assert_eq!(unique.len(), count);
        }
    }

    #[test]
    fn test_select_words_caps_at_catalog_size() {
        let bank = WordBank::new(["cat", "dog", "fish"]).unwrap();
        let mut rng = Pcg64::seed_from_u64(1);
        let mut words = bank.select_words(10, &mut rng);
        words.sort();
        assert_eq!(words, ["cat", "dog", "fish"]);
    }

    #[test]
    fn test_select_words_is_deterministic_for_a_seed() {
        let bank = WordBank::default();
        let a = bank.select_words(8, &mut Pcg64::seed_from_u64(99));
        let b = bank.select_words(8, &mut Pcg64::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_select_words_reaches_every_word() {
        let bank = WordBank::new(["cat", "dog", "fish", "bird"]).unwrap();
        let mut rng = Pcg64::seed_from_u64(3);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            seen.extend(bank.select_words(1, &mut rng));
        }
        assert_eq!(seen.len(), 4);
    }
}
