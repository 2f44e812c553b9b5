//! Reproducible puzzle seeds.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 256-bit seed that fully determines a generated puzzle.
///
/// Seeds are written as 64 lowercase hex digits. Any text can also be turned
/// into a seed with [`PuzzleSeed::from_phrase`].
///
/// # Examples
///
/// ```
/// use wordhunt_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed = "00000000000000000000000000000000000000000000000000000000000000ff"
///     .parse()?;
/// assert_eq!(seed.as_bytes()[31], 0xff);
/// assert_eq!(seed.to_string().parse::<PuzzleSeed>()?, seed);
/// # Ok::<(), wordhunt_generator::SeedParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

/// Errors that can occur when parsing a [`PuzzleSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The input is not exactly 64 characters long.
    #[display("seed must be 64 hex digits, found {len} characters")]
    InvalidLength {
        /// Length of the input in characters.
        len: usize,
    },
    /// The input contains a non-hex character.
    #[display("invalid hex digit {ch:?} at offset {offset}")]
    InvalidDigit {
        /// Offending character.
        ch: char,
        /// Character offset in the input.
        offset: usize,
    },
}

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes of the seed.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Draws a fresh seed from the thread-local generator.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill(&mut bytes);
        Self(bytes)
    }

    /// Derives a seed from arbitrary text by hashing it with SHA-256.
    ///
    /// The same phrase always yields the same puzzle.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        let digest = Sha256::digest(phrase.as_bytes());
        let mut bytes = [0; 32];
        bytes.copy_from_slice(&digest);
        Self(bytes)
    }

    /// Returns the random number generator this seed determines.
    #[must_use]
    pub fn rng(&self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for PuzzleSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(SeedParseError::InvalidLength { len });
        }
        let mut nibbles = [0_u8; 64];
        for (offset, (ch, nibble)) in s.chars().zip(&mut nibbles).enumerate() {
            let digit = ch
                .to_digit(16)
                .ok_or(SeedParseError::InvalidDigit { ch, offset })?;
            #[allow(clippy::cast_possible_truncation)]
            let digit = digit as u8;
            *nibble = digit;
        }
        let mut bytes = [0; 32];
        for (byte, pair) in bytes.iter_mut().zip(nibbles.chunks_exact(2)) {
            *byte = (pair[0] << 4) | pair[1];
        }
        Ok(Self(bytes))
    }
}
