use wordhunt_core::GridError;

use crate::{ConfigError, PlacementError};

/// Errors that can occur while generating a puzzle.
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum GenerateError {
    /// The generation settings are unusable.
    #[display("invalid configuration: {_0}")]
    Config(#[from] ConfigError),
    /// A requested word is empty or contains a non-letter.
    #[display("invalid word {word:?} at index {index}")]
    #[from(ignore)]
    InvalidWord {
        /// Word list index.
        index: usize,
        /// The rejected word.
        word: String,
    },
    /// Strict placement gave up: some word never fit.
    #[display("could not place {word:?} in {attempts} grid attempts")]
    #[from(ignore)]
    PlacementExhausted {
        /// A word that was left out on the last attempt.
        word: String,
        /// Number of whole grids tried.
        attempts: usize,
    },
    /// An explicit placement was rejected.
    #[display("{_0}")]
    Placement(#[from] PlacementError),
    /// An explicit placement does not match the word list.
    #[display("placement {placed:?} does not match word {index} of the word list")]
    #[from(ignore)]
    PlacementMismatch {
        /// Index carried by the placement.
        index: usize,
        /// Text carried by the placement.
        placed: String,
    },
    /// The finished grid could not be assembled.
    #[display("{_0}")]
    Grid(#[from] GridError),
}

#[cfg(test)]
mod tests {
    use wordhunt_core::{Orientation, Position};

    use super::*;

    fn place_then_fail() -> Result<(), GenerateError> {
        Err(PlacementError::OutOfBounds {
            index: 0,
            anchor: Position::new(0, 9),
            orientation: Orientation::Horizontal,
        })?;
        Ok(())
    }

    #[test]
    fn test_wrapped_errors_convert() {
        assert_eq!(
            GenerateError::from(ConfigError::ZeroGridSize),
            GenerateError::Config(ConfigError::ZeroGridSize)
        );
        assert_eq!(
            GenerateError::from(GridError::Empty),
            GenerateError::Grid(GridError::Empty)
        );
        assert!(matches!(
            place_then_fail(),
            Err(GenerateError::Placement(PlacementError::OutOfBounds { index: 0, .. }))
        ));
    }

    #[test]
    fn test_display_names_the_word() {
        let err = GenerateError::PlacementExhausted {
            word: "yellow".to_owned(),
            attempts: 3,
        };
        assert_eq!(err.to_string(), r#"could not place "yellow" in 3 grid attempts"#);
    }
}
