use wordhunt_generator::GenerateError;

/// Errors raised while starting a puzzle session.
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum GameError {
    /// Puzzle generation failed.
    #[display("failed to generate puzzle: {_0}")]
    Generate(#[from] GenerateError),
}
