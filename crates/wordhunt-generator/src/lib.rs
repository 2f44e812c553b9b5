//! Word-search puzzle generation.
//!
//! Puzzles are produced in three layers:
//!
//! - [`WordBank`] samples distinct words from a catalog.
//! - [`GridGenerator`] hides words in a square grid using randomized
//!   placement with a bounded retry budget, then fills the remaining cells
//!   with random letters. [`DraftGrid`] is the grid under construction.
//! - [`PuzzleGenerator`] ties both together under a [`PuzzleConfig`] and a
//!   reproducible [`PuzzleSeed`].
//!
//! Every random choice goes through an injected [`rand::Rng`], so a seed
//! fully determines the word list and the grid.
//!
//! # Examples
//!
//! ```
//! use wordhunt_generator::{PuzzleConfig, PuzzleGenerator, WordBank};
//!
//! let bank = WordBank::default();
//! let config = PuzzleConfig::default();
//! let puzzle = PuzzleGenerator::new(&bank, &config).generate()?;
//!
//! println!("{}", puzzle.grid);
//! for word in &puzzle.placed {
//!     assert!(puzzle.grid.reads(word));
//! }
//! # Ok::<(), wordhunt_generator::GenerateError>(())
//! ```

pub use self::{
    config::{ConfigError, PlacementPolicy, PuzzleConfig},
    draft::{DraftGrid, PlacementError},
    error::GenerateError,
    grid_generator::{GeneratedGrid, GridGenerator},
    puzzle::{GeneratedPuzzle, PuzzleGenerator},
    seed::{PuzzleSeed, SeedParseError},
    word_bank::{BUILTIN_WORDS, WordBank, WordBankError},
};

pub mod config;
mod draft;
mod error;
mod grid_generator;
mod puzzle;
mod seed;
mod word_bank;
