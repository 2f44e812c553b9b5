//! Core data structures for word-search puzzles.
//!
//! This crate provides the value types shared by puzzle generation and game
//! management:
//!
//! - [`letter`]: type-safe lowercase letters `a`-`z`
//! - [`position`]: grid coordinates and the two word [`Orientation`]s
//! - [`grid`]: the square letter [`Grid`] and its [`Cell`]s
//! - [`placed_word`]: a word written into the grid at an anchor
//!
//! # Examples
//!
//! ```
//! use wordhunt_core::{Grid, Orientation, PlacedWord, Position};
//!
//! let grid: Grid = "\
//! catx
//! xxxx
//! xxxx
//! xxxx
//! "
//! .parse()?;
//!
//! let word = PlacedWord::new("cat", 0, Orientation::Horizontal, Position::new(0, 0));
//! assert!(grid.reads(&word));
//! assert_eq!(grid.size(), 4);
//! # Ok::<(), wordhunt_core::GridError>(())
//! ```

pub mod grid;
pub mod letter;
pub mod placed_word;
pub mod position;

pub use self::{
    grid::{Cell, Grid, GridError},
    letter::{InvalidLetterError, Letter},
    placed_word::PlacedWord,
    position::{Orientation, Position},
};
