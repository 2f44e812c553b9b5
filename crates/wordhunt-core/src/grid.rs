//! The square letter grid.
//!
//! A [`Grid`] is generated once per puzzle and never mutated afterwards.
//! Grids can also be parsed from text, one row per line, which keeps tests
//! readable:
//!
//! ```
//! use wordhunt_core::{Grid, Position};
//!
//! let grid: Grid = "\
//! abc
//! def
//! ghi
//! "
//! .parse()?;
//! assert_eq!(grid[Position::new(1, 2)].letter().as_char(), 'f');
//! assert_eq!(grid.to_string(), "abc\ndef\nghi");
//! # Ok::<(), wordhunt_core::GridError>(())
//! ```

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use crate::{InvalidLetterError, Letter, PlacedWord, Position};

/// One cell of a finished grid.
///
/// `word_index` identifies the placed word that wrote this cell. When two
/// words cross, the word placed last owns the shared cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    letter: Letter,
    word_index: Option<usize>,
}

impl Cell {
    /// Creates a cell holding `letter`, owned by `word_index` if any.
    #[must_use]
    pub const fn new(letter: Letter, word_index: Option<usize>) -> Self {
        Self { letter, word_index }
    }

    /// Creates a filler cell that belongs to no word.
    #[must_use]
    pub const fn filler(letter: Letter) -> Self {
        Self::new(letter, None)
    }

    /// Returns the letter in this cell.
    #[must_use]
    pub const fn letter(&self) -> Letter {
        self.letter
    }

    /// Returns the index of the word that owns this cell.
    #[must_use]
    pub const fn word_index(&self) -> Option<usize> {
        self.word_index
    }

    /// Returns `true` if a placed word wrote this cell.
    #[must_use]
    pub const fn is_part_of_word(&self) -> bool {
        self.word_index.is_some()
    }
}

/// Errors that can occur when building or parsing a [`Grid`].
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum GridError {
    /// The grid has no cells.
    #[display("grid must have at least one cell")]
    #[from(ignore)]
    Empty,
    /// The number of cells does not match `size * size`.
    #[display("expected {expected} cells, found {actual}")]
    #[from(ignore)]
    CellCountMismatch {
        /// `size * size`.
        expected: usize,
        /// Number of cells supplied.
        actual: usize,
    },
    /// A parsed row has a different length than the number of rows.
    #[display("row {row} has {len} letters, expected {size}")]
    #[from(ignore)]
    NotSquare {
        /// Zero-based row index.
        row: usize,
        /// Number of letters in that row.
        len: usize,
        /// Number of rows.
        size: usize,
    },
    /// A parsed character is not a letter.
    #[display("{_0}")]
    InvalidLetter(#[from] InvalidLetterError),
}

/// A square, row-major matrix of [`Cell`]s.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a grid from `size * size` cells in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Empty`] if `size` is zero and
    /// [`GridError::CellCountMismatch`] if the cell count is wrong.
    pub fn from_cells(size: usize, cells: Vec<Cell>) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::Empty);
        }
        let expected = size * size;
        if cells.len() != expected {
            return Err(GridError::CellCountMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self { size, cells })
    }

    /// Returns the number of rows (and columns).
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `pos` lies inside the grid.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Returns the cell at `pos`, or `None` if it is out of bounds.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&Cell> {
        self.contains(pos)
            .then(|| &self.cells[pos.row * self.size + pos.col])
    }

    /// Returns all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    /// Returns the rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Concatenates the letters along `path`, in path order.
    ///
    /// Returns `None` if any position is out of bounds.
    #[must_use]
    pub fn letters_along(&self, path: &[Position]) -> Option<String> {
        path.iter()
            .map(|&pos| self.get(pos).map(|cell| cell.letter().as_char()))
            .collect()
    }

    /// Returns `true` if the grid spells `word` forward from its anchor.
    #[must_use]
    pub fn reads(&self, word: &PlacedWord) -> bool {
        let mut positions = word.positions();
        let matches = word.text().chars().all(|ch| {
            positions
                .next()
                .and_then(|pos| self.get(pos))
                .is_some_and(|cell| cell.letter().as_char() == ch)
        });
        matches && !word.is_empty()
    }
}

impl Index<Position> for Grid {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Cell {
        assert!(
            self.contains(pos),
            "position {pos} out of bounds for grid of size {}",
            self.size
        );
        &self.cells[pos.row * self.size + pos.col]
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for cell in row {
                Display::fmt(&cell.letter(), f)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parses one row per non-blank line; letters are case-insensitive.
    ///
    /// Parsed cells belong to no word.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>();
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (row, line) in rows.iter().enumerate() {
            let len = line.chars().count();
            if len != size {
                return Err(GridError::NotSquare { row, len, size });
            }
            for ch in line.chars() {
                cells.push(Cell::filler(Letter::from_ascii_ignore_case(ch)?));
            }
        }
        Self::from_cells(size, cells)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::Orientation;

    const SAMPLE: &str = "\
catq
xoxz
xgxd
mnop
";

    #[test]
    fn test_parse_and_display() {
        let grid: Grid = SAMPLE.parse().unwrap();
        assert_eq!(grid.size(), 4);
        assert_eq!(grid[Position::new(0, 0)].letter().as_char(), 'c');
        assert_eq!(grid[Position::new(3, 3)].letter().as_char(), 'p');
        assert!(grid.positions().all(|pos| !grid[pos].is_part_of_word()));
        assert_eq!(grid.to_string(), "catq\nxoxz\nxgxd\nmnop");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Grid>(), Err(GridError::Empty));
        assert_eq!(
            "ab\nc".parse::<Grid>(),
            Err(GridError::NotSquare {
                row: 1,
                len: 1,
                size: 2
            })
        );
        assert_eq!(
            "a1\ncd".parse::<Grid>(),
            Err(GridError::InvalidLetter(InvalidLetterError { ch: '1' }))
        );
    }

    #[test]
    fn test_from_cells_checks_count() {
        let cell = Cell::filler(Letter::from_index(0));
        assert_eq!(
            Grid::from_cells(2, vec![cell; 3]),
            Err(GridError::CellCountMismatch {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(Grid::from_cells(0, vec![]), Err(GridError::Empty));
        assert!(Grid::from_cells(2, vec![cell; 4]).is_ok());
    }

    #[test]
    fn test_letters_along_and_reads() {
        let grid: Grid = SAMPLE.parse().unwrap();
        let path = [Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)];
        assert_eq!(grid.letters_along(&path).as_deref(), Some("cat"));
        assert_eq!(grid.letters_along(&[Position::new(4, 0)]), None);

        let cat = PlacedWord::new("cat", 0, Orientation::Horizontal, Position::new(0, 0));
        let dog = PlacedWord::new("dog", 1, Orientation::Vertical, Position::new(0, 1));
        let tac = PlacedWord::new("tac", 2, Orientation::Horizontal, Position::new(0, 0));
        let off_grid = PlacedWord::new("qzdp", 3, Orientation::Vertical, Position::new(1, 3));
        assert!(grid.reads(&cat));
        assert!(!grid.reads(&dog));
        assert!(!grid.reads(&tac));
        assert!(!grid.reads(&off_grid));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid: Grid = SAMPLE.parse().unwrap();
        assert!(grid.get(Position::new(0, 4)).is_none());
        assert!(grid.get(Position::new(4, 0)).is_none());
        assert!(grid.get(Position::new(3, 3)).is_some());
    }

    proptest! {
        #[test]
        fn prop_parse_display_preserves_letters(
            size in 1_usize..8,
            seed in proptest::collection::vec(0_u8..26, 64),
        ) {
            let text = (0..size)
                .map(|row| {
                    (0..size)
                        .map(|col| Letter::from_index(seed[row * size + col]).as_char())
                        .collect::<String>()
                })
                .collect::<Vec<_>>()
                .join("\n");
            let grid: Grid = text.parse().unwrap();
            prop_assert_eq!(grid.size(), size);
            prop_assert_eq!(grid.positions().count(), size * size);
            prop_assert_eq!(grid.to_string(), text);
        }
    }
}
