//! Grids under construction.

use rand::Rng;
use wordhunt_core::{
    Cell, Grid, GridError, InvalidLetterError, Letter, Orientation, PlacedWord, Position,
};

/// Errors that can occur when writing a word into a [`DraftGrid`].
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum PlacementError {
    /// The word has no letters.
    #[display("word {index} is empty")]
    #[from(ignore)]
    EmptyWord {
        /// Word list index.
        index: usize,
    },
    /// The word contains a character that is not a letter.
    #[display("{_0}")]
    InvalidLetter(#[from] InvalidLetterError),
    /// The word runs past the edge of the grid.
    #[display("word {index} does not fit at {anchor} ({orientation})")]
    #[from(ignore)]
    OutOfBounds {
        /// Word list index.
        index: usize,
        /// Requested first cell.
        anchor: Position,
        /// Requested axis.
        orientation: Orientation,
    },
    /// A covered cell already holds a different letter.
    #[display("word {index} conflicts with {existing:?} at {pos}")]
    #[from(ignore)]
    Conflict {
        /// Word list index.
        index: usize,
        /// The contested cell.
        pos: Position,
        /// The letter already written there.
        existing: Letter,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct DraftCell {
    letter: Option<Letter>,
    word_index: Option<usize>,
}

/// A grid whose cells may still be empty.
///
/// Words are written with [`place`](Self::place), which accepts a word only
/// if every cell it covers is empty or already holds the same letter. Once
/// all words are in, [`fill`](Self::fill) puts random letters into the
/// remaining cells and produces the finished [`Grid`].
///
/// # Examples
///
/// ```
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg64;
/// use wordhunt_core::{Orientation, Position};
/// use wordhunt_generator::DraftGrid;
///
/// let mut draft = DraftGrid::new(5);
/// draft.place("cat", 0, Orientation::Horizontal, Position::new(0, 0))?;
/// // "tea" crosses "cat" on the shared `t`.
/// draft.place("tea", 1, Orientation::Vertical, Position::new(0, 2))?;
/// assert!(draft.place("dog", 2, Orientation::Vertical, Position::new(0, 0)).is_err());
///
/// let grid = draft.fill(&mut Pcg64::seed_from_u64(0))?;
/// assert_eq!(grid[Position::new(2, 2)].letter().as_char(), 'a');
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftGrid {
    size: usize,
    cells: Vec<DraftCell>,
}

impl DraftGrid {
    /// Creates an empty `size × size` draft.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![DraftCell::default(); size * size],
        }
    }

    /// Returns the number of rows (and columns).
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the letter at `pos`, or `None` if the cell is empty or out of bounds.
    #[must_use]
    pub fn letter(&self, pos: Position) -> Option<Letter> {
        self.cell(pos).and_then(|cell| cell.letter)
    }

    /// Returns the index of the word that last wrote `pos`.
    #[must_use]
    pub fn word_index(&self, pos: Position) -> Option<usize> {
        self.cell(pos).and_then(|cell| cell.word_index)
    }

    /// Returns the number of cells that still have no letter.
    #[must_use]
    pub fn empty_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.letter.is_none()).count()
    }

    fn cell(&self, pos: Position) -> Option<&DraftCell> {
        (pos.row < self.size && pos.col < self.size)
            .then(|| &self.cells[pos.row * self.size + pos.col])
    }

    fn fits(&self, len: usize, orientation: Orientation, anchor: Position) -> bool {
        let (start, fixed) = match orientation {
            Orientation::Horizontal => (anchor.col, anchor.row),
            Orientation::Vertical => (anchor.row, anchor.col),
        };
        fixed < self.size && start.checked_add(len).is_some_and(|end| end <= self.size)
    }

    /// Returns `true` if `letters` can be written at `anchor` along `orientation`.
    ///
    /// The word must stay inside the grid and every covered cell must be
    /// empty or already hold the matching letter.
    #[must_use]
    pub fn can_place(
        &self,
        letters: &[Letter],
        orientation: Orientation,
        anchor: Position,
    ) -> bool {
        self.check(0, letters, orientation, anchor).is_ok()
    }

    fn check(
        &self,
        index: usize,
        letters: &[Letter],
        orientation: Orientation,
        anchor: Position,
    ) -> Result<(), PlacementError> {
        if !self.fits(letters.len(), orientation, anchor) {
            return Err(PlacementError::OutOfBounds {
                index,
                anchor,
                orientation,
            });
        }
        for (i, &letter) in letters.iter().enumerate() {
            let pos = anchor.advance(orientation, i);
            if let Some(existing) = self.letter(pos)
                && existing != letter
            {
                return Err(PlacementError::Conflict {
                    index,
                    pos,
                    existing,
                });
            }
        }
        Ok(())
    }

    /// Writes `word` starting at `anchor` and tags its cells with `index`.
    ///
    /// Cells shared with an earlier word are re-tagged: the last word placed
    /// owns them.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError`] if the word is empty, contains a
    /// non-letter, leaves the grid, or conflicts with an existing letter.
    /// The draft is unchanged on error.
    pub fn place(
        &mut self,
        word: &str,
        index: usize,
        orientation: Orientation,
        anchor: Position,
    ) -> Result<PlacedWord, PlacementError> {
        if word.is_empty() {
            return Err(PlacementError::EmptyWord { index });
        }
        let letters = Letter::parse_word(word)?;
        self.check(index, &letters, orientation, anchor)?;
        Ok(self.write(&letters, index, orientation, anchor))
    }

    pub(crate) fn write(
        &mut self,
        letters: &[Letter],
        index: usize,
        orientation: Orientation,
        anchor: Position,
    ) -> PlacedWord {
        for (i, &letter) in letters.iter().enumerate() {
            let pos = anchor.advance(orientation, i);
            let cell = &mut self.cells[pos.row * self.size + pos.col];
            cell.letter = Some(letter);
            cell.word_index = Some(index);
        }
        let text = letters.iter().map(|letter| letter.as_char()).collect::<String>();
        PlacedWord::new(text, index, orientation, anchor)
    }

    /// Fills every empty cell with a uniformly random letter and returns the
    /// finished grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Empty`] for a zero-sized draft.
    pub fn fill<R>(self, rng: &mut R) -> Result<Grid, GridError>
    where
        R: Rng + ?Sized,
    {
        let cells = self
            .cells
            .into_iter()
            .map(|cell| {
                let letter = cell.letter.unwrap_or_else(|| random_letter(rng));
                Cell::new(letter, cell.word_index)
            })
            .collect();
        Grid::from_cells(self.size, cells)
    }
}

fn random_letter<R>(rng: &mut R) -> Letter
where
    R: Rng + ?Sized,
{
    #[allow(clippy::cast_possible_truncation)]
    let index = rng.random_range(0..Letter::COUNT) as u8;
    Letter::from_index(index)
}
