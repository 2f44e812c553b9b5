//! Words written into a grid.

use crate::{Orientation, Position};

/// A word written into the grid, starting at `anchor` and reading forward
/// along `orientation`.
///
/// `index` is the word's position in the puzzle's word list; cells covered
/// by this word carry the same index.
///
/// # Examples
///
/// ```
/// use wordhunt_core::{Orientation, PlacedWord, Position};
///
/// let word = PlacedWord::new("dog", 1, Orientation::Vertical, Position::new(2, 2));
/// let cells: Vec<_> = word.positions().collect();
/// assert_eq!(
///     cells,
///     [Position::new(2, 2), Position::new(3, 2), Position::new(4, 2)]
/// );
/// assert_eq!(word.end(), Position::new(4, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlacedWord {
    text: String,
    index: usize,
    orientation: Orientation,
    anchor: Position,
}

impl PlacedWord {
    /// Creates a placed word.
    ///
    /// `text` is stored as given; callers are expected to pass lowercase
    /// ASCII words.
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        index: usize,
        orientation: Orientation,
        anchor: Position,
    ) -> Self {
        Self {
            text: text.into(),
            index,
            orientation,
            anchor,
        }
    }

    /// Returns the word text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the word's index in the puzzle's word list.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the axis the word is written along.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the position of the first letter.
    #[must_use]
    pub fn anchor(&self) -> Position {
        self.anchor
    }

    /// Returns the number of cells the word covers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` for an empty word.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the position of the last letter.
    ///
    /// For an empty word this is the anchor.
    #[must_use]
    pub fn end(&self) -> Position {
        self.anchor
            .advance(self.orientation, self.len().saturating_sub(1))
    }

    /// Returns the covered positions in reading order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.len()).map(|i| self.anchor.advance(self.orientation, i))
    }
}
