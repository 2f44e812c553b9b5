//! Grid coordinates and word orientations.

use std::fmt::{self, Display};

/// A cell coordinate in a square grid, addressed as `(row, col)` from the
/// top-left corner.
///
/// # Examples
///
/// ```
/// use wordhunt_core::Position;
///
/// let a = Position::new(2, 3);
/// let b = Position::new(2, 4);
/// assert!(a.is_adjacent(b));
/// assert_eq!(a.manhattan_distance(Position::new(0, 0)), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub col: usize,
}

impl Position {
    /// Creates a position from a row and a column.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns `|Δrow| + |Δcol|` between two positions.
    #[must_use]
    pub const fn manhattan_distance(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Returns `true` if `other` is one orthogonal step away.
    ///
    /// Diagonal neighbours are not adjacent.
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// Returns the position `distance` cells forward along `orientation`.
    ///
    /// The moving coordinate saturates at `usize::MAX`.
    #[must_use]
    pub const fn advance(self, orientation: Orientation, distance: usize) -> Self {
        match orientation {
            Orientation::Horizontal => Self::new(self.row, self.col.saturating_add(distance)),
            Orientation::Vertical => Self::new(self.row.saturating_add(distance), self.col),
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The axis a word is written along.
///
/// Words always read forward: left to right when horizontal, top to bottom
/// when vertical. Diagonals are not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Orientation {
    /// Along a row.
    Horizontal,
    /// Along a column.
    Vertical,
}

impl Orientation {
    /// Both orientations.
    pub const ALL: [Self; 2] = [Self::Horizontal, Self::Vertical];

    /// Returns the axis that connects two distinct positions, if any.
    ///
    /// Positions on the same row are [`Horizontal`](Self::Horizontal), on the
    /// same column [`Vertical`](Self::Vertical). Equal positions and
    /// off-axis pairs yield `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordhunt_core::{Orientation, Position};
    ///
    /// let anchor = Position::new(1, 1);
    /// assert_eq!(
    ///     Orientation::between(anchor, Position::new(1, 5)),
    ///     Some(Orientation::Horizontal)
    /// );
    /// assert_eq!(Orientation::between(anchor, Position::new(2, 2)), None);
    /// ```
    #[must_use]
    pub fn between(from: Position, to: Position) -> Option<Self> {
        match (from.row == to.row, from.col == to.col) {
            (true, false) => Some(Self::Horizontal),
            (false, true) => Some(Self::Vertical),
            _ => None,
        }
    }

    /// Returns `true` if `pos` lies on the line through `anchor` along this axis.
    #[must_use]
    pub fn is_aligned(self, anchor: Position, pos: Position) -> bool {
        match self {
            Self::Horizontal => anchor.row == pos.row,
            Self::Vertical => anchor.col == pos.col,
        }
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacency_excludes_diagonals() {
        let center = Position::new(4, 4);
        assert!(center.is_adjacent(Position::new(3, 4)));
        assert!(center.is_adjacent(Position::new(5, 4)));
        assert!(center.is_adjacent(Position::new(4, 3)));
        assert!(center.is_adjacent(Position::new(4, 5)));
        assert!(!center.is_adjacent(Position::new(5, 5)));
        assert!(!center.is_adjacent(center));
        assert!(!center.is_adjacent(Position::new(4, 6)));
    }

    #[test]
    fn test_advance() {
        let anchor = Position::new(2, 2);
        assert_eq!(
            anchor.advance(Orientation::Horizontal, 3),
            Position::new(2, 5)
        );
        assert_eq!(anchor.advance(Orientation::Vertical, 3), Position::new(5, 2));
        assert_eq!(anchor.advance(Orientation::Vertical, 0), anchor);

        let edge = Position::new(usize::MAX - 1, 3);
        assert_eq!(
            edge.advance(Orientation::Vertical, 2),
            Position::new(usize::MAX, 3)
        );
        assert_eq!(edge.advance(Orientation::Horizontal, 2), Position::new(usize::MAX - 1, 5));
    }

    #[test]
    fn test_between_and_alignment() {
        let anchor = Position::new(0, 0);
        assert_eq!(
            Orientation::between(anchor, Position::new(3, 0)),
            Some(Orientation::Vertical)
        );
        assert_eq!(Orientation::between(anchor, anchor), None);

        assert!(Orientation::Horizontal.is_aligned(anchor, Position::new(0, 9)));
        assert!(!Orientation::Horizontal.is_aligned(anchor, Position::new(1, 0)));
        assert!(Orientation::Vertical.is_aligned(anchor, Position::new(7, 0)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(3, 7).to_string(), "(3, 7)");
        assert_eq!(Orientation::Vertical.to_string(), "vertical");
    }
}
