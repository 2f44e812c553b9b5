//! Drag-to-select state machine.

use wordhunt_core::{Grid, Orientation, Position};

/// Why a cell was not added to the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ExtendRejection {
    /// No gesture is in progress.
    #[display("no selection in progress")]
    NotSelecting,
    /// The cell is already part of the path.
    #[display("cell already selected")]
    AlreadySelected,
    /// The cell leaves the row or column fixed by the path.
    #[display("cell is off the selection axis")]
    OffAxis,
    /// The cell is not one orthogonal step from the last selected cell.
    #[display("cell is not adjacent to the last selected cell")]
    NotAdjacent,
}

/// Result of offering a cell to the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum ExtendOutcome {
    /// The cell was appended to the path.
    Accepted,
    /// The cell was ignored; the path is unchanged.
    Rejected(ExtendRejection),
}

/// Result of a finished gesture.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SelectionOutcome {
    /// The path spells an unfound word.
    Matched {
        /// Word list index of the matched word.
        word_index: usize,
        /// Cells of the gesture, in selection order.
        path: Vec<Position>,
    },
    /// The path spells nothing new.
    NoMatch {
        /// Cells of the gesture, in selection order.
        path: Vec<Position>,
    },
}

impl SelectionOutcome {
    /// Returns the cells of the gesture.
    #[must_use]
    pub fn path(&self) -> &[Position] {
        match self {
            Self::Matched { path, .. } | Self::NoMatch { path } => path,
        }
    }
}

/// Gesture state.
#[derive(Debug, Default, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SelectionState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A gesture is accumulating cells.
    Selecting {
        /// Cells in selection order; the first one is the anchor.
        path: Vec<Position>,
        /// Axis fixed by the second cell, once there is one.
        orientation: Option<Orientation>,
    },
}

/// Accumulates a straight, contiguous, non-repeating line of cells during a
/// drag gesture and checks it against the word list when the gesture ends.
///
/// The first cell is the anchor. The second cell must be orthogonally
/// adjacent to it and fixes the orientation. Every later cell must stay on
/// the anchor's row (horizontal) or column (vertical), be adjacent to the
/// last accepted cell, and not already be in the path. Cells that break a
/// rule are ignored; the gesture keeps what it has.
///
/// # Examples
///
/// ```
/// use wordhunt_core::{Grid, Position};
/// use wordhunt_game::{SelectionEngine, SelectionOutcome};
///
/// let grid: Grid = "cat\nxox\nxgx".parse()?;
/// let words = ["cat".to_owned()];
///
/// let mut engine = SelectionEngine::new();
/// engine.begin(Position::new(0, 0));
/// engine.extend(Position::new(0, 1));
/// engine.extend(Position::new(1, 2)); // diagonal step, ignored
/// engine.extend(Position::new(0, 2));
///
/// let outcome = engine.finish(&grid, &words, &[false]);
/// assert!(matches!(outcome, Some(SelectionOutcome::Matched { word_index: 0, .. })));
/// assert!(engine.state().is_idle());
/// # Ok::<(), wordhunt_core::GridError>(())
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SelectionEngine {
    state: SelectionState,
}

impl SelectionEngine {
    /// Creates an idle engine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current gesture state.
    #[must_use]
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Returns the cells selected so far; empty when idle.
    #[must_use]
    pub fn path(&self) -> &[Position] {
        match &self.state {
            SelectionState::Idle => &[],
            SelectionState::Selecting { path, .. } => path,
        }
    }

    /// Returns `true` if `pos` is part of the gesture in progress.
    #[must_use]
    pub fn is_selected(&self, pos: Position) -> bool {
        self.path().contains(&pos)
    }

    /// Starts a new gesture anchored at `pos`, discarding any gesture in progress.
    pub fn begin(&mut self, pos: Position) {
        self.state = SelectionState::Selecting {
            path: vec![pos],
            orientation: None,
        };
    }

    /// Offers `pos` as the next cell of the gesture.
    pub fn extend(&mut self, pos: Position) -> ExtendOutcome {
        let SelectionState::Selecting { path, orientation } = &mut self.state else {
            return ExtendOutcome::Rejected(ExtendRejection::NotSelecting);
        };
        let (Some(&anchor), Some(&last)) = (path.first(), path.last()) else {
            return ExtendOutcome::Rejected(ExtendRejection::NotSelecting);
        };

        if path.contains(&pos) {
            return ExtendOutcome::Rejected(ExtendRejection::AlreadySelected);
        }
        let aligned = match orientation {
            Some(axis) => axis.is_aligned(anchor, pos),
            None => Orientation::between(anchor, pos).is_some(),
        };
        if !aligned {
            return ExtendOutcome::Rejected(ExtendRejection::OffAxis);
        }
        if !last.is_adjacent(pos) {
            return ExtendOutcome::Rejected(ExtendRejection::NotAdjacent);
        }

        if orientation.is_none() {
            *orientation = Orientation::between(anchor, pos);
        }
        path.push(pos);
        ExtendOutcome::Accepted
    }

    /// Ends the gesture and evaluates it.
    ///
    /// The letters along the path, in path order, must equal a word of
    /// `words` whose `found` flag is unset (ASCII case-insensitive, forward
    /// only). The engine returns to idle either way.
    ///
    /// Returns `None` if no gesture was in progress.
    pub fn finish(
        &mut self,
        grid: &Grid,
        words: &[String],
        found: &[bool],
    ) -> Option<SelectionOutcome> {
        let SelectionState::Selecting { path, .. } = std::mem::take(&mut self.state) else {
            return None;
        };

        let matched = grid.letters_along(&path).and_then(|letters| {
            words.iter().enumerate().position(|(index, word)| {
                !found.get(index).copied().unwrap_or(false) && word.eq_ignore_ascii_case(&letters)
            })
        });

        Some(match matched {
            Some(word_index) => SelectionOutcome::Matched { word_index, path },
            None => SelectionOutcome::NoMatch { path },
        })
    }

    /// Abandons the gesture in progress without evaluating it.
    pub fn cancel(&mut self) {
        self.state = SelectionState::Idle;
    }
}
