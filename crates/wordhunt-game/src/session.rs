use wordhunt_core::{Grid, Position};
use wordhunt_generator::GeneratedPuzzle;

/// The mutable state of one puzzle: the generated grid and word list plus
/// the words found so far and the cells they cover.
///
/// Found words only ever grow; a session is replaced wholesale rather than
/// cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    puzzle: GeneratedPuzzle,
    found: Vec<bool>,
    highlights: Vec<Option<usize>>,
}

impl Session {
    /// Creates a session with no words found.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let found = vec![false; puzzle.words.len()];
        let size = puzzle.grid.size();
        Self {
            puzzle,
            found,
            highlights: vec![None; size * size],
        }
    }

    /// Returns the puzzle this session plays.
    #[must_use]
    pub fn puzzle(&self) -> &GeneratedPuzzle {
        &self.puzzle
    }

    /// Returns the letter grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.puzzle.grid
    }

    /// Returns the word list, including words that could not be placed.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.puzzle.words
    }

    /// Returns one flag per word, set once the word is found.
    #[must_use]
    pub fn found_flags(&self) -> &[bool] {
        &self.found
    }

    /// Returns `true` if the word at `index` has been found.
    #[must_use]
    pub fn is_found(&self, index: usize) -> bool {
        self.found.get(index).copied().unwrap_or(false)
    }

    /// Returns the found words in word list order.
    pub fn found_words(&self) -> impl Iterator<Item = &str> {
        self.puzzle
            .words
            .iter()
            .zip(&self.found)
            .filter(|(_, found)| **found)
            .map(|(word, _)| word.as_str())
    }

    /// Returns the number of found words.
    #[must_use]
    pub fn found_count(&self) -> usize {
        self.found.iter().filter(|found| **found).count()
    }

    /// Returns `true` once every word in the list has been found.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.found.iter().all(|found| *found)
    }

    /// Returns the index of the found word highlighting `pos`, if any.
    ///
    /// Where two found words cross, the one found last owns the cell.
    #[must_use]
    pub fn highlight(&self, pos: Position) -> Option<usize> {
        self.cell_index(pos)
            .and_then(|index| self.highlights.get(index).copied().flatten())
    }

    /// Marks the word at `index` found and highlights `path`.
    ///
    /// Returns `false` without changing anything if the word was already
    /// found or `index` is out of range.
    pub(crate) fn mark_found(&mut self, index: usize, path: &[Position]) -> bool {
        match self.found.get_mut(index) {
            Some(found) if !*found => *found = true,
            _ => return false,
        }
        for &pos in path {
            if let Some(cell) = self.cell_index(pos) {
                self.highlights[cell] = Some(index);
            }
        }
        true
    }

    fn cell_index(&self, pos: Position) -> Option<usize> {
        self.grid()
            .contains(pos)
            .then(|| pos.row * self.grid().size() + pos.col)
    }
}
