//! Whole-puzzle generation.

use rand::Rng;
use wordhunt_core::{Grid, PlacedWord};

use crate::{
    DraftGrid, GenerateError, GeneratedGrid, GridGenerator, PuzzleConfig, PuzzleSeed, WordBank,
};

/// A generated puzzle: the word list the player must find and the grid that
/// hides them.
///
/// Under lenient placement some words of the list may be missing from the
/// grid; see [`unplaced_words`](Self::unplaced_words).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// Words to find, in display order.
    pub words: Vec<String>,
    /// The letter grid.
    pub grid: Grid,
    /// Words written into the grid, in word list order.
    pub placed: Vec<PlacedWord>,
    /// The seed the puzzle was generated from, if any.
    pub seed: Option<PuzzleSeed>,
}

impl GeneratedPuzzle {
    fn from_generated(words: Vec<String>, generated: GeneratedGrid) -> Self {
        let GeneratedGrid {
            grid,
            placed,
            unplaced: _,
        } = generated;
        Self {
            words,
            grid,
            placed,
            seed: None,
        }
    }

    /// Builds a puzzle from fixed placements, filling the rest of a
    /// `size × size` grid with random letters.
    ///
    /// Each placement's index must refer to `words` and its text must equal
    /// that word. Words without a placement stay unplaced.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::PlacementMismatch`] if a placement does not
    /// match the word list, or [`GenerateError::Placement`] if it does not
    /// fit the grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::SeedableRng as _;
    /// use rand_pcg::Pcg64;
    /// use wordhunt_core::{Orientation, PlacedWord, Position};
    /// use wordhunt_generator::GeneratedPuzzle;
    ///
    /// let words = vec!["cat".to_owned(), "dog".to_owned()];
    /// let placements = [
    ///     PlacedWord::new("cat", 0, Orientation::Horizontal, Position::new(0, 0)),
    ///     PlacedWord::new("dog", 1, Orientation::Vertical, Position::new(2, 2)),
    /// ];
    /// let puzzle =
    ///     GeneratedPuzzle::from_placements(10, words, &placements, &mut Pcg64::seed_from_u64(0))?;
    /// assert_eq!(puzzle.grid[Position::new(4, 2)].letter().as_char(), 'g');
    /// # Ok::<(), wordhunt_generator::GenerateError>(())
    /// ```
    pub fn from_placements<R>(
        size: usize,
        words: Vec<String>,
        placements: &[PlacedWord],
        rng: &mut R,
    ) -> Result<Self, GenerateError>
    where
        R: Rng + ?Sized,
    {
        let mut draft = DraftGrid::new(size);
        let mut placed = Vec::with_capacity(placements.len());
        for placement in placements {
            let index = placement.index();
            if words.get(index).map(String::as_str) != Some(placement.text()) {
                return Err(GenerateError::PlacementMismatch {
                    index,
                    placed: placement.text().to_owned(),
                });
            }
            placed.push(draft.place(
                placement.text(),
                index,
                placement.orientation(),
                placement.anchor(),
            )?);
        }
        placed.sort_by_key(PlacedWord::index);
        let grid = draft.fill(rng)?;
        Ok(Self {
            words,
            grid,
            placed,
            seed: None,
        })
    }

    /// Returns the placement of the word at `index`, if it made it into the grid.
    #[must_use]
    pub fn placement(&self, index: usize) -> Option<&PlacedWord> {
        self.placed.iter().find(|word| word.index() == index)
    }

    /// Returns the words that are listed but absent from the grid.
    pub fn unplaced_words(&self) -> impl Iterator<Item = &str> {
        self.words
            .iter()
            .enumerate()
            .filter(|(index, _)| self.placement(*index).is_none())
            .map(|(_, word)| word.as_str())
    }
}

/// Generates puzzles from a [`WordBank`] and a [`PuzzleConfig`].
///
/// A puzzle is drawn in three steps: a word count is sampled uniformly from
/// the configured range, that many distinct words are sampled from the
/// bank, and a [`GridGenerator`] hides them in a grid.
///
/// # Examples
///
/// ```
/// use wordhunt_generator::{PuzzleConfig, PuzzleGenerator, PuzzleSeed, WordBank};
///
/// let bank = WordBank::default();
/// let config = PuzzleConfig::default();
/// let generator = PuzzleGenerator::new(&bank, &config);
///
/// let seed = PuzzleSeed::from_phrase("kitten");
/// let a = generator.generate_with_seed(seed)?;
/// let b = generator.generate_with_seed(seed)?;
/// assert_eq!(a, b);
/// assert!((5..=10).contains(&a.words.len()));
/// # Ok::<(), wordhunt_generator::GenerateError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PuzzleGenerator<'a> {
    word_bank: &'a WordBank,
    config: &'a PuzzleConfig,
}

impl<'a> PuzzleGenerator<'a> {
    /// Creates a generator that draws words from `word_bank`.
    #[must_use]
    pub fn new(word_bank: &'a WordBank, config: &'a PuzzleConfig) -> Self {
        Self { word_bank, config }
    }

    /// Returns the generation settings.
    #[must_use]
    pub fn config(&self) -> &PuzzleConfig {
        self.config
    }

    /// Generates a puzzle from a fresh random seed.
    ///
    /// # Errors
    ///
    /// See [`generate_with_rng`](Self::generate_with_rng).
    pub fn generate(&self) -> Result<GeneratedPuzzle, GenerateError> {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// # Errors
    ///
    /// See [`generate_with_rng`](Self::generate_with_rng).
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> Result<GeneratedPuzzle, GenerateError> {
        let mut puzzle = self.generate_with_rng(&mut seed.rng())?;
        puzzle.seed = Some(seed);
        Ok(puzzle)
    }

    /// Generates a puzzle using `rng` for every random choice.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Config`] if the settings are invalid, and
    /// [`GenerateError::PlacementExhausted`] if strict placement fails.
    pub fn generate_with_rng<R>(&self, rng: &mut R) -> Result<GeneratedPuzzle, GenerateError>
    where
        R: Rng + ?Sized,
    {
        self.config.validate()?;
        let count = rng.random_range(self.config.word_count.clone());
        let words = self.word_bank.select_words(count, rng);
        let generated = GridGenerator::from_config(self.config).generate(&words, rng)?;
        log::debug!(
            "generated {}x{} grid with {}/{} words placed",
            self.config.grid_size,
            self.config.grid_size,
            generated.placed.len(),
            words.len()
        );
        Ok(GeneratedPuzzle::from_generated(words, generated))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;
    use wordhunt_core::{Orientation, Position};

    use super::*;
    use crate::{ConfigError, PlacementError, PlacementPolicy};

    fn cat_dog() -> GeneratedPuzzle {
        let placements = [
            PlacedWord::new("cat", 0, Orientation::Horizontal, Position::new(0, 0)),
            PlacedWord::new("dog", 1, Orientation::Vertical, Position::new(2, 2)),
        ];
        GeneratedPuzzle::from_placements(
            10,
            vec!["cat".to_owned(), "dog".to_owned()],
            &placements,
            &mut Pcg64::seed_from_u64(17),
        )
        .unwrap()
    }

    #[test]
    fn test_fixed_placements_write_expected_cells() {
        let puzzle = cat_dog();
        let grid = &puzzle.grid;
        let letter = |row, col| grid[Position::new(row, col)].letter().as_char();

        assert_eq!(grid.size(), 10);
        assert_eq!([letter(0, 0), letter(0, 1), letter(0, 2)], ['c', 'a', 't']);
        assert_eq!([letter(2, 2), letter(3, 2), letter(4, 2)], ['d', 'o', 'g']);
        assert_eq!(grid[Position::new(0, 1)].word_index(), Some(0));
        assert_eq!(grid[Position::new(3, 2)].word_index(), Some(1));
        assert_eq!(puzzle.unplaced_words().count(), 0);
    }

    #[test]
    fn test_from_placements_validation() {
        let mut rng = Pcg64::seed_from_u64(0);
        let words = vec!["cat".to_owned(), "dog".to_owned()];

        let wrong_text = [PlacedWord::new(
            "cow",
            1,
            Orientation::Horizontal,
            Position::new(0, 0),
        )];
        assert_eq!(
            GeneratedPuzzle::from_placements(5, words.clone(), &wrong_text, &mut rng),
            Err(GenerateError::PlacementMismatch {
                index: 1,
                placed: "cow".to_owned()
            })
        );

        let clash = [
            PlacedWord::new("cat", 0, Orientation::Horizontal, Position::new(0, 0)),
            PlacedWord::new("dog", 1, Orientation::Vertical, Position::new(0, 1)),
        ];
        assert!(matches!(
            GeneratedPuzzle::from_placements(5, words.clone(), &clash, &mut rng),
            Err(GenerateError::Placement(PlacementError::Conflict { index: 1, .. }))
        ));

        let only_dog = [PlacedWord::new(
            "dog",
            1,
            Orientation::Vertical,
            Position::new(0, 4),
        )];
        let puzzle = GeneratedPuzzle::from_placements(5, words, &only_dog, &mut rng).unwrap();
        assert_eq!(puzzle.unplaced_words().collect::<Vec<_>>(), ["cat"]);
        assert!(puzzle.placement(0).is_none());
        assert!(puzzle.placement(1).is_some());
    }

    #[test]
    fn test_from_placements_rejects_anchor_past_usize_max() {
        let far = [PlacedWord::new(
            "cat",
            0,
            Orientation::Vertical,
            Position::new(usize::MAX - 1, 0),
        )];
        assert_eq!(
            GeneratedPuzzle::from_placements(
                5,
                vec!["cat".to_owned()],
                &far,
                &mut Pcg64::seed_from_u64(0),
            ),
            Err(GenerateError::Placement(PlacementError::OutOfBounds {
                index: 0,
                anchor: Position::new(usize::MAX - 1, 0),
                orientation: Orientation::Vertical,
            }))
        );
    }

    #[test]
    fn test_generate_respects_config() {
        let bank = WordBank::default();
        let config = PuzzleConfig::default().grid_size(12).word_count(3..=4);
        let generator = PuzzleGenerator::new(&bank, &config);
        for i in 0..20 {
            let puzzle = generator
                .generate_with_seed(PuzzleSeed::from_phrase(&format!("seed-{i}")))
                .unwrap();
            assert_eq!(puzzle.grid.size(), 12);
            assert!((3..=4).contains(&puzzle.words.len()));
            assert!(puzzle.words.iter().all(|word| bank.contains(word)));
            assert!(puzzle.placed.iter().all(|word| puzzle.grid.reads(word)));
            assert!(puzzle.seed.is_some());
        }
    }

    #[test]
    fn test_generate_rejects_invalid_config() {
        let bank = WordBank::default();
        let config = PuzzleConfig::default().retry_budget(0);
        let generator = PuzzleGenerator::new(&bank, &config);
        assert_eq!(
            generator.generate(),
            Err(GenerateError::Config(ConfigError::ZeroRetryBudget))
        );
    }

    #[test]
    fn test_strict_generation_places_everything() {
        let bank = WordBank::default();
        let config = PuzzleConfig::default().placement_policy(PlacementPolicy::strict());
        let generator = PuzzleGenerator::new(&bank, &config);
        let puzzle = generator
            .generate_with_rng(&mut Pcg64::seed_from_u64(8))
            .unwrap();
        assert_eq!(puzzle.placed.len(), puzzle.words.len());
        assert_eq!(puzzle.unplaced_words().count(), 0);
    }
}
