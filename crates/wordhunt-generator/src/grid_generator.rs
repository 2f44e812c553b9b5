//! Randomized word placement.

use rand::Rng;
use wordhunt_core::{Grid, Letter, Orientation, PlacedWord, Position};

use crate::{
    ConfigError, DraftGrid, GenerateError, PlacementPolicy, PuzzleConfig,
    config::{DEFAULT_GRID_SIZE, DEFAULT_RETRY_BUDGET},
};

/// A finished grid together with the outcome of every placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedGrid {
    /// The fully populated letter grid.
    pub grid: Grid,
    /// Words written into the grid, in word list order.
    pub placed: Vec<PlacedWord>,
    /// Word list indices of words that exhausted the retry budget.
    pub unplaced: Vec<usize>,
}

/// Builds letter grids by placing words at random positions.
///
/// Each word, in order, gets up to `retry_budget` attempts: a uniformly
/// random orientation and anchor are drawn and the word is written if it
/// fits (see [`DraftGrid::can_place`]). Under [`PlacementPolicy::Lenient`]
/// a word that never fits is skipped; under [`PlacementPolicy::Strict`] the
/// whole grid is rebuilt. Remaining cells get random letters.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg64;
/// use wordhunt_generator::GridGenerator;
///
/// let words = ["cat", "dog", "fish"].map(String::from);
/// let generated = GridGenerator::new(10).generate(&words, &mut Pcg64::seed_from_u64(1))?;
/// assert_eq!(generated.grid.size(), 10);
/// for word in &generated.placed {
///     assert!(generated.grid.reads(word));
/// }
/// # Ok::<(), wordhunt_generator::GenerateError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGenerator {
    size: usize,
    retry_budget: usize,
    placement_policy: PlacementPolicy,
}

impl Default for GridGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SIZE)
    }
}

impl GridGenerator {
    /// Creates a generator for `size × size` grids with the default retry
    /// budget and lenient placement.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            retry_budget: DEFAULT_RETRY_BUDGET,
            placement_policy: PlacementPolicy::Lenient,
        }
    }

    /// Creates a generator from the grid-related settings of `config`.
    #[must_use]
    pub fn from_config(config: &PuzzleConfig) -> Self {
        Self {
            size: config.grid_size,
            retry_budget: config.retry_budget,
            placement_policy: config.placement_policy,
        }
    }

    /// Sets the number of placement attempts per word.
    #[must_use]
    pub fn retry_budget(mut self, retry_budget: usize) -> Self {
        self.retry_budget = retry_budget;
        self
    }

    /// Sets the placement policy.
    #[must_use]
    pub fn placement_policy(mut self, placement_policy: PlacementPolicy) -> Self {
        self.placement_policy = placement_policy;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::ZeroGridSize);
        }
        if self.retry_budget == 0 {
            return Err(ConfigError::ZeroRetryBudget);
        }
        if self.placement_policy.grid_attempts() == 0 {
            return Err(ConfigError::ZeroGridAttempts);
        }
        Ok(())
    }

    /// Places `words` (in order) and fills the rest of the grid.
    ///
    /// Cell `word_index` values refer to positions in `words`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Config`] for a zero size, retry budget or
    /// attempt budget, [`GenerateError::InvalidWord`] for an empty word or
    /// one with non-letters, and [`GenerateError::PlacementExhausted`] when
    /// strict placement runs out of grid attempts.
    pub fn generate<R>(
        &self,
        words: &[String],
        rng: &mut R,
    ) -> Result<GeneratedGrid, GenerateError>
    where
        R: Rng + ?Sized,
    {
        self.validate()?;
        let words_letters = words
            .iter()
            .enumerate()
            .map(|(index, word)| {
                Letter::parse_word(word)
                    .ok()
                    .filter(|letters| !letters.is_empty())
                    .ok_or_else(|| GenerateError::InvalidWord {
                        index,
                        word: word.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let attempts = self.placement_policy.grid_attempts();
        let mut last_unplaced = None;
        for attempt in 1..=attempts {
            let mut draft = DraftGrid::new(self.size);
            let mut placed = Vec::with_capacity(words.len());
            let mut unplaced = Vec::new();
            for (index, letters) in words_letters.iter().enumerate() {
                if let Some(word) = self.place_word(&mut draft, letters, index, rng) {
                    placed.push(word);
                } else {
                    log::debug!(
                        "gave up placing {:?} after {} attempts",
                        words[index],
                        self.retry_budget
                    );
                    unplaced.push(index);
                }
            }

            if unplaced.is_empty() || self.placement_policy.is_lenient() {
                let grid = draft.fill(rng)?;
                return Ok(GeneratedGrid {
                    grid,
                    placed,
                    unplaced,
                });
            }

            log::debug!(
                "grid attempt {attempt}/{attempts} left {} word(s) unplaced, starting over",
                unplaced.len()
            );
            last_unplaced = unplaced.first().copied();
        }

        Err(GenerateError::PlacementExhausted {
            word: last_unplaced
                .map(|index| words[index].clone())
                .unwrap_or_default(),
            attempts,
        })
    }

    /// Tries to write one word at random positions, up to the retry budget.
    ///
    /// Returns `None` if no attempt fit; the draft is then unchanged.
    pub fn place_word<R>(
        &self,
        draft: &mut DraftGrid,
        letters: &[Letter],
        index: usize,
        rng: &mut R,
    ) -> Option<PlacedWord>
    where
        R: Rng + ?Sized,
    {
        let size = draft.size();
        if size == 0 {
            return None;
        }
        for _ in 0..self.retry_budget {
            let orientation = if rng.random_bool(0.5) {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let anchor = Position::new(rng.random_range(0..size), rng.random_range(0..size));
            if draft.can_place(letters, orientation, anchor) {
                return Some(draft.write(letters, index, orientation, anchor));
            }
        }
        None
    }
}
