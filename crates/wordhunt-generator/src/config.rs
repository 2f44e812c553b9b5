//! Generation settings.

use std::ops::RangeInclusive;

/// Grid side length used by default.
pub const DEFAULT_GRID_SIZE: usize = 10;

/// Range the number of words per puzzle is drawn from by default.
pub const DEFAULT_WORD_COUNT: RangeInclusive<usize> = 5..=10;

/// Randomized placement attempts per word before it is given up.
pub const DEFAULT_RETRY_BUDGET: usize = 100;

/// Whole-grid attempts allowed by [`PlacementPolicy::strict`].
pub const DEFAULT_MAX_GRID_ATTEMPTS: usize = 50;

/// What to do with a word that cannot be placed within the retry budget.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum PlacementPolicy {
    /// Skip the word. It stays in the word list but is absent from the grid.
    #[default]
    Lenient,
    /// Throw the grid away and start over until every word fits.
    Strict {
        /// Number of whole grids to try before failing.
        max_grid_attempts: usize,
    },
}

impl PlacementPolicy {
    /// Returns the strict policy with the default attempt budget.
    #[must_use]
    pub const fn strict() -> Self {
        Self::Strict {
            max_grid_attempts: DEFAULT_MAX_GRID_ATTEMPTS,
        }
    }

    pub(crate) fn grid_attempts(self) -> usize {
        match self {
            Self::Lenient => 1,
            Self::Strict { max_grid_attempts } => max_grid_attempts,
        }
    }
}

/// Errors reported by [`PuzzleConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    /// The grid would have no cells.
    #[display("grid size must be at least 1")]
    ZeroGridSize,
    /// The word count range contains no value.
    #[display("word count range {start}..={end} is empty")]
    EmptyWordCount {
        /// Lower bound.
        start: usize,
        /// Upper bound.
        end: usize,
    },
    /// Words would never get a placement attempt.
    #[display("retry budget must be at least 1")]
    ZeroRetryBudget,
    /// The strict policy would never build a grid.
    #[display("strict placement needs at least one grid attempt")]
    ZeroGridAttempts,
}

/// Settings for puzzle generation.
///
/// The defaults produce a 10×10 grid with 5 to 10 words, 100 placement
/// attempts per word, and lenient placement.
///
/// # Examples
///
/// ```
/// use wordhunt_generator::{PlacementPolicy, PuzzleConfig};
///
/// let config = PuzzleConfig::default()
///     .grid_size(12)
///     .word_count(8..=12)
///     .placement_policy(PlacementPolicy::strict());
/// assert!(config.validate().is_ok());
/// assert!(PuzzleConfig::default().grid_size(0).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleConfig {
    /// Number of rows and columns.
    pub grid_size: usize,
    /// Inclusive range the number of words is drawn from.
    pub word_count: RangeInclusive<usize>,
    /// Placement attempts per word.
    pub retry_budget: usize,
    /// Handling of words that exhaust the retry budget.
    pub placement_policy: PlacementPolicy,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            word_count: DEFAULT_WORD_COUNT,
            retry_budget: DEFAULT_RETRY_BUDGET,
            placement_policy: PlacementPolicy::default(),
        }
    }
}

impl PuzzleConfig {
    /// Sets the grid size.
    #[must_use]
    pub fn grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Sets the word count range.
    #[must_use]
    pub fn word_count(mut self, word_count: RangeInclusive<usize>) -> Self {
        self.word_count = word_count;
        self
    }

    /// Sets the per-word retry budget.
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

    /// Checks that the settings can produce a puzzle.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::ZeroGridSize);
        }
        if self.word_count.is_empty() {
            return Err(ConfigError::EmptyWordCount {
                start: *self.word_count.start(),
                end: *self.word_count.end(),
            });
        }
        if self.retry_budget == 0 {
            return Err(ConfigError::ZeroRetryBudget);
        }
        if self.placement_policy.grid_attempts() == 0 {
            return Err(ConfigError::ZeroGridAttempts);
        }
        Ok(())
    }
}
