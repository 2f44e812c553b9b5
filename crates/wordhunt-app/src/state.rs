use wordhunt_game::{ElapsedTime, PuzzleController};
use wordhunt_generator::{PlacementPolicy, PuzzleConfig, WordBank, config::DEFAULT_GRID_SIZE};

#[derive(Debug)]
pub(crate) struct AppState {
    pub(crate) controller: PuzzleController,
    pub(crate) settings: Settings,
}

impl AppState {
    #[must_use]
    pub(crate) fn new(settings: Settings) -> Self {
        let controller = PuzzleController::new(WordBank::default(), settings.puzzle_config());
        Self {
            controller,
            settings,
        }
    }

    pub(crate) fn apply_settings(&mut self, settings: Settings) {
        self.controller.set_config(settings.puzzle_config());
        self.settings = settings;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

// UiState holds ephemeral UI-only state (dialogs, error messages).
#[derive(Debug, Default)]
pub(crate) struct UiState {
    pub(crate) solved_dialog: Option<SolvedDialog>,
    pub(crate) start_error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SolvedDialog {
    pub(crate) word_count: usize,
    pub(crate) elapsed: ElapsedTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    pub(crate) grid_size: usize,
    pub(crate) strict_placement: bool,
}

impl Settings {
    pub(crate) const MIN_GRID_SIZE: usize = 6;
    pub(crate) const MAX_GRID_SIZE: usize = 16;

    #[must_use]
    pub(crate) fn puzzle_config(&self) -> PuzzleConfig {
        let placement_policy = if self.strict_placement {
            PlacementPolicy::strict()
        } else {
            PlacementPolicy::Lenient
        };
        PuzzleConfig::default()
            .grid_size(self.grid_size)
            .placement_policy(placement_policy)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            strict_placement: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_match_default_config() {
        assert_eq!(Settings::default().puzzle_config(), PuzzleConfig::default());
    }

    #[test]
    fn strict_placement_selects_strict_policy() {
        let settings = Settings {
            grid_size: 12,
            strict_placement: true,
        };
        let config = settings.puzzle_config();
        assert_eq!(config.grid_size, 12);
        assert!(config.placement_policy.is_strict());
    }

    #[test]
    fn apply_settings_updates_next_puzzle_config() {
        let mut state = AppState::default();
        let settings = Settings {
            grid_size: 8,
            strict_placement: false,
        };
        state.apply_settings(settings.clone());
        assert_eq!(state.settings, settings);
        assert_eq!(state.controller.config().grid_size, 8);
    }
}
