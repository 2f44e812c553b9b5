use std::time::Instant;

use wordhunt_game::{CellVisual, PuzzleController, PuzzleState};

use crate::{
    state::{AppState, UiState},
    ui::{
        game_screen::GameScreenViewModel,
        grid::{GridCell, GridViewModel, GridVisualState},
        sidebar::{PuzzleStatus, SidebarViewModel},
        word_list::{WordListEntry, WordListViewModel},
    },
};

fn build_grid(controller: &PuzzleController) -> Option<GridViewModel> {
    let grid = controller.grid()?;
    let cells = grid
        .positions()
        .map(|pos| {
            let letter = grid[pos].letter().to_uppercase();
            let (visual_state, color_key) = match controller.cell_visual(pos) {
                CellVisual::Plain => (GridVisualState::empty(), 0),
                CellVisual::Selecting => (GridVisualState::SELECTING, 0),
                CellVisual::Found { color_key } => (GridVisualState::FOUND, color_key),
            };
            GridCell {
                letter,
                visual_state,
                color_key,
            }
        })
        .collect();
    let selecting = !controller.selection_path().is_empty();
    let interactive = controller.state().is_active();
    Some(GridViewModel::new(grid.size(), cells, selecting, interactive))
}

fn build_word_list(controller: &PuzzleController) -> WordListViewModel {
    let entries = controller
        .words()
        .map(|entry| WordListEntry {
            text: entry.text.to_ascii_uppercase(),
            found: entry.found,
            color_key: entry.color_key,
        })
        .collect();
    WordListViewModel::new(entries)
}

#[must_use]
pub(crate) fn build_game_screen_view_model(app_state: &AppState) -> GameScreenViewModel {
    let controller = &app_state.controller;
    GameScreenViewModel::new(build_grid(controller), build_word_list(controller))
}

#[must_use]
pub(crate) fn build_sidebar_view_model<'a>(
    app_state: &'a AppState,
    ui_state: &'a UiState,
    now: Instant,
) -> SidebarViewModel<'a> {
    let controller = &app_state.controller;
    let status = match controller.state() {
        PuzzleState::Idle => PuzzleStatus::Idle,
        PuzzleState::Active => PuzzleStatus::InProgress {
            found: controller.found_words().count(),
            total: controller.words().count(),
        },
        PuzzleState::Solved => PuzzleStatus::Solved,
    };
    SidebarViewModel::new(
        status,
        controller.elapsed(now).to_string(),
        &app_state.settings,
        ui_state.start_error.as_deref(),
    )
}
