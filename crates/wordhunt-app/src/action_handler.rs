use std::time::Instant;

use wordhunt_game::PuzzleEvent;
use wordhunt_generator::PuzzleSeed;

use crate::{
    action::{Action, ActionRequestQueue},
    state::{AppState, SolvedDialog, UiState},
};

#[derive(Debug)]
struct ActionContext<'a> {
    app_state: &'a mut AppState,
    ui_state: &'a mut UiState,
    now: Instant,
}

pub(crate) fn handle_all(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    action_queue: &mut ActionRequestQueue,
    now: Instant,
) {
    for action in action_queue.take_all() {
        handle(app_state, ui_state, action, now);
    }
    apply_events(app_state, ui_state);
}

pub(crate) fn handle(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    action: Action,
    now: Instant,
) {
    let mut ctx = ActionContext {
        app_state,
        ui_state,
        now,
    };

    match action {
        Action::BeginSelection(pos) => {
            ctx.app_state.controller.begin_selection(pos);
        }
        Action::ExtendSelection(pos) => {
            ctx.app_state.controller.extend_selection(pos);
        }
        Action::EndSelection => {
            ctx.app_state.controller.end_selection(ctx.now);
        }
        Action::StartPuzzle => ctx.start_puzzle(),
        Action::ResetPuzzle => ctx.reset_puzzle(),
        Action::UpdateSettings(settings) => ctx.app_state.apply_settings(settings),
        Action::DismissSolved => ctx.ui_state.solved_dialog = None,
    }
}

/// Advances the clock and applies queued controller events to the UI state.
pub(crate) fn tick(app_state: &mut AppState, ui_state: &mut UiState, now: Instant) {
    app_state.controller.tick(now);
    apply_events(app_state, ui_state);
}

fn apply_events(app_state: &mut AppState, ui_state: &mut UiState) {
    for event in app_state.controller.take_events() {
        match event {
            PuzzleEvent::Solved { elapsed } => {
                let word_count = app_state
                    .controller
                    .session()
                    .map_or(0, |session| session.words().len());
                ui_state.solved_dialog = Some(SolvedDialog {
                    word_count,
                    elapsed,
                });
            }
            PuzzleEvent::Started { .. } | PuzzleEvent::WordFound { .. } | PuzzleEvent::Tick(_) => {}
        }
    }
}

impl ActionContext<'_> {
    fn start_puzzle(&mut self) {
        let seed = PuzzleSeed::random();
        log::debug!("generating puzzle from seed {seed}");
        match self.app_state.controller.start_with_seed(seed, self.now) {
            Ok(()) => {
                self.ui_state.start_error = None;
                self.ui_state.solved_dialog = None;
            }
            Err(err) => {
                log::warn!("{err}");
                self.ui_state.start_error = Some(err.to_string());
            }
        }
    }

    fn reset_puzzle(&mut self) {
        self.app_state.controller.reset();
        self.ui_state.solved_dialog = None;
        self.ui_state.start_error = None;
    }
}
