//! Wordhunt desktop application UI.
//!
//! # Design Notes
//! - The grid, word list, timer and dialogs are drawn from view models
//!   rebuilt every frame from [`wordhunt_game::PuzzleController`].
//! - Pointer gestures on the grid become [`Action`](crate::action::Action)s
//!   and are applied to the controller once per frame.
//! - The clock is advanced from `update`; while it runs, a repaint is
//!   scheduled for the next whole second so the timer stays current.

use std::time::Instant;

use eframe::{
    App, CreationContext, Frame,
    egui::{CentralPanel, Context, SidePanel},
};

use crate::{
    action::ActionRequestQueue,
    action_handler,
    state::{AppState, UiState},
    ui, view_model_builder,
};

#[derive(Debug, Default)]
pub struct WordhuntApp {
    app_state: AppState,
    ui_state: UiState,
}

impl WordhuntApp {
    #[must_use]
    pub fn new(_cc: &CreationContext<'_>) -> Self {
        Self::default()
    }
}

impl App for WordhuntApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let now = Instant::now();
        let mut action_queue = ActionRequestQueue::default();

        action_handler::tick(&mut self.app_state, &mut self.ui_state, now);

        let sidebar_vm =
            view_model_builder::build_sidebar_view_model(&self.app_state, &self.ui_state, now);
        SidePanel::right("sidebar")
            .resizable(false)
            .min_width(220.0)
            .show(ctx, |ui| {
                ui::sidebar::show(ui, &sidebar_vm, &mut action_queue);
            });

        let game_screen_vm = view_model_builder::build_game_screen_view_model(&self.app_state);
        CentralPanel::default().show(ctx, |ui| {
            ui::game_screen::show(ui, &game_screen_vm, &mut action_queue);
        });

        if let Some(dialog) = &self.ui_state.solved_dialog {
            ui::dialogs::show_solved(ctx, &mut action_queue, dialog);
        }

        action_handler::handle_all(
            &mut self.app_state,
            &mut self.ui_state,
            &mut action_queue,
            now,
        );

        if let Some(delay) = self.app_state.controller.clock().until_next_tick(Instant::now()) {
            ctx.request_repaint_after(delay);
        }
    }
}
