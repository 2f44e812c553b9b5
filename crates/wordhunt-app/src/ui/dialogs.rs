use eframe::egui::{Context, Id, Modal, Sides};

use crate::{
    action::{Action, ActionRequestQueue},
    state::SolvedDialog,
};

pub(crate) fn show_solved(
    ctx: &Context,
    action_queue: &mut ActionRequestQueue,
    dialog: &SolvedDialog,
) {
    let modal = Modal::new(Id::new("puzzle_solved")).show(ctx, |ui| {
        ui.heading("Congratulations!");
        ui.add_space(4.0);
        ui.label(format!(
            "You found all {} words in {}.",
            dialog.word_count, dialog.elapsed
        ));
        ui.add_space(8.0);

        Sides::new().show(
            ui,
            |_ui| {},
            |ui| {
                let new_puzzle = ui.button("New Puzzle");
                if ui.memory(|memory| memory.focused().is_none()) {
                    new_puzzle.request_focus();
                }
                if new_puzzle.clicked() {
                    action_queue.request(Action::StartPuzzle);
                    ui.close();
                }
                if ui.button("Close").clicked() {
                    ui.close();
                }
            },
        );
    });
    if modal.should_close() {
        action_queue.request(Action::DismissSolved);
    }
}
