use eframe::egui::{self, Align, Layout, RichText, Ui};
use egui_extras::{Size, StripBuilder};

use super::{grid, word_list};
use crate::{
    action::ActionRequestQueue,
    ui::{grid::GridViewModel, word_list::WordListViewModel},
};

#[derive(Debug, Clone)]
pub(crate) struct GameScreenViewModel {
    pub(crate) grid_vm: Option<GridViewModel>,
    pub(crate) word_list_vm: WordListViewModel,
}

impl GameScreenViewModel {
    #[must_use]
    pub(crate) fn new(grid_vm: Option<GridViewModel>, word_list_vm: WordListViewModel) -> Self {
        Self {
            grid_vm,
            word_list_vm,
        }
    }
}

const WORD_LIST_WIDTH_RATIO: f32 = 0.3;

pub(crate) fn show(ui: &mut Ui, vm: &GameScreenViewModel, action_queue: &mut ActionRequestQueue) {
    let Some(grid_vm) = &vm.grid_vm else {
        ui.with_layout(Layout::centered_and_justified(egui::Direction::TopDown), |ui| {
            ui.label(RichText::new("No puzzle yet").size(24.0).weak());
        });
        return;
    };

    let spacing = ui.spacing().item_spacing;
    let available = ui.available_size() - spacing * egui::vec2(3.0, 2.0);
    let word_list_width = available.x * WORD_LIST_WIDTH_RATIO;
    let grid_size = f32::min(available.x - word_list_width, available.y).max(0.0);
    #[allow(clippy::cast_precision_loss)]
    let letter_size = grid_size / grid_vm.size().max(1) as f32 * 0.45;

    StripBuilder::new(ui)
        .size(Size::remainder())
        .size(Size::exact(grid_size))
        .size(Size::exact(spacing.x))
        .size(Size::exact(word_list_width))
        .size(Size::remainder())
        .horizontal(|mut strip| {
            strip.empty();
            strip.cell(|ui| {
                ui.with_layout(Layout::top_down(Align::Center), |ui| {
                    grid::show(ui, grid_vm, action_queue);
                });
            });
            strip.cell(|_ui| {}); // Spacer
            strip.cell(|ui| {
                word_list::show(ui, &vm.word_list_vm, letter_size);
            });
            strip.empty();
        });
}
