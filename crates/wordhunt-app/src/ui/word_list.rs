use std::sync::Arc;

use eframe::egui::{RichText, ScrollArea, Ui};

use crate::ui::grid_theme::GridTheme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WordListEntry {
    pub(crate) text: String,
    pub(crate) found: bool,
    pub(crate) color_key: usize,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct WordListViewModel {
    entries: Vec<WordListEntry>,
}

impl WordListViewModel {
    #[must_use]
    pub(crate) fn new(entries: Vec<WordListEntry>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub(crate) fn entries(&self) -> &[WordListEntry] {
        &self.entries
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &WordListViewModel, letter_size: f32) {
    let style = Arc::clone(ui.style());
    let visuals = &style.visuals;
    let grid_theme = GridTheme::from_visuals(visuals);
    let palette = grid_theme.palette_for(visuals);

    ScrollArea::vertical().show(ui, |ui| {
        ui.vertical(|ui| {
            for entry in vm.entries() {
                let text = RichText::new(&entry.text).size(letter_size).monospace();
                let text = if entry.found {
                    text.strikethrough()
                        .color(palette.text_found)
                        .background_color(palette.found_color(entry.color_key))
                } else {
                    text.color(palette.text_normal)
                };
                ui.label(text);
            }
        });
    });
}
