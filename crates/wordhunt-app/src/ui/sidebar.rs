use eframe::egui::{Button, CollapsingHeader, RichText, ScrollArea, Slider, Ui, widgets};

use crate::{
    action::{Action, ActionRequestQueue},
    state::Settings,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub(crate) enum PuzzleStatus {
    Idle,
    InProgress { found: usize, total: usize },
    Solved,
}

#[derive(Debug, Clone)]
pub(crate) struct SidebarViewModel<'a> {
    status: PuzzleStatus,
    timer: String,
    settings: &'a Settings,
    error: Option<&'a str>,
}

impl<'a> SidebarViewModel<'a> {
    #[must_use]
    pub(crate) fn new(
        status: PuzzleStatus,
        timer: String,
        settings: &'a Settings,
        error: Option<&'a str>,
    ) -> Self {
        Self {
            status,
            timer,
            settings,
            error,
        }
    }

    #[must_use]
    pub(crate) fn status(&self) -> PuzzleStatus {
        self.status
    }

    #[must_use]
    pub(crate) fn timer(&self) -> &str {
        &self.timer
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &SidebarViewModel, action_queue: &mut ActionRequestQueue) {
    ui.vertical(|ui| {
        ui.group(|ui| {
            let status_label = match vm.status {
                PuzzleStatus::Idle => RichText::new("Press Start to play"),
                PuzzleStatus::InProgress { found, total } => {
                    RichText::new(format!("Found {found} / {total}"))
                }
                PuzzleStatus::Solved => {
                    RichText::new("All words found!").color(ui.visuals().warn_fg_color)
                }
            };
            ui.label(status_label.size(20.0));
            ui.label(RichText::new(vm.timer()).monospace().size(28.0));
        });

        ui.horizontal(|ui| {
            let start_label = if vm.status.is_idle() {
                "Start"
            } else {
                "New Puzzle"
            };
            if ui.button(start_label).clicked() {
                action_queue.request(Action::StartPuzzle);
            }
            if ui
                .add_enabled(!vm.status.is_idle(), Button::new("Reset"))
                .clicked()
            {
                action_queue.request(Action::ResetPuzzle);
            }
        });

        if let Some(error) = vm.error {
            ui.label(RichText::new(error).color(ui.visuals().error_fg_color));
        }

        ui.separator();

        let mut changed = false;
        let mut settings = vm.settings.clone();
        let Settings {
            grid_size,
            strict_placement,
        } = &mut settings;
        ScrollArea::vertical().show(ui, |ui| {
            ui.heading("Settings");
            ui.indent("sidebar_settings", |ui| {
                CollapsingHeader::new("Puzzle")
                    .default_open(true)
                    .show(ui, |ui| {
                        changed |= ui
                            .add(
                                Slider::new(
                                    grid_size,
                                    Settings::MIN_GRID_SIZE..=Settings::MAX_GRID_SIZE,
                                )
                                .text("Grid size"),
                            )
                            .changed();
                        changed |= ui
                            .checkbox(strict_placement, "Place every word")
                            .on_hover_text("Regenerate the grid until every word fits")
                            .changed();
                        ui.label("Changes apply to the next puzzle.");
                    });

                CollapsingHeader::new("Appearance")
                    .default_open(true)
                    .show(ui, |ui| {
                        widgets::global_theme_preference_buttons(ui);
                    });
            });
        });
        if changed {
            action_queue.request(Action::UpdateSettings(settings));
        }
    });
}
