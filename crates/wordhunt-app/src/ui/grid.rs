use std::sync::Arc;

use eframe::egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, StrokeKind, Ui, Vec2};
use wordhunt_core::Position;

use crate::{
    action::{Action, ActionRequestQueue},
    ui::grid_theme::{GridPalette, GridTheme},
};

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct GridVisualState: u8 {
        const SELECTING = 0b0000_0001;
        const FOUND = 0b0000_0010;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GridCell {
    pub(crate) letter: char,
    pub(crate) visual_state: GridVisualState,
    pub(crate) color_key: usize,
}

#[derive(Debug, Clone)]
pub(crate) struct GridViewModel {
    size: usize,
    cells: Vec<GridCell>,
    selecting: bool,
    interactive: bool,
}

impl GridViewModel {
    /// Creates a view model from row-major `cells`.
    #[must_use]
    pub(crate) fn new(
        size: usize,
        cells: Vec<GridCell>,
        selecting: bool,
        interactive: bool,
    ) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self {
            size,
            cells,
            selecting,
            interactive,
        }
    }

    #[must_use]
    pub(crate) fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub(crate) fn cell(&self, pos: Position) -> Option<&GridCell> {
        if pos.row >= self.size || pos.col >= self.size {
            return None;
        }
        self.cells.get(pos.row * self.size + pos.col)
    }

    #[must_use]
    pub(crate) fn is_selecting(&self) -> bool {
        self.selecting
    }

    #[must_use]
    pub(crate) fn is_interactive(&self) -> bool {
        self.interactive
    }
}

const CELL_BORDER_WIDTH_BASE_RATIO: f32 = 0.03;
const OUTER_BORDER_WIDTH_RATIO: f32 = 3.0;
const THIN_BORDER_WIDTH_RATIO: f32 = 1.0;
const SELECTING_BORDER_WIDTH_RATIO: f32 = 2.0;
const LETTER_SIZE_RATIO: f32 = 0.6;

impl GridVisualState {
    fn text_color(self, palette: &GridPalette) -> Color32 {
        if self.contains(GridVisualState::FOUND) && !self.contains(GridVisualState::SELECTING) {
            return palette.text_found;
        }
        palette.text_normal
    }

    fn cell_fill_color(self, color_key: usize, palette: &GridPalette) -> Color32 {
        if self.intersects(GridVisualState::SELECTING) {
            return palette.cell_bg_selecting;
        }
        if self.intersects(GridVisualState::FOUND) {
            return palette.found_color(color_key);
        }
        palette.cell_bg_default
    }

    fn cell_border(self, palette: &GridPalette, cell_size: f32) -> Stroke {
        let base_width = f32::max(cell_size * CELL_BORDER_WIDTH_BASE_RATIO, 1.0);
        if self.intersects(GridVisualState::SELECTING) {
            Stroke::new(
                base_width * SELECTING_BORDER_WIDTH_RATIO,
                palette.border_selecting,
            )
        } else {
            Stroke::new(base_width * THIN_BORDER_WIDTH_RATIO, palette.border_inactive)
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn cell_rect(grid_rect: Rect, cell_size: f32, pos: Position) -> Rect {
    let min = grid_rect.min + Vec2::new(pos.col as f32, pos.row as f32) * cell_size;
    Rect::from_min_size(min, Vec2::splat(cell_size))
}

/// Maps a pointer position to the grid cell under it.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn cell_at(grid_rect: Rect, cell_size: f32, size: usize, pointer: Pos2) -> Option<Position> {
    if !grid_rect.contains(pointer) || cell_size <= 0.0 {
        return None;
    }
    let offset = (pointer - grid_rect.min) / cell_size;
    let last = size.checked_sub(1)?;
    let row = (offset.y.floor() as usize).min(last);
    let col = (offset.x.floor() as usize).min(last);
    Some(Position::new(row, col))
}

pub(crate) fn show(ui: &mut Ui, vm: &GridViewModel, action_queue: &mut ActionRequestQueue) {
    let style = Arc::clone(ui.style());
    let visuals = &style.visuals;
    let grid_theme = GridTheme::from_visuals(visuals);
    let palette = grid_theme.palette_for(visuals);

    let side = ui.available_size().min_elem();
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(side), Sense::click_and_drag());
    #[allow(clippy::cast_precision_loss)]
    let cell_size = side / vm.size().max(1) as f32;

    let painter = ui.painter();
    for row in 0..vm.size() {
        for col in 0..vm.size() {
            let pos = Position::new(row, col);
            let Some(cell) = vm.cell(pos) else {
                continue;
            };
            let vs = cell.visual_state;
            let bounds = cell_rect(rect, cell_size, pos);

            painter.rect_filled(bounds, 0.0, vs.cell_fill_color(cell.color_key, palette));
            painter.text(
                bounds.center(),
                Align2::CENTER_CENTER,
                cell.letter,
                FontId::monospace(cell_size * LETTER_SIZE_RATIO),
                vs.text_color(palette),
            );
            painter.rect_stroke(
                bounds,
                0.0,
                vs.cell_border(palette, cell_size),
                StrokeKind::Inside,
            );
        }
    }

    let base_width = f32::max(cell_size * CELL_BORDER_WIDTH_BASE_RATIO, 1.0);
    painter.rect_stroke(
        rect,
        0.0,
        Stroke::new(
            base_width * OUTER_BORDER_WIDTH_RATIO,
            palette.border_inactive,
        ),
        StrokeKind::Outside,
    );

    if !vm.is_interactive() {
        return;
    }

    let (pressed, down, released, pointer) = ui.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.primary_down(),
            i.pointer.primary_released(),
            i.pointer.interact_pos(),
        )
    });
    let frame = PointerFrame {
        pressed: pressed && response.contains_pointer(),
        down,
        released,
        cell: pointer.and_then(|pointer| cell_at(rect, cell_size, vm.size(), pointer)),
    };
    request_pointer_actions(frame, vm.is_selecting(), action_queue);
}

/// Primary button input seen during one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct PointerFrame {
    /// Pressed over the grid this frame.
    pressed: bool,
    down: bool,
    released: bool,
    cell: Option<Position>,
}

/// Turns one frame of pointer input into selection actions.
///
/// `selecting` comes from the state the frame was drawn with, so a press
/// and release landing in the same frame still see `false`. A press always
/// begins a new gesture and a release always ends one.
fn request_pointer_actions(
    frame: PointerFrame,
    selecting: bool,
    action_queue: &mut ActionRequestQueue,
) {
    if frame.pressed {
        if let Some(cell) = frame.cell {
            action_queue.request(Action::BeginSelection(cell));
        }
    } else if frame.down
        && selecting
        && let Some(cell) = frame.cell
    {
        action_queue.request(Action::ExtendSelection(cell));
    }
    if frame.released {
        action_queue.request(Action::EndSelection);
    }
}
