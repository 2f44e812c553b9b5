use eframe::egui::{Color32, Visuals};
use wordhunt_game::COLOR_KEY_COUNT;

/// Pastel highlight colors cycled through by found words.
const FOUND_COLORS: [Color32; COLOR_KEY_COUNT] = [
    Color32::from_rgb(0xff, 0xb3, 0xd9),
    Color32::from_rgb(0xb3, 0xd9, 0xff),
    Color32::from_rgb(0xd4, 0xb5, 0xe8),
    Color32::from_rgb(0xff, 0xd9, 0xb3),
    Color32::from_rgb(0xb3, 0xff, 0xb3),
    Color32::from_rgb(0xff, 0xcc, 0xff),
    Color32::from_rgb(0xcc, 0xff, 0xff),
    Color32::from_rgb(0xff, 0xff, 0xcc),
    Color32::from_rgb(0xff, 0xcc, 0xcc),
    Color32::from_rgb(0xcc, 0xff, 0xcc),
];

/// Color palette for letter grid and word list rendering.
///
/// Found-word highlights keep the same colors in light and dark mode so a
/// word's color in the grid always matches its entry in the word list.
#[derive(Debug, Clone)]
pub struct GridPalette {
    pub cell_bg_default: Color32,
    pub cell_bg_selecting: Color32,
    pub cell_bg_found: [Color32; COLOR_KEY_COUNT],

    pub border_inactive: Color32,
    pub border_selecting: Color32,

    pub text_normal: Color32,
    pub text_found: Color32,
}

impl GridPalette {
    /// Initialize the palette using the current visuals.
    pub fn from_visuals(visuals: &Visuals) -> Self {
        Self {
            cell_bg_default: visuals.text_edit_bg_color(),
            cell_bg_selecting: visuals.selection.bg_fill,
            cell_bg_found: FOUND_COLORS,

            border_inactive: visuals.widgets.inactive.fg_stroke.color,
            border_selecting: visuals.selection.stroke.color,

            text_normal: visuals.text_color(),
            text_found: Color32::from_gray(0x20),
        }
    }

    #[must_use]
    pub fn found_color(&self, color_key: usize) -> Color32 {
        self.cell_bg_found[color_key % COLOR_KEY_COUNT]
    }
}

/// Holds light/dark palettes and selects one based on current visuals.
#[derive(Debug, Clone)]
pub struct GridTheme {
    pub light: GridPalette,
    pub dark: GridPalette,
}

impl GridTheme {
    pub fn from_visuals(visuals: &Visuals) -> Self {
        Self {
            light: GridPalette::from_visuals(&Visuals::light()),
            dark: GridPalette::from_visuals(&Visuals::dark()),
        }
        .with_current(visuals)
    }

    fn with_current(mut self, visuals: &Visuals) -> Self {
        let current = GridPalette::from_visuals(visuals);
        if visuals.dark_mode {
            self.dark = current;
        } else {
            self.light = current;
        }
        self
    }

    pub fn palette_for(&self, visuals: &Visuals) -> &GridPalette {
        if visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }
}
