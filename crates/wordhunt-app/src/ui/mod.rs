pub(crate) mod dialogs;
pub(crate) mod game_screen;
pub(crate) mod grid;
pub(crate) mod grid_theme;
pub(crate) mod sidebar;
pub(crate) mod word_list;
