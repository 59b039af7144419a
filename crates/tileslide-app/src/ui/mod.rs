pub(crate) mod board;
pub(crate) mod board_theme;
pub(crate) mod game_screen;
pub(crate) mod input;
pub(crate) mod layout;
pub(crate) mod sidebar;
pub(crate) mod status_line;
