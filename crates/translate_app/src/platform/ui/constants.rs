use std::time::Duration;

pub const WINDOW_TITLE: &str = "Translate";
pub const WINDOW_SIZE: [f32; 2] = [1080.0, 720.0];

pub const PAGE_PADDING: f32 = 20.0;
pub const PANE_GAP: f32 = 20.0;
pub const PANE_ROUNDING: f32 = 10.0;
pub const PANE_MARGIN: f32 = 10.0;
pub const PANE_MIN_HEIGHT: f32 = 350.0;
pub const LANGUAGE_SELECT_WIDTH: f32 = 180.0;

/// Vertical margin a frameless multiline `TextEdit` adds around its galley.
pub const INPUT_TEXT_MARGIN: f32 = 4.0;
pub const INPUT_MIN_HEIGHT: f32 = 60.0;

/// Window-resize refits run at most once per frame interval.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(16);

pub const SETTINGS_FORM_WIDTH: f32 = 420.0;
