// DOM ids and front-end tuning constants.

pub const CANVAS_ID: &str = "scene-canvas";
pub const TOOLTIP_ID: &str = "tooltip";
pub const CONTROLS_ID: &str = "planet-controls";
pub const PAUSE_BTN_ID: &str = "pause-btn";
pub const RESET_BTN_ID: &str = "reset-btn";
pub const THEME_BTN_ID: &str = "theme-btn";

pub const LIGHT_THEME_CLASS: &str = "light-theme";

// Tooltip placement relative to the pointer, CSS pixels
pub const TOOLTIP_OFFSET_X: i32 = 10;
pub const TOOLTIP_OFFSET_Y: i32 = -30;
