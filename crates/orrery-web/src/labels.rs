// Pure helpers for control-panel text and element ids. Kept free of web-sys
// so they can be tested host-side.

/// Speed readout text, one decimal place.
pub fn format_speed(value: f32) -> String {
    format!("{value:.1}")
}

pub fn pause_button_label(paused: bool) -> &'static str {
    if paused {
        "Resume"
    } else {
        "Pause"
    }
}

pub fn theme_button_label(light_theme: bool) -> &'static str {
    if light_theme {
        "☀️ Light Mode"
    } else {
        "🌙 Dark Mode"
    }
}

/// CSS hex color from a 0xRRGGBB value.
pub fn color_hex(color: u32) -> String {
    format!("#{color:06x}")
}

pub fn slider_id(key: &str) -> String {
    format!("speed-{key}")
}

pub fn readout_id(key: &str) -> String {
    format!("speed-value-{key}")
}
