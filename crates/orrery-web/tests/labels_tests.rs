// Host-side tests for pure label/format helpers.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod labels {
    include!("../src/labels.rs");
}

use labels::*;

#[test]
fn speed_readout_uses_one_decimal() {
    assert_eq!(format_speed(5.0), "5.0");
    assert_eq!(format_speed(0.0), "0.0");
    assert_eq!(format_speed(10.0), "10.0");
    assert_eq!(format_speed(0.1), "0.1");
    // defaults round the same way the displayed value does
    assert_eq!(format_speed(2.98), "3.0");
    assert_eq!(format_speed(4.74), "4.7");
}

#[test]
fn pause_button_reflects_the_paused_state() {
    assert_eq!(pause_button_label(false), "Pause");
    assert_eq!(pause_button_label(true), "Resume");
}

#[test]
fn theme_button_names_the_active_theme() {
    assert_eq!(theme_button_label(false), "🌙 Dark Mode");
    assert_eq!(theme_button_label(true), "☀️ Light Mode");
}

#[test]
fn color_hex_pads_to_six_digits() {
    assert_eq!(color_hex(0x8c7853), "#8c7853");
    assert_eq!(color_hex(0x00ff00), "#00ff00");
    assert_eq!(color_hex(0x000001), "#000001");
}

#[test]
fn element_ids_derive_from_the_body_key() {
    assert_eq!(slider_id("earth"), "speed-earth");
    assert_eq!(readout_id("earth"), "speed-value-earth");
    assert_ne!(slider_id("mars"), slider_id("earth"));
}
