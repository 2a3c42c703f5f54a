// Sanity checks on constants and their mathematical relationships.

use orrery_core::constants::*;
use orrery_core::{PLANETS, SUN};

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_ranges_are_ordered() {
    assert!(CAMERA_MIN_DISTANCE > 0.0);
    assert!(CAMERA_MIN_DISTANCE < CAMERA_MAX_DISTANCE);
    assert!(CAMERA_DEFAULT_DISTANCE >= CAMERA_MIN_DISTANCE);
    assert!(CAMERA_DEFAULT_DISTANCE <= CAMERA_MAX_DISTANCE);
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_FAR);
    assert!(CAMERA_FOV_Y > 0.0 && CAMERA_FOV_Y < std::f32::consts::PI);
    assert!(PITCH_LIMIT > 0.0);
    assert!(CAMERA_DEFAULT_PITCH.abs() <= PITCH_LIMIT);
}

#[test]
fn default_pitch_reproduces_the_intended_height() {
    let height = CAMERA_DEFAULT_PITCH.sin() * CAMERA_DEFAULT_DISTANCE;
    assert!((height - 30.0).abs() < 0.1, "height = {height}");
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn interaction_rates_are_positive() {
    assert!(DRAG_SENSITIVITY > 0.0);
    assert!(ZOOM_SENSITIVITY > 0.0);
    assert!(ORBIT_RATE > 0.0);
    assert!(PLANET_SPIN_RATE > 0.0);
    assert!(SUN_SPIN_RATE > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn slider_range_is_sane() {
    assert!(SPEED_MIN < SPEED_MAX);
    assert!(SPEED_STEP > 0.0);
    // every default speed must be reachable by its slider
    for cfg in &PLANETS {
        assert!(
            cfg.speed >= SPEED_MIN && cfg.speed <= SPEED_MAX,
            "{} default speed {} outside the slider range",
            cfg.name,
            cfg.speed
        );
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn starfield_and_texture_dimensions_are_positive() {
    assert!(STAR_COUNT > 0);
    assert!(STAR_FIELD_EXTENT > 0.0);
    assert!(STAR_SIZE_PX > 0.0);
    assert!(STAR_OPACITY_DARK > 0.0 && STAR_OPACITY_DARK <= 1.0);
    assert!(STAR_OPACITY_LIGHT > 0.0 && STAR_OPACITY_LIGHT <= 1.0);
    assert!(TEXTURE_WIDTH > 0 && TEXTURE_HEIGHT > 0);
    assert!(BLOTCH_COUNT > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ring_sits_outside_saturns_surface_scale() {
    assert!(RING_INNER_RADIUS < RING_OUTER_RADIUS);
    assert!(RING_OPACITY > 0.0 && RING_OPACITY <= 1.0);
    assert!(RING_SEGMENTS >= 3);
}

#[test]
fn bodies_are_ordered_by_distance() {
    let mut prev = SUN.distance;
    for cfg in &PLANETS {
        assert!(cfg.distance > prev, "{} at {}", cfg.name, cfg.distance);
        prev = cfg.distance;
    }
}
