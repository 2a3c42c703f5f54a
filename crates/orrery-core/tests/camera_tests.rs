// Integration tests for the orbit camera invariants.

use orrery_core::{
    OrbitCamera, CAMERA_DEFAULT_DISTANCE, CAMERA_MAX_DISTANCE, CAMERA_MIN_DISTANCE,
    DRAG_SENSITIVITY, PITCH_LIMIT, ZOOM_SENSITIVITY,
};

#[test]
fn default_eye_matches_the_intended_viewpoint() {
    let eye = OrbitCamera::default().eye();
    assert!(eye.x.abs() < 1e-2, "eye.x = {}", eye.x);
    assert!((eye.y - 30.0).abs() < 0.1, "eye.y = {}", eye.y);
    assert!(eye.z > 0.0);
    assert!((eye.length() - CAMERA_DEFAULT_DISTANCE).abs() < 1e-2);
}

#[test]
fn drag_scales_pixels_into_radians() {
    let mut cam = OrbitCamera::default();
    let yaw = cam.yaw;
    let pitch = cam.pitch;
    cam.drag(100.0, -40.0);
    assert!((cam.yaw - (yaw + 100.0 * DRAG_SENSITIVITY)).abs() < 1e-5);
    assert!((cam.pitch - (pitch - 40.0 * DRAG_SENSITIVITY)).abs() < 1e-5);
}

#[test]
fn pitch_stays_clamped_for_any_drag_sequence() {
    let mut cam = OrbitCamera::default();
    for _ in 0..1_000 {
        cam.drag(3.0, 50.0);
        assert!(cam.pitch <= PITCH_LIMIT);
    }
    assert_eq!(cam.pitch, PITCH_LIMIT);

    for _ in 0..1_000 {
        cam.drag(-3.0, -50.0);
        assert!(cam.pitch >= -PITCH_LIMIT);
    }
    assert_eq!(cam.pitch, -PITCH_LIMIT);
}

#[test]
fn distance_stays_clamped_for_any_wheel_sequence() {
    let mut cam = OrbitCamera::default();
    for _ in 0..1_000 {
        cam.zoom(120.0);
        assert!(cam.distance <= CAMERA_MAX_DISTANCE);
    }
    assert_eq!(cam.distance, CAMERA_MAX_DISTANCE);

    for _ in 0..1_000 {
        cam.zoom(-120.0);
        assert!(cam.distance >= CAMERA_MIN_DISTANCE);
    }
    assert_eq!(cam.distance, CAMERA_MIN_DISTANCE);
}

#[test]
fn zoom_moves_by_the_configured_step() {
    let mut cam = OrbitCamera::default();
    let before = cam.distance;
    cam.zoom(10.0);
    assert!((cam.distance - (before + 10.0 * ZOOM_SENSITIVITY)).abs() < 1e-5);
}

#[test]
fn eye_always_sits_on_the_distance_sphere() {
    let mut cam = OrbitCamera::default();
    // a mixed interaction sequence, including runs into both clamps
    for step in 0..500 {
        match step % 4 {
            0 => cam.drag(17.0, -9.0),
            1 => cam.drag(-30.0, 60.0),
            2 => cam.zoom(250.0),
            _ => cam.zoom(-90.0),
        }
        let eye = cam.eye();
        assert!(
            (eye.length() - cam.distance).abs() < 1e-2,
            "step {step}: |eye| = {} distance = {}",
            eye.length(),
            cam.distance
        );
    }
}

#[test]
fn matrices_stay_finite_at_the_pitch_limits() {
    let mut cam = OrbitCamera::default();
    for _ in 0..200 {
        cam.drag(0.0, 1_000.0);
    }
    assert_eq!(cam.pitch, PITCH_LIMIT);
    let vp = cam.view_proj(16.0 / 9.0);
    assert!(vp.to_cols_array().iter().all(|v| v.is_finite()));
}
