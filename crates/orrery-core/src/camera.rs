//! Orbit camera around the scene origin.
//!
//! The camera is described by spherical angles plus a distance and derives
//! its matrices on demand; it never stores a position. Platform code feeds it
//! drag/zoom deltas and reads `eye()`/`view_proj()` every frame.

use glam::{Mat4, Vec3};

use crate::constants::{
    CAMERA_DEFAULT_DISTANCE, CAMERA_DEFAULT_PITCH, CAMERA_DEFAULT_YAW, CAMERA_FAR, CAMERA_FOV_Y,
    CAMERA_MAX_DISTANCE, CAMERA_MIN_DISTANCE, CAMERA_NEAR, DRAG_SENSITIVITY, PITCH_LIMIT,
    ZOOM_SENSITIVITY,
};

#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub yaw: f32,
    /// Clamped to [-PITCH_LIMIT, PITCH_LIMIT].
    pub pitch: f32,
    /// Clamped to [CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE].
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            yaw: CAMERA_DEFAULT_YAW,
            pitch: CAMERA_DEFAULT_PITCH,
            distance: CAMERA_DEFAULT_DISTANCE,
        }
    }
}

impl OrbitCamera {
    /// Apply a pointer drag in pixels.
    pub fn drag(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * DRAG_SENSITIVITY;
        self.pitch = (self.pitch + dy * DRAG_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Apply a wheel delta; positive moves the camera away.
    pub fn zoom(&mut self, delta: f32) {
        self.distance =
            (self.distance + delta * ZOOM_SENSITIVITY).clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
    }

    /// Eye position on the sphere of radius `distance` around the origin.
    pub fn eye(&self) -> Vec3 {
        Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        ) * self.distance
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), Vec3::ZERO, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(CAMERA_FOV_Y, aspect, CAMERA_NEAR, CAMERA_FAR)
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }
}
