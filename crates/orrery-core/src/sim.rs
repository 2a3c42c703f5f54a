//! Simulation state and the command set that mutates it.
//!
//! All interaction reaches the simulation as a [`Command`] applied
//! synchronously, so the update logic stays independent of any UI toolkit.
//! Angles are radians and unbounded; they wrap implicitly through the trig
//! used when positions are derived.

use std::time::Duration;

use glam::Vec3;

use crate::bodies::{Planet, PLANETS, PLANET_COUNT};
use crate::camera::OrbitCamera;
use crate::constants::{ORBIT_RATE, PLANET_SPIN_RATE, SPEED_MAX, SPEED_MIN, SUN_SPIN_RATE};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    SetSpeed(Planet, f32),
    Drag { dx: f32, dy: f32 },
    Zoom(f32),
    TogglePause,
    ToggleTheme,
    Reset,
}

pub struct SolarSim {
    /// Orbit-pivot rotation per planet; revolution around the sun.
    pub orbit_angles: [f32; PLANET_COUNT],
    /// Self-rotation per planet, independent of the orbit pivot.
    pub spin_angles: [f32; PLANET_COUNT],
    pub sun_spin: f32,
    /// Current angular speed multiplier per planet, indexed like `PLANETS`.
    pub speeds: [f32; PLANET_COUNT],
    pub camera: OrbitCamera,
    pub paused: bool,
    pub light_theme: bool,
}

impl Default for SolarSim {
    fn default() -> Self {
        Self::new()
    }
}

impl SolarSim {
    pub fn new() -> Self {
        let mut speeds = [0.0; PLANET_COUNT];
        for (slot, cfg) in speeds.iter_mut().zip(PLANETS.iter()) {
            *slot = cfg.speed;
        }
        Self {
            orbit_angles: [0.0; PLANET_COUNT],
            spin_angles: [0.0; PLANET_COUNT],
            sun_spin: 0.0,
            speeds,
            camera: OrbitCamera::default(),
            paused: false,
            light_theme: false,
        }
    }

    #[inline]
    pub fn speed(&self, planet: Planet) -> f32 {
        self.speeds[planet.index()]
    }

    pub fn apply(&mut self, cmd: Command) {
        match cmd {
            Command::SetSpeed(planet, value) => {
                self.speeds[planet.index()] = value.clamp(SPEED_MIN, SPEED_MAX);
            }
            Command::Drag { dx, dy } => self.camera.drag(dx, dy),
            Command::Zoom(delta) => self.camera.zoom(delta),
            Command::TogglePause => self.paused = !self.paused,
            Command::ToggleTheme => self.light_theme = !self.light_theme,
            Command::Reset => self.reset(),
        }
    }

    /// Advance simulated motion by `dt`. A no-op while paused; the camera is
    /// not touched here, frontends derive it from `camera` every frame.
    pub fn advance(&mut self, dt: Duration) {
        if self.paused {
            return;
        }
        let dt = dt.as_secs_f32();
        for planet in Planet::ALL {
            let i = planet.index();
            self.orbit_angles[i] += self.speeds[i] * dt * ORBIT_RATE;
            self.spin_angles[i] += dt * PLANET_SPIN_RATE;
        }
        self.sun_spin += dt * SUN_SPIN_RATE;
    }

    /// Zero all orbit pivots and restore default speeds. Spin angles keep
    /// their accumulated values.
    pub fn reset(&mut self) {
        self.orbit_angles = [0.0; PLANET_COUNT];
        for (slot, cfg) in self.speeds.iter_mut().zip(PLANETS.iter()) {
            *slot = cfg.speed;
        }
    }

    /// Current world position of a planet's center.
    pub fn planet_position(&self, planet: Planet) -> Vec3 {
        let angle = self.orbit_angles[planet.index()];
        let distance = planet.config().distance;
        Vec3::new(distance * angle.cos(), 0.0, -distance * angle.sin())
    }
}
