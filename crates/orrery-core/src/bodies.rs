//! Static configuration for the sun and the eight planets.

use std::str::FromStr;

/// Fixed body identifier; `ALL` is the canonical iteration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Planet {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

pub const PLANET_COUNT: usize = 8;

impl Planet {
    pub const ALL: [Planet; PLANET_COUNT] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Earth,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stable lowercase identifier, also used to derive DOM element ids.
    pub fn key(self) -> &'static str {
        match self {
            Planet::Mercury => "mercury",
            Planet::Venus => "venus",
            Planet::Earth => "earth",
            Planet::Mars => "mars",
            Planet::Jupiter => "jupiter",
            Planet::Saturn => "saturn",
            Planet::Uranus => "uranus",
            Planet::Neptune => "neptune",
        }
    }

    #[inline]
    pub fn config(self) -> &'static BodyConfig {
        &PLANETS[self as usize]
    }

    #[inline]
    pub fn has_ring(self) -> bool {
        matches!(self, Planet::Saturn)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown planet key: {0}")]
pub struct UnknownPlanet(pub String);

impl FromStr for Planet {
    type Err = UnknownPlanet;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Planet::ALL
            .iter()
            .copied()
            .find(|p| p.key() == s)
            .ok_or_else(|| UnknownPlanet(s.to_string()))
    }
}

/// Immutable per-body parameters.
#[derive(Clone, Debug)]
pub struct BodyConfig {
    pub name: &'static str,
    pub radius: f32,
    pub distance: f32,
    /// Default angular speed multiplier for the orbit pivot.
    pub speed: f32,
    /// Base surface color, 0xRRGGBB.
    pub color: u32,
}

impl BodyConfig {
    #[inline]
    pub fn color_rgb(&self) -> [f32; 3] {
        color_rgb(self.color)
    }
}

/// Split a 0xRRGGBB color into normalized RGB components.
pub fn color_rgb(color: u32) -> [f32; 3] {
    [
        ((color >> 16) & 0xff) as f32 / 255.0,
        ((color >> 8) & 0xff) as f32 / 255.0,
        (color & 0xff) as f32 / 255.0,
    ]
}

/// Planet table, indexed by `Planet as usize`.
pub static PLANETS: [BodyConfig; PLANET_COUNT] = [
    BodyConfig {
        name: "Mercury",
        radius: 1.4,
        distance: 8.0,
        speed: 4.74,
        color: 0x8c7853,
    },
    BodyConfig {
        name: "Venus",
        radius: 1.9,
        distance: 12.0,
        speed: 3.5,
        color: 0xffc649,
    },
    BodyConfig {
        name: "Earth",
        radius: 2.0,
        distance: 16.0,
        speed: 2.98,
        color: 0x6b93d6,
    },
    BodyConfig {
        name: "Mars",
        radius: 1.5,
        distance: 20.0,
        speed: 2.41,
        color: 0xcd5c5c,
    },
    BodyConfig {
        name: "Jupiter",
        radius: 3.5,
        distance: 28.0,
        speed: 1.31,
        color: 0xd8ca9d,
    },
    BodyConfig {
        name: "Saturn",
        radius: 3.1,
        distance: 36.0,
        speed: 0.97,
        color: 0xfad5a5,
    },
    BodyConfig {
        name: "Uranus",
        radius: 2.5,
        distance: 44.0,
        speed: 0.68,
        color: 0x4fd0e7,
    },
    BodyConfig {
        name: "Neptune",
        radius: 2.4,
        distance: 52.0,
        speed: 0.54,
        color: 0x4b70dd,
    },
];

pub static SUN: BodyConfig = BodyConfig {
    name: "Sun",
    radius: 3.0,
    distance: 0.0,
    speed: 0.0,
    color: 0xffaa00,
};
