//! Background starfield generation.

use bytemuck::{Pod, Zeroable};
use rand::prelude::*;

use crate::constants::STAR_FIELD_EXTENT;

/// One background star; layout matches the renderers' instance buffers.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Star {
    pub position: [f32; 3],
    /// Grayscale color, in [0.5, 1.0).
    pub brightness: f32,
}

/// `count` stars uniformly placed in a cube centered on the origin.
pub fn generate(count: usize, seed: u64) -> Vec<Star> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut stars = Vec::with_capacity(count);
    for _ in 0..count {
        let mut position = [0.0f32; 3];
        for axis in position.iter_mut() {
            *axis = (rng.gen::<f32>() - 0.5) * 2.0 * STAR_FIELD_EXTENT;
        }
        stars.push(Star {
            position,
            brightness: 0.5 + rng.gen::<f32>() * 0.5,
        });
    }
    stars
}
