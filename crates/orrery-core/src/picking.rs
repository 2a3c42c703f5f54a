//! Ray picking against the sun and planet bounding spheres.

use glam::{Vec3, Vec4};
use smallvec::SmallVec;

use crate::bodies::{Planet, PLANET_COUNT, SUN};
use crate::camera::OrbitCamera;
use crate::sim::SolarSim;

#[derive(Clone, Copy, Debug)]
pub struct PickHit {
    pub name: &'static str,
    pub t: f32,
}

/// Compute a world-space ray from canvas-pixel coordinates.
///
/// `sx`, `sy` are pixel coordinates in the surface's backing-store space.
/// Returns `(ray_origin, ray_direction)`.
pub fn screen_to_world_ray(
    camera: &OrbitCamera,
    width: f32,
    height: f32,
    sx: f32,
    sy: f32,
) -> (Vec3, Vec3) {
    let ndc_x = (2.0 * sx / width) - 1.0;
    let ndc_y = 1.0 - (2.0 * sy / height);
    let aspect = width / height.max(1.0);
    let inv = camera.view_proj(aspect).inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let p_far: Vec3 = p_far.truncate() / p_far.w;
    let ro = camera.eye();
    let rd = (p_far - ro).normalize();
    (ro, rd)
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// All bodies under the given canvas-pixel position, unordered.
pub fn pick_hits(
    sim: &SolarSim,
    width: f32,
    height: f32,
    sx: f32,
    sy: f32,
) -> SmallVec<[PickHit; PLANET_COUNT + 1]> {
    let (ro, rd) = screen_to_world_ray(&sim.camera, width, height, sx, sy);
    let mut hits = SmallVec::new();
    if let Some(t) = ray_sphere(ro, rd, Vec3::ZERO, SUN.radius) {
        hits.push(PickHit { name: SUN.name, t });
    }
    for planet in Planet::ALL {
        let center = sim.planet_position(planet);
        if let Some(t) = ray_sphere(ro, rd, center, planet.config().radius) {
            hits.push(PickHit {
                name: planet.config().name,
                t,
            });
        }
    }
    hits
}

/// Nearest body under the given canvas-pixel position, if any.
pub fn pick(sim: &SolarSim, width: f32, height: f32, sx: f32, sy: f32) -> Option<PickHit> {
    let mut best = None::<PickHit>;
    for hit in pick_hits(sim, width, height, sx, sy) {
        match best {
            Some(b) if hit.t >= b.t => {}
            _ => best = Some(hit),
        }
    }
    best
}
