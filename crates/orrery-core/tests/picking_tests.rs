// Integration tests for ray construction and body picking.

use glam::Vec3;

use orrery_core::picking::{pick, pick_hits, ray_sphere, screen_to_world_ray};
use orrery_core::{Planet, SolarSim};

const W: f32 = 800.0;
const H: f32 = 600.0;

#[test]
fn ray_sphere_hits_a_sphere_ahead() {
    let origin = Vec3::ZERO;
    let dir = Vec3::new(0.0, 0.0, 1.0);
    let t = ray_sphere(origin, dir, Vec3::new(0.0, 0.0, 5.0), 2.0);
    assert!(t.is_some());
    let t = t.unwrap();
    assert!((t - 3.0).abs() < 1e-4);
}

#[test]
fn ray_sphere_misses_a_sphere_off_axis() {
    let origin = Vec3::ZERO;
    let dir = Vec3::new(1.0, 0.0, 0.0);
    assert!(ray_sphere(origin, dir, Vec3::new(0.0, 0.0, 5.0), 2.0).is_none());
}

#[test]
fn ray_sphere_ignores_spheres_behind_the_origin() {
    let origin = Vec3::ZERO;
    let dir = Vec3::new(0.0, 0.0, 1.0);
    assert!(ray_sphere(origin, dir, Vec3::new(0.0, 0.0, -5.0), 2.0).is_none());
}

#[test]
fn center_ray_points_from_the_eye_at_the_origin() {
    let sim = SolarSim::new();
    let (ro, rd) = screen_to_world_ray(&sim.camera, W, H, W / 2.0, H / 2.0);
    assert!((ro - sim.camera.eye()).length() < 1e-3);
    let toward_origin = (-sim.camera.eye()).normalize();
    assert!((rd - toward_origin).length() < 1e-2, "rd = {rd:?}");
}

#[test]
fn screen_center_picks_the_sun() {
    let sim = SolarSim::new();
    let hit = pick(&sim, W, H, W / 2.0, H / 2.0).expect("expected a hit");
    assert_eq!(hit.name, "Sun");
}

#[test]
fn nearest_body_wins_when_several_line_up() {
    let mut sim = SolarSim::new();
    // camera on the +Z axis, mercury directly between it and the sun
    sim.camera.yaw = std::f32::consts::FRAC_PI_2;
    sim.camera.pitch = 0.0;
    sim.orbit_angles[Planet::Mercury.index()] = -std::f32::consts::FRAC_PI_2;

    let hits = pick_hits(&sim, W, H, W / 2.0, H / 2.0);
    let names: Vec<_> = hits.iter().map(|h| h.name).collect();
    assert!(names.contains(&"Sun"), "hits: {names:?}");
    assert!(names.contains(&"Mercury"), "hits: {names:?}");

    let hit = pick(&sim, W, H, W / 2.0, H / 2.0).expect("expected a hit");
    assert_eq!(hit.name, "Mercury");
}

#[test]
fn corner_rays_miss_everything() {
    let mut sim = SolarSim::new();
    sim.camera.pitch = 0.0;
    assert!(pick(&sim, W, H, 0.0, 0.0).is_none());
    assert!(pick(&sim, W, H, 1.0, H - 1.0).is_none());
}
