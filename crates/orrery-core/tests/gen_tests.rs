// Integration tests for procedural generation: textures, starfield, meshes.

use orrery_core::constants::{STAR_COUNT, STAR_FIELD_EXTENT, TEXTURE_HEIGHT, TEXTURE_WIDTH};
use orrery_core::texture::{body_seed, hsl_to_rgb, planet_pixels, rgb_hue, sun_pixels};
use orrery_core::{mesh, starfield, Planet};

#[test]
fn planet_texture_has_the_expected_shape() {
    let cfg = Planet::Earth.config();
    let tex = planet_pixels(cfg, body_seed(1, Planet::Earth.index()));
    assert_eq!(tex.width, TEXTURE_WIDTH);
    assert_eq!(tex.height, TEXTURE_HEIGHT);
    assert_eq!(tex.data.len(), tex.byte_len());
    // fully opaque
    assert!(tex.data.chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn planet_texture_is_reproducible_per_seed() {
    let cfg = Planet::Mars.config();
    let a = planet_pixels(cfg, 7);
    let b = planet_pixels(cfg, 7);
    assert_eq!(a.data, b.data);

    let c = planet_pixels(cfg, 8);
    assert_ne!(a.data, c.data);
}

#[test]
fn sun_texture_fades_from_yellow_to_red() {
    let tex = sun_pixels();
    let px = |x: u32, y: u32| {
        let i = ((y * tex.width + x) * 4) as usize;
        (tex.data[i], tex.data[i + 1], tex.data[i + 2])
    };
    let center = px(tex.width / 2, tex.height / 2);
    assert_eq!(center, (255, 255, 0));
    // corners lie past the gradient radius
    let corner = px(0, 0);
    assert_eq!(corner, (255, 0, 0));
}

#[test]
fn hsl_round_trips_through_primary_colors() {
    assert_eq!(hsl_to_rgb(0.0, 0.0, 0.5), [0.5, 0.5, 0.5]);
    let red = hsl_to_rgb(0.0, 1.0, 0.5);
    assert!((red[0] - 1.0).abs() < 1e-5 && red[1].abs() < 1e-5 && red[2].abs() < 1e-5);

    assert!((rgb_hue([0.0, 1.0, 0.0]) - 1.0 / 3.0).abs() < 1e-5);
    assert!((rgb_hue([0.0, 0.0, 1.0]) - 2.0 / 3.0).abs() < 1e-5);
    assert_eq!(rgb_hue([0.3, 0.3, 0.3]), 0.0);
}

#[test]
fn starfield_fills_the_cube_with_bounded_brightness() {
    let stars = starfield::generate(STAR_COUNT, 1);
    assert_eq!(stars.len(), STAR_COUNT);
    for star in &stars {
        for axis in star.position {
            assert!(axis.abs() <= STAR_FIELD_EXTENT);
        }
        assert!((0.5..1.0).contains(&star.brightness));
    }
}

#[test]
fn starfield_is_seeded() {
    let a = starfield::generate(100, 42);
    let b = starfield::generate(100, 42);
    let c = starfield::generate(100, 43);
    assert_eq!(bytemuck::cast_slice::<_, u8>(&a), bytemuck::cast_slice::<_, u8>(&b));
    assert_ne!(bytemuck::cast_slice::<_, u8>(&a), bytemuck::cast_slice::<_, u8>(&c));
}

#[test]
fn star_layout_matches_the_instance_stride() {
    assert_eq!(std::mem::size_of::<starfield::Star>(), 16);
    assert_eq!(std::mem::size_of::<mesh::Vertex>(), 32);
}

#[test]
fn uv_sphere_is_a_unit_sphere() {
    let sphere = mesh::uv_sphere(16, 24);
    assert_eq!(sphere.vertices.len(), (16 + 1) * (24 + 1));
    assert_eq!(sphere.indices.len(), 16 * 24 * 6);
    for v in &sphere.vertices {
        let len = (v.position[0].powi(2) + v.position[1].powi(2) + v.position[2].powi(2)).sqrt();
        assert!((len - 1.0).abs() < 1e-4);
        assert_eq!(v.position, v.normal);
        assert!((0.0..=1.0).contains(&v.uv[0]));
        assert!((0.0..=1.0).contains(&v.uv[1]));
    }
    let max = *sphere.indices.iter().max().unwrap();
    assert!((max as usize) < sphere.vertices.len());
}

#[test]
fn ring_is_a_flat_annulus() {
    let ring = mesh::ring(2.5, 4.0, 32);
    assert_eq!(ring.indices.len(), 32 * 6);
    for v in &ring.vertices {
        assert_eq!(v.position[1], 0.0);
        let r = (v.position[0].powi(2) + v.position[2].powi(2)).sqrt();
        assert!((2.499..=4.001).contains(&r), "radius {r}");
        assert_eq!(v.normal, [0.0, 1.0, 0.0]);
    }
    let max = *ring.indices.iter().max().unwrap();
    assert!((max as usize) < ring.vertices.len());
}
