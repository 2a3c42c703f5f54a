// Integration tests for the simulation state and its command set.

use std::str::FromStr;
use std::time::Duration;

use orrery_core::{Command, Planet, SolarSim, ORBIT_RATE, PLANETS, PLANET_COUNT, SUN};

#[test]
fn default_speeds_come_from_the_body_table() {
    let sim = SolarSim::new();
    assert_eq!(sim.speed(Planet::Earth), 2.98);
    for planet in Planet::ALL {
        assert_eq!(sim.speed(planet), planet.config().speed);
    }
}

#[test]
fn set_speed_command_updates_one_entry() {
    let mut sim = SolarSim::new();
    sim.apply(Command::SetSpeed(Planet::Earth, 5.0));
    assert_eq!(sim.speed(Planet::Earth), 5.0);
    // neighbours untouched
    assert_eq!(sim.speed(Planet::Venus), PLANETS[Planet::Venus.index()].speed);
    assert_eq!(sim.speed(Planet::Mars), PLANETS[Planet::Mars.index()].speed);
}

#[test]
fn set_speed_clamps_to_the_slider_range() {
    let mut sim = SolarSim::new();
    sim.apply(Command::SetSpeed(Planet::Mercury, 42.0));
    assert_eq!(sim.speed(Planet::Mercury), 10.0);
    sim.apply(Command::SetSpeed(Planet::Mercury, -3.0));
    assert_eq!(sim.speed(Planet::Mercury), 0.0);
}

#[test]
fn advance_moves_orbits_by_speed_times_rate() {
    let mut sim = SolarSim::new();
    sim.advance(Duration::from_secs(1));
    for planet in Planet::ALL {
        let i = planet.index();
        let expected = planet.config().speed * ORBIT_RATE;
        assert!(
            (sim.orbit_angles[i] - expected).abs() < 1e-5,
            "{} advanced {} expected {}",
            planet.key(),
            sim.orbit_angles[i],
            expected
        );
        assert!((sim.spin_angles[i] - 2.0).abs() < 1e-5);
    }
    assert!((sim.sun_spin - 0.5).abs() < 1e-5);
}

#[test]
fn paused_ticks_freeze_all_rotations() {
    let mut sim = SolarSim::new();
    sim.advance(Duration::from_millis(500));
    let orbits = sim.orbit_angles;
    let spins = sim.spin_angles;
    let sun = sim.sun_spin;

    sim.apply(Command::TogglePause);
    for _ in 0..10 {
        sim.advance(Duration::from_millis(16));
    }
    assert_eq!(sim.orbit_angles, orbits);
    assert_eq!(sim.spin_angles, spins);
    assert_eq!(sim.sun_spin, sun);
}

#[test]
fn camera_still_moves_while_paused() {
    let mut sim = SolarSim::new();
    sim.apply(Command::TogglePause);
    let before = sim.camera.eye();
    sim.apply(Command::Drag { dx: 50.0, dy: 0.0 });
    sim.advance(Duration::from_millis(16));
    assert_ne!(sim.camera.eye(), before);
}

#[test]
fn resume_continues_from_the_frozen_angle() {
    let mut sim = SolarSim::new();
    sim.advance(Duration::from_secs(1));
    let frozen = sim.orbit_angles;

    sim.apply(Command::TogglePause);
    sim.advance(Duration::from_secs(60));
    assert_eq!(sim.orbit_angles, frozen);

    sim.apply(Command::TogglePause);
    sim.advance(Duration::from_secs(1));
    for planet in Planet::ALL {
        let i = planet.index();
        let expected = frozen[i] + planet.config().speed * ORBIT_RATE;
        assert!((sim.orbit_angles[i] - expected).abs() < 1e-5);
    }
}

#[test]
fn reset_restores_orbits_and_speeds_but_not_spins() {
    let mut sim = SolarSim::new();
    sim.apply(Command::SetSpeed(Planet::Earth, 5.0));
    sim.apply(Command::SetSpeed(Planet::Neptune, 0.0));
    for _ in 0..100 {
        sim.advance(Duration::from_millis(16));
    }
    let spins = sim.spin_angles;

    sim.apply(Command::Reset);
    assert_eq!(sim.orbit_angles, [0.0; PLANET_COUNT]);
    for planet in Planet::ALL {
        assert_eq!(sim.speed(planet), planet.config().speed);
    }
    assert_eq!(sim.spin_angles, spins);
}

#[test]
fn planet_position_rotates_about_the_y_axis() {
    let mut sim = SolarSim::new();
    let d = Planet::Earth.config().distance;

    let p = sim.planet_position(Planet::Earth);
    assert!((p.x - d).abs() < 1e-4);
    assert!(p.y.abs() < 1e-4 && p.z.abs() < 1e-4);

    sim.orbit_angles[Planet::Earth.index()] = std::f32::consts::FRAC_PI_2;
    let p = sim.planet_position(Planet::Earth);
    assert!(p.x.abs() < 1e-3);
    assert!((p.z + d).abs() < 1e-3);
    // distance from the sun is invariant
    assert!((p.length() - d).abs() < 1e-3);
}

#[test]
fn planet_keys_round_trip() {
    for planet in Planet::ALL {
        assert_eq!(Planet::from_str(planet.key()).unwrap(), planet);
    }
    assert!(Planet::from_str("pluto").is_err());
}

#[test]
fn only_saturn_carries_a_ring() {
    let ringed: Vec<_> = Planet::ALL.iter().filter(|p| p.has_ring()).collect();
    assert_eq!(ringed, vec![&Planet::Saturn]);
}

#[test]
fn sun_config_is_fixed() {
    assert_eq!(SUN.name, "Sun");
    assert_eq!(SUN.radius, 3.0);
    assert_eq!(SUN.distance, 0.0);
}
