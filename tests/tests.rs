use starsim::simulation::binary::BinarySystem;
use starsim::simulation::bodies::CelestialBody;
use starsim::simulation::scenario::{build_solar_system, BinaryScenario};
use starsim::simulation::system::SolarSystem;
use starsim::configuration::config::{default_solar_bodies, BinaryConfig, ScenarioConfig};
use starsim::visualization::ascii::render_top_down;
use starsim::SimError;

use std::f64::consts::{PI, TAU};

/// Build the reference binary used throughout: 1.5 + 1.0 solar masses,
/// 5 AU apart, one-year period
pub fn reference_binary() -> BinarySystem {
    BinarySystem::new(1.5, 1.0, 5.0, 365.0).unwrap()
}

/// Build a one-planet system: Earth around the Sun
pub fn sun_and_earth() -> SolarSystem {
    let mut system = SolarSystem::new(CelestialBody::new("Sun", 1.989e30, 0.0, 0.0, 696_340.0));
    system.add_body(CelestialBody::new("Earth", 5.972e24, 1.0, 365.25, 6_371.0));
    system
}

/// Smallest angular distance between two angles, ignoring whole turns
fn angle_diff(a: f64, b: f64) -> f64 {
    let diff = (a - b).rem_euclid(TAU);
    diff.min(TAU - diff)
}

// ==================================================================================
// Binary system construction
// ==================================================================================

#[test]
fn radii_partition_the_separation() {
    let sys = reference_binary();

    assert!(
        (sys.r1 + sys.r2 - sys.semi_major_axis).abs() < 1e-9,
        "r1 + r2 = {} != separation {}",
        sys.r1 + sys.r2,
        sys.semi_major_axis
    );

    // Center-of-mass balance
    assert!(
        (sys.mass1 * sys.r1 - sys.mass2 * sys.r2).abs() < 1e-9,
        "m1*r1 = {} != m2*r2 = {}",
        sys.mass1 * sys.r1,
        sys.mass2 * sys.r2
    );
}

#[test]
fn reference_binary_has_known_radii() {
    let sys = reference_binary();

    // 5 AU split 2:3 by the 1.5:1.0 mass ratio
    assert!((sys.r1 - 2.0).abs() < 1e-9, "r1 = {}", sys.r1);
    assert!((sys.r2 - 3.0).abs() < 1e-9, "r2 = {}", sys.r2);
}

#[test]
fn equal_masses_orbit_symmetrically() {
    let sys = BinarySystem::new(1.0, 1.0, 10.0, 500.0).unwrap();

    assert!((sys.r1 - sys.r2).abs() < 1e-9);
    assert!((sys.v1_kms - sys.v2_kms).abs() < 1e-9);
}

#[test]
fn construction_rejects_non_positive_parameters() {
    let bad = [
        ("mass1", BinarySystem::new(0.0, 1.0, 5.0, 365.0)),
        ("mass2", BinarySystem::new(1.5, -1.0, 5.0, 365.0)),
        ("semi_major_axis", BinarySystem::new(1.5, 1.0, 0.0, 365.0)),
        ("period", BinarySystem::new(1.5, 1.0, 5.0, -10.0)),
    ];

    for (expected, result) in bad {
        match result {
            Err(SimError::InvalidParameter { name, .. }) => {
                assert_eq!(name, expected, "wrong field reported");
            }
            other => panic!("expected InvalidParameter for {expected}, got {other:?}"),
        }
    }
}

// ==================================================================================
// Binary system kinematics
// ==================================================================================

#[test]
fn stars_start_on_the_x_axis() {
    let sys = reference_binary();
    let (p1, p2) = sys.positions_at(0.0);

    assert!((p1.x - sys.r1).abs() < 1e-9, "p1.x = {}", p1.x);
    assert!(p1.y.abs() < 1e-9);
    assert!((p2.x + sys.r2).abs() < 1e-9, "p2.x = {}", p2.x);
    assert!(p2.y.abs() < 1e-9);
}

#[test]
fn stars_stay_collinear_and_balanced() {
    let sys = reference_binary();

    for t in [12.3, 91.25, 200.0, -77.7, 1234.5] {
        let (p1, p2) = sys.positions_at(t);

        // Opposite sides of the origin: the cross product vanishes
        let cross = p1.x * p2.y - p1.y * p2.x;
        assert!(cross.abs() < 1e-9, "not collinear at t = {t}: {cross}");
        assert!(p1.dot(&p2) < 0.0, "same side of the origin at t = {t}");

        // Moment balance about the center of mass
        assert!(
            (sys.mass1 * p1.norm() - sys.mass2 * p2.norm()).abs() < 1e-9,
            "unbalanced at t = {t}"
        );
    }
}

#[test]
fn positions_repeat_every_period() {
    let sys = reference_binary();

    let (a1, a2) = sys.positions_at(42.0);
    let (b1, b2) = sys.positions_at(42.0 + sys.period);

    assert!((a1 - b1).norm() < 1e-9);
    assert!((a2 - b2).norm() < 1e-9);
}

#[test]
fn radial_velocities_oppose_at_quarter_period() {
    let sys = reference_binary();
    let (rv1, rv2) = sys.radial_velocities_at(sys.period / 4.0, 90.0);

    assert!(
        rv1 * rv2 < 0.0,
        "expected strictly opposite signs, got {rv1} and {rv2}"
    );
}

#[test]
fn edge_on_amplitude_is_the_orbital_speed() {
    let sys = reference_binary();

    // theta = pi/2 at a quarter period: maximum line-of-sight speed
    let (rv1, rv2) = sys.radial_velocities_at(sys.period / 4.0, 90.0);
    assert!((rv1 - sys.v1_kms).abs() < 1e-9, "rv1 = {rv1}");
    assert!((rv2 + sys.v2_kms).abs() < 1e-9, "rv2 = {rv2}");
}

#[test]
fn face_on_system_shows_no_radial_velocity() {
    let sys = reference_binary();

    for t in [0.0, 10.0, 91.25, 300.0] {
        let (rv1, rv2) = sys.radial_velocities_at(t, 0.0);
        assert!(rv1.abs() < 1e-12 && rv2.abs() < 1e-12, "nonzero at t = {t}");
    }
}

#[test]
fn sampled_series_match_scalar_calls() {
    let sys = reference_binary();
    let times = [0.0, 50.0, 100.0, 150.0];

    let positions = sys.sample_positions(&times);
    let rvs = sys.sample_radial_velocities(&times, 60.0);
    assert_eq!(positions.len(), times.len());

    for (i, &t) in times.iter().enumerate() {
        assert_eq!(positions[i], sys.positions_at(t));
        assert_eq!(rvs[i], sys.radial_velocities_at(t, 60.0));
    }
}

// ==================================================================================
// Doppler shift
// ==================================================================================

#[test]
fn doppler_shift_direction() {
    let sys = reference_binary();
    let rest = 656.3;

    assert!((sys.doppler_shift(0.0, rest) - rest).abs() < 1e-12);
    assert!(sys.doppler_shift(100.0, rest) > rest, "receding must redshift");
    assert!(sys.doppler_shift(-100.0, rest) < rest, "approaching must blueshift");
}

#[test]
fn doppler_shift_magnitude() {
    let sys = reference_binary();

    let shifted = sys.doppler_shift(100.0, 656.3);
    let expected = 656.3 * (1.0 + 100.0 / 299_792.458);
    assert!((shifted - expected).abs() < 1e-12, "shifted = {shifted}");
}

// ==================================================================================
// Solar system bodies
// ==================================================================================

#[test]
fn earth_half_orbit_lands_opposite_the_sun() {
    let mut system = sun_and_earth();
    system.update(182.625); // exactly half of 365.25 days

    let earth = &system.bodies[0];
    assert!(angle_diff(earth.phase, PI) < 1e-9, "phase = {}", earth.phase);

    let pos = earth.position();
    assert!((pos.x + 1.0).abs() < 1e-9, "x = {}", pos.x);
    assert!(pos.y.abs() < 1e-9, "y = {}", pos.y);
}

#[test]
fn split_updates_match_a_single_update() {
    let pairs = [(100.0, 82.625), (300.0, 500.0), (10.0, -350.7), (-20.0, -45.5)];

    for (t1, t2) in pairs {
        let mut split = sun_and_earth();
        split.update(t1);
        split.update(t2);

        let mut whole = sun_and_earth();
        whole.update(t1 + t2);

        let a = split.bodies[0].phase;
        let b = whole.bodies[0].phase;
        assert!(
            angle_diff(a, b) < 1e-9,
            "t1 = {t1}, t2 = {t2}: {a} vs {b}"
        );
    }
}

#[test]
fn central_body_never_advances() {
    let mut system = build_solar_system(&default_solar_bodies());
    system.update(1000.0);

    assert_eq!(system.central.phase, 0.0);
    assert_eq!(system.central.position(), starsim::Vec2::new(0.0, 0.0));
}

#[test]
fn negative_steps_rewind_and_wrap() {
    let mut system = sun_and_earth();
    system.update(-91.3125); // a quarter year backwards

    let phase = system.bodies[0].phase;
    assert!(
        (0.0..TAU).contains(&phase),
        "phase {phase} escaped [0, 2pi)"
    );
    assert!(angle_diff(phase, 1.5 * PI) < 1e-9, "phase = {phase}");
}

#[test]
fn time_elapsed_accumulates_signed_steps() {
    let mut system = sun_and_earth();
    system.update(30.0);
    system.update(365.0);
    system.update(-5.0);

    assert!((system.time_elapsed - 390.0).abs() < 1e-9);
}

#[test]
fn earth_velocity_matches_the_textbook_value() {
    let system = sun_and_earth();
    let v = system.bodies[0].velocity_kms();

    assert!((v - 29.79).abs() < 0.05, "Earth velocity = {v} km/s");
}

#[test]
fn central_body_velocity_is_zero() {
    let system = sun_and_earth();
    assert_eq!(system.central.velocity_kms(), 0.0);
}

#[test]
fn distance_between_aligned_bodies() {
    let mut system = SolarSystem::new(CelestialBody::new("Sun", 1.989e30, 0.0, 0.0, 696_340.0));
    system.add_body(CelestialBody::new("Earth", 5.972e24, 1.0, 365.25, 6_371.0));
    system.add_body(CelestialBody::new("Mars", 6.39e23, 1.52, 687.0, 3_389.5));

    // Both bodies start at phase 0 on the +x axis
    let d = system.distance_between(0, 1).unwrap();
    assert!((d - 0.52).abs() < 1e-9, "d = {d}");

    assert!(system.distance_between(0, 5).is_none());
}

// ==================================================================================
// Scenario building and configuration
// ==================================================================================

#[test]
fn binary_scenario_defaults_to_edge_on() {
    let cfg = BinaryConfig {
        inclination: None,
        ..BinaryConfig::default()
    };
    let scenario = BinaryScenario::build(cfg).unwrap();

    assert!((scenario.inclination_deg - 90.0).abs() < 1e-9);
    assert!((scenario.system.r1 - 2.0).abs() < 1e-9);
}

#[test]
fn default_solar_table_is_sun_centered() {
    let bodies = default_solar_bodies();
    let system = build_solar_system(&bodies);

    assert_eq!(system.central.name, "Sun");
    assert_eq!(system.bodies.len(), 6);
    assert_eq!(system.bodies[2].name, "Earth");
    assert!(system.bodies.iter().all(|b| b.orbital_period > 0.0));
}

#[test]
fn scenario_yaml_round_trips_into_runtime_types() {
    let yaml = r#"
binary:
  mass1: 2.0
  mass2: 1.0
  semi_major_axis: 6.0
  period: 500.0

bodies:
  - name: Sun
    mass: 1.989e30
    distance: 0.0
    orbital_period: 0.0
    radius: 696340.0
  - name: Earth
    mass: 5.972e24
    distance: 1.0
    orbital_period: 365.25
    radius: 6371.0
"#;

    let cfg: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();

    let binary = BinaryScenario::build(cfg.binary.unwrap()).unwrap();
    assert!((binary.system.r1 - 2.0).abs() < 1e-9);
    assert!((binary.system.r2 - 4.0).abs() < 1e-9);
    assert!((binary.inclination_deg - 90.0).abs() < 1e-9);

    let system = build_solar_system(&cfg.bodies.unwrap());
    assert_eq!(system.central.name, "Sun");
    assert_eq!(system.bodies.len(), 1);
}

// ==================================================================================
// ASCII rendering
// ==================================================================================

#[test]
fn ascii_grid_places_center_and_bodies() {
    // 11x11 grid, Earth one AU out on +x at scale 3 lands 3 cells right of center
    let markers = [('E', 1.0, 0.0)];
    let grid = render_top_down(&markers, 11, 3.0);

    let rows: Vec<&str> = grid.lines().collect();
    assert_eq!(rows.len(), 11);
    assert_eq!(rows[5].chars().nth(5), Some('*'));
    assert_eq!(rows[5].chars().nth(8), Some('E'));
}

#[test]
fn ascii_grid_drops_out_of_range_bodies() {
    let markers = [('J', 100.0, 100.0)];
    let grid = render_top_down(&markers, 11, 3.0);

    assert!(!grid.contains('J'));
    assert!(grid.contains('*'));
}
