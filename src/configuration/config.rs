//! Configuration types for loading scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario file may carry either or both sections:
//!
//! - [`BinaryConfig`] – parameters for a binary star pair
//! - [`BodyConfig`]   – one entry per solar-system body
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! binary:
//!   mass1: 1.5            # solar masses
//!   mass2: 1.0            # solar masses
//!   semi_major_axis: 5.0  # AU
//!   period: 365.0         # days
//!   inclination: 90.0     # degrees, 90 = edge-on (optional)
//!
//! bodies:
//!   - name: Sun
//!     mass: 1.989e30      # kg
//!     distance: 0.0       # AU; orbital_period 0 marks the center
//!     orbital_period: 0.0 # days
//!     radius: 696340.0    # km
//!   - name: Earth
//!     mass: 5.972e24
//!     distance: 1.0
//!     orbital_period: 365.25
//!     radius: 6371.0
//! ```
//!
//! The scenario builders map this configuration into the runtime structs;
//! missing sections fall back to the named defaults below.

use serde::Deserialize;

/// Parameters for a binary star pair
#[derive(Deserialize, Debug, Clone)]
pub struct BinaryConfig {
    pub mass1: f64, // mass of star 1 in solar masses
    pub mass2: f64, // mass of star 2 in solar masses
    pub semi_major_axis: f64, // separation of the two stars in AU
    pub period: f64, // orbital period in days
    pub inclination: Option<f64>, // viewing inclination in degrees, defaults to edge-on
}

impl Default for BinaryConfig {
    fn default() -> Self {
        Self {
            mass1: 1.5,
            mass2: 1.0,
            semi_major_axis: 5.0,
            period: 365.0,
            inclination: Some(90.0),
        }
    }
}

/// Configuration for a single solar-system body
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String, // display name
    pub mass: f64,    // mass in kg (informational)
    pub distance: f64, // orbital radius from the center in AU
    pub orbital_period: f64, // days; <= 0 marks the immobile central body
    pub radius: f64,  // body radius in km (informational)
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub binary: Option<BinaryConfig>, // binary star section
    pub bodies: Option<Vec<BodyConfig>>, // solar-system section
}

/// The classroom default solar system: the Sun plus the six planets that
/// fit a readable top-down view.
pub fn default_solar_bodies() -> Vec<BodyConfig> {
    let raw: [(&str, f64, f64, f64, f64); 7] = [
        ("Sun", 1.989e30, 0.0, 0.0, 696_340.0),
        ("Mercury", 3.285e23, 0.39, 88.0, 2_439.7),
        ("Venus", 4.867e24, 0.72, 225.0, 6_051.8),
        ("Earth", 5.972e24, 1.0, 365.25, 6_371.0),
        ("Mars", 6.39e23, 1.52, 687.0, 3_389.5),
        ("Jupiter", 1.898e27, 5.2, 4_333.0, 69_911.0),
        ("Saturn", 5.683e26, 9.54, 10_759.0, 58_232.0),
    ];

    raw.iter()
        .map(|&(name, mass, distance, orbital_period, radius)| BodyConfig {
            name: name.to_string(),
            mass,
            distance,
            orbital_period,
            radius,
        })
        .collect()
}
