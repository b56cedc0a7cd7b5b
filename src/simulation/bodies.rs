//! Core body state for the solar-system model.
//!
//! Defines the `CelestialBody` struct:
//! - fixed orbital parameters (distance, period) set at construction,
//! - a single mutable `phase` angle advanced by `advance`,
//! - position/velocity readouts derived on demand.
//!
//! Positions use the shared `Vec2` alias.

use nalgebra::Vector2;

use std::f64::consts::TAU;

use crate::simulation::constants::{AU_KM, SECONDS_PER_DAY};

pub type Vec2 = Vector2<f64>;

/// A body on a fixed circular orbit around the system center.
///
/// `mass` and `radius` are carried for display only; the kinematics depend
/// solely on `distance` and `orbital_period`. A non-positive
/// `orbital_period` marks the immobile central body.
#[derive(Debug, Clone)]
pub struct CelestialBody {
    pub name: String,
    pub mass: f64, // kg, informational
    pub distance: f64, // orbital radius from the center (AU)
    pub orbital_period: f64, // days; <= 0 marks the non-orbiting central body
    pub radius: f64, // km, informational
    pub phase: f64, // position along the orbit (radians, kept in [0, 2pi))
}

impl CelestialBody {
    /// New body at phase 0 (on the +x axis)
    pub fn new(
        name: impl Into<String>,
        mass: f64,
        distance: f64,
        orbital_period: f64,
        radius: f64,
    ) -> Self {
        Self {
            name: name.into(),
            mass,
            distance,
            orbital_period,
            radius,
            phase: 0.0,
        }
    }

    /// Advance the orbital phase by `dt` days (negative `dt` rewinds).
    ///
    /// Bodies without a positive period never move; the early return also
    /// guards the 2pi/T division.
    pub fn advance(&mut self, dt: f64) {
        if self.orbital_period <= 0.0 {
            return;
        }
        let angular_velocity = TAU / self.orbital_period;
        // rem_euclid keeps the phase in [0, 2pi) for either sign of dt
        self.phase = (self.phase + angular_velocity * dt).rem_euclid(TAU);
    }

    /// Current position in AU
    pub fn position(&self) -> Vec2 {
        Vec2::new(
            self.distance * self.phase.cos(),
            self.distance * self.phase.sin(),
        )
    }

    /// Constant orbital speed in km/s: v = 2 pi r / T.
    /// The central body reports 0, it does not orbit.
    pub fn velocity_kms(&self) -> f64 {
        if self.orbital_period <= 0.0 {
            return 0.0;
        }
        let distance_km = self.distance * AU_KM;
        let period_seconds = self.orbital_period * SECONDS_PER_DAY;
        TAU * distance_km / period_seconds
    }
}
