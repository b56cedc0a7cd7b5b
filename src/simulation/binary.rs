//! Two-body circular-orbit engine.
//!
//! `BinarySystem` holds the input parameters (masses, separation, period)
//! and the quantities derived once at construction:
//! - center-of-mass partition `r1`/`r2`,
//! - angular velocity `omega`,
//! - per-star orbital speeds in km/s.
//!
//! Per-call operations (positions, radial velocities, Doppler shift) are
//! pure functions of time and are total over all real inputs.

use std::f64::consts::PI;

use crate::error::{SimError, SimResult};
use crate::simulation::bodies::Vec2;
use crate::simulation::constants::{AU_PER_DAY_KMS, SPEED_OF_LIGHT_KMS};

/// A binary star pair on mutual circular orbits about their center of mass.
///
/// Units: masses in solar masses, `semi_major_axis` in AU (here the fixed
/// separation of the two stars), `period` in days.
#[derive(Debug, Clone)]
pub struct BinarySystem {
    pub mass1: f64, // solar masses
    pub mass2: f64, // solar masses
    pub semi_major_axis: f64, // AU, separation r1 + r2
    pub period: f64, // days
    pub total_mass: f64, // mass1 + mass2
    pub r1: f64, // orbital radius of star 1 about the center of mass (AU)
    pub r2: f64, // orbital radius of star 2 (AU)
    pub omega: f64, // angular velocity (rad/day)
    pub v1_kms: f64, // orbital speed of star 1 (km/s)
    pub v2_kms: f64, // orbital speed of star 2 (km/s)
}

impl BinarySystem {
    /// Validate the inputs and compute the derived orbital quantities.
    ///
    /// Every parameter must be strictly positive; the first offender is
    /// reported in the error, nothing is clamped.
    pub fn new(mass1: f64, mass2: f64, semi_major_axis: f64, period: f64) -> SimResult<Self> {
        validate_positive("mass1", mass1)?;
        validate_positive("mass2", mass2)?;
        validate_positive("semi_major_axis", semi_major_axis)?;
        validate_positive("period", period)?;

        let total_mass = mass1 + mass2;

        // Center-of-mass partition: each star orbits at a radius scaled by
        // the *other* star's mass share, so m1 * r1 = m2 * r2 and the
        // heavier star stays closer in
        let r1 = semi_major_axis * mass2 / total_mass;
        let r2 = semi_major_axis * mass1 / total_mass;

        // One full turn per period
        let omega = 2.0 * PI / period;

        // Circular-orbit speeds v = r * omega, converted from AU/day to
        // km/s for the spectroscopic quantities
        let v1_kms = r1 * omega * AU_PER_DAY_KMS;
        let v2_kms = r2 * omega * AU_PER_DAY_KMS;

        Ok(Self {
            mass1,
            mass2,
            semi_major_axis,
            period,
            total_mass,
            r1,
            r2,
            omega,
            v1_kms,
            v2_kms,
        })
    }

    /// Positions of both stars at time `t` (days), in AU.
    ///
    /// The stars sit on opposite sides of the origin (the center of mass)
    /// at all times. `t` may be negative or exceed the period; the phase
    /// wraps through the trig functions.
    pub fn positions_at(&self, t: f64) -> (Vec2, Vec2) {
        let theta = self.omega * t;
        let (sin_t, cos_t) = theta.sin_cos();
        let p1 = Vec2::new(self.r1 * cos_t, self.r1 * sin_t);
        let p2 = Vec2::new(-self.r2 * cos_t, -self.r2 * sin_t);
        (p1, p2)
    }

    /// Positions sampled at each of `times`, for plotting
    pub fn sample_positions(&self, times: &[f64]) -> Vec<(Vec2, Vec2)> {
        times.iter().map(|&t| self.positions_at(t)).collect()
    }

    /// Radial velocities of both stars at time `t` in km/s.
    ///
    /// The line-of-sight component is `v * sin(theta) * sin(i)` where `i`
    /// is the inclination in degrees (90 = edge-on, 0 = face-on). Star 2
    /// carries an explicit half-turn phase offset, so the two stars always
    /// move in exactly opposite radial directions.
    pub fn radial_velocities_at(&self, t: f64, inclination_deg: f64) -> (f64, f64) {
        let theta = self.omega * t;
        let sin_inc = inclination_deg.to_radians().sin();
        let rv1 = self.v1_kms * theta.sin() * sin_inc;
        let rv2 = self.v2_kms * (theta + PI).sin() * sin_inc;
        (rv1, rv2)
    }

    /// Radial velocities sampled at each of `times`, for plotting
    pub fn sample_radial_velocities(&self, times: &[f64], inclination_deg: f64) -> Vec<(f64, f64)> {
        times
            .iter()
            .map(|&t| self.radial_velocities_at(t, inclination_deg))
            .collect()
    }

    /// Doppler-shifted wavelength for a radial velocity in km/s.
    ///
    /// Non-relativistic: `rest * (1 + rv / c)`. Receding (positive) motion
    /// shifts red, approaching shifts blue.
    pub fn doppler_shift(&self, rv_kms: f64, rest_nm: f64) -> f64 {
        rest_nm * (1.0 + rv_kms / SPEED_OF_LIGHT_KMS)
    }
}

/// Reject non-positive (or NaN) construction parameters
fn validate_positive(name: &'static str, value: f64) -> SimResult<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidParameter { name, value })
    }
}
