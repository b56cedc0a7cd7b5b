//! Build fully-initialized runtime scenarios from configuration.
//!
//! Takes the YAML-facing config types and produces runtime values:
//! - `BinaryScenario` bundling a validated [`BinarySystem`] with the
//!   viewing inclination,
//! - a [`SolarSystem`] with all bodies at phase 0 and t = 0.
//!
//! These are consumed by the CLI and the visualization collaborators.

use crate::configuration::config::{BinaryConfig, BodyConfig};
use crate::error::SimResult;
use crate::simulation::binary::BinarySystem;
use crate::simulation::bodies::CelestialBody;
use crate::simulation::system::SolarSystem;

/// A validated binary star system plus how we look at it.
///
/// The inclination is a property of the observation, not of the orbit, so
/// it lives here rather than in [`BinarySystem`].
#[derive(Debug, Clone)]
pub struct BinaryScenario {
    pub system: BinarySystem,
    pub inclination_deg: f64,
}

impl BinaryScenario {
    pub fn build(cfg: BinaryConfig) -> SimResult<Self> {
        // Validation happens in the constructor; the config is just numbers
        let system = BinarySystem::new(cfg.mass1, cfg.mass2, cfg.semi_major_axis, cfg.period)?;

        Ok(Self {
            system,
            inclination_deg: cfg.inclination.unwrap_or(90.0),
        })
    }
}

/// Map body configs into a runtime [`SolarSystem`].
///
/// The first entry without a positive orbital period becomes the central
/// body; every other entry joins the orbiting list in order. A scenario
/// with no central entry gets the default Sun.
pub fn build_solar_system(cfgs: &[BodyConfig]) -> SolarSystem {
    let mut central: Option<CelestialBody> = None;
    let mut orbiting = Vec::new();

    for bc in cfgs {
        let body = CelestialBody::new(
            bc.name.clone(),
            bc.mass,
            bc.distance,
            bc.orbital_period,
            bc.radius,
        );
        if central.is_none() && bc.orbital_period <= 0.0 {
            central = Some(body);
        } else {
            orbiting.push(body);
        }
    }

    let central =
        central.unwrap_or_else(|| CelestialBody::new("Sun", 1.989e30, 0.0, 0.0, 696_340.0));

    let mut system = SolarSystem::new(central);
    for body in orbiting {
        system.add_body(body);
    }
    system
}
