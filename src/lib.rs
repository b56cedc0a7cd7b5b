pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;
pub mod error;

pub use simulation::binary::BinarySystem;
pub use simulation::bodies::{CelestialBody, Vec2};
pub use simulation::system::SolarSystem;
pub use simulation::scenario::{build_solar_system, BinaryScenario};
pub use simulation::constants::{AU_KM, AU_PER_DAY_KMS, H_ALPHA_NM, SPEED_OF_LIGHT_KMS};

pub use configuration::config::{default_solar_bodies, BinaryConfig, BodyConfig, ScenarioConfig};

pub use visualization::ascii::render_top_down;
pub use visualization::plot::{plot_orbits, plot_radial_velocities, plot_spectrum};

pub use benchmark::benchmark::{bench_sampling, bench_update};

pub use error::{SimError, SimResult};
