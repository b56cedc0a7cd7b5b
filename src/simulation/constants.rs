//! Physical constants and unit conversions
//!
//! The simulation works in teaching-friendly units:
//! - Distance: AU
//! - Time: days
//! - Mass: solar masses (binary) or kg (solar-system bodies, informational)
//! - Reported speeds: km/s

/// Kilometers per astronomical unit
pub const AU_KM: f64 = 149_597_870.7;

/// Speed of light in km/s
pub const SPEED_OF_LIGHT_KMS: f64 = 299_792.458;

/// 1 AU/day expressed in km/s
pub const AU_PER_DAY_KMS: f64 = 1731.5;

/// Seconds per day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Rest wavelength of the H-alpha line in nm, the default spectral line
pub const H_ALPHA_NM: f64 = 656.3;
