//! Error types for the simulation core

use thiserror::Error;

/// Result type for simulation operations
pub type SimResult<T> = Result<T, SimError>;

/// Errors that can occur in the simulation core
///
/// Construction-time validation is the only rejection path in the orbital
/// model itself; everything after that is total over the numeric domain.
/// Rendering adds the file-write failures of the PNG encoder.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("invalid parameter `{name}` = {value}: must be strictly positive")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("plot output error: {0}")]
    Render(#[from] image::ImageError),
}
