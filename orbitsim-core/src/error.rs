//! Configuration errors for orbitsim
//!
//! Everything the core rejects is rejected here, at the boundary. Once a
//! `Body`, `Camera` or `Gravity` exists it is valid, and the integrator,
//! projector and predictor never fail.

use thiserror::Error;

/// Invalid input handed to the core by a driver or preset
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("body '{name}' has non-positive mass {mass}")]
    NonPositiveMass { name: String, mass: f64 },

    #[error("body '{name}' has invalid radius {radius}")]
    InvalidRadius { name: String, radius: f64 },

    #[error("body '{name}' has a non-finite position or velocity")]
    NonFiniteState { name: String },

    #[error("zoom must be positive, got {0}")]
    NonPositiveZoom(f64),

    #[error("time step must be positive, got {0}")]
    NonPositiveTimeStep(f64),

    #[error("invalid gravity settings: {0}")]
    InvalidGravity(String),

    #[error("field '{field}' is not a number: '{value}'")]
    InvalidField { field: &'static str, value: String },

    #[error("unknown preset '{0}'")]
    UnknownPreset(String),

    #[error("{0}")]
    Invalid(String),
}

impl ConfigError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}
