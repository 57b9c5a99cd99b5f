use crate::engine::{Gravity, G_SIMPLIFIED};
use crate::error::ConfigError;
use crate::prediction::PredictionSettings;

/// Runtime settings shared by the driver and the core
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub g: f64,
    pub softening: f64,
    pub dt: f64,
    pub preview_steps: usize,
    pub preview_stride: usize,
    pub zoom_factor: f64, // multiplicative, per key press
    pub pan_step: f64,    // screen cells per key press
    pub initial_zoom: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            g: G_SIMPLIFIED,
            softening: 0.0,
            dt: 0.1,
            preview_steps: 1000,
            preview_stride: 5,
            zoom_factor: 1.1,
            pan_step: 10.0,
            initial_zoom: 1.0,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.gravity()?;

        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(ConfigError::NonPositiveTimeStep(self.dt));
        }
        if !(self.initial_zoom.is_finite() && self.initial_zoom > 0.0) {
            return Err(ConfigError::NonPositiveZoom(self.initial_zoom));
        }
        if !(self.zoom_factor.is_finite() && self.zoom_factor > 1.0) {
            return Err(ConfigError::invalid(format!(
                "zoom factor must be greater than 1, got {}",
                self.zoom_factor
            )));
        }
        if !(self.pan_step.is_finite() && self.pan_step > 0.0) {
            return Err(ConfigError::invalid(format!(
                "pan step must be positive, got {}",
                self.pan_step
            )));
        }
        Ok(())
    }

    pub fn gravity(&self) -> Result<Gravity, ConfigError> {
        Gravity::new(self.g, self.softening)
    }

    pub fn prediction(&self) -> PredictionSettings {
        PredictionSettings {
            steps: self.preview_steps,
            dt: self.dt,
            stride: self.preview_stride,
        }
    }
}
