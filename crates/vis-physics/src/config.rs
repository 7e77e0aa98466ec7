//! Simulation configuration.
//!
//! Parameters for the fixed-timestep free-fall driver. Loadable from TOML;
//! missing keys fall back to the defaults in `vis_types::constants`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use vis_math::Vector;
use vis_types::constants::{DEFAULT_DT, DEFAULT_END_TIME, DEFAULT_MASS, GRAVITY};
use vis_types::{Scalar, VisError, VisResult};

/// Configuration for a single-body fixed-timestep run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Fixed timestep (seconds).
    pub timestep: Scalar,

    /// Simulated duration (seconds).
    pub end_time: Scalar,

    /// Gravity vector [gx, gy, gz] in m/s². Z is up.
    pub gravity: [Scalar; 3],

    /// Body mass (kg).
    pub mass: Scalar,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            timestep: DEFAULT_DT,
            end_time: DEFAULT_END_TIME,
            gravity: [0.0, 0.0, -GRAVITY],
            mass: DEFAULT_MASS,
        }
    }
}

impl SimulationConfig {
    /// Parses a config from TOML text and validates it.
    pub fn from_toml_str(text: &str) -> VisResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| VisError::Serialization(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> VisResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Serializes to TOML.
    pub fn to_toml_string(&self) -> VisResult<String> {
        toml::to_string(self).map_err(|e| VisError::Serialization(e.to_string()))
    }

    pub fn validate(&self) -> VisResult<()> {
        if !(self.timestep.is_finite() && self.timestep > 0.0) {
            return Err(VisError::InvalidConfig(format!(
                "timestep must be finite and > 0, got {}",
                self.timestep
            )));
        }
        if !(self.end_time.is_finite() && self.end_time >= 0.0) {
            return Err(VisError::InvalidConfig(format!(
                "end_time must be finite and >= 0, got {}",
                self.end_time
            )));
        }
        let steps = (self.end_time / self.timestep).round();
        if !(steps.is_finite() && steps < u32::MAX as Scalar) {
            return Err(VisError::InvalidConfig(format!(
                "end_time / timestep = {steps} steps exceeds the {} step limit",
                u32::MAX
            )));
        }
        if !self.gravity_vector().is_finite() {
            return Err(VisError::InvalidConfig(format!(
                "gravity must be finite, got {:?}",
                self.gravity
            )));
        }
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(VisError::InvalidMass(self.mass));
        }
        Ok(())
    }

    pub fn gravity_vector(&self) -> Vector {
        Vector::from(self.gravity)
    }

    /// Number of fixed steps needed to reach `end_time`.
    ///
    /// Only meaningful for a config that passed [`validate`](Self::validate).
    pub fn step_count(&self) -> u32 {
        (self.end_time / self.timestep).round() as u32
    }
}
