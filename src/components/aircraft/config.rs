use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::resources::ConfigError;
use crate::utils::DEFAULT_MAX_DEFLECTION;

/// Mass and aerodynamic parameters of the player's aircraft.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AircraftConfig {
    /// Total mass (kg).
    pub mass: f64,
    /// Drag force per unit speed squared.
    pub drag_coefficient: f64,
    /// Lift force per unit speed squared.
    pub lift_coefficient: f64,
    /// Engine force at full throttle (N).
    pub engine_force: f64,
    /// Attitude rate at full stick deflection (rad/s).
    pub max_deflection: f64,
    /// Where the aircraft is spawned (m).
    pub start_position: Vector3<f64>,
    /// Lowest altitude the aircraft may reach. `None` lets it pass through the ground.
    pub altitude_floor: Option<f64>,
}

impl Default for AircraftConfig {
    fn default() -> Self {
        Self {
            mass: 1000.0,
            drag_coefficient: 0.1,
            lift_coefficient: 2.0,
            engine_force: 10000.0,
            max_deflection: DEFAULT_MAX_DEFLECTION,
            start_position: Vector3::new(0.0, 100.0, 0.0),
            altitude_floor: None,
        }
    }
}

impl AircraftConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "aircraft.mass".to_string(),
                value: self.mass.to_string(),
            });
        }
        for (name, value) in [
            ("aircraft.drag_coefficient", self.drag_coefficient),
            ("aircraft.lift_coefficient", self.lift_coefficient),
            ("aircraft.engine_force", self.engine_force),
            ("aircraft.max_deflection", self.max_deflection),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidParameter {
                    name: name.to_string(),
                    value: value.to_string(),
                });
            }
        }
        if !self.start_position.iter().all(|c| c.is_finite()) {
            return Err(ConfigError::InvalidParameter {
                name: "aircraft.start_position".to_string(),
                value: format!("{:?}", self.start_position),
            });
        }
        Ok(())
    }
}
