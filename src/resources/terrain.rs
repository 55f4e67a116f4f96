use bevy::prelude::*;
use nalgebra::Vector3;

use crate::resources::config::TerrainConfig;

/// Analytic ground surface shared by scenery placement and telemetry.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct TerrainHeightField {
    pub amplitude: f64,
    pub wavelength: f64,
}

impl Default for TerrainHeightField {
    fn default() -> Self {
        Self::new(&TerrainConfig::default())
    }
}

impl TerrainHeightField {
    pub fn new(config: &TerrainConfig) -> Self {
        Self {
            amplitude: config.amplitude,
            wavelength: config.wavelength,
        }
    }

    // Ground height at a horizontal position
    pub fn height_at(&self, x: f64, z: f64) -> f64 {
        self.amplitude * (x / self.wavelength).sin() * (z / self.wavelength).cos()
    }

    /// Same x and z, y moved onto the ground.
    pub fn seat(&self, position: &Vector3<f64>) -> Vector3<f64> {
        Vector3::new(position.x, self.height_at(position.x, position.z), position.z)
    }

    /// Clearance of `position` over the ground below it. Negative when underground.
    pub fn height_above_ground(&self, position: &Vector3<f64>) -> f64 {
        position.y - self.height_at(position.x, position.z)
    }
}
