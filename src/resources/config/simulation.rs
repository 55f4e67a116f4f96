use super::{
    camera::CameraConfig, frame::FrameConfig, input::InputConfig, telemetry::TelemetryConfig,
    world::WorldConfig,
};
use crate::components::AircraftConfig;
use crate::resources::errors::Result;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything needed to build a simulation, loadable from YAML.
#[derive(Resource, Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub aircraft: AircraftConfig,
    pub camera: CameraConfig,
    pub world: WorldConfig,
    pub frame: FrameConfig,
    pub input: InputConfig,
    pub telemetry: TelemetryConfig,
}

impl SimulationConfig {
    /// Read and validate a YAML file. Missing sections take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.aircraft.validate()?;
        self.camera.validate()?;
        self.world.validate()?;
        self.frame.validate()?;
        self.input.validate()
    }
}
