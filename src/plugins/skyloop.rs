use bevy::prelude::*;

use crate::plugins::{
    AircraftPlugin, CameraPlugin, EnvironmentPlugin, FramePlugin, StartupSequencePlugin,
    TelemetryPlugin,
};
use crate::resources::{InputSourceHandle, SimulationConfig};

/// The whole simulation: frame driver, aircraft, world, camera and telemetry.
pub struct SkyloopPlugin {
    config: SimulationConfig,
}

impl SkyloopPlugin {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }
}

impl Default for SkyloopPlugin {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

impl Plugin for SkyloopPlugin {
    fn build(&self, app: &mut App) {
        let config = &self.config;
        app.insert_resource(config.clone()).add_plugins((
            StartupSequencePlugin,
            FramePlugin::new(config.frame, InputSourceHandle::new(&config.input)),
            AircraftPlugin::new(config.aircraft.clone()),
            EnvironmentPlugin::with_config(config.world.clone()),
            CameraPlugin::new(config.camera.clone()),
            TelemetryPlugin::new(config.telemetry),
        ));
    }
}
