use bevy::prelude::*;

use crate::plugins::FrameSet;
use crate::resources::{Telemetry, TelemetryConfig};
use crate::systems::telemetry_system;

pub struct TelemetryPlugin {
    config: TelemetryConfig,
}

impl TelemetryPlugin {
    pub fn new(config: TelemetryConfig) -> Self {
        Self { config }
    }
}

impl Default for TelemetryPlugin {
    fn default() -> Self {
        Self::new(TelemetryConfig::default())
    }
}

impl Plugin for TelemetryPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config)
            .init_resource::<Telemetry>()
            .add_systems(Update, telemetry_system.in_set(FrameSet::Telemetry));
    }
}
