use bevy::prelude::*;

use crate::components::{AircraftState, ControlInput, PlayerAircraft};
use crate::resources::{
    FrameClock, InputSourceHandle, Telemetry, TelemetryConfig, TerrainHeightField, WorldEntities,
};

#[allow(clippy::too_many_arguments)]
pub fn telemetry_system(
    mut telemetry: ResMut<Telemetry>,
    config: Res<TelemetryConfig>,
    aircraft: Query<&AircraftState, With<PlayerAircraft>>,
    input: Res<ControlInput>,
    handle: Res<InputSourceHandle>,
    clock: Res<FrameClock>,
    terrain: Option<Res<TerrainHeightField>>,
    world: Option<Res<WorldEntities>>,
) {
    if !config.enabled {
        return;
    }
    telemetry.frame = clock.frame_count();
    telemetry.elapsed = clock.elapsed_seconds();
    telemetry.input = *input;
    telemetry.device_connected = handle.is_scripted() || handle.claimed().is_some();
    telemetry.world_entities = world.map_or(0, |w| w.len());
    if let Ok(state) = aircraft.get_single() {
        let terrain = terrain.map(|t| *t).unwrap_or_default();
        telemetry.record_aircraft(state, &terrain);
    }

    if config.log_interval > 0 && telemetry.frame % config.log_interval == 0 {
        info!("{}", telemetry.status_line());
        debug!(
            "{}",
            telemetry
                .to_json()
                .unwrap_or_else(|e| format!("telemetry snapshot failed: {e}"))
        );
    }
}
