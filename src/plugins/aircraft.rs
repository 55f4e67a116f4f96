use bevy::prelude::*;

use crate::components::{AircraftConfig, AircraftState, ForceBalance, PlayerAircraft};
use crate::plugins::{FrameSet, StartupStage};
use crate::systems::{aircraft_transform_system, flight_system, to_quat, to_vec3};

/// Spawns the player's aircraft and flies it every frame.
pub struct AircraftPlugin {
    config: AircraftConfig,
}

impl AircraftPlugin {
    pub fn new(config: AircraftConfig) -> Self {
        Self { config }
    }

    fn setup_aircraft(mut commands: Commands, config: AircraftConfig) {
        let state = AircraftState::at_rest(config.start_position);
        info!(
            "Spawning aircraft at {:?}, mass {} kg",
            config.start_position, config.mass
        );
        commands.spawn((
            Transform::from_translation(to_vec3(&state.position))
                .with_rotation(to_quat(state.orientation())),
            state,
            config,
            ForceBalance::default(),
            PlayerAircraft,
            Name::new("Player Aircraft"),
        ));
    }
}

impl Default for AircraftPlugin {
    fn default() -> Self {
        Self::new(AircraftConfig::default())
    }
}

impl Plugin for AircraftPlugin {
    fn build(&self, app: &mut App) {
        let config = self.config.clone();
        app.add_systems(
            Startup,
            (move |commands: Commands| Self::setup_aircraft(commands, config.clone()))
                .in_set(StartupStage::SpawnAircraft),
        )
        .add_systems(
            Update,
            (flight_system, aircraft_transform_system)
                .chain()
                .in_set(FrameSet::Flight),
        );
    }
}
