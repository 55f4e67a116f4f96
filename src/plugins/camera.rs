use bevy::prelude::*;

use crate::components::{AircraftState, PlayerAircraft};
use crate::plugins::{FrameSet, StartupStage};
use crate::resources::CameraConfig;
use crate::systems::{camera_follow_system, camera_transform_system, snap_camera_system};

/// Spawns the follow camera and keeps it trailing the player aircraft.
pub struct CameraPlugin {
    config: CameraConfig,
}

impl CameraPlugin {
    pub fn new(config: CameraConfig) -> Self {
        Self { config }
    }

    fn spawn_camera(
        mut commands: Commands,
        config: &CameraConfig,
        aircraft: Query<&AircraftState, With<PlayerAircraft>>,
    ) {
        let mut camera = config.build();
        match aircraft.get_single() {
            Ok(state) => camera.snap_to_aircraft(state),
            Err(_) => warn!("No player aircraft found when spawning camera!"),
        }
        commands.spawn((camera, Transform::default(), Name::new("Follow Camera")));
    }
}

impl Default for CameraPlugin {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        let config = self.config.clone();
        app.add_systems(
            Startup,
            (move |commands: Commands, aircraft: Query<&AircraftState, With<PlayerAircraft>>| {
                Self::spawn_camera(commands, &config, aircraft)
            })
            .in_set(StartupStage::SpawnCamera),
        )
        .add_systems(
            Update,
            (snap_camera_system, camera_follow_system, camera_transform_system)
                .chain()
                .in_set(FrameSet::Camera),
        );
    }
}
