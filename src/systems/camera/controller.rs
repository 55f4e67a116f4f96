use bevy::prelude::*;

use crate::components::{AircraftState, FollowCamera, PlayerAircraft};
use crate::resources::FrameClock;

/// Ease every follow camera toward its target around the player aircraft.
pub fn camera_follow_system(
    mut cameras: Query<&mut FollowCamera>,
    aircraft: Query<&AircraftState, With<PlayerAircraft>>,
    clock: Res<FrameClock>,
) {
    let Ok(state) = aircraft.get_single() else {
        return;
    };
    let dt = clock.delta_seconds();
    for mut camera in cameras.iter_mut() {
        camera.follow(state, dt);
    }
}

/// Place a freshly spawned camera directly on its target.
pub fn snap_camera_system(
    mut cameras: Query<&mut FollowCamera, Added<FollowCamera>>,
    aircraft: Query<&AircraftState, With<PlayerAircraft>>,
) {
    match aircraft.get_single() {
        Ok(state) => {
            for mut camera in cameras.iter_mut() {
                camera.snap_to_aircraft(state);
            }
        }
        Err(_) if !cameras.is_empty() => {
            warn!("No player aircraft to snap the camera to");
        }
        Err(_) => {}
    }
}
