pub mod config;
pub mod state;

use bevy::prelude::*;

pub use config::AircraftConfig;
pub use state::{AircraftState, EulerAngles, BODY_FORWARD, BODY_UP};

/// Marks the aircraft flown with the claimed input source and followed by the camera.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct PlayerAircraft;
