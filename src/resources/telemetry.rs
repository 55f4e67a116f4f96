use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::{AircraftState, ControlInput};
use crate::resources::terrain::TerrainHeightField;
use crate::utils::{rad_to_deg, M_TO_FEET, MS_TO_KNOTS};

/// Flight status for a HUD or an external observer, refreshed every frame.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Telemetry {
    pub frame: u64,
    /// Simulated time [s]
    pub elapsed: f64,
    pub position: [f64; 3],
    pub velocity: [f64; 3],
    /// [m/s]
    pub speed: f64,
    pub speed_knots: f64,
    /// World Y [m]
    pub altitude: f64,
    pub altitude_feet: f64,
    /// Clearance over the terrain directly below [m]
    pub height_above_ground: f64,
    /// Pitch, yaw and roll [deg]
    pub attitude_deg: [f64; 3],
    pub input: ControlInput,
    pub device_connected: bool,
    pub world_entities: usize,
}

impl Telemetry {
    pub fn record_aircraft(&mut self, state: &AircraftState, terrain: &TerrainHeightField) {
        let attitude = state.attitude();
        self.position = state.position.into();
        self.velocity = state.velocity.into();
        self.speed = state.speed();
        self.speed_knots = self.speed * MS_TO_KNOTS;
        self.altitude = state.altitude();
        self.altitude_feet = self.altitude * M_TO_FEET;
        self.height_above_ground = terrain.height_above_ground(&state.position);
        self.attitude_deg = [
            rad_to_deg(attitude.pitch),
            rad_to_deg(attitude.yaw),
            rad_to_deg(attitude.roll),
        ];
    }

    /// One-line summary for the log.
    pub fn status_line(&self) -> String {
        format!(
            "t={:.1}s speed={:.2}kt alt={:.2}ft agl={:.1}m pitch={:.1} yaw={:.1} roll={:.1} throttle={:.2}",
            self.elapsed,
            self.speed_knots,
            self.altitude_feet,
            self.height_above_ground,
            self.attitude_deg[0],
            self.attitude_deg[1],
            self.attitude_deg[2],
            self.input.throttle,
        )
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
