use bevy::prelude::*;

/// Setup order. The camera snaps to the aircraft, so the aircraft must exist first.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum StartupStage {
    SpawnAircraft,
    SpawnCamera,
    GenerateWorld,
}

pub struct StartupSequencePlugin;

impl Plugin for StartupSequencePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Startup,
            (
                StartupStage::SpawnAircraft,
                StartupStage::SpawnCamera,
                StartupStage::GenerateWorld,
            )
                .chain(),
        );
    }
}
