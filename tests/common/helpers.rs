use nalgebra::Vector3;
use skyloop::{
    components::{AircraftConfig, ControlInput, Motion, WorldEntity},
    resources::{SimulationConfig, WorldConfig},
};

pub const TEST_DT: f64 = 1.0 / 60.0;
pub const TEST_SEED: u64 = 1234;

/// Default aircraft with an explicit start point
pub fn create_test_aircraft_config() -> AircraftConfig {
    AircraftConfig {
        start_position: Vector3::new(0.0, 500.0, 0.0),
        ..Default::default()
    }
}

/// A smaller, seeded world
pub fn create_test_world_config() -> WorldConfig {
    let mut config = WorldConfig::default().with_seed(TEST_SEED);
    config.clouds.count = 20;
    config.trees.count = 10;
    config.mountains.count = 3;
    config
}

/// Deterministic configuration: fixed step, seeded world, scripted input
pub fn create_test_simulation_config(input: ControlInput) -> SimulationConfig {
    let mut config = SimulationConfig {
        aircraft: create_test_aircraft_config(),
        world: create_test_world_config(),
        ..Default::default()
    };
    config.frame.fixed_dt = Some(TEST_DT);
    config.input = skyloop::resources::InputConfig::scripted(input);
    config.telemetry.log_interval = 0;
    config
}

/// Move an entity, keeping a bird's flock centre consistent with its offset
pub fn place_entity(entity: &mut WorldEntity, position: Vector3<f64>) {
    entity.position = position;
    if let Motion::Bird { centre, offset, .. } = &mut entity.motion {
        *centre = position - *offset;
    }
}
