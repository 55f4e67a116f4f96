use bevy::prelude::*;

use crate::plugins::{FrameSet, StartupStage};
use crate::resources::{TerrainHeightField, WorldConfig, WorldEntities};
use crate::systems::world_system;
use crate::utils::RngManager;

/// Generates the ambient world and advances it every frame.
pub struct EnvironmentPlugin {
    pub config: Option<WorldConfig>,
}

impl EnvironmentPlugin {
    pub fn new() -> Self {
        Self { config: None }
    }

    pub fn with_config(config: WorldConfig) -> Self {
        Self {
            config: Some(config),
        }
    }

    fn setup_world(mut commands: Commands, config: Option<WorldConfig>) {
        let config = config.unwrap_or_default();
        let rng = config
            .seed
            .map(RngManager::new)
            .unwrap_or_else(RngManager::from_entropy);

        let terrain = TerrainHeightField::new(&config.terrain);
        let world = WorldEntities::generate(&config, &terrain, &rng);
        info!(
            "Generated {} world entities from seed {}",
            world.len(),
            rng.master_seed()
        );

        commands.insert_resource(terrain);
        commands.insert_resource(world);
    }

    fn setup_world_with_initial(
        config: Option<WorldConfig>,
    ) -> impl FnMut(Commands) + Send + Sync + 'static {
        move |commands: Commands| {
            Self::setup_world(commands, config.clone());
        }
    }
}

impl Default for EnvironmentPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for EnvironmentPlugin {
    fn build(&self, app: &mut App) {
        let config = self.config.clone();
        app.add_systems(
            Startup,
            Self::setup_world_with_initial(config).in_set(StartupStage::GenerateWorld),
        )
        .add_systems(
            Update,
            world_system
                .run_if(resource_exists::<WorldEntities>)
                .in_set(FrameSet::World),
        );
    }
}
