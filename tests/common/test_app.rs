use bevy::prelude::*;
use skyloop::{
    components::{AircraftConfig, ControlInput},
    plugins::SkyloopPlugin,
    resources::{CameraConfig, InputConfig, SimulationConfig, WorldConfig},
};

use super::helpers::create_test_simulation_config;

// Builder for creating a test application with customizable configuration
pub struct TestAppBuilder {
    config: SimulationConfig,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            config: create_test_simulation_config(ControlInput::neutral()),
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_aircraft(mut self, config: AircraftConfig) -> Self {
        self.config.aircraft = config;
        self
    }

    pub fn with_camera(mut self, config: CameraConfig) -> Self {
        self.config.camera = config;
        self
    }

    pub fn with_world(mut self, config: WorldConfig) -> Self {
        self.config.world = config;
        self
    }

    pub fn with_input(mut self, input: ControlInput) -> Self {
        self.config.input = InputConfig::scripted(input);
        self
    }

    pub fn with_gamepad_input(mut self) -> Self {
        self.config.input = InputConfig::default();
        self
    }

    pub fn with_fixed_dt(mut self, dt: f64) -> Self {
        self.config.frame.fixed_dt = Some(dt);
        self
    }

    pub fn with_max_dt(mut self, max_dt: f64) -> Self {
        self.config.frame.max_dt = max_dt;
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();

        app.add_plugins(MinimalPlugins)
            .add_plugins(SkyloopPlugin::new(self.config));

        // Run an initial update to initialize everything
        app.update();

        TestApp { app }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.update();
        }
    }

    pub fn run_frame(&mut self) {
        self.app.update();
    }

    pub fn get_state<T: Resource>(&self) -> Option<&T> {
        self.app.world().get_resource::<T>()
    }

    pub fn get_state_mut<T: Resource>(&mut self) -> Option<Mut<T>> {
        self.app.world_mut().get_resource_mut::<T>()
    }

    pub fn query_single<T: Component>(&mut self) -> Option<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.get_single(world).ok()
    }

    pub fn query_single_mut<T: Component>(&mut self) -> Option<Mut<T>> {
        let world = self.app.world_mut();
        let mut query = world.query::<&mut T>();
        query.get_single_mut(world).ok()
    }

    pub fn query_all<T: Component>(&mut self) -> Vec<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.iter(world).collect()
    }

    /// Component of type `T` on the entity that also carries `M`
    pub fn query_with<T: Component, M: Component>(&mut self) -> Option<&T> {
        let world = self.app.world_mut();
        let mut query = world.query_filtered::<&T, With<M>>();
        query.get_single(world).ok()
    }
}
