use bevy::input::gamepad::GamepadConnectionEvent;
use bevy::prelude::*;

use crate::components::ControlInput;
use crate::resources::{FrameClock, FrameConfig, InputSourceHandle};
use crate::systems::{frame_clock_system, gamepad_connection_system, read_input_system};

/// Per-frame stages, run in this order once per `Update`.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FrameSet {
    Clock,
    Input,
    Flight,
    World,
    Camera,
    Telemetry,
}

/// Drives the frame: measures time, reads the input source and orders the
/// simulation stages.
pub struct FramePlugin {
    config: FrameConfig,
    input: InputSourceHandle,
}

impl FramePlugin {
    pub fn new(config: FrameConfig, input: InputSourceHandle) -> Self {
        Self { config, input }
    }
}

impl Default for FramePlugin {
    fn default() -> Self {
        Self::new(FrameConfig::default(), InputSourceHandle::default())
    }
}

impl Plugin for FramePlugin {
    fn build(&self, app: &mut App) {
        // Registered by InputPlugin in a windowed app; headless apps need it too.
        app.add_event::<GamepadConnectionEvent>();

        app.insert_resource(FrameClock::new(&self.config))
            .insert_resource(self.input.clone())
            .init_resource::<ControlInput>();

        app.configure_sets(
            Update,
            (
                FrameSet::Clock,
                FrameSet::Input,
                FrameSet::Flight,
                FrameSet::World,
                FrameSet::Camera,
                FrameSet::Telemetry,
            )
                .chain(),
        );

        app.add_systems(
            Update,
            (
                frame_clock_system.in_set(FrameSet::Clock),
                (gamepad_connection_system, read_input_system)
                    .chain()
                    .in_set(FrameSet::Input),
            ),
        );
    }
}
