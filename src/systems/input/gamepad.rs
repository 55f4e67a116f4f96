use bevy::input::gamepad::{Gamepad, GamepadConnection, GamepadConnectionEvent};
use bevy::prelude::*;

use crate::components::ControlInput;
use crate::resources::{InputMode, InputSourceHandle};

/// Keep the input handle in step with devices coming and going.
pub fn gamepad_connection_system(
    mut events: EventReader<GamepadConnectionEvent>,
    mut handle: ResMut<InputSourceHandle>,
) {
    for event in events.read() {
        match &event.connection {
            GamepadConnection::Connected { name, .. } => {
                if handle.on_connected(event.gamepad) {
                    info!("Flight controls claimed by {} ({:?})", name, event.gamepad);
                } else {
                    info!("Controller connected: {} ({:?})", name, event.gamepad);
                }
            }
            GamepadConnection::Disconnected => {
                let was_claimed = handle.claimed() == Some(event.gamepad);
                match handle.on_disconnected(event.gamepad) {
                    Some(next) => warn!(
                        "Controller {:?} disconnected, switching to {:?}",
                        event.gamepad, next
                    ),
                    None if was_claimed => {
                        warn!("Controller {:?} disconnected, no input device left", event.gamepad)
                    }
                    None => info!("Controller {:?} disconnected", event.gamepad),
                }
            }
        }
    }
}

/// Produce this frame's `ControlInput`. Neutral when no device is claimed.
pub fn read_input_system(
    handle: Res<InputSourceHandle>,
    gamepads: Query<&Gamepad>,
    mut input: ResMut<ControlInput>,
) {
    *input = match handle.mode() {
        InputMode::Scripted(script) => script.clamped(),
        InputMode::Gamepad => handle
            .claimed()
            .and_then(|device| gamepads.get(device).ok())
            .map(|gamepad| {
                handle
                    .mapping()
                    .map(|channel| gamepad.get(channel.gamepad_axis()).unwrap_or(0.0) as f64)
            })
            .unwrap_or_else(ControlInput::neutral),
    };
}
