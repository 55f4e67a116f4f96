use bevy::prelude::*;

use crate::components::ControlInput;
use crate::resources::config::{AxisMapping, InputConfig, InputMode};

/// The device (or script) the player's controls are read from.
///
/// Built once from configuration and kept current by gamepad connection events.
/// At most one device is claimed at a time; when it goes away the next connected
/// device, if any, takes over.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputSourceHandle {
    mode: InputMode,
    mapping: AxisMapping,
    claimed: Option<Entity>,
    connected: Vec<Entity>,
}

impl InputSourceHandle {
    pub fn new(config: &InputConfig) -> Self {
        Self {
            mode: config.mode,
            mapping: config.mapping,
            claimed: None,
            connected: Vec::new(),
        }
    }

    pub fn gamepad(mapping: AxisMapping) -> Self {
        Self {
            mapping,
            ..Default::default()
        }
    }

    pub fn scripted(input: ControlInput) -> Self {
        Self {
            mode: InputMode::Scripted(input),
            ..Default::default()
        }
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn mapping(&self) -> &AxisMapping {
        &self.mapping
    }

    pub fn claimed(&self) -> Option<Entity> {
        self.claimed
    }

    pub fn connected(&self) -> &[Entity] {
        &self.connected
    }

    pub fn is_scripted(&self) -> bool {
        matches!(self.mode, InputMode::Scripted(_))
    }

    /// Replace the scripted input. Has no effect in gamepad mode.
    pub fn set_script(&mut self, input: ControlInput) {
        if let InputMode::Scripted(current) = &mut self.mode {
            *current = input;
        }
    }

    /// Record a new device. Returns true if it became the claimed one.
    pub fn on_connected(&mut self, device: Entity) -> bool {
        if !self.connected.contains(&device) {
            self.connected.push(device);
        }
        if self.claimed.is_none() && !self.is_scripted() {
            self.claimed = Some(device);
            return true;
        }
        false
    }

    /// Forget a device. Returns the newly claimed device if the claim moved.
    pub fn on_disconnected(&mut self, device: Entity) -> Option<Entity> {
        self.connected.retain(|d| *d != device);
        if self.claimed != Some(device) {
            return None;
        }
        self.claimed = self.connected.first().copied();
        self.claimed
    }
}
