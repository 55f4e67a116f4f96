use bevy::input::gamepad::GamepadAxis;
use serde::{Deserialize, Serialize};

use crate::components::ControlInput;
use crate::resources::errors::{ConfigError, Result};

/// Where control input comes from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputMode {
    /// First connected gamepad or yoke.
    Gamepad,
    /// The same input every frame.
    Scripted(ControlInput),
}

impl Default for InputMode {
    fn default() -> Self {
        Self::Gamepad
    }
}

/// Raw device axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisChannel {
    LeftStickX,
    LeftStickY,
    LeftZ,
    RightStickX,
    RightStickY,
    RightZ,
}

impl AxisChannel {
    pub fn gamepad_axis(self) -> GamepadAxis {
        match self {
            Self::LeftStickX => GamepadAxis::LeftStickX,
            Self::LeftStickY => GamepadAxis::LeftStickY,
            Self::LeftZ => GamepadAxis::LeftZ,
            Self::RightStickX => GamepadAxis::RightStickX,
            Self::RightStickY => GamepadAxis::RightStickY,
            Self::RightZ => GamepadAxis::RightZ,
        }
    }
}

/// How a raw axis value in [-1, 1] becomes a control value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisResponse {
    Linear,
    Inverted,
    /// Throttle lever: fully forward (-1) is 1, fully back (1) is 0.
    Lever,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBinding {
    pub channel: AxisChannel,
    pub response: AxisResponse,
}

impl AxisBinding {
    pub const fn new(channel: AxisChannel, response: AxisResponse) -> Self {
        Self { channel, response }
    }

    pub fn apply(&self, raw: f64) -> f64 {
        match self.response {
            AxisResponse::Linear => raw,
            AxisResponse::Inverted => -raw,
            AxisResponse::Lever => (1.0 - raw) / 2.0,
        }
    }
}

/// Device axes to control surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisMapping {
    pub pitch: AxisBinding,
    pub roll: AxisBinding,
    pub yaw: AxisBinding,
    pub throttle: AxisBinding,
    /// Stick readings with smaller magnitude are treated as centred.
    pub dead_zone: f64,
}

impl Default for AxisMapping {
    fn default() -> Self {
        Self {
            pitch: AxisBinding::new(AxisChannel::LeftStickX, AxisResponse::Inverted),
            roll: AxisBinding::new(AxisChannel::LeftStickY, AxisResponse::Linear),
            yaw: AxisBinding::new(AxisChannel::RightStickY, AxisResponse::Linear),
            throttle: AxisBinding::new(AxisChannel::RightStickX, AxisResponse::Lever),
            dead_zone: 0.0,
        }
    }
}

impl AxisMapping {
    /// Build a clamped `ControlInput` from a reader of raw axis values.
    pub fn map<F>(&self, mut read: F) -> ControlInput
    where
        F: FnMut(AxisChannel) -> f64,
    {
        let mut stick = |binding: &AxisBinding| {
            let raw = read(binding.channel);
            let raw = if raw.abs() < self.dead_zone { 0.0 } else { raw };
            binding.apply(raw)
        };
        let pitch = stick(&self.pitch);
        let roll = stick(&self.roll);
        let yaw = stick(&self.yaw);
        let throttle = self.throttle.apply(read(self.throttle.channel));
        ControlInput::new(pitch, roll, yaw, throttle).clamped()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub mode: InputMode,
    pub mapping: AxisMapping,
}

impl InputConfig {
    pub fn scripted(input: ControlInput) -> Self {
        Self {
            mode: InputMode::Scripted(input),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.mapping.dead_zone) {
            return Err(ConfigError::InvalidParameter {
                name: "input.mapping.dead_zone".to_string(),
                value: self.mapping.dead_zone.to_string(),
            });
        }
        Ok(())
    }
}
