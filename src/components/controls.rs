use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Normalised control axes for one frame.
///
/// Produced once per frame by the input source and read by the flight model.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ControlInput {
    /// Nose up positive, [-1, 1].
    pub pitch: f64,
    /// Right wing down positive, [-1, 1].
    pub roll: f64,
    /// Nose toward +Z positive, [-1, 1].
    pub yaw: f64,
    /// Engine setting, [0, 1].
    pub throttle: f64,
}

impl ControlInput {
    /// All axes centred, engine idle. Used whenever no device is available.
    pub const fn neutral() -> Self {
        Self {
            pitch: 0.0,
            roll: 0.0,
            yaw: 0.0,
            throttle: 0.0,
        }
    }

    pub fn new(pitch: f64, roll: f64, yaw: f64, throttle: f64) -> Self {
        Self {
            pitch,
            roll,
            yaw,
            throttle,
        }
    }

    pub fn with_throttle(throttle: f64) -> Self {
        Self {
            throttle,
            ..Self::neutral()
        }
    }

    /// Copy with every axis forced into its legal range. NaN reads as centred.
    pub fn clamped(&self) -> Self {
        let axis = |v: f64| if v.is_nan() { 0.0 } else { v.clamp(-1.0, 1.0) };
        Self {
            pitch: axis(self.pitch),
            roll: axis(self.roll),
            yaw: axis(self.yaw),
            throttle: if self.throttle.is_nan() {
                0.0
            } else {
                self.throttle.clamp(0.0, 1.0)
            },
        }
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::neutral()
    }
}
