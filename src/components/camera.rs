use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::{AircraftState, EulerAngles};
use crate::utils::{lerp_vector, normalize_or_zero, smoothing_factor, REFERENCE_FRAME_RATE};

/// How the camera's target pose is derived from the aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FollowStrategy {
    /// Trails behind the aircraft's heading at a fixed height, ignoring pitch and roll
    /// for placement, and copies the aircraft attitude.
    YawOffset {
        trailing_distance: f64,
        height: f64,
        look_ahead: f64,
    },
    /// Rigidly attached to the aircraft frame and looking ahead of the nose.
    OrientationLocked {
        trailing_distance: f64,
        vertical_offset: f64,
        look_ahead: f64,
        look_bias: f64,
    },
}

impl Default for FollowStrategy {
    fn default() -> Self {
        Self::OrientationLocked {
            trailing_distance: 5.0,
            vertical_offset: 5.0,
            look_ahead: 10.0,
            look_bias: 2.0,
        }
    }
}

impl FollowStrategy {
    pub fn yaw_offset() -> Self {
        Self::YawOffset {
            trailing_distance: 10.0,
            height: 2.0,
            look_ahead: 10.0,
        }
    }

    pub fn orientation_locked() -> Self {
        Self::default()
    }

    /// Pose the camera should settle at for the given aircraft.
    pub fn target(&self, aircraft: &AircraftState) -> CameraTarget {
        let p = aircraft.position;
        match *self {
            Self::YawOffset {
                trailing_distance,
                height,
                look_ahead,
            } => {
                let forward = aircraft.attitude().yaw_forward();
                CameraTarget {
                    position: p - forward * trailing_distance + Vector3::y() * height,
                    look_at: p + forward * look_ahead,
                    attitude: aircraft.attitude(),
                }
            }
            Self::OrientationLocked {
                trailing_distance,
                vertical_offset,
                look_ahead,
                look_bias,
            } => {
                let forward = aircraft.forward();
                CameraTarget {
                    position: p + aircraft.up() * vertical_offset - forward * trailing_distance,
                    look_at: p + forward * look_ahead + Vector3::y() * look_bias,
                    attitude: aircraft.attitude(),
                }
            }
        }
    }
}

/// Pose the camera is easing toward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTarget {
    pub position: Vector3<f64>,
    pub look_at: Vector3<f64>,
    pub attitude: EulerAngles,
}

impl CameraTarget {
    /// A target at `position`, looking down -X, level.
    pub fn at(position: Vector3<f64>) -> Self {
        Self {
            position,
            look_at: position - Vector3::x(),
            attitude: EulerAngles::default(),
        }
    }
}

/// Camera that eases toward a target derived from the followed aircraft.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct FollowCamera {
    pub position: Vector3<f64>,
    pub look_at: Vector3<f64>,
    pub attitude: EulerAngles,
    /// Always world up after an update.
    pub up: Vector3<f64>,
    pub strategy: FollowStrategy,
    /// Fraction of the remaining distance closed per frame, (0, 1].
    pub smoothing: f64,
    pub time_corrected: bool,
    pub fov: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            look_at: -Vector3::x(),
            attitude: EulerAngles::default(),
            up: Vector3::y(),
            strategy: FollowStrategy::default(),
            smoothing: 0.1,
            time_corrected: false,
            fov: 75.0,
            znear: 0.1,
            zfar: 20000.0,
        }
    }
}

impl FollowCamera {
    pub fn new(strategy: FollowStrategy, smoothing: f64) -> Self {
        Self {
            strategy,
            smoothing,
            ..Default::default()
        }
    }

    pub fn with_time_correction(mut self, enabled: bool) -> Self {
        self.time_corrected = enabled;
        self
    }

    /// Jump straight to `target`. Only used when the camera is first placed.
    pub fn snap_to(&mut self, target: &CameraTarget) {
        self.position = target.position;
        self.look_at = target.look_at;
        self.attitude = target.attitude;
        self.up = Vector3::y();
    }

    /// Close part of the gap to `target`. A zero-length frame changes nothing.
    pub fn approach(&mut self, target: &CameraTarget, dt: f64) {
        if dt <= 0.0 {
            return;
        }
        let k = smoothing_factor(self.smoothing, dt, self.time_corrected, REFERENCE_FRAME_RATE);

        self.position = lerp_vector(&self.position, &target.position, k);
        self.look_at = lerp_vector(&self.look_at, &target.look_at, k);
        self.attitude = EulerAngles::from_vector(&lerp_vector(
            &self.attitude.as_vector(),
            &target.attitude.as_vector(),
            k,
        ));
        self.up = Vector3::y();
    }

    /// Ease toward the strategy's target for `aircraft`.
    pub fn follow(&mut self, aircraft: &AircraftState, dt: f64) {
        let target = self.strategy.target(aircraft);
        self.approach(&target, dt);
    }

    /// Place the camera on the strategy's target without easing.
    pub fn snap_to_aircraft(&mut self, aircraft: &AircraftState) {
        let target = self.strategy.target(aircraft);
        self.snap_to(&target);
    }

    /// Unit vector from the camera toward its look-at point.
    pub fn view_direction(&self) -> Vector3<f64> {
        normalize_or_zero(&(self.look_at - self.position))
    }
}
