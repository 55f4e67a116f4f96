use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Body-frame forward axis. The nose points along -X.
pub const BODY_FORWARD: Vector3<f64> = Vector3::new(-1.0, 0.0, 0.0);
/// Body-frame up axis.
pub const BODY_UP: Vector3<f64> = Vector3::new(0.0, 1.0, 0.0);

/// Heading-pitch-bank angles in radians.
///
/// The orientation they describe is `Ry(yaw) * Rz(-pitch) * Rx(roll)` applied to the
/// body frame, so positive pitch raises the nose and positive yaw swings it toward +Z.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EulerAngles {
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
}

impl EulerAngles {
    pub fn new(pitch: f64, yaw: f64, roll: f64) -> Self {
        Self { pitch, yaw, roll }
    }

    pub fn to_quaternion(&self) -> UnitQuaternion<f64> {
        let heading = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), self.yaw);
        let elevation = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), -self.pitch);
        let bank = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), self.roll);
        heading * elevation * bank
    }

    /// Forward direction projected on the horizontal plane, ignoring pitch and roll.
    pub fn yaw_forward(&self) -> Vector3<f64> {
        Vector3::new(-self.yaw.cos(), 0.0, self.yaw.sin())
    }

    pub fn as_vector(&self) -> Vector3<f64> {
        Vector3::new(self.pitch, self.yaw, self.roll)
    }

    pub fn from_vector(v: &Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// Kinematic state of the player's aircraft.
///
/// The quaternion is a cached view of the Euler angles and is only ever rebuilt
/// from them, so the two can never disagree.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct AircraftState {
    /// Position in world space [m], Y up
    pub position: Vector3<f64>,
    /// Linear velocity in world space [m/s]
    pub velocity: Vector3<f64>,
    attitude: EulerAngles,
    orientation: UnitQuaternion<f64>,
}

impl Default for AircraftState {
    fn default() -> Self {
        Self::at_rest(Vector3::zeros())
    }
}

impl AircraftState {
    /// Level attitude, zero velocity.
    pub fn at_rest(position: Vector3<f64>) -> Self {
        Self {
            position,
            velocity: Vector3::zeros(),
            attitude: EulerAngles::default(),
            orientation: UnitQuaternion::identity(),
        }
    }

    pub fn new(position: Vector3<f64>, velocity: Vector3<f64>, attitude: EulerAngles) -> Self {
        Self {
            position,
            velocity,
            attitude,
            orientation: attitude.to_quaternion(),
        }
    }

    pub fn attitude(&self) -> EulerAngles {
        self.attitude
    }

    pub fn orientation(&self) -> &UnitQuaternion<f64> {
        &self.orientation
    }

    pub fn set_attitude(&mut self, attitude: EulerAngles) {
        self.attitude = attitude;
        self.orientation = attitude.to_quaternion();
    }

    /// Adds angle increments and rebuilds the quaternion.
    pub fn rotate_by(&mut self, delta: EulerAngles) {
        self.set_attitude(EulerAngles::new(
            self.attitude.pitch + delta.pitch,
            self.attitude.yaw + delta.yaw,
            self.attitude.roll + delta.roll,
        ));
    }

    /// Nose direction in world space.
    pub fn forward(&self) -> Vector3<f64> {
        self.orientation * BODY_FORWARD
    }

    /// Canopy direction in world space.
    pub fn up(&self) -> Vector3<f64> {
        self.orientation * BODY_UP
    }

    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }

    pub fn altitude(&self) -> f64 {
        self.position.y
    }
}
