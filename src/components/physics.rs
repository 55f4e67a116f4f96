use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Forces acting on the aircraft during the last integrated frame.
#[derive(Component, Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForceBalance {
    pub forces: Vec<Force>,
    /// Sum of `forces` in the world frame [N]
    pub net_force: Vector3<f64>,
    /// `net_force / mass` [m/s²]
    pub acceleration: Vector3<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Force {
    pub vector: Vector3<f64>,
    pub frame: ReferenceFrame,
    pub category: ForceCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferenceFrame {
    Body,
    Inertial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForceCategory {
    Propulsive,
    Lift,
    Drag,
}

impl Force {
    pub fn body(vector: Vector3<f64>, category: ForceCategory) -> Self {
        Self {
            vector,
            frame: ReferenceFrame::Body,
            category,
        }
    }

    pub fn inertial(vector: Vector3<f64>, category: ForceCategory) -> Self {
        Self {
            vector,
            frame: ReferenceFrame::Inertial,
            category,
        }
    }

    /// The force expressed in the world frame.
    pub fn to_inertial(&self, attitude: &UnitQuaternion<f64>) -> Vector3<f64> {
        match self.frame {
            ReferenceFrame::Body => attitude * self.vector,
            ReferenceFrame::Inertial => self.vector,
        }
    }
}

impl ForceBalance {
    pub fn clear(&mut self) {
        self.forces.clear();
        self.net_force = Vector3::zeros();
        self.acceleration = Vector3::zeros();
    }

    pub fn add_force(&mut self, force: Force) {
        self.forces.push(force);
    }

    /// Sums every force into the world frame and divides by `mass`.
    pub fn resolve(&mut self, attitude: &UnitQuaternion<f64>, mass: f64) {
        self.net_force = self
            .forces
            .iter()
            .fold(Vector3::zeros(), |acc, f| acc + f.to_inertial(attitude));
        self.acceleration = self.net_force / mass;
    }

    pub fn of_category(&self, category: ForceCategory) -> Option<&Force> {
        self.forces.iter().find(|f| f.category == category)
    }
}
