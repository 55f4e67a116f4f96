use nalgebra::Vector3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::utils::{wrap_axis, WING_FLAP_AMPLITUDE};

/// Index of an ambient entity in the world store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Cloud,
    Bird,
    OtherPlane,
    Tree,
    Mountain,
}

/// Closed range `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Symmetric range `[-half_width, half_width]`.
    pub const fn symmetric(half_width: f64) -> Self {
        Self {
            min: -half_width,
            max: half_width,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }

    pub fn wrap(&self, value: f64) -> f64 {
        wrap_axis(value, self.min, self.max)
    }

    /// Uniform sample; a degenerate range yields `min`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.max > self.min {
            rng.gen_range(self.min..self.max)
        } else {
            self.min
        }
    }
}

/// Axis-aligned volume an entity kind lives in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

impl Bounds {
    pub const fn new(x: Interval, y: Interval, z: Interval) -> Self {
        Self { x, y, z }
    }

    pub fn contains(&self, p: &Vector3<f64>) -> bool {
        self.x.contains(p.x) && self.y.contains(p.y) && self.z.contains(p.z)
    }

    pub fn contains_horizontal(&self, p: &Vector3<f64>) -> bool {
        self.x.contains(p.x) && self.z.contains(p.z)
    }

    pub fn is_valid(&self) -> bool {
        self.x.is_valid() && self.y.is_valid() && self.z.is_valid()
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector3<f64> {
        Vector3::new(self.x.sample(rng), self.y.sample(rng), self.z.sample(rng))
    }

    /// Wraps X and Z, leaving Y untouched.
    pub fn wrap_horizontal(&self, p: &Vector3<f64>) -> Vector3<f64> {
        Vector3::new(self.x.wrap(p.x), p.y, self.z.wrap(p.z))
    }

    pub fn wrap_all(&self, p: &Vector3<f64>) -> Vector3<f64> {
        Vector3::new(self.x.wrap(p.x), self.y.wrap(p.y), self.z.wrap(p.z))
    }
}

/// Kind-specific motion parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Motion {
    /// Constant drift along a horizontal unit vector.
    Cloud { direction: Vector3<f64>, speed: f64 },
    /// Member of a flock, rendered at `centre + offset`.
    Bird {
        flock: usize,
        centre: Vector3<f64>,
        offset: Vector3<f64>,
        speed: f64,
        phase: f64,
        flap_rate: f64,
    },
    /// Level flight along `heading`, measured from +X toward +Z.
    OtherPlane { heading: f64, speed: f64 },
    Static,
}

/// Simulation record of one ambient entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldEntity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub position: Vector3<f64>,
    pub bounds: Bounds,
    pub motion: Motion,
}

impl WorldEntity {
    /// Current wing deflection for birds.
    pub fn wing_angle(&self) -> Option<f64> {
        match self.motion {
            Motion::Bird { phase, .. } => Some(phase.sin() * WING_FLAP_AMPLITUDE),
            _ => None,
        }
    }

    pub fn heading(&self) -> Option<f64> {
        match self.motion {
            Motion::OtherPlane { heading, .. } => Some(heading),
            _ => None,
        }
    }

    pub fn speed(&self) -> f64 {
        match self.motion {
            Motion::Cloud { speed, .. }
            | Motion::Bird { speed, .. }
            | Motion::OtherPlane { speed, .. } => speed,
            Motion::Static => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PuffShape {
    LargeSphere,
    Slab,
    SmallSphere,
}

impl PuffShape {
    /// Full size of the blob along X, Y and Z (m).
    pub fn extents(&self) -> Vector3<f64> {
        match self {
            Self::LargeSphere => Vector3::new(100.0, 100.0, 100.0),
            Self::Slab => Vector3::new(80.0, 40.0, 40.0),
            Self::SmallSphere => Vector3::new(60.0, 60.0, 60.0),
        }
    }
}

/// One blob of a cloud, relative to the cloud's position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudPuff {
    pub offset: Vector3<f64>,
    pub shape: PuffShape,
}

/// Drawing parameters, kept apart from the simulation record with the same id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderAttributes {
    Cloud { puffs: Vec<CloudPuff>, rotation: f64 },
    Bird,
    OtherPlane { variant: u8 },
    Tree { height: f64, variant: u8 },
    Mountain { height: f64, radius: f64, variant: u8 },
}
