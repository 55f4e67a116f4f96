use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::{Bounds, Interval};
use crate::resources::errors::{ConfigError, Result};
use crate::utils::DEFAULT_FLAP_RATE;

/// Population and placement rules for the ambient world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Master seed for world generation. `None` draws one from entropy.
    pub seed: Option<u64>,
    pub clouds: CloudConfig,
    pub birds: BirdConfig,
    pub planes: PlaneConfig,
    pub trees: SceneryConfig,
    pub mountains: MountainConfig,
    pub terrain: TerrainConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudConfig {
    pub count: usize,
    pub bounds: Bounds,
    pub speed: Interval,
    pub min_puffs: usize,
    pub max_puffs: usize,
    /// Half-extent of the box puffs are scattered in around the cloud centre.
    pub puff_spread: Vector3<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BirdConfig {
    pub flocks: usize,
    pub birds_per_flock: usize,
    pub bounds: Bounds,
    pub speed: Interval,
    /// Phase advance per second.
    pub flap_rate: f64,
    /// Half-extent of the box members are placed in around their flock centre.
    pub spread: Vector3<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaneConfig {
    pub count: usize,
    pub bounds: Bounds,
    pub speed: Interval,
    pub variants: u8,
}

/// Static objects seated on the terrain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneryConfig {
    pub count: usize,
    pub bounds: Bounds,
    pub height: Interval,
    pub variants: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MountainConfig {
    pub count: usize,
    pub bounds: Bounds,
    pub height: Interval,
    pub radius: Interval,
    pub variants: u8,
}

/// Rolling hills, `amplitude * sin(x / wavelength) * cos(z / wavelength)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    pub amplitude: f64,
    pub wavelength: f64,
}

fn ground_bounds(half_width: f64) -> Bounds {
    Bounds::new(
        Interval::symmetric(half_width),
        Interval::symmetric(TerrainConfig::default().amplitude),
        Interval::symmetric(half_width),
    )
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            seed: None,
            clouds: CloudConfig::default(),
            birds: BirdConfig::default(),
            planes: PlaneConfig::default(),
            trees: SceneryConfig::default(),
            mountains: MountainConfig::default(),
            terrain: TerrainConfig::default(),
        }
    }
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            count: 100,
            bounds: Bounds::new(
                Interval::symmetric(5000.0),
                Interval::new(500.0, 3000.0),
                Interval::symmetric(5000.0),
            ),
            speed: Interval::new(1.0, 3.0),
            min_puffs: 2,
            max_puffs: 5,
            puff_spread: Vector3::new(50.0, 20.0, 50.0),
        }
    }
}

impl Default for BirdConfig {
    fn default() -> Self {
        Self {
            flocks: 5,
            birds_per_flock: 10,
            bounds: Bounds::new(
                Interval::symmetric(2000.0),
                Interval::new(200.0, 1000.0),
                Interval::symmetric(2000.0),
            ),
            speed: Interval::new(8.0, 10.0),
            flap_rate: DEFAULT_FLAP_RATE,
            spread: Vector3::new(50.0, 25.0, 50.0),
        }
    }
}

impl Default for PlaneConfig {
    fn default() -> Self {
        Self {
            count: 5,
            bounds: Bounds::new(
                Interval::symmetric(10000.0),
                Interval::new(1000.0, 3000.0),
                Interval::symmetric(10000.0),
            ),
            speed: Interval::new(20.0, 30.0),
            variants: 3,
        }
    }
}

impl Default for SceneryConfig {
    fn default() -> Self {
        Self {
            count: 200,
            bounds: ground_bounds(10000.0),
            height: Interval::new(20.0, 50.0),
            variants: 3,
        }
    }
}

impl Default for MountainConfig {
    fn default() -> Self {
        Self {
            count: 20,
            bounds: ground_bounds(10000.0),
            height: Interval::new(500.0, 1500.0),
            radius: Interval::new(500.0, 1500.0),
            variants: 3,
        }
    }
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            amplitude: 100.0,
            wavelength: 500.0,
        }
    }
}

fn check_bounds(name: &str, bounds: &Bounds) -> Result<()> {
    if bounds.is_valid() {
        Ok(())
    } else {
        Err(ConfigError::InvalidBounds(name.to_string()))
    }
}

fn check_interval(name: &str, interval: &Interval) -> Result<()> {
    if interval.is_valid() && interval.min >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter {
            name: name.to_string(),
            value: format!("[{}, {}]", interval.min, interval.max),
        })
    }
}

impl WorldConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Total number of entities generation will produce.
    pub fn population(&self) -> usize {
        self.clouds.count
            + self.birds.flocks * self.birds.birds_per_flock
            + self.planes.count
            + self.trees.count
            + self.mountains.count
    }

    pub fn validate(&self) -> Result<()> {
        check_bounds("clouds", &self.clouds.bounds)?;
        check_interval("clouds.speed", &self.clouds.speed)?;
        if self.clouds.min_puffs == 0 || self.clouds.min_puffs > self.clouds.max_puffs {
            return Err(ConfigError::InvalidParameter {
                name: "clouds.min_puffs".to_string(),
                value: self.clouds.min_puffs.to_string(),
            });
        }

        check_bounds("birds", &self.birds.bounds)?;
        check_interval("birds.speed", &self.birds.speed)?;
        if !(self.birds.flap_rate.is_finite() && self.birds.flap_rate >= 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "birds.flap_rate".to_string(),
                value: self.birds.flap_rate.to_string(),
            });
        }

        check_bounds("planes", &self.planes.bounds)?;
        check_interval("planes.speed", &self.planes.speed)?;

        check_bounds("trees", &self.trees.bounds)?;
        check_interval("trees.height", &self.trees.height)?;

        check_bounds("mountains", &self.mountains.bounds)?;
        check_interval("mountains.height", &self.mountains.height)?;
        check_interval("mountains.radius", &self.mountains.radius)?;

        if !(self.terrain.wavelength.is_finite() && self.terrain.wavelength > 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "terrain.wavelength".to_string(),
                value: self.terrain.wavelength.to_string(),
            });
        }
        Ok(())
    }
}
