use serde::{Deserialize, Serialize};

use crate::components::{FollowCamera, FollowStrategy};
use crate::resources::errors::{ConfigError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub strategy: FollowStrategy,
    /// Fraction of the remaining gap closed per frame.
    pub smoothing: f64,
    /// Scale smoothing by frame length against a 60 Hz reference.
    pub time_corrected: bool,
    /// Vertical field of view [deg]
    pub fov: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            strategy: FollowStrategy::default(),
            smoothing: 0.1,
            time_corrected: false,
            fov: 75.0,
            znear: 0.1,
            zfar: 20000.0,
        }
    }
}

impl CameraConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return Err(ConfigError::InvalidParameter {
                name: "camera.smoothing".to_string(),
                value: self.smoothing.to_string(),
            });
        }
        if !(self.znear > 0.0 && self.zfar > self.znear) {
            return Err(ConfigError::InvalidParameter {
                name: "camera.zfar".to_string(),
                value: format!("{} (znear {})", self.zfar, self.znear),
            });
        }
        Ok(())
    }

    pub fn build(&self) -> FollowCamera {
        FollowCamera {
            fov: self.fov,
            znear: self.znear,
            zfar: self.zfar,
            ..FollowCamera::new(self.strategy, self.smoothing)
        }
        .with_time_correction(self.time_corrected)
    }
}
