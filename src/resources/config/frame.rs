use serde::{Deserialize, Serialize};

use crate::resources::errors::{ConfigError, Result};
use crate::utils::DEFAULT_MAX_FRAME_DT;

/// Frame timing policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Upper clamp on a measured frame [s]
    pub max_dt: f64,
    /// Use this step instead of measuring wall time.
    pub fixed_dt: Option<f64>,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            max_dt: DEFAULT_MAX_FRAME_DT,
            fixed_dt: None,
        }
    }
}

impl FrameConfig {
    pub fn fixed(dt: f64) -> Self {
        Self {
            fixed_dt: Some(dt),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.max_dt.is_finite() && self.max_dt > 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "frame.max_dt".to_string(),
                value: self.max_dt.to_string(),
            });
        }
        if let Some(dt) = self.fixed_dt {
            if !(dt.is_finite() && dt >= 0.0) {
                return Err(ConfigError::InvalidParameter {
                    name: "frame.fixed_dt".to_string(),
                    value: dt.to_string(),
                });
            }
        }
        Ok(())
    }
}
