use bevy::prelude::*;

use crate::resources::config::FrameConfig;

/// Per-frame delta time as seen by the simulation.
///
/// Measured frame lengths (or the fixed step, when configured) are clamped to
/// `[0, max_dt]` so a stall cannot launch the aircraft across the map.
#[derive(Resource, Debug, Clone)]
pub struct FrameClock {
    max_dt: f64,
    fixed_dt: Option<f64>,
    delta: f64,
    raw_delta: f64,
    elapsed: f64,
    frame_count: u64,
    clamped_frames: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(&FrameConfig::default())
    }
}

impl FrameClock {
    pub fn new(config: &FrameConfig) -> Self {
        Self {
            max_dt: config.max_dt,
            fixed_dt: config.fixed_dt,
            delta: 0.0,
            raw_delta: 0.0,
            elapsed: 0.0,
            frame_count: 0,
            clamped_frames: 0,
        }
    }

    /// Start a new frame and return the step the simulation should use.
    pub fn tick(&mut self, measured: f64) -> f64 {
        let raw = self.fixed_dt.unwrap_or(measured);
        let raw = if raw.is_nan() { 0.0 } else { raw };

        self.raw_delta = raw;
        self.delta = raw.clamp(0.0, self.max_dt);
        if raw > self.max_dt {
            self.clamped_frames += 1;
        }
        self.elapsed += self.delta;
        self.frame_count += 1;
        self.delta
    }

    pub fn delta_seconds(&self) -> f64 {
        self.delta
    }

    /// Frame length before clamping.
    pub fn raw_delta_seconds(&self) -> f64 {
        self.raw_delta
    }

    pub fn was_clamped(&self) -> bool {
        self.raw_delta > self.max_dt
    }

    /// Simulated time, the sum of clamped steps.
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn clamped_frames(&self) -> u64 {
        self.clamped_frames
    }

    pub fn max_dt(&self) -> f64 {
        self.max_dt
    }

    pub fn is_fixed(&self) -> bool {
        self.fixed_dt.is_some()
    }

    pub fn fps(&self) -> f64 {
        if self.elapsed > 0.0 {
            self.frame_count as f64 / self.elapsed
        } else {
            0.0
        }
    }

    pub fn reset(&mut self) {
        self.delta = 0.0;
        self.raw_delta = 0.0;
        self.elapsed = 0.0;
        self.frame_count = 0;
        self.clamped_frames = 0;
    }
}
