pub mod config;
mod errors;
mod input;
mod telemetry;
mod terrain;
mod time;
mod world;

pub use config::{
    AxisBinding, AxisChannel, AxisMapping, AxisResponse, CameraConfig, FrameConfig, InputConfig,
    InputMode, SimulationConfig, TelemetryConfig, WorldConfig,
};
pub use errors::{ConfigError, Result};
pub use input::InputSourceHandle;
pub use telemetry::Telemetry;
pub use terrain::TerrainHeightField;
pub use time::FrameClock;
pub use world::WorldEntities;
