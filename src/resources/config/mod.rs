pub mod camera;
pub mod frame;
pub mod input;
pub mod simulation;
pub mod telemetry;
pub mod world;

pub use camera::CameraConfig;
pub use frame::FrameConfig;
pub use input::{AxisBinding, AxisChannel, AxisMapping, AxisResponse, InputConfig, InputMode};
pub use simulation::SimulationConfig;
pub use telemetry::TelemetryConfig;
pub use world::{
    BirdConfig, CloudConfig, MountainConfig, PlaneConfig, SceneryConfig, TerrainConfig,
    WorldConfig,
};
