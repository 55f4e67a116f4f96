mod aircraft;
mod camera;
mod environment;
mod frame;
mod skyloop;
mod staging;
mod telemetry;

pub use aircraft::AircraftPlugin;
pub use camera::CameraPlugin;
pub use environment::EnvironmentPlugin;
pub use frame::{FramePlugin, FrameSet};
pub use skyloop::SkyloopPlugin;
pub use staging::{StartupSequencePlugin, StartupStage};
pub use telemetry::TelemetryPlugin;
