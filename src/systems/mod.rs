pub mod camera;
mod frame;
pub mod input;
pub mod physics;
mod telemetry;
mod transform;
pub mod world;

pub use camera::{camera_follow_system, snap_camera_system};
pub use frame::frame_clock_system;
pub use input::{gamepad_connection_system, read_input_system};
pub use physics::{advance_aircraft, compute_forces, flight_system};
pub use telemetry::telemetry_system;
pub use transform::{aircraft_transform_system, camera_transform_system, to_quat, to_vec3};
pub use world::{advance_entity, advance_world, world_system};
