mod controller;

pub use controller::{camera_follow_system, snap_camera_system};
