#![allow(dead_code)]

mod assertions;
mod helpers;
mod test_app;

// Re-export
pub use assertions::{
    assert_aircraft_state_valid, assert_attitude_eq, assert_camera_valid, assert_position_eq,
    assert_within_bounds,
};

pub use helpers::*;

pub use test_app::{TestApp, TestAppBuilder};
