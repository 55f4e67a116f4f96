#[path = "../common/mod.rs"]
mod common;

mod camera_tests;
mod frame_tests;
mod world_tests;
