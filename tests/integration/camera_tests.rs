use approx::assert_relative_eq;
use bevy::prelude::*;
use nalgebra::Vector3;
use skyloop::{
    components::{AircraftState, CameraTarget, ControlInput, FollowCamera, FollowStrategy},
    resources::CameraConfig,
};

use crate::common::{assert_camera_valid, assert_position_eq, TestAppBuilder};

#[test]
fn test_camera_starts_on_target() {
    let mut app = TestAppBuilder::new().build();

    let state = app.query_single::<AircraftState>().unwrap().clone();
    let camera = app.query_single::<FollowCamera>().expect("camera spawned");
    assert_camera_valid(camera);

    let target = camera.strategy.target(&state);
    assert_position_eq(&camera.position, &target.position, 1e-9);
    assert_position_eq(&camera.look_at, &target.look_at, 1e-9);
    // trailing above and behind a level aircraft
    assert_position_eq(
        &camera.position,
        &(state.position + Vector3::new(5.0, 5.0, 0.0)),
        1e-9,
    );
}

#[test]
fn test_camera_trails_accelerating_aircraft() {
    let mut app = TestAppBuilder::new()
        .with_input(ControlInput::with_throttle(1.0))
        .build();
    app.run_steps(300);

    let state = app.query_single::<AircraftState>().unwrap().clone();
    let camera = app.query_single::<FollowCamera>().unwrap().clone();
    assert_camera_valid(&camera);

    let behind = (camera.position - state.position).dot(&state.forward());
    assert!(behind < -5.0, "camera should lag behind the nose, got {behind}");
    assert!((camera.position - state.position).norm() < 200.0);
}

#[test]
fn test_camera_transform_looks_at_target() {
    let mut app = TestAppBuilder::new()
        .with_input(ControlInput::new(0.2, 0.1, 0.0, 1.0))
        .build();
    app.run_steps(60);

    let world = app.app.world_mut();
    let mut query = world.query::<(&FollowCamera, &Transform)>();
    let (camera, transform) = query.single(world);

    let view = camera.view_direction();
    let view = Vec3::new(view.x as f32, view.y as f32, view.z as f32);
    assert!(transform.forward().dot(view) > 0.999);
    assert!(transform.up().y > 0.0);
}

#[test]
fn test_yaw_offset_strategy() {
    let mut app = TestAppBuilder::new()
        .with_camera(CameraConfig {
            strategy: FollowStrategy::yaw_offset(),
            ..Default::default()
        })
        .build();

    let state = app.query_single::<AircraftState>().unwrap().clone();
    let camera = app.query_single::<FollowCamera>().unwrap();
    assert_position_eq(
        &camera.position,
        &(state.position + Vector3::new(10.0, 2.0, 0.0)),
        1e-9,
    );
    assert_eq!(camera.attitude, state.attitude());
}

#[test]
fn test_smoothing_toward_fixed_target() {
    let mut camera = FollowCamera::default();
    let target = CameraTarget::at(Vector3::new(10.0, 0.0, 0.0));

    camera.approach(&target, 1.0 / 60.0);
    assert_eq!(camera.position.x, 1.0);

    let mut distances = Vec::new();
    for _ in 1..100 {
        camera.approach(&target, 1.0 / 60.0);
        distances.push((target.position - camera.position).norm());
    }
    assert!(distances.windows(2).all(|w| w[1] < w[0]));
    assert!(distances[48] < 0.1);
    assert!(*distances.last().unwrap() < 0.01);
}

#[test]
fn test_time_corrected_smoothing_is_rate_independent() {
    let target = CameraTarget::at(Vector3::new(10.0, 0.0, 0.0));

    let mut at_60 = FollowCamera::default().with_time_correction(true);
    for _ in 0..60 {
        at_60.approach(&target, 1.0 / 60.0);
    }
    let mut at_30 = FollowCamera::default().with_time_correction(true);
    for _ in 0..30 {
        at_30.approach(&target, 1.0 / 30.0);
    }
    assert_relative_eq!(at_60.position.x, at_30.position.x, epsilon = 1e-9);
}

#[test]
fn test_zero_step_leaves_camera_alone() {
    let mut app = TestAppBuilder::new()
        .with_input(ControlInput::with_throttle(1.0))
        .with_fixed_dt(0.0)
        .build();
    let before = app.query_single::<FollowCamera>().unwrap().clone();
    app.run_steps(10);
    let after = app.query_single::<FollowCamera>().unwrap();
    assert_eq!(after.position, before.position);
    assert_eq!(after.look_at, before.look_at);
    assert_eq!(after.attitude, before.attitude);
}
