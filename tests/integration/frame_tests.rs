use approx::assert_relative_eq;
use bevy::input::gamepad::{GamepadConnection, GamepadConnectionEvent};
use skyloop::{
    components::{AircraftState, ControlInput},
    resources::{FrameClock, InputSourceHandle, Telemetry, WorldEntities},
};

use crate::common::{TestAppBuilder, TEST_DT};

#[test]
fn test_fixed_step_clock() {
    let mut app = TestAppBuilder::new().build();
    app.run_steps(59);

    let clock = app.get_state::<FrameClock>().unwrap();
    assert_eq!(clock.frame_count(), 60);
    assert_eq!(clock.delta_seconds(), TEST_DT);
    assert_relative_eq!(clock.elapsed_seconds(), 1.0, epsilon = 1e-9);
    assert_eq!(clock.clamped_frames(), 0);
}

#[test]
fn test_long_frames_are_clamped() {
    let mut app = TestAppBuilder::new()
        .with_input(ControlInput::with_throttle(1.0))
        .with_fixed_dt(0.5)
        .build();

    let clock = app.get_state::<FrameClock>().unwrap();
    assert_eq!(clock.delta_seconds(), 0.1);
    assert_eq!(clock.raw_delta_seconds(), 0.5);
    assert_eq!(clock.clamped_frames(), 1);

    // the aircraft integrated 0.1 s, not 0.5 s
    let state = app.query_single::<AircraftState>().unwrap();
    assert_relative_eq!(state.speed(), 1.0, epsilon = 1e-12);
}

#[test]
fn test_custom_clamp() {
    let app = TestAppBuilder::new()
        .with_fixed_dt(0.5)
        .with_max_dt(0.25)
        .build();
    assert_eq!(app.get_state::<FrameClock>().unwrap().delta_seconds(), 0.25);
}

#[test]
fn test_scripted_input_reaches_the_frame() {
    let input = ControlInput::new(0.5, -0.25, 0.1, 0.75);
    let mut app = TestAppBuilder::new().with_input(input).build();
    assert_eq!(*app.get_state::<ControlInput>().unwrap(), input);

    app.get_state_mut::<InputSourceHandle>()
        .unwrap()
        .set_script(ControlInput::with_throttle(0.2));
    app.run_frame();
    assert_eq!(
        *app.get_state::<ControlInput>().unwrap(),
        ControlInput::with_throttle(0.2)
    );
}

#[test]
fn test_out_of_range_script_is_clamped() {
    let app = TestAppBuilder::new()
        .with_input(ControlInput::new(3.0, -3.0, f64::NAN, 2.0))
        .build();
    let input = *app.get_state::<ControlInput>().unwrap();
    assert_eq!(input, ControlInput::new(1.0, -1.0, 0.0, 1.0));
}

#[test]
fn test_no_device_means_neutral_input() {
    let mut app = TestAppBuilder::new().with_gamepad_input().build();
    app.run_steps(5);

    assert!(app.get_state::<ControlInput>().unwrap().is_neutral());
    assert!(app.get_state::<InputSourceHandle>().unwrap().claimed().is_none());
    assert!(!app.get_state::<Telemetry>().unwrap().device_connected);
}

#[test]
fn test_connection_events_update_the_handle() {
    let mut app = TestAppBuilder::new().with_gamepad_input().build();
    let first = app.app.world_mut().spawn_empty().id();
    let second = app.app.world_mut().spawn_empty().id();

    for device in [first, second] {
        app.app.world_mut().send_event(GamepadConnectionEvent {
            gamepad: device,
            connection: GamepadConnection::Connected {
                name: "Test Yoke".to_string(),
                vendor_id: None,
                product_id: None,
            },
        });
    }
    app.run_frame();
    assert_eq!(
        app.get_state::<InputSourceHandle>().unwrap().claimed(),
        Some(first)
    );
    assert!(app.get_state::<Telemetry>().unwrap().device_connected);

    app.app.world_mut().send_event(GamepadConnectionEvent {
        gamepad: first,
        connection: GamepadConnection::Disconnected,
    });
    app.run_frame();
    assert_eq!(
        app.get_state::<InputSourceHandle>().unwrap().claimed(),
        Some(second)
    );
    // the claimed entity carries no gamepad state, so input stays neutral
    assert!(app.get_state::<ControlInput>().unwrap().is_neutral());
}

#[test]
fn test_telemetry_tracks_the_frame() {
    let mut app = TestAppBuilder::new()
        .with_input(ControlInput::with_throttle(1.0))
        .build();
    app.run_steps(29);

    let speed = app.query_single::<AircraftState>().unwrap().speed();
    let entities = app.get_state::<WorldEntities>().unwrap().len();
    let telemetry = app.get_state::<Telemetry>().unwrap().clone();

    assert_eq!(telemetry.frame, 30);
    assert_eq!(telemetry.speed, speed);
    assert_eq!(telemetry.world_entities, entities);
    assert_eq!(telemetry.input.throttle, 1.0);
    assert!(telemetry.device_connected);

    let json: serde_json::Value = serde_json::from_str(&telemetry.to_json().unwrap()).unwrap();
    assert_eq!(json["frame"], 30);
}
