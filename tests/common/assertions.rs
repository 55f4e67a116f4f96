use approx::assert_relative_eq;
use nalgebra::{UnitQuaternion, Vector3};
use skyloop::components::{AircraftState, EntityKind, FollowCamera, WorldEntity};

/// Assert that two positions are approximately equal
#[track_caller]
pub fn assert_position_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}

/// Assert that two attitudes are approximately equal
#[track_caller]
pub fn assert_attitude_eq(
    actual: &UnitQuaternion<f64>,
    expected: &UnitQuaternion<f64>,
    epsilon: f64,
) {
    let angle = actual.angle_to(expected);
    assert!(
        angle < epsilon,
        "Attitude difference {} exceeds epsilon {}",
        angle,
        epsilon
    );
}

/// Assert that aircraft state is finite and self-consistent
#[track_caller]
pub fn assert_aircraft_state_valid(state: &AircraftState) {
    assert!(
        state.position.iter().all(|x| x.is_finite()),
        "Position is not finite: {:?}",
        state.position
    );
    assert!(
        state.velocity.iter().all(|x| x.is_finite()),
        "Velocity is not finite: {:?}",
        state.velocity
    );
    assert_attitude_eq(
        state.orientation(),
        &state.attitude().to_quaternion(),
        1e-9,
    );
}

#[track_caller]
pub fn assert_camera_valid(camera: &FollowCamera) {
    assert!(camera.position.iter().all(|x| x.is_finite()));
    assert!(camera.look_at.iter().all(|x| x.is_finite()));
    assert_eq!(camera.up, Vector3::y(), "Camera up must be world up");
}

/// Assert that every wrapped axis of an entity lies inside its bounds
#[track_caller]
pub fn assert_within_bounds(entity: &WorldEntity) {
    let p = entity.position;
    let b = entity.bounds;
    match entity.kind {
        EntityKind::Cloud => assert!(
            b.contains(&p),
            "Cloud {:?} escaped its bounds: {:?}",
            entity.id,
            p
        ),
        EntityKind::Bird | EntityKind::OtherPlane => assert!(
            b.contains_horizontal(&p),
            "{:?} {:?} escaped its bounds: {:?}",
            entity.kind,
            entity.id,
            p
        ),
        EntityKind::Tree | EntityKind::Mountain => {}
    }
}
