use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};

use crate::components::{AircraftState, FollowCamera};

pub fn to_vec3(v: &Vector3<f64>) -> Vec3 {
    Vec3::new(v.x as f32, v.y as f32, v.z as f32)
}

pub fn to_quat(q: &UnitQuaternion<f64>) -> Quat {
    Quat::from_xyzw(q.i as f32, q.j as f32, q.k as f32, q.w as f32)
}

/// Mirror the simulated aircraft pose into its render transform.
pub fn aircraft_transform_system(
    mut query: Query<(&AircraftState, &mut Transform), Changed<AircraftState>>,
) {
    for (state, mut transform) in query.iter_mut() {
        transform.translation = to_vec3(&state.position);
        transform.rotation = to_quat(state.orientation());
    }
}

/// Point the camera transform at its look-at point with world up.
pub fn camera_transform_system(
    mut query: Query<(&FollowCamera, &mut Transform), Changed<FollowCamera>>,
) {
    for (camera, mut transform) in query.iter_mut() {
        *transform = Transform::from_translation(to_vec3(&camera.position))
            .looking_at(to_vec3(&camera.look_at), to_vec3(&camera.up));
    }
}
