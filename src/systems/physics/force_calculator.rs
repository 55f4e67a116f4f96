use nalgebra::Vector3;

use crate::components::{
    AircraftConfig, AircraftState, ControlInput, Force, ForceBalance, ForceCategory, BODY_FORWARD,
    BODY_UP,
};
use crate::utils::normalize_or_zero;

/// Rebuild `balance` with the engine, lift and drag forces for the current state.
///
/// Engine and lift act along fixed body axes; drag opposes the world velocity.
/// At zero airspeed lift and drag are exactly zero.
pub fn compute_forces(
    state: &AircraftState,
    config: &AircraftConfig,
    input: &ControlInput,
    balance: &mut ForceBalance,
) {
    balance.clear();

    let speed = state.speed();
    let dynamic = speed * speed;

    balance.add_force(Force::body(
        BODY_FORWARD * (config.engine_force * input.throttle),
        ForceCategory::Propulsive,
    ));
    balance.add_force(Force::body(
        BODY_UP * (config.lift_coefficient * dynamic),
        ForceCategory::Lift,
    ));

    let drag = if speed > 0.0 {
        -normalize_or_zero(&state.velocity) * (config.drag_coefficient * dynamic)
    } else {
        Vector3::zeros()
    };
    balance.add_force(Force::inertial(drag, ForceCategory::Drag));

    balance.resolve(state.orientation(), config.mass);
}
