use bevy::prelude::*;

use crate::components::{
    AircraftConfig, AircraftState, ControlInput, EulerAngles, ForceBalance, PlayerAircraft,
};
use crate::resources::FrameClock;
use crate::systems::physics::compute_forces;

/// Advance the player's aircraft by one frame.
pub fn flight_system(
    mut query: Query<
        (&mut AircraftState, &AircraftConfig, &mut ForceBalance),
        With<PlayerAircraft>,
    >,
    input: Res<ControlInput>,
    clock: Res<FrameClock>,
) {
    let dt = clock.delta_seconds();
    for (mut state, config, mut balance) in query.iter_mut() {
        advance_aircraft(&mut state, config, &input, dt, &mut balance);
    }
}

/// Integrate one step of the flight model.
///
/// Semi-implicit Euler: velocity is updated from the summed forces first and the
/// position then moves with the new velocity. Attitude rates follow the stick
/// linearly and the quaternion is rebuilt from the angles. A non-positive `dt`
/// leaves the state untouched.
pub fn advance_aircraft(
    state: &mut AircraftState,
    config: &AircraftConfig,
    input: &ControlInput,
    dt: f64,
    balance: &mut ForceBalance,
) {
    if dt <= 0.0 {
        return;
    }
    let input = input.clamped();

    compute_forces(state, config, &input, balance);

    state.velocity += balance.acceleration * dt;
    state.position += state.velocity * dt;

    let rate = config.max_deflection * dt;
    state.rotate_by(EulerAngles::new(
        input.pitch * rate,
        input.yaw * rate,
        input.roll * rate,
    ));

    if let Some(floor) = config.altitude_floor {
        if state.position.y < floor {
            state.position.y = floor;
            if state.velocity.y < 0.0 {
                state.velocity.y = 0.0;
            }
        }
    }
}
