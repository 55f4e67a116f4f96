mod force_calculator;
mod integrator;

pub use force_calculator::compute_forces;
pub use integrator::{advance_aircraft, flight_system};
