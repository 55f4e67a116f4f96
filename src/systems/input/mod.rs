mod gamepad;

pub use gamepad::{gamepad_connection_system, read_input_system};
