use std::f64::consts::PI;

/// Full-stick attitude rate, rad/s.
pub const DEFAULT_MAX_DEFLECTION: f64 = PI / 4.0;

/// Largest frame delta accepted by the frame clock, s.
pub const DEFAULT_MAX_FRAME_DT: f64 = 0.1;

/// Frame rate at which a per-frame camera smoothing factor is defined.
pub const REFERENCE_FRAME_RATE: f64 = 60.0;

/// Wing flaps per second of bird phase.
pub const DEFAULT_FLAP_RATE: f64 = 10.0;

/// Ratio between the flap phase and the flock heading oscillation.
pub const FLOCK_HEADING_RATE: f64 = 0.1;

/// Peak wing deflection of a flapping bird, rad.
pub const WING_FLAP_AMPLITUDE: f64 = 0.2;

// Display units
pub const MS_TO_KNOTS: f64 = 1.943_844;
pub const M_TO_FEET: f64 = 3.280_84;
