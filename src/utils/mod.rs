pub mod constants;
pub mod math;
pub mod rng;

pub use constants::*;
pub use math::*;
pub use rng::RngManager;
