mod motion;

pub use motion::{advance_entity, advance_world, world_system};
