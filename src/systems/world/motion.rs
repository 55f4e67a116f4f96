use bevy::prelude::*;
use nalgebra::Vector3;
use rayon::prelude::*;

use crate::components::{Motion, WorldEntity};
use crate::resources::{FrameClock, WorldEntities};
use crate::utils::FLOCK_HEADING_RATE;

/// Move every ambient entity forward by one frame.
pub fn world_system(mut world: ResMut<WorldEntities>, clock: Res<FrameClock>) {
    advance_world(&mut world, clock.delta_seconds());
}

/// Advance all entities independently. A non-positive `dt` changes nothing.
pub fn advance_world(world: &mut WorldEntities, dt: f64) {
    if dt <= 0.0 {
        return;
    }
    world
        .entities_mut()
        .par_iter_mut()
        .for_each(|entity| advance_entity(entity, dt));
}

/// Advance one entity and wrap it back into its bounds.
pub fn advance_entity(entity: &mut WorldEntity, dt: f64) {
    if dt <= 0.0 {
        return;
    }
    let bounds = entity.bounds;
    match &mut entity.motion {
        Motion::Cloud { direction, speed } => {
            let moved = entity.position + *direction * (*speed * dt);
            entity.position = bounds.wrap_all(&moved);
        }
        Motion::Bird {
            centre,
            offset,
            speed,
            phase,
            flap_rate,
            ..
        } => {
            *phase += dt * *flap_rate;
            let drift = *phase * FLOCK_HEADING_RATE;
            *centre += Vector3::new(drift.sin(), 0.0, drift.cos()) * (*speed * dt);

            entity.position = bounds.wrap_horizontal(&(*centre + *offset));
            *centre = entity.position - *offset;
        }
        Motion::OtherPlane { heading, speed } => {
            let direction = Vector3::new(heading.cos(), 0.0, heading.sin());
            let moved = entity.position + direction * (*speed * dt);
            entity.position = bounds.wrap_horizontal(&moved);
        }
        Motion::Static => {}
    }
}
