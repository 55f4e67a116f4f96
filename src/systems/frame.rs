use bevy::prelude::*;

use crate::resources::FrameClock;

/// Measure the frame and publish the clamped step for the rest of the frame.
pub fn frame_clock_system(time: Res<Time>, mut clock: ResMut<FrameClock>) {
    let dt = clock.tick(time.delta_secs_f64());
    if clock.was_clamped() {
        warn!(
            "Frame took {:.3}s, simulating {:.3}s instead",
            clock.raw_delta_seconds(),
            dt
        );
    }
}
