//! Time update system.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per frame, applying `time_scale` to the provided delta.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Update elapsed and delta seconds on the `WorldTime` resource.
///
/// `dt` is expected to be the unscaled frame delta in seconds. The system
/// applies the current `time_scale`, writes both `elapsed` and `delta`, and
/// counts the frame.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = dt * wt.time_scale;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
    wt.frame_count += 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_world_time_scales_delta() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default().with_time_scale(2.0));

        update_world_time(&mut world, 0.25);
        update_world_time(&mut world, 0.25);

        let wt = world.resource::<WorldTime>();
        assert!((wt.elapsed - 1.0).abs() < 1e-6);
        assert!((wt.delta - 0.5).abs() < 1e-6);
        assert_eq!(wt.frame_count, 2);
    }
}
