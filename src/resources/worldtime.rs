use bevy_ecs::prelude::Resource;

/// Shared simulation clock, advanced once per frame by
/// [`update_world_time`](crate::systems::time::update_world_time).
///
/// `elapsed` is the time domain interval timers are polled against.
#[derive(Resource, Debug, Clone, Copy)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}
