//! Interval timer system.
//!
//! Polls every [`IntervalTimer`](crate::components::intervaltimer::IntervalTimer)
//! with the current [`WorldTime::elapsed`](crate::resources::worldtime::WorldTime)
//! and triggers an [`IntervalTimerEvent`](crate::events::intervaltimer::IntervalTimerEvent)
//! for each one that ticks.
//!
//! # System Flow
//!
//! Each frame:
//!
//! 1. `update_world_time` advances the clock (scaled by `time_scale`)
//! 2. `update_interval_timers` polls each timer; in-component listeners run
//!    synchronously inside the poll
//! 3. Ticked timers get an `IntervalTimerEvent`, delivered to observers when
//!    the system's commands are applied

use bevy_ecs::prelude::*;

use crate::components::intervaltimer::IntervalTimer;
use crate::events::intervaltimer::IntervalTimerEvent;
use crate::resources::worldtime::WorldTime;

/// Poll all interval timers and emit an event for every tick.
pub fn update_interval_timers(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut IntervalTimer)>,
    mut commands: Commands,
) {
    let now = world_time.elapsed;
    for (entity, mut timer) in query.iter_mut() {
        if timer.poll(now) {
            commands.trigger(IntervalTimerEvent { entity });
        }
    }
}
