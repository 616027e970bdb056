//! World setup and frame stepping for the countdown.
//!
//! Shared by the `countdown` binary and the integration tests so both drive
//! the exact same schedule.

use bevy_ecs::prelude::*;
use log::info;

use crate::components::countdown::Countdown;
use crate::components::intervaltimer::IntervalTimer;
use crate::resources::timerconfig::TimerConfig;
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;
use crate::systems::countdown::{countdown_observer, publish_countdown};
use crate::systems::intervaltimer::update_interval_timers;
use crate::systems::time::update_world_time;

/// Insert resources, register observers and spawn the countdown entity.
///
/// The spawned timer is already started; it arms on the first frame.
pub fn setup(world: &mut World, config: &TimerConfig) -> Entity {
    world.insert_resource(WorldTime::default().with_time_scale(config.time_scale));

    let countdown = Countdown::new(config.countdown);
    let mut signals = WorldSignals::default();
    publish_countdown(&mut signals, &countdown);
    world.insert_resource(signals);

    world.add_observer(countdown_observer);
    world.flush();

    let mut timer = IntervalTimer::new(config.duration_ms);
    timer.start();
    info!(
        "Countdown from {} every {}s",
        config.countdown,
        timer.interval_seconds()
    );

    world.spawn((timer, countdown)).id()
}

pub fn build_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(update_interval_timers);
    schedule
}

/// Advance world time by `dt` (unscaled seconds) and run one frame.
pub fn frame(world: &mut World, schedule: &mut Schedule, dt: f32) {
    update_world_time(world, dt);
    schedule.run(world);
}
