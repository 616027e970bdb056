//! Interval timer tick events.
//!
//! When an [`IntervalTimer`](crate::components::intervaltimer::IntervalTimer)
//! component fires during [`update_interval_timers`], an
//! [`IntervalTimerEvent`] is triggered for its entity. Observers react to the
//! tick with full world access, which in-component listeners do not have.
//!
//! # Example
//!
//! ```ignore
//! world.add_observer(|trigger: On<IntervalTimerEvent>, mut timers: Query<&mut IntervalTimer>| {
//!     if let Ok(mut timer) = timers.get_mut(trigger.event().entity) {
//!         timer.stop();
//!     }
//! });
//! ```
//!
//! # Related
//!
//! - [`crate::components::intervaltimer::IntervalTimer`] – the timer component
//! - [`crate::systems::countdown::countdown_observer`] – observer driving the countdown
//!
//! [`update_interval_timers`]: crate::systems::intervaltimer::update_interval_timers

use bevy_ecs::prelude::*;

/// Event emitted when an interval timer ticks.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalTimerEvent {
    /// The entity whose timer ticked.
    pub entity: Entity,
}
