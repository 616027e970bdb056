//! Countdown observer.
//!
//! Applies interval timer ticks to [`Countdown`] components and mirrors the
//! result into [`WorldSignals`] so the host can display it.
//!
//! Signals written:
//! - `seconds_left` (integer) – remaining count
//! - `countdown_text` (string) – display text
//! - `countdown_over` (flag) – set once the countdown finishes

use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::countdown::Countdown;
use crate::components::intervaltimer::IntervalTimer;
use crate::events::intervaltimer::IntervalTimerEvent;
use crate::resources::worldsignals::WorldSignals;

pub const SECONDS_LEFT_SIGNAL: &str = "seconds_left";
pub const COUNTDOWN_TEXT_SIGNAL: &str = "countdown_text";
pub const COUNTDOWN_OVER_FLAG: &str = "countdown_over";

/// Publish a countdown's current state into the world signals.
pub fn publish_countdown(signals: &mut WorldSignals, countdown: &Countdown) {
    signals.set_integer(SECONDS_LEFT_SIGNAL, countdown.remaining);
    signals.set_string(COUNTDOWN_TEXT_SIGNAL, countdown.text.clone());
    if countdown.finished {
        signals.set_flag(COUNTDOWN_OVER_FLAG);
    }
}

/// Observer that counts down on each [`IntervalTimerEvent`].
///
/// Entities with an interval timer but no [`Countdown`] are ignored. When the
/// countdown runs out, the entity's timer is stopped.
pub fn countdown_observer(
    trigger: On<IntervalTimerEvent>,
    mut query: Query<(&mut Countdown, &mut IntervalTimer)>,
    mut signals: ResMut<WorldSignals>,
) {
    let entity = trigger.event().entity;
    let Ok((mut countdown, mut timer)) = query.get_mut(entity) else {
        return;
    };

    if countdown.on_tick() {
        timer.stop();
        info!("Countdown on {:?} finished, timer stopped", entity);
    } else {
        debug!("Countdown on {:?}: {}", entity, countdown.text);
    }
    publish_countdown(&mut signals, &countdown);
}
