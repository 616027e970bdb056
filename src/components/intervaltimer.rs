//! Poll-driven repeating interval timer.
//!
//! The [`IntervalTimer`] component counts whole seconds against a time value
//! supplied by the caller on every frame. When the configured interval has
//! elapsed, every registered listener receives a [`Tick`] and the timer
//! rearms itself on the following poll.
//!
//! # How It Works
//!
//! 1. The timer is created from a duration in milliseconds, truncated to whole
//!    seconds
//! 2. [`IntervalTimer::start`] activates it; nothing is armed yet
//! 3. Each [`IntervalTimer::poll`] call:
//!    - does nothing while stopped
//!    - arms the timer (`target = now + interval`) if it is not armed
//!    - otherwise fires a tick when `round(now) >= target` and disarms
//! 4. The next poll after a tick arms a fresh interval from that poll's time
//!
//! At most one tick fires per poll. If the caller's time jumps past several
//! intervals, the skipped intervals are dropped.
//!
//! # Example
//!
//! ```
//! use intervaltimer::components::intervaltimer::IntervalTimer;
//!
//! let mut timer = IntervalTimer::new(1000.0);
//! timer.register_listener(|_tick| println!("it ticked"));
//! timer.start();
//!
//! assert!(!timer.poll(0.0)); // arms, target = 1.0
//! assert!(timer.poll(0.6)); // round(0.6) = 1 >= 1.0
//! ```
//!
//! # Related
//!
//! - [`crate::systems::intervaltimer::update_interval_timers`] – polls timers from [`WorldTime`](crate::resources::worldtime::WorldTime)
//! - [`crate::events::intervaltimer::IntervalTimerEvent`] – ECS event triggered on each tick

use bevy_ecs::prelude::Component;
use crossbeam_channel::{Receiver, unbounded};
use log::trace;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Marker delivered to listeners when an interval elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tick;

/// Callback invoked on every tick.
///
/// Listeners must be `Send + Sync` so the timer can be stored as an ECS
/// component.
pub type TickListener = Box<dyn FnMut(Tick) + Send + Sync>;

/// Serializable view of a timer's state, used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub interval_seconds: i32,
    pub started: bool,
    pub armed: bool,
    /// `None` while the timer is not armed.
    pub target_time: Option<f32>,
}

/// Repeating timer driven by caller-supplied time samples.
///
/// Time values are in whatever monotonic domain the caller uses, typically
/// [`WorldTime::elapsed`](crate::resources::worldtime::WorldTime) in seconds.
#[derive(Component)]
pub struct IntervalTimer {
    interval_seconds: i32,
    started: bool,
    armed: bool,
    target_time: f32,
    listeners: SmallVec<[TickListener; 2]>,
}

impl IntervalTimer {
    /// Create a stopped timer.
    ///
    /// # Arguments
    ///
    /// * `duration_ms` - Interval in milliseconds. The fractional part of the
    ///   seconds value is discarded, so anything under 1000 ms gives an
    ///   interval of zero (the timer ticks on the poll right after arming).
    ///   Zero and negative values are accepted as-is.
    pub fn new(duration_ms: f32) -> Self {
        IntervalTimer {
            interval_seconds: (duration_ms / 1000.0) as i32,
            started: false,
            armed: false,
            target_time: 0.0,
            listeners: SmallVec::new(),
        }
    }

    /// Activate polling. Arming happens lazily on the next poll.
    pub fn start(&mut self) {
        self.started = true;
    }

    /// Deactivate polling without clearing the current target.
    ///
    /// A later [`start`](Self::start) resumes counting toward the same target
    /// unless [`reset`](Self::reset) is called in between.
    pub fn stop(&mut self) {
        self.started = false;
    }

    /// Drop the current target so the next poll arms a fresh interval.
    ///
    /// Does not change whether the timer is started.
    pub fn reset(&mut self) {
        self.armed = false;
        self.target_time = 0.0;
    }

    /// Add a listener. Listeners run in registration order on every tick.
    pub fn register_listener<F>(&mut self, listener: F)
    where
        F: FnMut(Tick) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Register a listener that forwards every tick into a channel.
    ///
    /// Useful when the reaction to a tick needs access to the timer itself,
    /// which listeners cannot reach while [`poll`](Self::poll) is running.
    /// Ticks pile up if the receiver is never drained; once the receiver is
    /// dropped, sends are silently discarded.
    pub fn subscribe(&mut self) -> Receiver<Tick> {
        let (tx, rx) = unbounded();
        self.register_listener(move |tick| {
            // Receiver dropped; nothing to deliver to
            let _ = tx.send(tick);
        });
        rx
    }

    /// Advance the timer with the current time. Returns `true` if a tick fired.
    ///
    /// Expected to be called once per frame with a non-decreasing
    /// `current_time`. The first poll after [`start`](Self::start),
    /// [`reset`](Self::reset), or a tick only arms the timer and never fires.
    pub fn poll(&mut self, current_time: f32) -> bool {
        if !self.started {
            return false;
        }

        if !self.armed {
            self.target_time = current_time + self.interval_seconds as f32;
            self.armed = true;
            trace!(
                "interval timer armed at {} (target {})",
                current_time, self.target_time
            );
            return false;
        }

        // f32::round rounds half-way cases away from zero
        if current_time.round() < self.target_time {
            return false;
        }

        self.armed = false;
        trace!(
            "interval timer ticked at {} (target {})",
            current_time, self.target_time
        );
        for listener in self.listeners.iter_mut() {
            listener(Tick);
        }
        true
    }

    /// Whether the timer is active.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Whether a target has been computed for the current cycle.
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// The whole-second interval derived at construction.
    pub fn interval_seconds(&self) -> i32 {
        self.interval_seconds
    }

    /// Absolute time of the next tick, if armed.
    pub fn target_time(&self) -> Option<f32> {
        self.armed.then_some(self.target_time)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            interval_seconds: self.interval_seconds,
            started: self.started,
            armed: self.armed,
            target_time: self.target_time(),
        }
    }
}

impl fmt::Debug for IntervalTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntervalTimer")
            .field("interval_seconds", &self.interval_seconds)
            .field("started", &self.started)
            .field("armed", &self.armed)
            .field("target_time", &self.target_time())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
