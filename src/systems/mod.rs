//! Engine systems.
//!
//! Submodules overview
//! - [`countdown`] – observer applying timer ticks to countdowns
//! - [`intervaltimer`] – poll interval timers against world time
//! - [`time`] – update simulation time and delta

pub mod countdown;
pub mod intervaltimer;
pub mod time;
