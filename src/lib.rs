//! Interval timer library.
//!
//! A poll-driven repeating timer ([`components::intervaltimer::IntervalTimer`])
//! plus the ECS components, resources, systems, and events that drive it from
//! a per-frame game loop.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
