//! ECS components for entities.
//!
//! Submodules overview:
//! - [`countdown`] – counter decremented on each timer tick, with display text
//! - [`intervaltimer`] – poll-driven repeating timer that notifies listeners

pub mod countdown;
pub mod intervaltimer;
