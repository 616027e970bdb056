//! Event types exchanged between systems and observers.
//!
//! Submodules:
//! - [`intervaltimer`] – tick notifications emitted by the interval timer system
pub mod intervaltimer;
