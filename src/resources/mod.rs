//! ECS resources made available to systems.
//!
//! Overview
//! - `timerconfig` – INI-backed settings for the countdown driver
//! - `worldsignals` – global signals read back by the host after each frame
//! - `worldtime` – simulation time and delta
pub mod timerconfig;
pub mod worldsignals;
pub mod worldtime;
