//! Global signal storage resource.
//!
//! The [`WorldSignals`] resource is a world-wide map that systems and
//! observers write to and the host reads back after each frame, for example
//! the countdown text and the "countdown over" flag.

use bevy_ecs::prelude::Resource;
use rustc_hash::{FxHashMap, FxHashSet};

/// Global signal storage for cross-system communication.
#[derive(Debug, Clone, Default, Resource)]
pub struct WorldSignals {
    /// Integer signals addressed by string keys.
    pub integers: FxHashMap<String, i32>,
    /// String signals addressed by string keys.
    pub strings: FxHashMap<String, String>,
    /// Presence-only boolean flags; a key being present means "true".
    pub flags: FxHashSet<String>,
}

impl WorldSignals {
    /// Set an integer signal value.
    pub fn set_integer(&mut self, key: impl Into<String>, value: i32) {
        self.integers.insert(key.into(), value);
    }
    /// Get an integer signal by key.
    pub fn get_integer(&self, key: &str) -> Option<i32> {
        self.integers.get(key).copied()
    }
    /// Set a string signal value.
    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.strings.insert(key.into(), value.into());
    }
    /// Get a string signal by key.
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }
    /// Mark a flag as present/true.
    pub fn set_flag(&mut self, key: impl Into<String>) {
        self.flags.insert(key.into());
    }
    /// Remove a flag (make it false/absent).
    pub fn clear_flag(&mut self, key: &str) {
        self.flags.remove(key);
    }
    /// Check whether a flag is present/true.
    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signals_set_and_get() {
        let mut signals = WorldSignals::default();
        signals.set_integer("seconds_left", 3);
        signals.set_string("countdown_text", "3 Seconds Left");

        assert_eq!(signals.get_integer("seconds_left"), Some(3));
        assert_eq!(signals.get_string("countdown_text"), Some("3 Seconds Left"));
        assert_eq!(signals.get_integer("missing"), None);
    }

    #[test]
    fn test_flags_toggle() {
        let mut signals = WorldSignals::default();
        assert!(!signals.has_flag("countdown_over"));
        signals.set_flag("countdown_over");
        assert!(signals.has_flag("countdown_over"));
        signals.clear_flag("countdown_over");
        assert!(!signals.has_flag("countdown_over"));
    }
}
