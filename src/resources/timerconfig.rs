//! Countdown driver configuration resource.
//!
//! Settings for the `countdown` binary loaded from an INI file. Defaults are
//! safe to run with when the file is missing.
//!
//! # Configuration File Format
//!
//! ```ini
//! [timer]
//! duration_ms = 1000
//! countdown = 60
//!
//! [loop]
//! target_fps = 60
//! time_scale = 1.0
//! jitter = 0.0
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

const DEFAULT_DURATION_MS: f32 = 1000.0;
const DEFAULT_COUNTDOWN: i32 = 60;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_TIME_SCALE: f32 = 1.0;
const DEFAULT_JITTER: f32 = 0.0;
const DEFAULT_CONFIG_PATH: &str = "./timer.ini";

/// Countdown driver configuration.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct TimerConfig {
    /// Interval between ticks in milliseconds.
    pub duration_ms: f32,
    /// Value the countdown starts from.
    pub countdown: i32,
    /// Frames per second of the driving loop.
    pub target_fps: u32,
    /// Multiplier applied to every frame delta.
    pub time_scale: f32,
    /// Relative random variation of the frame delta, `0.0..=1.0`.
    pub jitter: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            countdown: DEFAULT_COUNTDOWN,
            target_fps: DEFAULT_TARGET_FPS,
            time_scale: DEFAULT_TIME_SCALE,
            jitter: DEFAULT_JITTER,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [timer] section
        if let Some(ms) = config.getfloat("timer", "duration_ms").ok().flatten() {
            self.duration_ms = ms as f32;
        }
        if let Some(countdown) = config.getint("timer", "countdown").ok().flatten() {
            self.countdown = countdown as i32;
        }

        // [loop] section
        if let Some(fps) = config.getuint("loop", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(scale) = config.getfloat("loop", "time_scale").ok().flatten() {
            self.time_scale = scale as f32;
        }
        if let Some(jitter) = config.getfloat("loop", "jitter").ok().flatten() {
            self.jitter = jitter as f32;
        }

        info!(
            "Loaded config: interval={}ms, countdown={}, fps={}, time_scale={}, jitter={}",
            self.duration_ms, self.countdown, self.target_fps, self.time_scale, self.jitter
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [timer] section
        config.set("timer", "duration_ms", Some(self.duration_ms.to_string()));
        config.set("timer", "countdown", Some(self.countdown.to_string()));

        // [loop] section
        config.set("loop", "target_fps", Some(self.target_fps.to_string()));
        config.set("loop", "time_scale", Some(self.time_scale.to_string()));
        config.set("loop", "jitter", Some(self.jitter.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Fixed frame delta in seconds for `target_fps`.
    pub fn frame_delta(&self) -> f32 {
        1.0 / self.target_fps.max(1) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_ini(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "intervaltimer-{}-{}.ini",
            name,
            std::process::id()
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = TimerConfig::new();
        assert_eq!(config.duration_ms, 1000.0);
        assert_eq!(config.countdown, 60);
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.config_path, PathBuf::from("./timer.ini"));
    }

    #[test]
    fn test_load_overrides_present_keys_only() {
        let path = temp_ini("partial", "[timer]\nduration_ms = 2500\n\n[loop]\njitter = 0.25\n");
        let mut config = TimerConfig::with_path(&path);

        config.load_from_file().unwrap();

        assert_eq!(config.duration_ms, 2500.0);
        assert_eq!(config.jitter, 0.25);
        assert_eq!(config.countdown, 60);
        assert_eq!(config.target_fps, 60);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_missing_file_errors() {
        let mut config = TimerConfig::with_path("/nonexistent/dir/timer.ini");
        let err = config.load_from_file().unwrap_err();
        assert!(err.starts_with("Failed to load config file"));
        assert_eq!(config, TimerConfig::with_path("/nonexistent/dir/timer.ini"));
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_ini("saved", "");
        let mut config = TimerConfig::with_path(&path);
        config.countdown = 5;
        config.target_fps = 30;
        config.time_scale = 2.0;
        config.save_to_file().unwrap();

        let mut loaded = TimerConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        assert_eq!(loaded, config);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_frame_delta_guards_zero_fps() {
        let mut config = TimerConfig::new();
        config.target_fps = 0;
        assert_eq!(config.frame_delta(), 1.0);
    }
}
