//! Configuration management for World Clock GUI.
//!
//! This module provides:
//! - TOML-based configuration with logical sections
//! - Atomic file writes (write to temp, then rename)
//! - Validation on load with automatic defaults
//!
//! # Example
//!
//! ```no_run
//! use wcg_core::config::ConfigManager;
//!
//! // Create manager and load (or create default) config
//! let mut config = ConfigManager::new(".config/settings.toml");
//! config.load_or_create().unwrap();
//!
//! // Read settings
//! println!("Timezone: {}", config.settings().clock.timezone);
//!
//! // Modify a setting and save
//! config.settings_mut().clock.ampm_mode = true;
//! config.save().unwrap();
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{ClockSettings, LoggingSettings, Settings, WindowSettings};
