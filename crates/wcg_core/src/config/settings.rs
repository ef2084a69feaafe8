//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML
//! tables. Every field carries a serde default so partial files load
//! cleanly.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;
use crate::models::{ClockConfig, StylePreset};
use crate::timezone::TimezoneError;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Clock display settings.
    #[serde(default)]
    pub clock: ClockSettings,

    /// Window settings.
    #[serde(default)]
    pub window: WindowSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Clock display configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockSettings {
    /// IANA timezone identifier shown on the clocks.
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// 12-hour display when true, 24-hour otherwise.
    #[serde(default)]
    pub ampm_mode: bool,

    /// One-hour summer offset subtracted from the displayed hour.
    #[serde(default)]
    pub summer_offset: bool,
}

pub(crate) fn default_timezone() -> String {
    "Asia/Tokyo".to_string()
}

impl Default for ClockSettings {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            ampm_mode: false,
            summer_offset: false,
        }
    }
}

impl ClockSettings {
    /// Resolve these settings into a validated `ClockConfig`.
    pub fn to_clock_config(&self) -> Result<ClockConfig, TimezoneError> {
        Ok(ClockConfig {
            timezone: crate::timezone::resolve(&self.timezone)?,
            ampm_mode: self.ampm_mode,
            summer_offset: self.summer_offset,
        })
    }

    /// Write a `ClockConfig` back into these settings.
    pub fn set_from(&mut self, config: &ClockConfig) {
        self.timezone = config.timezone.name().to_string();
        self.ampm_mode = config.ampm_mode;
        self.summer_offset = config.summer_offset;
    }
}

/// Window configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowSettings {
    /// Side length of each (square) clock canvas, in logical pixels.
    #[serde(default = "default_canvas_size")]
    pub canvas_size: u32,

    /// Background style preset.
    #[serde(default)]
    pub style: StylePreset,
}

fn default_canvas_size() -> u32 {
    400
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            canvas_size: default_canvas_size(),
            style: StylePreset::default(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default log level (overridable via RUST_LOG).
    #[serde(default)]
    pub level: LogLevel,

    /// Folder for log files.
    #[serde(default = "default_logs_folder")]
    pub logs_folder: String,
}

fn default_logs_folder() -> String {
    ".logs".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            logs_folder: default_logs_folder(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_program() {
        let settings = Settings::default();
        assert_eq!(settings.clock.timezone, "Asia/Tokyo");
        assert!(!settings.clock.ampm_mode);
        assert!(!settings.clock.summer_offset);
        assert_eq!(settings.window.canvas_size, 400);
        assert_eq!(settings.window.style, StylePreset::Default);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let settings: Settings = toml::from_str("[clock]\nampm_mode = true\n").unwrap();
        assert!(settings.clock.ampm_mode);
        assert_eq!(settings.clock.timezone, "Asia/Tokyo");
        assert_eq!(settings.window.canvas_size, 400);
    }

    #[test]
    fn clock_settings_round_trip_through_clock_config() {
        let mut settings = ClockSettings::default();
        settings.timezone = "Europe/London".to_string();
        settings.summer_offset = true;

        let config = settings.to_clock_config().unwrap();
        assert_eq!(config.timezone, chrono_tz::Europe::London);
        assert!(config.summer_offset);

        let mut back = ClockSettings::default();
        back.set_from(&config);
        assert_eq!(back.timezone, "Europe/London");
        assert!(back.summer_offset);
        assert!(!back.ampm_mode);
    }

    #[test]
    fn unknown_timezone_fails_resolution() {
        let mut settings = ClockSettings::default();
        settings.timezone = "Atlantis/Capital".to_string();
        assert!(settings.to_clock_config().is_err());
    }
}
