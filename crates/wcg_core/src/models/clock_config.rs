//! Per-clock display configuration.

use chrono_tz::Tz;

use crate::timezone::{self, TimezoneError};

/// Display options for one clock face.
///
/// Owned by the application shell and read by the renderer on every
/// redraw. Option handlers produce an updated value and hand it back;
/// render code never mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockConfig {
    pub timezone: Tz,
    /// 12-hour display when true, 24-hour otherwise.
    pub ampm_mode: bool,
    /// One-hour subtraction from the displayed hour, independent of
    /// the timezone database's own DST handling.
    pub summer_offset: bool,
}

impl ClockConfig {
    /// Build a config for the given IANA timezone name with both
    /// toggles off.
    ///
    /// Fails fast on an unknown identifier so the caller can keep its
    /// previous config.
    pub fn new(timezone: &str) -> Result<Self, TimezoneError> {
        Ok(Self {
            timezone: timezone::resolve(timezone)?,
            ampm_mode: false,
            summer_offset: false,
        })
    }

    /// Copy of this config pointing at a different timezone.
    pub fn with_timezone(&self, name: &str) -> Result<Self, TimezoneError> {
        Ok(Self {
            timezone: timezone::resolve(name)?,
            ..*self
        })
    }

    pub fn toggled_ampm(&self) -> Self {
        Self {
            ampm_mode: !self.ampm_mode,
            ..*self
        }
    }

    pub fn toggled_summer(&self) -> Self {
        Self {
            summer_offset: !self.summer_offset,
            ..*self
        }
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            timezone: chrono_tz::Asia::Tokyo,
            ampm_mode: false,
            summer_offset: false,
        }
    }
}
