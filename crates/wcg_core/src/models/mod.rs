//! Data models for World Clock GUI.
//!
//! This module contains the shared structures read by both the clock
//! renderer and the UI shell:
//! - `StylePreset` for the background style selector
//! - `ClockConfig` for the per-clock display options

mod clock_config;
mod enums;

pub use clock_config::ClockConfig;
pub use enums::StylePreset;
