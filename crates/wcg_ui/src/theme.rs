//! Theme configuration for World Clock GUI.
//!
//! Maps the style presets to iced themes and window backgrounds, and
//! holds the fixed drawing colors for the clock face.

use iced::theme::{Base, Mode};
use iced::{Color, Theme};

use wcg_core::models::StylePreset;

/// Fixed drawing colors.
///
/// Hand and face colors do not change with the style preset.
pub mod colors {
    use super::Color;

    /// Boundary circle and tick labels
    pub const FACE: Color = Color::from_rgb(1.0, 0.0, 0.0);

    /// Hour hand
    pub const HOUR_HAND: Color = Color::BLACK;

    /// Minute hand
    pub const MINUTE_HAND: Color = Color::from_rgb(0.0, 0.0, 1.0);

    /// Second hand
    pub const SECOND_HAND: Color = Color::from_rgb(1.0, 0.0, 0.0);

    /// Status line for rejected input
    pub const ERROR_TEXT: Color = Color::from_rgb(0.85, 0.25, 0.25);
}

/// Spacing constants.
pub mod spacing {
    /// Small spacing (8px)
    pub const SM: f32 = 8.0;
    /// Medium spacing (12px)
    pub const MD: f32 = 12.0;
}

/// iced theme for a style preset.
pub fn iced_theme(style: StylePreset) -> Theme {
    match style {
        StylePreset::Default => <Theme as Base>::default(Mode::None),
        StylePreset::Dark => Theme::Dark,
        StylePreset::Light => Theme::Light,
    }
}

/// Window background for a style preset.
///
/// `None` leaves the toolkit default in place.
pub fn background(style: StylePreset) -> Option<Color> {
    match style {
        StylePreset::Default => None,
        StylePreset::Dark => Some(Color::BLACK),
        StylePreset::Light => Some(Color::WHITE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backgrounds_match_presets() {
        assert_eq!(background(StylePreset::Default), None);
        assert_eq!(background(StylePreset::Dark), Some(Color::BLACK));
        assert_eq!(background(StylePreset::Light), Some(Color::WHITE));
    }
}
