//! Core enums used throughout the application.

use serde::{Deserialize, Serialize};

/// Background style preset for the window.
///
/// Maps to {system-default, black, white} backgrounds. Hand and label
/// colors are fixed and do not follow the preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StylePreset {
    /// Toolkit default background.
    #[default]
    Default,
    /// Black background.
    Dark,
    /// White background.
    Light,
}

impl StylePreset {
    /// All presets, in selector order.
    pub const ALL: [StylePreset; 3] = [
        StylePreset::Default,
        StylePreset::Dark,
        StylePreset::Light,
    ];
}

impl std::fmt::Display for StylePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StylePreset::Default => write!(f, "default"),
            StylePreset::Dark => write!(f, "dark"),
            StylePreset::Light => write!(f, "light"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_preset_serde_uses_lowercase() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            style: StylePreset,
        }

        let toml = toml::to_string(&Wrapper {
            style: StylePreset::Dark,
        })
        .unwrap();
        assert!(toml.contains("\"dark\""));

        let parsed: Wrapper = toml::from_str("style = \"light\"").unwrap();
        assert_eq!(parsed.style, StylePreset::Light);
    }

    #[test]
    fn display_matches_selector_values() {
        assert_eq!(StylePreset::Default.to_string(), "default");
        assert_eq!(StylePreset::Dark.to_string(), "dark");
        assert_eq!(StylePreset::Light.to_string(), "light");
    }
}
