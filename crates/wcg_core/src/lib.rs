//! WCG Core - Backend logic for World Clock GUI
//!
//! This crate contains all clock logic with zero UI dependencies:
//! face geometry, hand computation, timezone validation, settings,
//! and logging bootstrap. It can be used by the GUI application or
//! exercised directly from tests.

pub mod clock;
pub mod config;
pub mod logging;
pub mod models;
pub mod timezone;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_returns_value() {
        assert!(!version().is_empty());
    }
}
