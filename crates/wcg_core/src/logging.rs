//! Logging infrastructure for World Clock GUI.
//!
//! This module provides:
//! - Application-wide tracing initialization
//! - Optional non-blocking file output alongside stderr
//! - A `LogLevel` that can live in the settings file
//!
//! Should be initialized once at application startup; the UI crate
//! calls `init_tracing_with_file` before opening the window.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log verbosity, ordered from most to least chatty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

impl LogLevel {
    /// Directive string understood by `EnvFilter`.
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Initialize global tracing subscriber for application-wide logging.
///
/// Respects RUST_LOG, falling back to the provided default level, and
/// writes to stderr with timestamps.
pub fn init_tracing(default_level: LogLevel) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(false))
        .with(env_filter(default_level))
        .init();
}

/// Initialize tracing with an additional non-blocking file layer.
///
/// Log files rotate daily under `logs_dir`. Returns the appender's
/// worker guard; dropping it stops the background writer, so the
/// caller keeps it alive for the life of the application. Falls back
/// to stderr-only logging if the directory cannot be created.
pub fn init_tracing_with_file(default_level: LogLevel, logs_dir: &Path) -> Option<WorkerGuard> {
    if let Err(e) = fs::create_dir_all(logs_dir) {
        eprintln!(
            "Warning: Failed to create logs directory {}: {}",
            logs_dir.display(),
            e
        );
        init_tracing(default_level);
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(logs_dir, "world-clock-gui.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(false))
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .with(env_filter(default_level))
        .init();

    Some(guard)
}

fn env_filter(default_level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_filter_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_str_matches_level() {
        assert_eq!(LogLevel::Debug.as_filter_str(), "debug");
        assert_eq!(LogLevel::Info.as_filter_str(), "info");
        assert_eq!(LogLevel::Error.to_string(), "error");
    }

    #[test]
    fn level_serde_uses_lowercase() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            level: LogLevel,
        }

        let parsed: Wrapper = toml::from_str("level = \"warn\"").unwrap();
        assert_eq!(parsed.level, LogLevel::Warn);
    }
}
