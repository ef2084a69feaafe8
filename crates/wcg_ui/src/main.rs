//! World Clock GUI - Main entry point
//!
//! This is the application entry point using iced. It handles:
//! - Application-level logging initialization
//! - Configuration loading
//! - Application launch

use std::path::PathBuf;

use wcg_core::config::ConfigManager;
use wcg_core::logging::init_tracing_with_file;

mod app;
mod theme;
mod widgets;

use app::App;

/// Default config path: .config/settings.toml (relative to current working directory)
fn default_config_path() -> PathBuf {
    PathBuf::from(".config").join("settings.toml")
}

fn main() -> iced::Result {
    // Load configuration first (needed for log level and logs path)
    let config_path = default_config_path();
    let mut config_manager = ConfigManager::new(&config_path);

    if let Err(e) = config_manager.load_or_create() {
        eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
    }

    // Initialize application-level logging
    let logging = config_manager.settings().logging.clone();
    let logs_dir = PathBuf::from(&logging.logs_folder);
    let _log_guard = init_tracing_with_file(logging.level, &logs_dir);

    tracing::info!("World Clock GUI starting");
    tracing::info!("Config: {}", config_path.display());
    tracing::info!("Core version: {}", wcg_core::version());

    let canvas_size = config_manager.settings().window.canvas_size as f32;
    let window_size = iced::Size::new(canvas_size + 20.0, canvas_size * 2.0 + 200.0);

    iced::application(
        move || App::new(config_manager.clone()),
        App::update,
        App::view,
    )
    .title(App::title)
    .subscription(App::subscription)
    .theme(App::theme)
    .window_size(window_size)
    .run()
}
