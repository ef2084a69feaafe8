//! Main application module for World Clock GUI.
//!
//! Owns the window content, the once-per-second tick subscription, and
//! the control row. Clock geometry itself lives in `wcg_core`; this
//! module only wires options and timing into it.

use std::time::Duration;

use iced::widget::{button, column, container, pick_list, row, text};
use iced::{Alignment, Element, Length, Subscription, Task, Theme};

use wcg_core::config::ConfigManager;
use wcg_core::models::{ClockConfig, StylePreset};
use wcg_core::timezone;

use crate::theme;
use crate::widgets::ClockPane;

/// Number of clock panes shown in the window, as in the original
/// program. The control row operates on the first pane only.
const PANE_COUNT: usize = 2;

/// All possible messages the application can receive.
#[derive(Debug, Clone)]
pub enum Message {
    /// Periodic one-second tick: hands-only redraw.
    Tick,
    ToggleAmPm,
    ToggleSummer,
    TimezoneSelected(String),
    StyleSelected(StylePreset),
}

/// Main application state.
pub struct App {
    config: ConfigManager,
    panes: Vec<ClockPane>,
    style: StylePreset,
    timezone_names: Vec<String>,
    selected_timezone: Option<String>,
    status: String,
}

impl App {
    pub fn new(config: ConfigManager) -> (Self, Task<Message>) {
        let settings = config.settings();

        // The manager validates the timezone on load, so resolution
        // only fails if settings were mutated in memory since.
        let clock_config = settings.clock.to_clock_config().unwrap_or_else(|e| {
            tracing::warn!("{}; using defaults", e);
            ClockConfig::default()
        });

        let size = settings.window.canvas_size as f32;
        let style = settings.window.style;
        let panes = (0..PANE_COUNT)
            .map(|_| ClockPane::new(clock_config, size))
            .collect();

        let app = Self {
            config,
            panes,
            style,
            timezone_names: timezone::all_names(),
            selected_timezone: Some(clock_config.timezone.name().to_string()),
            status: String::new(),
        };

        (app, Task::none())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => {
                for pane in &mut self.panes {
                    pane.tick();
                }
            }

            Message::ToggleAmPm => {
                let config = self.primary().config.toggled_ampm();
                self.primary().set_config(config);
                // Labels change between 12- and 24-hour mode.
                self.primary().rebuild_face();
                self.persist();
            }

            Message::ToggleSummer => {
                let config = self.primary().config.toggled_summer();
                self.primary().set_config(config);
                // The original rebuilds the face here too, though only
                // the hour hand actually moves.
                self.primary().rebuild_face();
                self.persist();
            }

            Message::TimezoneSelected(name) => match self.primary().config.with_timezone(&name) {
                Ok(config) => {
                    self.primary().set_config(config);
                    self.selected_timezone = Some(name);
                    self.status.clear();
                    self.persist();
                }
                Err(e) => {
                    // Prior config stays in effect; the redraw loop is
                    // not disturbed.
                    tracing::error!("Rejected timezone selection: {}", e);
                    self.status = e.to_string();
                }
            },

            Message::StyleSelected(style) => {
                self.style = style;
                for pane in &mut self.panes {
                    pane.rebuild_face();
                }
                self.persist();
            }
        }

        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let clocks = column(self.panes.iter().map(|pane| pane.view()))
            .spacing(theme::spacing::SM)
            .align_x(Alignment::Center);

        let controls = column![
            button("Toggle 12/24 Hour").on_press(Message::ToggleAmPm),
            button("Toggle summer").on_press(Message::ToggleSummer),
            pick_list(
                self.timezone_names.clone(),
                self.selected_timezone.clone(),
                Message::TimezoneSelected,
            ),
            pick_list(
                StylePreset::ALL,
                Some(self.style),
                Message::StyleSelected,
            ),
        ]
        .spacing(theme::spacing::SM)
        .align_x(Alignment::Center);

        let mut content = column![clocks, controls]
            .spacing(theme::spacing::MD)
            .align_x(Alignment::Center);

        if !self.status.is_empty() {
            content = content.push(
                row![text(self.status.clone()).color(theme::colors::ERROR_TEXT)]
                    .spacing(theme::spacing::SM),
            );
        }

        let root = container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .padding(theme::spacing::MD);

        match theme::background(self.style) {
            Some(bg) => root
                .style(move |_theme: &Theme| container::Style {
                    background: Some(bg.into()),
                    ..container::Style::default()
                })
                .into(),
            None => root.into(),
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        iced::time::every(Duration::from_secs(1)).map(|_| Message::Tick)
    }

    pub fn theme(&self) -> Theme {
        theme::iced_theme(self.style)
    }

    pub fn title(&self) -> String {
        "World Clock".to_string()
    }

    /// The pane the control row operates on.
    fn primary(&mut self) -> &mut ClockPane {
        &mut self.panes[0]
    }

    /// Mirror the primary pane's options into the settings file.
    fn persist(&mut self) {
        let config = self.panes[0].config;
        let settings = self.config.settings_mut();
        settings.clock.set_from(&config);
        settings.window.style = self.style;

        if let Err(e) = self.config.save() {
            tracing::warn!("Failed to save settings: {}", e);
        }
    }
}
