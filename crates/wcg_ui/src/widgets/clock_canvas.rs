//! Canvas widget that draws one clock face.
//!
//! Face elements (boundary circle and tick labels) are drawn into a
//! `canvas::Cache` that is cleared only when a face-affecting option
//! changes; the hands are drawn into a fresh frame on every tick. This
//! is the hands-only redraw: a one-second tick never rebuilds the face.

use iced::alignment;
use iced::font::Weight;
use iced::mouse;
use iced::widget::canvas::{self, Path, Stroke};
use iced::widget::text;
use iced::{Color, Element, Font, Length, Pixels, Point, Rectangle, Renderer, Theme};

use wcg_core::clock::{
    build_face, compute_hand_vectors, Geometry, HandColor, HandVector, TimeSample,
};
use wcg_core::models::ClockConfig;

use crate::theme::colors;

/// Inset of the boundary circle from the canvas edge.
const BOUNDARY_INSET: f32 = 5.0;
const BOUNDARY_WIDTH: f32 = 2.0;
const LABEL_SIZE: f32 = 14.0;

/// One clock pane: geometry, config, current reading, and face cache.
///
/// Panes are independent values; two panes in one window share nothing.
pub struct ClockPane {
    pub config: ClockConfig,
    size: f32,
    geometry: Geometry,
    sample: TimeSample,
    face_cache: canvas::Cache,
}

impl ClockPane {
    pub fn new(config: ClockConfig, size: f32) -> Self {
        Self {
            config,
            size,
            geometry: Geometry::new(size, size),
            sample: TimeSample::now_in(config.timezone),
            face_cache: canvas::Cache::new(),
        }
    }

    /// Refresh the wall-clock reading. Leaves the face cache alone,
    /// so only the hands move.
    pub fn tick(&mut self) {
        self.sample = TimeSample::now_in(self.config.timezone);
    }

    /// Replace the config and refresh the reading.
    pub fn set_config(&mut self, config: ClockConfig) {
        self.config = config;
        self.tick();
    }

    /// Invalidate the cached face after a face-affecting option change.
    pub fn rebuild_face(&mut self) {
        self.face_cache.clear();
    }

    pub fn view<Message: 'static>(&self) -> Element<'_, Message> {
        canvas::Canvas::new(self)
            .width(Length::Fixed(self.size))
            .height(Length::Fixed(self.size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for ClockPane {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let face = self.face_cache.draw(renderer, bounds.size(), |frame| {
            let boundary = Path::circle(
                Point::new(self.size / 2.0, self.size / 2.0),
                self.size / 2.0 - BOUNDARY_INSET,
            );
            frame.stroke(
                &boundary,
                Stroke::default()
                    .with_width(BOUNDARY_WIDTH)
                    .with_color(colors::FACE),
            );

            for label in build_face(&self.geometry, self.config.ampm_mode) {
                frame.fill_text(canvas::Text {
                    content: label.text,
                    position: Point::new(label.position.x, label.position.y),
                    color: colors::FACE,
                    size: Pixels(LABEL_SIZE),
                    font: Font {
                        weight: Weight::Bold,
                        ..Font::DEFAULT
                    },
                    align_x: text::Alignment::Center,
                    align_y: alignment::Vertical::Center,
                    ..canvas::Text::default()
                });
            }
        });

        let mut hands_frame = canvas::Frame::new(renderer, bounds.size());
        let hands = compute_hand_vectors(&self.sample, &self.config, &self.geometry);
        for hand in [hands.hour, hands.minute, hands.second] {
            draw_hand(&mut hands_frame, &hand);
        }

        vec![face, hands_frame.into_geometry()]
    }
}

fn draw_hand(frame: &mut canvas::Frame, hand: &HandVector) {
    let path = Path::line(
        Point::new(hand.origin.x, hand.origin.y),
        Point::new(hand.end.x, hand.end.y),
    );
    frame.stroke(
        &path,
        Stroke::default()
            .with_width(hand.width)
            .with_color(hand_color(hand.color)),
    );
}

fn hand_color(color: HandColor) -> Color {
    match color {
        HandColor::Black => colors::HOUR_HAND,
        HandColor::Blue => colors::MINUTE_HAND,
        HandColor::Red => colors::SECOND_HAND,
    }
}
