//! Hand angle and segment computation.

use chrono::{Timelike, Utc};
use chrono_tz::Tz;

use super::geometry::{Geometry, Point};
use crate::models::ClockConfig;

/// Wall-clock reading in the configured timezone.
///
/// Recomputed on every redraw and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSample {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl TimeSample {
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Sample the current instant in `tz`.
    pub fn now_in(tz: Tz) -> Self {
        let now = Utc::now().with_timezone(&tz);
        Self {
            hours: now.hour(),
            minutes: now.minute(),
            seconds: now.second(),
        }
    }
}

/// Fixed hand colors. These do not follow the style preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandColor {
    Black,
    Blue,
    Red,
}

/// One drawable hand segment, produced fresh each redraw and
/// discarded after drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandVector {
    pub origin: Point,
    pub end: Point,
    pub width: f32,
    pub color: HandColor,
}

/// The three hands of one face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandVectors {
    pub hour: HandVector,
    pub minute: HandVector,
    pub second: HandVector,
}

/// Displayed hour after the 12/24 reduction and the summer offset.
///
/// With the summer offset on, hour 0 comes out as -1: the original
/// applies no wraparound and neither do we. Documented quirk.
pub fn display_hours(sample: &TimeSample, config: &ClockConfig) -> i32 {
    let base = if config.ampm_mode {
        sample.hours % 12
    } else {
        sample.hours
    };
    base as i32 - if config.summer_offset { 1 } else { 0 }
}

/// Hour hand angle in degrees (90° points straight up on screen).
pub fn hour_angle_deg(sample: &TimeSample, config: &ClockConfig) -> f32 {
    let one_two = if config.ampm_mode { 1.0 } else { 2.0 };
    let hours = display_hours(sample, config) as f32 + sample.minutes as f32 / 60.0;
    90.0 - hours / one_two * 30.0
}

/// Minute hand angle in degrees.
pub fn minute_angle_deg(minutes: u32) -> f32 {
    90.0 - minutes as f32 * 6.0
}

/// Second hand angle in degrees.
pub fn second_angle_deg(seconds: u32) -> f32 {
    90.0 - seconds as f32 * 6.0
}

/// Compute the three hand segments for one redraw.
///
/// Pure function of its inputs. A hands-only redraw replaces just
/// these segments; face elements are untouched, so the caller can
/// redraw every second without rebuilding the whole face.
pub fn compute_hand_vectors(
    sample: &TimeSample,
    config: &ClockConfig,
    geometry: &Geometry,
) -> HandVectors {
    let hand = |angle_deg: f32, length: f32, width: f32, color: HandColor| HandVector {
        origin: geometry.center,
        end: geometry.point_at(angle_deg, length),
        width,
        color,
    };

    HandVectors {
        hour: hand(
            hour_angle_deg(sample, config),
            geometry.hour_hand_length,
            6.0,
            HandColor::Black,
        ),
        minute: hand(
            minute_angle_deg(sample.minutes),
            geometry.minute_hand_length,
            4.0,
            HandColor::Blue,
        ),
        second: hand(
            second_angle_deg(sample.seconds),
            geometry.second_hand_length,
            2.0,
            HandColor::Red,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    fn config(ampm_mode: bool, summer_offset: bool) -> ClockConfig {
        ClockConfig {
            ampm_mode,
            summer_offset,
            ..ClockConfig::default()
        }
    }

    #[test]
    fn hands_point_up_at_the_full_minute() {
        assert!(approx(minute_angle_deg(0), 90.0));
        assert!(approx(second_angle_deg(0), 90.0));
    }

    #[test]
    fn quarter_past_points_screen_east() {
        assert!(approx(minute_angle_deg(15), 0.0));
        assert!(approx(second_angle_deg(15), 0.0));
    }

    #[test]
    fn hour_angle_half_past_three_twelve_hour() {
        let sample = TimeSample::new(3, 30, 0);
        assert!(approx(hour_angle_deg(&sample, &config(true, false)), -15.0));
    }

    #[test]
    fn hour_angle_half_past_three_twenty_four_hour() {
        let sample = TimeSample::new(3, 30, 0);
        assert!(approx(hour_angle_deg(&sample, &config(false, false)), 37.5));
    }

    #[test]
    fn summer_offset_can_go_negative() {
        // Preserved quirk: hour 0 with the summer offset on yields -1,
        // with no wraparound applied.
        let sample = TimeSample::new(0, 0, 0);
        assert_eq!(display_hours(&sample, &config(false, true)), -1);
        assert_eq!(display_hours(&sample, &config(true, true)), -1);
    }

    #[test]
    fn twelve_hour_mode_reduces_modulo_twelve() {
        let sample = TimeSample::new(15, 0, 0);
        assert_eq!(display_hours(&sample, &config(true, false)), 3);
        assert_eq!(display_hours(&sample, &config(false, false)), 15);
    }

    #[test]
    fn vectors_carry_fixed_widths_and_colors() {
        let g = Geometry::new(400.0, 400.0);
        let sample = TimeSample::new(10, 8, 42);
        let hands = compute_hand_vectors(&sample, &config(false, false), &g);

        assert!(approx(hands.hour.width, 6.0));
        assert!(approx(hands.minute.width, 4.0));
        assert!(approx(hands.second.width, 2.0));
        assert_eq!(hands.hour.color, HandColor::Black);
        assert_eq!(hands.minute.color, HandColor::Blue);
        assert_eq!(hands.second.color, HandColor::Red);

        for hand in [hands.hour, hands.minute, hands.second] {
            assert_eq!(hand.origin, g.center);
        }
    }

    #[test]
    fn computation_is_idempotent() {
        let g = Geometry::new(400.0, 400.0);
        let sample = TimeSample::new(7, 45, 13);
        let cfg = config(true, true);

        let first = compute_hand_vectors(&sample, &cfg, &g);
        let second = compute_hand_vectors(&sample, &cfg, &g);
        assert_eq!(first, second);
    }

    #[test]
    fn endpoints_at_noon_stack_vertically() {
        let g = Geometry::new(400.0, 400.0);
        let sample = TimeSample::new(12, 0, 0);
        let hands = compute_hand_vectors(&sample, &config(true, false), &g);

        // 12 % 12 == 0, so every hand points straight up.
        for (hand, length) in [
            (hands.hour, g.hour_hand_length),
            (hands.minute, g.minute_hand_length),
            (hands.second, g.second_hand_length),
        ] {
            assert!(approx(hand.end.x, g.center.x));
            assert!(approx(hand.end.y, g.center.y - length));
        }
    }
}
