//! Tick label layout for the clock face.

use super::geometry::{Geometry, Point};

/// One numeral on the clock face.
#[derive(Debug, Clone, PartialEq)]
pub struct TickLabel {
    pub position: Point,
    pub text: String,
}

/// Angle of tick index `i` in degrees: index 0 at the top, indices
/// progressing clockwise.
fn tick_angle_deg(index: u32) -> f32 {
    90.0 - index as f32 * 30.0
}

/// Compute the 12 labeled tick positions for a face.
///
/// Labels read `i` in 12-hour mode and `i * 2` (0, 2, ... 22) in
/// 24-hour mode, which puts "0" at the top where a physical clock
/// prints 12 or 24. The original program labels the face this way;
/// the quirk is preserved as-is.
///
/// Rebuilding the face replaces every previously drawn face element
/// (boundary and labels); only the hands survive a rebuild.
pub fn build_face(geometry: &Geometry, ampm_mode: bool) -> Vec<TickLabel> {
    (0..12u32)
        .map(|i| {
            let value = if ampm_mode { i } else { i * 2 };
            TickLabel {
                position: geometry.point_at(tick_angle_deg(i), geometry.radius * 0.9),
                text: value.to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn twenty_four_hour_labels_are_doubled() {
        let g = Geometry::new(400.0, 400.0);
        let labels = build_face(&g, false);
        assert_eq!(labels.len(), 12);
        for (i, label) in labels.iter().enumerate() {
            assert_eq!(label.text, (i * 2).to_string());
        }
    }

    #[test]
    fn twelve_hour_labels_match_index() {
        let g = Geometry::new(400.0, 400.0);
        let labels = build_face(&g, true);
        for (i, label) in labels.iter().enumerate() {
            assert_eq!(label.text, i.to_string());
        }
    }

    #[test]
    fn zero_sits_at_the_top() {
        // Preserved quirk: the top label is "0", not "12" or "24".
        let g = Geometry::new(400.0, 400.0);
        let labels = build_face(&g, false);
        assert_eq!(labels[0].text, "0");
        assert!(approx(labels[0].position.x, g.center.x));
        assert!(approx(labels[0].position.y, g.center.y - g.radius * 0.9));
    }

    #[test]
    fn index_three_sits_screen_east() {
        let g = Geometry::new(400.0, 400.0);
        let labels = build_face(&g, true);
        assert!(approx(labels[3].position.x, g.center.x + g.radius * 0.9));
        assert!(approx(labels[3].position.y, g.center.y));
    }
}
