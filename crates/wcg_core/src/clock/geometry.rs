//! Canvas-derived clock measurements.

/// A 2D point in canvas coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Margin between the clock circle and the canvas edge.
const EDGE_MARGIN: f32 = 10.0;

/// Fixed measurements of one clock face.
///
/// Computed once from the canvas dimensions at construction and
/// immutable afterwards. The radius is assumed positive (holds for
/// canvas sizes above ~20 units) and is not validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub width: f32,
    pub height: f32,
    pub center: Point,
    pub radius: f32,
    pub hour_hand_length: f32,
    pub minute_hand_length: f32,
    pub second_hand_length: f32,
}

impl Geometry {
    pub fn new(width: f32, height: f32) -> Self {
        let radius = width.min(height) / 2.0 - EDGE_MARGIN;
        Self {
            width,
            height,
            center: Point::new(width / 2.0, height / 2.0),
            radius,
            hour_hand_length: radius * 0.5,
            minute_hand_length: radius * 0.8,
            second_hand_length: radius * 0.9,
        }
    }

    /// Point at `length` from the center in the direction `angle_deg`,
    /// where 0° is screen-east and 90° is straight up. The y component
    /// is negated because screen y grows downward.
    pub fn point_at(&self, angle_deg: f32, length: f32) -> Point {
        let rad = angle_deg.to_radians();
        Point::new(
            self.center.x + length * rad.cos(),
            self.center.y - length * rad.sin(),
        )
    }
}
