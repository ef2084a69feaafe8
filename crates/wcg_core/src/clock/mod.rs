//! Clock face rendering logic.
//!
//! This module contains the per-tick computation that turns a wall-clock
//! time into drawable vectors:
//! - `Geometry`: fixed measurements derived once from the canvas size
//! - `face`: the 12 labeled tick positions
//! - `hands`: the hour/minute/second hand segments
//!
//! Everything here is pure arithmetic over already-validated inputs;
//! drawing and redraw scheduling belong to the UI shell.

mod face;
mod geometry;
mod hands;

pub use face::{build_face, TickLabel};
pub use geometry::{Geometry, Point};
pub use hands::{
    compute_hand_vectors, display_hours, hour_angle_deg, minute_angle_deg, second_angle_deg,
    HandColor, HandVector, HandVectors, TimeSample,
};
