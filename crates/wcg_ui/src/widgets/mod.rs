//! Custom widgets for World Clock GUI.

mod clock_canvas;

pub use clock_canvas::ClockPane;
