//! Gauge arc math for the overall score ring.

use std::f64::consts::TAU;

/// Radius of the progress circle in the gauge's own viewbox.
const GAUGE_RADIUS: f64 = 45.0;

/// Full sweep length of the gauge circle.
pub fn circumference() -> f64 {
    TAU * GAUGE_RADIUS
}

/// Filled fraction of the ring for a score. Not clamped; the widget layer
/// clamps to [0, 1] before handing the value to the terminal gauge.
pub fn fill_fraction(score: u32) -> f64 {
    score as f64 / 100.0
}

/// Remaining (unfilled) sweep length for a score.
pub fn dash_offset(score: u32) -> f64 {
    circumference() * (1.0 - fill_fraction(score))
}
