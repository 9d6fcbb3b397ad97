//! Area-proportional sizing for the circular indicators.
//!
//! A segment's circle encodes its value as *area*, so the diameter grows with
//! the square root of the value. The outer dotted bound is the circle a 100 %
//! value would fill; dataset validation guarantees values stay on that scale.

use std::f64::consts::PI;

/// Pixel scale applied to the raw `sqrt(value / π)` radius term.
pub const AREA_SCALE_PX: f64 = 18.0;

/// The theoretical maximum a bound circle is sized against.
pub const FULL_SCALE_PERCENT: f64 = 100.0;

/// Diameter in pixels of the filled indicator for `value`.
pub fn indicator_diameter_px(value: f64) -> f64 {
    (value / PI).sqrt() * AREA_SCALE_PX
}

/// Diameter in pixels of the fixed outer bound.
pub fn bound_diameter_px() -> f64 {
    indicator_diameter_px(FULL_SCALE_PERCENT)
}
