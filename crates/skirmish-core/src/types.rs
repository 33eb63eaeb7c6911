//! Angle arithmetic and battlefield geometry.
//!
//! Compass convention throughout: angles in degrees, 0 = North, clockwise
//! positive. Positions are `glam::DVec2` with x = East, y = North.

use glam::DVec2;

/// Fold an angle into the signed half-open range (-180, 180] degrees.
///
/// Idempotent: an already-normalized angle is returned unchanged.
pub fn normalize_relative(angle_deg: f64) -> f64 {
    if angle_deg > -180.0 && angle_deg <= 180.0 {
        return angle_deg;
    }
    let folded = angle_deg.rem_euclid(360.0);
    if folded > 180.0 {
        folded - 360.0
    } else {
        folded
    }
}

/// Fold an angle into the absolute range [0, 360) degrees.
pub fn normalize_absolute(angle_deg: f64) -> f64 {
    angle_deg.rem_euclid(360.0)
}

/// Unit vector pointing along a compass bearing.
pub fn bearing_unit(bearing_deg: f64) -> DVec2 {
    let rad = bearing_deg.to_radians();
    DVec2::new(rad.sin(), rad.cos())
}

/// Absolute compass bearing from one point to another, in [0, 360).
pub fn absolute_bearing(from: DVec2, to: DVec2) -> f64 {
    let d = to - from;
    normalize_absolute(d.x.atan2(d.y).to_degrees())
}
