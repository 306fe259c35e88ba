//! Degree arithmetic shared by the classifier and the compass labels.
//!
//! Headings arrive in radians and go through a radians → degrees conversion
//! that is not exact in floating point (`3π/2` does not always land on 270).
//! Values within [`SNAP_EPSILON`] of a quarter turn are snapped onto it so the
//! cardinal comparisons downstream can use exact equality.

use std::f64::consts::PI;

/// Tolerance (degrees) for snapping onto a multiple of 90°
pub const SNAP_EPSILON: f64 = 1e-9;

/// Radians to degrees
pub fn to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// Snaps a degree value onto the nearest multiple of 90° when it is within
/// [`SNAP_EPSILON`] of it
pub fn snap_quarter(degrees: f64) -> f64 {
    let quarter = (degrees / 90.0).round() * 90.0;
    if (degrees - quarter).abs() < SNAP_EPSILON {
        // avoid handing out -0.0
        quarter + 0.0
    } else {
        degrees
    }
}

/// Normalizes degrees into `[0, 360)`
pub fn normalize_degrees(degrees: f64) -> f64 {
    let normalized = snap_quarter(degrees.rem_euclid(360.0));
    if normalized >= 360.0 { normalized - 360.0 } else { normalized }
}

/// Heading in radians → normalized degrees in `[0, 360)`
pub fn heading_degrees(theta: f64) -> f64 {
    normalize_degrees(to_degrees(theta))
}

/// Bearing `bearing` measured relative to `heading` (both degrees), in
/// `[-180, 180]`: 0 is dead ahead, ±180 dead behind
pub fn relative_angle(bearing: f64, heading: f64) -> f64 {
    snap_quarter((((bearing - heading) % 360.0) + 540.0) % 360.0 - 180.0)
}
