//! Degree-based angle utilities.
//!
//! Angles are measured in degrees, counter-clockwise from the positive X
//! axis. Functions that report an absolute direction return values in
//! `[0, 360)`.

use std::f64::consts::PI;

use super::{Point2, TOLERANCE};

/// Reduces an angle to the `[0, 360)` range by removing full revolutions.
#[must_use]
pub fn no_revolutions(angle_deg: f64) -> f64 {
    angle_deg - 360.0 * (angle_deg / 360.0).floor()
}

/// Converts an angle in degrees to radians, removing full revolutions
/// first so the result is in `[0, 2π)`.
#[must_use]
pub fn to_radians(angle_deg: f64) -> f64 {
    no_revolutions(angle_deg).to_radians()
}

/// Direction of `point` as seen from `origin`, in degrees `[0, 360)`.
///
/// The negated-vector form keeps the cardinal directions exact: points on
/// the positive X axis report 0, not 360.
#[must_use]
pub fn of_point_degrees(origin: &Point2, point: &Point2) -> f64 {
    let d = point - origin;
    ((-d.y).atan2(-d.x) + PI).to_degrees()
}

/// Angular sweep from `start_deg` counter-clockwise to `end_deg`.
///
/// The end angle is lifted by full revolutions until it is not below the
/// start angle, so wrap-around arcs measure correctly; a sweep beyond one
/// revolution is reduced. The result is in `[0, 360]`.
#[must_use]
pub fn of_arc_span(start_deg: f64, end_deg: f64) -> f64 {
    let mut end = end_deg;
    while end < start_deg {
        end += 360.0;
    }
    let span = end - start_deg;
    if span > 360.0 + TOLERANCE {
        no_revolutions(span)
    } else {
        span
    }
}

/// Mirrors an angle across the Y axis (`mirror_x`, X coordinates negate)
/// and/or the X axis (`mirror_y`, Y coordinates negate).
///
/// The result may fall outside `[0, 360)`; callers that need the reduced
/// form apply [`no_revolutions`].
#[must_use]
pub fn mirror(angle_deg: f64, mirror_x: bool, mirror_y: bool) -> f64 {
    let mut angle = angle_deg;
    if mirror_y {
        angle = 360.0 - angle;
    }
    if mirror_x {
        let base = if angle < 180.0 { 180.0 } else { 540.0 };
        angle = base - angle;
    }
    angle
}
