//! Distance and betweenness checks.

use super::{angle_2d, Point2};

/// Euclidean distance between two points.
#[must_use]
pub fn point_distance(a: &Point2, b: &Point2) -> f64 {
    (b - a).norm()
}

/// Checks whether `value` lies between two limits, in either limit order.
///
/// With `exclusive` set the limits themselves do not count.
#[must_use]
pub fn is_between(value: f64, limit_a: f64, limit_b: f64, exclusive: bool) -> bool {
    let low = limit_a.min(limit_b);
    let high = limit_a.max(limit_b);
    if exclusive {
        low < value && value < high
    } else {
        low <= value && value <= high
    }
}

/// Checks whether an angle lies within the sweep of an arc given by its
/// raw start and end angles, in degrees.
///
/// Both the angle and the arc window are reduced to a single revolution,
/// and the angle is also probed one revolution up and down so wrap-around
/// arcs (for example 270 through 90) test correctly.
#[must_use]
pub fn is_between_arc_angles(angle_deg: f64, start_deg: f64, end_deg: f64, exclusive: bool) -> bool {
    let start = angle_2d::no_revolutions(start_deg);
    let end = start + angle_2d::of_arc_span(start_deg, end_deg);
    let angle = angle_2d::no_revolutions(angle_deg);
    is_between(angle, start, end, exclusive)
        || is_between(angle + 360.0, start, end, exclusive)
        || is_between(angle - 360.0, start, end, exclusive)
}
