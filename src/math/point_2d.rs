//! Point construction and positional helpers.

use nalgebra::Rotation2;

use super::{Point2, Vector2};

/// Midpoint of two points.
#[must_use]
pub fn average(a: &Point2, b: &Point2) -> Point2 {
    Point2::from((a.coords + b.coords) * 0.5)
}

/// Offset vector of length `radius` in the direction `angle_rad`.
#[must_use]
pub fn from_polar(angle_rad: f64, radius: f64) -> Vector2 {
    Vector2::new(radius * angle_rad.cos(), radius * angle_rad.sin())
}

/// Rotates `point` counter-clockwise by `angle_deg` degrees about `pivot`.
#[must_use]
pub fn rotate(point: &Point2, angle_deg: f64, pivot: &Point2) -> Point2 {
    let rotation = Rotation2::new(angle_deg.to_radians());
    *pivot + rotation * (point - pivot)
}

/// Mirrors a point by negating its X (`mirror_x`) and/or Y (`mirror_y`)
/// coordinate.
#[must_use]
pub fn mirror(point: &Point2, mirror_x: bool, mirror_y: bool) -> Point2 {
    let x = if mirror_x { -point.x } else { point.x };
    let y = if mirror_y { -point.y } else { point.y };
    Point2::new(x, y)
}
