use crate::error::{GeometryError, Result};
use crate::math::{distance_2d, intersect_2d, point_2d, Point2, Vector2, TOLERANCE};

use super::Line;

/// A full circle defined by a center and a radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    origin: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a circle from its center and radius.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive.
    pub fn new(origin: Point2, radius: f64) -> Result<Self> {
        if radius < TOLERANCE {
            return Err(
                GeometryError::DegenerateInput("circle radius must be positive".into()).into(),
            );
        }
        Ok(Self { origin, radius })
    }

    /// Creates a circle of the given radius centered on the plane origin.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive.
    pub fn from_radius(radius: f64) -> Result<Self> {
        Self::new(Point2::origin(), radius)
    }

    /// Creates the circle whose diameter is the segment from `a` to `b`.
    ///
    /// # Errors
    ///
    /// Returns an error if the points coincide (the radius degenerates).
    pub fn from_two_points(a: Point2, b: Point2) -> Result<Self> {
        let origin = point_2d::average(&a, &b);
        Self::new(origin, distance_2d::point_distance(&origin, &a))
    }

    /// Creates the circle passing through three points.
    ///
    /// The chords `ab` and `bc` are each rotated a quarter turn about
    /// their own midpoint, which turns them into perpendicular bisectors;
    /// the bisectors meet at the circumcenter.
    ///
    /// # Errors
    ///
    /// Returns an error if any two neighboring points coincide, or if the
    /// points are collinear so the bisectors never meet.
    pub fn from_three_points(a: Point2, b: Point2, c: Point2) -> Result<Self> {
        let chord_ab = Line::new(a, b)?;
        let chord_bc = Line::new(b, c)?;
        let bisector_ab = chord_ab.rotated(90.0, &chord_ab.midpoint());
        let bisector_bc = chord_bc.rotated(90.0, &chord_bc.midpoint());

        let origin = intersect_2d::slope_intersect_2d(
            bisector_ab.origin(),
            bisector_ab.end(),
            bisector_bc.origin(),
            bisector_bc.end(),
        )
        .ok_or_else(|| GeometryError::DegenerateInput("three points are collinear".into()))?;

        Self::new(origin, distance_2d::point_distance(&origin, &a))
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn origin(&self) -> &Point2 {
        &self.origin
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns a copy of this circle moved by `displacement`.
    #[must_use]
    pub fn translated(&self, displacement: Vector2) -> Self {
        Self {
            origin: self.origin + displacement,
            radius: self.radius,
        }
    }

    /// Returns a copy rotated counter-clockwise by `angle_deg` degrees
    /// about `pivot`. Only the center moves.
    #[must_use]
    pub fn rotated(&self, angle_deg: f64, pivot: &Point2) -> Self {
        Self {
            origin: point_2d::rotate(&self.origin, angle_deg, pivot),
            radius: self.radius,
        }
    }

    /// Returns a copy with X (`mirror_x`) and/or Y (`mirror_y`)
    /// coordinates negated.
    #[must_use]
    pub fn mirrored(&self, mirror_x: bool, mirror_y: bool) -> Self {
        Self {
            origin: point_2d::mirror(&self.origin, mirror_x, mirror_y),
            radius: self.radius,
        }
    }
}
