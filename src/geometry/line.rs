use crate::error::{GeometryError, Result};
use crate::math::{angle_2d, distance_2d, point_2d, Point2, Vector2, TOLERANCE};

use super::Arc;

/// A line segment between two points.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    origin: Point2,
    end: Point2,
}

impl Line {
    /// Creates a new line segment.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoints coincide.
    pub fn new(origin: Point2, end: Point2) -> Result<Self> {
        if distance_2d::point_distance(&origin, &end) < TOLERANCE {
            return Err(GeometryError::DegenerateInput("line endpoints coincide".into()).into());
        }
        Ok(Self { origin, end })
    }

    /// Creates the chord of an arc: the segment joining the arc's start
    /// endpoint to its end endpoint, in that order. The endpoint values
    /// carry over exactly.
    ///
    /// # Errors
    ///
    /// Returns an error if the arc's endpoints coincide, as they do for a
    /// zero span or a full revolution.
    pub fn chord_of(arc: &Arc) -> Result<Self> {
        let (start, end) = arc.endpoints();
        Self::new(start, end)
    }

    /// Returns the origin endpoint.
    #[must_use]
    pub fn origin(&self) -> &Point2 {
        &self.origin
    }

    /// Returns the end endpoint.
    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }

    /// Midpoint of the segment.
    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        point_2d::average(&self.origin, &self.end)
    }

    /// Direction from origin to end, in degrees `[0, 360)`.
    #[must_use]
    pub fn angle_degrees(&self) -> f64 {
        angle_2d::of_point_degrees(&self.origin, &self.end)
    }

    /// Returns a copy of this segment moved by `displacement`.
    #[must_use]
    pub fn translated(&self, displacement: Vector2) -> Self {
        Self {
            origin: self.origin + displacement,
            end: self.end + displacement,
        }
    }

    /// Returns a copy of this segment rotated counter-clockwise by
    /// `angle_deg` degrees about `pivot`.
    #[must_use]
    pub fn rotated(&self, angle_deg: f64, pivot: &Point2) -> Self {
        Self {
            origin: point_2d::rotate(&self.origin, angle_deg, pivot),
            end: point_2d::rotate(&self.end, angle_deg, pivot),
        }
    }

    /// Returns a copy of this segment with X (`mirror_x`) and/or Y
    /// (`mirror_y`) coordinates negated.
    #[must_use]
    pub fn mirrored(&self, mirror_x: bool, mirror_y: bool) -> Self {
        Self {
            origin: point_2d::mirror(&self.origin, mirror_x, mirror_y),
            end: point_2d::mirror(&self.end, mirror_x, mirror_y),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn rejects_coincident_endpoints() {
        let result = Line::new(Point2::new(1.0, 1.0), Point2::new(1.0, 1.0));
        assert!(result.is_err());
    }

    #[test]
    fn angle_of_cardinal_and_diagonal_lines() {
        let east = Line::new(Point2::new(1.0, 1.0), Point2::new(4.0, 1.0)).unwrap();
        assert!(east.angle_degrees().abs() < TOL);

        let north = Line::new(Point2::origin(), Point2::new(0.0, 2.0)).unwrap();
        assert!((north.angle_degrees() - 90.0).abs() < TOL);

        let diagonal = Line::new(Point2::origin(), Point2::new(-1.0, -1.0)).unwrap();
        assert!((diagonal.angle_degrees() - 225.0).abs() < TOL);
    }

    #[test]
    fn midpoint_of_segment() {
        let line = Line::new(Point2::new(0.0, 0.0), Point2::new(4.0, 2.0)).unwrap();
        let mid = line.midpoint();
        assert!((mid.x - 2.0).abs() < TOL && (mid.y - 1.0).abs() < TOL);
    }

    #[test]
    fn chord_carries_arc_endpoints_exactly() {
        let arc = Arc::new(Point2::new(1.0, 1.0), 2.0, 0.0, 90.0).unwrap();
        let (start, end) = arc.endpoints();
        let chord = Line::chord_of(&arc).unwrap();
        // same values, not just nearby ones
        assert_eq!(*chord.origin(), start);
        assert_eq!(*chord.end(), end);
        assert!((chord.origin().x - 3.0).abs() < TOL);
        assert!((chord.end().y - 3.0).abs() < TOL);
    }

    #[test]
    fn chord_of_full_revolution_fails() {
        let arc = Arc::new(Point2::origin(), 1.0, 0.0, 360.0).unwrap();
        assert!(Line::chord_of(&arc).is_err());
    }

    #[test]
    fn translated_moves_both_endpoints() {
        let line = Line::new(Point2::new(1.0, 2.0), Point2::new(3.0, 2.0)).unwrap();
        let moved = line.translated(Vector2::new(-1.0, 4.0));
        assert!((moved.origin().x - 0.0).abs() < TOL && (moved.origin().y - 6.0).abs() < TOL);
        assert!((moved.end().x - 2.0).abs() < TOL && (moved.end().y - 6.0).abs() < TOL);
    }

    #[test]
    fn rotated_preserves_length() {
        let line = Line::new(Point2::new(2.0, 0.0), Point2::new(5.0, 0.0)).unwrap();
        let turned = line.rotated(37.0, &Point2::new(1.0, 1.0));
        let length = distance_2d::point_distance(turned.origin(), turned.end());
        assert!((length - 3.0).abs() < TOL, "length={length}");
    }

    #[test]
    fn mirrored_negates_coordinates() {
        let line = Line::new(Point2::new(1.0, 2.0), Point2::new(3.0, 4.0)).unwrap();
        let flipped = line.mirrored(true, false);
        assert!((flipped.origin().x + 1.0).abs() < TOL);
        assert!((flipped.end().x + 3.0).abs() < TOL);
        assert!((flipped.end().y - 4.0).abs() < TOL);
    }
}
