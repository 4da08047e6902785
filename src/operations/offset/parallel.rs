use crate::geometry::Line;
use crate::math::{angle_2d, distance_2d, point_2d, Point2};

/// Offsets a line to a parallel position at a given distance, on the side
/// nearest a reference point.
pub struct Parallel {
    line: Line,
    distance: f64,
    near_point: Point2,
}

impl Parallel {
    /// Creates a new `Parallel` operation.
    ///
    /// * `near_point` - Reference point selecting which side of `line`
    ///   the result falls on.
    #[must_use]
    pub fn new(line: Line, distance: f64, near_point: Point2) -> Self {
        Self {
            line,
            distance,
            near_point,
        }
    }

    /// Executes the offset, returning the parallel line.
    ///
    /// Two candidate origins sit perpendicular to the line, `distance`
    /// away on either side. The whole line translates onto the candidate
    /// nearer the reference point, keeping its direction and length. The
    /// +90° candidate wins only when strictly nearer; ties stay on the
    /// −90° side.
    #[must_use]
    pub fn execute(&self) -> Line {
        let angle = self.line.angle_degrees();
        let origin = *self.line.origin();

        let lower = origin + point_2d::from_polar(angle_2d::to_radians(angle - 90.0), self.distance);
        let upper = origin + point_2d::from_polar(angle_2d::to_radians(angle + 90.0), self.distance);

        let chosen = if distance_2d::point_distance(&upper, &self.near_point)
            < distance_2d::point_distance(&lower, &self.near_point)
        {
            upper
        } else {
            lower
        };

        self.line.translated(chosen - origin)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    const TOL: f64 = 1e-9;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn offsets_toward_the_near_point() {
        let line = Line::new(p(0.0, 0.0), p(10.0, 0.0)).unwrap();
        let result = Parallel::new(line, 2.0, p(0.0, 5.0)).execute();
        assert_relative_eq!(*result.origin(), p(0.0, 2.0), epsilon = TOL);
        assert_relative_eq!(*result.end(), p(10.0, 2.0), epsilon = TOL);
    }

    #[test]
    fn offsets_away_when_the_near_point_is_below() {
        let line = Line::new(p(0.0, 0.0), p(10.0, 0.0)).unwrap();
        let result = Parallel::new(line, 2.0, p(5.0, -1.0)).execute();
        assert_relative_eq!(*result.origin(), p(0.0, -2.0), epsilon = TOL);
        assert_relative_eq!(*result.end(), p(10.0, -2.0), epsilon = TOL);
    }

    #[test]
    fn keeps_direction_and_length() {
        let line = Line::new(p(1.0, 1.0), p(4.0, 5.0)).unwrap();
        let result = Parallel::new(line.clone(), 1.5, p(0.0, 10.0)).execute();

        assert!((result.angle_degrees() - line.angle_degrees()).abs() < TOL);
        let source_len = distance_2d::point_distance(line.origin(), line.end());
        let result_len = distance_2d::point_distance(result.origin(), result.end());
        assert!((result_len - source_len).abs() < TOL);
    }

    #[test]
    fn offset_distance_holds_at_both_endpoints() {
        let line = Line::new(p(1.0, 1.0), p(4.0, 5.0)).unwrap();
        let result = Parallel::new(line.clone(), 1.5, p(0.0, 10.0)).execute();

        // perpendicular translation: endpoint-to-endpoint distances equal
        // the configured offset
        let at_origin = distance_2d::point_distance(line.origin(), result.origin());
        let at_end = distance_2d::point_distance(line.end(), result.end());
        assert!((at_origin - 1.5).abs() < TOL, "at_origin={at_origin}");
        assert!((at_end - 1.5).abs() < TOL, "at_end={at_end}");
    }

    #[test]
    fn result_is_nearer_than_the_unselected_side() {
        let line = Line::new(p(0.0, 0.0), p(10.0, 0.0)).unwrap();
        let near = p(3.0, 4.0);
        let result = Parallel::new(line.clone(), 2.0, near).execute();
        let other = Parallel::new(line, 2.0, p(3.0, -4.0)).execute();

        let chosen = distance_2d::point_distance(result.origin(), &near);
        let rejected = distance_2d::point_distance(other.origin(), &near);
        assert!(chosen < rejected, "chosen={chosen} rejected={rejected}");
    }

    #[test]
    fn equal_distances_fall_to_the_lower_side() {
        // a near point on the line itself ties both candidates
        let line = Line::new(p(0.0, 0.0), p(10.0, 0.0)).unwrap();
        let result = Parallel::new(line, 2.0, p(5.0, 0.0)).execute();
        assert_relative_eq!(*result.origin(), p(0.0, -2.0), epsilon = TOL);
    }

    #[test]
    fn sign_of_distance_does_not_override_nearness() {
        let line = Line::new(p(0.0, 0.0), p(10.0, 0.0)).unwrap();
        let result = Parallel::new(line, -2.0, p(0.0, 5.0)).execute();
        // negative distance flips both candidates; nearness still wins
        assert_relative_eq!(*result.origin(), p(0.0, 2.0), epsilon = TOL);
    }
}
