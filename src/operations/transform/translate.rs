use crate::geometry::Path;
use crate::math::{Point2, Vector2};

/// Translates a path by a displacement vector.
pub struct Translate {
    path: Path,
    displacement: Vector2,
}

impl Translate {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(path: Path, displacement: Vector2) -> Self {
        Self { path, displacement }
    }

    /// Creates a translation that moves the path's reference point to
    /// `new_origin`.
    #[must_use]
    pub fn to_origin(path: Path, new_origin: Point2) -> Self {
        let displacement = new_origin - *path.origin();
        Self { path, displacement }
    }

    /// Executes the translation, returning the displaced path.
    #[must_use]
    pub fn execute(&self) -> Path {
        match &self.path {
            Path::Line(line) => line.translated(self.displacement).into(),
            Path::Circle(circle) => circle.translated(self.displacement).into(),
            Path::Arc(arc) => arc.translated(self.displacement).into(),
            Path::BezierSeed(seed) => seed.translated(self.displacement).into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::{Arc, BezierSeed, Line};

    const TOL: f64 = 1e-9;

    #[test]
    fn displaces_both_endpoints() {
        let line = Line::new(Point2::new(1.0, 1.0), Point2::new(4.0, 1.0)).unwrap();
        let moved = Translate::new(line.into(), Vector2::new(2.0, -3.0)).execute();
        match moved {
            Path::Line(line) => {
                assert_relative_eq!(*line.origin(), Point2::new(3.0, -2.0), epsilon = TOL);
                assert_relative_eq!(*line.end(), Point2::new(6.0, -2.0), epsilon = TOL);
            }
            _ => panic!("translation changed the path kind"),
        }
    }

    #[test]
    fn to_origin_lands_the_reference_point_exactly() {
        let arc = Arc::new(Point2::new(5.0, 5.0), 2.0, 0.0, 90.0).unwrap();
        let moved = Translate::to_origin(arc.into(), Point2::new(-1.0, 2.0)).execute();
        assert_relative_eq!(*moved.origin(), Point2::new(-1.0, 2.0), epsilon = TOL);
    }

    #[test]
    fn arc_angles_do_not_move() {
        let arc = Arc::new(Point2::origin(), 1.0, 30.0, 200.0).unwrap();
        let moved = Translate::new(arc.into(), Vector2::new(10.0, 0.0)).execute();
        match moved {
            Path::Arc(arc) => {
                assert!((arc.start_angle() - 30.0).abs() < TOL);
                assert!((arc.end_angle() - 200.0).abs() < TOL);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn seed_controls_ride_along() {
        let seed = BezierSeed::quadratic(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 0.0),
        );
        let moved = Translate::new(seed.into(), Vector2::new(0.0, 5.0)).execute();
        match moved {
            Path::BezierSeed(seed) => {
                assert_relative_eq!(seed.controls()[0], Point2::new(1.0, 6.0), epsilon = TOL);
                assert_relative_eq!(*seed.end(), Point2::new(2.0, 5.0), epsilon = TOL);
            }
            _ => unreachable!(),
        }
    }
}
