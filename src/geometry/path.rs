use crate::math::Point2;

use super::{Arc, BezierSeed, Circle, Line};

/// A canonical 2D path primitive, tagged by kind.
///
/// Every variant is an immutable value; transforms over a `Path` produce
/// new values.
#[derive(Debug, Clone, PartialEq)]
pub enum Path {
    /// A line segment.
    Line(Line),
    /// A full circle.
    Circle(Circle),
    /// A circular arc.
    Arc(Arc),
    /// A bezier curve seed.
    BezierSeed(BezierSeed),
}

/// Discriminant identifying a path variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// A line segment.
    Line,
    /// A full circle.
    Circle,
    /// A circular arc.
    Arc,
    /// A bezier curve seed.
    BezierSeed,
}

impl Path {
    /// Returns the discriminant of this path.
    #[must_use]
    pub fn kind(&self) -> PathKind {
        match self {
            Self::Line(_) => PathKind::Line,
            Self::Circle(_) => PathKind::Circle,
            Self::Arc(_) => PathKind::Arc,
            Self::BezierSeed(_) => PathKind::BezierSeed,
        }
    }

    /// Reference point of the path: the origin endpoint for segments and
    /// seeds, the center for circles and arcs.
    #[must_use]
    pub fn origin(&self) -> &Point2 {
        match self {
            Self::Line(line) => line.origin(),
            Self::Circle(circle) => circle.origin(),
            Self::Arc(arc) => arc.origin(),
            Self::BezierSeed(seed) => seed.origin(),
        }
    }
}

impl From<Line> for Path {
    fn from(line: Line) -> Self {
        Self::Line(line)
    }
}

impl From<Circle> for Path {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}

impl From<Arc> for Path {
    fn from(arc: Arc) -> Self {
        Self::Arc(arc)
    }
}

impl From<BezierSeed> for Path {
    fn from(seed: BezierSeed) -> Self {
        Self::BezierSeed(seed)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn kind_tags_follow_the_variant() {
        let line: Path = Line::new(Point2::origin(), Point2::new(1.0, 0.0))
            .unwrap()
            .into();
        let circle: Path = Circle::new(Point2::origin(), 5.0).unwrap().into();
        let arc: Path = Arc::new(Point2::origin(), 5.0, 0.0, 90.0).unwrap().into();
        let seed: Path = BezierSeed::quadratic(
            Point2::origin(),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 0.0),
        )
        .into();

        assert_eq!(line.kind(), PathKind::Line);
        assert_eq!(circle.kind(), PathKind::Circle);
        assert_eq!(arc.kind(), PathKind::Arc);
        assert_eq!(seed.kind(), PathKind::BezierSeed);
    }

    #[test]
    fn tagging_keeps_fields_verbatim() {
        let path: Path = Circle::new(Point2::origin(), 5.0).unwrap().into();
        assert_eq!(path.kind(), PathKind::Circle);
        assert_eq!(*path.origin(), Point2::origin());
        match path {
            Path::Circle(circle) => assert!((circle.radius() - 5.0).abs() < 1e-12),
            _ => panic!("expected a circle"),
        }
    }

    #[test]
    fn reference_points_per_variant() {
        let line = Line::new(Point2::new(1.0, 2.0), Point2::new(3.0, 4.0)).unwrap();
        assert_eq!(*Path::from(line).origin(), Point2::new(1.0, 2.0));

        let arc = Arc::new(Point2::new(-1.0, 0.5), 2.0, 0.0, 90.0).unwrap();
        assert_eq!(*Path::from(arc).origin(), Point2::new(-1.0, 0.5));

        let seed = BezierSeed::cubic(
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 2.0),
            Point2::new(2.0, 2.0),
            Point2::new(3.0, 1.0),
        );
        assert_eq!(*Path::from(seed).origin(), Point2::new(0.0, 1.0));
    }
}
