use crate::geometry::{Arc, BezierSeed, Path};
use crate::math::{distance_2d, Point2};

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

/// Computes the axis-aligned bounding box of a path.
pub struct BoundingBox {
    path: Path,
}

impl BoundingBox {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(path: Path) -> Self {
        Self { path }
    }

    /// Executes the query, returning the extents.
    ///
    /// Arc extents cover the endpoints plus every quadrant crossing the
    /// span contains; bezier seed extents conservatively cover the
    /// control polygon.
    #[must_use]
    pub fn execute(&self) -> Aabb {
        match &self.path {
            Path::Line(line) => bounds_of([*line.origin(), *line.end()]),
            Path::Circle(circle) => {
                let origin = circle.origin();
                let r = circle.radius();
                Aabb {
                    min: Point2::new(origin.x - r, origin.y - r),
                    max: Point2::new(origin.x + r, origin.y + r),
                }
            }
            Path::Arc(arc) => bounds_of(arc_extent_points(arc)),
            Path::BezierSeed(seed) => bounds_of(polygon_points(seed)),
        }
    }
}

fn bounds_of(points: impl IntoIterator<Item = Point2>) -> Aabb {
    let mut min = Point2::new(f64::INFINITY, f64::INFINITY);
    let mut max = Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
    for point in points {
        min = Point2::new(min.x.min(point.x), min.y.min(point.y));
        max = Point2::new(max.x.max(point.x), max.y.max(point.y));
    }
    Aabb { min, max }
}

/// The arc's endpoints plus the point at every quadrant angle (0, 90,
/// 180, 270 degrees) its span contains.
fn arc_extent_points(arc: &Arc) -> Vec<Point2> {
    let (start, end) = arc.endpoints();
    let mut points = vec![start, end];
    for quadrant in [0.0, 90.0, 180.0, 270.0] {
        if distance_2d::is_between_arc_angles(quadrant, arc.start_angle(), arc.end_angle(), false)
        {
            points.push(arc.point_at_angle(quadrant));
        }
    }
    points
}

fn polygon_points(seed: &BezierSeed) -> Vec<Point2> {
    let mut points = Vec::with_capacity(seed.controls().len() + 2);
    points.push(*seed.origin());
    points.extend_from_slice(seed.controls());
    points.push(*seed.end());
    points
}
