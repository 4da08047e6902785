use crate::geometry::{Arc, Circle, Line, Path};
use crate::math::{angle_2d, distance_2d, intersect_2d, Point2};

/// Computes the intersection points of two paths.
pub struct PathIntersect {
    path_a: Path,
    path_b: Path,
}

impl PathIntersect {
    /// Creates a new `PathIntersect` query.
    #[must_use]
    pub fn new(path_a: Path, path_b: Path) -> Self {
        Self { path_a, path_b }
    }

    /// Executes the query, returning all intersection points.
    ///
    /// Candidate points come from the segment and circle kernels; arc
    /// participants keep only candidates inside their angular span, and
    /// segments bound the hit to their extent. Coincident or overlapping
    /// paths have no enumerable point set and yield nothing, as does any
    /// pair involving a bezier seed (seeds are construction input, not
    /// intersectable paths).
    #[must_use]
    pub fn execute(&self) -> Vec<Point2> {
        match (&self.path_a, &self.path_b) {
            (Path::Line(a), Path::Line(b)) => line_line(a, b),
            (Path::Line(a), Path::Circle(b)) | (Path::Circle(b), Path::Line(a)) => {
                line_circle(a, b)
            }
            (Path::Line(a), Path::Arc(b)) | (Path::Arc(b), Path::Line(a)) => line_arc(a, b),
            (Path::Circle(a), Path::Circle(b)) => circle_circle(a, b),
            (Path::Circle(a), Path::Arc(b)) | (Path::Arc(b), Path::Circle(a)) => circle_arc(a, b),
            (Path::Arc(a), Path::Arc(b)) => arc_arc(a, b),
            (Path::BezierSeed(_), _) | (_, Path::BezierSeed(_)) => Vec::new(),
        }
    }
}

fn line_line(a: &Line, b: &Line) -> Vec<Point2> {
    match intersect_2d::segment_segment_intersect_2d(a.origin(), a.end(), b.origin(), b.end()) {
        Some((point, _, _)) => vec![point],
        None => Vec::new(),
    }
}

fn line_circle(line: &Line, circle: &Circle) -> Vec<Point2> {
    intersect_2d::segment_circle_intersect_2d(
        line.origin(),
        line.end(),
        circle.origin(),
        circle.radius(),
    )
    .into_iter()
    .map(|(point, _)| point)
    .collect()
}

fn line_arc(line: &Line, arc: &Arc) -> Vec<Point2> {
    intersect_2d::segment_circle_intersect_2d(
        line.origin(),
        line.end(),
        arc.origin(),
        arc.radius(),
    )
    .into_iter()
    .map(|(point, _)| point)
    .filter(|point| on_arc(point, arc))
    .collect()
}

fn circle_circle(a: &Circle, b: &Circle) -> Vec<Point2> {
    intersect_2d::circle_circle_intersect_2d(a.origin(), a.radius(), b.origin(), b.radius())
}

fn circle_arc(circle: &Circle, arc: &Arc) -> Vec<Point2> {
    intersect_2d::circle_circle_intersect_2d(
        circle.origin(),
        circle.radius(),
        arc.origin(),
        arc.radius(),
    )
    .into_iter()
    .filter(|point| on_arc(point, arc))
    .collect()
}

fn arc_arc(a: &Arc, b: &Arc) -> Vec<Point2> {
    intersect_2d::circle_circle_intersect_2d(a.origin(), a.radius(), b.origin(), b.radius())
        .into_iter()
        .filter(|point| on_arc(point, a) && on_arc(point, b))
        .collect()
}

/// Whether a point on the arc's circle falls inside the arc's span,
/// endpoints included.
fn on_arc(point: &Point2, arc: &Arc) -> bool {
    let angle = angle_2d::of_point_degrees(arc.origin(), point);
    distance_2d::is_between_arc_angles(angle, arc.start_angle(), arc.end_angle(), false)
}
