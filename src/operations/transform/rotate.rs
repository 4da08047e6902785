use crate::geometry::Path;
use crate::math::Point2;

/// Rotates a path about a pivot point.
pub struct Rotate {
    path: Path,
    angle_deg: f64,
    pivot: Point2,
}

impl Rotate {
    /// Creates a new `Rotate` operation.
    ///
    /// * `angle_deg` - Rotation angle in degrees, counter-clockwise.
    #[must_use]
    pub fn new(path: Path, angle_deg: f64, pivot: Point2) -> Self {
        Self {
            path,
            angle_deg,
            pivot,
        }
    }

    /// Executes the rotation, returning the rotated path.
    ///
    /// Arc angles advance with the rotation; the start reduces to
    /// `[0, 360)` and the end keeps the arc's span above it.
    #[must_use]
    pub fn execute(&self) -> Path {
        match &self.path {
            Path::Line(line) => line.rotated(self.angle_deg, &self.pivot).into(),
            Path::Circle(circle) => circle.rotated(self.angle_deg, &self.pivot).into(),
            Path::Arc(arc) => arc.rotated(self.angle_deg, &self.pivot).into(),
            Path::BezierSeed(seed) => seed.rotated(self.angle_deg, &self.pivot).into(),
        }
    }
}
