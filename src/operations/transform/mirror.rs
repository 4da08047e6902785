use crate::geometry::Path;

/// Mirrors a path across the coordinate axes.
pub struct Mirror {
    path: Path,
    mirror_x: bool,
    mirror_y: bool,
}

impl Mirror {
    /// Creates a new `Mirror` operation.
    ///
    /// * `mirror_x` - Negate x coordinates (reflect across the y axis).
    /// * `mirror_y` - Negate y coordinates (reflect across the x axis).
    #[must_use]
    pub fn new(path: Path, mirror_x: bool, mirror_y: bool) -> Self {
        Self {
            path,
            mirror_x,
            mirror_y,
        }
    }

    /// Executes the reflection, returning the mirrored path.
    ///
    /// A single-axis reflection reverses arc orientation, so arc start and
    /// end angles exchange roles to keep spans counter-clockwise.
    #[must_use]
    pub fn execute(&self) -> Path {
        match &self.path {
            Path::Line(line) => line.mirrored(self.mirror_x, self.mirror_y).into(),
            Path::Circle(circle) => circle.mirrored(self.mirror_x, self.mirror_y).into(),
            Path::Arc(arc) => arc.mirrored(self.mirror_x, self.mirror_y).into(),
            Path::BezierSeed(seed) => seed.mirrored(self.mirror_x, self.mirror_y).into(),
        }
    }
}
