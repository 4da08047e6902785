use crate::error::{OperationError, Result};
use crate::geometry::{Arc, BezierSeed, Circle, Line, Path};
use crate::math::{Point2, TOLERANCE};

/// Scales a path uniformly about the coordinate origin.
pub struct Scale {
    path: Path,
    factor: f64,
}

impl Scale {
    /// Creates a new `Scale` operation.
    #[must_use]
    pub fn new(path: Path, factor: f64) -> Self {
        Self { path, factor }
    }

    /// Executes the scaling, returning the scaled path.
    ///
    /// Circle and arc radii scale with the factor; arc angles are
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the factor is zero or negative.
    pub fn execute(&self) -> Result<Path> {
        if self.factor < TOLERANCE {
            return Err(
                OperationError::InvalidInput("scale factor must be positive".into()).into(),
            );
        }
        let f = self.factor;
        let path = match &self.path {
            Path::Line(line) => {
                Line::new(scaled(line.origin(), f), scaled(line.end(), f))?.into()
            }
            Path::Circle(circle) => {
                Circle::new(scaled(circle.origin(), f), circle.radius() * f)?.into()
            }
            Path::Arc(arc) => Arc::new(
                scaled(arc.origin(), f),
                arc.radius() * f,
                arc.start_angle(),
                arc.end_angle(),
            )?
            .into(),
            Path::BezierSeed(seed) => {
                let controls: Vec<Point2> =
                    seed.controls().iter().map(|c| scaled(c, f)).collect();
                BezierSeed::new(scaled(seed.origin(), f), &controls, scaled(seed.end(), f))?
                    .into()
            }
        };
        Ok(path)
    }
}

fn scaled(point: &Point2, factor: f64) -> Point2 {
    Point2::new(point.x * factor, point.y * factor)
}
