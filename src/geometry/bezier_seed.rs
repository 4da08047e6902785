use crate::error::{GeometryError, Result};
use crate::math::{point_2d, Point2, Vector2};

/// The minimal point set seeding a bezier curve: an origin, an end, and
/// zero to two control points.
///
/// One control point seeds a quadratic curve, two a cubic; a seed without
/// controls degenerates to a straight segment. Construction is purely
/// structural normalization of variable-arity input, with no geometric
/// computation.
#[derive(Debug, Clone, PartialEq)]
pub struct BezierSeed {
    origin: Point2,
    controls: Vec<Point2>,
    end: Point2,
}

impl BezierSeed {
    /// Creates a seed from an origin, an explicit control sequence taken
    /// as-is, and an end.
    ///
    /// # Errors
    ///
    /// Returns an error if more than two control points are given.
    pub fn new(origin: Point2, controls: &[Point2], end: Point2) -> Result<Self> {
        if controls.len() > 2 {
            return Err(GeometryError::InvalidArguments(format!(
                "a bezier seed takes at most 2 control points, got {}",
                controls.len()
            ))
            .into());
        }
        Ok(Self {
            origin,
            controls: controls.to_vec(),
            end,
        })
    }

    /// Creates a seed from a flat point sequence: origin first, end last,
    /// controls between. Two points seed a straight segment, three a
    /// quadratic curve, four a cubic one.
    ///
    /// # Errors
    ///
    /// Returns an error for any other sequence length.
    pub fn from_points(points: &[Point2]) -> Result<Self> {
        match points {
            [origin, end] => Self::new(*origin, &[], *end),
            [origin, control, end] => Self::new(*origin, &[*control], *end),
            [origin, first, second, end] => Self::new(*origin, &[*first, *second], *end),
            _ => Err(GeometryError::InvalidArguments(format!(
                "a bezier seed takes 2 to 4 points, got {}",
                points.len()
            ))
            .into()),
        }
    }

    /// Creates a quadratic seed from its single control point.
    #[must_use]
    pub fn quadratic(origin: Point2, control: Point2, end: Point2) -> Self {
        Self {
            origin,
            controls: vec![control],
            end,
        }
    }

    /// Creates a cubic seed from its two control points.
    #[must_use]
    pub fn cubic(origin: Point2, control1: Point2, control2: Point2, end: Point2) -> Self {
        Self {
            origin,
            controls: vec![control1, control2],
            end,
        }
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

    /// Returns the control points, in order.
    #[must_use]
    pub fn controls(&self) -> &[Point2] {
        &self.controls
    }

    /// Polynomial order of the seeded curve: 1 for a straight seed, 2 for
    /// quadratic, 3 for cubic.
    #[must_use]
    pub fn order(&self) -> usize {
        self.controls.len() + 1
    }

    /// Evaluates the seeded curve at parameter `t` with the Bernstein
    /// closed form of its order. `t` of 0 and 1 return the stored
    /// endpoint values exactly.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn point_at(&self, t: f64) -> Point2 {
        if t == 0.0 {
            return self.origin;
        }
        if t == 1.0 {
            return self.end;
        }
        let mt = 1.0 - t;
        match self.controls.as_slice() {
            [] => Point2::from(self.origin.coords * mt + self.end.coords * t),
            [control] => Point2::from(
                self.origin.coords * (mt * mt)
                    + control.coords * (2.0 * mt * t)
                    + self.end.coords * (t * t),
            ),
            [first, second, ..] => Point2::from(
                self.origin.coords * (mt * mt * mt)
                    + first.coords * (3.0 * mt * mt * t)
                    + second.coords * (3.0 * mt * t * t)
                    + self.end.coords * (t * t * t),
            ),
        }
    }

    /// Returns a copy of this seed moved by `displacement`.
    #[must_use]
    pub fn translated(&self, displacement: Vector2) -> Self {
        Self {
            origin: self.origin + displacement,
            controls: self.controls.iter().map(|c| *c + displacement).collect(),
            end: self.end + displacement,
        }
    }

    /// Returns a copy rotated counter-clockwise by `angle_deg` degrees
    /// about `pivot`.
    #[must_use]
    pub fn rotated(&self, angle_deg: f64, pivot: &Point2) -> Self {
        Self {
            origin: point_2d::rotate(&self.origin, angle_deg, pivot),
            controls: self
                .controls
                .iter()
                .map(|c| point_2d::rotate(c, angle_deg, pivot))
                .collect(),
            end: point_2d::rotate(&self.end, angle_deg, pivot),
        }
    }

    /// Returns a copy with X (`mirror_x`) and/or Y (`mirror_y`)
    /// coordinates negated.
    #[must_use]
    pub fn mirrored(&self, mirror_x: bool, mirror_y: bool) -> Self {
        Self {
            origin: point_2d::mirror(&self.origin, mirror_x, mirror_y),
            controls: self
                .controls
                .iter()
                .map(|c| point_2d::mirror(c, mirror_x, mirror_y))
                .collect(),
            end: point_2d::mirror(&self.end, mirror_x, mirror_y),
        }
    }
}
