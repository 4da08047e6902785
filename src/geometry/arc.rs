use crate::error::{GeometryError, Result};
use crate::math::{angle_2d, distance_2d, intersect_2d, point_2d, Point2, Vector2, TOLERANCE};

use super::Circle;

/// A circular arc defined by a center, a radius, and start/end angles in
/// degrees, traversed counter-clockwise from start to end.
///
/// Constructors store the angles they derive without reducing them; the
/// normalized view lives in [`Arc::end_angle_normalized`] and
/// [`Arc::span_degrees`].
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    origin: Point2,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
}

/// One candidate resolution of an SVG-style arc: a center together with
/// the angular window it produces.
struct SvgSpan {
    origin: Point2,
    start_angle: f64,
    end_angle: f64,
    size: f64,
}

impl Arc {
    /// Creates an arc from its center, radius, and angles in degrees.
    ///
    /// Angle ordering is taken as given: an end angle below the start
    /// angle is read as wrapping through zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive.
    pub fn new(origin: Point2, radius: f64, start_angle: f64, end_angle: f64) -> Result<Self> {
        if radius < TOLERANCE {
            return Err(
                GeometryError::DegenerateInput("arc radius must be positive".into()).into(),
            );
        }
        Ok(Self {
            origin,
            radius,
            start_angle,
            end_angle,
        })
    }

    /// Creates the semicircle whose diameter runs from `a` to `b`.
    ///
    /// Counter-clockwise traversal starts at `a`; with `clockwise` set the
    /// endpoints swap roles, selecting the mirror-image semicircle.
    ///
    /// # Errors
    ///
    /// Returns an error if the points coincide.
    pub fn from_two_points(a: Point2, b: Point2, clockwise: bool) -> Result<Self> {
        let circle = Circle::from_two_points(a, b)?;
        let (first, second) = if clockwise { (b, a) } else { (a, b) };
        let start_angle = angle_2d::of_point_degrees(circle.origin(), &first);
        let end_angle = angle_2d::of_point_degrees(circle.origin(), &second);
        Self::new(*circle.origin(), circle.radius(), start_angle, end_angle)
    }

    /// Creates the arc from `a` to `c` passing through `b`.
    ///
    /// The circumcircle of the three points fixes center and radius. The
    /// arc tentatively runs from `a` to `c`; when the through-point falls
    /// on the other side of the circle the endpoints swap, so the
    /// returned arc always contains `b`.
    ///
    /// # Errors
    ///
    /// Returns an error if neighboring points coincide or all three are
    /// collinear.
    pub fn from_three_points(a: Point2, b: Point2, c: Point2) -> Result<Self> {
        let circle = Circle::from_three_points(a, b, c)?;
        let origin = *circle.origin();
        let angle_a = angle_2d::of_point_degrees(&origin, &a);
        let angle_b = angle_2d::of_point_degrees(&origin, &b);
        let angle_c = angle_2d::of_point_degrees(&origin, &c);

        let (start_angle, end_angle) =
            if distance_2d::is_between_arc_angles(angle_b, angle_a, angle_c, false) {
                (angle_a, angle_c)
            } else {
                (angle_c, angle_a)
            };
        Self::new(origin, circle.radius(), start_angle, end_angle)
    }

    /// Creates an arc from SVG-style parameters: two endpoints, a radius,
    /// and the large-arc and sweep flags.
    ///
    /// The candidate centers are the intersection of two circles of the
    /// given radius centered on the endpoints. Each candidate yields an
    /// angular window (endpoint order from the `clockwise` flag, end
    /// lifted a revolution when below the start); the candidates are kept
    /// ordered by ascending span size and `large_arc` picks the second.
    /// The pick index wraps over the candidate count, so the tangent case
    /// of a single center (radius exactly half the endpoint chord, span
    /// exactly 180) resolves to that same semicircle for both flag
    /// values.
    ///
    /// # Errors
    ///
    /// Returns an error if no circle of the given radius passes through
    /// both endpoints, which covers both a radius shorter than half the
    /// endpoint chord and coincident endpoints.
    pub fn from_svg_arc(
        a: Point2,
        b: Point2,
        radius: f64,
        large_arc: bool,
        clockwise: bool,
    ) -> Result<Self> {
        let centers = intersect_2d::circle_circle_intersect_2d(&a, radius, &b, radius);
        if centers.is_empty() {
            return Err(GeometryError::DegenerateInput(format!(
                "no arc of radius {radius} spans the given endpoints"
            ))
            .into());
        }

        let (first, second) = if clockwise { (b, a) } else { (a, b) };

        let mut spans: Vec<SvgSpan> = Vec::with_capacity(2);
        for origin in centers {
            let start_angle = angle_2d::of_point_degrees(&origin, &first);
            let mut end_angle = angle_2d::of_point_degrees(&origin, &second);
            if end_angle < start_angle {
                end_angle += 360.0;
            }
            let span = SvgSpan {
                origin,
                start_angle,
                end_angle,
                size: end_angle - start_angle,
            };
            // ascending by span size
            if spans.is_empty() || span.size > spans[0].size {
                spans.push(span);
            } else {
                spans.insert(0, span);
            }
        }

        let chosen = &spans[usize::from(large_arc) % spans.len()];
        Self::new(chosen.origin, radius, chosen.start_angle, chosen.end_angle)
    }

    /// Returns the center of the arc.
    #[must_use]
    pub fn origin(&self) -> &Point2 {
        &self.origin
    }

    /// Returns the radius of the arc.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Start angle in degrees, as constructed.
    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// End angle in degrees, as constructed. May sit below the start
    /// angle; see [`Arc::end_angle_normalized`].
    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.end_angle
    }

    /// End angle lifted by full revolutions until it is not below the
    /// start angle.
    #[must_use]
    pub fn end_angle_normalized(&self) -> f64 {
        let mut end = self.end_angle;
        while end < self.start_angle {
            end += 360.0;
        }
        end
    }

    /// Angular extent of the arc in degrees, in `[0, 360]`.
    #[must_use]
    pub fn span_degrees(&self) -> f64 {
        angle_2d::of_arc_span(self.start_angle, self.end_angle)
    }

    /// Point on the arc's circle at an absolute angle in degrees.
    #[must_use]
    pub fn point_at_angle(&self, angle_deg: f64) -> Point2 {
        self.origin + point_2d::from_polar(angle_2d::to_radians(angle_deg), self.radius)
    }

    /// Start and end points of the arc, in traversal order.
    #[must_use]
    pub fn endpoints(&self) -> (Point2, Point2) {
        (
            self.point_at_angle(self.start_angle),
            self.point_at_angle(self.end_angle),
        )
    }

    /// Returns a copy of this arc moved by `displacement`.
    #[must_use]
    pub fn translated(&self, displacement: Vector2) -> Self {
        Self {
            origin: self.origin + displacement,
            radius: self.radius,
            start_angle: self.start_angle,
            end_angle: self.end_angle,
        }
    }

    /// Returns a copy rotated counter-clockwise by `angle_deg` degrees
    /// about `pivot`. The start angle advances with the rotation and
    /// reduces to `[0, 360)`; the end angle sits the original span above
    /// it, so a full-revolution arc stays a full revolution.
    #[must_use]
    pub fn rotated(&self, angle_deg: f64, pivot: &Point2) -> Self {
        let start_angle = angle_2d::no_revolutions(self.start_angle + angle_deg);
        Self {
            origin: point_2d::rotate(&self.origin, angle_deg, pivot),
            radius: self.radius,
            start_angle,
            end_angle: start_angle + self.span_degrees(),
        }
    }

    /// Returns a copy mirrored across the Y (`mirror_x`) and/or X
    /// (`mirror_y`) axis. Mirroring across exactly one axis reverses
    /// orientation, so the start and end angles swap roles. The span
    /// carries over unchanged; only the start re-anchors.
    #[must_use]
    pub fn mirrored(&self, mirror_x: bool, mirror_y: bool) -> Self {
        let origin = point_2d::mirror(&self.origin, mirror_x, mirror_y);
        let start = angle_2d::mirror(self.start_angle, mirror_x, mirror_y);
        let end = angle_2d::mirror(self.end_angle_normalized(), mirror_x, mirror_y);
        let reversed = mirror_x != mirror_y;
        let start_angle = angle_2d::no_revolutions(if reversed { end } else { start });
        Self {
            origin,
            radius: self.radius,
            start_angle,
            end_angle: start_angle + self.span_degrees(),
        }
    }
}
