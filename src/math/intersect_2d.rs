use super::{Point2, Vector2, TOLERANCE};

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if not
/// parallel.
#[must_use]
pub fn line_line_intersect_2d(
    p1: &Point2,
    d1: &Vector2,
    p2: &Point2,
    d2: &Vector2,
) -> Option<(f64, f64)> {
    let cross = d1.x * d2.y - d1.y * d2.x;
    if cross.abs() < TOLERANCE {
        return None;
    }
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let t = (dx * d2.y - dy * d2.x) / cross;
    let u = (dx * d1.y - dy * d1.x) / cross;
    Some((t, u))
}

/// Linear interpolation: `origin + dir * t`.
#[must_use]
pub fn point_at(origin: &Point2, dir: &Vector2, t: f64) -> Point2 {
    Point2::new(origin.x + dir.x * t, origin.y + dir.y * t)
}

/// Intersection of two infinite lines, each given by two points on it.
///
/// Returns `None` when the lines are parallel or either point pair is
/// coincident.
#[must_use]
pub fn slope_intersect_2d(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> Option<Point2> {
    let da = a1 - a0;
    let db = b1 - b0;
    let (t, _) = line_line_intersect_2d(a0, &da, b0, &db)?;
    Some(point_at(a0, &da, t))
}

/// Bounded segment-segment intersection.
///
/// Returns `(intersection_point, t, u)` with both parameters in `[0, 1]`.
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> Option<(Point2, f64, f64)> {
    let da = a1 - a0;
    let db = b1 - b0;
    let (t, u) = line_line_intersect_2d(a0, &da, b0, &db)?;

    // Use a small epsilon to include shared endpoints.
    let eps = TOLERANCE;
    if t >= -eps && t <= 1.0 + eps && u >= -eps && u <= 1.0 + eps {
        let t = t.clamp(0.0, 1.0);
        Some((point_at(a0, &da, t), t, u.clamp(0.0, 1.0)))
    } else {
        None
    }
}

/// Intersection of a line segment with a full circle.
///
/// Returns `(point, t)` pairs with the segment parameter `t` in `[0, 1]`,
/// ordered by increasing `t`.
#[must_use]
pub fn segment_circle_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    center: &Point2,
    radius: f64,
) -> Vec<(Point2, f64)> {
    let mut results = Vec::new();
    if radius < TOLERANCE {
        return results;
    }

    let d = a1 - a0;
    let seg_len_sq = d.norm_squared();
    if seg_len_sq < TOLERANCE * TOLERANCE {
        return results;
    }

    // Substitute the parametric segment into the circle equation:
    // (a0.x + t*d.x - center.x)² + (a0.y + t*d.y - center.y)² = r²
    let f = a0 - center;
    let a = seg_len_sq;
    let b = 2.0 * f.dot(&d);
    let c = f.norm_squared() - radius * radius;
    let discriminant = b * b - 4.0 * a * c;

    if discriminant < -TOLERANCE {
        return results;
    }
    let disc_sqrt = discriminant.max(0.0).sqrt();

    let eps = TOLERANCE;
    let t_roots = if disc_sqrt < TOLERANCE * 100.0 {
        // Tangent case: single root.
        vec![-b / (2.0 * a)]
    } else {
        vec![(-b - disc_sqrt) / (2.0 * a), (-b + disc_sqrt) / (2.0 * a)]
    };

    for t in t_roots {
        if t < -eps || t > 1.0 + eps {
            continue;
        }
        let t = t.clamp(0.0, 1.0);
        results.push((point_at(a0, &d, t), t));
    }

    results
}

/// Intersection points of two full circles.
///
/// Tangent circles return a single point. Concentric circles return no
/// points, coincident ones included (their contact is not enumerable).
#[must_use]
pub fn circle_circle_intersect_2d(c1: &Point2, r1: f64, c2: &Point2, r2: f64) -> Vec<Point2> {
    let mut results = Vec::new();
    if r1 < TOLERANCE || r2 < TOLERANCE {
        return results;
    }

    let d = c2 - c1;
    let dist_sq = d.norm_squared();
    let dist = dist_sq.sqrt();

    if dist < TOLERANCE {
        return results;
    }

    // Separated or nested circles cannot touch.
    let sum = r1 + r2;
    let diff = (r1 - r2).abs();
    if dist > sum + TOLERANCE || dist < diff - TOLERANCE {
        return results;
    }

    // Distance from c1 along the center line to the radical line.
    let a = (r1 * r1 - r2 * r2 + dist_sq) / (2.0 * dist);
    let h_sq = r1 * r1 - a * a;
    if h_sq < -TOLERANCE {
        return results;
    }
    let h = h_sq.max(0.0).sqrt();

    // Foot of the radical line on the center line.
    let m = c1 + d * (a / dist);

    if h < TOLERANCE {
        // Tangent circles touch in a single point.
        results.push(m);
    } else {
        // Perpendicular to the center line.
        let p = Vector2::new(-d.y, d.x) / dist;
        results.push(m + p * h);
        results.push(m - p * h);
    }

    results
}
