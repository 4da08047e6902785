use std::f64::consts::TAU;

use crate::geometry::{BezierSeed, Path};
use crate::math::distance_2d;

/// Chord sums double their subdivision until two successive sums agree
/// this closely.
const SEED_CONVERGENCE: f64 = 1e-9;
const SEED_MAX_SEGMENTS: u32 = 65_536;

/// Computes the length of a path.
pub struct Length {
    path: Path,
}

impl Length {
    /// Creates a new `Length` query.
    #[must_use]
    pub fn new(path: Path) -> Self {
        Self { path }
    }

    /// Executes the query, returning the path length.
    ///
    /// Lines, circles, and arcs measure in closed form; bezier seeds by
    /// chord-sum refinement.
    #[must_use]
    pub fn execute(&self) -> f64 {
        match &self.path {
            Path::Line(line) => distance_2d::point_distance(line.origin(), line.end()),
            Path::Circle(circle) => TAU * circle.radius(),
            Path::Arc(arc) => TAU * arc.radius() * arc.span_degrees() / 360.0,
            Path::BezierSeed(seed) => seed_length(seed),
        }
    }
}

fn seed_length(seed: &BezierSeed) -> f64 {
    // a controlless seed is its own chord
    if seed.controls().is_empty() {
        return distance_2d::point_distance(seed.origin(), seed.end());
    }

    let mut segments = 16;
    let mut previous = chord_sum(seed, segments);
    while segments < SEED_MAX_SEGMENTS {
        segments *= 2;
        let current = chord_sum(seed, segments);
        if (current - previous).abs() < SEED_CONVERGENCE {
            return current;
        }
        previous = current;
    }
    previous
}

fn chord_sum(seed: &BezierSeed, segments: u32) -> f64 {
    let mut sum = 0.0;
    let mut previous = *seed.origin();
    for i in 1..=segments {
        let point = seed.point_at(f64::from(i) / f64::from(segments));
        sum += distance_2d::point_distance(&previous, &point);
        previous = point;
    }
    sum
}
