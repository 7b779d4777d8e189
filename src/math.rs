//! Geometric primitives and helpers

use std::f64::consts::PI;

/// Point in two dimensions
///
/// Vertex sequences of these define polygons and polylines, in
/// caller-supplied order. No identity beyond the coordinate values.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Point2 {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point2 {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Point2 { x, y }
    }
}

/// Cross product of the vectors (p1,p2) and (p1,p3)
///
/// Positive when p3 lies to the left of the directed line p1 -> p2
pub fn cross(p1: Point2, p2: Point2, p3: Point2) -> f64 {
    (p2.x - p1.x) * (p3.y - p1.y) - (p2.y - p1.y) * (p3.x - p1.x)
}

/// Distance between two points
pub fn len(p1: Point2, p2: Point2) -> f64 {
    (p2.x - p1.x).hypot(p2.y - p1.y)
}

/// Project from `p` a distance `r` against heading `a`
pub fn project(p: Point2, r: f64, a: f64) -> Point2 {
    Point2::new(p.x - a.cos() * r, p.y - a.sin() * r)
}

/// Difference of two headings, normalized into (-pi, pi]
pub fn angle_diff(h1: f64, h2: f64) -> f64 {
    let mut d = h1 - h2;
    while d > PI {
        d -= 2.0 * PI;
    }
    while d < -PI {
        d += 2.0 * PI;
    }
    d
}
