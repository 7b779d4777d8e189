//! Clipping Region

use crate::buffer::Surface;

/// Integer clip rectangle
///
/// `x1`,`y1` are inclusive, `x2`,`y2` are exclusive: a pixel (x,y) may be
/// touched only when `x1 <= x < x2` and `y1 <= y < y2`. Every geometry
/// operation intersects its output against these bounds before any pixel
/// is read or written.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct ClipRect {
    /// Left bound, inclusive
    pub x1: i64,
    /// Top bound, inclusive
    pub y1: i64,
    /// Right bound, exclusive
    pub x2: i64,
    /// Bottom bound, exclusive
    pub y2: i64,
}

impl ClipRect {
    /// Create a new clip rectangle
    ///
    /// Values are sorted before storing
    pub fn new(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        let (x1, x2) = if x1 > x2 { (x2, x1) } else { (x1, x2) };
        let (y1, y2) = if y1 > y2 { (y2, y1) } else { (y1, y2) };
        Self { x1, y1, x2, y2 }
    }
    /// Clip rectangle covering a whole surface
    pub fn of_surface(surf: &Surface) -> Self {
        Self::new(0, 0, surf.width as i64, surf.height as i64)
    }
    /// Intersection of two clip rectangles
    ///
    /// An empty intersection collapses to a zero-area rectangle
    pub fn intersect(&self, other: &ClipRect) -> Self {
        let x1 = self.x1.max(other.x1);
        let y1 = self.y1.max(other.y1);
        let x2 = self.x2.min(other.x2).max(x1);
        let y2 = self.y2.min(other.y2).max(y1);
        Self { x1, y1, x2, y2 }
    }
    /// Test whether a bounding box lies entirely outside the clip region
    pub fn is_outside(&self, minx: f64, miny: f64, maxx: f64, maxy: f64) -> bool {
        (maxx as i64) < self.x1
            || minx as i64 >= self.x2
            || (maxy as i64) < self.y1
            || miny as i64 >= self.y2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sorts_corners() {
        let c = ClipRect::new(10, 8, 0, 2);
        assert_eq!(c, ClipRect::new(0, 2, 10, 8));
    }

    #[test]
    fn intersect_clamps() {
        let a = ClipRect::new(0, 0, 10, 10);
        let b = ClipRect::new(4, -2, 20, 6);
        assert_eq!(a.intersect(&b), ClipRect::new(4, 0, 10, 6));
        // disjoint collapses to empty
        let c = a.intersect(&ClipRect::new(20, 20, 30, 30));
        assert_eq!(c.x1, c.x2);
    }

    #[test]
    fn outside_test() {
        let c = ClipRect::new(0, 0, 10, 10);
        assert!(c.is_outside(-5.0, -5.0, -1.0, -1.0));
        assert!(c.is_outside(10.0, 0.0, 12.0, 5.0));
        assert!(!c.is_outside(-5.0, -5.0, 0.0, 0.0));
        assert!(!c.is_outside(3.0, 3.0, 4.0, 4.0));
    }
}
