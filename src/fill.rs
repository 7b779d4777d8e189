//! Scanline polygon filling
//!
//! Concave polygon scan conversion after Heckbert (Graphics Gems, 1990):
//! vertices are visited in ascending-y order while an active edge list
//! tracks the polygon sides crossing the current scanline. Sorting the
//! active edges by x and pairing them off under Jordan's rule (a span is
//! inside when a ray crosses the boundary an odd number of times) handles
//! concave, self-intersecting and either-winding input alike. Spans are
//! emitted into the coverage collector one raster row at a time.

use std::cmp::Ordering;

use log::trace;

use crate::buffer::Surface;
use crate::clip::ClipRect;
use crate::collector::SubPixelCollector;
use crate::color::Rgb8;
use crate::error::{RasterError, RasterResult};
use crate::math::Point2;

/// A polygon side crossed by the current scanline
///
/// Edge `i` runs from vertex `i` to vertex `i+1` (wrapping). Lives only
/// while the scanline is between the edge's two endpoints.
#[derive(Debug, Copy, Clone)]
struct Edge {
    /// x of the edge's intersection with the current scanline
    x: f64,
    /// change in x per unit y (inverse slope)
    dx: f64,
    /// originating vertex index
    i: usize,
}

/// Remove the edge originating at vertex `i` from the active list
///
/// A missing edge is a no-op: it was never inserted because the scan
/// started below its span.
fn delete_edge(active: &mut Vec<Edge>, i: usize) {
    if let Some(pos) = active.iter().position(|e| e.i == i) {
        active.remove(pos);
    }
}

/// Insert the edge originating at vertex `i`, positioned at scanline `y`
fn insert_edge(active: &mut Vec<Edge>, pts: &[Point2], i: usize, y: f64) {
    let n = pts.len();
    let j = if i < n - 1 { i + 1 } else { 0 };
    let (p, q) = if pts[i].y < pts[j].y {
        (pts[i], pts[j])
    } else {
        (pts[j], pts[i])
    };
    // A horizontal edge never crosses a scanline; skipping it here keeps
    // the slope division below well defined.
    if q.y - p.y <= 0.0 {
        return;
    }
    let dx = (q.x - p.x) / (q.y - p.y);
    active.push(Edge {
        x: dx * (y - p.y) + p.x,
        dx,
        i,
    });
}

/// Non-strict ordering for coordinate sorts
fn fcmp(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Scan-convert a polygon and blend its coverage into `surf`
///
/// The vertex list is taken as a closed loop; it may be concave, may
/// self-intersect, and may wind either way. A vertex lying exactly on a
/// scanline belongs to the scanline above it (half-open convention), so
/// it is consumed exactly once.
pub(crate) fn fill_into(
    collector: &mut SubPixelCollector,
    surf: &mut Surface,
    clip: &ClipRect,
    pts: &[Point2],
    color: Rgb8,
    alpha: f64,
) -> RasterResult {
    let n = pts.len();
    if n < 2 {
        return Err(RasterError::InvalidGeometry { verts: n });
    }

    // vertex indices sorted by ascending y
    let mut ind: Vec<usize> = (0..n).collect();
    ind.sort_by(|&a, &b| fcmp(pts[a].y, pts[b].y));

    let y0 = (clip.y1 as f64).max(pts[ind[0]].y);
    let y1 = (clip.y2 as f64).min(pts[ind[n - 1]].y);

    collector.set_color(color, alpha);
    collector.set_bounds(y0, y1, clip);
    trace!("fill: {} vertices, scanlines {}..={}", n, y0, y1);

    let mut active: Vec<Edge> = Vec::with_capacity(n);
    let mut k = 0; // ind[k] is the next vertex to consume

    let mut y = y0;
    while y <= y1 {
        // Consume vertices between the previous scanline and this one,
        // updating the active list for both adjacent edges of each.
        while k < n && pts[ind[k]].y <= y {
            let i = ind[k];
            let j = if i > 0 { i - 1 } else { n - 1 };
            if pts[j].y <= y {
                delete_edge(&mut active, j); // edge (j,i) has passed
            } else {
                insert_edge(&mut active, pts, j, y);
            }
            let j = if i < n - 1 { i + 1 } else { 0 };
            if pts[j].y <= y {
                delete_edge(&mut active, i); // edge (i,j) has passed
            } else {
                insert_edge(&mut active, pts, i, y);
            }
            k += 1;
        }

        active.sort_by(|a, b| fcmp(a.x, b.x));
        // Jordan's rule demands an even crossing count per scanline.
        debug_assert!(active.len() % 2 == 0, "odd active edge count at y={}", y);

        for pair in active.chunks_mut(2) {
            if pair.len() < 2 {
                break;
            }
            let xl = pair[0].x.max(clip.x1 as f64);
            let xr = pair[1].x.min(clip.x2 as f64);
            if xl <= xr {
                collector.add_rect(xl, y, xr - xl, 1.0, clip);
            }
            pair[0].x += pair[0].dx;
            pair[1].x += pair[1].dx;
        }

        y += 1.0;
    }

    collector.draw(surf)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas(w: usize, h: usize) -> (Surface, ClipRect, SubPixelCollector) {
        let surf = Surface::new(w, h);
        let clip = ClipRect::of_surface(&surf);
        (surf, clip, SubPixelCollector::new())
    }

    fn poly(xy: &[(f64, f64)]) -> Vec<Point2> {
        xy.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    #[test]
    fn too_few_vertices() {
        let (mut surf, clip, mut coll) = canvas(8, 8);
        let pts = poly(&[(1.0, 1.0)]);
        assert_eq!(
            fill_into(&mut coll, &mut surf, &clip, &pts, Rgb8::white(), 1.0),
            Err(RasterError::InvalidGeometry { verts: 1 })
        );
    }

    #[test]
    fn rectangle_footprint_is_exact() {
        let (mut surf, clip, mut coll) = canvas(10, 10);
        let pts = poly(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
        fill_into(&mut coll, &mut surf, &clip, &pts, Rgb8::new(255, 0, 0), 1.0).unwrap();
        for y in 0..10 {
            for x in 0..10 {
                let expect = if x < 4 && y < 4 {
                    Rgb8::new(255, 0, 0)
                } else {
                    Rgb8::black()
                };
                assert_eq!(surf.get(x, y), expect, "pixel ({},{})", x, y);
            }
        }
    }

    #[test]
    fn winding_direction_is_irrelevant() {
        let (mut surf, clip, mut coll) = canvas(10, 10);
        let cw = poly(&[(0.0, 0.0), (0.0, 4.0), (4.0, 4.0), (4.0, 0.0)]);
        fill_into(&mut coll, &mut surf, &clip, &cw, Rgb8::white(), 1.0).unwrap();
        assert_eq!(surf.get(2, 2), Rgb8::white());
        assert_eq!(surf.get(5, 5), Rgb8::black());
    }

    #[test]
    fn self_intersecting_bowtie() {
        // Crossing-parity fill: both lobes filled, no panic on the
        // crossing scanlines.
        let (mut surf, clip, mut coll) = canvas(16, 16);
        let pts = poly(&[(0.0, 0.0), (12.0, 12.0), (12.0, 0.0), (0.0, 12.0)]);
        fill_into(&mut coll, &mut surf, &clip, &pts, Rgb8::white(), 1.0).unwrap();
        // inside the left and right lobes
        assert_eq!(surf.get(1, 6), Rgb8::white());
        assert_eq!(surf.get(10, 6), Rgb8::white());
        // outside, above center
        assert_eq!(surf.get(6, 1), Rgb8::black());
    }

    #[test]
    fn clip_limits_the_fill() {
        let (mut surf, mut clip, mut coll) = canvas(10, 10);
        clip = clip.intersect(&ClipRect::new(2, 2, 6, 6));
        let pts = poly(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        fill_into(&mut coll, &mut surf, &clip, &pts, Rgb8::white(), 1.0).unwrap();
        assert_eq!(surf.get(3, 3), Rgb8::white());
        assert_eq!(surf.get(1, 3), Rgb8::black());
        assert_eq!(surf.get(3, 1), Rgb8::black());
        assert_eq!(surf.get(7, 7), Rgb8::black());
    }

    #[test]
    fn horizontal_edges_are_skipped() {
        // Trapezoid with two horizontal sides; they must never reach the
        // active list (their slope is undefined).
        let (mut surf, clip, mut coll) = canvas(12, 12);
        let pts = poly(&[(2.0, 2.0), (9.0, 2.0), (7.0, 7.0), (4.0, 7.0)]);
        fill_into(&mut coll, &mut surf, &clip, &pts, Rgb8::white(), 1.0).unwrap();
        assert_eq!(surf.get(5, 4), Rgb8::white());
        assert_eq!(surf.get(0, 4), Rgb8::black());
    }

    #[test]
    fn alpha_zero_changes_nothing() {
        let (mut surf, clip, mut coll) = canvas(10, 10);
        surf.fill(Rgb8::new(40, 50, 60));
        let before = surf.data.clone();
        let pts = poly(&[(1.0, 1.0), (8.0, 1.0), (8.0, 8.0), (1.0, 8.0)]);
        fill_into(&mut coll, &mut surf, &clip, &pts, Rgb8::white(), 0.0).unwrap();
        assert_eq!(surf.data, before);
    }
}
