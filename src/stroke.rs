//! Thick poly-line stroking
//!
//! Expands a centerline plus radius into a single closed outline polygon:
//! two passes over the centerline (forward then reverse), each emitting a
//! rounded end cap followed by one offset point or join arc per interior
//! vertex. Filling the outline with crossing-parity scan conversion then
//! renders the thick line, caps and joins included.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::error::{RasterError, RasterResult};
use crate::math::{angle_diff, cross, len, project, Point2};

/// Maximum number of points generated for one cap or join
pub const MAX_JOIN_POINTS: usize = 20;

/// Points closer than this are treated as coincident
const DEDUP_EPSILON: f64 = 1e-12;

/// Drop consecutive coincident points
///
/// A zero-length segment has no heading (the arctangent of a zero
/// vector), so such points must never reach the offset computation.
fn clean(pts: &[Point2]) -> Vec<Point2> {
    let mut out: Vec<Point2> = Vec::with_capacity(pts.len());
    for &p in pts {
        match out.last() {
            Some(&q) if len(p, q) < DEDUP_EPSILON => {}
            _ => out.push(p),
        }
    }
    out
}

fn heading_len(a: Point2, b: Point2) -> (f64, f64) {
    ((b.y - a.y).atan2(b.x - a.x), len(a, b))
}

/// Expand a centerline of radius `radius` into a closed outline polygon
///
/// Returns an empty outline when the centerline collapses to fewer than
/// two distinct points. The output is bounded by
/// `MAX_JOIN_POINTS * 2 * N`; exceeding that bound is a capacity error,
/// never a silent truncation.
pub fn stroke_outline(pts: &[Point2], radius: f64) -> RasterResult<Vec<Point2>> {
    if pts.len() < 2 {
        return Err(RasterError::InvalidGeometry { verts: pts.len() });
    }
    let v = clean(pts);
    if v.len() < 2 {
        return Ok(vec![]);
    }
    let n = v.len();
    let inner = n - 2;

    // Cap resolution scales with thickness so fat lines stay round.
    let numep = ((radius + 1.0) as usize).max(3).min(MAX_JOIN_POINTS);
    let estep = PI / (numep - 1) as f64;
    let cap = MAX_JOIN_POINTS * 2 * n;
    let mut out: Vec<Point2> = Vec::with_capacity(cap);

    // i1,i2 bracket the current segment; pass 0 walks them forward from
    // the first segment, pass 1 walks them back from the last.
    let mut i1 = 0usize;
    let mut i2 = 1usize;
    let (mut heading, mut seglen) = heading_len(v[0], v[1]);

    for pass in 0..2 {
        // half-circle fan around the end point
        let end = if pass == 0 { v[i1] } else { v[i2] };
        let mut h = heading - FRAC_PI_2;
        for _ in 0..numep {
            out.push(project(end, radius, h));
            h += estep;
        }

        for _ in 0..inner {
            let last_heading = heading;
            let last_len = seglen;
            if pass == 0 {
                i1 += 1;
                i2 += 1;
            } else {
                i1 -= 1;
                i2 -= 1;
            }
            let (a, b) = (v[i1], v[i2]);
            heading = if pass == 0 {
                (b.y - a.y).atan2(b.x - a.x)
            } else {
                (a.y - b.y).atan2(a.x - b.x)
            };
            seglen = len(a, b);

            let corner = if pass == 0 { v[i1] } else { v[i2] };
            let h = last_heading + FRAC_PI_2;
            let hdelta = angle_diff(heading, last_heading);
            // join resolution scales with turn angle and thickness
            let numcp = (((hdelta * radius * 0.35).abs() as usize) + 3).min(MAX_JOIN_POINTS);
            let step = hdelta / (numcp - 1) as f64;

            // Probe the two offset endpoints of the would-be arc to
            // decide which side of the turn we are on.
            let pb = project(corner, radius, h);
            let pc = project(corner, radius, h + hdelta);
            if cross(corner, pb, pc) < 0.0 {
                // Inner side of the turn. An arc here would sweep across
                // the centerline; when the bevel distance exceeds either
                // adjacent segment the overlap would self-intersect, so
                // the join collapses to a single miter-style point.
                let dist = -(radius * 0.5) * (hdelta * 0.5).tan();
                if dist > seglen || dist > last_len {
                    out.push(project(corner, radius, heading + last_heading + FRAC_PI_2));
                } else {
                    // arc about a center displaced to the outer side
                    let center = project(corner, (dist + radius) * 2.0, h + hdelta * 0.5);
                    let mut h = h + PI;
                    for _ in 0..numcp {
                        out.push(project(center, radius, h));
                        h += step;
                    }
                }
            } else {
                // Outer side: fan of join points swept through the turn.
                let mut h = h;
                for _ in 0..numcp {
                    out.push(project(corner, radius, h));
                    h += step;
                }
            }
        }

        // reverse direction for the return pass
        heading += PI;
    }

    if out.len() > cap {
        return Err(RasterError::CapacityExceeded {
            needed: out.len(),
            cap,
        });
    }
    Ok(out)
}
