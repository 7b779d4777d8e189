//! Single segment rasterization
//!
//! Walks the segment along its major axis in unit steps, stamping an
//! axis-aligned square of side `min(remaining length, 1)` into the
//! coverage collector at each step. This approximates the line's
//! coverage rather than computing it analytically; where the segment is
//! steep relative to its major axis, adjacent stamps can overlap on a
//! row and accumulate more than full coverage. Kept as-is to preserve
//! the established visual behavior of the thin-line path.

use crate::buffer::Surface;
use crate::clip::ClipRect;
use crate::collector::SubPixelCollector;
use crate::color::Rgb8;
use crate::error::RasterResult;
use crate::math::Point2;

/// Rasterize a segment and blend it into `surf`
///
/// Returns `Ok(false)` without side effects when the segment's bounding
/// box lies entirely outside the clip region, `Ok(true)` otherwise.
pub(crate) fn line_into(
    collector: &mut SubPixelCollector,
    surf: &mut Surface,
    clip: &ClipRect,
    p1: Point2,
    p2: Point2,
    color: Rgb8,
    alpha: f64,
) -> RasterResult<bool> {
    let (minx, maxx) = if p1.x <= p2.x { (p1.x, p2.x) } else { (p2.x, p1.x) };
    let (miny, maxy) = if p1.y <= p2.y { (p1.y, p2.y) } else { (p2.y, p1.y) };
    if clip.is_outside(minx, miny, maxx, maxy) {
        return Ok(false);
    }

    collector.set_color(color, alpha);
    collector.set_bounds(p1.y, p2.y, clip);

    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;

    if dx.abs() > dy.abs() {
        // x is the major axis
        let stepx = if dx > 0.0 { 1.0 } else { -1.0 };
        let stepy = dy / dx.abs();
        let mut length = dx.abs();
        let mut x = p1.x;
        let mut y = p1.y;
        loop {
            let size = length.min(1.0);
            collector.add_rect(x, y, size, size, clip);
            x += stepx;
            y += stepy;
            length -= 1.0;
            if length <= 0.0 {
                break;
            }
        }
    } else {
        // y is the major axis; a degenerate zero-length segment lands
        // here and must step nowhere rather than divide by zero
        let stepy = if dy > 0.0 {
            1.0
        } else if dy < 0.0 {
            -1.0
        } else {
            0.0
        };
        let stepx = if dy == 0.0 { 0.0 } else { dx / dy.abs() };
        let mut length = dy.abs();
        let mut x = p1.x;
        let mut y = p1.y;
        loop {
            let size = length.min(1.0);
            collector.add_rect(x, y, size, size, clip);
            x += stepx;
            y += stepy;
            length -= 1.0;
            if length <= 0.0 {
                break;
            }
        }
    }

    collector.draw(surf)?;
    Ok(true)
}
