//! Sub-pixel coverage collection
//!
//! The collector gathers weighted horizontal coverage contributions for
//! one color/alpha over a bounded row range, then blends them into the
//! destination surface in a single pass:
//!
//! ```text
//! set_color / set_bounds -> add_rect* -> draw
//! ```
//!
//! Each `add_rect` is decomposed into per-row *chunks*; a chunk records a
//! horizontal extent and the fraction of the row's height it covers. At
//! draw time the chunks of a row are splatted into a dense per-pixel
//! weight array with exact fractional coverage at the two boundary
//! pixels, and the weights drive a straight (non-premultiplied) linear
//! blend of the source color against the destination.

use log::trace;

use crate::buffer::Surface;
use crate::clip::ClipRect;
use crate::color::Rgb8;
use crate::error::{RasterError, RasterResult};

/// Maximum width in pixels of a single collected row
///
/// Wider rows are reported as a capacity violation at draw time.
pub const MAX_ROW_WIDTH: usize = 1024;

/// One weighted horizontal coverage contribution for a single row
#[derive(Debug, Default, Copy, Clone)]
struct Chunk {
    /// Left x of the contribution
    leftx: f64,
    /// Width of the contribution in pixels
    width: f64,
    /// Fraction of the row's height covered, in [0,1]
    weight: f64,
    /// Previously added chunk for the same row
    prev: Option<u32>,
}

/// Per-row state: chunk list head and the touched horizontal extent
#[derive(Debug, Default, Copy, Clone)]
struct Row {
    head: Option<u32>,
    leftx: f64,
    rightx: f64,
}

/// Fractional coverage accumulator
///
/// Working storage (rows, chunk arena, weight buffer) is reused across
/// calls; `set_bounds` fully resets it. Access through `&mut self` keeps
/// a single instance safe from re-entrant use.
#[derive(Debug, Default)]
pub struct SubPixelCollector {
    rows: Vec<Row>,
    chunks: Vec<Chunk>,
    weights: Vec<f64>,
    /// First active row, inclusive
    topy: i64,
    /// Last active row, inclusive
    bottomy: i64,
    red: f64,
    green: f64,
    blue: f64,
    alpha: f64,
}

impl SubPixelCollector {
    pub fn new() -> Self {
        Self::default()
    }
    /// Record the blend color and alpha
    pub fn set_color(&mut self, c: Rgb8, alpha: f64) {
        self.red = f64::from(c.r);
        self.green = f64::from(c.g);
        self.blue = f64::from(c.b);
        self.alpha = alpha.max(0.0).min(1.0);
    }
    /// Activate the row range spanned by `y1` and `y2`, intersected with
    /// the clip bounds, and reset all per-pass storage
    pub fn set_bounds(&mut self, y1: f64, y2: f64, clip: &ClipRect) {
        self.chunks.clear();
        self.topy = (y1.min(y2) as i64).max(clip.y1);
        self.bottomy = (y1.max(y2) as i64 + 1).min(clip.y2 - 1);
        let n = if self.bottomy >= self.topy {
            (self.bottomy - self.topy + 1) as usize
        } else {
            0
        };
        self.rows.clear();
        self.rows.resize(n, Row::default());
    }
    /// Collect coverage of the rectangle `[x, x+w) x [y, y+h)`
    ///
    /// The x-range is clipped first and dropped entirely when empty. The
    /// vertical extent is split into one chunk per integer row: a
    /// fractional top row, full-weight interior rows, and a fractional
    /// remainder row.
    pub fn add_rect(&mut self, x: f64, y: f64, w: f64, h: f64, clip: &ClipRect) {
        let mut x = x;
        let mut rx = x + w;
        if x < clip.x1 as f64 {
            x = clip.x1 as f64;
        }
        if rx > clip.x2 as f64 {
            rx = clip.x2 as f64;
        }
        if rx <= x {
            return; // off the clip region
        }

        let ty = y as i64;
        let by = (y + h) as i64;
        if ty == by {
            // entirely within a single raster row
            self.add_chunk(ty, x, rx, h, clip);
        } else {
            let weight = (ty + 1) as f64 - y;
            self.add_chunk(ty, x, rx, weight, clip);
            let mut h = h - weight;
            let mut ty = ty;
            while h >= 1.0 {
                ty += 1;
                self.add_chunk(ty, x, rx, 1.0, clip);
                h -= 1.0;
            }
            if h > 0.0 {
                self.add_chunk(ty + 1, x, rx, h, clip);
            }
        }
    }
    /// Prepend one chunk to row `y` and widen the row's extent
    fn add_chunk(&mut self, y: i64, lx: f64, rx: f64, weight: f64, clip: &ClipRect) {
        if y < self.topy || y > self.bottomy {
            return;
        }
        let row = &mut self.rows[(y - self.topy) as usize];
        let prev = row.head;
        let idx = self.chunks.len() as u32;
        self.chunks.push(Chunk {
            leftx: lx,
            width: rx - lx,
            weight,
            prev,
        });
        // A chunk ending exactly on the clip's right edge is pulled in by
        // one pixel so the blend loop never reads past the valid range.
        let rx = if rx == clip.x2 as f64 { rx - 1.0 } else { rx };
        row.head = Some(idx);
        if prev.is_none() {
            row.leftx = lx;
            row.rightx = rx;
        } else {
            row.leftx = row.leftx.min(lx);
            row.rightx = row.rightx.max(rx);
        }
    }
    /// Blend every collected row into the destination surface
    pub fn draw(&mut self, surf: &mut Surface) -> RasterResult {
        if self.rows.is_empty() {
            return Ok(());
        }
        trace!(
            "collector draw: rows {}..={} chunks {}",
            self.topy,
            self.bottomy,
            self.chunks.len()
        );
        for y in self.topy..=self.bottomy {
            let row = self.rows[(y - self.topy) as usize];
            if row.head.is_none() {
                continue;
            }
            if y < 0 || y >= surf.height as i64 {
                return Err(RasterError::OutOfBounds { x: row.leftx as i64, y });
            }
            let lx = row.leftx as i64;
            let rx = row.rightx as i64;
            if lx < 0 || rx >= surf.width as i64 {
                return Err(RasterError::OutOfBounds { x: lx.min(rx), y });
            }
            let nx = (rx - lx + 1) as usize;
            if nx > MAX_ROW_WIDTH {
                return Err(RasterError::CapacityExceeded {
                    needed: nx,
                    cap: MAX_ROW_WIDTH,
                });
            }
            self.weights.clear();
            self.weights.resize(nx, 0.0);

            // splat every chunk of this row into the weight array
            let mut next = row.head;
            while let Some(ci) = next {
                let chunk = self.chunks[ci as usize];
                let weight = chunk.weight;
                let mut clx = chunk.leftx as i64;
                let crx = (chunk.leftx + chunk.width) as i64;
                let mut width = chunk.width;
                if clx == crx {
                    self.weights[(clx - lx) as usize] += width * weight;
                } else {
                    let fwidth = 1.0 - (chunk.leftx - clx as f64);
                    self.weights[(clx - lx) as usize] += fwidth * weight;
                    clx += 1;
                    width -= fwidth;
                    while width >= 1.0 {
                        self.weights[(clx - lx) as usize] += weight;
                        width -= 1.0;
                        clx += 1;
                    }
                    if width > 0.0 {
                        self.weights[(clx - lx) as usize] += width * weight;
                    }
                }
                next = chunk.prev;
            }

            // blend the row
            for x in lx..=rx {
                let weight = self.weights[(x - lx) as usize] * self.alpha;
                let bweight = 1.0 - weight;
                let bg = surf.get(x as usize, y as usize);
                let c = Rgb8::new(
                    (self.red * weight + f64::from(bg.r) * bweight) as u8,
                    (self.green * weight + f64::from(bg.g) * bweight) as u8,
                    (self.blue * weight + f64::from(bg.b) * bweight) as u8,
                );
                surf.set(x as usize, y as usize, c);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_weights(c: &SubPixelCollector, y: i64) -> Vec<f64> {
        let mut out = vec![];
        let mut next = c.rows[(y - c.topy) as usize].head;
        while let Some(ci) = next {
            let chunk = c.chunks[ci as usize];
            out.push(chunk.weight);
            next = chunk.prev;
        }
        out.reverse(); // insertion order
        out
    }

    #[test]
    fn rect_row_decomposition() {
        let clip = ClipRect::new(0, 0, 10, 10);
        let mut c = SubPixelCollector::new();
        c.set_color(Rgb8::white(), 1.0);
        c.set_bounds(0.0, 4.0, &clip);
        c.add_rect(1.0, 0.25, 2.0, 2.5, &clip);
        // top row gets the fraction up to the next integer boundary
        assert_eq!(row_weights(&c, 0), vec![0.75]);
        assert_eq!(row_weights(&c, 1), vec![1.0]);
        assert!((row_weights(&c, 2)[0] - 0.75).abs() < 1e-12);
    }

    #[test]
    fn rect_single_row_uses_height_as_weight() {
        let clip = ClipRect::new(0, 0, 10, 10);
        let mut c = SubPixelCollector::new();
        c.set_bounds(0.0, 1.0, &clip);
        c.add_rect(2.0, 0.25, 3.0, 0.5, &clip);
        assert_eq!(row_weights(&c, 0), vec![0.5]);
    }

    #[test]
    fn rect_outside_clip_adds_nothing() {
        let clip = ClipRect::new(0, 0, 10, 10);
        let mut c = SubPixelCollector::new();
        c.set_bounds(0.0, 9.0, &clip);
        c.add_rect(12.0, 1.0, 4.0, 1.0, &clip); // right of clip
        c.add_rect(-8.0, 1.0, 4.0, 1.0, &clip); // left of clip
        c.add_rect(1.0, 20.0, 4.0, 1.0, &clip); // below active rows
        assert!(c.chunks.is_empty());

        let mut surf = Surface::new(10, 10);
        c.set_color(Rgb8::white(), 1.0);
        c.draw(&mut surf).unwrap();
        assert!(surf.data.iter().all(|&v| v == 0));
    }

    #[test]
    fn clip_right_edge_pulls_extent_in() {
        let clip = ClipRect::new(0, 0, 10, 10);
        let mut c = SubPixelCollector::new();
        c.set_bounds(0.0, 1.0, &clip);
        c.add_rect(8.0, 0.0, 5.0, 1.0, &clip);
        let row = c.rows[0];
        // x-range clamped to the clip, extent pulled in one pixel
        assert_eq!(c.chunks[0].width, 2.0);
        assert_eq!(row.rightx, 9.0);

        let mut surf = Surface::new(10, 10);
        c.set_color(Rgb8::white(), 1.0);
        c.draw(&mut surf).unwrap();
        assert_eq!(surf.get(8, 0), Rgb8::white());
        assert_eq!(surf.get(9, 0), Rgb8::white());
    }

    #[test]
    fn fractional_x_splat() {
        let clip = ClipRect::new(0, 0, 10, 10);
        let mut c = SubPixelCollector::new();
        c.set_color(Rgb8::white(), 1.0);
        c.set_bounds(0.0, 1.0, &clip);
        // [1.5, 3.5) at full row weight: pixels 1 and 3 half covered
        c.add_rect(1.5, 0.0, 2.0, 1.0, &clip);
        let mut surf = Surface::new(10, 10);
        c.draw(&mut surf).unwrap();
        assert_eq!(surf.get(1, 0), Rgb8::gray(127));
        assert_eq!(surf.get(2, 0), Rgb8::white());
        assert_eq!(surf.get(3, 0), Rgb8::gray(127));
        assert_eq!(surf.get(4, 0), Rgb8::black());
    }

    #[test]
    fn alpha_zero_is_identity() {
        let clip = ClipRect::new(0, 0, 10, 10);
        let mut surf = Surface::new(10, 10);
        surf.fill(Rgb8::new(12, 34, 56));
        let before = surf.data.clone();

        let mut c = SubPixelCollector::new();
        c.set_color(Rgb8::white(), 0.0);
        c.set_bounds(0.0, 9.0, &clip);
        c.add_rect(0.0, 0.0, 10.0, 10.0, &clip);
        c.draw(&mut surf).unwrap();
        assert_eq!(surf.data, before);
    }

    #[test]
    fn over_wide_row_is_capacity_error() {
        let mut surf = Surface::new(MAX_ROW_WIDTH + 80, 2);
        let clip = ClipRect::of_surface(&surf);
        let mut c = SubPixelCollector::new();
        c.set_color(Rgb8::white(), 1.0);
        c.set_bounds(0.0, 0.0, &clip);
        c.add_rect(0.0, 0.0, (MAX_ROW_WIDTH + 60) as f64, 1.0, &clip);
        match c.draw(&mut surf) {
            Err(RasterError::CapacityExceeded { cap, .. }) => {
                assert_eq!(cap, MAX_ROW_WIDTH)
            }
            other => panic!("expected capacity error, got {:?}", other),
        }
    }

    #[test]
    fn row_outside_surface_is_out_of_bounds() {
        // clip wider than the surface it is drawn against
        let clip = ClipRect::new(0, 0, 20, 20);
        let mut surf = Surface::new(4, 4);
        let mut c = SubPixelCollector::new();
        c.set_color(Rgb8::white(), 1.0);
        c.set_bounds(6.0, 6.0, &clip);
        c.add_rect(0.0, 6.0, 2.0, 1.0, &clip);
        assert!(matches!(
            c.draw(&mut surf),
            Err(RasterError::OutOfBounds { .. })
        ));
    }
}
