//! Drawing context
//!
//! `Canvas` owns the destination surface, the clip rectangle and the
//! coverage collector, and exposes the public drawing operations. All
//! drawing funnels through the same pipeline: geometry is expanded to
//! spans, spans are collected as fractional coverage, and coverage is
//! blended once per draw call.

use crate::buffer::Surface;
use crate::clip::ClipRect;
use crate::collector::SubPixelCollector;
use crate::color::Rgb8;
use crate::error::{RasterError, RasterResult};
use crate::fill::fill_into;
use crate::line::line_into;
use crate::math::Point2;
use crate::ppm;
use crate::stroke::stroke_outline;

/// A pixel surface with a clip region and the rasterization state needed
/// to draw into it
#[derive(Debug, Default)]
pub struct Canvas {
    surf: Surface,
    clip: ClipRect,
    collector: SubPixelCollector,
}

impl Canvas {
    /// Create a canvas of `width` x `height` black pixels, with the clip
    /// region covering the whole surface
    pub fn new(width: usize, height: usize) -> Self {
        let surf = Surface::new(width, height);
        let clip = ClipRect::of_surface(&surf);
        Canvas {
            surf,
            clip,
            collector: SubPixelCollector::new(),
        }
    }
    /// The destination surface
    pub fn surface(&self) -> &Surface {
        &self.surf
    }
    /// The active clip region
    pub fn clip(&self) -> ClipRect {
        self.clip
    }
    /// Restrict the clip region
    ///
    /// The given bounds are intersected with the surface bounds, so the
    /// clip region can never extend past valid pixels.
    pub fn set_clip(&mut self, x1: i64, y1: i64, x2: i64, y2: i64) {
        self.clip = ClipRect::of_surface(&self.surf).intersect(&ClipRect::new(x1, y1, x2, y2));
    }
    /// Reset the clip region to the whole surface
    pub fn reset_clip(&mut self) {
        self.clip = ClipRect::of_surface(&self.surf);
    }
    /// Fill the whole surface with one color, ignoring the clip region
    pub fn clear(&mut self, c: Rgb8) {
        self.surf.fill(c);
    }

    /// Fill a polygon with `color` at `alpha`
    ///
    /// The vertex list is treated as a closed loop and may be concave or
    /// self-intersecting; inside/outside follows crossing parity.
    pub fn fill_polygon(&mut self, pts: &[Point2], color: Rgb8, alpha: f64) -> RasterResult {
        fill_into(
            &mut self.collector,
            &mut self.surf,
            &self.clip,
            pts,
            color,
            alpha,
        )
    }

    /// Stroke a thick poly-line of half-width `radius` with round caps
    /// and joins
    pub fn draw_fat_polyline(
        &mut self,
        pts: &[Point2],
        color: Rgb8,
        radius: f64,
        alpha: f64,
    ) -> RasterResult {
        if pts.len() < 2 {
            return Err(RasterError::InvalidGeometry { verts: pts.len() });
        }
        let outline = stroke_outline(pts, radius)?;
        if outline.is_empty() {
            return Ok(()); // centerline collapsed to a single point
        }
        fill_into(
            &mut self.collector,
            &mut self.surf,
            &self.clip,
            &outline,
            color,
            alpha,
        )
    }

    /// Stroke a single thick segment; round caps included
    pub fn draw_fat_line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Rgb8,
        radius: f64,
        alpha: f64,
    ) -> RasterResult {
        let ends = [Point2::new(x1, y1), Point2::new(x2, y2)];
        self.draw_fat_polyline(&ends, color, radius, alpha)
    }

    /// Draw a thin (1 pixel) line segment
    ///
    /// Returns whether any part of the segment intersected the clip
    /// region.
    pub fn draw_line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Rgb8,
        alpha: f64,
    ) -> RasterResult<bool> {
        line_into(
            &mut self.collector,
            &mut self.surf,
            &self.clip,
            Point2::new(x1, y1),
            Point2::new(x2, y2),
            color,
            alpha,
        )
    }

    /// Draw a thin poly-line as independent segments
    ///
    /// Each segment is drawn on its own; there is no join or cap
    /// geometry here, use [`draw_fat_polyline`] for stroked lines.
    ///
    /// [`draw_fat_polyline`]: #method.draw_fat_polyline
    pub fn draw_polyline(&mut self, pts: &[Point2], color: Rgb8) -> RasterResult {
        for seg in pts.windows(2) {
            self.draw_line(seg[0].x, seg[0].y, seg[1].x, seg[1].y, color, 1.0)?;
        }
        Ok(())
    }

    /// Write the surface to an image file
    pub fn to_file<P: AsRef<std::path::Path>>(&self, filename: P) -> Result<(), std::io::Error> {
        ppm::write_file(&self.surf.data, self.surf.width, self.surf.height, filename)
    }
}
