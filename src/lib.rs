//! Anti-aliased rasterization of polygons, thick poly-lines and thin
//! segments into pixel coverage.
//!
//! How drawing works:
//!
//! ```text
//! canvas = Canvas::new(w, h)
//!
//! fill_polygon(verts, color, alpha)
//!   fill_into()                    -- Heckbert concave scan conversion
//!     insert_edge / delete_edge    -- active edge list per scanline
//!     collector.add_rect()         -- one span rect per scanline pair
//!   collector.draw()               -- weight splat + blend per row
//!
//! draw_fat_polyline(verts, color, radius, alpha)
//!   stroke_outline()               -- caps + joins -> closed polygon
//!   fill_into()                    -- same path as fill_polygon
//!
//! draw_line(x1, y1, x2, y2, color, alpha)
//!   line_into()                    -- unit squares along the major axis
//!   collector.draw()
//! ```
//!
//! Coverage is accumulated per row as weighted horizontal chunks and
//! blended once per draw call with straight (non-premultiplied) alpha.
//!
//! # Example
//!
//! ```
//! use scanfill::{Canvas, Point2, Rgb8};
//!
//! let mut canvas = Canvas::new(100, 100);
//! let tri = [
//!     Point2::new(10.0, 10.0),
//!     Point2::new(90.0, 40.0),
//!     Point2::new(30.0, 90.0),
//! ];
//! canvas.fill_polygon(&tri, Rgb8::new(200, 30, 30), 1.0).unwrap();
//! canvas.draw_fat_line(10.0, 80.0, 90.0, 80.0, Rgb8::white(), 3.0, 0.8).unwrap();
//! ```

pub mod buffer;
pub mod canvas;
pub mod clip;
pub mod collector;
pub mod color;
pub mod error;
pub mod fill;
pub mod line;
pub mod math;
pub mod ppm;
pub mod stroke;

pub use crate::buffer::Surface;
pub use crate::canvas::Canvas;
pub use crate::clip::ClipRect;
pub use crate::collector::{SubPixelCollector, MAX_ROW_WIDTH};
pub use crate::color::Rgb8;
pub use crate::error::{RasterError, RasterResult};
pub use crate::math::Point2;
pub use crate::stroke::{stroke_outline, MAX_JOIN_POINTS};
