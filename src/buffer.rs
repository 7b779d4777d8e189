//! Destination pixel surface

use crate::color::Rgb8;

/// Destination surface the collector blends into
///
/// Data is stored as packed RGB24 in row-major order (C-format)
#[derive(Debug, Default)]
pub struct Surface {
    /// Pixel component data
    pub data: Vec<u8>,
    /// Width in pixels
    pub width: usize,
    /// Height in pixels
    pub height: usize,
}

impl Surface {
    /// Create a new surface of width x height, cleared to black
    pub fn new(width: usize, height: usize) -> Self {
        Surface {
            width,
            height,
            data: vec![0u8; width * height * 3],
        }
    }
    /// Size of the underlying buffer in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// Read the color at (`x`,`y`)
    pub fn get(&self, x: usize, y: usize) -> Rgb8 {
        debug_assert!(x < self.width && y < self.height);
        let i = (y * self.width + x) * 3;
        Rgb8::new(self.data[i], self.data[i + 1], self.data[i + 2])
    }
    /// Write the color at (`x`,`y`)
    pub fn set(&mut self, x: usize, y: usize, c: Rgb8) {
        debug_assert!(x < self.width && y < self.height);
        let i = (y * self.width + x) * 3;
        self.data[i] = c.r;
        self.data[i + 1] = c.g;
        self.data[i + 2] = c.b;
    }
    /// Fill the whole surface with one color
    pub fn fill(&mut self, c: Rgb8) {
        for px in self.data.chunks_mut(3) {
            px[0] = c.r;
            px[1] = c.g;
            px[2] = c.b;
        }
    }
}
