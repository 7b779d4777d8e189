//! Colors

/// Color as Red, Green, Blue
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Rgb8 {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

impl Rgb8 {
    /// Create new color
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb8 { r, g, b }
    }
    /// White Color (255,255,255)
    pub fn white() -> Self {
        Self::new(255, 255, 255)
    }
    /// Black Color (0,0,0)
    pub fn black() -> Self {
        Self::new(0, 0, 0)
    }
    /// Gray of a single level
    pub fn gray(g: u8) -> Self {
        Self::new(g, g, g)
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from(v: [u8; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}
