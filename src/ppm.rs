//! Reading and writing of surface images
//!
//! Thin wrappers over the `image` crate used by [`Canvas::to_file`] and
//! the integration tests.
//!
//! [`Canvas::to_file`]: ../canvas/struct.Canvas.html#method.to_file

use std::path::Path;

/// Read an image file into a packed RGB24 buffer plus dimensions
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<(Vec<u8>, usize, usize), image::ImageError> {
    let img = image::open(filename)?.to_rgb();
    let (w, h) = img.dimensions();
    Ok((img.into_raw(), w as usize, h as usize))
}

/// Write a packed RGB24 buffer to an image file
///
/// The format is chosen from the file extension.
pub fn write_file<P: AsRef<Path>>(
    buf: &[u8],
    width: usize,
    height: usize,
    filename: P,
) -> Result<(), std::io::Error> {
    image::save_buffer(filename, buf, width as u32, height as u32, image::RGB(8))
}
