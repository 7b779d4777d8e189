//! Rasterization errors

use std::fmt;

/// The rasterizer's result type
pub type RasterResult<T = ()> = Result<T, RasterError>;

/// An error that can happen while rasterizing geometry
///
/// Each variant corresponds to a precondition or capacity check; nothing
/// is retried internally and the draw that failed leaves no further side
/// effects past its detection point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RasterError {
    /// Too few vertices to form a drawable shape
    InvalidGeometry {
        /// Number of vertices supplied
        verts: usize,
    },
    /// A preallocated working buffer would overflow
    CapacityExceeded {
        /// Required size
        needed: usize,
        /// Configured maximum
        cap: usize,
    },
    /// A computed row or pixel index fell outside the surface at blend time
    OutOfBounds {
        /// Offending x coordinate
        x: i64,
        /// Offending y coordinate
        y: i64,
    },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::InvalidGeometry { verts } => {
                write!(f, "not enough vertices: {}", verts)
            }
            RasterError::CapacityExceeded { needed, cap } => {
                write!(f, "capacity exceeded: {} > {}", needed, cap)
            }
            RasterError::OutOfBounds { x, y } => {
                write!(f, "pixel index out of bounds: ({},{})", x, y)
            }
        }
    }
}

impl std::error::Error for RasterError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let e = RasterError::InvalidGeometry { verts: 1 };
        assert_eq!(e.to_string(), "not enough vertices: 1");
        let e = RasterError::CapacityExceeded { needed: 2000, cap: 1024 };
        assert_eq!(e.to_string(), "capacity exceeded: 2000 > 1024");
    }
}
