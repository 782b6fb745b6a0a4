use std::fmt;

/// Errors returned by raster and morphology operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphicsError {
    /// A canvas or raster was requested with a zero dimension.
    InvalidDimensions { width: u32, height: u32 },
    /// A pixel buffer does not hold `width * height` bytes.
    BufferSize { expected: usize, actual: usize },
    /// Dilation was asked for a structuring element smaller than 1×1.
    InvalidThickness(i32),
}

impl fmt::Display for GraphicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid raster dimensions {width}x{height}")
            }
            Self::BufferSize { expected, actual } => {
                write!(f, "pixel buffer holds {actual} bytes, expected {expected}")
            }
            Self::InvalidThickness(t) => {
                write!(f, "invalid dilation thickness {t}: must be at least 1")
            }
        }
    }
}

impl std::error::Error for GraphicsError {}
