use std::fmt;

/// Errors returned by the similarity metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricError {
    /// The two images do not have the same dimensions.
    ShapeMismatch {
        left: (u32, u32),
        right: (u32, u32),
    },
    /// An image is smaller than the 7×7 comparison window.
    TooSmall { width: u32, height: u32 },
}

impl fmt::Display for MetricError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch { left, right } => write!(
                f,
                "cannot compare {}x{} image with {}x{} image",
                left.0, left.1, right.0, right.1
            ),
            Self::TooSmall { width, height } => {
                write!(f, "image {width}x{height} is smaller than the 7x7 window")
            }
        }
    }
}

impl std::error::Error for MetricError {}
