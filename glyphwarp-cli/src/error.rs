use std::fmt;
use std::io;
use std::path::PathBuf;

use glyphwarp_core::{CoreError, SchemaError};
use glyphwarp_graphics::GraphicsError;
use glyphwarp_metric::MetricError;

/// Anything that stops a subcommand.
#[derive(Debug)]
pub enum CliError {
    Core(CoreError),
    Schema(SchemaError),
    Metric(MetricError),
    Graphics(GraphicsError),
    Image {
        path: PathBuf,
        source: image::ImageError,
    },
    Io {
        path: PathBuf,
        source: io::Error,
    },
    /// An output image could not be assembled from raster bytes.
    Encode(PathBuf),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Core(e) => write!(f, "{e}"),
            Self::Schema(e) => write!(f, "{e}"),
            Self::Metric(e) => write!(f, "{e}"),
            Self::Graphics(e) => write!(f, "{e}"),
            Self::Image { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Encode(path) => write!(f, "{}: raster does not fit an 8-bit image", path.display()),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Core(e) => Some(e),
            Self::Schema(e) => Some(e),
            Self::Metric(e) => Some(e),
            Self::Graphics(e) => Some(e),
            Self::Image { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            Self::Encode(_) => None,
        }
    }
}

impl From<CoreError> for CliError {
    fn from(e: CoreError) -> Self {
        Self::Core(e)
    }
}

impl From<SchemaError> for CliError {
    fn from(e: SchemaError) -> Self {
        Self::Schema(e)
    }
}

impl From<MetricError> for CliError {
    fn from(e: MetricError) -> Self {
        Self::Metric(e)
    }
}

impl From<GraphicsError> for CliError {
    fn from(e: GraphicsError) -> Self {
        Self::Graphics(e)
    }
}
