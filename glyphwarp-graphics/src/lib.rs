//! Raster surface, skeleton strokes and morphology for glyph rendering.

pub mod types;

pub mod canvas;
pub mod error;
pub mod math;
pub mod morphology;
pub mod raster;
pub mod skeleton;
pub mod transform;

pub use canvas::Canvas;
pub use error::GraphicsError;
pub use morphology::dilate;
pub use raster::{BoundingBox, Raster};
pub use skeleton::Skeleton;
