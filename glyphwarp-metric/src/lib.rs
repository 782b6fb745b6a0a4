//! Blur-tolerant visual distance between rendered glyphs.
//!
//! Two rasters are compared by mean structural similarity (SSIM). By
//! default both are first smoothed with a Gaussian (σ = 1.5), which makes
//! the score tolerant of one-pixel shifts and small thickness changes.
//! The distance is `1 - similarity`, clamped into `[0, 1]`.

pub mod error;
pub mod field;
pub mod ssim;

use glyphwarp_graphics::Raster;
use log::warn;

pub use error::MetricError;
pub use field::{Field, gaussian_blur};
pub use ssim::{WINDOW, ssim};

/// Blur applied before comparison unless configured otherwise.
pub const DEFAULT_SIGMA: f64 = 1.5;

/// How two rasters are compared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricOptions {
    /// Gaussian σ applied to both images (values scaled to `[0, 1]`), or
    /// `None` to compare raw byte values.
    pub blur_sigma: Option<f64>,
}

impl MetricOptions {
    /// Raw comparison on 0..=255 values, as used for letter-to-letter
    /// similarity tables.
    pub const PLAIN: Self = Self { blur_sigma: None };
}

impl Default for MetricOptions {
    fn default() -> Self {
        Self {
            blur_sigma: Some(DEFAULT_SIGMA),
        }
    }
}

/// Mean SSIM of `a` and `b`.
///
/// The data range is `max - min` taken over both (prepared) images
/// together; an all-constant pair uses a range of 1.
///
/// # Errors
///
/// [`MetricError::ShapeMismatch`] if the dimensions differ and
/// [`MetricError::TooSmall`] if either side is below [`WINDOW`].
pub fn similarity(a: &Raster, b: &Raster, options: &MetricOptions) -> Result<f64, MetricError> {
    if a.dims() != b.dims() {
        return Err(MetricError::ShapeMismatch {
            left: a.dims(),
            right: b.dims(),
        });
    }
    let (width, height) = a.dims();
    if (width as usize) < WINDOW || (height as usize) < WINDOW {
        return Err(MetricError::TooSmall { width, height });
    }

    let (fa, fb) = match options.blur_sigma {
        Some(sigma) => (gaussian_blur(a, sigma), gaussian_blur(b, sigma)),
        None => (Field::from_raster(a, 1.0), Field::from_raster(b, 1.0)),
    };
    Ok(ssim(&fa, &fb, data_range(&fa, &fb)))
}

fn data_range(a: &Field, b: &Field) -> f64 {
    let (lo, hi) = match (a.min_max(), b.min_max()) {
        (Some((la, ha)), Some((lb, hb))) => (la.min(lb), ha.max(hb)),
        _ => return 1.0,
    };
    let range = hi - lo;
    if range == 0.0 { 1.0 } else { range }
}

/// Blurred distance in `[0, 1]`: 0 for visually identical glyphs.
///
/// # Errors
///
/// As [`similarity`].
pub fn try_distance(a: &Raster, b: &Raster) -> Result<f64, MetricError> {
    let sim = similarity(a, b, &MetricOptions::default())?;
    Ok((1.0 - sim).clamp(0.0, 1.0))
}

/// Blurred distance in `[0, 1]`.
///
/// Rasters that cannot be compared (different sizes, or smaller than the
/// window) score a neutral 0 and a warning is logged. Use
/// [`try_distance`] to tell that case apart from a genuine match.
#[must_use]
pub fn distance(a: &Raster, b: &Raster) -> f64 {
    match try_distance(a, b) {
        Ok(d) => d,
        Err(e) => {
            warn!("distance defaults to 0: {e}");
            0.0
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
