//! Real-valued images and Gaussian smoothing.

use glyphwarp_graphics::Raster;

/// A row-major grid of `f64` samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl Field {
    /// Copy a raster, dividing every byte by `divisor`.
    #[must_use]
    pub fn from_raster(raster: &Raster, divisor: f64) -> Self {
        let (w, h) = raster.dims();
        Self {
            width: w as usize,
            height: h as usize,
            data: raster
                .pixels()
                .iter()
                .map(|&v| f64::from(v) / divisor)
                .collect(),
        }
    }

    pub(crate) const fn from_parts(width: usize, height: usize, data: Vec<f64>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.data
    }

    /// Smallest and largest sample, or `None` for an empty field.
    #[must_use]
    pub fn min_max(&self) -> Option<(f64, f64)> {
        self.data.iter().fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }

    /// Element-wise product with another field of the same size.
    pub(crate) fn product(&self, other: &Self) -> Self {
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a * b)
            .collect();
        Self::from_parts(self.width, self.height, data)
    }
}

// ---------------------------------------------------------------------------
// Separable filtering
// ---------------------------------------------------------------------------

/// How samples beyond the edge are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Edge {
    /// Repeat the edge sample: `a a | a b c`.
    Nearest,
    /// Mirror about the edge: `b a | a b c`.
    Reflect,
}

impl Edge {
    /// Map a possibly out-of-range index into `0..len`.
    #[expect(
        clippy::cast_possible_wrap,
        clippy::cast_sign_loss,
        reason = "image sides are far below isize::MAX and the result is in range"
    )]
    fn index(self, i: isize, len: usize) -> usize {
        let n = len as isize;
        let j = match self {
            Self::Nearest => i.clamp(0, n - 1),
            Self::Reflect => {
                // The mirrored sequence repeats every 2n samples.
                let period = 2 * n;
                let k = i.rem_euclid(period);
                if k < n { k } else { period - 1 - k }
            }
        };
        j as usize
    }
}

/// Correlate `field` with `kernel` along rows, then along columns.
///
/// `kernel` has odd length and is centred on its middle tap.
#[expect(clippy::cast_possible_wrap, reason = "image sides are far below isize::MAX")]
pub(crate) fn separable(field: &Field, kernel: &[f64], edge: Edge) -> Field {
    let (w, h) = (field.width, field.height);
    let radius = (kernel.len() / 2) as isize;

    let mut rows = vec![0.0; w * h];
    for y in 0..h {
        let src = &field.data[y * w..(y + 1) * w];
        for x in 0..w {
            let mut acc = 0.0;
            for (k, &weight) in kernel.iter().enumerate() {
                let i = x as isize + k as isize - radius;
                acc += weight * src[edge.index(i, w)];
            }
            rows[y * w + x] = acc;
        }
    }

    let mut out = vec![0.0; w * h];
    for y in 0..h {
        for x in 0..w {
            let mut acc = 0.0;
            for (k, &weight) in kernel.iter().enumerate() {
                let j = y as isize + k as isize - radius;
                acc += weight * rows[edge.index(j, h) * w + x];
            }
            out[y * w + x] = acc;
        }
    }
    Field::from_parts(w, h, out)
}

// ---------------------------------------------------------------------------
// Gaussian blur
// ---------------------------------------------------------------------------

/// Kernel half-width in standard deviations.
const TRUNCATE: f64 = 4.0;

/// Normalised 1-D Gaussian taps for `sigma`, radius `trunc(4 sigma + 0.5)`.
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    reason = "sigma is a small positive blur radius"
)]
pub fn gaussian_kernel(sigma: f64) -> Vec<f64> {
    let radius = TRUNCATE.mul_add(sigma, 0.5).max(0.0) as usize;
    let denom = -0.5 / (sigma * sigma);
    let raw: Vec<f64> = (0..=2 * radius)
        .map(|i| {
            let x = i as f64 - radius as f64;
            (denom * x * x).exp()
        })
        .collect();
    let sum: f64 = raw.iter().sum();
    raw.into_iter().map(|v| v / sum).collect()
}

/// Blur a raster with an isotropic Gaussian.
///
/// Bytes are scaled to `[0, 1]` first; samples past the border repeat the
/// edge pixel. A non-positive or non-finite `sigma` leaves the image
/// unblurred.
#[must_use]
pub fn gaussian_blur(raster: &Raster, sigma: f64) -> Field {
    let field = Field::from_raster(raster, 255.0);
    if !(sigma.is_finite() && sigma > 0.0) {
        return field;
    }
    separable(&field, &gaussian_kernel(sigma), Edge::Nearest)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn kernel_radius_and_normalisation() {
        let k = gaussian_kernel(1.5);
        assert_eq!(k.len(), 13);
        assert!((k.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        assert_eq!(k[0], k[12]);
        assert!(k[6] > k[5]);
    }

    #[test]
    fn edge_indexing() {
        assert_eq!(Edge::Nearest.index(-3, 5), 0);
        assert_eq!(Edge::Nearest.index(7, 5), 4);
        assert_eq!(Edge::Reflect.index(-1, 5), 0);
        assert_eq!(Edge::Reflect.index(-2, 5), 1);
        assert_eq!(Edge::Reflect.index(5, 5), 4);
        assert_eq!(Edge::Reflect.index(6, 5), 3);
        assert_eq!(Edge::Reflect.index(2, 5), 2);
    }

    #[test]
    fn blur_preserves_constant_images() {
        let r = Raster::from_vec(10, 10, vec![255; 100]).unwrap();
        let f = gaussian_blur(&r, 1.5);
        assert!(f.values().iter().all(|v| (v - 1.0).abs() < 1e-12));
    }

    #[test]
    fn blur_spreads_a_dot() {
        let mut data = vec![0; 400];
        data[10 * 20 + 10] = 255;
        let r = Raster::from_vec(20, 20, data).unwrap();
        let f = gaussian_blur(&r, 1.5);
        let total: f64 = f.values().iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
        let (lo, hi) = f.min_max().unwrap();
        assert_eq!(lo, 0.0);
        assert!(hi < 0.1);
    }

    #[test]
    fn zero_sigma_only_rescales() {
        let r = Raster::from_vec(2, 1, vec![0, 255]).unwrap();
        assert_eq!(gaussian_blur(&r, 0.0).values(), &[0.0, 1.0]);
    }
}
