//! Mean structural similarity over a sliding 7×7 window.
//!
//! Local means and variances come from a uniform 7×7 filter with mirrored
//! borders; variances use the sample (n - 1) normalisation. The similarity
//! map is averaged over the interior, skipping a 3-pixel border where the
//! window would hang off the image.

use crate::field::{Edge, Field, separable};

/// Side of the comparison window.
pub const WINDOW: usize = 7;
const K1: f64 = 0.01;
const K2: f64 = 0.03;

/// Mean SSIM of two equal-sized fields.
///
/// Callers check the sizes; both fields must be at least [`WINDOW`] on
/// each side. The result is exactly 1 for identical inputs and exactly
/// symmetric in its arguments.
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    reason = "window and pixel counts are small"
)]
#[allow(
    clippy::suboptimal_flops,
    reason = "plain arithmetic keeps the result symmetric in x and y"
)]
pub fn ssim(x: &Field, y: &Field, data_range: f64) -> f64 {
    let taps = vec![1.0 / WINDOW as f64; WINDOW];
    let mean = |f: &Field| separable(f, &taps, Edge::Reflect);

    let ux = mean(x);
    let uy = mean(y);
    let uxx = mean(&x.product(x));
    let uyy = mean(&y.product(y));
    let uxy = mean(&x.product(y));

    let np = (WINDOW * WINDOW) as f64;
    let cov_norm = np / (np - 1.0);
    let c1 = (K1 * data_range).powi(2);
    let c2 = (K2 * data_range).powi(2);

    let (w, h) = (x.width(), x.height());
    let pad = (WINDOW - 1) / 2;
    let mut total = 0.0;
    let mut count = 0_usize;
    for row in pad..h - pad {
        for col in pad..w - pad {
            let i = row * w + col;
            let (mx, my) = (ux.values()[i], uy.values()[i]);
            let vx = cov_norm * (uxx.values()[i] - mx * mx);
            let vy = cov_norm * (uyy.values()[i] - my * my);
            let vxy = cov_norm * (uxy.values()[i] - mx * my);

            let a1 = 2.0 * (mx * my) + c1;
            let a2 = 2.0 * vxy + c2;
            let b1 = mx * mx + my * my + c1;
            let b2 = vx + vy + c2;
            total += (a1 * a2) / (b1 * b2);
            count += 1;
        }
    }
    total / count as f64
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
