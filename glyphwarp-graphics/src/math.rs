//! Small numeric helpers shared by the geometry and the samplers.

use crate::types::Scalar;

/// Linear interpolation between `a` and `b` at `t` (`t = 0` gives `a`).
#[inline]
pub fn lerp(a: Scalar, b: Scalar, t: Scalar) -> Scalar {
    (b - a).mul_add(t, a)
}

/// Uniform random deviate in [0, x).
///
/// Uses a simple xorshift for reproducibility. The `seed` is mutated; a
/// zero seed is replaced by a fixed non-zero constant since xorshift would
/// otherwise stay at zero forever.
pub fn uniform_deviate(x: Scalar, seed: &mut u64) -> Scalar {
    if *seed == 0 {
        *seed = 0x9E37_79B9_7F4A_7C15;
    }
    *seed ^= *seed << 13;
    *seed ^= *seed >> 7;
    *seed ^= *seed << 17;
    #[expect(clippy::cast_precision_loss, reason = "53 bits of the seed are plenty")]
    let frac = ((*seed >> 11) as Scalar) / ((1_u64 << 53) as Scalar);
    frac * x
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
