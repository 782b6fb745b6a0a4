//! Grayscale morphology.
//!
//! Only dilation by a square structuring element is needed: glyph weight is
//! applied after the skeleton is drawn. A `k x k` square is separable, so
//! the max filter runs as one horizontal pass followed by one vertical pass.

use crate::error::GraphicsError;
use crate::raster::Raster;

/// Dilate `raster` with a `thickness x thickness` square of ones.
///
/// The anchor sits at `thickness / 2`, so for even sizes the square reaches
/// one pixel further toward positive x and y than toward negative. Pixels
/// outside the raster do not contribute. `thickness == 1` returns an
/// identical raster.
///
/// # Errors
///
/// Returns [`GraphicsError::InvalidThickness`] if `thickness < 1`.
pub fn dilate(raster: &Raster, thickness: i32) -> Result<Raster, GraphicsError> {
    let Ok(k) = usize::try_from(thickness) else {
        return Err(GraphicsError::InvalidThickness(thickness));
    };
    if k == 0 {
        return Err(GraphicsError::InvalidThickness(thickness));
    }
    if k == 1 {
        return Ok(raster.clone());
    }

    let (width, height) = raster.dims();
    let (w, h) = (width as usize, height as usize);
    let before = k / 2;
    let after = k - 1 - before;
    let src = raster.pixels();

    let mut horizontal = vec![0_u8; src.len()];
    for y in 0..h {
        let row = &src[y * w..(y + 1) * w];
        let out = &mut horizontal[y * w..(y + 1) * w];
        for (x, slot) in out.iter_mut().enumerate() {
            let lo = x.saturating_sub(before);
            let hi = (x + after).min(w - 1);
            *slot = row[lo..=hi].iter().copied().max().unwrap_or(0);
        }
    }

    let mut out = vec![0_u8; src.len()];
    for y in 0..h {
        let lo = y.saturating_sub(before);
        let hi = (y + after).min(h - 1);
        for x in 0..w {
            out[y * w + x] = (lo..=hi).map(|yy| horizontal[yy * w + x]).max().unwrap_or(0);
        }
    }

    Raster::from_vec(width, height, out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn dot(size: u32, x: u32, y: u32) -> Raster {
        let mut data = vec![0; (size * size) as usize];
        data[(y * size + x) as usize] = 255;
        Raster::from_vec(size, size, data).unwrap()
    }

    #[test]
    fn rejects_non_positive_thickness() {
        let r = dot(5, 2, 2);
        assert_eq!(dilate(&r, 0), Err(GraphicsError::InvalidThickness(0)));
        assert_eq!(dilate(&r, -3), Err(GraphicsError::InvalidThickness(-3)));
    }

    #[test]
    fn thickness_one_is_identity() {
        let r = dot(5, 1, 3);
        assert_eq!(dilate(&r, 1).unwrap(), r);
    }

    #[test]
    fn odd_kernel_is_centred() {
        let out = dilate(&dot(7, 3, 3), 3).unwrap();
        assert_eq!(out.count_foreground(), 9);
        let bb = out.foreground_bounds();
        assert_eq!(
            (bb.min_x, bb.min_y, bb.max_x, bb.max_y),
            (2.0, 2.0, 4.0, 4.0)
        );
    }

    #[test]
    fn even_kernel_anchor() {
        // A single pixel grows into the square of every kernel placement
        // covering it: offsets -1..=2 around the anchor.
        let out = dilate(&dot(9, 4, 4), 4).unwrap();
        assert_eq!(out.count_foreground(), 16);
        let bb = out.foreground_bounds();
        assert_eq!(
            (bb.min_x, bb.min_y, bb.max_x, bb.max_y),
            (3.0, 3.0, 6.0, 6.0)
        );
    }

    #[test]
    fn clips_at_border() {
        let out = dilate(&dot(5, 0, 0), 3).unwrap();
        assert_eq!(out.count_foreground(), 4);
        assert!(out.is_binary(255));
    }

    #[test]
    fn monotone_in_thickness() {
        let r = dot(20, 10, 10);
        let mut prev = r.count_foreground();
        for k in 2..8 {
            let n = dilate(&r, k).unwrap().count_foreground();
            assert!(n >= prev);
            prev = n;
        }
    }
}
