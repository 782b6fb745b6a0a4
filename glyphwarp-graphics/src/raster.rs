//! Immutable single-channel rasters.
//!
//! A [`Raster`] is the snapshot type handed out by the canvas and produced
//! by dilation: a row-major grid of `u8` intensities where 0 is background
//! and [`INK`](crate::types::INK) is foreground.

use crate::error::GraphicsError;
use crate::types::{Point, Scalar};

// ---------------------------------------------------------------------------
// Raster
// ---------------------------------------------------------------------------

/// A fixed-size grid of byte intensities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Raster {
    /// Create a zero-filled raster.
    ///
    /// # Errors
    ///
    /// Returns [`GraphicsError::InvalidDimensions`] if either side is zero.
    pub fn new(width: u32, height: u32) -> Result<Self, GraphicsError> {
        if width == 0 || height == 0 {
            return Err(GraphicsError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            data: vec![0; width as usize * height as usize],
        })
    }

    /// Wrap an existing row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`GraphicsError::InvalidDimensions`] for a zero side and
    /// [`GraphicsError::BufferSize`] if `data` has the wrong length.
    pub fn from_vec(width: u32, height: u32, data: Vec<u8>) -> Result<Self, GraphicsError> {
        if width == 0 || height == 0 {
            return Err(GraphicsError::InvalidDimensions { width, height });
        }
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(GraphicsError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`; two rasters are comparable only if these match.
    #[inline]
    pub const fn dims(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Row-major pixel data.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.data
    }

    /// Consume the raster, returning its pixel buffer.
    #[must_use]
    pub fn into_pixels(self) -> Vec<u8> {
        self.data
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Pixel value at `(x, y)`, or `None` outside the raster.
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y as usize * self.width as usize + x as usize])
    }

    /// One row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if `y` is out of range.
    #[must_use]
    pub fn row(&self, y: u32) -> &[u8] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.data[start..start + w]
    }

    /// Number of non-zero pixels.
    #[must_use]
    pub fn count_foreground(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }

    /// `true` if every pixel is 0 or `ink`.
    #[must_use]
    pub fn is_binary(&self, ink: u8) -> bool {
        self.data.iter().all(|&v| v == 0 || v == ink)
    }

    /// Bounds of the non-zero pixels (pixel centres, inclusive).
    #[must_use]
    pub fn foreground_bounds(&self) -> BoundingBox {
        let mut bb = BoundingBox::EMPTY;
        let w = self.width as usize;
        for (i, &v) in self.data.iter().enumerate() {
            if v != 0 {
                #[expect(clippy::cast_precision_loss, reason = "raster sides fit in f64")]
                let p = Point::new((i % w) as Scalar, (i / w) as Scalar);
                bb.include_point(p);
            }
        }
        bb
    }
}

// ---------------------------------------------------------------------------
// BoundingBox
// ---------------------------------------------------------------------------

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: Scalar,
    pub min_y: Scalar,
    pub max_x: Scalar,
    pub max_y: Scalar,
}

impl BoundingBox {
    /// An empty (inverted) bounding box.
    pub const EMPTY: Self = Self {
        min_x: Scalar::INFINITY,
        min_y: Scalar::INFINITY,
        max_x: Scalar::NEG_INFINITY,
        max_y: Scalar::NEG_INFINITY,
    };

    /// Check if this bounding box is valid (non-empty).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }

    /// Width.
    #[must_use]
    pub fn width(&self) -> Scalar {
        if self.is_valid() {
            self.max_x - self.min_x
        } else {
            0.0
        }
    }

    /// Height.
    #[must_use]
    pub fn height(&self) -> Scalar {
        if self.is_valid() {
            self.max_y - self.min_y
        } else {
            0.0
        }
    }

    /// Expand to include a point.
    pub const fn include_point(&mut self, p: Point) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }

    /// `true` if the box lies inside `[lo, hi]` on both axes.
    #[must_use]
    pub fn within(&self, lo: Scalar, hi: Scalar) -> bool {
        self.is_valid() && self.min_x >= lo && self.min_y >= lo && self.max_x <= hi && self.max_y <= hi
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::EMPTY
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
