//! Core types shared across the glyph pipeline.
//!
//! Coordinates live in image space: x grows to the right, y grows
//! **downward**, and a pixel `(x, y)` has its centre at the integer point
//! `(x, y)`. Letter geometry is authored on a logical
//! [`LOGICAL_SIZE`] × [`LOGICAL_SIZE`] grid and scaled to the target canvas
//! at draw time.

pub use kurbo::{Point, Vec2};

// ---------------------------------------------------------------------------
// Scalar
// ---------------------------------------------------------------------------

/// Convenience alias for all geometric quantities.
pub type Scalar = f64;

/// Tolerance for floating-point comparisons.
pub const EPSILON: Scalar = 1.0 / 65536.0;

/// Values below this are treated as zero (degenerate transforms, lengths).
pub const NEAR_ZERO: Scalar = 1e-12;

/// Side length of the logical grid every letter is constructed on.
pub const LOGICAL_SIZE: u32 = 200;

/// Foreground intensity of a lit pixel.
pub const INK: u8 = 255;

// ---------------------------------------------------------------------------
// Transform (6-component affine)
// ---------------------------------------------------------------------------

/// An affine transform with named components.
///
/// Maps point (x, y) to:
///   (tx + txx*x + txy*y, ty + tyx*x + tyy*y)
///
/// Because y points down, a positive rotation turns clockwise on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub tx: Scalar,
    pub ty: Scalar,
    pub txx: Scalar,
    pub txy: Scalar,
    pub tyx: Scalar,
    pub tyy: Scalar,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        tx: 0.0,
        ty: 0.0,
        txx: 1.0,
        txy: 0.0,
        tyx: 0.0,
        tyy: 1.0,
    };

    /// Apply this transform to a point.
    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.txy.mul_add(p.y, self.txx.mul_add(p.x, self.tx)),
            self.tyy.mul_add(p.y, self.tyx.mul_add(p.x, self.ty)),
        )
    }

    /// Compose: `self` applied first, then `next`.
    #[must_use]
    pub fn then(&self, next: &Self) -> Self {
        Self {
            txx: next.txx.mul_add(self.txx, next.txy * self.tyx),
            txy: next.txx.mul_add(self.txy, next.txy * self.tyy),
            tyx: next.tyx.mul_add(self.txx, next.tyy * self.tyx),
            tyy: next.tyx.mul_add(self.txy, next.tyy * self.tyy),
            tx: next.txx.mul_add(self.tx, next.txy.mul_add(self.ty, next.tx)),
            ty: next.tyx.mul_add(self.tx, next.tyy.mul_add(self.ty, next.ty)),
        }
    }

    /// Length of the longest image of a unit basis vector.
    ///
    /// Used as a conservative radius when sampling a transformed unit
    /// circle.
    #[must_use]
    pub fn reach(&self) -> Scalar {
        self.txx.hypot(self.tyx).max(self.txy.hypot(self.tyy))
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
