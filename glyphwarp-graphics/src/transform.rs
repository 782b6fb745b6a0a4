//! Affine transform constructors and the [`Transformable`] trait.
//!
//! Primitives:
//! - [`shifted`]: translate
//! - [`rotated`]: rotate by degrees (clockwise on screen, y points down)
//! - [`rotated_about`]: rotate by degrees around a pivot
//! - [`xscaled`], [`yscaled`]: axis scaling
//! - [`ellipse`]: map the unit circle onto a rotated ellipse
//!
//! Letter geometry mostly works point by point, but skeletons are also
//! [`Transformable`] so a whole glyph can be moved onto a canvas of a
//! different size.

use crate::types::{Point, Scalar, Transform, Vec2};

// ---------------------------------------------------------------------------
// Transformable trait
// ---------------------------------------------------------------------------

/// A type that can be transformed by an affine [`Transform`].
pub trait Transformable {
    /// Apply a transform, returning the transformed value.
    #[must_use]
    fn transformed(&self, t: &Transform) -> Self;
}

impl Transformable for Point {
    #[inline]
    fn transformed(&self, t: &Transform) -> Self {
        t.apply(*self)
    }
}

impl Transformable for Vec2 {
    /// Transform a vector (direction). Translation is ignored; only the
    /// linear part of the affine is applied.
    #[inline]
    fn transformed(&self, t: &Transform) -> Self {
        Self::new(
            t.txx.mul_add(self.x, t.txy * self.y),
            t.tyx.mul_add(self.x, t.tyy * self.y),
        )
    }
}

impl Transformable for Transform {
    /// Compose: `self` applied first, then `t`.
    #[inline]
    fn transformed(&self, t: &Transform) -> Self {
        self.then(t)
    }
}

// ---------------------------------------------------------------------------
// Standard transform constructors
// ---------------------------------------------------------------------------

/// Create a translation transform.
#[must_use]
pub const fn shifted(dx: Scalar, dy: Scalar) -> Transform {
    Transform {
        tx: dx,
        ty: dy,
        ..Transform::IDENTITY
    }
}

/// Create a rotation transform (angle in degrees).
#[must_use]
pub fn rotated(degrees: Scalar) -> Transform {
    let rad = degrees.to_radians();
    let c = rad.cos();
    let s = rad.sin();
    Transform {
        tx: 0.0,
        ty: 0.0,
        txx: c,
        txy: -s,
        tyx: s,
        tyy: c,
    }
}

/// Rotate by `degrees` around `pivot`.
#[must_use]
pub fn rotated_about(pivot: Point, degrees: Scalar) -> Transform {
    shifted(-pivot.x, -pivot.y)
        .then(&rotated(degrees))
        .then(&shifted(pivot.x, pivot.y))
}

/// Create an x-only scaling transform.
#[must_use]
pub const fn xscaled(factor: Scalar) -> Transform {
    Transform {
        txx: factor,
        ..Transform::IDENTITY
    }
}

/// Create a y-only scaling transform.
#[must_use]
pub const fn yscaled(factor: Scalar) -> Transform {
    Transform {
        tyy: factor,
        ..Transform::IDENTITY
    }
}

/// The transform that maps the unit circle onto an ellipse.
///
/// The ellipse has semi-axes `axes` (before rotation), is rotated by
/// `rotation_deg` and centred on `center`. Parameter angle `t` on the unit
/// circle lands on `center + R(rotation) * (axes.x cos t, axes.y sin t)`.
#[must_use]
pub fn ellipse(center: Point, axes: Vec2, rotation_deg: Scalar) -> Transform {
    xscaled(axes.x)
        .then(&yscaled(axes.y))
        .then(&rotated(rotation_deg))
        .then(&shifted(center.x, center.y))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
