//! Letter geometry.
//!
//! One module per glyph. Each exposes `skeleton(&Params) -> Skeleton`,
//! a pure function of its parameters that emits one-pixel strokes on the
//! logical 200-unit grid. Points are integral: offsets are truncated toward
//! zero, rotated points are rounded.
//!
//! The helpers here keep every letter on the same conventions:
//! [`clamp_coord`] for the inset, [`Shear`] for horizontal shear with a
//! per-letter falloff, [`rotate_about`] for point rotation and
//! [`arc_span`] for keeping arcs non-degenerate.

pub mod a;
pub mod b;
pub mod c;
pub mod f;
pub mod w;
pub mod x;

use glyphwarp_graphics::transform::{Transformable, rotated_about};
use glyphwarp_graphics::types::{NEAR_ZERO, Point, Scalar};

/// Smallest coordinate a clamped point may take.
pub const INSET_MIN: Scalar = 5.0;
/// Largest coordinate a clamped point may take.
pub const INSET_MAX: Scalar = 195.0;
/// Centre of the logical grid; rotations pivot here.
pub const CENTER: Point = Point::new(100.0, 100.0);
/// Narrowest arc a letter may draw, in degrees.
pub const MIN_ARC_SPAN: Scalar = 10.0;

/// Clamp one coordinate into the inset.
#[inline]
#[must_use]
pub const fn clamp_coord(v: Scalar) -> Scalar {
    v.clamp(INSET_MIN, INSET_MAX)
}

/// Clamp both coordinates of `p` into the inset.
#[must_use]
pub const fn clamp_point(p: Point) -> Point {
    Point::new(clamp_coord(p.x), clamp_coord(p.y))
}

// ---------------------------------------------------------------------------
// Shear
// ---------------------------------------------------------------------------

/// How the shear offset decays from the free end to the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Falloff {
    /// Offset proportional to the distance from the anchor.
    Linear,
    /// Offset proportional to the squared distance, so strokes bend
    /// sharply near the free end.
    Squared,
}

/// Horizontal shear anchored on a baseline.
///
/// A point at `anchor_y` does not move; a point `extent` units above it
/// moves by the full `amount`. The result is truncated and clamped into
/// the inset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shear {
    pub amount: Scalar,
    pub anchor_y: Scalar,
    pub extent: Scalar,
    pub falloff: Falloff,
}

impl Shear {
    #[must_use]
    pub fn apply(&self, x: Scalar, y: Scalar) -> Point {
        let factor = if self.extent.abs() < NEAR_ZERO {
            0.0
        } else {
            (self.anchor_y - y) / self.extent
        };
        let weight = match self.falloff {
            Falloff::Linear => factor,
            Falloff::Squared => factor * factor,
        };
        Point::new(clamp_coord(self.amount.mul_add(weight, x).trunc()), y)
    }
}

// ---------------------------------------------------------------------------
// Rotation and arcs
// ---------------------------------------------------------------------------

/// Rotate `p` by `degrees` about `pivot`, rounding to the pixel grid.
#[must_use]
pub fn rotate_about(p: Point, pivot: Point, degrees: Scalar) -> Point {
    let q = p.transformed(&rotated_about(pivot, degrees));
    Point::new(q.x.round(), q.y.round())
}

/// Keep an arc between [`MIN_ARC_SPAN`] and `360 - MIN_ARC_SPAN` degrees
/// long by moving its end angle.
#[must_use]
pub fn arc_span(start: Scalar, end: Scalar) -> (Scalar, Scalar) {
    let span = (end - start).clamp(MIN_ARC_SPAN, 360.0 - MIN_ARC_SPAN);
    (start, start + span)
}

/// `a / 2` rounded toward negative infinity, for integral values.
#[inline]
fn half_floor(a: Scalar) -> Scalar {
    (a / 2.0).floor()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
