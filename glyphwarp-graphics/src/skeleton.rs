//! Skeleton assembly.
//!
//! A [`Skeleton`] is an ordered list of thin strokes (straight segments
//! and elliptical arcs) that a letter constructor emits before anything
//! touches a raster. Keeping the strokes as data makes the geometry
//! testable on its own and lets a canvas of any size rasterize the same
//! glyph.

use crate::raster::BoundingBox;
use crate::transform::{Transformable, ellipse};
use crate::types::{Point, Scalar, Transform, Vec2};

/// Stroke width of skeleton lines; glyph weight comes from dilation.
pub const SKELETON_STROKE: Scalar = 1.0;

/// Upper bound on interior samples of one arc.
pub const MAX_STEPS_PER_TURN: Scalar = 8192.0;

// ---------------------------------------------------------------------------
// Strokes
// ---------------------------------------------------------------------------

/// A straight segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStroke {
    pub from: Point,
    pub to: Point,
    pub width: Scalar,
}

/// An elliptical arc.
///
/// The ellipse is stored as the transform that maps the unit circle onto
/// it, so arcs compose with any affine transform without losing shape.
/// Angles are in degrees on the unit circle: 0° is +x and angles grow
/// clockwise on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcStroke {
    pub ellipse: Transform,
    pub start_deg: Scalar,
    pub end_deg: Scalar,
    pub width: Scalar,
}

impl ArcStroke {
    /// Angular step (degrees) giving roughly one pixel of arc length, never
    /// finer than [`MAX_STEPS_PER_TURN`] steps per full turn.
    #[must_use]
    pub fn step_deg(&self) -> Scalar {
        let reach = self.ellipse.reach().max(1.0);
        (1.0 / reach).to_degrees().max(360.0 / MAX_STEPS_PER_TURN)
    }

    /// The normalised angular range: ordered, and at most one full turn.
    #[must_use]
    pub fn span(&self) -> (Scalar, Scalar) {
        let (lo, hi) = if self.end_deg < self.start_deg {
            (self.end_deg, self.start_deg)
        } else {
            (self.start_deg, self.end_deg)
        };
        (lo, hi.min(lo + 360.0))
    }

    /// Point on the arc at parameter angle `deg`.
    #[must_use]
    pub fn point_at(&self, deg: Scalar) -> Point {
        let rad = deg.to_radians();
        self.ellipse.apply(Point::new(rad.cos(), rad.sin()))
    }

    /// Sample points from start to end.
    ///
    /// Interior samples sit on a fixed angular grid (multiples of
    /// [`step_deg`](Self::step_deg)), so two arcs on the same ellipse share
    /// their interior samples and a shorter arc traces a subset of a longer
    /// one.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss,
        reason = "the step count is clamped to MAX_STEPS_PER_TURN"
    )]
    pub fn samples(&self) -> Vec<Point> {
        let (lo, hi) = self.span();
        let step = self.step_deg();
        let mut points = vec![self.point_at(lo)];
        if !(lo.is_finite() && hi.is_finite()) {
            return points;
        }
        let first = (lo / step).floor() + 1.0;
        let last = (hi / step).ceil() - 1.0;
        // Counted rather than stepped: at huge angles `k + 1.0 == k`.
        let count = (last - first + 1.0).clamp(0.0, MAX_STEPS_PER_TURN) as usize;
        points.reserve(count + 1);
        points.extend((0..count).map(|i| self.point_at((first + i as Scalar) * step)));
        if hi > lo {
            points.push(self.point_at(hi));
        }
        points
    }
}

/// One drawing primitive of a skeleton.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stroke {
    Line(LineStroke),
    Arc(ArcStroke),
}

impl Transformable for Stroke {
    fn transformed(&self, t: &Transform) -> Self {
        match self {
            Self::Line(line) => Self::Line(LineStroke {
                from: line.from.transformed(t),
                to: line.to.transformed(t),
                width: line.width,
            }),
            Self::Arc(arc) => Self::Arc(ArcStroke {
                ellipse: arc.ellipse.then(t),
                ..*arc
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Skeleton
// ---------------------------------------------------------------------------

/// An ordered collection of strokes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Skeleton {
    pub strokes: Vec<Stroke>,
}

impl Skeleton {
    pub const fn new() -> Self {
        Self {
            strokes: Vec::new(),
        }
    }

    pub fn push(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    /// Add a skeleton-width segment.
    pub fn line(&mut self, from: Point, to: Point) {
        self.push(Stroke::Line(LineStroke {
            from,
            to,
            width: SKELETON_STROKE,
        }));
    }

    /// Add a skeleton-width arc of the ellipse with semi-axes `axes`,
    /// rotated by `rotation_deg` about `center`.
    pub fn arc(
        &mut self,
        center: Point,
        axes: Vec2,
        rotation_deg: Scalar,
        start_deg: Scalar,
        end_deg: Scalar,
    ) {
        self.push(Stroke::Arc(ArcStroke {
            ellipse: ellipse(center, axes, rotation_deg),
            start_deg,
            end_deg,
            width: SKELETON_STROKE,
        }));
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Bounds of every point the strokes pass through (stroke centre lines).
    #[must_use]
    pub fn bounds(&self) -> BoundingBox {
        let mut bb = BoundingBox::EMPTY;
        for stroke in &self.strokes {
            match stroke {
                Stroke::Line(line) => {
                    bb.include_point(line.from);
                    bb.include_point(line.to);
                }
                Stroke::Arc(arc) => {
                    for p in arc.samples() {
                        bb.include_point(p);
                    }
                }
            }
        }
        bb
    }
}

impl Transformable for Skeleton {
    fn transformed(&self, t: &Transform) -> Self {
        Self {
            strokes: self.strokes.iter().map(|s| s.transformed(t)).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
