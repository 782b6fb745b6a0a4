//! The mutable drawing surface.
//!
//! A [`Canvas`] owns one [`Raster`] for its whole lifetime and exposes the
//! two primitives letter constructors need: straight segments and
//! elliptical arcs. Coverage is binary: a pixel is either untouched or set
//! to [`INK`], so rendered glyphs stay strictly two-valued.
//!
//! Rasterization rule: a pixel is lit when its centre lies within half the
//! stroke width (at least half a pixel) of the segment. The rule is
//! symmetric in the segment's endpoints and clips to the canvas, so no
//! coordinate, however far out of range, can panic.

use kurbo::{Line, ParamCurveNearest, Shape};
use log::trace;

use crate::error::GraphicsError;
use crate::raster::Raster;
use crate::skeleton::{ArcStroke, LineStroke, Skeleton, Stroke};
use crate::transform::{Transformable, ellipse, xscaled, yscaled};
use crate::types::{INK, LOGICAL_SIZE, Point, Scalar, Vec2};

/// Slack added to the squared coverage radius so exact ties are lit.
const COVERAGE_SLACK: Scalar = 1e-9;

// ---------------------------------------------------------------------------
// Canvas
// ---------------------------------------------------------------------------

/// A fixed-size binary drawing surface.
#[derive(Debug, Clone)]
pub struct Canvas {
    raster: Raster,
}

impl Canvas {
    /// Create a zero-filled canvas.
    ///
    /// # Errors
    ///
    /// Returns [`GraphicsError::InvalidDimensions`] if either side is zero.
    pub fn new(width: u32, height: u32) -> Result<Self, GraphicsError> {
        Ok(Self {
            raster: Raster::new(width, height)?,
        })
    }

    #[inline]
    pub const fn width(&self) -> u32 {
        self.raster.width()
    }

    #[inline]
    pub const fn height(&self) -> u32 {
        self.raster.height()
    }

    /// Reset every pixel to 0, keeping the allocation.
    pub fn clear(&mut self) {
        self.raster.pixels_mut().fill(0);
    }

    /// Borrow the current pixels.
    #[inline]
    pub const fn as_raster(&self) -> &Raster {
        &self.raster
    }

    // -----------------------------------------------------------------------
    // Primitives
    // -----------------------------------------------------------------------

    /// Draw a straight segment with round caps.
    pub fn draw_line(&mut self, p1: Point, p2: Point, stroke: Scalar) {
        if !(p1.is_finite() && p2.is_finite()) {
            return;
        }
        // Fixed endpoint order keeps the rasterization independent of
        // drawing direction.
        let (a, b) = if (p1.x, p1.y) <= (p2.x, p2.y) {
            (p1, p2)
        } else {
            (p2, p1)
        };
        let radius = stroke.max(1.0) / 2.0;
        let limit = radius.mul_add(radius, COVERAGE_SLACK);
        let line = Line::new(a, b);
        let area = line.bounding_box().inflate(radius, radius);

        let Some((x0, x1)) = clip_span(area.x0, area.x1, self.width()) else {
            return;
        };
        let Some((y0, y1)) = clip_span(area.y0, area.y1, self.height()) else {
            return;
        };

        let w = self.width() as usize;
        let pixels = self.raster.pixels_mut();
        for y in y0..=y1 {
            for x in x0..=x1 {
                let centre = Point::new(Scalar::from(x), Scalar::from(y));
                if line.nearest(centre, COVERAGE_SLACK).distance_sq <= limit {
                    pixels[y as usize * w + x as usize] = INK;
                }
            }
        }
    }

    /// Draw an elliptical arc.
    ///
    /// `axes` are the semi-axes before rotation, `rotation_deg` turns the
    /// ellipse about `center`, and the arc runs from `start_deg` to
    /// `end_deg` (swapped if reversed, capped at a full turn).
    pub fn draw_arc(
        &mut self,
        center: Point,
        axes: Vec2,
        rotation_deg: Scalar,
        start_deg: Scalar,
        end_deg: Scalar,
        stroke: Scalar,
    ) {
        self.draw_arc_stroke(&ArcStroke {
            ellipse: ellipse(center, axes, rotation_deg),
            start_deg,
            end_deg,
            width: stroke,
        });
    }

    /// Draw one skeleton stroke in canvas coordinates.
    pub fn draw_stroke(&mut self, stroke: &Stroke) {
        match stroke {
            Stroke::Line(LineStroke { from, to, width }) => self.draw_line(*from, *to, *width),
            Stroke::Arc(arc) => self.draw_arc_stroke(arc),
        }
    }

    fn draw_arc_stroke(&mut self, arc: &ArcStroke) {
        let samples = arc.samples();
        if let [only] = samples.as_slice() {
            self.draw_line(*only, *only, arc.width);
            return;
        }
        for pair in samples.windows(2) {
            self.draw_line(pair[0], pair[1], arc.width);
        }
    }

    /// Draw a skeleton authored on the logical grid.
    ///
    /// Coordinates are scaled from [`LOGICAL_SIZE`] to the canvas size;
    /// stroke widths stay in device pixels.
    pub fn draw_skeleton(&mut self, skeleton: &Skeleton) {
        let (w, h) = (self.width(), self.height());
        if w == LOGICAL_SIZE && h == LOGICAL_SIZE {
            for stroke in &skeleton.strokes {
                trace!("stroke {stroke:?}");
                self.draw_stroke(stroke);
            }
            return;
        }
        let logical = Scalar::from(LOGICAL_SIZE);
        let fit = xscaled(Scalar::from(w) / logical).then(&yscaled(Scalar::from(h) / logical));
        for stroke in &skeleton.strokes {
            let stroke = stroke.transformed(&fit);
            trace!("stroke {stroke:?}");
            self.draw_stroke(&stroke);
        }
    }
}

/// Clip the real interval `[lo, hi]` to pixel indices `0..len`.
fn clip_span(lo: Scalar, hi: Scalar, len: u32) -> Option<(u32, u32)> {
    let max = Scalar::from(len - 1);
    let lo = lo.ceil().max(0.0);
    let hi = hi.floor().min(max);
    if lo > hi {
        return None;
    }
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "both ends were clamped to 0..len"
    )]
    let span = (lo as u32, hi as u32);
    Some(span)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
