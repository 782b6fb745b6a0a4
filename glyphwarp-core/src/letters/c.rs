//! Letter C: one elliptical arc, open on the right.

use glyphwarp_graphics::Skeleton;
use glyphwarp_graphics::types::{Point, Scalar, Vec2};

use super::{INSET_MAX, arc_span};
use crate::params::CParams;

const CENTER: Point = Point::new(110.0, 100.0);
const RADIUS: Scalar = 75.0;
const START_DEG: Scalar = 45.0;
const END_DEG: Scalar = 315.0;
/// Tallest arc that still ends inside the inset.
const MAX_RADIUS_Y: Scalar = INSET_MAX - CENTER.y;

#[must_use]
pub fn skeleton(p: &CParams) -> Skeleton {
    let radius_y = (RADIUS * p.vertical_squash).trunc().clamp(1.0, MAX_RADIUS_Y);
    let (start, end) = arc_span(
        START_DEG + Scalar::from(p.cut_bottom),
        END_DEG - Scalar::from(p.cut_top),
    );
    let mut sk = Skeleton::new();
    sk.arc(
        CENTER,
        Vec2::new(RADIUS, radius_y),
        Scalar::from(p.rotation_deg),
        start,
        end,
    );
    sk
}
