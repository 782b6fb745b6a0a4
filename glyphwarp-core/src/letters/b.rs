//! Letter B: a spine with two half-ellipse bowls meeting at the waist.

use glyphwarp_graphics::Skeleton;
use glyphwarp_graphics::types::{Point, Scalar, Vec2};

use super::{CENTER, INSET_MAX, clamp_coord, half_floor, rotate_about};
use crate::params::BParams;

const LEFT_X: Scalar = 60.0;
const TOP_Y: Scalar = 30.0;
const BOTTOM_Y: Scalar = 170.0;
const BOWL_WIDTH: Scalar = 70.0;
/// Widest bowl that still ends inside the inset.
const MAX_BOWL_WIDTH: Scalar = INSET_MAX - LEFT_X;

#[must_use]
pub fn skeleton(p: &BParams) -> Skeleton {
    let squash =
        |y: Scalar| clamp_coord((y - CENTER.y).mul_add(p.vertical_squash, CENTER.y).trunc());
    let top = squash(TOP_Y);
    let bottom = squash(BOTTOM_Y);
    let (lo, hi) = (top.min(bottom), top.max(bottom));

    // The waist stays strictly inside the spine so both bowls keep a height.
    let waist = squash(CENTER.y - Scalar::from(p.waist_y_shift));
    let waist = if hi - lo >= 2.0 {
        waist.clamp(lo + 1.0, hi - 1.0)
    } else {
        lo
    };

    let angle = Scalar::from(p.rotation_deg);
    let turn = |y: Scalar| rotate_about(Point::new(LEFT_X, y), CENTER, angle);
    let width = (BOWL_WIDTH * p.width_factor).trunc().clamp(0.0, MAX_BOWL_WIDTH);

    let mut sk = Skeleton::new();
    sk.line(turn(top), turn(bottom));
    for (from, to) in [(top, waist), (waist, bottom)] {
        let center = turn(half_floor(from + to));
        let radius_y = half_floor((to - from).abs()).max(1.0);
        sk.arc(center, Vec2::new(width, radius_y), angle, -90.0, 90.0);
    }
    sk
}
