//! Letter X: two crossing diagonals.
//!
//! `cross_ratio` splits a shared width between the top and bottom pairs
//! of corners, which moves the crossing point up or down. `asymmetry`
//! pushes the right-hand corners only.

use glyphwarp_graphics::Skeleton;
use glyphwarp_graphics::types::{Point, Scalar};

use super::{CENTER, clamp_point, rotate_about};
use crate::params::XParams;

const TOP_Y: Scalar = 30.0;
const BOTTOM_Y: Scalar = 170.0;
const BASE_HALF_WIDTH: Scalar = 45.0;

#[must_use]
pub fn skeleton(p: &XParams) -> Skeleton {
    let base = (BASE_HALF_WIDTH + Scalar::from(p.spread_angle)).max(0.0);
    let top_half = (2.0 * base * p.cross_ratio).trunc();
    let bottom_half = (2.0 * base * (1.0 - p.cross_ratio)).trunc();
    let skew = Scalar::from(p.asymmetry);

    let angle = Scalar::from(p.rotation_deg);
    let corner = |x: Scalar, y: Scalar| clamp_point(rotate_about(Point::new(x, y), CENTER, angle));
    let tl = corner(CENTER.x - top_half, TOP_Y);
    let tr = corner(CENTER.x + top_half + skew, TOP_Y);
    let bl = corner(CENTER.x - bottom_half, BOTTOM_Y);
    let br = corner(CENTER.x + bottom_half + skew, BOTTOM_Y);

    let mut sk = Skeleton::new();
    sk.line(tl, br);
    sk.line(tr, bl);
    sk
}
