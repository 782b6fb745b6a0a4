//! Letter A: two legs meeting at the top, an optional flat top and a
//! crossbar.

use glyphwarp_graphics::Skeleton;
use glyphwarp_graphics::math::lerp;
use glyphwarp_graphics::types::{Point, Scalar};

use super::{Falloff, Shear, half_floor};
use crate::params::AParams;

const TOP_Y: Scalar = 40.0;
const BOTTOM_Y: Scalar = 175.0;
const HEIGHT: Scalar = BOTTOM_Y - TOP_Y;
/// Crossbar height before `crossbar_h_shift`.
const CROSSBAR_Y: Scalar = 107.0;
/// Lowest the crossbar may sit.
const CROSSBAR_MAX_Y: Scalar = 150.0;

#[must_use]
pub fn skeleton(p: &AParams) -> Skeleton {
    let center_x = 100.0 - half_floor(Scalar::from(p.shear_x));
    let half_base = half_floor((100.0 * p.base_width_factor).trunc());
    let half_top = half_floor(Scalar::from(p.top_width));

    let shear = Shear {
        amount: Scalar::from(p.shear_x),
        anchor_y: BOTTOM_Y,
        extent: HEIGHT,
        falloff: Falloff::Linear,
    };
    let bl = shear.apply(center_x - half_base, BOTTOM_Y);
    let br = shear.apply(center_x + half_base, BOTTOM_Y);
    let tl = shear.apply(center_x - half_top, TOP_Y);
    let tr = shear.apply(center_x + half_top, TOP_Y);

    let mut sk = Skeleton::new();
    sk.line(bl, tl);
    sk.line(br, tr);
    if p.top_width > 0 {
        sk.line(tl, tr);
    }

    // A wider top needs less clearance above the crossbar.
    let openness = (Scalar::from(p.top_width) / 100.0).clamp(0.0, 1.0);
    let margin = 20.0f64.mul_add(1.0 - openness, 20.0);
    let bar_y = (CROSSBAR_Y - Scalar::from(p.crossbar_h_shift))
        .clamp(TOP_Y + margin, CROSSBAR_MAX_Y)
        .trunc();

    // Crossbar ends sit on the legs.
    let t = (bar_y - TOP_Y) / HEIGHT;
    let left = lerp(tl.x, bl.x, t).round();
    let right = lerp(tr.x, br.x, t).round();
    sk.line(Point::new(left, bar_y), Point::new(right, bar_y));
    sk
}
