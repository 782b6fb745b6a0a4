//! Letter F: spine, full top bar and a half-length middle bar.

use glyphwarp_graphics::Skeleton;
use glyphwarp_graphics::types::Scalar;

use super::{Falloff, Shear, clamp_coord};
use crate::params::FParams;

const LEFT_X: Scalar = 55.0;
const TOP_Y: Scalar = 30.0;
const SPINE: Scalar = 140.0;
const BAR: Scalar = 90.0;
/// Middle bar position as a fraction of the spine height.
const MIDDLE_AT: Scalar = 0.45;

#[must_use]
pub fn skeleton(p: &FParams) -> Skeleton {
    let height = (SPINE * p.spine_height).trunc();
    let bottom = clamp_coord(TOP_Y + height);
    let bar_len = (BAR * p.bar_length).trunc();

    let shear = Shear {
        amount: Scalar::from(p.shear_x),
        anchor_y: bottom,
        extent: bottom - TOP_Y,
        falloff: Falloff::Squared,
    };

    let mid_y = (TOP_Y + (height * MIDDLE_AT).trunc() + Scalar::from(p.middle_bar_shift))
        .clamp(TOP_Y.min(bottom), TOP_Y.max(bottom));

    let mut sk = Skeleton::new();
    sk.line(shear.apply(LEFT_X, TOP_Y), shear.apply(LEFT_X, bottom));
    sk.line(shear.apply(LEFT_X, TOP_Y), shear.apply(LEFT_X + bar_len, TOP_Y));
    sk.line(
        shear.apply(LEFT_X, mid_y),
        shear.apply(LEFT_X + (bar_len * 0.5).trunc(), mid_y),
    );
    sk
}
