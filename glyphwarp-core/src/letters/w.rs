//! Letter W: a four-segment zigzag.

use glyphwarp_graphics::Skeleton;
use glyphwarp_graphics::types::Scalar;

use super::{CENTER, Falloff, Shear, clamp_coord, half_floor};
use crate::params::WParams;

const TOP_Y: Scalar = 30.0;
const BOTTOM_Y: Scalar = 170.0;
const HEIGHT: Scalar = BOTTOM_Y - TOP_Y;
const WIDTH: Scalar = 160.0;

#[must_use]
pub fn skeleton(p: &WParams) -> Skeleton {
    let width = (WIDTH * p.width_factor).trunc();
    let half = half_floor(width);
    let quarter = (width / 4.0).floor();
    let valley = clamp_coord(TOP_Y + (HEIGHT * p.peak_depth).trunc());
    let mid_peak = clamp_coord(TOP_Y + (HEIGHT * (1.0 - p.middle_height)).trunc());

    let shear = Shear {
        amount: Scalar::from(p.shear_x),
        anchor_y: BOTTOM_Y,
        extent: HEIGHT,
        falloff: Falloff::Squared,
    };
    let cx = CENTER.x;
    let points = [
        shear.apply(cx - half, TOP_Y),
        shear.apply(cx - quarter, valley),
        shear.apply(cx, mid_peak),
        shear.apply(cx + quarter, valley),
        shear.apply(cx + half, TOP_Y),
    ];

    let mut sk = Skeleton::new();
    for pair in points.windows(2) {
        sk.line(pair[0], pair[1]);
    }
    sk
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use glyphwarp_graphics::skeleton::Stroke;
    use glyphwarp_graphics::types::Point;

    fn vertices(p: &WParams) -> Vec<Point> {
        let sk = skeleton(p);
        assert_eq!(sk.len(), 4);
        let mut pts = Vec::new();
        for (i, s) in sk.strokes.iter().enumerate() {
            let Stroke::Line(l) = s else {
                panic!("W has no arcs");
            };
            if i == 0 {
                pts.push(l.from);
            }
            pts.push(l.to);
        }
        pts
    }

    #[test]
    fn canonical_shape() {
        let v = vertices(&WParams::default());
        assert_eq!(
            v,
            [
                Point::new(20.0, 30.0),
                Point::new(60.0, 128.0),
                Point::new(100.0, 100.0),
                Point::new(140.0, 128.0),
                Point::new(180.0, 30.0),
            ]
        );
    }

    #[test]
    fn segments_are_connected() {
        let sk = skeleton(&WParams {
            shear_x: 25,
            width_factor: 0.3,
            ..WParams::default()
        });
        for pair in sk.strokes.windows(2) {
            let (Stroke::Line(a), Stroke::Line(b)) = (pair[0], pair[1]) else {
                panic!("W has no arcs");
            };
            assert_eq!(a.to, b.from);
        }
    }

    #[test]
    fn shear_moves_tops_most() {
        let v = vertices(&WParams {
            shear_x: -25,
            ..WParams::default()
        });
        assert_eq!(v[0].x, 5.0, "clamped to the inset");
        assert_eq!(v[4].x, 155.0);
        // Valley at y 128: ((170 - 128) / 140)^2 * -25 = -2.25.
        assert_eq!(v[1].x, 57.0);
    }

    #[test]
    fn deep_valleys_stay_finite() {
        for peak_depth in [1e6, 1e300, -1e300] {
            let v = vertices(&WParams {
                peak_depth,
                ..WParams::default()
            });
            assert!(v.iter().all(|p| p.is_finite()), "{peak_depth}");
            assert!((5.0..=195.0).contains(&v[1].y), "{peak_depth}");
        }
    }
}
