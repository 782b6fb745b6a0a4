//! End-to-end rendering properties: determinism, canvas reuse, parameter
//! sweeps and the distance metric on real glyphs.

#![allow(clippy::float_cmp)]

use glyphwarp_core::explore::{interpolate, sweep_steps};
use glyphwarp_core::params::{CParams, XParams};
use glyphwarp_core::{CoreError, KeyPolicy, Letter, LetterParams, ParamMap, ParamSchema, Renderer};
use glyphwarp_graphics::{GraphicsError, Raster};
use glyphwarp_graphics::types::INK;
use glyphwarp_metric::{distance, try_distance};

fn map(pairs: &[(&str, f64)]) -> ParamMap {
    pairs.iter().map(|&(k, v)| (k.to_owned(), v)).collect()
}

fn lit_in_row(r: &Raster, y: u32) -> Vec<u32> {
    (0..r.width()).filter(|&x| r.get(x, y) == Some(INK)).collect()
}

// ---------------------------------------------------------------------------
// Determinism and reuse
// ---------------------------------------------------------------------------

#[test]
fn rendering_is_deterministic() {
    let schema = ParamSchema::builtin();
    let mut r = Renderer::new(&schema).unwrap();
    let p = map(&[("shear_x", -12.0), ("bar_length", 1.6)]);
    let first = r.render(Letter::F, &p).unwrap();
    let second = r.render(Letter::F, &p).unwrap();
    assert_eq!(first, second);
}

#[test]
fn reused_canvas_matches_fresh_canvas() {
    let schema = ParamSchema::builtin();
    let mut busy = Renderer::new(&schema).unwrap();
    busy.render(Letter::X, &map(&[("rotation_deg", 25.0), ("thickness", 18.0)]))
        .unwrap();
    busy.render(Letter::B, &map(&[("waist_y_shift", 30.0)]))
        .unwrap();
    let reused = busy.canonical(Letter::C).unwrap();

    let mut fresh = Renderer::new(&schema).unwrap();
    assert_eq!(reused, fresh.canonical(Letter::C).unwrap());
}

#[test]
fn defaults_render_the_canonical_glyph() {
    let schema = ParamSchema::builtin();
    let mut r = Renderer::new(&schema).unwrap();
    for letter in Letter::ALL {
        let canonical = r.canonical(letter).unwrap();
        let explicit = r.render(letter, &schema.defaults(letter)).unwrap();
        assert_eq!(canonical, explicit, "{letter}");
        assert_eq!(try_distance(&canonical, &explicit).unwrap(), 0.0);
    }
}

#[test]
fn out_of_range_values_are_clamped_by_the_schema() {
    let schema = ParamSchema::builtin();
    let mut r = Renderer::new(&schema).unwrap();
    let wild = r.render(Letter::A, &map(&[("shear_x", 1000.0)])).unwrap();
    let max = r.render(Letter::A, &map(&[("shear_x", 35.0)])).unwrap();
    assert_eq!(wild, max);
}

#[test_log::test]
fn lenient_renderer_ignores_misspelt_keys() {
    let schema = ParamSchema::builtin();
    let mut r = Renderer::new(&schema).unwrap();
    let glyph = r.render(Letter::W, &map(&[("shearx", 20.0)])).unwrap();
    assert_eq!(glyph, r.canonical(Letter::W).unwrap());

    let mut strict = Renderer::new(&schema).unwrap().with_policy(KeyPolicy::Strict);
    assert!(strict.render(Letter::W, &map(&[("shearx", 20.0)])).is_err());
}

// ---------------------------------------------------------------------------
// Geometry bounds and thickness
// ---------------------------------------------------------------------------

#[test]
fn skeletons_stay_on_the_canvas_across_sweeps() {
    let schema = ParamSchema::builtin();
    for letter in Letter::ALL {
        let names: Vec<&str> = schema.params(letter).collect();
        for &name in &names {
            for t in sweep_steps(11) {
                let values = interpolate(&schema, letter, &[name], t).unwrap();
                let params = LetterParams::from_map(letter, &values);
                let bb = params.skeleton().bounds();
                assert!(bb.within(0.0, 199.0), "{letter}.{name} at t={t}: {bb:?}");
            }
        }
        // Everything at once, both extremes.
        for t in [0.0, 1.0] {
            let values = interpolate(&schema, letter, &names, t).unwrap();
            let bb = LetterParams::from_map(letter, &values).skeleton().bounds();
            assert!(bb.within(0.0, 199.0), "{letter} all at t={t}: {bb:?}");
        }
    }
}

#[test]
fn extreme_values_still_render_a_binary_canvas() {
    let schema = ParamSchema::builtin();
    let mut r = Renderer::new(&schema).unwrap();
    for letter in Letter::ALL {
        let names: Vec<String> = schema.params(letter).map(str::to_owned).collect();
        for name in &names {
            for value in [1e6, -1e6, 0.0, 1e300, -1e300] {
                let mut values = schema.defaults(letter);
                values.insert(name.clone(), value);
                let params = LetterParams::from_map(letter, &values);
                let result = r.render_params(&params);
                if name == "thickness" && value < 1.0 {
                    assert!(
                        matches!(
                            result,
                            Err(CoreError::Graphics(GraphicsError::InvalidThickness(_)))
                        ),
                        "{letter}.{name}={value:e}"
                    );
                    continue;
                }
                let glyph = result.unwrap();
                assert_eq!(glyph.dims(), (200, 200), "{letter}.{name}={value:e}");
                assert!(glyph.is_binary(INK), "{letter}.{name}={value:e}");
            }
        }
    }
}

#[test]
fn thicker_glyphs_have_more_ink() {
    let schema = ParamSchema::builtin();
    let mut r = Renderer::new(&schema).unwrap();
    for letter in Letter::ALL {
        let mut prev = 0;
        for thickness in 6..=18 {
            let glyph = r
                .render(letter, &map(&[("thickness", f64::from(thickness))]))
                .unwrap();
            let n = glyph.count_foreground();
            assert!(n >= prev, "{letter} thickness {thickness}: {n} < {prev}");
            prev = n;
        }
    }
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn letter_a_is_a_centred_triangle_with_crossbar() {
    let schema = ParamSchema::builtin();
    let mut r = Renderer::new(&schema).unwrap();
    let glyph = r
        .render(
            Letter::A,
            &map(&[
                ("base_width_factor", 1.0),
                ("top_width", 0.0),
                ("crossbar_h_shift", 0.0),
                ("shear_x", 0.0),
                ("thickness", 6.0),
            ]),
        )
        .unwrap();

    // Skeleton spans 50..=150 x 40..=175; a 6-px square grows it two pixels
    // up and left, three down and right.
    let bb = glyph.foreground_bounds();
    assert_eq!(
        (bb.min_x, bb.max_x, bb.min_y, bb.max_y),
        (48.0, 153.0, 38.0, 178.0)
    );

    // Apex at the top centre.
    let top = lit_in_row(&glyph, 38);
    let apex = f64::from(top[0] + top[top.len() - 1]) / 2.0;
    assert!((apex - 100.0).abs() <= 2.0, "apex at {apex}");

    // A solid crossbar near mid-height.
    let bar = lit_in_row(&glyph, 107);
    assert!(bar.len() > 40, "crossbar row has {} pixels", bar.len());

    assert_eq!(distance(&glyph, &glyph), 0.0);
}

#[test]
fn letter_x_survives_a_half_turn() {
    let schema = ParamSchema::builtin();
    let mut r = Renderer::new(&schema).unwrap();
    let upright = r.render_params(&XParams::default().into()).unwrap();
    let turned = r
        .render_params(
            &XParams {
                rotation_deg: 180,
                ..XParams::default()
            }
            .into(),
        )
        .unwrap();
    assert_eq!(try_distance(&upright, &turned).unwrap(), 0.0);
}

#[test]
fn letter_c_opening_widens_monotonically() {
    let schema = ParamSchema::builtin();
    let mut r = Renderer::new(&schema).unwrap();
    let render = |r: &mut Renderer<'_>, cut_top| {
        r.render_params(
            &CParams {
                cut_top,
                ..CParams::default()
            }
            .into(),
        )
        .unwrap()
    };
    let closed = render(&mut r, -60);
    let mut prev_distance = -1.0;
    let mut prev_ink = usize::MAX;
    for cut_top in [-60, -10, 40] {
        let glyph = render(&mut r, cut_top);
        let d = try_distance(&closed, &glyph).unwrap();
        let ink = glyph.count_foreground();
        assert!(d > prev_distance, "cut_top {cut_top}: {d} <= {prev_distance}");
        assert!(ink < prev_ink, "cut_top {cut_top}: {ink} >= {prev_ink}");
        prev_distance = d;
        prev_ink = ink;
    }
}

#[test]
fn distances_between_letters_are_symmetric_and_bounded() {
    let schema = ParamSchema::builtin();
    let mut r = Renderer::new(&schema).unwrap();
    let glyphs: Vec<Raster> = Letter::ALL
        .iter()
        .map(|&l| r.canonical(l).unwrap())
        .collect();
    for (i, a) in glyphs.iter().enumerate() {
        for (j, b) in glyphs.iter().enumerate() {
            let ab = try_distance(a, b).unwrap();
            let ba = try_distance(b, a).unwrap();
            assert_eq!(ab, ba);
            assert!((0.0..=1.0).contains(&ab));
            if i == j {
                assert_eq!(ab, 0.0);
            } else {
                assert!(ab > 0.0, "{} vs {}", Letter::ALL[i], Letter::ALL[j]);
            }
        }
    }
}

#[test_log::test]
fn schema_overrides_change_the_default_glyph() {
    let heavy = ParamSchema::from_json_str(
        r#"{ "A": { "thickness": { "min": 6, "max": 18, "default": 12 } } }"#,
    )
    .unwrap();
    let builtin = ParamSchema::builtin();

    let bold = Renderer::new(&heavy).unwrap().canonical(Letter::A).unwrap();
    let regular = Renderer::new(&builtin).unwrap().canonical(Letter::A).unwrap();
    assert!(bold.count_foreground() > regular.count_foreground());

    let explicit = Renderer::new(&builtin)
        .unwrap()
        .render(Letter::A, &map(&[("thickness", 12.0)]))
        .unwrap();
    assert_eq!(bold, explicit);
}
