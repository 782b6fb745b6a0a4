//! Typed per-letter parameters and their resolution from loose maps.
//!
//! Callers speak in [`ParamMap`]s (`name -> value`); geometry speaks in the
//! typed structs below. [`resolve`] is the only bridge between the two: it
//! starts from the schema defaults, applies overrides clamped into the
//! schema range, and rejects or ignores unknown keys per [`KeyPolicy`].

use std::collections::BTreeMap;

use glyphwarp_graphics::{Canvas, Skeleton};
use log::debug;

use crate::error::CoreError;
use crate::letter::Letter;
use crate::letters;
use crate::schema::ParamSchema;

/// Loose parameter values keyed by name.
pub type ParamMap = BTreeMap<String, f64>;

/// What to do with keys the schema does not declare for a letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyPolicy {
    /// Fail with [`CoreError::UnknownParameter`].
    Strict,
    /// Skip the key (logged at debug level).
    #[default]
    Lenient,
}

// ---------------------------------------------------------------------------
// Typed parameter structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AParams {
    pub base_width_factor: f64,
    pub top_width: i32,
    pub crossbar_h_shift: i32,
    pub shear_x: i32,
    pub thickness: i32,
}

impl Default for AParams {
    fn default() -> Self {
        Self {
            base_width_factor: 1.0,
            top_width: 0,
            crossbar_h_shift: 0,
            shear_x: 0,
            thickness: 6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BParams {
    pub width_factor: f64,
    pub waist_y_shift: i32,
    pub rotation_deg: i32,
    pub vertical_squash: f64,
    pub thickness: i32,
}

impl Default for BParams {
    fn default() -> Self {
        Self {
            width_factor: 1.0,
            waist_y_shift: 0,
            rotation_deg: 0,
            vertical_squash: 1.0,
            thickness: 6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CParams {
    pub cut_top: i32,
    pub cut_bottom: i32,
    pub vertical_squash: f64,
    pub rotation_deg: i32,
    pub thickness: i32,
}

impl Default for CParams {
    fn default() -> Self {
        Self {
            cut_top: 40,
            cut_bottom: 0,
            vertical_squash: 1.0,
            rotation_deg: 0,
            thickness: 6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FParams {
    pub bar_length: f64,
    pub middle_bar_shift: i32,
    pub shear_x: i32,
    pub spine_height: f64,
    pub thickness: i32,
}

impl Default for FParams {
    fn default() -> Self {
        Self {
            bar_length: 1.0,
            middle_bar_shift: 0,
            shear_x: 0,
            spine_height: 1.0,
            thickness: 6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XParams {
    pub cross_ratio: f64,
    pub spread_angle: i32,
    pub rotation_deg: i32,
    pub asymmetry: i32,
    pub thickness: i32,
}

impl Default for XParams {
    fn default() -> Self {
        Self {
            cross_ratio: 0.5,
            spread_angle: 0,
            rotation_deg: 0,
            asymmetry: 0,
            thickness: 6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WParams {
    pub peak_depth: f64,
    pub width_factor: f64,
    pub middle_height: f64,
    pub shear_x: i32,
    pub thickness: i32,
}

impl Default for WParams {
    fn default() -> Self {
        Self {
            peak_depth: 0.7,
            width_factor: 1.0,
            middle_height: 0.5,
            shear_x: 0,
            thickness: 6,
        }
    }
}

// ---------------------------------------------------------------------------
// LetterParams
// ---------------------------------------------------------------------------

/// Parameters for one letter, tagged by letter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LetterParams {
    A(AParams),
    B(BParams),
    C(CParams),
    F(FParams),
    X(XParams),
    W(WParams),
}

impl LetterParams {
    /// The default parameters of `letter`.
    #[must_use]
    pub fn defaults(letter: Letter) -> Self {
        match letter {
            Letter::A => Self::A(AParams::default()),
            Letter::B => Self::B(BParams::default()),
            Letter::C => Self::C(CParams::default()),
            Letter::F => Self::F(FParams::default()),
            Letter::X => Self::X(XParams::default()),
            Letter::W => Self::W(WParams::default()),
        }
    }

    /// Build typed parameters from a map; missing keys take the struct
    /// defaults and integer fields are truncated toward zero.
    #[must_use]
    pub fn from_map(letter: Letter, map: &ParamMap) -> Self {
        let r = Reader(map);
        match letter {
            Letter::A => {
                let d = AParams::default();
                Self::A(AParams {
                    base_width_factor: r.real("base_width_factor", d.base_width_factor),
                    top_width: r.int("top_width", d.top_width),
                    crossbar_h_shift: r.int("crossbar_h_shift", d.crossbar_h_shift),
                    shear_x: r.int("shear_x", d.shear_x),
                    thickness: r.int("thickness", d.thickness),
                })
            }
            Letter::B => {
                let d = BParams::default();
                Self::B(BParams {
                    width_factor: r.real("width_factor", d.width_factor),
                    waist_y_shift: r.int("waist_y_shift", d.waist_y_shift),
                    rotation_deg: r.int("rotation_deg", d.rotation_deg),
                    vertical_squash: r.real("vertical_squash", d.vertical_squash),
                    thickness: r.int("thickness", d.thickness),
                })
            }
            Letter::C => {
                let d = CParams::default();
                Self::C(CParams {
                    cut_top: r.int("cut_top", d.cut_top),
                    cut_bottom: r.int("cut_bottom", d.cut_bottom),
                    vertical_squash: r.real("vertical_squash", d.vertical_squash),
                    rotation_deg: r.int("rotation_deg", d.rotation_deg),
                    thickness: r.int("thickness", d.thickness),
                })
            }
            Letter::F => {
                let d = FParams::default();
                Self::F(FParams {
                    bar_length: r.real("bar_length", d.bar_length),
                    middle_bar_shift: r.int("middle_bar_shift", d.middle_bar_shift),
                    shear_x: r.int("shear_x", d.shear_x),
                    spine_height: r.real("spine_height", d.spine_height),
                    thickness: r.int("thickness", d.thickness),
                })
            }
            Letter::X => {
                let d = XParams::default();
                Self::X(XParams {
                    cross_ratio: r.real("cross_ratio", d.cross_ratio),
                    spread_angle: r.int("spread_angle", d.spread_angle),
                    rotation_deg: r.int("rotation_deg", d.rotation_deg),
                    asymmetry: r.int("asymmetry", d.asymmetry),
                    thickness: r.int("thickness", d.thickness),
                })
            }
            Letter::W => {
                let d = WParams::default();
                Self::W(WParams {
                    peak_depth: r.real("peak_depth", d.peak_depth),
                    width_factor: r.real("width_factor", d.width_factor),
                    middle_height: r.real("middle_height", d.middle_height),
                    shear_x: r.int("shear_x", d.shear_x),
                    thickness: r.int("thickness", d.thickness),
                })
            }
        }
    }

    #[must_use]
    pub const fn letter(&self) -> Letter {
        match self {
            Self::A(_) => Letter::A,
            Self::B(_) => Letter::B,
            Self::C(_) => Letter::C,
            Self::F(_) => Letter::F,
            Self::X(_) => Letter::X,
            Self::W(_) => Letter::W,
        }
    }

    /// Side of the square dilation kernel.
    #[must_use]
    pub const fn thickness(&self) -> i32 {
        match self {
            Self::A(p) => p.thickness,
            Self::B(p) => p.thickness,
            Self::C(p) => p.thickness,
            Self::F(p) => p.thickness,
            Self::X(p) => p.thickness,
            Self::W(p) => p.thickness,
        }
    }

    /// The thin stroke skeleton on the logical 200-unit grid.
    #[must_use]
    pub fn skeleton(&self) -> Skeleton {
        match self {
            Self::A(p) => letters::a::skeleton(p),
            Self::B(p) => letters::b::skeleton(p),
            Self::C(p) => letters::c::skeleton(p),
            Self::F(p) => letters::f::skeleton(p),
            Self::X(p) => letters::x::skeleton(p),
            Self::W(p) => letters::w::skeleton(p),
        }
    }

    /// Clear `canvas` and draw the skeleton onto it.
    pub fn draw(&self, canvas: &mut Canvas) {
        canvas.clear();
        canvas.draw_skeleton(&self.skeleton());
    }
}

impl From<AParams> for LetterParams {
    fn from(p: AParams) -> Self {
        Self::A(p)
    }
}

impl From<BParams> for LetterParams {
    fn from(p: BParams) -> Self {
        Self::B(p)
    }
}

impl From<CParams> for LetterParams {
    fn from(p: CParams) -> Self {
        Self::C(p)
    }
}

impl From<FParams> for LetterParams {
    fn from(p: FParams) -> Self {
        Self::F(p)
    }
}

impl From<XParams> for LetterParams {
    fn from(p: XParams) -> Self {
        Self::X(p)
    }
}

impl From<WParams> for LetterParams {
    fn from(p: WParams) -> Self {
        Self::W(p)
    }
}

struct Reader<'a>(&'a ParamMap);

impl Reader<'_> {
    fn real(&self, key: &str, default: f64) -> f64 {
        self.0.get(key).copied().unwrap_or(default)
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "integer parameters are truncated, saturating at the i32 range"
    )]
    fn int(&self, key: &str, default: i32) -> i32 {
        self.0.get(key).map_or(default, |v| v.trunc() as i32)
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Resolve `overrides` for `letter` against `schema`.
///
/// Every declared parameter starts at its schema default. Each override is
/// clamped into its declared range; NaN falls back to the default.
///
/// # Errors
///
/// With [`KeyPolicy::Strict`], a key the schema does not declare for
/// `letter` yields [`CoreError::UnknownParameter`].
pub fn resolve(
    schema: &ParamSchema,
    letter: Letter,
    overrides: &ParamMap,
    policy: KeyPolicy,
) -> Result<LetterParams, CoreError> {
    let mut values = schema.defaults(letter);
    for (key, &value) in overrides {
        let Some(limits) = schema.get_limits(letter, key) else {
            match policy {
                KeyPolicy::Strict => {
                    return Err(CoreError::UnknownParameter {
                        letter,
                        param: key.clone(),
                    });
                }
                KeyPolicy::Lenient => {
                    debug!("ignoring unknown parameter `{key}` for letter {letter}");
                    continue;
                }
            }
        };
        let resolved = if value.is_nan() {
            debug!("{letter}.{key} is NaN, using the default");
            limits.default_value()
        } else {
            limits.clamp(value)
        };
        values.insert(key.clone(), resolved);
    }
    let params = LetterParams::from_map(letter, &values);
    debug!("resolved {params:?}");
    Ok(params)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
