//! Parameter schema: `{min, max, default}` per parameter per letter.
//!
//! The built-in table covers every letter. A JSON document can override
//! individual entries; it is merged over the built-in table and the result
//! is validated as a whole. Once loaded the schema is read-only and is
//! passed by reference to whatever needs it.
//!
//! JSON shape:
//!
//! ```json
//! { "A": { "shear_x": { "min": 0, "max": 50, "default": 0 } } }
//! ```
//!
//! The JSON type of `default` decides whether a parameter is
//! integer-valued: `6` is an integer, `6.0` is real.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::error::SchemaError;
use crate::letter::Letter;
use crate::params::ParamMap;

// ---------------------------------------------------------------------------
// Values and limits
// ---------------------------------------------------------------------------

/// A schema number that remembers whether it was written as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Int(i64),
    Real(f64),
}

impl ParamValue {
    #[must_use]
    #[expect(clippy::cast_precision_loss, reason = "schema integers are small")]
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::Int(v) => v as f64,
            Self::Real(v) => v,
        }
    }

    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Int(_))
    }
}

/// Bounds and default of one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Limits {
    pub min: f64,
    pub max: f64,
    pub default: ParamValue,
}

impl Limits {
    const fn int(min: i64, max: i64, default: i64) -> Self {
        #[expect(clippy::cast_precision_loss, reason = "table constants are small")]
        let (min, max) = (min as f64, max as f64);
        Self {
            min,
            max,
            default: ParamValue::Int(default),
        }
    }

    const fn real(min: f64, max: f64, default: f64) -> Self {
        Self {
            min,
            max,
            default: ParamValue::Real(default),
        }
    }

    /// Whether interpolated and sampled values are rounded to integers.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        self.default.is_integer()
    }

    #[must_use]
    pub const fn default_value(&self) -> f64 {
        self.default.as_f64()
    }

    /// Clamp `value` into `[min, max]`.
    #[must_use]
    pub const fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// The value at fraction `t` from `min` (t = 0) to `max` (t = 1),
    /// rounded half-to-even for integer parameters.
    #[must_use]
    pub fn lerp(&self, t: f64) -> f64 {
        let v = (self.max - self.min).mul_add(t, self.min);
        self.finish(v)
    }

    /// Round `v` if this parameter is integer-valued.
    #[must_use]
    pub fn finish(&self, v: f64) -> f64 {
        if self.is_integer() {
            v.round_ties_even()
        } else {
            v
        }
    }
}

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

/// Ordered parameter table for one letter.
type LetterTable = Vec<(String, Limits)>;

/// The full parameter schema.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSchema {
    table: BTreeMap<Letter, LetterTable>,
}

impl ParamSchema {
    /// The built-in table.
    #[must_use]
    pub fn builtin() -> Self {
        use Letter::{A, B, C, F, W, X};

        let thickness = Limits::int(6, 18, 6);
        let rows: [(Letter, Vec<(&str, Limits)>); 6] = [
            (
                A,
                vec![
                    ("base_width_factor", Limits::real(1.0, 1.8, 1.0)),
                    ("top_width", Limits::int(0, 100, 0)),
                    ("crossbar_h_shift", Limits::int(-30, 40, 0)),
                    ("shear_x", Limits::int(0, 35, 0)),
                    ("thickness", thickness),
                ],
            ),
            (
                B,
                vec![
                    ("width_factor", Limits::real(0.5, 1.0, 1.0)),
                    ("waist_y_shift", Limits::int(0, 40, 0)),
                    ("rotation_deg", Limits::int(-30, 0, 0)),
                    ("vertical_squash", Limits::real(0.4, 1.0, 1.0)),
                    ("thickness", thickness),
                ],
            ),
            (
                C,
                vec![
                    ("cut_top", Limits::int(-60, 40, 40)),
                    ("cut_bottom", Limits::int(-40, 40, 0)),
                    ("vertical_squash", Limits::real(0.45, 1.0, 1.0)),
                    ("rotation_deg", Limits::int(0, 45, 0)),
                    ("thickness", thickness),
                ],
            ),
            (
                F,
                vec![
                    ("bar_length", Limits::real(1.0, 2.0, 1.0)),
                    ("middle_bar_shift", Limits::int(-30, 40, 0)),
                    ("shear_x", Limits::int(-30, 30, 0)),
                    ("spine_height", Limits::real(0.6, 1.2, 1.0)),
                    ("thickness", thickness),
                ],
            ),
            (
                X,
                vec![
                    ("cross_ratio", Limits::real(0.3, 0.7, 0.5)),
                    ("spread_angle", Limits::int(-30, 30, 0)),
                    ("rotation_deg", Limits::int(-30, 30, 0)),
                    ("asymmetry", Limits::int(-30, 30, 0)),
                    ("thickness", thickness),
                ],
            ),
            (
                W,
                vec![
                    ("peak_depth", Limits::real(0.5, 0.9, 0.7)),
                    ("width_factor", Limits::real(0.3, 1.4, 1.0)),
                    ("middle_height", Limits::real(0.3, 1.0, 0.5)),
                    ("shear_x", Limits::int(-25, 25, 0)),
                    ("thickness", thickness),
                ],
            ),
        ];

        let table = rows
            .into_iter()
            .map(|(letter, params)| {
                let params = params
                    .into_iter()
                    .map(|(name, limits)| (name.to_owned(), limits))
                    .collect();
                (letter, params)
            })
            .collect();
        Self { table }
    }

    /// Parse a JSON override document and merge it over the built-in table.
    ///
    /// # Errors
    ///
    /// Fails on malformed JSON, unknown letters or parameter names, and
    /// entries whose `min > max` or whose default lies outside the range.
    pub fn from_json_str(text: &str) -> Result<Self, SchemaError> {
        let overlay: BTreeMap<String, BTreeMap<String, Limits>> = serde_json::from_str(text)?;
        let mut schema = Self::builtin();
        for (name, params) in overlay {
            let letter: Letter = name
                .parse()
                .map_err(|_| SchemaError::UnknownLetter(name.clone()))?;
            for (param, limits) in params {
                schema.override_entry(letter, param, limits)?;
            }
        }
        schema.validate()?;
        Ok(schema)
    }

    /// Read a JSON override document from disk.
    ///
    /// # Errors
    ///
    /// As [`from_json_str`](Self::from_json_str), plus I/O failures.
    pub fn from_json_file(path: &Path) -> Result<Self, SchemaError> {
        let text = fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loading parameter schema from {}", path.display());
        Self::from_json_str(&text)
    }

    fn override_entry(
        &mut self,
        letter: Letter,
        param: String,
        limits: Limits,
    ) -> Result<(), SchemaError> {
        let entries = self.table.entry(letter).or_default();
        match entries.iter_mut().find(|(name, _)| *name == param) {
            Some((_, slot)) => {
                debug!("schema override {letter}.{param}: {limits:?}");
                *slot = limits;
                Ok(())
            }
            None => Err(SchemaError::UnknownParameter { letter, param }),
        }
    }

    fn validate(&self) -> Result<(), SchemaError> {
        for (&letter, params) in &self.table {
            for (param, limits) in params {
                if limits.min > limits.max {
                    return Err(SchemaError::InvalidRange {
                        letter,
                        param: param.clone(),
                        min: limits.min,
                        max: limits.max,
                    });
                }
                let default = limits.default_value();
                if !(limits.min..=limits.max).contains(&default) {
                    return Err(SchemaError::DefaultOutOfRange {
                        letter,
                        param: param.clone(),
                        default,
                    });
                }
            }
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Limits of `param` for `letter`, or `None` if it is not declared.
    #[must_use]
    pub fn get_limits(&self, letter: Letter, param: &str) -> Option<&Limits> {
        self.table
            .get(&letter)?
            .iter()
            .find(|(name, _)| name == param)
            .map(|(_, limits)| limits)
    }

    /// Every declared letter.
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.table.keys().copied()
    }

    /// Parameter names of `letter`, in table order.
    pub fn params(&self, letter: Letter) -> impl Iterator<Item = &str> + '_ {
        self.entries(letter).iter().map(|(name, _)| name.as_str())
    }

    /// `(name, limits)` pairs of `letter`, in table order.
    #[must_use]
    pub fn entries(&self, letter: Letter) -> &[(String, Limits)] {
        self.table.get(&letter).map_or(&[], Vec::as_slice)
    }

    /// The default value of every parameter of `letter`.
    #[must_use]
    pub fn defaults(&self, letter: Letter) -> ParamMap {
        self.entries(letter)
            .iter()
            .map(|(name, limits)| (name.clone(), limits.default_value()))
            .collect()
    }

    /// Clamp `value` into the declared range, or `None` if `param` is not
    /// declared for `letter`.
    #[must_use]
    pub fn clamp(&self, letter: Letter, param: &str, value: f64) -> Option<f64> {
        self.get_limits(letter, param).map(|l| l.clamp(value))
    }
}

impl Default for ParamSchema {
    fn default() -> Self {
        Self::builtin()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
