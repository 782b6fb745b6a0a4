//! Helpers for exploring a letter's parameter space: interpolation,
//! sweeps over parameter subsets and seeded random sampling.

use glyphwarp_graphics::math::uniform_deviate;

use crate::error::CoreError;
use crate::letter::Letter;
use crate::params::ParamMap;
use crate::schema::ParamSchema;

/// Parameters of `letter` at fraction `t` along the active keys.
///
/// Inactive parameters stay at their default; each active parameter moves
/// linearly from its `min` (t = 0) to its `max` (t = 1), rounded for
/// integer parameters.
///
/// # Errors
///
/// Returns [`CoreError::UnknownParameter`] if an active key is not declared
/// for `letter`.
pub fn interpolate(
    schema: &ParamSchema,
    letter: Letter,
    active: &[&str],
    t: f64,
) -> Result<ParamMap, CoreError> {
    let mut values = schema.defaults(letter);
    for &key in active {
        let limits = schema
            .get_limits(letter, key)
            .ok_or_else(|| CoreError::UnknownParameter {
                letter,
                param: key.to_owned(),
            })?;
        values.insert(key.to_owned(), limits.lerp(t));
    }
    Ok(values)
}

/// Every non-empty subset of `keys`: all singles first, then all pairs,
/// and so on, each group in input order.
#[must_use]
pub fn combinations<T: Clone>(keys: &[T]) -> Vec<Vec<T>> {
    let mut out = Vec::new();
    for size in 1..=keys.len() {
        let mut idx: Vec<usize> = (0..size).collect();
        loop {
            out.push(idx.iter().map(|&i| keys[i].clone()).collect());
            // Advance the rightmost index that still has room.
            let Some(pos) = (0..size).rev().find(|&p| idx[p] < keys.len() - size + p) else {
                break;
            };
            idx[pos] += 1;
            for p in pos + 1..size {
                idx[p] = idx[p - 1] + 1;
            }
        }
    }
    out
}

/// `steps` evenly spaced fractions from 0 to 1 inclusive.
#[must_use]
#[expect(clippy::cast_precision_loss, reason = "step counts are small")]
pub fn sweep_steps(steps: usize) -> Vec<f64> {
    let denom = steps.saturating_sub(1).max(1) as f64;
    (0..steps).map(|i| i as f64 / denom).collect()
}

/// A random parameter set for `letter`, uniform within the schema range.
///
/// Integer parameters are rounded. `seed` advances with every draw, so a
/// sequence of calls from one seed is reproducible.
#[must_use]
pub fn sample(schema: &ParamSchema, letter: Letter, seed: &mut u64) -> ParamMap {
    schema
        .entries(letter)
        .iter()
        .map(|(name, limits)| {
            let v = limits.min + uniform_deviate(limits.max - limits.min, seed);
            (name.clone(), limits.finish(v).clamp(limits.min, limits.max))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
