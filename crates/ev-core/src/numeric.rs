//! Float checks for values that end up as bar magnitudes.

use crate::{EvError, EvResult};

pub fn ensure_finite(v: f64, what: &'static str) -> EvResult<f64> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(EvError::NonFinite { what, value: v })
    }
}

/// Finite and `>= 0`. `-0.0` is accepted.
pub fn ensure_magnitude(v: f64, what: &'static str) -> EvResult<f64> {
    let v = ensure_finite(v, what)?;
    if v < 0.0 {
        return Err(EvError::Negative { what, value: v });
    }
    Ok(v)
}

/// Largest value in `values`, or `None` for an empty slice.
pub fn max_value(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}
