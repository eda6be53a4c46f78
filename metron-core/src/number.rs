//! Numeric policy shared by every measurement category
//!
//! Quantities carry plain `f64` values. The rules for which values are
//! acceptable, how results are rounded and when two values count as equal
//! live here so that no category re-implements them.

use crate::error::{MeasurementError, Result};

/// Absolute tolerance for comparing base-unit values
pub const EQUALITY_TOLERANCE: f64 = 1e-6;

/// A base-unit divisor closer to zero than this is treated as zero
pub const DIVISION_EPSILON: f64 = 1e-9;

/// Decimal places kept by add and subtract results
pub const RESULT_DECIMALS: i32 = 2;

/// Decimal places of the base-unit value that feed the hash
pub const HASH_DECIMALS: i32 = 6;

/// Reject NaN and infinities
pub fn ensure_finite(value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(MeasurementError::invalid_value(value))
    }
}

/// Round to `decimals` places, halves away from zero
pub fn round_half_away(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    let rounded = (value * scale).round() / scale;
    // Scaling can overflow for values near f64::MAX
    if rounded.is_finite() {
        rounded
    } else {
        value
    }
}

/// Tolerance comparison of two base-unit values
///
/// Not transitive near the tolerance boundary: `a ~ b` and `b ~ c` do not
/// imply `a ~ c`.
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EQUALITY_TOLERANCE
}

/// Integer key for hashing a base-unit value
pub fn hash_key(base_value: f64) -> i64 {
    let key = round_half_away(base_value, HASH_DECIMALS) * 10f64.powi(HASH_DECIMALS);
    // `as` saturates; -0.0 and 0.0 both land on 0
    key.round() as i64
}
