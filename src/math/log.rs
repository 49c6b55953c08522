//! Natural and base-2 logarithm
//!
//! IEEE 754 decomposition: the biased exponent comes straight out of the
//! bit pattern, the mantissa is forced into `[1, 2)` by substituting the
//! bias, and a short odd series handles `ln` of the normalized mantissa.

use crate::bits::{from_bits, to_bits, EXP_BIAS, EXP_MASK, EXP_SHIFT, MAN_MASK, ONE_BITS};

// Odd atanh series for ln(m) with z = (m-1)/(m+1):
// ln(m) = 2z + 2z³/3 + 2z⁵/5 + 2z⁷/7 + 2z⁹/9
const LOG_C1: f32 = 2.0;
const LOG_C3: f32 = 0.666_666_66; // 2/3
const LOG_C5: f32 = 0.4; // 2/5
const LOG_C7: f32 = 0.285_714_28; // 2/7
const LOG_C9: f32 = 0.222_222_22; // 2/9

/// Natural logarithm.
///
/// Returns `NEG_INFINITY` for `x <= 0.0` (domain sentinel).
///
/// # Algorithm
///
/// With `x = m · 2^e` for `m ∈ [1, 2)`:
///
/// ```text
/// ln(x) = e·ln(2) + ln(m)
/// ```
///
/// `e` is read from the exponent field, `m` is built by overwriting that
/// field with the bias, and `ln(m)` comes from the odd series in
/// `z = (m-1)/(m+1)` with terms through `z⁹`. Using `z` instead of `m-1`
/// halves the argument range and makes the series converge much faster.
///
/// # Error Bounds
///
/// - Relative error < 0.1% for x > 0 away from 1; absolute error < 1e-4
///   near x = 1
///
/// # Example
///
/// ```rust
/// assert!(detmath::log(1.0).abs() < 1e-4);
/// assert!((detmath::log(core::f32::consts::E) - 1.0).abs() < 1e-3);
/// assert_eq!(detmath::log(-1.0), f32::NEG_INFINITY);
/// ```
#[inline(always)]
pub fn log(x: f32) -> f32 {
    if x <= 0.0 {
        return f32::NEG_INFINITY;
    }
    let bits = to_bits(x);
    let exponent = ((bits & EXP_MASK) >> EXP_SHIFT) as i32 - EXP_BIAS;
    let m = from_bits((bits & MAN_MASK) | ONE_BITS);

    let z = (m - 1.0) / (m + 1.0);
    let z2 = z * z;
    let series = z * (LOG_C1 + z2 * (LOG_C3 + z2 * (LOG_C5 + z2 * (LOG_C7 + z2 * LOG_C9))));

    exponent as f32 * core::f32::consts::LN_2 + series
}

/// Base-2 logarithm: `log(x) · log₂e`.
///
/// Same domain sentinel as [`log`]: `NEG_INFINITY` for `x <= 0.0`.
///
/// # Example
///
/// ```rust
/// assert!((detmath::log2(8.0) - 3.0).abs() < 1e-3);
/// ```
#[inline(always)]
pub fn log2(x: f32) -> f32 {
    log(x) * core::f32::consts::LOG2_E
}
