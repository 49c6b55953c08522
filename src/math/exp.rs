//! Exponential and power functions
//!
//! `exp` splits its argument into a whole number of octaves plus a small
//! remainder, approximates `e^r` with a cubic, and applies the octave count
//! by adding it directly into the result's biased exponent field, which
//! is a multiply-free `· 2^n`. The saturation cutoffs below guarantee the
//! injected exponent always stays inside the valid biased range.

use crate::bits::{from_bits, to_bits, EXP_SHIFT};
use crate::math::log::log;
use crate::math::round::round;

/// `ln(f32::MAX)`: inputs above this saturate to `INFINITY`.
const EXP_OVERFLOW: f32 = 88.722_84;

/// `ln(2^-126)` (smallest positive normal): inputs below this saturate
/// to `0.0`.
const EXP_UNDERFLOW: f32 = -87.336_54;

/// Natural exponential.
///
/// Saturates instead of wrapping: `INFINITY` above `ln(f32::MAX)`, `0.0`
/// below `ln(2⁻¹²⁶)`. Between the cutoffs the result is always a normal
/// finite float.
///
/// # Algorithm
///
/// ```text
/// x·log₂e = n + d      n = round(x·log₂e), |d| ≤ 1/2
/// e^x = e^r · 2^n      r = d·ln(2), |r| ≤ ln(2)/2
/// ```
///
/// `e^r` is the cubic `1 + r + r²/2 + r³/6`; the `2^n` scale is applied by
/// adding `n` into the biased exponent field of the cubic's bit pattern.
///
/// # Error Bounds
///
/// - Relative error < 0.3% over the full finite range
///
/// # Example
///
/// ```rust
/// assert!((detmath::exp(0.0) - 1.0).abs() < 1e-4);
/// assert!((detmath::exp(1.0) - core::f32::consts::E).abs() < 1e-2);
/// assert_eq!(detmath::exp(1000.0), f32::INFINITY);
/// assert_eq!(detmath::exp(-1000.0), 0.0);
/// ```
#[inline(always)]
pub fn exp(x: f32) -> f32 {
    if x > EXP_OVERFLOW {
        return f32::INFINITY;
    }
    if x < EXP_UNDERFLOW {
        return 0.0;
    }

    let px = x * core::f32::consts::LOG2_E;
    let n = round(px);
    let r = (px - n) * core::f32::consts::LN_2;

    // Cubic for e^r on |r| ≤ ln(2)/2
    let r2 = r * r;
    let f = 1.0 + r + 0.5 * r2 + r * r2 * 0.166_666_66;

    // Scale by 2^n: add n to the biased exponent field. Within the
    // saturation cutoffs the sum stays in [1, 254], so the result is a
    // normal float.
    let n = n as i32;
    from_bits(to_bits(f).wrapping_add((n << EXP_SHIFT) as u32))
}

/// Power function: `x^y` as `exp(y · log(x))`.
///
/// Returns `0.0` for `x <= 0.0` (no complex or negative-base results) and
/// `1.0` for `y == 0.0`, checked in that order after the base guard.
///
/// # Error Bounds
///
/// - Relative error < 0.5% (compounds the `log` and `exp` errors, scaled
///   by `y`)
///
/// # Example
///
/// ```rust
/// assert!((detmath::pow(2.0, 3.0) - 8.0).abs() / 8.0 < 1e-2);
/// assert_eq!(detmath::pow(-2.0, 3.0), 0.0);
/// assert_eq!(detmath::pow(5.0, 0.0), 1.0);
/// ```
#[inline(always)]
pub fn pow(x: f32, y: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if y == 0.0 {
        return 1.0;
    }
    exp(y * log(x))
}
