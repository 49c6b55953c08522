//! Square root engine
//!
//! Built around the classic bit-pattern reciprocal square root: an initial
//! guess formed by halving the biased exponent field, then one
//! Newton-Raphson step. `sqrt` itself adds a second refinement on the
//! direct quotient form, which is what keeps its relative error around
//! 1e-4 rather than the 1e-2 of the raw bit hack.

use crate::bits::{from_bits, to_bits};
use crate::math::sign::{abs, max, min};

/// Initial-guess constant: subtracting the halved bit pattern from this
/// approximates `2^(-e/2)` on the exponent field.
const INV_SQRT_MAGIC: u32 = 0x5F37_59DF;

/// Fast reciprocal square root: `1/√x`.
///
/// Returns `0.0` for `x <= 0.0`, the same sentinel policy as [`sqrt`],
/// so neither function has an undefined domain.
///
/// # Algorithm
///
/// 1. Initial guess: `from_bits(0x5F3759DF - (to_bits(x) >> 1))`, which
///    halves the biased exponent and linearizes the mantissa.
/// 2. One Newton-Raphson step: `y·(1.5 - 0.5·x·y·y)`.
///
/// # Error Bounds
///
/// - Maximum relative error after one refinement: ~0.2%
///
/// # Example
///
/// ```rust
/// let inv = detmath::inv_sqrt(25.0);
/// assert!((inv - 0.2).abs() < 1e-2);
/// ```
#[inline(always)]
pub fn inv_sqrt(x: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    let half_x = 0.5 * x;
    let y = from_bits(INV_SQRT_MAGIC - (to_bits(x) >> 1));
    y * (1.5 - half_x * y * y)
}

/// Square root derived from [`inv_sqrt`].
///
/// Returns `0.0` for `x <= 0.0` (domain sentinel, not NaN).
///
/// # Algorithm
///
/// `g = x · inv_sqrt(x)` gives √x to ~0.2%; one more Newton-Raphson step
/// on the direct form, `0.5·(g + x/g)`, squares that error away.
///
/// # Error Bounds
///
/// - Relative error < 1e-3 across `[0, 1e6]`
///
/// # Example
///
/// ```rust
/// let r = detmath::sqrt(16.0);
/// assert!((r - 4.0).abs() < 1e-3);
/// assert_eq!(detmath::sqrt(-1.0), 0.0);
/// ```
#[inline(always)]
pub fn sqrt(x: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    let guess = x * inv_sqrt(x);
    0.5 * (guess + x / guess)
}

/// Robust two-argument hypotenuse: `√(x² + y²)` without intermediate
/// overflow.
///
/// Factors out the larger magnitude so the squared term is at most 1:
/// `max · √(1 + (min/max)²)`. Returns `0.0` when both inputs are zero.
///
/// # Example
///
/// ```rust
/// let c = detmath::hypot(3.0, 4.0);
/// assert!((c - 5.0).abs() < 1e-3);
/// ```
#[inline(always)]
pub fn hypot(x: f32, y: f32) -> f32 {
    let x = abs(x);
    let y = abs(y);
    let lo = min(x, y);
    let hi = max(x, y);
    if hi == 0.0 {
        return 0.0;
    }
    let r = lo / hi;
    hi * sqrt(1.0 + r * r)
}
