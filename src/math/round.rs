//! Rounding and modulo kernel
//!
//! Built on integer truncation with sign correction. Above `2^23` in
//! magnitude every f32 is already an integer (the mantissa has no bits left
//! for a fraction), so the rounding functions pass such values through
//! unchanged. That guard also keeps the `i32` casts in range.

use crate::math::sign::abs;

/// Smallest magnitude at which f32 stops representing all integers exactly.
///
/// `2^23`: beyond this every representable value is an integer and
/// [`floor`]/[`ceil`]/[`round`] act as the identity.
pub const INT_EXACT_BOUND: f32 = 8_388_608.0;

/// Largest integer not greater than `x`.
///
/// # Algorithm
///
/// Truncate toward zero via `i32` cast, then subtract 1 when truncation
/// rounded a negative non-integer up. The `2^23` guard keeps the cast
/// exact and in range.
///
/// # Example
///
/// ```rust
/// assert_eq!(detmath::floor(2.8), 2.0);
/// assert_eq!(detmath::floor(-2.2), -3.0);
/// assert_eq!(detmath::floor(-3.0), -3.0);
/// ```
#[inline(always)]
pub fn floor(x: f32) -> f32 {
    if abs(x) >= INT_EXACT_BOUND {
        return x;
    }
    let i = x as i32;
    let t = i as f32;
    if x < 0.0 && x != t {
        return (i - 1) as f32;
    }
    t
}

/// Smallest integer not less than `x`.
///
/// Mirror of [`floor`]: add 1 when truncation rounded a positive
/// non-integer down.
///
/// # Example
///
/// ```rust
/// assert_eq!(detmath::ceil(2.2), 3.0);
/// assert_eq!(detmath::ceil(-2.8), -2.0);
/// ```
#[inline(always)]
pub fn ceil(x: f32) -> f32 {
    if abs(x) >= INT_EXACT_BOUND {
        return x;
    }
    let i = x as i32;
    let t = i as f32;
    if x > 0.0 && x != t {
        return (i + 1) as f32;
    }
    t
}

/// Round half away from zero.
///
/// `round(2.5) == 3.0` and `round(-2.5) == -3.0`, unlike the
/// round-half-even mode of IEEE hardware rounding.
#[inline(always)]
pub fn round(x: f32) -> f32 {
    if x >= 0.0 {
        floor(x + 0.5)
    } else {
        ceil(x - 0.5)
    }
}

/// Fractional part: `x - floor(x)`, always in `[0, 1)` for finite inputs
/// below the integer-exactness bound.
///
/// # Example
///
/// ```rust
/// assert!(detmath::is_near(detmath::fract(1.25), 0.25, 1e-4));
/// assert!(detmath::is_near(detmath::fract(-1.25), 0.75, 1e-4));
/// ```
#[inline(always)]
pub fn fract(x: f32) -> f32 {
    x - floor(x)
}

/// Truncating remainder: sign follows `x`.
///
/// Returns `0.0` when `abs(y)` is below machine epsilon instead of blowing
/// up on the division.
///
/// # Example
///
/// ```rust
/// assert!(detmath::is_near(detmath::fmod(5.5, 2.0), 1.5, 1e-5));
/// assert!(detmath::is_near(detmath::fmod(-5.5, 2.0), -1.5, 1e-5));
/// ```
#[inline(always)]
pub fn fmod(x: f32, y: f32) -> f32 {
    if abs(y) < f32::EPSILON {
        return 0.0;
    }
    x - y * ((x / y) as i32 as f32)
}

/// Floored remainder: sign follows `y`.
///
/// Uses [`floor`] instead of truncation, so `modulo(-1.0, 3.0) == 2.0`.
/// Same epsilon guard on the divisor as [`fmod`].
///
/// # Example
///
/// ```rust
/// assert!(detmath::is_near(detmath::modulo(-1.0, 3.0), 2.0, 1e-5));
/// assert!(detmath::is_near(detmath::modulo(1.0, -3.0), -2.0, 1e-5));
/// ```
#[inline(always)]
pub fn modulo(x: f32, y: f32) -> f32 {
    if abs(y) < f32::EPSILON {
        return 0.0;
    }
    x - y * floor(x / y)
}
