//! Sine, cosine, tangent, and angle conversion
//!
//! Two-stage range reduction keeps the polynomial honest: first subtract
//! whole turns to land in `[-π, π]`, then reflect across `±π` into
//! `[-π/2, π/2]`, the only interval the minimax coefficients are fitted
//! for.

use crate::math::round::round;
use crate::math::sign::abs;

// Odd minimax coefficients for sin on [-π/2, π/2], terms through x⁹
const SIN_C3: f32 = -0.166_666_66;
const SIN_C5: f32 = 0.008_333_331_5;
const SIN_C7: f32 = -0.000_198_409;
const SIN_C9: f32 = 0.000_002_752_6;

/// Threshold on `|cos(x)|` below which [`tan`] reports its asymptote
/// sentinel.
const TAN_COS_MIN: f32 = 1e-5;

/// Sine by periodic range reduction and an odd minimax polynomial.
///
/// # Algorithm
///
/// 1. Subtract whole turns: `x - round(x/τ)·τ` lands in `[-π, π]`.
/// 2. Fold into `[-π/2, π/2]` with `sin(π - x) = sin(x)` on each side.
/// 3. Horner-evaluate the odd polynomial `x·(1 + x²·(c3 + x²·(c5 + …)))`
///    with terms through `x⁹`.
///
/// # Error Bounds
///
/// - Absolute error < 1e-3 for inputs within a few thousand radians of
///   zero. Far beyond that the turn count itself loses integer precision
///   (see [`crate::INT_EXACT_BOUND`]) and accuracy degrades with it.
///
/// # Example
///
/// ```rust
/// use core::f32::consts::{FRAC_PI_2, PI};
///
/// assert!(detmath::sin(0.0).abs() < 1e-3);
/// assert!((detmath::sin(FRAC_PI_2) - 1.0).abs() < 1e-3);
/// assert!(detmath::sin(PI).abs() < 1e-3);
/// assert!((detmath::sin(1.5 * PI) + 1.0).abs() < 1e-3);
/// ```
#[inline(always)]
pub fn sin(x: f32) -> f32 {
    use core::f32::consts::{FRAC_PI_2, PI, TAU};

    // Stage 1: reduce by whole turns into [-π, π]
    let turns = round(x * (1.0 / TAU));
    let mut r = x - turns * TAU;

    // Stage 2: reflect into [-π/2, π/2]
    if r > FRAC_PI_2 {
        r = PI - r;
    } else if r < -FRAC_PI_2 {
        r = -PI - r;
    }

    // Odd minimax polynomial, Horner form
    let r2 = r * r;
    r * (1.0 + r2 * (SIN_C3 + r2 * (SIN_C5 + r2 * (SIN_C7 + r2 * SIN_C9))))
}

/// Cosine via the phase-shift identity `cos(x) = sin(x + π/2)`.
///
/// One polynomial serves both functions; the error bounds match [`sin`].
///
/// # Example
///
/// ```rust
/// use core::f32::consts::PI;
///
/// assert!((detmath::cos(0.0) - 1.0).abs() < 1e-3);
/// assert!((detmath::cos(PI) + 1.0).abs() < 1e-3);
/// ```
#[inline(always)]
pub fn cos(x: f32) -> f32 {
    sin(x + core::f32::consts::FRAC_PI_2)
}

/// Tangent as `sin(x)/cos(x)`.
///
/// Returns `0.0` when `|cos(x)|` drops below a fixed threshold: an
/// asymptote sentinel rather than a blow-up toward infinity.
///
/// # Example
///
/// ```rust
/// use core::f32::consts::FRAC_PI_4;
///
/// assert!((detmath::tan(FRAC_PI_4) - 1.0).abs() < 5e-3);
/// assert!((detmath::tan(0.0)).abs() < 1e-4);
/// ```
#[inline(always)]
pub fn tan(x: f32) -> f32 {
    let c = cos(x);
    if abs(c) < TAN_COS_MIN {
        return 0.0;
    }
    sin(x) / c
}

/// Degrees to radians: `x · π/180`.
#[inline(always)]
pub fn deg2rad(deg: f32) -> f32 {
    deg * (core::f32::consts::PI / 180.0)
}

/// Radians to degrees: `x · 180/π`.
#[inline(always)]
pub fn rad2deg(rad: f32) -> f32 {
    rad * (180.0 / core::f32::consts::PI)
}
