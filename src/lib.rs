#![no_std]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! detmath: deterministic scalar f32 math kernel
//!
//! Reimplements the elementary functions (square root, logarithm,
//! exponential, the trigonometric family) and IEEE 754 bit-inspection
//! primitives from first principles (bit manipulation, polynomial
//! approximation, Newton-Raphson refinement) with no platform math
//! runtime anywhere in the call graph.
//!
//! # Why
//!
//! `libm`/hardware transcendentals are allowed to differ between
//! platforms and compiler versions. Everything here is ordinary f32
//! arithmetic on explicitly chosen constants, so results are bit-for-bit
//! identical wherever IEEE 754 single precision holds: lockstep
//! simulation, replay systems, cross-platform procedural generation.
//!
//! # Properties
//!
//! - **Pure**: every function maps input values to an output value, with
//!   no state, no allocation, no I/O. Safe to call from any thread.
//! - **Sentinel errors**: domain violations return a fixed value
//!   (`sqrt(-1) == 0.0`, `log(0.0) == NEG_INFINITY`) instead of
//!   propagating NaN or panicking. Each function documents its policy.
//! - **`no_std`**: depends on `core` only.
//!
//! # Accuracy
//!
//! These are game-grade approximations, not correctly-rounded results:
//! expect ~1e-3 absolute error from the trigonometric kernels and <0.5%
//! relative error from exp/log/pow. Each function documents its bounds;
//! the `tests/accuracy.rs` suite pins them against `libm`.
//!
//! # Quick Start
//!
//! ```rust
//! use detmath::{deg2rad, hypot, sin, Vec3};
//!
//! // Scalar kernel
//! let c = hypot(3.0, 4.0);
//! assert!((c - 5.0).abs() < 1e-3);
//!
//! let s = sin(deg2rad(90.0));
//! assert!((s - 1.0).abs() < 1e-3);
//!
//! // Vector layer composes over the same kernel
//! let n = Vec3::new(0.0, 10.0, 0.0).normalize();
//! assert!((n.length() - 1.0).abs() < 1e-3);
//! ```

// IEEE 754 bit view: the one reinterpretation primitive everything else
// builds on
pub mod bits;

// Approximation kernels
pub mod math;

// Interpolation and easing
pub mod interpolate;

// Vector layer, composing strictly over the scalar kernel
pub mod vec2;
pub mod vec3;

// Flat re-export surface: `detmath::sin`, `detmath::Vec3`, ...
pub use bits::{from_bits, is_inf, is_nan, to_bits};
pub use interpolate::{inv_lerp, lerp, remap, smootherstep, smoothstep, step};
pub use math::{
    abs, acos, asin, atan, atan2, ceil, clamp, copysign, cos, deg2rad, exp, floor, fmod, fract,
    hypot, inv_sqrt, is_near, log, log2, max, min, modulo, pow, rad2deg, round, sign, sin, sqrt,
    tan, INT_EXACT_BOUND,
};
pub use vec2::Vec2;
pub use vec3::Vec3;
