//! Scalar approximation kernels
//!
//! The numerical heart of the crate: every function here is built from bit
//! manipulation, polynomial approximation, or Newton-Raphson refinement,
//! never from a platform math routine. That is what makes results
//! bit-identical across compilers and architectures.
//!
//! # Modules
//!
//! - `sign`: abs, sign, copysign, min/max/clamp, tolerance comparison
//! - `round`: floor, ceil, round, fract, fmod, modulo
//! - `sqrt`: square root, reciprocal square root, hypotenuse
//! - `log`: natural and base-2 logarithm
//! - `exp`: exponential and power
//! - `trig`: sine, cosine, tangent, degree/radian conversion
//! - `atan`: arctangent family and arcsine/arccosine

pub mod atan;
pub mod exp;
pub mod log;
pub mod round;
pub mod sign;
pub mod sqrt;
pub mod trig;

// Re-export everything one level up
pub use self::atan::{acos, asin, atan, atan2};
pub use self::exp::{exp, pow};
pub use self::log::{log, log2};
pub use self::round::{ceil, floor, fmod, fract, modulo, round, INT_EXACT_BOUND};
pub use self::sign::{abs, clamp, copysign, is_near, max, min, sign};
pub use self::sqrt::{hypot, inv_sqrt, sqrt};
pub use self::trig::{cos, deg2rad, rad2deg, sin, tan};
