//! Floating-point scalar abstraction.
//!
//! Every numeric component of the crate (model, loss, gradient estimators,
//! optimizer, trainer) is generic over [`ScalarOps`], so the same training
//! loop runs in single or double precision.

use std::fmt::{Debug, Display};

/// Trait for scalar operations required by the training code.
///
/// Implemented for `f32` and `f64`. Arithmetic comes from the standard operator
/// traits; the rest is the minimal set needed for losses, gradient estimation and
/// reporting.
///
/// # Example
/// ```
/// use linreg_fd::ScalarOps;
///
/// assert_eq!(f64::zero(), 0.0);
/// assert!(!ScalarOps::is_finite(f64::NAN));
/// assert_eq!(f32::from_f64(0.5), 0.5f32);
/// ```
pub trait ScalarOps:
    Clone
    + Copy
    + Send
    + Sync
    + Debug
    + Display
    + PartialOrd
    + std::ops::Add<Output = Self>
    + std::ops::Mul<Output = Self>
    + std::ops::Sub<Output = Self>
    + std::ops::Div<Output = Self>
    + std::ops::Neg<Output = Self>
{
    /// Additive identity.
    fn zero() -> Self;

    /// Converts a host `f64` into this scalar type (rounding for `f32`).
    fn from_f64(v: f64) -> Self;

    /// Widens this scalar to `f64` for logging and comparisons.
    fn to_f64(self) -> f64;

    fn is_finite(self) -> bool;
}

impl ScalarOps for f64 {
    fn zero() -> Self {
        0.0
    }

    fn from_f64(v: f64) -> Self {
        v
    }

    fn to_f64(self) -> f64 {
        self
    }

    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
}

/// `f32` implementation. This is the precision the demo binary trains in.
impl ScalarOps for f32 {
    fn zero() -> Self {
        0.0
    }

    fn from_f64(v: f64) -> Self {
        v as f32
    }

    fn to_f64(self) -> f64 {
        self as f64
    }

    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }
}
