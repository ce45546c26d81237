//! Domain errors raised by the fixed-point library.

use crate::Real;

/// Inputs outside the mathematical domain of a fixed-point function.
///
/// Overflow of the 128-bit container is not represented here: it panics,
/// the same way native integer overflow does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MathError {
    /// `ln` was asked for a value that is zero or negative.
    #[error("logarithm of non-positive value {0}")]
    NonPositiveLogarithm(Real),

    /// `sqrt` was asked for a negative value.
    #[error("square root of negative value {0}")]
    NegativeSquareRoot(Real),

    /// A negative base cannot be raised to a non-integer power.
    #[error("negative base {base} raised to non-integer exponent {exponent}")]
    NegativeBaseFractionalExponent {
        /// The offending base.
        base: Real,
        /// The offending exponent.
        exponent: Real,
    },

    /// Zero raised to a zero-or-negative power has no value.
    #[error("zero raised to non-positive exponent {0}")]
    ZeroToNonPositivePower(Real),

    /// An integer exponent too large for repeated squaring.
    #[error("integer exponent {0} out of range")]
    ExponentOutOfRange(Real),
}
