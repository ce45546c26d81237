//! Series-based transcendental functions on [`Real`].
//!
//! Every series runs for a fixed, documented number of terms and stops early
//! once a term truncates to zero. Not converging within the budget is not an
//! error; the partial sum is returned as is.

use crate::{FRAC_BITS, MathError, Real, wide};

/// Default term budget for [`Real::ln`].
pub const LN_ITERATIONS: u32 = 100;
/// Default term budget for [`Real::exp`].
pub const EXP_ITERATIONS: u32 = 100;
/// Default term budget for [`Real::sin`] and [`Real::cos`].
pub const SIN_ITERATIONS: u32 = 15;
/// Term budget for the arctangent series.
pub const ATAN_ITERATIONS: u32 = 30;

/// Largest power-of-two scaling `exp` can apply to a mantissa below 2.
const MAX_EXP_SHIFT: i128 = 126 - FRAC_BITS as i128;

impl Real {
    /// Natural logarithm with the default term budget.
    pub fn ln(self) -> Result<Real, MathError> {
        self.ln_limited(LN_ITERATIONS)
    }

    /// Natural logarithm using at most `iterations` series terms.
    ///
    /// The argument is rescaled by a power of two into `[1, 2)`, the
    /// mantissa goes through the `atanh` series
    /// `ln m = 2 Σ y^(2k+1) / (2k+1)` with `y = (m - 1) / (m + 1)`, and the
    /// shift is added back as a multiple of `ln 2`.
    pub fn ln_limited(self, iterations: u32) -> Result<Real, MathError> {
        let raw = self.to_raw();
        if raw <= 0 {
            return Err(MathError::NonPositiveLogarithm(self));
        }

        let top_bit = 127 - raw.leading_zeros() as i128;
        let shift = top_bit - FRAC_BITS as i128;
        let mantissa = Real::from_raw(if shift >= 0 {
            raw >> shift
        } else {
            raw << -shift
        });

        let y = (mantissa - Real::ONE) / (mantissa + Real::ONE);
        let y_squared = y * y;
        let mut power = y;
        let mut sum = Real::ZERO;
        for k in 0..iterations as i128 {
            let term = power.to_raw() / (2 * k + 1);
            if term == 0 {
                break;
            }
            sum += Real::from_raw(term);
            power *= y_squared;
        }

        Ok(sum + sum + Real::from_raw(Real::LN_2.to_raw() * shift))
    }

    /// `e^self` with the default term budget.
    ///
    /// # Panics
    ///
    /// Panics if the result exceeds the fixed-point range (`self` above ~59).
    pub fn exp(self) -> Real {
        self.exp_limited(EXP_ITERATIONS)
    }

    /// `e^self` using at most `iterations` Taylor terms.
    ///
    /// `self = k·ln 2 + r` with `0 <= r < ln 2`; the series runs on `r` and
    /// the result is shifted by `k`.
    ///
    /// # Panics
    ///
    /// Panics if the result exceeds the fixed-point range.
    pub fn exp_limited(self, iterations: u32) -> Real {
        let k = self.to_raw().div_euclid(Real::LN_2.to_raw());
        let r = Real::from_raw(self.to_raw().rem_euclid(Real::LN_2.to_raw()));

        let mut sum = Real::ONE;
        let mut term = Real::ONE;
        for n in 1..=iterations as i128 {
            term = Real::from_raw((term * r).to_raw() / n);
            if term == Real::ZERO {
                break;
            }
            sum += term;
        }

        if k > MAX_EXP_SHIFT {
            panic!("fixed-point exp overflow: e^{self}");
        }
        if k >= 0 {
            Real::from_raw(sum.to_raw() << k)
        } else if k < -127 {
            Real::ZERO
        } else {
            Real::from_raw(sum.to_raw() >> -k)
        }
    }

    /// `self` raised to a real `exponent`.
    ///
    /// Zero exponents give one, a zero base gives zero for positive
    /// exponents, and integral exponents go through [`Real::powi`]. Anything
    /// else is `exp(exponent · ln self)`, which needs a positive base.
    pub fn pow(self, exponent: Real) -> Result<Real, MathError> {
        if exponent == Real::ZERO {
            return Ok(Real::ONE);
        }
        if self == Real::ZERO {
            return if exponent > Real::ZERO {
                Ok(Real::ZERO)
            } else {
                Err(MathError::ZeroToNonPositivePower(exponent))
            };
        }
        if exponent.fract() == Real::ZERO {
            let whole = i64::try_from(exponent.to_int())
                .map_err(|_| MathError::ExponentOutOfRange(exponent))?;
            return Ok(self.powi(whole));
        }
        if self.is_negative() {
            return Err(MathError::NegativeBaseFractionalExponent {
                base: self,
                exponent,
            });
        }
        Ok((exponent * self.ln()?).exp())
    }

    /// Square root, exact to the last fractional bit (truncated).
    ///
    /// `sqrt(0)` is zero; only negative inputs are rejected.
    pub fn sqrt(self) -> Result<Real, MathError> {
        if self.is_negative() {
            return Err(MathError::NegativeSquareRoot(self));
        }
        Ok(sqrt_magnitude(self.to_raw().unsigned_abs()))
    }

    /// Sine with the default term budget.
    pub fn sin(self) -> Real {
        self.sin_limited(SIN_ITERATIONS)
    }

    /// Sine using at most `iterations` Taylor terms.
    ///
    /// The angle is wrapped into `[0, 2π)` and folded into `[0, π/2]`
    /// before the series runs.
    pub fn sin_limited(self, iterations: u32) -> Real {
        let mut x = self.rem_euclid(Real::TWO_PI);
        let mut negate = false;
        if x > Real::PI {
            x -= Real::PI;
            negate = true;
        }
        if x > Real::HALF_PI {
            x = Real::PI - x;
        }

        let x_squared = x * x;
        let mut term = x;
        let mut sum = x;
        for n in 1..iterations as i128 {
            let denominator = (2 * n) * (2 * n + 1);
            term = Real::from_raw(-(term * x_squared).to_raw() / denominator);
            if term == Real::ZERO {
                break;
            }
            sum += term;
        }

        if negate { -sum } else { sum }
    }

    /// Cosine, as `sin(self + π/2)`.
    pub fn cos(self) -> Real {
        (self + Real::HALF_PI).sin()
    }

    /// Tangent, as `sin / cos`.
    ///
    /// # Panics
    ///
    /// Panics if the cosine truncates to exactly zero.
    pub fn tan(self) -> Real {
        self.sin() / self.cos()
    }

    /// Arctangent in `[-π/2, π/2]`.
    pub fn atan(self) -> Real {
        if self.is_negative() {
            return -(-self).atan();
        }
        if self > Real::ONE {
            return Real::HALF_PI - (Real::ONE / self).atan();
        }

        // Half-angle reduction: atan(x) = 2·atan(x / (1 + sqrt(1 + x²))).
        let root = sqrt_magnitude((Real::ONE + self * self).to_raw().unsigned_abs());
        let x = self / (Real::ONE + root);
        let x_squared = x * x;

        let mut power = x;
        let mut sum = x;
        for n in 1..ATAN_ITERATIONS as i128 {
            power *= x_squared;
            if power == Real::ZERO {
                break;
            }
            let term = Real::from_raw(power.to_raw() / (2 * n + 1));
            if n % 2 == 1 {
                sum -= term;
            } else {
                sum += term;
            }
        }
        sum + sum
    }

    /// Angle of the point `(x, y)` in `(-π, π]`. `atan2(0, 0)` is zero.
    pub fn atan2(y: Real, x: Real) -> Real {
        if x == Real::ZERO && y == Real::ZERO {
            return Real::ZERO;
        }
        if x.abs() >= y.abs() {
            let base = (y / x).atan();
            if !x.is_negative() {
                base
            } else if !y.is_negative() {
                base + Real::PI
            } else {
                base - Real::PI
            }
        } else {
            let base = (x / y).atan();
            if y.is_negative() {
                -Real::HALF_PI - base
            } else {
                Real::HALF_PI - base
            }
        }
    }
}

fn sqrt_magnitude(magnitude: u128) -> Real {
    // Below 2^87 the value can be pre-scaled by 2^40 without overflow.
    let root = if magnitude < 1 << 87 {
        (magnitude << FRAC_BITS).isqrt()
    } else {
        wide::isqrt_wide(magnitude >> (128 - FRAC_BITS), magnitude << FRAC_BITS)
    };
    Real::from_raw(root as i128)
}
