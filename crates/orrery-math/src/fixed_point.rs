use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Shr, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::wide::{div_wide, shr_narrow, widening_mul};

/// Number of fractional bits in a [`Real`].
pub const FRAC_BITS: u32 = 40;

const ONE_RAW: i128 = 1 << FRAC_BITS;
const HALF_BIT: u128 = 1 << (FRAC_BITS - 1);
const DECIMAL_DIGITS: u32 = 12;

/// Signed fixed-point number with 40 fractional bits.
///
/// Layout: [88 integer bits][40 fractional bits]
///
/// The raw i128 value equals (real_value × 2⁴⁰).
///
/// Range: approximately ±1.5×10²⁶ (integer part)
/// Resolution: 2⁻⁴⁰ ≈ 9.09×10⁻¹³
///
/// Addition and subtraction are native integer operations. Multiplication and
/// division widen to 256 bits and truncate toward zero when rescaling.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Real {
    raw: i128,
}

impl Real {
    /// 0.0
    pub const ZERO: Real = Real { raw: 0 };
    /// 1.0
    pub const ONE: Real = Real { raw: ONE_RAW };
    /// 0.5
    pub const HALF: Real = Real { raw: ONE_RAW >> 1 };
    /// 2.0
    pub const TWO: Real = Real { raw: ONE_RAW << 1 };
    /// π, rounded to the nearest representable value.
    pub const PI: Real = Real {
        raw: 3_454_217_652_358,
    };
    /// 2π, rounded independently of [`Real::PI`].
    pub const TWO_PI: Real = Real {
        raw: 6_908_435_304_715,
    };
    /// π/2
    pub const HALF_PI: Real = Real {
        raw: 1_727_108_826_179,
    };
    /// ln 2
    pub const LN_2: Real = Real {
        raw: 762_123_384_786,
    };

    /// Create from the raw i128 representation directly.
    pub const fn from_raw(raw: i128) -> Self {
        Self { raw }
    }

    /// Access the raw i128 value.
    pub const fn to_raw(self) -> i128 {
        self.raw
    }

    /// Create from a whole integer (`toReal`).
    ///
    /// # Panics
    ///
    /// Panics if `value` does not fit in the 88 integer bits.
    pub const fn from_int(value: i128) -> Self {
        match value.checked_mul(ONE_RAW) {
            Some(raw) => Self { raw },
            None => panic!("integer out of fixed-point range"),
        }
    }

    /// Integer part, truncated toward zero (`fromReal`).
    pub const fn to_int(self) -> i128 {
        self.raw / ONE_RAW
    }

    /// `n / d` computed as `from_int(n) / from_int(d)`.
    pub fn fraction(numerator: i128, denominator: i128) -> Self {
        Self::from_int(numerator) / Self::from_int(denominator)
    }

    /// Integer part as a `Real`, keeping the sign (toward zero).
    pub const fn trunc(self) -> Self {
        Self {
            raw: self.raw - self.raw % ONE_RAW,
        }
    }

    /// Fractional part, carrying the sign of `self`.
    pub const fn fract(self) -> Self {
        Self {
            raw: self.raw % ONE_RAW,
        }
    }

    /// Largest integer not greater than `self`.
    pub const fn floor(self) -> Self {
        Self {
            raw: self.raw - self.raw.rem_euclid(ONE_RAW),
        }
    }

    /// Round to the nearest integer, halves away from zero.
    ///
    /// Decided by the high bit of the fractional magnitude.
    pub const fn round(self) -> Self {
        let whole = self.trunc();
        let fraction_bits = (self.raw % ONE_RAW).unsigned_abs();
        if fraction_bits & HALF_BIT == 0 {
            whole
        } else if self.raw < 0 {
            Self {
                raw: whole.raw - ONE_RAW,
            }
        } else {
            Self {
                raw: whole.raw + ONE_RAW,
            }
        }
    }

    /// Absolute value.
    pub const fn abs(self) -> Self {
        Self {
            raw: self.raw.abs(),
        }
    }

    /// `-1`, `0` or `1` as an integer.
    pub const fn signum(self) -> i128 {
        self.raw.signum()
    }

    /// Whether the value is strictly below zero.
    pub const fn is_negative(self) -> bool {
        self.raw < 0
    }

    /// Non-negative remainder of `self / modulus`, used to wrap angles.
    pub const fn rem_euclid(self, modulus: Real) -> Self {
        Self {
            raw: self.raw.rem_euclid(modulus.raw),
        }
    }

    /// Multiply, or `None` if the product does not fit.
    pub fn checked_mul(self, rhs: Real) -> Option<Real> {
        let negative = (self.raw < 0) != (rhs.raw < 0);
        let (high, low) = widening_mul(self.raw.unsigned_abs(), rhs.raw.unsigned_abs());
        let magnitude = shr_narrow(high, low, FRAC_BITS)?;
        signed(magnitude, negative)
    }

    /// Divide, or `None` on a zero divisor or a quotient that does not fit.
    pub fn checked_div(self, rhs: Real) -> Option<Real> {
        let negative = (self.raw < 0) != (rhs.raw < 0);
        let dividend = self.raw.unsigned_abs();
        let high = dividend >> (128 - FRAC_BITS);
        let low = dividend << FRAC_BITS;
        let magnitude = div_wide(high, low, rhs.raw.unsigned_abs())?;
        signed(magnitude, negative)
    }

    /// Integer power by repeated squaring. Negative exponents take the
    /// reciprocal of the positive power.
    ///
    /// # Panics
    ///
    /// Panics on overflow, or for a zero base with a negative exponent.
    pub fn powi(self, exponent: i64) -> Real {
        let mut base = self;
        let mut remaining = exponent.unsigned_abs();
        let mut result = Real::ONE;
        while remaining > 0 {
            if remaining & 1 == 1 {
                result *= base;
            }
            remaining >>= 1;
            if remaining > 0 {
                base *= base;
            }
        }
        if exponent < 0 {
            Real::ONE / result
        } else {
            result
        }
    }

    /// Lossy conversion for presentation layers. Never used by generators.
    pub fn to_f64(self) -> f64 {
        self.raw as f64 / ONE_RAW as f64
    }
}

fn signed(magnitude: u128, negative: bool) -> Option<Real> {
    if negative {
        (magnitude <= i128::MIN.unsigned_abs()).then(|| Real {
            raw: (magnitude as i128).wrapping_neg(),
        })
    } else {
        i128::try_from(magnitude).ok().map(Real::from_raw)
    }
}

/// Exact decimal rendering, truncated to 12 fractional digits.
impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = self.raw.unsigned_abs();
        let whole = magnitude >> FRAC_BITS;
        let fraction = magnitude & (ONE_RAW as u128 - 1);
        let digits = (fraction * 10u128.pow(DECIMAL_DIGITS)) >> FRAC_BITS;
        let sign = if self.raw < 0 { "-" } else { "" };
        write!(
            f,
            "{sign}{whole}.{digits:0width$}",
            width = DECIMAL_DIGITS as usize
        )
    }
}

impl From<i64> for Real {
    fn from(value: i64) -> Self {
        Self::from_int(value as i128)
    }
}

impl From<i32> for Real {
    fn from(value: i32) -> Self {
        Self::from_int(value as i128)
    }
}

impl Add for Real {
    type Output = Real;

    fn add(self, rhs: Real) -> Self::Output {
        Real {
            raw: self.raw + rhs.raw,
        }
    }
}

impl Sub for Real {
    type Output = Real;

    fn sub(self, rhs: Real) -> Self::Output {
        Real {
            raw: self.raw - rhs.raw,
        }
    }
}

impl Mul for Real {
    type Output = Real;

    fn mul(self, rhs: Real) -> Self::Output {
        match self.checked_mul(rhs) {
            Some(product) => product,
            None => panic!("fixed-point multiplication overflow: {self} * {rhs}"),
        }
    }
}

impl Div for Real {
    type Output = Real;

    fn div(self, rhs: Real) -> Self::Output {
        match self.checked_div(rhs) {
            Some(quotient) => quotient,
            None => panic!("fixed-point division overflow or division by zero: {self} / {rhs}"),
        }
    }
}

/// Arithmetic shift of the raw value: divides by 2ⁿ, rounding toward −∞.
impl Shr<u32> for Real {
    type Output = Real;

    fn shr(self, bits: u32) -> Self::Output {
        Real {
            raw: self.raw >> bits.min(127),
        }
    }
}

impl Neg for Real {
    type Output = Real;

    fn neg(self) -> Self::Output {
        Real { raw: -self.raw }
    }
}

impl AddAssign for Real {
    fn add_assign(&mut self, rhs: Real) {
        self.raw += rhs.raw;
    }
}

impl SubAssign for Real {
    fn sub_assign(&mut self, rhs: Real) {
        self.raw -= rhs.raw;
    }
}

impl MulAssign for Real {
    fn mul_assign(&mut self, rhs: Real) {
        *self = *self * rhs;
    }
}

impl DivAssign for Real {
    fn div_assign(&mut self, rhs: Real) {
        *self = *self / rhs;
    }
}
