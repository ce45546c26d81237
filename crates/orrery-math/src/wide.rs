//! 256-bit intermediates for the fixed-point multiply and divide.
//!
//! Values are passed around as `(high, low)` pairs of `u128` limbs. Only
//! magnitudes are handled here; callers apply signs afterwards so every
//! result truncates toward zero.

const LIMB_MASK: u128 = u64::MAX as u128;

/// Full 256-bit product of two 128-bit magnitudes.
///
/// Splits each operand into two 64-bit halves, computes the four partial
/// products, and recombines them with carries.
pub(crate) const fn widening_mul(a: u128, b: u128) -> (u128, u128) {
    let (a_hi, a_lo) = (a >> 64, a & LIMB_MASK);
    let (b_hi, b_lo) = (b >> 64, b & LIMB_MASK);

    let lo_lo = a_lo * b_lo;
    let lo_hi = a_lo * b_hi;
    let hi_lo = a_hi * b_lo;
    let hi_hi = a_hi * b_hi;

    let mid = (lo_lo >> 64) + (lo_hi & LIMB_MASK) + (hi_lo & LIMB_MASK);
    let low = (lo_lo & LIMB_MASK) | (mid << 64);
    let high = hi_hi + (lo_hi >> 64) + (hi_lo >> 64) + (mid >> 64);
    (high, low)
}

/// Shift a 256-bit value right by `bits` (1..128), or `None` if the result
/// does not fit in 128 bits.
pub(crate) const fn shr_narrow(high: u128, low: u128, bits: u32) -> Option<u128> {
    if high >> bits != 0 {
        return None;
    }
    Some((high << (128 - bits)) | (low >> bits))
}

/// Quotient of the 256-bit value `(high, low)` by `divisor`.
///
/// Returns `None` for a zero divisor or a quotient wider than 128 bits.
/// The remainder is discarded, so the quotient is truncated.
pub(crate) fn div_wide(high: u128, low: u128, divisor: u128) -> Option<u128> {
    if divisor == 0 || high >= divisor {
        return None;
    }
    if high == 0 {
        return Some(low / divisor);
    }

    // Restoring long division; `rem < divisor` holds at the top of every step.
    let mut rem = high;
    let mut quotient = 0u128;
    for bit in (0..128).rev() {
        let carry = rem >> 127;
        rem = (rem << 1) | ((low >> bit) & 1);
        quotient <<= 1;
        if carry == 1 || rem >= divisor {
            rem = rem.wrapping_sub(divisor);
            quotient |= 1;
        }
    }
    Some(quotient)
}

/// Floor square root of the 256-bit value `(high, low)`.
///
/// `high` must be below `2^126`. Newton's iteration from a power of two at
/// or above the root, stopping once the estimate no longer decreases.
pub(crate) fn isqrt_wide(high: u128, low: u128) -> u128 {
    if high == 0 {
        return low.isqrt();
    }
    debug_assert!(high >> 126 == 0, "isqrt_wide input too wide");
    let bits = 256 - high.leading_zeros();
    let mut root = 1u128 << bits.div_ceil(2);
    loop {
        let Some(quotient) = div_wide(high, low, root) else {
            return root;
        };
        let next = (root + quotient) / 2;
        if next >= root {
            return root;
        }
        root = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widening_mul_small() {
        assert_eq!(widening_mul(6, 7), (0, 42));
    }

    #[test]
    fn test_widening_mul_carries_into_high_limb() {
        // (2^64) * (2^64) = 2^128
        assert_eq!(widening_mul(1 << 64, 1 << 64), (1, 0));
        // (2^128 - 1)^2 = 2^256 - 2^129 + 1
        let (high, low) = widening_mul(u128::MAX, u128::MAX);
        assert_eq!(high, u128::MAX - 1);
        assert_eq!(low, 1);
    }

    #[test]
    fn test_shr_narrow_recombines_limbs() {
        assert_eq!(shr_narrow(1, 0, 1), Some(1 << 127));
        assert_eq!(shr_narrow(0, 1 << 50, 40), Some(1 << 10));
        assert_eq!(shr_narrow(1 << 40, 0, 40), None);
    }

    #[test]
    fn test_div_wide_matches_narrow_division() {
        assert_eq!(div_wide(0, 1000, 7), Some(142));
        assert_eq!(div_wide(0, 5, 0), None);
    }

    #[test]
    fn test_div_wide_inverts_widening_mul() {
        let a = 0x1234_5678_9abc_def0_1122_3344_5566_7788u128;
        let b = 0x0fed_cba9_8765_4321u128;
        let (high, low) = widening_mul(a, b);
        assert_eq!(div_wide(high, low, b), Some(a));
    }

    #[test]
    fn test_div_wide_rejects_oversized_quotient() {
        assert_eq!(div_wide(5, 0, 5), None);
    }

    #[test]
    fn test_isqrt_wide_is_floor_root() {
        // (2^100 + 3)^2 and one less than it.
        let root = (1u128 << 100) + 3;
        let (high, low) = widening_mul(root, root);
        assert_eq!(isqrt_wide(high, low), root);
        assert_eq!(isqrt_wide(high, low - 1), root - 1, "one below a square");
    }

    #[test]
    fn test_isqrt_wide_narrow_input() {
        assert_eq!(isqrt_wide(0, 99), 9);
        assert_eq!(isqrt_wide(0, 0), 0);
    }
}
