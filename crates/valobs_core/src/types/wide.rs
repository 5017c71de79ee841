//! Exact `value * numerator / denominator` with a single half-even rounding.
//!
//! Money scaling multiplies an `i64` minor-unit count by a decimal mantissa
//! of up to 96 bits, so the intermediate product needs up to 160 bits. It is
//! held in a 256-bit unsigned integer and divided with a restoring long
//! division, so the remainder is exact when the rounding decision is made.

use std::cmp::Ordering;

const LOW_64: u128 = u64::MAX as u128;

/// Unsigned 256-bit integer as two 128-bit halves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct U256 {
    hi: u128,
    lo: u128,
}

impl U256 {
    /// Full product of two `u128` values.
    fn mul(a: u128, b: u128) -> Self {
        let (a0, a1) = (a & LOW_64, a >> 64);
        let (b0, b1) = (b & LOW_64, b >> 64);

        let p00 = a0 * b0;
        let p01 = a0 * b1;
        let p10 = a1 * b0;
        let p11 = a1 * b1;

        let mid = (p00 >> 64) + (p01 & LOW_64) + (p10 & LOW_64);
        Self {
            hi: p11 + (p01 >> 64) + (p10 >> 64) + (mid >> 64),
            lo: (p00 & LOW_64) | (mid << 64),
        }
    }

    fn bit(&self, index: u32) -> u128 {
        if index >= 128 {
            (self.hi >> (index - 128)) & 1
        } else {
            (self.lo >> index) & 1
        }
    }

    fn set_bit(&mut self, index: u32) {
        if index >= 128 {
            self.hi |= 1 << (index - 128);
        } else {
            self.lo |= 1 << index;
        }
    }

    /// Quotient and remainder of division by a non-zero `u128`.
    fn div_rem(&self, divisor: u128) -> (Self, u128) {
        let mut quotient = Self { hi: 0, lo: 0 };
        let mut remainder: u128 = 0;
        for index in (0..256).rev() {
            // The remainder is below the divisor, so one shifted-out bit
            // means the shifted value is at least the divisor.
            let carry = remainder >> 127;
            remainder = (remainder << 1) | self.bit(index);
            if carry == 1 || remainder >= divisor {
                remainder = remainder.wrapping_sub(divisor);
                quotient.set_bit(index);
            }
        }
        (quotient, remainder)
    }
}

/// Computes `value * numerator / denominator`, rounded half-to-even to an
/// integer, or `None` if the denominator is zero or the result leaves `i64`.
pub(crate) fn mul_div_half_even(value: i64, numerator: i128, denominator: i128) -> Option<i64> {
    if denominator == 0 {
        return None;
    }
    let negative = (value < 0) != ((numerator < 0) != (denominator < 0));
    let divisor = denominator.unsigned_abs();

    let product = U256::mul(u128::from(value.unsigned_abs()), numerator.unsigned_abs());
    let (quotient, remainder) = product.div_rem(divisor);
    if quotient.hi != 0 {
        return None;
    }

    let round_up = match remainder.cmp(&(divisor - remainder)) {
        Ordering::Greater => true,
        Ordering::Equal => quotient.lo & 1 == 1,
        Ordering::Less => false,
    };
    let magnitude = quotient.lo.checked_add(u128::from(round_up))?;

    if negative {
        // i64::MIN has magnitude i64::MAX + 1
        let limit = i64::MAX as u128 + 1;
        (magnitude <= limit).then(|| (magnitude as i128).wrapping_neg() as i64)
    } else {
        i64::try_from(magnitude).ok()
    }
}
