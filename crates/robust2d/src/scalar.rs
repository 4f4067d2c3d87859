//! Scalar abstraction for the adaptive-precision engine.
//!
//! Purpose
//! - Single seam between the predicates and the number type: floats get the
//!   staged escalation machinery, exact types (rationals) short-circuit to
//!   the plain arithmetic result.
//! - Error-bound coefficients are per-type domain constants derived from the
//!   unit roundoff in Shewchuk's "Adaptive Precision Floating-Point
//!   Arithmetic and Fast Robust Geometric Predicates"; do not retune them.
//!
//! Conventions
//! - `EPSILON` is the half-ulp of 1 (`u` in the paper), not
//!   `f64::EPSILON`.
//! - `SPLITTER` is `2^ceil(p/2) + 1` for a `p`-bit significand, so that
//!   `split` halves fit a product without double rounding.

use std::ops::{Add, Div, Mul, Neg, Sub};

use num_rational::Rational64;
use num_traits::{Signed, Zero};

/// Number type usable as a coordinate.
///
/// Implementations must either provide IEEE-754 round-to-nearest semantics
/// (floats) or be exact under `+,-,*,/` and declare `EXACT = true`.
/// Non-finite values (NaN, infinities) and `Rational64` overflow are out of
/// contract.
pub trait Scalar:
    nalgebra::Scalar
    + Copy
    + PartialOrd
    + Neg<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Arithmetic never rounds; predicates return their stage-0 result.
    const EXACT: bool;

    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;

    /// Half-ulp of 1 (unit roundoff). `ZERO` for exact types.
    const EPSILON: Self;
    /// Split constant `2^ceil(p/2) + 1`. `ONE` for exact types.
    const SPLITTER: Self;

    // Staged error-bound coefficients (see `bounds`). All `ZERO` for exact
    // types, which makes every bound check conclusive immediately.
    const SIGNED_MEASURE_ERROR_1: Self;
    const SIGNED_MEASURE_ERROR_2: Self;
    const SIGNED_MEASURE_ERROR_3: Self;
    const COCIRCULAR_ERROR_1: Self;
    const COCIRCULAR_ERROR_2: Self;
    const COCIRCULAR_ERROR_3: Self;
    const RESULT_ERROR: Self;

    fn abs(self) -> Self;

    #[inline]
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Whether the binary representations of `self` and `larger` occupy
    /// disjoint bit ranges (the expansion non-overlap invariant).
    /// Vacuously true for exact types and whenever either side is zero.
    fn non_overlapping(self, larger: Self) -> bool;
}

/// Exponents of the least and most significant set bits of a finite
/// nonzero `f64`.
#[inline]
fn bit_range_f64(value: f64) -> (i32, i32) {
    let bits = value.abs().to_bits();
    let exponent = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, base) = if exponent == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), exponent - 1075)
    };
    (
        base + mantissa.trailing_zeros() as i32,
        base + (63 - mantissa.leading_zeros() as i32),
    )
}

#[inline]
fn bit_range_f32(value: f32) -> (i32, i32) {
    let bits = value.abs().to_bits();
    let exponent = ((bits >> 23) & 0xff) as i32;
    let fraction = bits & ((1u32 << 23) - 1);
    let (mantissa, base) = if exponent == 0 {
        (fraction, -149)
    } else {
        (fraction | (1u32 << 23), exponent - 150)
    };
    (
        base + mantissa.trailing_zeros() as i32,
        base + (31 - mantissa.leading_zeros() as i32),
    )
}

impl Scalar for f64 {
    const EXACT: bool = false;

    const ZERO: f64 = 0.0;
    const ONE: f64 = 1.0;
    const TWO: f64 = 2.0;

    // 2^-53 and 2^27 + 1 for the 53-bit significand.
    const EPSILON: f64 = f64::EPSILON / 2.0;
    const SPLITTER: f64 = 134_217_729.0;

    const SIGNED_MEASURE_ERROR_1: f64 = (3.0 + 16.0 * Self::EPSILON) * Self::EPSILON;
    const SIGNED_MEASURE_ERROR_2: f64 = (2.0 + 12.0 * Self::EPSILON) * Self::EPSILON;
    const SIGNED_MEASURE_ERROR_3: f64 =
        (9.0 + 64.0 * Self::EPSILON) * Self::EPSILON * Self::EPSILON;
    const COCIRCULAR_ERROR_1: f64 = (10.0 + 96.0 * Self::EPSILON) * Self::EPSILON;
    const COCIRCULAR_ERROR_2: f64 = (4.0 + 48.0 * Self::EPSILON) * Self::EPSILON;
    const COCIRCULAR_ERROR_3: f64 =
        (44.0 + 576.0 * Self::EPSILON) * Self::EPSILON * Self::EPSILON;
    const RESULT_ERROR: f64 = (3.0 + 8.0 * Self::EPSILON) * Self::EPSILON;

    #[inline]
    fn abs(self) -> f64 {
        f64::abs(self)
    }

    #[inline]
    fn non_overlapping(self, larger: f64) -> bool {
        if self == 0.0 || larger == 0.0 {
            return true;
        }
        let (_, small_msb) = bit_range_f64(self);
        let (large_lsb, _) = bit_range_f64(larger);
        small_msb < large_lsb
    }
}

impl Scalar for f32 {
    const EXACT: bool = false;

    const ZERO: f32 = 0.0;
    const ONE: f32 = 1.0;
    const TWO: f32 = 2.0;

    // 2^-24 and 2^12 + 1 for the 24-bit significand.
    const EPSILON: f32 = f32::EPSILON / 2.0;
    const SPLITTER: f32 = 4097.0;

    const SIGNED_MEASURE_ERROR_1: f32 = (3.0 + 16.0 * Self::EPSILON) * Self::EPSILON;
    const SIGNED_MEASURE_ERROR_2: f32 = (2.0 + 12.0 * Self::EPSILON) * Self::EPSILON;
    const SIGNED_MEASURE_ERROR_3: f32 =
        (9.0 + 64.0 * Self::EPSILON) * Self::EPSILON * Self::EPSILON;
    const COCIRCULAR_ERROR_1: f32 = (10.0 + 96.0 * Self::EPSILON) * Self::EPSILON;
    const COCIRCULAR_ERROR_2: f32 = (4.0 + 48.0 * Self::EPSILON) * Self::EPSILON;
    const COCIRCULAR_ERROR_3: f32 =
        (44.0 + 576.0 * Self::EPSILON) * Self::EPSILON * Self::EPSILON;
    const RESULT_ERROR: f32 = (3.0 + 8.0 * Self::EPSILON) * Self::EPSILON;

    #[inline]
    fn abs(self) -> f32 {
        f32::abs(self)
    }

    #[inline]
    fn non_overlapping(self, larger: f32) -> bool {
        if self == 0.0 || larger == 0.0 {
            return true;
        }
        let (_, small_msb) = bit_range_f32(self);
        let (large_lsb, _) = bit_range_f32(larger);
        small_msb < large_lsb
    }
}

impl Scalar for Rational64 {
    const EXACT: bool = true;

    const ZERO: Rational64 = Rational64::new_raw(0, 1);
    const ONE: Rational64 = Rational64::new_raw(1, 1);
    const TWO: Rational64 = Rational64::new_raw(2, 1);

    const EPSILON: Rational64 = Self::ZERO;
    const SPLITTER: Rational64 = Self::ONE;

    const SIGNED_MEASURE_ERROR_1: Rational64 = Self::ZERO;
    const SIGNED_MEASURE_ERROR_2: Rational64 = Self::ZERO;
    const SIGNED_MEASURE_ERROR_3: Rational64 = Self::ZERO;
    const COCIRCULAR_ERROR_1: Rational64 = Self::ZERO;
    const COCIRCULAR_ERROR_2: Rational64 = Self::ZERO;
    const COCIRCULAR_ERROR_3: Rational64 = Self::ZERO;
    const RESULT_ERROR: Rational64 = Self::ZERO;

    #[inline]
    fn abs(self) -> Rational64 {
        Signed::abs(&self)
    }

    #[inline]
    fn is_zero(self) -> bool {
        Zero::is_zero(&self)
    }

    #[inline]
    fn non_overlapping(self, _larger: Rational64) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f64_constants_match_ieee_double() {
        assert_eq!(<f64 as Scalar>::EPSILON, 2f64.powi(-53));
        assert_eq!(<f64 as Scalar>::SPLITTER, 2f64.powi(27) + 1.0);
        assert_eq!(<f32 as Scalar>::EPSILON, 2f32.powi(-24));
        assert_eq!(<f32 as Scalar>::SPLITTER, 2f32.powi(12) + 1.0);
    }

    #[test]
    fn bit_ranges() {
        // 1.5 = 2^0 + 2^-1
        assert_eq!(bit_range_f64(1.5), (-1, 0));
        assert_eq!(bit_range_f64(-8.0), (3, 3));
        // Smallest subnormal.
        assert_eq!(bit_range_f64(f64::from_bits(1)).0, -1074);
        assert_eq!(bit_range_f32(1.5), (-1, 0));
    }

    #[test]
    fn non_overlap_examples() {
        assert!(2f64.powi(-53).non_overlapping(1.5));
        assert!(!1.0f64.non_overlapping(1.5));
        assert!(0.0f64.non_overlapping(1.5));
        assert!(1.0f64.non_overlapping(0.0));
        // Adjacent powers of two do not share bits.
        assert!(1.0f64.non_overlapping(2.0));
        // 3 = 2 + 1 overlaps 1's bit.
        assert!(!1.0f64.non_overlapping(3.0));
    }

    #[test]
    fn rational_is_exact() {
        assert!(<Rational64 as Scalar>::EXACT);
        let half = Rational64::new(1, 2);
        assert_eq!(Scalar::abs(-half), half);
        assert!(Scalar::is_zero(Rational64::new(0, 5)));
    }
}
