//! Error-free transformations: one floating-point operation, two outputs.
//!
//! Every function returns `(approximation, tail)` such that
//! `approximation + tail` equals the mathematical result exactly, with
//! `tail` non-overlapping the approximation. For exact scalars the tail is
//! always zero and the same sequences hold trivially.
//!
//! The sequences are the classical ones (Dekker/Knuth, as organized in
//! Shewchuk's predicates paper); they rely only on round-to-nearest
//! arithmetic and must not be reordered.

use crate::scalar::Scalar;

/// `(sum, tail)` with `sum + tail == a + b` exactly, any operand order.
#[inline]
pub fn two_sum<S: Scalar>(left: S, right: S) -> (S, S) {
    let estimation = left + right;
    let right_virtual = estimation - left;
    let left_virtual = estimation - right_virtual;
    let right_tail = right - right_virtual;
    let left_tail = left - left_virtual;
    (estimation, left_tail + right_tail)
}

/// `two_sum` shortcut for `|left| >= |right|` (caller's responsibility).
#[inline]
pub fn fast_two_sum<S: Scalar>(left: S, right: S) -> (S, S) {
    let estimation = left + right;
    let right_virtual = estimation - left;
    (estimation, right - right_virtual)
}

/// `(difference, tail)` with `difference + tail == a - b` exactly.
#[inline]
pub fn two_diff<S: Scalar>(left: S, right: S) -> (S, S) {
    let estimation = left - right;
    (estimation, two_diff_tail(left, right, estimation))
}

/// Rounding error of an already-computed difference `estimation = a - b`.
#[inline]
pub fn two_diff_tail<S: Scalar>(left: S, right: S, estimation: S) -> S {
    let right_virtual = left - estimation;
    let left_virtual = estimation + right_virtual;
    let right_error = right_virtual - right;
    let left_error = left - left_virtual;
    left_error + right_error
}

/// `(high, low)` halves with `high + low == value` and `|low| <= |high|`,
/// each fitting half a significand so products of halves are exact.
#[inline]
pub fn split<S: Scalar>(value: S) -> (S, S) {
    let base = S::SPLITTER * value;
    let high = base - (base - value);
    (high, value - high)
}

/// `(product, tail)` with `product + tail == a * b` exactly.
#[inline]
pub fn two_product<S: Scalar>(left: S, right: S) -> (S, S) {
    let (right_high, right_low) = split(right);
    two_product_presplit(left, right, right_high, right_low)
}

/// `two_product` reusing a precomputed split of `right`; the workhorse of
/// `scale_expansion`, which splits the scalar once per call.
#[inline]
pub fn two_product_presplit<S: Scalar>(left: S, right: S, right_high: S, right_low: S) -> (S, S) {
    let estimation = left * right;
    let (left_high, left_low) = split(left);
    let first_error = estimation - left_high * right_high;
    let second_error = first_error - left_low * right_high;
    let third_error = second_error - left_high * right_low;
    (estimation, left_low * right_low - third_error)
}

/// `two_product(value, value)` saving one split.
#[inline]
pub fn square<S: Scalar>(value: S) -> (S, S) {
    let estimation = value * value;
    let (high, low) = split(value);
    let first_error = estimation - high * high;
    let second_error = first_error - (high + high) * low;
    (estimation, low * low - second_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::Scalar;

    #[test]
    fn two_sum_recovers_cancelled_bits() {
        let (sum, tail) = two_sum(1e16, 1.0);
        assert_eq!(sum, 1e16);
        assert_eq!(tail, 1.0);
        assert!(tail.non_overlapping(sum));
    }

    #[test]
    fn two_diff_tail_of_representable_difference_is_zero() {
        let (difference, tail) = two_diff(2.5f64, 0.5);
        assert_eq!(difference, 2.0);
        assert_eq!(tail, 0.0);
    }

    #[test]
    fn split_halves_recombine() {
        for &value in &[1.0f64, 0.1, 1e20, -3.5e-7, 1.0 + 2f64.powi(-52)] {
            let (high, low) = split(value);
            assert_eq!(high + low, value);
            assert!(Scalar::abs(low) <= Scalar::abs(high));
        }
    }

    #[test]
    fn two_product_captures_roundoff() {
        // (1 + 2^-52)^2 = 1 + 2^-51 + 2^-104; the last term is the tail.
        let value = 1.0 + 2f64.powi(-52);
        let (product, tail) = two_product(value, value);
        assert_eq!(product, 1.0 + 2f64.powi(-51));
        assert_eq!(tail, 2f64.powi(-104));
        let (squared, square_tail) = square(value);
        assert_eq!((squared, square_tail), (product, tail));
    }

    #[test]
    fn exact_scalars_have_zero_tails() {
        use num_rational::Rational64;
        let third = Rational64::new(1, 3);
        let seventh = Rational64::new(1, 7);
        let (sum, tail) = two_sum(third, seventh);
        assert_eq!(sum, Rational64::new(10, 21));
        assert!(Scalar::is_zero(tail));
        let (product, tail) = two_product(third, seventh);
        assert_eq!(product, Rational64::new(1, 21));
        assert!(Scalar::is_zero(tail));
    }
}
