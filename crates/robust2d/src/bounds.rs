//! Closed-form error bounds for the staged predicates.
//!
//! Each function maps an upper bound on the magnitude of a predicate's
//! intermediate products to a threshold: when the approximate result's
//! magnitude exceeds the threshold, its sign is guaranteed correct and the
//! predicate may stop escalating. The coefficients come from Shewchuk's
//! forward error analysis of orient2d/incircle and live on the `Scalar`
//! impls; they are domain constants, not tunables. For exact scalars they
//! are all zero, so every check passes on the first try.

use crate::scalar::Scalar;

/// Stage-0 bound for the cross-product sign (`signed_area`).
#[inline]
pub fn to_signed_measure_first_error<S: Scalar>(upper_bound: S) -> S {
    S::SIGNED_MEASURE_ERROR_1 * upper_bound
}

/// Stage-1 bound, after the dominant terms are computed exactly.
#[inline]
pub fn to_signed_measure_second_error<S: Scalar>(upper_bound: S) -> S {
    S::SIGNED_MEASURE_ERROR_2 * upper_bound
}

/// Stage-2 bound, combined with `to_determinant_error` of the running
/// estimate.
#[inline]
pub fn to_signed_measure_third_error<S: Scalar>(upper_bound: S) -> S {
    S::SIGNED_MEASURE_ERROR_3 * upper_bound
}

/// Stage-0 bound for the in-circle determinant.
#[inline]
pub fn to_cocircular_first_error<S: Scalar>(upper_bound: S) -> S {
    S::COCIRCULAR_ERROR_1 * upper_bound
}

/// Stage-1 bound for the in-circle determinant.
#[inline]
pub fn to_cocircular_second_error<S: Scalar>(upper_bound: S) -> S {
    S::COCIRCULAR_ERROR_2 * upper_bound
}

/// Stage-2 bound for the in-circle determinant.
#[inline]
pub fn to_cocircular_third_error<S: Scalar>(upper_bound: S) -> S {
    S::COCIRCULAR_ERROR_3 * upper_bound
}

/// Roundoff slack of an already-computed determinant estimate; added to the
/// stage-2 bounds above.
#[inline]
pub fn to_determinant_error<S: Scalar>(determinant: S) -> S {
    S::RESULT_ERROR * determinant.abs()
}
