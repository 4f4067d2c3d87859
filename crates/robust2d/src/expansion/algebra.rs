//! Expansion algebra: exact sums as sequences of scalar components.
//!
//! An expansion stores a real value as a finite sum of scalars, ordered by
//! non-decreasing magnitude, with pairwise disjoint bit ranges. Operations
//! here never discard precision: a component is dropped only when it is
//! exactly zero ("zero elimination"), so `estimate` of any result can be
//! re-checked against an error bound by the staged predicates.
//!
//! Small fixed-size results use arrays (`[S; 2]` is an exact pair with the
//! tail first); dynamic merges return `Vec<S>`. All outputs are fresh
//! values, inputs are never mutated.

use crate::expansion::eft::{fast_two_sum, split, two_diff, two_product, two_product_presplit, two_sum};
use crate::scalar::Scalar;

/// Dynamically sized expansion, ascending in magnitude.
pub type Expansion<S> = Vec<S>;

/// Exact `[tail, approximation] + scalar` as a three-component expansion.
#[inline]
pub fn two_one_sum<S: Scalar>(left: [S; 2], right: S) -> [S; 3] {
    let (interim, second_tail) = two_sum(left[0], right);
    let (estimation, first_tail) = two_sum(left[1], interim);
    [second_tail, first_tail, estimation]
}

/// Exact `[tail, approximation] - scalar` as a three-component expansion.
#[inline]
pub fn two_one_diff<S: Scalar>(left: [S; 2], right: S) -> [S; 3] {
    let (interim, second_tail) = two_diff(left[0], right);
    let (estimation, first_tail) = two_sum(left[1], interim);
    [second_tail, first_tail, estimation]
}

/// Exact sum of two exact pairs as a four-component expansion.
#[inline]
pub fn two_two_sum<S: Scalar>(left: [S; 2], right: [S; 2]) -> [S; 4] {
    let [third_tail, interim_tail, interim] = two_one_sum(left, right[0]);
    let [second_tail, first_tail, estimation] = two_one_sum([interim_tail, interim], right[1]);
    [third_tail, second_tail, first_tail, estimation]
}

/// Exact difference of two exact pairs as a four-component expansion.
#[inline]
pub fn two_two_diff<S: Scalar>(left: [S; 2], right: [S; 2]) -> [S; 4] {
    let [third_tail, interim_tail, interim] = two_one_diff(left, right[0]);
    let [second_tail, first_tail, estimation] = two_one_diff([interim_tail, interim], right[1]);
    [third_tail, second_tail, first_tail, estimation]
}

/// Exact planar cross product `ax * ay - bx * by` as a four-component
/// expansion; the building block of every 2x2 determinant term.
#[inline]
pub fn to_cross_product<S: Scalar>(
    minuend_multiplier_x: S,
    minuend_multiplier_y: S,
    subtrahend_multiplier_x: S,
    subtrahend_multiplier_y: S,
) -> [S; 4] {
    let (minuend, minuend_tail) = two_product(minuend_multiplier_x, minuend_multiplier_y);
    let (subtrahend, subtrahend_tail) =
        two_product(subtrahend_multiplier_y, subtrahend_multiplier_x);
    two_two_diff([minuend_tail, minuend], [subtrahend_tail, subtrahend])
}

/// Merge selection rule: take the left candidate when its magnitude does
/// not exceed the right one's, phrased without `abs` the way Shewchuk's
/// fast expansion sum does.
#[inline]
fn prefers_left<S: Scalar>(right_element: S, left_element: S) -> bool {
    (right_element > left_element) == (right_element > -left_element)
}

/// Sums two expansions into one, single pass, with zero elimination.
///
/// Both inputs must be non-empty valid expansions; the output is non-empty
/// even when the exact sum is zero (the final accumulator is always kept).
pub fn sum_expansions<S: Scalar>(left: &[S], right: &[S]) -> Expansion<S> {
    debug_assert!(!left.is_empty() && !right.is_empty());
    let mut result = Vec::with_capacity(left.len() + right.len());
    let mut left_index = 0;
    let mut right_index = 0;
    let mut accumulator = if prefers_left(right[0], left[0]) {
        left_index += 1;
        left[0]
    } else {
        right_index += 1;
        right[0]
    };
    if left_index < left.len() && right_index < right.len() {
        // The second-smallest component dominates the first, so the cheap
        // variant applies once.
        let tail;
        if prefers_left(right[right_index], left[left_index]) {
            (accumulator, tail) = fast_two_sum(left[left_index], accumulator);
            left_index += 1;
        } else {
            (accumulator, tail) = fast_two_sum(right[right_index], accumulator);
            right_index += 1;
        }
        if !tail.is_zero() {
            result.push(tail);
        }
        while left_index < left.len() && right_index < right.len() {
            let tail;
            if prefers_left(right[right_index], left[left_index]) {
                (accumulator, tail) = two_sum(accumulator, left[left_index]);
                left_index += 1;
            } else {
                (accumulator, tail) = two_sum(accumulator, right[right_index]);
                right_index += 1;
            }
            if !tail.is_zero() {
                result.push(tail);
            }
        }
    }
    for &component in &left[left_index..] {
        let tail;
        (accumulator, tail) = two_sum(accumulator, component);
        if !tail.is_zero() {
            result.push(tail);
        }
    }
    for &component in &right[right_index..] {
        let tail;
        (accumulator, tail) = two_sum(accumulator, component);
        if !tail.is_zero() {
            result.push(tail);
        }
    }
    if !accumulator.is_zero() || result.is_empty() {
        result.push(accumulator);
    }
    debug_assert!(is_expansion(&result));
    result
}

/// Multiplies an expansion by a scalar, with zero elimination.
///
/// The scalar is split once and reused across all component products;
/// the output has at most `2 * expansion.len()` components.
pub fn scale_expansion<S: Scalar>(expansion: &[S], scalar: S) -> Expansion<S> {
    debug_assert!(!expansion.is_empty());
    let (scalar_high, scalar_low) = split(scalar);
    let mut result = Vec::with_capacity(2 * expansion.len());
    let (mut accumulator, tail) =
        two_product_presplit(expansion[0], scalar, scalar_high, scalar_low);
    if !tail.is_zero() {
        result.push(tail);
    }
    for &element in &expansion[1..] {
        let (product, product_tail) =
            two_product_presplit(element, scalar, scalar_high, scalar_low);
        let (interim, tail) = two_sum(accumulator, product_tail);
        if !tail.is_zero() {
            result.push(tail);
        }
        let tail;
        (accumulator, tail) = fast_two_sum(product, interim);
        if !tail.is_zero() {
            result.push(tail);
        }
    }
    if !accumulator.is_zero() || result.is_empty() {
        result.push(accumulator);
    }
    debug_assert!(is_expansion(&result));
    result
}

/// Most significant component of an expansion; determines the sign of the
/// whole value. Zero for an empty slice (the algebra never produces one).
#[inline]
pub fn most_significant<S: Scalar>(expansion: &[S]) -> S {
    expansion.last().copied().unwrap_or(S::ZERO)
}

/// Plain scalar approximation of an expansion's value (its component sum,
/// accumulated small-to-large).
#[inline]
pub fn estimate<S: Scalar>(expansion: &[S]) -> S {
    let mut sum = S::ZERO;
    for &component in expansion {
        sum = sum + component;
    }
    sum
}

/// Non-decreasing magnitude order over nonzero components.
pub fn is_sorted_by_magnitude<S: Scalar>(components: &[S]) -> bool {
    let mut previous: Option<S> = None;
    for &component in components {
        if component.is_zero() {
            continue;
        }
        if let Some(smaller) = previous {
            if smaller.abs() >= component.abs() {
                return false;
            }
        }
        previous = Some(component);
    }
    true
}

/// Both expansion invariants: magnitude-sorted and pairwise
/// non-overlapping (adjacent pairs suffice once sorted). Zero components
/// are skipped; an empty slice is not an expansion.
pub fn is_expansion<S: Scalar>(components: &[S]) -> bool {
    if components.is_empty() {
        return false;
    }
    if !is_sorted_by_magnitude(components) {
        return false;
    }
    let mut previous: Option<S> = None;
    for &component in components {
        if component.is_zero() {
            continue;
        }
        if let Some(smaller) = previous {
            if !smaller.non_overlapping(component) {
                return false;
            }
        }
        previous = Some(component);
    }
    true
}
