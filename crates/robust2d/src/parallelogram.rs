//! Signed area of the parallelogram spanned by two segment vectors.
//!
//! This is the orient2d-style predicate the rest of the crate builds on:
//! the sign of `cross(first_end - first_start, second_end - second_start)`.
//! Positive means the second vector turns counterclockwise from the first,
//! negative clockwise, zero collinear.
//!
//! Staged escalation
//! - Stage 0: plain arithmetic plus an `upper_bound` accumulated from the
//!   same products; conclusive for well-separated inputs at O(1) extra cost.
//! - Stage 1: exact dominant terms via `to_cross_product`.
//! - Stage 2: coordinate-subtraction tails; a scalar correction term.
//! - Stage 3: full expansion including tail x tail cross terms; the most
//!   significant component carries the exact sign.
//! Exact scalars return the stage-0 result directly.

use crate::bounds;
use crate::expansion::{
    estimate, most_significant, sum_expansions, to_cross_product, two_diff_tail, two_product,
    two_two_diff,
};
use crate::scalar::Scalar;
use crate::Point;

/// Signed area of the parallelogram built on vectors
/// `first_end - first_start` and `second_end - second_start`, with an
/// exactly correct sign.
pub fn signed_area<S: Scalar>(
    first_start: Point<S>,
    first_end: Point<S>,
    second_start: Point<S>,
    second_end: Point<S>,
) -> S {
    let minuend = (first_end.x - first_start.x) * (second_end.y - second_start.y);
    let subtrahend = (first_end.y - first_start.y) * (second_end.x - second_start.x);
    let result = minuend - subtrahend;
    if S::EXACT {
        return result;
    }

    // Opposite-sign products cannot cancel; only same-sign ones need the
    // bound check.
    let upper_bound = if minuend > S::ZERO {
        if subtrahend <= S::ZERO {
            return result;
        }
        minuend + subtrahend
    } else if minuend < S::ZERO {
        if subtrahend >= S::ZERO {
            return result;
        }
        -minuend - subtrahend
    } else {
        return result;
    };
    let error_bound = bounds::to_signed_measure_first_error(upper_bound);
    if result >= error_bound || -result >= error_bound {
        return result;
    }
    adjusted_signed_area(first_start, first_end, second_start, second_end, upper_bound)
}

fn adjusted_signed_area<S: Scalar>(
    first_start: Point<S>,
    first_end: Point<S>,
    second_start: Point<S>,
    second_end: Point<S>,
    upper_bound: S,
) -> S {
    let minuend_multiplier_x = first_end.x - first_start.x;
    let minuend_multiplier_y = second_end.y - second_start.y;
    let subtrahend_multiplier_x = second_end.x - second_start.x;
    let subtrahend_multiplier_y = first_end.y - first_start.y;

    let (minuend, minuend_tail) = two_product(minuend_multiplier_x, minuend_multiplier_y);
    let (subtrahend, subtrahend_tail) =
        two_product(subtrahend_multiplier_y, subtrahend_multiplier_x);

    let mut result_expansion =
        two_two_diff([minuend_tail, minuend], [subtrahend_tail, subtrahend]).to_vec();
    let mut result = estimate(&result_expansion);
    let error_bound = bounds::to_signed_measure_second_error(upper_bound);
    if result >= error_bound || -result >= error_bound {
        return result;
    }

    let minuend_multiplier_x_tail =
        two_diff_tail(first_end.x, first_start.x, minuend_multiplier_x);
    let subtrahend_multiplier_x_tail =
        two_diff_tail(second_end.x, second_start.x, subtrahend_multiplier_x);
    let subtrahend_multiplier_y_tail =
        two_diff_tail(first_end.y, first_start.y, subtrahend_multiplier_y);
    let minuend_multiplier_y_tail =
        two_diff_tail(second_end.y, second_start.y, minuend_multiplier_y);
    if minuend_multiplier_x_tail.is_zero()
        && minuend_multiplier_y_tail.is_zero()
        && subtrahend_multiplier_x_tail.is_zero()
        && subtrahend_multiplier_y_tail.is_zero()
    {
        // The coordinate subtractions were exact, so the stage-1 expansion
        // already is.
        return result;
    }

    let error_bound = bounds::to_signed_measure_third_error(upper_bound)
        + bounds::to_determinant_error(result);
    result = result
        + ((minuend_multiplier_x * minuend_multiplier_y_tail
            + minuend_multiplier_y * minuend_multiplier_x_tail)
            - (subtrahend_multiplier_y * subtrahend_multiplier_x_tail
                + subtrahend_multiplier_x * subtrahend_multiplier_y_tail));
    if result >= error_bound || -result >= error_bound {
        return result;
    }

    result_expansion = sum_expansions(
        &result_expansion,
        &to_cross_product(
            minuend_multiplier_x_tail,
            minuend_multiplier_y,
            subtrahend_multiplier_x,
            subtrahend_multiplier_y_tail,
        ),
    );
    result_expansion = sum_expansions(
        &result_expansion,
        &to_cross_product(
            minuend_multiplier_x,
            minuend_multiplier_y_tail,
            subtrahend_multiplier_x_tail,
            subtrahend_multiplier_y,
        ),
    );
    result_expansion = sum_expansions(
        &result_expansion,
        &to_cross_product(
            minuend_multiplier_x_tail,
            minuend_multiplier_y_tail,
            subtrahend_multiplier_x_tail,
            subtrahend_multiplier_y_tail,
        ),
    );
    most_significant(&result_expansion)
}
