//! In-circle test: the lifted 4x4 determinant with an exact sign.
//!
//! `determinant(p1, p2, p3, p4)` is positive when `p4` lies inside the
//! circle through `p1`, `p2`, `p3` (taken counterclockwise), negative
//! outside, zero on the circle. The computation translates everything by
//! `p4` and expands the determinant into three terms, each a squared
//! distance times a 2x2 cross product of the other two points.
//!
//! The escalation mirrors `parallelogram::signed_area` but over three
//! squared-length pairs and six coordinate tails: stage 3 scales the three
//! exact cross-product expansions by each nonzero tail and folds in the
//! second-order tail x tail terms. Exact scalars stop at stage 0.

use crate::bounds;
use crate::expansion::{
    estimate, most_significant, scale_expansion, square, sum_expansions, to_cross_product,
    two_diff_tail, two_product, two_two_diff, two_two_sum, Expansion,
};
use crate::scalar::Scalar;
use crate::Point;

/// Sign-exact in-circle determinant for the circle through the first three
/// points, probed with the fourth.
pub fn determinant<S: Scalar>(
    first_point: Point<S>,
    second_point: Point<S>,
    third_point: Point<S>,
    fourth_point: Point<S>,
) -> S {
    let first_dx = first_point.x - fourth_point.x;
    let first_dy = first_point.y - fourth_point.y;
    let second_dx = second_point.x - fourth_point.x;
    let second_dy = second_point.y - fourth_point.y;
    let third_dx = third_point.x - fourth_point.x;
    let third_dy = third_point.y - fourth_point.y;

    let first_squared_distance = first_dx * first_dx + first_dy * first_dy;
    let second_squared_distance = second_dx * second_dx + second_dy * second_dy;
    let third_squared_distance = third_dx * third_dx + third_dy * third_dy;

    let first_dx_second_dy = first_dx * second_dy;
    let first_dx_third_dy = first_dx * third_dy;
    let second_dx_first_dy = second_dx * first_dy;
    let second_dx_third_dy = second_dx * third_dy;
    let third_dx_first_dy = third_dx * first_dy;
    let third_dx_second_dy = third_dx * second_dy;

    let result = first_squared_distance * (second_dx_third_dy - third_dx_second_dy)
        + second_squared_distance * (third_dx_first_dy - first_dx_third_dy)
        + third_squared_distance * (first_dx_second_dy - second_dx_first_dy);
    if S::EXACT {
        return result;
    }
    let upper_bound = first_squared_distance
        * (second_dx_third_dy.abs() + third_dx_second_dy.abs())
        + second_squared_distance * (third_dx_first_dy.abs() + first_dx_third_dy.abs())
        + third_squared_distance * (first_dx_second_dy.abs() + second_dx_first_dy.abs());
    let error_bound = bounds::to_cocircular_first_error(upper_bound);
    if result > error_bound || -result > error_bound {
        return result;
    }
    adjusted_determinant(first_point, second_point, third_point, fourth_point, upper_bound)
}

fn adjusted_determinant<S: Scalar>(
    first_point: Point<S>,
    second_point: Point<S>,
    third_point: Point<S>,
    fourth_point: Point<S>,
    upper_bound: S,
) -> S {
    let first_dx = first_point.x - fourth_point.x;
    let first_dy = first_point.y - fourth_point.y;
    let second_dx = second_point.x - fourth_point.x;
    let second_dy = second_point.y - fourth_point.y;
    let third_dx = third_point.x - fourth_point.x;
    let third_dy = third_point.y - fourth_point.y;

    let second_third_cross_product = to_cross_product(second_dx, third_dy, third_dx, second_dy);
    let third_first_cross_product = to_cross_product(third_dx, first_dy, first_dx, third_dy);
    let first_second_cross_product = to_cross_product(first_dx, second_dy, second_dx, first_dy);
    let mut result_expansion = sum_expansions(
        &sum_expansions(
            &multiply_by_squared_length(&second_third_cross_product, first_dx, first_dy),
            &multiply_by_squared_length(&third_first_cross_product, second_dx, second_dy),
        ),
        &multiply_by_squared_length(&first_second_cross_product, third_dx, third_dy),
    );
    let mut result = estimate(&result_expansion);
    let error_bound = bounds::to_cocircular_second_error(upper_bound);
    if result >= error_bound || -result >= error_bound {
        return result;
    }

    let first_dx_tail = two_diff_tail(first_point.x, fourth_point.x, first_dx);
    let first_dy_tail = two_diff_tail(first_point.y, fourth_point.y, first_dy);
    let second_dx_tail = two_diff_tail(second_point.x, fourth_point.x, second_dx);
    let second_dy_tail = two_diff_tail(second_point.y, fourth_point.y, second_dy);
    let third_dx_tail = two_diff_tail(third_point.x, fourth_point.x, third_dx);
    let third_dy_tail = two_diff_tail(third_point.y, fourth_point.y, third_dy);

    if first_dx_tail.is_zero()
        && first_dy_tail.is_zero()
        && second_dx_tail.is_zero()
        && second_dy_tail.is_zero()
        && third_dx_tail.is_zero()
        && third_dy_tail.is_zero()
    {
        return result;
    }

    let error_bound =
        bounds::to_cocircular_third_error(upper_bound) + bounds::to_determinant_error(result);
    result = result
        + (to_addend(
            first_dx, first_dx_tail, first_dy, first_dy_tail, second_dx, second_dx_tail,
            second_dy, second_dy_tail, third_dx, third_dx_tail, third_dy, third_dy_tail,
        ) + to_addend(
            second_dx, second_dx_tail, second_dy, second_dy_tail, third_dx, third_dx_tail,
            third_dy, third_dy_tail, first_dx, first_dx_tail, first_dy, first_dy_tail,
        ) + to_addend(
            third_dx, third_dx_tail, third_dy, third_dy_tail, first_dx, first_dx_tail,
            first_dy, first_dy_tail, second_dx, second_dx_tail, second_dy, second_dy_tail,
        ));
    if result >= error_bound || -result >= error_bound {
        return result;
    }

    // Squared lengths are only needed for the terms of points whose
    // counterparts carry nonzero tails.
    let first_squared_length = if !second_dx_tail.is_zero()
        || !second_dy_tail.is_zero()
        || !third_dx_tail.is_zero()
        || !third_dy_tail.is_zero()
    {
        to_squared_length(first_dx, first_dy)
    } else {
        [S::ZERO; 4]
    };
    let second_squared_length = if !first_dx_tail.is_zero()
        || !first_dy_tail.is_zero()
        || !third_dx_tail.is_zero()
        || !third_dy_tail.is_zero()
    {
        to_squared_length(second_dx, second_dy)
    } else {
        [S::ZERO; 4]
    };
    let third_squared_length = if !first_dx_tail.is_zero()
        || !first_dy_tail.is_zero()
        || !second_dx_tail.is_zero()
        || !second_dy_tail.is_zero()
    {
        to_squared_length(third_dx, third_dy)
    } else {
        [S::ZERO; 4]
    };

    // Scaled cross products are shared between the first-order and the
    // tail x tail passes below; each is only built (and used) when the
    // corresponding tail is nonzero.
    let mut first_dx_tail_second_third_cross_product: Expansion<S> = Vec::new();
    let mut first_dy_tail_second_third_cross_product: Expansion<S> = Vec::new();
    let mut second_dx_tail_third_first_cross_product: Expansion<S> = Vec::new();
    let mut second_dy_tail_third_first_cross_product: Expansion<S> = Vec::new();
    let mut third_dx_tail_first_second_cross_product: Expansion<S> = Vec::new();
    let mut third_dy_tail_first_second_cross_product: Expansion<S> = Vec::new();

    if !first_dx_tail.is_zero() {
        first_dx_tail_second_third_cross_product =
            scale_expansion(&second_third_cross_product, first_dx_tail);
        result_expansion = sum_expansions(
            &result_expansion,
            &to_extra(
                &first_dx_tail_second_third_cross_product,
                first_dx,
                first_dx_tail,
                second_dy,
                &second_squared_length,
                third_dy,
                &third_squared_length,
            ),
        );
    }
    if !first_dy_tail.is_zero() {
        first_dy_tail_second_third_cross_product =
            scale_expansion(&second_third_cross_product, first_dy_tail);
        result_expansion = sum_expansions(
            &result_expansion,
            &to_extra(
                &first_dy_tail_second_third_cross_product,
                first_dy,
                first_dy_tail,
                third_dx,
                &third_squared_length,
                second_dx,
                &second_squared_length,
            ),
        );
    }
    if !second_dx_tail.is_zero() {
        second_dx_tail_third_first_cross_product =
            scale_expansion(&third_first_cross_product, second_dx_tail);
        result_expansion = sum_expansions(
            &result_expansion,
            &to_extra(
                &second_dx_tail_third_first_cross_product,
                second_dx,
                second_dx_tail,
                third_dy,
                &third_squared_length,
                first_dy,
                &first_squared_length,
            ),
        );
    }
    if !second_dy_tail.is_zero() {
        second_dy_tail_third_first_cross_product =
            scale_expansion(&third_first_cross_product, second_dy_tail);
        result_expansion = sum_expansions(
            &result_expansion,
            &to_extra(
                &second_dy_tail_third_first_cross_product,
                second_dy,
                second_dy_tail,
                first_dx,
                &first_squared_length,
                third_dx,
                &third_squared_length,
            ),
        );
    }
    if !third_dx_tail.is_zero() {
        third_dx_tail_first_second_cross_product =
            scale_expansion(&first_second_cross_product, third_dx_tail);
        result_expansion = sum_expansions(
            &result_expansion,
            &to_extra(
                &third_dx_tail_first_second_cross_product,
                third_dx,
                third_dx_tail,
                first_dy,
                &first_squared_length,
                second_dy,
                &second_squared_length,
            ),
        );
    }
    if !third_dy_tail.is_zero() {
        third_dy_tail_first_second_cross_product =
            scale_expansion(&first_second_cross_product, third_dy_tail);
        result_expansion = sum_expansions(
            &result_expansion,
            &to_extra(
                &third_dy_tail_first_second_cross_product,
                third_dy,
                third_dy_tail,
                second_dx,
                &second_squared_length,
                first_dx,
                &first_squared_length,
            ),
        );
    }

    if !first_dx_tail.is_zero() || !first_dy_tail.is_zero() {
        let (second_third_crossed_tails, second_third_crossed_tails_tail) = if !second_dx_tail
            .is_zero()
            || !second_dy_tail.is_zero()
            || !third_dx_tail.is_zero()
            || !third_dy_tail.is_zero()
        {
            to_crossed_tails(
                second_dx, second_dx_tail, second_dy, second_dy_tail, third_dx, third_dx_tail,
                third_dy, third_dy_tail,
            )
        } else {
            (vec![S::ZERO], vec![S::ZERO])
        };
        if !first_dx_tail.is_zero() {
            result_expansion = add_dx_extras(
                result_expansion,
                &first_dx_tail_second_third_cross_product,
                first_dx,
                first_dx_tail,
                second_dy_tail,
                &second_squared_length,
                third_dy_tail,
                &third_squared_length,
                &second_third_crossed_tails,
                &second_third_crossed_tails_tail,
            );
        }
        if !first_dy_tail.is_zero() {
            result_expansion = add_dy_extras(
                result_expansion,
                &first_dy_tail_second_third_cross_product,
                first_dy,
                first_dy_tail,
                &second_third_crossed_tails,
                &second_third_crossed_tails_tail,
            );
        }
    }

    if !second_dx_tail.is_zero() || !second_dy_tail.is_zero() {
        let (third_first_crossed_tails, third_first_crossed_tails_tail) = if !first_dx_tail
            .is_zero()
            || !first_dy_tail.is_zero()
            || !third_dx_tail.is_zero()
            || !third_dy_tail.is_zero()
        {
            to_crossed_tails(
                third_dx, third_dx_tail, third_dy, third_dy_tail, first_dx, first_dx_tail,
                first_dy, first_dy_tail,
            )
        } else {
            (vec![S::ZERO], vec![S::ZERO])
        };
        if !second_dx_tail.is_zero() {
            result_expansion = add_dx_extras(
                result_expansion,
                &second_dx_tail_third_first_cross_product,
                second_dx,
                second_dx_tail,
                third_dy_tail,
                &third_squared_length,
                first_dy_tail,
                &first_squared_length,
                &third_first_crossed_tails,
                &third_first_crossed_tails_tail,
            );
        }
        if !second_dy_tail.is_zero() {
            result_expansion = add_dy_extras(
                result_expansion,
                &second_dy_tail_third_first_cross_product,
                second_dy,
                second_dy_tail,
                &third_first_crossed_tails,
                &third_first_crossed_tails_tail,
            );
        }
    }

    if !third_dx_tail.is_zero() || !third_dy_tail.is_zero() {
        let (first_second_crossed_tails, first_second_crossed_tails_tail) = if !first_dx_tail
            .is_zero()
            || !first_dy_tail.is_zero()
            || !second_dx_tail.is_zero()
            || !second_dy_tail.is_zero()
        {
            to_crossed_tails(
                first_dx, first_dx_tail, first_dy, first_dy_tail, second_dx, second_dx_tail,
                second_dy, second_dy_tail,
            )
        } else {
            (vec![S::ZERO], vec![S::ZERO])
        };
        if !third_dx_tail.is_zero() {
            result_expansion = add_dx_extras(
                result_expansion,
                &third_dx_tail_first_second_cross_product,
                third_dx,
                third_dx_tail,
                first_dy_tail,
                &first_squared_length,
                second_dy_tail,
                &second_squared_length,
                &first_second_crossed_tails,
                &first_second_crossed_tails_tail,
            );
        }
        if !third_dy_tail.is_zero() {
            result_expansion = add_dy_extras(
                result_expansion,
                &third_dy_tail_first_second_cross_product,
                third_dy,
                third_dy_tail,
                &first_second_crossed_tails,
                &first_second_crossed_tails_tail,
            );
        }
    }
    most_significant(&result_expansion)
}

/// First-order correction for one nonzero x-tail: the scaled cross product
/// plus the squared-length terms of the two counterpart points.
fn to_extra<S: Scalar>(
    expansion: &[S],
    coordinate: S,
    coordinate_tail: S,
    left_coordinate: S,
    left_squared_length: &[S],
    right_coordinate: S,
    right_squared_length: &[S],
) -> Expansion<S> {
    let second_addend = scale_expansion(
        &scale_expansion(right_squared_length, coordinate_tail),
        left_coordinate,
    );
    let first_addend = scale_expansion(expansion, S::TWO * coordinate);
    let minuend = sum_expansions(&first_addend, &second_addend);
    let subtrahend = scale_expansion(
        &scale_expansion(left_squared_length, coordinate_tail),
        -right_coordinate,
    );
    sum_expansions(&subtrahend, &minuend)
}

/// Second-order terms for a nonzero x-tail, folded into the running
/// expansion: tail times the crossed tails of the counterpart points, plus
/// the counterparts' own dy-tail corrections.
#[allow(clippy::too_many_arguments)]
fn add_dx_extras<S: Scalar>(
    result_expansion: Expansion<S>,
    expansion: &[S],
    dx: S,
    dx_tail: S,
    left_dy_tail: S,
    left_squared_length: &[S],
    right_dy_tail: S,
    right_squared_length: &[S],
    left_right_crossed_tails: &[S],
    left_right_crossed_tails_tail: &[S],
) -> Expansion<S> {
    let dx_tail_crossed_tails = scale_expansion(left_right_crossed_tails, dx_tail);
    let mut result = sum_expansions(
        &result_expansion,
        &sum_expansions(
            &scale_expansion(expansion, dx_tail),
            &scale_expansion(&dx_tail_crossed_tails, S::TWO * dx),
        ),
    );
    if !left_dy_tail.is_zero() {
        result = sum_expansions(
            &result,
            &scale_expansion(
                &scale_expansion(right_squared_length, dx_tail),
                left_dy_tail,
            ),
        );
    }
    if !right_dy_tail.is_zero() {
        result = sum_expansions(
            &result,
            &scale_expansion(
                &scale_expansion(left_squared_length, -dx_tail),
                right_dy_tail,
            ),
        );
    }
    let first_addend = scale_expansion(&dx_tail_crossed_tails, dx_tail);
    let dx_tail_crossed_tails_tail = scale_expansion(left_right_crossed_tails_tail, dx_tail);
    let second_addend = sum_expansions(
        &scale_expansion(&dx_tail_crossed_tails_tail, S::TWO * dx),
        &scale_expansion(&dx_tail_crossed_tails_tail, dx_tail),
    );
    sum_expansions(&result, &sum_expansions(&first_addend, &second_addend))
}

/// Second-order terms for a nonzero y-tail.
fn add_dy_extras<S: Scalar>(
    result_expansion: Expansion<S>,
    expansion: &[S],
    dy: S,
    dy_tail: S,
    rest_crossed_tails: &[S],
    rest_crossed_tails_tail: &[S],
) -> Expansion<S> {
    let dy_tail_crossed_tails = scale_expansion(rest_crossed_tails, dy_tail);
    let result = sum_expansions(
        &result_expansion,
        &sum_expansions(
            &scale_expansion(expansion, dy_tail),
            &scale_expansion(&dy_tail_crossed_tails, S::TWO * dy),
        ),
    );
    let first_addend = scale_expansion(&dy_tail_crossed_tails, dy_tail);
    let dy_tail_crossed_tails_tail = scale_expansion(rest_crossed_tails_tail, dy_tail);
    let second_addend = sum_expansions(
        &scale_expansion(&dy_tail_crossed_tails_tail, S::TWO * dy),
        &scale_expansion(&dy_tail_crossed_tails_tail, dy_tail),
    );
    sum_expansions(&result, &sum_expansions(&first_addend, &second_addend))
}

/// Exact head and tail expansions of the cross product of two points'
/// (head, tail) coordinate pairs.
#[allow(clippy::too_many_arguments)]
fn to_crossed_tails<S: Scalar>(
    left_dx: S,
    left_dx_tail: S,
    left_dy: S,
    left_dy_tail: S,
    right_dx: S,
    right_dx_tail: S,
    right_dy: S,
    right_dy_tail: S,
) -> (Expansion<S>, Expansion<S>) {
    let (minuend, minuend_tail) = two_product(left_dx_tail, right_dy_tail);
    let (subtrahend, subtrahend_tail) = two_product(right_dx_tail, left_dy_tail);
    let tail = two_two_diff([minuend_tail, minuend], [subtrahend_tail, subtrahend]);

    let (left_head, left_head_tail) = two_product(left_dx_tail, right_dy);
    let (right_head, right_head_tail) = two_product(left_dx, right_dy_tail);
    let (left_anti, left_anti_tail) = two_product(right_dx_tail, -left_dy);
    let (right_anti, right_anti_tail) = two_product(right_dx, -left_dy_tail);
    let estimation = sum_expansions(
        &two_two_sum([left_head_tail, left_head], [right_head_tail, right_head]),
        &two_two_sum([left_anti_tail, left_anti], [right_anti_tail, right_anti]),
    );
    (estimation, tail.to_vec())
}

/// `expansion * (dx^2 + dy^2)` as an expansion.
fn multiply_by_squared_length<S: Scalar>(expansion: &[S], dx: S, dy: S) -> Expansion<S> {
    sum_expansions(
        &scale_expansion(&scale_expansion(expansion, dx), dx),
        &scale_expansion(&scale_expansion(expansion, dy), dy),
    )
}

/// Stage-2 scalar correction term for one of the three determinant terms.
#[allow(clippy::too_many_arguments)]
fn to_addend<S: Scalar>(
    left_dx: S,
    left_dx_tail: S,
    left_dy: S,
    left_dy_tail: S,
    mid_dx: S,
    mid_dx_tail: S,
    mid_dy: S,
    mid_dy_tail: S,
    right_dx: S,
    right_dx_tail: S,
    right_dy: S,
    right_dy_tail: S,
) -> S {
    (left_dx * left_dx + left_dy * left_dy)
        * ((mid_dx * right_dy_tail + right_dy * mid_dx_tail)
            - (mid_dy * right_dx_tail + right_dx * mid_dy_tail))
        + S::TWO
            * (left_dx * left_dx_tail + left_dy * left_dy_tail)
            * (mid_dx * right_dy - mid_dy * right_dx)
}

/// `dx^2 + dy^2` as an exact four-component expansion.
fn to_squared_length<S: Scalar>(dx: S, dy: S) -> [S; 4] {
    let (dx_squared, dx_squared_tail) = square(dx);
    let (dy_squared, dy_squared_tail) = square(dy);
    two_two_sum([dx_squared_tail, dx_squared], [dy_squared_tail, dy_squared])
}
