//! Signed length of the projection of one segment vector onto another.
//!
//! Rotating the second vector a quarter turn counterclockwise turns the
//! cross product into a dot product, so the whole staged machinery of
//! `parallelogram::signed_area` is reused unchanged: positive means the
//! vectors point into the same half-plane, zero that they are
//! perpendicular.

use crate::parallelogram::signed_area;
use crate::scalar::Scalar;
use crate::Point;

/// `(x, y) -> (-y, x)`: a quarter turn counterclockwise.
#[inline]
pub(crate) fn to_perpendicular_point<S: Scalar>(point: Point<S>) -> Point<S> {
    Point::new(-point.y, point.x)
}

/// Signed length of the projection of `first_end - first_start` onto
/// `second_end - second_start`, with an exactly correct sign.
#[inline]
pub fn signed_length<S: Scalar>(
    first_start: Point<S>,
    first_end: Point<S>,
    second_start: Point<S>,
    second_end: Point<S>,
) -> S {
    signed_area(
        first_start,
        first_end,
        to_perpendicular_point(second_start),
        to_perpendicular_point(second_end),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn axis_fixtures() {
        let origin = vector![0.0, 0.0];
        let east = vector![1.0, 0.0];
        let north = vector![0.0, 1.0];
        let west = vector![-1.0, 0.0];
        // Same direction: positive; perpendicular: zero; opposite: negative.
        assert!(signed_length(origin, east, origin, east) > 0.0);
        assert_eq!(signed_length(origin, east, origin, north), 0.0);
        assert!(signed_length(origin, east, origin, west) < 0.0);
    }

    #[test]
    fn matches_dot_product_on_benign_inputs() {
        let a = vector![0.25, -0.5];
        let b = vector![1.5, 2.0];
        let c = vector![-3.0, 0.75];
        let d = vector![0.125, -2.25];
        let expected = (b - a).dot(&(d - c));
        assert_eq!(signed_length(a, b, c, d), expected);
    }
}
