//! Angle classification at a vertex: turn direction and angle kind.
//!
//! Both predicates look at the angle formed by two rays leaving `vertex`
//! through the given points and reduce to the sign of an exact measure:
//! `orientation` to the cross product (`signed_area`), `kind` to the dot
//! product (`signed_length`).

use crate::parallelogram::signed_area;
use crate::projection::signed_length;
use crate::scalar::Scalar;
use crate::Point;

/// Kind of an angle: wider than, equal to, or narrower than a right angle.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
#[repr(i8)]
pub enum Kind {
    Obtuse = -1,
    Right = 0,
    Acute = 1,
}

/// Turn direction from the first ray to the second.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
#[repr(i8)]
pub enum Orientation {
    Clockwise = -1,
    Collinear = 0,
    Counterclockwise = 1,
}

impl Orientation {
    /// Integer sign, handy for parity arguments over point permutations.
    #[inline]
    pub fn sign(self) -> i8 {
        self as i8
    }
}

impl Kind {
    #[inline]
    pub fn sign(self) -> i8 {
        self as i8
    }
}

/// Sign of a scalar as `-1`, `0` or `1`.
#[inline]
pub fn to_sign<S: Scalar>(value: S) -> i8 {
    if value > S::ZERO {
        1
    } else if value < S::ZERO {
        -1
    } else {
        0
    }
}

/// Kind of the angle at `vertex` between the rays through the given points.
///
/// ```
/// use nalgebra::vector;
/// use robust2d::angular::{kind, Kind};
/// let vertex = vector![0.0, 0.0];
/// assert_eq!(kind(vector![1.0, 0.0], vertex, vector![1.0, 0.0]), Kind::Acute);
/// assert_eq!(kind(vector![1.0, 0.0], vertex, vector![0.0, 1.0]), Kind::Right);
/// assert_eq!(kind(vector![1.0, 0.0], vertex, vector![-1.0, 0.0]), Kind::Obtuse);
/// ```
pub fn kind<S: Scalar>(first_ray_point: Point<S>, vertex: Point<S>, second_ray_point: Point<S>) -> Kind {
    match to_sign(signed_length(vertex, first_ray_point, vertex, second_ray_point)) {
        -1 => Kind::Obtuse,
        0 => Kind::Right,
        _ => Kind::Acute,
    }
}

/// Turn direction at `vertex` from the first ray to the second.
///
/// ```
/// use nalgebra::vector;
/// use robust2d::angular::{orientation, Orientation};
/// let vertex = vector![0.0, 0.0];
/// assert_eq!(
///     orientation(vector![1.0, 0.0], vertex, vector![0.0, 1.0]),
///     Orientation::Counterclockwise
/// );
/// assert_eq!(
///     orientation(vector![0.0, 1.0], vertex, vector![1.0, 0.0]),
///     Orientation::Clockwise
/// );
/// ```
pub fn orientation<S: Scalar>(
    first_ray_point: Point<S>,
    vertex: Point<S>,
    second_ray_point: Point<S>,
) -> Orientation {
    match to_sign(signed_area(vertex, first_ray_point, vertex, second_ray_point)) {
        -1 => Orientation::Clockwise,
        0 => Orientation::Collinear,
        _ => Orientation::Counterclockwise,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{vector, Vector2};
    use proptest::prelude::*;

    #[test]
    fn collinear_rays() {
        let vertex = vector![2.0, -1.0];
        let ahead = vector![5.0, -1.0];
        let behind = vector![-4.0, -1.0];
        assert_eq!(orientation(ahead, vertex, ahead), Orientation::Collinear);
        assert_eq!(orientation(ahead, vertex, behind), Orientation::Collinear);
        assert_eq!(kind(ahead, vertex, behind), Kind::Obtuse);
    }

    fn permutations_of_three() -> [([usize; 3], bool); 6] {
        // (permutation, is_even)
        [
            ([0, 1, 2], true),
            ([1, 2, 0], true),
            ([2, 0, 1], true),
            ([0, 2, 1], false),
            ([1, 0, 2], false),
            ([2, 1, 0], false),
        ]
    }

    proptest! {
        #[test]
        fn orientation_respects_permutation_parity(
            coordinates in proptest::array::uniform6(-1e3f64..1e3),
        ) {
            let [ax, ay, bx, by, cx, cy] = coordinates;
            let points: [Vector2<f64>; 3] =
                [vector![ax, ay], vector![bx, by], vector![cx, cy]];
            let base = orientation(points[0], points[1], points[2]).sign();
            for (permutation, is_even) in permutations_of_three() {
                let permuted = orientation(
                    points[permutation[0]],
                    points[permutation[1]],
                    points[permutation[2]],
                )
                .sign();
                prop_assert_eq!(permuted, if is_even { base } else { -base });
            }
        }

        #[test]
        fn kind_is_symmetric_in_the_rays(
            coordinates in proptest::array::uniform6(-1e3f64..1e3),
        ) {
            let [ax, ay, vx, vy, bx, by] = coordinates;
            let (a, vertex, b) = (vector![ax, ay], vector![vx, vy], vector![bx, by]);
            prop_assert_eq!(kind(a, vertex, b), kind(b, vertex, a));
        }
    }
}
