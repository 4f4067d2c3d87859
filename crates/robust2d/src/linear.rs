//! Segment relationship classification and exact intersection points.
//!
//! Everything here is a consumer of the sign-exact predicates: orientation
//! tests decide whether two segments cross, touch, or overlap, and the
//! intersection formula only runs once a proper crossing is established.

use crate::angular::{kind, orientation, Kind, Orientation};
use crate::parallelogram::signed_area;
use crate::scalar::Scalar;
use crate::Point;

/// A directed segment between two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment<S: Scalar> {
    pub start: Point<S>,
    pub end: Point<S>,
}

impl<S: Scalar> Segment<S> {
    pub fn new(start: Point<S>, end: Point<S>) -> Self {
        Self { start, end }
    }

    /// The same segment traversed in the opposite direction.
    pub fn reversed(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }
}

/// How two segments relate to each other as point sets.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(i8)]
pub enum SegmentsRelationship {
    /// Disjoint segments.
    None = 0,
    /// The segments share exactly one point.
    Cross = 1,
    /// The segments share a sub-segment (or are equal).
    Overlap = 2,
}

/// Classifies how `left` and `right` relate, treating touching collinear
/// endpoints and proper crossings separately.
pub fn segments_relationship<S: Scalar>(
    left: Segment<S>,
    right: Segment<S>,
) -> SegmentsRelationship {
    if left == right || left == right.reversed() {
        return SegmentsRelationship::Overlap;
    }
    let left_start_orientation = orientation(right.start, right.end, left.start);
    let left_end_orientation = orientation(right.start, right.end, left.end);
    if left_start_orientation == Orientation::Collinear
        && bounding_box_contains(right, left.start)
    {
        if left_end_orientation == Orientation::Collinear {
            if left.start == right.start {
                if kind(left.end, left.start, right.end) == Kind::Acute {
                    SegmentsRelationship::Overlap
                } else {
                    SegmentsRelationship::Cross
                }
            } else if left.start == right.end {
                if kind(left.end, left.start, right.start) == Kind::Acute {
                    SegmentsRelationship::Overlap
                } else {
                    SegmentsRelationship::Cross
                }
            } else {
                SegmentsRelationship::Overlap
            }
        } else {
            SegmentsRelationship::Cross
        }
    } else if left_end_orientation == Orientation::Collinear
        && bounding_box_contains(right, left.end)
    {
        if left_start_orientation == Orientation::Collinear {
            if left.end == right.start {
                if kind(left.start, left.end, right.end) == Kind::Acute {
                    SegmentsRelationship::Overlap
                } else {
                    SegmentsRelationship::Cross
                }
            } else if left.end == right.end {
                if kind(left.start, left.end, right.start) == Kind::Acute {
                    SegmentsRelationship::Overlap
                } else {
                    SegmentsRelationship::Cross
                }
            } else {
                SegmentsRelationship::Overlap
            }
        } else {
            SegmentsRelationship::Cross
        }
    } else {
        let right_start_orientation = orientation(left.end, left.start, right.start);
        let right_end_orientation = orientation(left.end, left.start, right.end);
        if left_start_orientation.sign() * left_end_orientation.sign() < 0
            && right_start_orientation.sign() * right_end_orientation.sign() < 0
        {
            SegmentsRelationship::Cross
        } else if right_start_orientation == Orientation::Collinear
            && bounding_box_contains(left, right.start)
        {
            if right_end_orientation == Orientation::Collinear {
                SegmentsRelationship::Overlap
            } else {
                SegmentsRelationship::Cross
            }
        } else if right_end_orientation == Orientation::Collinear
            && bounding_box_contains(left, right.end)
        {
            if right_start_orientation == Orientation::Collinear {
                SegmentsRelationship::Overlap
            } else {
                SegmentsRelationship::Cross
            }
        } else {
            SegmentsRelationship::None
        }
    }
}

/// All intersection points of two segments: none when disjoint, the single
/// crossing point, or the two endpoints of the shared sub-segment.
pub fn segments_intersections<S: Scalar>(left: Segment<S>, right: Segment<S>) -> Vec<Point<S>> {
    match segments_relationship(left, right) {
        SegmentsRelationship::None => Vec::new(),
        SegmentsRelationship::Cross => vec![find_intersection(left, right)],
        SegmentsRelationship::Overlap => {
            // The shared sub-segment spans the two middle endpoints in
            // lexicographic order.
            let mut endpoints = [left.start, left.end, right.start, right.end];
            endpoints.sort_by(lexicographic);
            vec![endpoints[1], endpoints[2]]
        }
    }
}

/// The single point where two crossing segments meet.
///
/// Callers are expected to have established `SegmentsRelationship::Cross`
/// first; shared endpoints are returned exactly, interior crossings via the
/// parametrization whose numerator is larger in magnitude (averaging the two
/// parametrizations on an exact tie).
pub fn find_intersection<S: Scalar>(left: Segment<S>, right: Segment<S>) -> Point<S> {
    if segment_contains(left, right.start) {
        right.start
    } else if segment_contains(left, right.end) {
        right.end
    } else if segment_contains(right, left.start) {
        left.start
    } else if segment_contains(right, left.end) {
        left.end
    } else {
        let denominator = signed_area(left.start, left.end, right.start, right.end);
        let left_base_numerator = signed_area(left.start, right.start, right.start, right.end);
        let right_base_numerator = signed_area(left.start, right.start, left.start, left.end);
        let base_numerators_diff = right_base_numerator.abs() - left_base_numerator.abs();
        let denominator_inv = S::ONE / denominator;
        if base_numerators_diff.is_zero() {
            Point::new(
                (left.start.x
                    + right.start.x
                    + ((left.end.x - left.start.x) * left_base_numerator
                        + (right.end.x - right.start.x) * right_base_numerator)
                        * denominator_inv)
                    / S::TWO,
                (left.start.y
                    + right.start.y
                    + ((left.end.y - left.start.y) * left_base_numerator
                        + (right.end.y - right.start.y) * right_base_numerator)
                        * denominator_inv)
                    / S::TWO,
            )
        } else if base_numerators_diff > S::ZERO {
            Point::new(
                left.start.x + left_base_numerator * (left.end.x - left.start.x) * denominator_inv,
                left.start.y + left_base_numerator * (left.end.y - left.start.y) * denominator_inv,
            )
        } else {
            Point::new(
                right.start.x
                    + right_base_numerator * (right.end.x - right.start.x) * denominator_inv,
                right.start.y
                    + right_base_numerator * (right.end.y - right.start.y) * denominator_inv,
            )
        }
    }
}

/// Whether `point` lies on `segment`, endpoints included.
pub fn segment_contains<S: Scalar>(segment: Segment<S>, point: Point<S>) -> bool {
    point == segment.start
        || point == segment.end
        || (bounding_box_contains(segment, point)
            && orientation(segment.end, segment.start, point) == Orientation::Collinear)
}

fn bounding_box_contains<S: Scalar>(segment: Segment<S>, point: Point<S>) -> bool {
    let (left_x, right_x) = if segment.start.x < segment.end.x {
        (segment.start.x, segment.end.x)
    } else {
        (segment.end.x, segment.start.x)
    };
    let (bottom_y, top_y) = if segment.start.y < segment.end.y {
        (segment.start.y, segment.end.y)
    } else {
        (segment.end.y, segment.start.y)
    };
    left_x <= point.x && point.x <= right_x && bottom_y <= point.y && point.y <= top_y
}

fn lexicographic<S: Scalar>(left: &Point<S>, right: &Point<S>) -> std::cmp::Ordering {
    use std::cmp::Ordering;
    // Finite scalars are totally ordered; NaN is out of contract.
    if left.x < right.x {
        Ordering::Less
    } else if right.x < left.x {
        Ordering::Greater
    } else if left.y < right.y {
        Ordering::Less
    } else if right.y < left.y {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use num_rational::Rational64;
    use proptest::prelude::*;

    fn segment(start: (f64, f64), end: (f64, f64)) -> Segment<f64> {
        Segment::new(vector![start.0, start.1], vector![end.0, end.1])
    }

    #[test]
    fn crossing_diagonals() {
        let first = segment((0.0, 0.0), (2.0, 2.0));
        let second = segment((0.0, 2.0), (2.0, 0.0));
        assert_eq!(
            segments_relationship(first, second),
            SegmentsRelationship::Cross
        );
        assert_eq!(find_intersection(first, second), vector![1.0, 1.0]);
        assert_eq!(segments_intersections(first, second), vec![vector![1.0, 1.0]]);
    }

    #[test]
    fn disjoint_segments() {
        let first = segment((0.0, 0.0), (1.0, 0.0));
        let second = segment((0.0, 1.0), (1.0, 1.0));
        assert_eq!(
            segments_relationship(first, second),
            SegmentsRelationship::None
        );
        assert!(segments_intersections(first, second).is_empty());
    }

    #[test]
    fn touching_at_an_endpoint_is_a_cross() {
        let first = segment((0.0, 0.0), (2.0, 0.0));
        // T-shaped touch in the interior.
        let second = segment((1.0, 0.0), (1.0, 3.0));
        assert_eq!(
            segments_relationship(first, second),
            SegmentsRelationship::Cross
        );
        assert_eq!(find_intersection(first, second), vector![1.0, 0.0]);
        // Collinear continuation sharing one endpoint at an obtuse angle.
        let continuation = segment((2.0, 0.0), (4.0, 0.0));
        assert_eq!(
            segments_relationship(first, continuation),
            SegmentsRelationship::Cross
        );
    }

    #[test]
    fn collinear_overlap() {
        let first = segment((0.0, 0.0), (3.0, 0.0));
        let second = segment((1.0, 0.0), (5.0, 0.0));
        assert_eq!(
            segments_relationship(first, second),
            SegmentsRelationship::Overlap
        );
        assert_eq!(
            segments_intersections(first, second),
            vec![vector![1.0, 0.0], vector![3.0, 0.0]]
        );
        // Doubling back over a shared endpoint keeps an acute angle between
        // the non-shared rays.
        let doubled_back = segment((3.0, 0.0), (1.0, 0.0));
        assert_eq!(
            segments_relationship(segment((3.0, 0.0), (0.0, 0.0)), doubled_back),
            SegmentsRelationship::Overlap
        );
    }

    #[test]
    fn segment_contains_endpoints_and_interior() {
        let diagonal = segment((0.0, 0.0), (4.0, 4.0));
        assert!(segment_contains(diagonal, vector![0.0, 0.0]));
        assert!(segment_contains(diagonal, vector![4.0, 4.0]));
        assert!(segment_contains(diagonal, vector![2.0, 2.0]));
        assert!(!segment_contains(diagonal, vector![5.0, 5.0]));
        assert!(!segment_contains(diagonal, vector![2.0, 2.5]));
    }

    #[test]
    fn exact_intersection_with_rational_scalars() {
        let point = |x: i64, y: i64| vector![Rational64::from(x), Rational64::from(y)];
        let first = Segment::new(point(0, 0), point(1, 1));
        let second = Segment::new(point(0, 1), point(1, 0));
        assert_eq!(
            find_intersection(first, second),
            vector![Rational64::new(1, 2), Rational64::new(1, 2)]
        );
    }

    fn segment_strategy() -> impl Strategy<Value = Segment<f64>> {
        proptest::array::uniform4(-8i64..=8)
            .prop_filter("degenerate", |c| (c[0], c[1]) != (c[2], c[3]))
            .prop_map(|c| {
                segment(
                    (c[0] as f64 * 0.5, c[1] as f64 * 0.5),
                    (c[2] as f64 * 0.5, c[3] as f64 * 0.5),
                )
            })
    }

    proptest! {
        #[test]
        fn relationship_is_commutative(
            left in segment_strategy(),
            right in segment_strategy(),
        ) {
            prop_assert_eq!(
                segments_relationship(left, right),
                segments_relationship(right, left)
            );
        }

        #[test]
        fn every_segment_overlaps_itself(candidate in segment_strategy()) {
            prop_assert_eq!(
                segments_relationship(candidate, candidate),
                SegmentsRelationship::Overlap
            );
            prop_assert_eq!(
                segments_relationship(candidate, candidate.reversed()),
                SegmentsRelationship::Overlap
            );
            let mut endpoints = [candidate.start, candidate.end];
            endpoints.sort_by(lexicographic);
            prop_assert_eq!(
                segments_intersections(candidate, candidate),
                endpoints.to_vec()
            );
        }

        #[test]
        fn crossing_intersection_is_collinear_with_both(
            coordinates in proptest::array::uniform8(-8i64..=8),
        ) {
            // Rational scalars keep the intersection exact, so it must lie
            // on both supporting lines.
            let point = |x: i64, y: i64| vector![Rational64::from(x), Rational64::from(y)];
            let left = Segment::new(
                point(coordinates[0], coordinates[1]),
                point(coordinates[2], coordinates[3]),
            );
            let right = Segment::new(
                point(coordinates[4], coordinates[5]),
                point(coordinates[6], coordinates[7]),
            );
            prop_assume!(left.start != left.end && right.start != right.end);
            prop_assume!(
                segments_relationship(left, right) == SegmentsRelationship::Cross
            );
            let crossing = find_intersection(left, right);
            for segment in [left, right] {
                prop_assert_eq!(
                    crate::angular::orientation(segment.end, segment.start, crossing),
                    Orientation::Collinear
                );
            }
            prop_assert!(segment_contains(left, crossing));
            prop_assert!(segment_contains(right, crossing));
        }

        #[test]
        fn intersection_respects_reflection_symmetry(
            left in segment_strategy(),
            right in segment_strategy(),
        ) {
            prop_assume!(
                segments_relationship(left, right) == SegmentsRelationship::Cross
            );
            let reflect = |p: Point<f64>| vector![-p.x, p.y];
            let crossing = find_intersection(left, right);
            let reflected = find_intersection(
                Segment::new(reflect(left.start), reflect(left.end)),
                Segment::new(reflect(right.start), reflect(right.end)),
            );
            prop_assert_eq!(reflect(crossing), reflected);
        }
    }
}
