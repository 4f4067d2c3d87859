//! Sign-exact 2D geometric predicates over adaptive-precision arithmetic.
//!
//! Floating-point rounding can flip the sign of a nearly-zero determinant,
//! which is exactly the case geometric algorithms branch on. The predicates
//! here (orientation, angle kind, in-circle, segment intersection) always
//! return the sign of the exact real-number result: a fast floating-point
//! evaluation runs first, and only when a forward error bound cannot certify
//! its sign does the computation escalate through progressively exact
//! stages built on error-free expansions (after Shewchuk, "Adaptive
//! Precision Floating-Point Arithmetic and Fast Robust Geometric
//! Predicates").
//!
//! All predicates are generic over [`scalar::Scalar`]; `f64` and `f32` take
//! the staged path, while exact scalars such as `num_rational::Rational64`
//! short-circuit to the direct formula.

pub mod angular;
pub mod bounds;
pub mod cocircular;
pub mod expansion;
pub mod linear;
pub mod parallelogram;
pub mod projection;
pub mod scalar;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A point in the plane, also used for plane vectors.
pub type Point<S> = nalgebra::Vector2<S>;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::angular::{kind, orientation, Kind, Orientation};
    pub use crate::cocircular::determinant as cocircular_determinant;
    pub use crate::linear::{
        find_intersection, segment_contains, segments_intersections, segments_relationship,
        Segment, SegmentsRelationship,
    };
    pub use crate::parallelogram::signed_area;
    pub use crate::projection::signed_length;
    pub use crate::scalar::Scalar;
    pub use crate::Point;
}
