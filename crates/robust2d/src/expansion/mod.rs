//! Adaptive-precision arithmetic: error-free transforms and expansions.
//!
//! Purpose
//! - Represent real values exactly as sums of scalar components and combine
//!   them without losing bits, so the predicates can escalate from a fast
//!   approximate result to an exact-sign one only when forced to.
//!
//! Layout
//! - `eft`: single-operation transforms returning `(approximation, tail)`.
//! - `algebra`: merges, scaling, cross products, invariant predicates.
//!
//! References
//! - Shewchuk, "Adaptive Precision Floating-Point Arithmetic and Fast
//!   Robust Geometric Predicates", Discrete Comput Geom 18 (1997).

pub mod algebra;
pub mod eft;

pub use algebra::{
    estimate, is_expansion, is_sorted_by_magnitude, most_significant, scale_expansion,
    sum_expansions,
    to_cross_product, two_one_diff, two_one_sum, two_two_diff, two_two_sum, Expansion,
};
pub use eft::{
    fast_two_sum, split, square, two_diff, two_diff_tail, two_product, two_product_presplit,
    two_sum,
};
