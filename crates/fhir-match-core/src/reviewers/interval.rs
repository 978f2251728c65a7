//! Interval relation over cardinality ranges.
//!
//! Classifies two `(min, max)` occurrence ranges into the six-valued
//! result lattice. A bound may be missing, which always yields `unknown`;
//! an upper bound may be [`CardinalityMax::Unbounded`], which compares
//! above every finite count.

use crate::model::CardinalityMax;
use crate::review::ReviewResult;

/// Classify the relationship between range A and range B.
///
/// With `Sa` the set of occurrence counts A permits and `Sb` the set B
/// permits: equal bounds → equivalent; A within B → subset; B within A →
/// superset; ranges sharing at least one point without containment →
/// overlapping; otherwise disjoint. Any missing bound → unknown.
pub fn classify(
    a_min: Option<u32>,
    a_max: Option<CardinalityMax>,
    b_min: Option<u32>,
    b_max: Option<CardinalityMax>,
) -> ReviewResult {
    let (Some(a_min), Some(a_max), Some(b_min), Some(b_max)) = (a_min, a_max, b_min, b_max) else {
        return ReviewResult::Unknown;
    };

    if a_min == b_min && a_max == b_max {
        ReviewResult::Equivalent
    } else if a_min >= b_min && a_max <= b_max {
        ReviewResult::Subset
    } else if a_min <= b_min && a_max >= b_max {
        ReviewResult::Superset
    } else if (b_min <= a_min && CardinalityMax::Count(a_min) <= b_max)
        || (CardinalityMax::Count(b_min) <= a_max && a_max <= b_max)
    {
        ReviewResult::Overlapping
    } else {
        ReviewResult::Disjoint
    }
}
