//! Lattice merge: folding many child results into one parent result.

use super::model::{Review, ReviewResult};

/// Reviews partitioned by result kind, preserving relative order within
/// each bucket.
#[derive(Debug, Default)]
pub struct OrganizedReviews<'a> {
    pub equivalent: Vec<&'a Review>,
    pub subset: Vec<&'a Review>,
    pub superset: Vec<&'a Review>,
    pub overlapping: Vec<&'a Review>,
    pub disjoint: Vec<&'a Review>,
    pub unknown: Vec<&'a Review>,
}

/// Partition reviews into the six result buckets.
pub fn organize_reviews(reviews: &[Review]) -> OrganizedReviews<'_> {
    let mut organized = OrganizedReviews::default();
    for review in reviews {
        match review.result {
            ReviewResult::Equivalent => organized.equivalent.push(review),
            ReviewResult::Subset => organized.subset.push(review),
            ReviewResult::Superset => organized.superset.push(review),
            ReviewResult::Overlapping => organized.overlapping.push(review),
            ReviewResult::Disjoint => organized.disjoint.push(review),
            ReviewResult::Unknown => organized.unknown.push(review),
        }
    }
    organized
}

/// Merge many results into one, by precedence:
///
/// 1. every result is equivalent (vacuously true for no results) → equivalent
/// 2. at least one disjoint → disjoint
/// 3. at least one unknown → unknown
/// 4. at least one overlapping, or both subset and superset present → overlapping
/// 5. at least one subset → subset
/// 6. at least one superset → superset
/// 7. otherwise → unknown (unreachable when 1–6 are exhaustive)
///
/// The outcome depends only on which kinds are present, never on order.
pub fn merge_results(results: impl IntoIterator<Item = ReviewResult>) -> ReviewResult {
    let mut total = 0usize;
    let mut equivalent = 0usize;
    let mut subset = 0usize;
    let mut superset = 0usize;
    let mut overlapping = 0usize;
    let mut disjoint = 0usize;
    let mut unknown = 0usize;

    for result in results {
        total += 1;
        match result {
            ReviewResult::Equivalent => equivalent += 1,
            ReviewResult::Subset => subset += 1,
            ReviewResult::Superset => superset += 1,
            ReviewResult::Overlapping => overlapping += 1,
            ReviewResult::Disjoint => disjoint += 1,
            ReviewResult::Unknown => unknown += 1,
        }
    }

    if equivalent == total {
        ReviewResult::Equivalent
    } else if disjoint > 0 {
        ReviewResult::Disjoint
    } else if unknown > 0 {
        ReviewResult::Unknown
    } else if overlapping > 0 || (subset > 0 && superset > 0) {
        ReviewResult::Overlapping
    } else if subset > 0 {
        ReviewResult::Subset
    } else if superset > 0 {
        ReviewResult::Superset
    } else {
        ReviewResult::Unknown
    }
}

/// Merge the results of a slice of reviews.
pub fn merge_reviews(reviews: &[Review]) -> ReviewResult {
    merge_results(reviews.iter().map(|r| r.result))
}
