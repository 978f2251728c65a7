//! Extension slot compatibility reviewer.
//!
//! Matches extension-bearing elements by structural path, groups sibling
//! slices by the profile URI they declare, aggregates cardinality across
//! the slices of each group, and classifies the aggregates. Extensions
//! nested inside other extensions are out of scope.

use std::collections::{HashMap, HashSet};

use super::{interval, Reviewer};
use crate::model::{CardinalityMax, Element, Profile};
use crate::review::{merge_reviews, Item, Review, ReviewResult};

const NAME: &str = "Extension Reviewer";

const INDETERMINATE_MESSAGE: &str = "Cannot determine extension compatibility because at least \
     one extension element of this element's type has missing or invalid cardinality.";

/// Compares the extension slots two profiles constrain.
///
/// Pass 1 walks A's qualifying elements: a path B does not constrain at
/// all is a subset; otherwise each profile declared at the path is
/// classified by aggregate cardinality, once per (path, profile). Pass 2
/// walks B's qualifying elements looking only for superset evidence:
/// paths or profiles A does not constrain.
#[derive(Debug, Default)]
pub struct ExtensionReviewer;

impl Reviewer for ExtensionReviewer {
    fn name(&self) -> &'static str {
        NAME
    }

    fn review(&self, a: &Profile, b: &Profile) -> Review {
        let mut reviews = Vec::new();
        // profiles already evaluated at a given path; repeated sibling
        // slices may declare the same profile
        let mut reviewed: HashMap<&str, HashSet<&str>> = HashMap::new();

        for a_ed in a.elements.iter().filter(|e| is_extension_slot(e)) {
            let b_elements: Vec<&Element> = b.elements_at_path(&a_ed.path).collect();
            if b_elements.is_empty() {
                // B places no constraint at this path at all
                reviews.push(Review::new(
                    NAME,
                    Item::element(&a.id, &a_ed.id),
                    Item::document(&b.id),
                    ReviewResult::Subset,
                ));
                continue;
            }
            for profile in &a_ed.type_profiles {
                let seen = reviewed
                    .get(a_ed.path.as_str())
                    .is_some_and(|profiles| profiles.contains(profile.as_str()));
                if !seen {
                    reviews.push(review_profile_at_path(a, a_ed, b, &b_elements, profile));
                    reviewed
                        .entry(a_ed.path.as_str())
                        .or_default()
                        .insert(profile.as_str());
                }
            }
        }

        for b_ed in b.elements.iter().filter(|e| is_extension_slot(e)) {
            let a_elements: Vec<&Element> = a.elements_at_path(&b_ed.path).collect();
            if a_elements.is_empty() {
                reviews.push(Review::new(
                    NAME,
                    Item::document(&a.id),
                    Item::element(&b.id, &b_ed.id),
                    ReviewResult::Superset,
                ));
            } else {
                for profile in &b_ed.type_profiles {
                    let a_has_profile = a_elements
                        .iter()
                        .any(|e| e.type_profiles.iter().any(|p| p == profile));
                    if !a_has_profile {
                        reviews.push(
                            Review::new(
                                NAME,
                                Item::document(&a.id),
                                Item::element(&b.id, &b_ed.id),
                                ReviewResult::Superset,
                            )
                            .with_message(format!("Extension profile: {}", profile)),
                        );
                    }
                }
            }
        }

        let overall = merge_reviews(&reviews);
        Review::new(NAME, Item::document(&a.id), Item::document(&b.id), overall)
            .with_child_reviews(reviews)
    }
}

/// Review one (path, profile) group: classify the aggregate cardinality of
/// all A slices bearing the profile against all B slices bearing it.
fn review_profile_at_path(
    a: &Profile,
    a_ed: &Element,
    b: &Profile,
    b_elements: &[&Element],
    profile: &str,
) -> Review {
    let b_same: Vec<&Element> = b_elements
        .iter()
        .copied()
        .filter(|e| e.type_profiles.iter().any(|p| p == profile))
        .collect();
    if b_same.is_empty() {
        // B constrains the path but never with this profile
        return Review::new(
            NAME,
            Item::element(&a.id, &a_ed.id),
            Item::document(&b.id),
            ReviewResult::Subset,
        )
        .with_message(format!("Extension profile: {}", profile));
    }

    let a_same: Vec<&Element> = a
        .elements_at_path(&a_ed.path)
        .filter(|e| e.type_profiles.iter().any(|p| p == profile))
        .collect();

    let result = interval::classify(
        aggregate_min(&a_same),
        aggregate_max(&a_same),
        aggregate_min(&b_same),
        aggregate_max(&b_same),
    );

    let mut pairs = Vec::with_capacity(a_same.len() * b_same.len());
    for a_slice in &a_same {
        for b_slice in &b_same {
            let mut pair = Review::new(
                NAME,
                Item::element(&a.id, &a_slice.id),
                Item::element(&b.id, &b_slice.id),
                result,
            );
            if result == ReviewResult::Unknown {
                pair = pair.with_message(INDETERMINATE_MESSAGE);
            }
            pairs.push(pair);
        }
    }

    Review::new(
        NAME,
        Item::element(&a.id, &a_ed.id),
        Item::element(&b.id, &a_ed.path),
        result,
    )
    .with_child_reviews(pairs)
    .with_message(format!("Extension profile: {}", profile))
}

/// An element constrains an extension slot when its path ends in an
/// extension segment, is not nested inside another extension, and declares
/// at least one profile on its type.
fn is_extension_slot(ed: &Element) -> bool {
    (ed.path.ends_with(".extension") || ed.path.ends_with(".modifierExtension"))
        && !ed.path.contains(".extension.")
        && !ed.path.contains(".modifierExtension.")
        && !ed.type_profiles.is_empty()
}

/// Sum of slice minimums; any missing minimum makes the sum indeterminate.
fn aggregate_min(elements: &[&Element]) -> Option<u32> {
    elements
        .iter()
        .try_fold(0u32, |sum, e| e.min.map(|min| sum.saturating_add(min)))
}

/// Sum of slice maximums; any missing maximum makes the sum indeterminate,
/// and any unbounded maximum makes the sum unbounded. Missing wins.
fn aggregate_max(elements: &[&Element]) -> Option<CardinalityMax> {
    elements
        .iter()
        .try_fold(CardinalityMax::Count(0), |sum, e| {
            e.max.map(|max| sum.saturating_add(max))
        })
}
