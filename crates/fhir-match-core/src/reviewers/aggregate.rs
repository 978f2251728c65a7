//! Aggregate reviewer: ordered composition of reviewers.

use super::{
    BaseDefinitionReviewer, CardinalityReviewer, ExtensionReviewer, FhirVersionReviewer, Reviewer,
};
use crate::model::Profile;
use crate::review::{merge_reviews, Item, Review};

/// Runs a fixed, ordered list of reviewers against the same pair of
/// profiles and merges their results into one composite review.
///
/// An aggregate is itself a [`Reviewer`], so aggregates compose: new
/// reviewers register by appearing in the list, with no structural change.
pub struct AggregateReviewer {
    name: &'static str,
    reviewers: Vec<Box<dyn Reviewer>>,
}

impl AggregateReviewer {
    pub fn new(name: &'static str, reviewers: Vec<Box<dyn Reviewer>>) -> Self {
        Self { name, reviewers }
    }

    /// The standard StructureDefinition reviewer: FHIR version, base
    /// definition, cardinality, and extensions, in that order.
    pub fn structure_definition() -> Self {
        Self::new(
            "StructureDefinition Reviewer",
            vec![
                Box::new(FhirVersionReviewer),
                Box::new(BaseDefinitionReviewer),
                Box::new(CardinalityReviewer),
                Box::new(ExtensionReviewer),
            ],
        )
    }
}

impl Reviewer for AggregateReviewer {
    fn name(&self) -> &'static str {
        self.name
    }

    fn review(&self, a: &Profile, b: &Profile) -> Review {
        tracing::debug!(reviewer = self.name, a = %a.id, b = %b.id, "starting review");
        let children: Vec<Review> = self
            .reviewers
            .iter()
            .map(|reviewer| reviewer.review(a, b))
            .collect();
        let overall = merge_reviews(&children);
        tracing::debug!(reviewer = self.name, result = %overall, "review complete");
        Review::new(
            self.name,
            Item::document(&a.id),
            Item::document(&b.id),
            overall,
        )
        .with_child_reviews(children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::ReviewResult;

    struct FixedReviewer {
        name: &'static str,
        result: ReviewResult,
    }

    impl Reviewer for FixedReviewer {
        fn name(&self) -> &'static str {
            self.name
        }

        fn review(&self, a: &Profile, b: &Profile) -> Review {
            Review::new(
                self.name,
                Item::document(&a.id),
                Item::document(&b.id),
                self.result,
            )
        }
    }

    #[test]
    fn test_aggregate_merges_child_results_in_order() {
        let aggregate = AggregateReviewer::new(
            "Composite",
            vec![
                Box::new(FixedReviewer {
                    name: "First",
                    result: ReviewResult::Equivalent,
                }),
                Box::new(FixedReviewer {
                    name: "Second",
                    result: ReviewResult::Subset,
                }),
            ],
        );
        let a = Profile::new("a1");
        let b = Profile::new("b1");
        let review = aggregate.review(&a, &b);
        assert_eq!(review.result, ReviewResult::Subset);
        assert_eq!(review.child_reviews.len(), 2);
        assert_eq!(review.child_reviews[0].reviewer, "First");
        assert_eq!(review.child_reviews[1].reviewer, "Second");
    }

    #[test]
    fn test_aggregates_compose() {
        let inner = AggregateReviewer::new(
            "Inner",
            vec![Box::new(FixedReviewer {
                name: "Leaf",
                result: ReviewResult::Superset,
            })],
        );
        let outer = AggregateReviewer::new("Outer", vec![Box::new(inner)]);
        let a = Profile::new("a1");
        let b = Profile::new("b1");
        let review = outer.review(&a, &b);
        assert_eq!(review.result, ReviewResult::Superset);
        assert_eq!(review.child_reviews[0].reviewer, "Inner");
        assert_eq!(
            review.child_reviews[0].child_reviews[0].reviewer,
            "Leaf"
        );
    }

    #[test]
    fn test_aggregate_with_no_reviewers_is_equivalent() {
        let aggregate = AggregateReviewer::new("Empty", Vec::new());
        let review = aggregate.review(&Profile::new("a1"), &Profile::new("b1"));
        assert_eq!(review.result, ReviewResult::Equivalent);
        assert!(review.child_reviews.is_empty());
    }

    #[test]
    fn test_structure_definition_reviewer_order() {
        let reviewer = AggregateReviewer::structure_definition();
        assert_eq!(reviewer.name(), "StructureDefinition Reviewer");
        let review = reviewer.review(&Profile::new("a1"), &Profile::new("b1"));
        let names: Vec<&str> = review
            .child_reviews
            .iter()
            .map(|r| r.reviewer.as_str())
            .collect();
        assert_eq!(
            names,
            [
                "FHIR Version Reviewer",
                "Base Definition Reviewer",
                "Cardinality Reviewer",
                "Extension Reviewer"
            ]
        );
    }
}
