//! Base type compatibility reviewer.

use super::{missing_field_message, Reviewer};
use crate::model::Profile;
use crate::review::{Item, Review, ReviewResult};

const NAME: &str = "Base Definition Reviewer";

/// Compares the base resource type each profile constrains. Profiles of
/// different types permit no common instances at all.
#[derive(Debug, Default)]
pub struct BaseDefinitionReviewer;

impl Reviewer for BaseDefinitionReviewer {
    fn name(&self) -> &'static str {
        NAME
    }

    fn review(&self, a: &Profile, b: &Profile) -> Review {
        let review = Review::new(
            NAME,
            Item::document(&a.id),
            Item::document(&b.id),
            ReviewResult::Unknown,
        );

        let (Some(a_type), Some(b_type)) = (&a.type_, &b.type_) else {
            let message = missing_field_message("type", a.type_.is_none(), b.type_.is_none());
            return review.with_message(message);
        };

        if a_type != b_type {
            return Review {
                result: ReviewResult::Disjoint,
                ..review
            }
            .with_message(format!(
                "A and B do not have the same types (A: {}, B: {}).",
                a_type, b_type
            ));
        }

        Review {
            result: ReviewResult::Equivalent,
            ..review
        }
    }
}
