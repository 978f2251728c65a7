//! FHIR version compatibility reviewer.

use super::{missing_field_message, Reviewer};
use crate::model::Profile;
use crate::review::{Item, Review, ReviewResult};

const NAME: &str = "FHIR Version Reviewer";

/// Compares the publication and major components of each profile's
/// declared FHIR version. Only the first two dot-separated components
/// matter: "4.0.1" and "4.0.9" are equivalent.
#[derive(Debug, Default)]
pub struct FhirVersionReviewer;

impl Reviewer for FhirVersionReviewer {
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

        let (Some(a_version), Some(b_version)) = (&a.fhir_version, &b.fhir_version) else {
            let message = missing_field_message(
                "fhirVersion",
                a.fhir_version.is_none(),
                b.fhir_version.is_none(),
            );
            return review.with_message(message);
        };

        if publication_and_major(a_version) != publication_and_major(b_version) {
            return Review {
                result: ReviewResult::Disjoint,
                ..review
            }
            .with_message(format!(
                "A and B do not have compatible FHIR versions (A: {}, B: {}).",
                a_version, b_version
            ));
        }

        Review {
            result: ReviewResult::Equivalent,
            ..review
        }
    }
}

/// The first two dot-separated components of a version string.
fn publication_and_major(version: &str) -> (Option<&str>, Option<&str>) {
    let mut parts = version.split('.');
    (parts.next(), parts.next())
}
