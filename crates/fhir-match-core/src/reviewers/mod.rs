//! Compatibility reviewers.
//!
//! Each reviewer judges one dimension of compatibility between two
//! [`Profile`]s and produces a finished [`Review`] tree. Reviewers are pure:
//! they never mutate their inputs, hold no state between calls, and never
//! fail for well-formed input. Missing optional fields degrade to
//! `unknown` results.
//!
//! The [`AggregateReviewer`] composes reviewers behind the same trait, so
//! an aggregate can itself participate in a larger aggregate.

pub mod aggregate;
pub mod base_definition;
pub mod cardinality;
pub mod extension;
pub mod fhir_version;
pub mod interval;

pub use aggregate::AggregateReviewer;
pub use base_definition::BaseDefinitionReviewer;
pub use cardinality::CardinalityReviewer;
pub use extension::ExtensionReviewer;
pub use fhir_version::FhirVersionReviewer;

use crate::model::Profile;
use crate::review::Review;

/// One dimension of compatibility judgement between two profiles.
pub trait Reviewer {
    /// Reviewer name, recorded on every review this reviewer produces.
    fn name(&self) -> &'static str;

    /// Compare two profiles and produce a finished review tree.
    fn review(&self, a: &Profile, b: &Profile) -> Review;
}

/// Message naming the side(s) missing a required field, with verb
/// agreement: "A does not declare a type." / "A and B do not declare a
/// fhirVersion."
pub(crate) fn missing_field_message(field: &str, a_missing: bool, b_missing: bool) -> String {
    let mut transgressors = Vec::new();
    if a_missing {
        transgressors.push("A");
    }
    if b_missing {
        transgressors.push("B");
    }
    let verb = if transgressors.len() == 1 {
        "does"
    } else {
        "do"
    };
    format!(
        "{} {} not declare a {}.",
        transgressors.join(" and "),
        verb,
        field
    )
}
