//! Review output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.
//! Reviews are constructed bottom-up: children are built first and attached
//! with the consuming `with_*` builders, so a finished review is never
//! observed half-populated.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The compatibility relationship between the instance sets two profiles
/// permit: `Sa` for side A, `Sb` for side B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewResult {
    /// Sa = Sb
    Equivalent,
    /// Sa ⊊ Sb
    Subset,
    /// Sa ⊋ Sb
    Superset,
    /// Sa ∩ Sb ≠ ∅ and neither contains the other
    Overlapping,
    /// Sa ∩ Sb = ∅
    Disjoint,
    /// The relationship cannot be determined (missing or invalid data)
    Unknown,
}

impl fmt::Display for ReviewResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReviewResult::Equivalent => "equivalent",
            ReviewResult::Subset => "subset",
            ReviewResult::Superset => "superset",
            ReviewResult::Overlapping => "overlapping",
            ReviewResult::Disjoint => "disjoint",
            ReviewResult::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

/// Identifies the document node a review side refers to.
///
/// `path` is absent when the review concerns a whole document rather than
/// one element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Document identifier
    pub id: String,
    /// Element identifier within the document, if the review is element-scoped
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub path: Option<String>,
}

impl Item {
    /// An item referring to a whole document.
    pub fn document(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            path: None,
        }
    }

    /// An item referring to one element of a document.
    pub fn element(id: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            path: Some(path.into()),
        }
    }
}

/// One node of a review tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Name of the reviewer that produced this node
    pub reviewer: String,
    /// The side-A document node this review concerns
    pub a: Item,
    /// The side-B document node this review concerns
    pub b: Item,
    /// The compatibility judgement
    pub result: ReviewResult,
    /// Human-readable explanation, present only where the reviewer defines one
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
    /// Constituent reviews this node aggregates
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub child_reviews: Vec<Review>,
}

impl Review {
    /// Create a review with no message and no children.
    pub fn new(reviewer: impl Into<String>, a: Item, b: Item, result: ReviewResult) -> Self {
        Self {
            reviewer: reviewer.into(),
            a,
            b,
            result,
            message: None,
            child_reviews: Vec::new(),
        }
    }

    /// Attach a message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attach child reviews.
    pub fn with_child_reviews(mut self, children: impl IntoIterator<Item = Review>) -> Self {
        self.child_reviews.extend(children);
        self
    }

    /// All nodes of this tree whose result is not `equivalent`, in
    /// pre-order (a node before its children).
    pub fn non_equivalent(&self) -> Vec<&Review> {
        let mut collected = Vec::new();
        self.collect_non_equivalent(&mut collected);
        collected
    }

    fn collect_non_equivalent<'a>(&'a self, collected: &mut Vec<&'a Review>) {
        if self.result != ReviewResult::Equivalent {
            collected.push(self);
        }
        for child in &self.child_reviews {
            child.collect_non_equivalent(collected);
        }
    }
}
