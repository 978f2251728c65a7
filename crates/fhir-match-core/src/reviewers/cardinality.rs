//! Element cardinality compatibility reviewer.

use super::{interval, Reviewer};
use crate::model::{Element, Profile};
use crate::review::{merge_reviews, Item, Review, ReviewResult};

const NAME: &str = "Cardinality Reviewer";

/// Compares the `(min, max)` occurrence bounds of every element the two
/// profiles share by id. Elements present on only one side (e.g. profiled
/// sub-elements) are skipped.
#[derive(Debug, Default)]
pub struct CardinalityReviewer;

impl Reviewer for CardinalityReviewer {
    fn name(&self) -> &'static str {
        NAME
    }

    fn review(&self, a: &Profile, b: &Profile) -> Review {
        let mut children = Vec::new();
        for a_ed in &a.elements {
            let Some(b_ed) = b.element_by_id(&a_ed.id) else {
                continue;
            };
            children.push(review_element(a, a_ed, b, b_ed));
        }
        let overall = merge_reviews(&children);
        Review::new(NAME, Item::document(&a.id), Item::document(&b.id), overall)
            .with_child_reviews(children)
    }
}

fn review_element(a: &Profile, a_ed: &Element, b: &Profile, b_ed: &Element) -> Review {
    let result = interval::classify(a_ed.min, a_ed.max, b_ed.min, b_ed.max);
    let review = Review::new(
        NAME,
        Item::element(&a.id, &a_ed.id),
        Item::element(&b.id, &b_ed.id),
        result,
    );
    // Only indeterminate and incompatible outcomes explain themselves.
    match result {
        ReviewResult::Unknown => review.with_message(format!(
            "Cannot determine cardinality compatibility because at least one cardinality value \
             is missing or invalid (A: {}, B: {}).",
            range_of(a_ed),
            range_of(b_ed)
        )),
        ReviewResult::Disjoint => review.with_message(format!(
            "Cardinalities are not compatible (A: {}, B: {}).",
            range_of(a_ed),
            range_of(b_ed)
        )),
        _ => review,
    }
}

/// Render an element's raw cardinality range, with `?` for missing bounds.
fn range_of(ed: &Element) -> String {
    let min = ed
        .min
        .map_or_else(|| "?".to_string(), |m| m.to_string());
    let max = ed
        .max
        .map_or_else(|| "?".to_string(), |m| m.to_string());
    format!("{}..{}", min, max)
}
