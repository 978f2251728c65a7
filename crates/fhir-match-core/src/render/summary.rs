//! Framed summary box and per-review detail lines.

use crate::review::{Review, ReviewResult};

/// Columns between the frame characters.
const INNER_WIDTH: usize = 78;

/// Render the framed summary of a top-level review: A/B header, one row
/// per constituent reviewer with its result right-aligned, indented rows
/// for non-equivalent element paths, and the overall result.
///
/// Assumes the tree is at most three levels deep (overall → reviewer →
/// element), which is what the aggregate reviewer produces.
pub fn render_summary(review: &Review) -> String {
    let mut lines = Vec::new();
    lines.push(title_bar(" FHIR MATCH "));
    lines.push(row(&format!("A: {}", review.a.id)));
    lines.push(row(&format!("B: {}", review.b.id)));
    lines.push(heavy_divider());

    for (index, child) in review.child_reviews.iter().enumerate() {
        lines.push(two_col_row(&child.reviewer, &child.result.to_string()));
        let non_equivalent = child
            .child_reviews
            .iter()
            .filter(|r| r.result != ReviewResult::Equivalent);
        for sub in non_equivalent {
            let path = sub
                .a
                .path
                .as_deref()
                .or(sub.b.path.as_deref())
                .unwrap_or(&sub.a.id);
            lines.push(two_col_row(
                &format!("  {}", path),
                &sub.result.to_string(),
            ));
        }
        if index < review.child_reviews.len() - 1 {
            lines.push(light_divider());
        }
    }

    lines.push(heavy_divider());
    lines.push(two_col_row("OVERALL:", &review.result.to_string()));
    lines.push(bottom_bar());
    lines.join("\n")
}

/// Detail lines for every non-equivalent leaf review: reviewer and result,
/// both sides with their element paths, and the message when present.
pub fn render_review_details(review: &Review) -> Vec<String> {
    let mut lines = Vec::new();
    for r in review.non_equivalent() {
        if !r.child_reviews.is_empty() {
            continue;
        }
        let pad = r.a.id.len().max(r.b.id.len());
        lines.push(format!("{} Result: {}", r.reviewer, r.result));
        lines.push(format!("  A: {:<pad$}{}", r.a.id, suffix(&r.a.path)));
        lines.push(format!("  B: {:<pad$}{}", r.b.id, suffix(&r.b.path)));
        if let Some(message) = &r.message {
            lines.push(format!("  {}", message));
        }
    }
    lines
}

fn suffix(path: &Option<String>) -> String {
    match path {
        Some(path) => format!(" -> {}", path),
        None => String::new(),
    }
}

fn title_bar(title: &str) -> String {
    let fill = INNER_WIDTH.saturating_sub(title.len());
    format!(
        "╔{}{}{}╗",
        "═".repeat(fill / 2),
        title,
        "═".repeat(fill - fill / 2)
    )
}

fn heavy_divider() -> String {
    format!("╠{}╣", "═".repeat(INNER_WIDTH))
}

fn light_divider() -> String {
    format!("║{}║", "─".repeat(INNER_WIDTH))
}

fn bottom_bar() -> String {
    format!("╚{}╝", "═".repeat(INNER_WIDTH))
}

fn row(content: &str) -> String {
    format!("║ {:<width$} ║", content, width = INNER_WIDTH - 2)
}

/// A row with a left label and a right-aligned value.
fn two_col_row(left: &str, right: &str) -> String {
    let width = (INNER_WIDTH - 3).saturating_sub(left.len());
    format!("║ {} {:>width$} ║", left, right)
}
