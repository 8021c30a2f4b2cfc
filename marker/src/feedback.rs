//! # Feedback Templates
//!
//! Fixed set of human-readable `details` strings attached to a [`crate::report::ScoreReport`].

use crate::report::Percentage;

pub const PERFECT_MATCH: &str = "Perfect match!";
pub const BOTH_EMPTY: &str = "Perfect match - both queries returned no rows";
pub const WRONG_ORDER: &str = "Almost! But you need to get your results in the correct order!";

/// Details for a column-set mismatch. Both lists keep the order the engine reported.
pub fn column_mismatch(expected: &[String], got: &[String]) -> String {
    format!(
        "Column mismatch. Expected: {}, Got: {}",
        quoted_list(expected),
        quoted_list(got)
    )
}

/// `['a', 'b']`, with names holding a single quote (and no double quote) wrapped in `"`.
fn quoted_list(names: &[String]) -> String {
    let items: Vec<String> = names.iter().map(|n| quoted(n)).collect();
    format!("[{}]", items.join(", "))
}

fn quoted(name: &str) -> String {
    let escaped = name.replace('\\', "\\\\");
    if name.contains('\'') && !name.contains('"') {
        format!("\"{escaped}\"")
    } else {
        format!("'{}'", escaped.replace('\'', "\\'"))
    }
}

/// Details for a comparison that reached the percentage step.
pub fn row_feedback(
    percentage: Percentage,
    matching_rows: usize,
    total_expected_rows: usize,
    user_row_count: usize,
) -> String {
    if percentage.is_perfect() {
        PERFECT_MATCH.to_string()
    } else if user_row_count < total_expected_rows {
        format!(
            "Found {matching_rows} correct rows, but you're missing {} rows",
            total_expected_rows - user_row_count
        )
    } else if user_row_count > total_expected_rows {
        format!(
            "Found {matching_rows} correct rows, but you have {} extra rows",
            user_row_count - total_expected_rows
        )
    } else {
        format!("Found {matching_rows} of {total_expected_rows} expected rows")
    }
}
