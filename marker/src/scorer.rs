//! # Scorer Module
//!
//! Turns row counts into a percentage. The rules differ by how the user's row count relates
//! to the expected row count:
//!
//! - **Same count**: share of expected rows that matched.
//! - **Too few rows**: capped at the share of rows actually returned, so a subset of correct
//!   rows can never score higher than its size allows.
//! - **Too many rows**: share of expected rows that matched, minus 5 points per extra row,
//!   with the penalty capped at 30 points.

use crate::report::Percentage;

/// Points deducted per surplus row.
pub const EXTRA_ROW_PENALTY: f64 = 5.0;
/// Largest total deduction for surplus rows.
pub const MAX_EXTRA_ROW_PENALTY: f64 = 30.0;

/// Round to one decimal place from the exact binary value, ties to even.
///
/// Scaling by 10 first would round twice: `0.8500000000000001 * 10.0` is exactly `8.5`.
#[inline]
pub fn round1(x: f64) -> f64 {
    format!("{x:.1}").parse().unwrap_or(x)
}

fn share(part: usize, whole: usize) -> f64 {
    round1(part as f64 / whole as f64 * 100.0)
}

/// Computes the percentage for a comparison that passed the column check.
///
/// # Arguments
///
/// * `matching_rows` - Distinct rows present in both results.
/// * `total_expected_rows` - Row count of the solution.
/// * `user_row_count` - Row count of the user's result.
///
/// # Example
///
/// ```
/// use marker::scorer::compute_percentage;
///
/// // All ten expected rows plus three extra: 100 - 3 * 5.
/// assert_eq!(compute_percentage(10, 10, 13).value(), 85.0);
/// // Five correct rows out of ten expected.
/// assert_eq!(compute_percentage(5, 10, 5).value(), 50.0);
/// ```
pub fn compute_percentage(
    matching_rows: usize,
    total_expected_rows: usize,
    user_row_count: usize,
) -> Percentage {
    if total_expected_rows == 0 {
        return if user_row_count == 0 {
            Percentage::PERFECT
        } else {
            Percentage::ZERO
        };
    }

    let actual = share(matching_rows, total_expected_rows);

    let percentage = if user_row_count == total_expected_rows {
        actual
    } else if user_row_count < total_expected_rows {
        let max_possible = share(user_row_count, total_expected_rows);
        max_possible.min(actual)
    } else if actual > 0.0 {
        let extra_rows = user_row_count - total_expected_rows;
        let penalty = (extra_rows as f64 * EXTRA_ROW_PENALTY).min(MAX_EXTRA_ROW_PENALTY);
        round1(actual - penalty).max(0.0)
    } else {
        actual
    };

    Percentage::new(percentage)
}
