//! A comparator that scores a user's result set against the solution's result set.
//!
//! Rows are compared by content, not position: each row is reduced to a canonical tuple (see
//! [`crate::utilities::canonical`]) and the two results are intersected as **sets** of tuples.
//! Row order only matters for the final step: a result with exactly the right rows in the
//! wrong order scores 99 instead of 100.
//!
//! **Note:** duplicate rows collapse to one set entry. A solution with `[1, 1, 2]` and a user
//! result `[1, 2]` share two distinct rows, so the user is scored as returning two of three
//! expected rows. Existing exercise keys are graded under these semantics, so they are kept.

use std::collections::{BTreeSet, HashSet};

use tracing::{debug, warn};

use crate::error::MarkerError;
use crate::feedback;
use crate::report::{Percentage, ScoreReport};
use crate::scorer::compute_percentage;
use crate::traits::comparator::ResultComparator;
use crate::types::TabularResult;
use crate::utilities::canonical::{CanonicalRow, canonicalize, sorted_columns};

/// Set-based result comparator with partial credit.
#[derive(Debug, Default, Clone, Copy)]
pub struct ResultSetComparator;

impl ResultSetComparator {
    /// Runs the comparison, surfacing canonicalization failures as errors.
    ///
    /// [`ResultComparator::compare`] maps the error into a zero-score report.
    pub fn try_compare(
        &self,
        user: &TabularResult,
        solution: &TabularResult,
    ) -> Result<ScoreReport, MarkerError> {
        let total_expected_rows = solution.rows.len();
        let user_row_count = user.rows.len();

        let user_columns: BTreeSet<&str> = user.columns.iter().map(String::as_str).collect();
        let solution_columns: BTreeSet<&str> =
            solution.columns.iter().map(String::as_str).collect();

        if user_columns != solution_columns {
            return Ok(ScoreReport {
                percentage: Percentage::ZERO,
                details: feedback::column_mismatch(&solution.columns, &user.columns),
                matching_rows: 0,
                total_expected_rows,
                user_row_count,
                order_correct: false,
                has_perfect_content: None,
            });
        }

        if user.rows.is_empty() && solution.rows.is_empty() {
            return Ok(ScoreReport {
                percentage: Percentage::PERFECT,
                details: feedback::BOTH_EMPTY.to_string(),
                matching_rows: 0,
                total_expected_rows: 0,
                user_row_count: 0,
                order_correct: true,
                has_perfect_content: None,
            });
        }

        let sorted = sorted_columns(&solution.columns);
        let solution_tuples = canonicalize(&solution.rows, &sorted)?;
        let user_tuples = canonicalize(&user.rows, &sorted)?;

        let solution_set: HashSet<&CanonicalRow> = solution_tuples.iter().collect();
        let user_set: HashSet<&CanonicalRow> = user_tuples.iter().collect();
        let matching_rows = solution_set.intersection(&user_set).count();

        let has_exact_row_count = user_row_count == total_expected_rows;
        let has_all_correct_rows = matching_rows == total_expected_rows;
        let has_perfect_content = has_exact_row_count && has_all_correct_rows;
        let order_correct = has_perfect_content && solution_tuples == user_tuples;

        if has_perfect_content && !order_correct {
            return Ok(ScoreReport {
                percentage: Percentage::ALMOST,
                details: feedback::WRONG_ORDER.to_string(),
                matching_rows,
                total_expected_rows,
                user_row_count,
                order_correct: false,
                has_perfect_content: Some(true),
            });
        }

        let percentage = compute_percentage(matching_rows, total_expected_rows, user_row_count);
        let details =
            feedback::row_feedback(percentage, matching_rows, total_expected_rows, user_row_count);

        Ok(ScoreReport {
            percentage,
            details,
            matching_rows,
            total_expected_rows,
            user_row_count,
            order_correct: order_correct && percentage.is_perfect(),
            has_perfect_content: Some(has_perfect_content),
        })
    }
}

impl ResultComparator for ResultSetComparator {
    fn compare(&self, user: &TabularResult, solution: &TabularResult) -> ScoreReport {
        match self.try_compare(user, solution) {
            Ok(report) => {
                debug!(
                    percentage = report.percentage.value(),
                    matching_rows = report.matching_rows,
                    total_expected_rows = report.total_expected_rows,
                    user_row_count = report.user_row_count,
                    "Scored result set"
                );
                report
            }
            Err(e) => {
                warn!(error = %e, "Failed to score result set");
                ScoreReport::computation_error(e, solution.rows.len(), user.rows.len())
            }
        }
    }
}
