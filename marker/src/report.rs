//! # Score Report Module
//!
//! This module defines [`ScoreReport`], the structured feedback returned for one comparison,
//! and [`Percentage`], the score itself.
//!
//! ## JSON Output Example
//!
//! ```json
//! {
//!   "percentage": 85,
//!   "details": "Found 10 correct rows, but you have 3 extra rows",
//!   "matching_rows": 10,
//!   "total_expected_rows": 10,
//!   "user_row_count": 13,
//!   "order_correct": false,
//!   "has_perfect_content": false
//! }
//! ```
//!
//! Whole-number percentages serialize as JSON integers and everything else as a float with
//! one decimal place. `has_perfect_content` is omitted on the early-return paths (column
//! mismatch, both results empty, computation error).

use serde::{Serialize, Serializer};

/// A score in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Percentage(f64);

impl Percentage {
    pub const ZERO: Percentage = Percentage(0.0);
    pub const PERFECT: Percentage = Percentage(100.0);
    /// Right rows, wrong order.
    pub const ALMOST: Percentage = Percentage(99.0);

    /// Clamps into `[0, 100]`. NaN becomes zero.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            Self::ZERO
        } else {
            Percentage(value.clamp(0.0, 100.0))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_perfect(self) -> bool {
        self.0 == 100.0
    }
}

impl Serialize for Percentage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.fract() == 0.0 {
            serializer.serialize_u64(self.0 as u64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

/// Result of comparing a user's query output with the solution's output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    pub percentage: Percentage,
    pub details: String,
    /// Distinct canonical rows present in both results.
    pub matching_rows: usize,
    pub total_expected_rows: usize,
    pub user_row_count: usize,
    pub order_correct: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_perfect_content: Option<bool>,
}

impl ScoreReport {
    /// Zero-score report for a failure that happened while scoring.
    pub fn computation_error(
        message: impl std::fmt::Display,
        total_expected_rows: usize,
        user_row_count: usize,
    ) -> Self {
        Self {
            percentage: Percentage::ZERO,
            details: format!("Error calculating score: {message}"),
            matching_rows: 0,
            total_expected_rows,
            user_row_count,
            order_correct: false,
            has_perfect_content: None,
        }
    }
}
