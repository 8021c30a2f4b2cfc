//! # Marker Library
//!
//! This crate provides the scoring core of the SQL practice service: it compares the result set
//! of a student's query with the result set of the reference solution and produces a
//! deterministic similarity score with feedback.
//!
//! ## Key Concepts
//! - **TabularResult**: Column names plus rows, as produced by the query engine.
//! - **Comparators**: Pluggable strategies implementing [`ResultComparator`]; the default is
//!   [`ResultSetComparator`].
//! - **ScoreReport**: Percentage, feedback string and row statistics for one comparison.
//!
//! ## Example
//!
//! ```
//! use marker::types::{Row, TabularResult, Value};
//!
//! let row: Row = [("a".to_string(), Value::Integer(1))].into_iter().collect();
//! let solution = TabularResult::new(vec!["a".to_string()], vec![row.clone()]);
//! let user = TabularResult::new(vec!["a".to_string()], vec![row]);
//!
//! let report = marker::compare(&user, &solution);
//! assert!(report.percentage.is_perfect());
//! assert_eq!(report.details, "Perfect match!");
//! ```

pub mod comparators;
pub mod error;
pub mod feedback;
pub mod report;
pub mod scorer;
pub mod traits;
pub mod types;
pub mod utilities;

pub use crate::comparators::result_set_comparator::ResultSetComparator;
pub use crate::report::{Percentage, ScoreReport};
pub use crate::traits::comparator::ResultComparator;
pub use crate::types::{Row, TabularResult, Value};

/// Scores `user` against `solution` with the default [`ResultSetComparator`].
///
/// Never fails: problems encountered while scoring are reported through a zero-score
/// [`ScoreReport`].
pub fn compare(user: &TabularResult, solution: &TabularResult) -> ScoreReport {
    ResultSetComparator.compare(user, solution)
}
