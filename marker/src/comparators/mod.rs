//! # Comparators
//!
//! This module provides the comparators for scoring a user's query output against the output
//! of the reference solution. All comparators implement the
//! [`ResultComparator`](crate::traits::comparator::ResultComparator) trait so the scoring
//! strategy can be swapped without touching callers.
//!
//! The available comparators are:
//! - [`result_set_comparator`]: Set-based row matching with partial credit, extra-row penalties
//!   and an order check.

pub mod result_set_comparator;
