//! Marker Error Types
//!
//! This module defines the [`MarkerError`] enum, which covers everything that can go wrong
//! while turning two result sets into a score. None of these errors ever reach the caller of
//! [`crate::compare`]: they are folded into a zero-score [`crate::report::ScoreReport`] whose
//! `details` carries the error message.
//!
//! # Example
//!
//! ```rust
//! use marker::error::MarkerError;
//!
//! let err = MarkerError::UnsupportedValue {
//!     column: "payload".to_string(),
//!     kind: "blob",
//! };
//! assert_eq!(
//!     err.to_string(),
//!     "column 'payload' holds a blob value, which cannot be compared"
//! );
//! ```

/// Represents all error types that can occur while scoring a query result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MarkerError {
    /// A cell holds a value with no canonical text form.
    #[error("column '{column}' holds a {kind} value, which cannot be compared")]
    UnsupportedValue { column: String, kind: &'static str },
}
