//!
//! Traits Module
//!
//! Core traits used throughout the marker for extensibility.
//!
//! - [`comparator`]: Defines the strategy trait for scoring one result set against another.

pub mod comparator;
