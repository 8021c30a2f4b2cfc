//! # Utilities
//!
//! Helpers shared by the comparators.
//!
//! - [`canonical`]: reduces rows to canonical text tuples so result sets can be compared
//!   independently of column emission order.

pub mod canonical;
