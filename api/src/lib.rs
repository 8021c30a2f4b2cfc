//! HTTP service for the SQL practice backend.
//!
//! Serves the week's exercise catalog, runs student queries against the read-only dataset
//! and scores them against the reference solutions.

pub mod middleware;
pub mod response;
pub mod routes;
pub mod startup;

pub use routes::app;
