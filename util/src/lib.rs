//! Shared plumbing for the SQL practice service: configuration, data-root layout,
//! exercise catalog and the application state handed to route handlers.

pub mod config;
pub mod exercises;
pub mod paths;
pub mod state;
pub mod test_helpers;
