//! Application state container shared across Axum route handlers.
//!
//! This struct holds the read-only dataset connection pool and the exercise catalog for the
//! configured week. It is cheap to clone and is passed into route handlers via Axum's
//! `State<T>` extractor; nothing about it is global.

use crate::exercises::ExerciseCatalog;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Central application state shared across the server.
///
/// This includes:
/// - A read-only SQLite pool over the week's dataset. Each query acquires a connection for
///   its own duration only.
/// - The exercise catalog loaded at startup.
#[derive(Clone)]
pub struct AppState {
    pool: SqlitePool,
    catalog: Arc<ExerciseCatalog>,
}

impl AppState {
    /// Creates a new `AppState` from an opened pool and a loaded catalog.
    pub fn new(pool: SqlitePool, catalog: ExerciseCatalog) -> Self {
        Self {
            pool,
            catalog: Arc::new(catalog),
        }
    }

    /// Returns a shared reference to the dataset pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn catalog(&self) -> &ExerciseCatalog {
        &self.catalog
    }
}
