//! Exercise keys and data schemas for a practice week.

pub mod catalog;
pub mod exercise_key;

use std::path::PathBuf;

pub use catalog::ExerciseCatalog;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("No exercise files found for week {week}")]
    ExerciseFileNotFound { week: u32 },
    #[error("Schema file not found: {}", .0.display())]
    SchemaNotFound(PathBuf),
    #[error("Database file not found: {}", .0.display())]
    DatabaseNotFound(PathBuf),
    #[error(
        "Exercise metadata missing 'schema_tables' field. This field is required to prevent \
         students from accessing raw dataset tables. Please update the exercise file to include \
         this field."
    )]
    MissingSchemaTables,
    #[error("Invalid JSON in {}: {source}", path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
