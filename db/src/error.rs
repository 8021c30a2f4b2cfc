use std::path::PathBuf;
use thiserror::Error;
use util::exercises::CatalogError;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("Database file not found: {}", .0.display())]
    DatabaseNotFound(PathBuf),

    #[error("Invalid table name: {0}")]
    InvalidIdentifier(String),

    #[error(transparent)]
    Catalog(CatalogError),

    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

impl From<CatalogError> for DbError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::DatabaseNotFound(path) => DbError::DatabaseNotFound(path),
            other => DbError::Catalog(other),
        }
    }
}
