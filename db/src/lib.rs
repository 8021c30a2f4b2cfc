pub mod decode;
pub mod error;
pub mod executor;
pub mod introspect;
pub mod test_utils;

pub use error::DbError;
pub use executor::{QueryResult, ValidationResult, execute_query, sample_data, validate_query};
pub use introspect::{LiveColumn, LiveTable, database_info};

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::Path;
use tracing::info;
use util::config;
use util::exercises::ExerciseCatalog;

/// Opens the dataset at `path` read-only. The file is never created.
pub async fn connect(path: &Path, max_connections: u32) -> Result<SqlitePool, DbError> {
    if !path.is_file() {
        return Err(DbError::DatabaseNotFound(path.to_path_buf()));
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .read_only(true)
        .create_if_missing(false);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect_with(options)
        .await?;

    info!("Connected to dataset {} (read-only)", path.display());
    Ok(pool)
}

/// Connects to the database the catalog's exercise key points at, sized by
/// `DB_MAX_CONNECTIONS`.
pub async fn connect_dataset(catalog: &ExerciseCatalog) -> Result<SqlitePool, DbError> {
    let path = catalog.database_path()?;
    connect(&path, config::max_connections()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_fixture_db;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_connect_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = connect(&tmp.path().join("nope.db"), 2).await.unwrap_err();
        assert!(matches!(err, DbError::DatabaseNotFound(_)));
        assert!(!tmp.path().join("nope.db").exists());
    }

    #[tokio::test]
    async fn test_connection_is_read_only() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("jobs.db");
        create_fixture_db(&path).await;

        let pool = connect(&path, 2).await.unwrap();
        let result = execute_query(&pool, "DELETE FROM companies", 1000).await;
        assert!(!result.success);
        assert!(result.error.is_some());

        let count = execute_query(&pool, "SELECT COUNT(*) AS n FROM companies", 1000).await;
        assert!(count.success);
        assert_eq!(count.data[0]["n"], marker::Value::Integer(3));
    }
}
