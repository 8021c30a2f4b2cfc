//! Exercise catalog for one practice week.
//!
//! Loads the week's exercise key and the schema of the dataset it targets once, at startup,
//! and answers the read-only lookups the API needs.

use super::CatalogError;
use super::exercise_key::{
    DataSchema, ExerciseDetails, ExerciseKey, ExerciseSummary, TableInfo, WeekMetadata,
};
use crate::paths;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const DEFAULT_DATABASE_FILE: &str = "data_jobs.db";

#[derive(Debug, Clone)]
pub struct ExerciseCatalog {
    root: PathBuf,
    week: u32,
    key: ExerciseKey,
    dataset: String,
    schema: Option<DataSchema>,
}

impl ExerciseCatalog {
    /// Loads the latest exercise key for `week` under `root`, plus the dataset's schema file
    /// when present.
    pub fn load(root: &Path, week: u32) -> Result<Self, CatalogError> {
        let key_path = paths::latest_exercise_key(root, week)?
            .ok_or(CatalogError::ExerciseFileNotFound { week })?;
        let key: ExerciseKey = read_json(&key_path)?;
        info!(
            "Loaded {} exercises for week {week} from {}",
            key.exercises.len(),
            key_path.display()
        );

        let dataset = key
            .metadata
            .database
            .as_deref()
            .unwrap_or(DEFAULT_DATABASE_FILE)
            .replace(".db", "");

        let schema_path = paths::schema_path(root, &dataset);
        let schema = if schema_path.is_file() {
            Some(read_json::<DataSchema>(&schema_path)?)
        } else {
            debug!("No schema file at {}", schema_path.display());
            None
        };

        Ok(Self {
            root: root.to_path_buf(),
            week,
            key,
            dataset,
            schema,
        })
    }

    pub fn week(&self) -> u32 {
        self.week
    }

    /// Dataset name, e.g. `data_jobs`.
    pub fn dataset(&self) -> &str {
        &self.dataset
    }

    pub fn exercise_list(&self) -> Vec<ExerciseSummary> {
        self.key.exercises.iter().map(ExerciseSummary::from).collect()
    }

    pub fn exercise_details(&self, exercise_id: i64) -> Option<ExerciseDetails> {
        self.key
            .exercises
            .iter()
            .find(|e| e.id == exercise_id)
            .map(ExerciseDetails::from)
    }

    /// Schema tables students may see, in schema file order.
    ///
    /// The key must list `schema_tables`; otherwise raw dataset tables would leak into the
    /// data dictionary.
    pub fn table_info(&self) -> Result<Vec<TableInfo>, CatalogError> {
        let schema = self.schema.as_ref().ok_or_else(|| {
            CatalogError::SchemaNotFound(paths::schema_path(&self.root, &self.dataset))
        })?;
        let allowed = &self.key.metadata.schema_tables;

        if !schema.tables.is_empty() && allowed.is_empty() {
            return Err(CatalogError::MissingSchemaTables);
        }

        Ok(schema
            .tables
            .iter()
            .filter(|t| allowed.contains(&t.name))
            .map(TableInfo::from)
            .collect())
    }

    pub fn week_metadata(&self) -> WeekMetadata {
        let meta = &self.key.metadata;
        WeekMetadata {
            week: meta.week.unwrap_or(self.week),
            title: meta
                .title
                .clone()
                .unwrap_or_else(|| format!("Week {} Practice", self.week)),
            description: meta
                .description
                .clone()
                .unwrap_or_else(|| "SQL Practice".to_string()),
            focus_topics: meta.focus_topics.clone().unwrap_or_default(),
            database: meta
                .database
                .clone()
                .unwrap_or_else(|| "database.db".to_string()),
        }
    }

    /// Path of the dataset's SQLite file. Errors when the file does not exist.
    pub fn database_path(&self) -> Result<PathBuf, CatalogError> {
        let path = paths::dataset_db_path(&self.root, &self.dataset);
        if path.is_file() {
            Ok(path)
        } else {
            Err(CatalogError::DatabaseNotFound(path))
        }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|source| CatalogError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}
