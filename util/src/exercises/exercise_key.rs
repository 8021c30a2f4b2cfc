//! Serde model of the static JSON artifacts produced by the exercise and schema generators.
//!
//! Only the fields the service reads are modelled; unknown fields are ignored so newer
//! generator output keeps loading.

use serde::{Deserialize, Serialize};

/// `exercises/week_{w}/week_{w}_key[_vN].json`
#[derive(Debug, Clone, Deserialize)]
pub struct ExerciseKey {
    #[serde(default)]
    pub metadata: KeyMetadata,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct KeyMetadata {
    pub week: Option<u32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub focus_topics: Option<Vec<String>>,
    /// Database file name, e.g. `data_jobs.db`.
    pub database: Option<String>,
    /// Tables students may see in the data dictionary.
    #[serde(default)]
    pub schema_tables: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Exercise {
    pub id: i64,
    pub title: String,
    pub statement: String,
    pub difficulty: String,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub educational_focus: String,
    #[serde(default)]
    pub solution: String,
    /// Whatever the solution tester recorded; passed through untouched.
    #[serde(default)]
    pub result: Option<serde_json::Value>,
}

/// `schemas/data_schema_{dataset}.json`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataSchema {
    #[serde(default)]
    pub tables: Vec<SchemaTable>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SchemaTable {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub row_count: u64,
    #[serde(default)]
    pub columns: Vec<SchemaColumn>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SchemaColumn {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
    #[serde(default = "default_true")]
    pub nullable: bool,
    #[serde(default)]
    pub primary_key: bool,
    #[serde(default)]
    pub foreign_key: Option<String>,
    #[serde(default)]
    pub description: String,
}

fn default_true() -> bool {
    true
}

// --- Views served to clients ---

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExerciseSummary {
    pub id: i64,
    pub title: String,
    pub difficulty: String,
    pub topics: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExerciseDetails {
    pub id: i64,
    pub title: String,
    pub statement: String,
    pub difficulty: String,
    pub topics: Vec<String>,
    pub educational_focus: String,
    pub solution: String,
    pub expected_result: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekMetadata {
    pub week: u32,
    pub title: String,
    pub description: String,
    pub focus_topics: Vec<String>,
    pub database: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableInfo {
    pub name: String,
    pub description: String,
    pub row_count: u64,
    pub columns: Vec<ColumnInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
    pub nullable: bool,
    pub primary_key: bool,
    pub foreign_key: String,
    pub description: String,
}

impl From<&Exercise> for ExerciseSummary {
    fn from(e: &Exercise) -> Self {
        Self {
            id: e.id,
            title: e.title.clone(),
            difficulty: e.difficulty.clone(),
            topics: e.topics.clone(),
        }
    }
}

impl From<&Exercise> for ExerciseDetails {
    fn from(e: &Exercise) -> Self {
        Self {
            id: e.id,
            title: e.title.clone(),
            statement: e.statement.clone(),
            difficulty: e.difficulty.clone(),
            topics: e.topics.clone(),
            educational_focus: e.educational_focus.clone(),
            solution: e.solution.clone(),
            expected_result: e
                .result
                .clone()
                .unwrap_or_else(|| serde_json::Value::Object(Default::default())),
        }
    }
}

impl From<&SchemaTable> for TableInfo {
    fn from(t: &SchemaTable) -> Self {
        Self {
            name: t.name.clone(),
            description: t.description.clone(),
            row_count: t.row_count,
            columns: t
                .columns
                .iter()
                .map(|c| ColumnInfo {
                    name: c.name.clone(),
                    data_type: c.data_type.clone(),
                    nullable: c.nullable,
                    primary_key: c.primary_key,
                    foreign_key: c.foreign_key.clone().unwrap_or_default(),
                    description: c.description.clone(),
                })
                .collect(),
        }
    }
}
