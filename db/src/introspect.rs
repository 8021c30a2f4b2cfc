//! Live table listing for the `/database/info` route.

use crate::DbError;
use serde::Serialize;
use sqlx::{Row, SqlitePool};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiveTable {
    pub name: String,
    pub row_count: i64,
    pub columns: Vec<LiveColumn>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiveColumn {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
    pub nullable: bool,
    pub primary_key: bool,
}

fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Every user table in the dataset, ordered by name, with its columns and row count.
pub async fn database_info(pool: &SqlitePool) -> Result<Vec<LiveTable>, DbError> {
    let names: Vec<String> = sqlx::query_scalar(
        "SELECT name FROM sqlite_master \
         WHERE type IN ('table', 'view') AND name NOT LIKE 'sqlite_%' \
         ORDER BY name",
    )
    .fetch_all(pool)
    .await?;

    let mut tables = Vec::with_capacity(names.len());
    for name in names {
        let quoted = quote_identifier(&name);

        let columns = sqlx::query(&format!("PRAGMA table_info({quoted})"))
            .fetch_all(pool)
            .await?
            .iter()
            .map(|row| {
                Ok(LiveColumn {
                    name: row.try_get("name")?,
                    data_type: row.try_get("type")?,
                    nullable: row.try_get::<i64, _>("notnull")? == 0,
                    primary_key: row.try_get::<i64, _>("pk")? > 0,
                })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()?;

        let row_count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {quoted}"))
            .fetch_one(pool)
            .await?;

        tables.push(LiveTable {
            name,
            row_count,
            columns,
        });
    }

    Ok(tables)
}
