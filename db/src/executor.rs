//! Statement execution against the read-only dataset pool.
//!
//! Statement failures never escape as `Err`: they are reported in-band through
//! [`QueryResult::error`] so the API can hand them to the student verbatim.

use crate::DbError;
use crate::decode::{column_names, decode_row};
use marker::{Row, TabularResult};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use sqlx::{Executor, SqlitePool, Statement};
use std::time::Instant;
use tracing::{debug, warn};

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier regex"));

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult {
    pub success: bool,
    pub error: Option<String>,
    pub data: Vec<Row>,
    pub columns: Vec<String>,
    pub row_count: usize,
    /// Wall time in seconds, rounded to 4 decimals.
    pub execution_time: f64,
}

impl QueryResult {
    fn ok(columns: Vec<String>, data: Vec<Row>, execution_time: f64) -> Self {
        Self {
            success: true,
            error: None,
            row_count: data.len(),
            data,
            columns,
            execution_time,
        }
    }

    fn failed(error: impl Into<String>, execution_time: f64) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            data: Vec::new(),
            columns: Vec::new(),
            row_count: 0,
            execution_time,
        }
    }

    /// The result set in the shape the comparator consumes.
    pub fn tabular(&self) -> TabularResult {
        TabularResult::new(self.columns.clone(), self.data.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub error: Option<String>,
}

/// Appends `LIMIT {limit}` to a `SELECT` that has none, dropping one trailing `;`.
pub fn apply_row_limit(query: &str, limit: u32) -> String {
    let upper = query.trim().to_uppercase();
    if !upper.starts_with("SELECT") || upper.contains("LIMIT") {
        return query.to_string();
    }
    let body = query.trim_end();
    let body = body.strip_suffix(';').unwrap_or(body);
    format!("{body} LIMIT {limit}")
}

fn elapsed_secs(started: Instant) -> f64 {
    (started.elapsed().as_secs_f64() * 10_000.0).round() / 10_000.0
}

/// Runs `query` and collects every row. `SELECT`s without a `LIMIT` are capped at `limit`
/// rows.
pub async fn execute_query(pool: &SqlitePool, query: &str, limit: u32) -> QueryResult {
    let query = query.trim();
    if query.is_empty() {
        return QueryResult::failed("Query is empty", 0.0);
    }

    let sql = apply_row_limit(query, limit);
    let started = Instant::now();

    match run(pool, &sql).await {
        Ok((columns, data)) => {
            let result = QueryResult::ok(columns, data, elapsed_secs(started));
            debug!(
                rows = result.row_count,
                time = result.execution_time,
                "Query executed"
            );
            result
        }
        Err(err) => {
            debug!("Query failed: {err}");
            QueryResult::failed(engine_message(&err), elapsed_secs(started))
        }
    }
}

async fn run(pool: &SqlitePool, sql: &str) -> Result<(Vec<String>, Vec<Row>), sqlx::Error> {
    let mut conn = pool.acquire().await?;
    let statement = (&mut *conn).prepare(sql).await?;
    let columns = statement.columns().to_vec();

    let rows = statement.query().fetch_all(&mut *conn).await?;
    let data = rows
        .iter()
        .map(|row| decode_row(row, &columns))
        .collect::<Result<Vec<_>, _>>()?;

    Ok((column_names(&columns), data))
}

/// Checks `query` with `EXPLAIN` without producing its rows.
pub async fn validate_query(pool: &SqlitePool, query: &str) -> ValidationResult {
    let sql = format!("EXPLAIN {}", query.trim());
    match sqlx::query(&sql).fetch_all(pool).await {
        Ok(_) => ValidationResult {
            valid: true,
            error: None,
        },
        Err(err) => ValidationResult {
            valid: false,
            error: Some(engine_message(&err)),
        },
    }
}

/// First `limit` rows of `table`.
pub async fn sample_data(pool: &SqlitePool, table: &str, limit: u32) -> Result<QueryResult, DbError> {
    if !IDENTIFIER.is_match(table) {
        warn!("Rejected sample request for table name {table:?}");
        return Err(DbError::InvalidIdentifier(table.to_string()));
    }
    let sql = format!("SELECT * FROM \"{table}\" LIMIT {limit}");
    Ok(execute_query(pool, &sql, limit).await)
}

/// The engine's own message when there is one.
fn engine_message(err: &sqlx::Error) -> String {
    match err {
        sqlx::Error::Database(db_err) => db_err.message().to_string(),
        other => other.to_string(),
    }
}
