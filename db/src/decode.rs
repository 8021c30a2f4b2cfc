//! Decoding of SQLite rows into marker [`Value`]s.
//!
//! SQLite reports a storage class per value (`INTEGER`, `REAL`, `TEXT`, `BLOB`, `NULL`);
//! the declared column type refines it for booleans and dates, which SQLite stores as
//! integers and text.

use chrono::{NaiveDate, NaiveDateTime};
use marker::{Row, Value};
use sqlx::sqlite::{SqliteColumn, SqliteRow};
use sqlx::{Column, Row as _, TypeInfo, ValueRef};

const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Column names in statement order.
pub fn column_names(columns: &[SqliteColumn]) -> Vec<String> {
    columns.iter().map(|c| c.name().to_string()).collect()
}

/// Decodes every column of `row`. A repeated column name keeps the last value.
pub fn decode_row(row: &SqliteRow, columns: &[SqliteColumn]) -> Result<Row, sqlx::Error> {
    let mut decoded = Row::new();
    for (index, column) in columns.iter().enumerate() {
        let declared = column.type_info().name().to_ascii_uppercase();
        let value = decode_value(row, index, &declared)?;
        decoded.insert(column.name().to_string(), value);
    }
    Ok(decoded)
}

fn decode_value(row: &SqliteRow, index: usize, declared: &str) -> Result<Value, sqlx::Error> {
    let storage = {
        let raw = row.try_get_raw(index)?;
        if raw.is_null() {
            return Ok(Value::Null);
        }
        raw.type_info().name().to_ascii_uppercase()
    };

    let value = match storage.as_str() {
        "INTEGER" | "BOOLEAN" if declared == "BOOLEAN" => {
            Value::Boolean(row.try_get_unchecked::<bool, _>(index)?)
        }
        "INTEGER" => Value::Integer(row.try_get_unchecked::<i64, _>(index)?),
        "REAL" => Value::Float(row.try_get_unchecked::<f64, _>(index)?),
        "BLOB" => Value::Blob(row.try_get_unchecked::<Vec<u8>, _>(index)?),
        _ => decode_text(row.try_get_unchecked::<String, _>(index)?, declared),
    };
    Ok(value)
}

/// Text is promoted to a date or timestamp when the column declares one and the text parses.
pub(crate) fn decode_text(text: String, declared: &str) -> Value {
    match declared {
        "DATE" => match NaiveDate::parse_from_str(&text, "%Y-%m-%d") {
            Ok(date) => Value::Date(date),
            Err(_) => Value::Text(text),
        },
        "DATETIME" | "TIMESTAMP" => TIMESTAMP_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(&text, fmt).ok())
            .map(Value::Timestamp)
            .unwrap_or(Value::Text(text)),
        _ => Value::Text(text),
    }
}
