//! Canonical row form used as the unit of comparison.
//!
//! A row is reduced to the text of its values, read in the solution's sorted column order.
//! This makes comparison independent of the order in which either query emitted its columns
//! while keeping value identity as text.

use crate::error::MarkerError;
use crate::types::{Row, Value, format_timestamp};

/// A row's values as text, ordered by the sorted solution column names.
pub type CanonicalRow = Vec<String>;

/// Upper bound for printing whole floats as `N.0`. Beyond it `f64` no longer
/// represents every integer and the shortest round-trip form is used instead.
const WHOLE_FLOAT_LIMIT: f64 = 1e16;

/// Converts one value to its canonical text.
///
/// `column` is only used to name the offending column when the value has no text form.
pub fn canonical_text(value: &Value, column: &str) -> Result<String, MarkerError> {
    let text = match value {
        Value::Null => "NULL".to_string(),
        Value::Boolean(b) => b.to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Float(f) => canonical_float(*f),
        Value::Text(s) => s.clone(),
        Value::Date(d) => d.format("%Y-%m-%d").to_string(),
        Value::Timestamp(ts) => format_timestamp(ts),
        Value::Blob(_) => {
            return Err(MarkerError::UnsupportedValue {
                column: column.to_string(),
                kind: value.kind(),
            });
        }
    };
    Ok(text)
}

fn canonical_float(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f.is_infinite() {
        if f > 0.0 { "inf".to_string() } else { "-inf".to_string() }
    } else if f.fract() == 0.0 && f.abs() < WHOLE_FLOAT_LIMIT {
        format!("{f:.1}")
    } else {
        f.to_string()
    }
}

/// Returns the column names sorted by byte-wise comparison, duplicates kept.
pub fn sorted_columns(columns: &[String]) -> Vec<String> {
    let mut sorted = columns.to_vec();
    sorted.sort();
    sorted
}

/// Builds the canonical tuple of a row. Columns the row does not carry map to `""`.
pub fn canonical_row(row: &Row, sorted_columns: &[String]) -> Result<CanonicalRow, MarkerError> {
    sorted_columns
        .iter()
        .map(|col| match row.get(col) {
            Some(value) => canonical_text(value, col),
            None => Ok(String::new()),
        })
        .collect()
}

/// Canonicalizes every row, preserving the original row order.
pub fn canonicalize(rows: &[Row], sorted_columns: &[String]) -> Result<Vec<CanonicalRow>, MarkerError> {
    rows.iter()
        .map(|row| canonical_row(row, sorted_columns))
        .collect()
}
