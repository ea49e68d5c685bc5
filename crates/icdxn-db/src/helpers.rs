//! Row-parsing and SQL-building helpers shared by the repos.

use icdxn_core::enums::AssociationStatus;

use crate::error::DatabaseError;

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
/// You must use `get::<Option<String>>()` for nullable columns.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Parse a stored `status` value.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the value is neither `Unknown` nor `Used`.
pub fn parse_status(s: &str) -> Result<AssociationStatus, DatabaseError> {
    s.parse()
        .map_err(|e| DatabaseError::Query(format!("Failed to parse status: {e}")))
}

/// Numbered placeholders `?start, ?start+1, ...` for an `IN (...)` list.
#[must_use]
pub fn placeholders(start: usize, count: usize) -> String {
    (start..start + count)
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Convert ids into positional parameter values.
#[must_use]
pub fn id_params(ids: &[i64]) -> Vec<libsql::Value> {
    ids.iter().map(|&id| libsql::Value::Integer(id)).collect()
}

/// Collect the first column of every row as an `i64`.
///
/// # Errors
///
/// Returns `DatabaseError` if iteration or the column read fails.
pub async fn collect_ids(mut rows: libsql::Rows) -> Result<Vec<i64>, DatabaseError> {
    let mut ids = Vec::new();
    while let Some(row) = rows.next().await? {
        ids.push(row.get::<i64>(0)?);
    }
    Ok(ids)
}

/// Collect the first column of every row as a `String`.
///
/// # Errors
///
/// Returns `DatabaseError` if iteration or the column read fails.
pub async fn collect_strings(mut rows: libsql::Rows) -> Result<Vec<String>, DatabaseError> {
    let mut values = Vec::new();
    while let Some(row) = rows.next().await? {
        values.push(row.get::<String>(0)?);
    }
    Ok(values)
}

/// Read a single `COUNT(*)`-style integer.
///
/// # Errors
///
/// Returns `DatabaseError::NoResult` if the query yields no row.
pub async fn scalar_count(mut rows: libsql::Rows) -> Result<u64, DatabaseError> {
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    let count = row.get::<i64>(0)?;
    u64::try_from(count).map_err(|e| DatabaseError::Query(format!("negative count {count}: {e}")))
}
