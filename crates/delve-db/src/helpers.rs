//! Row and parameter helpers shared by the mapping layer and repos.

use std::fmt::Write as _;

use libsql::Value;

use crate::error::DatabaseError;

/// Convert an optional integer into a SQL value, `NULL` for `None`.
#[must_use]
pub fn opt_integer(value: Option<i64>) -> Value {
    match value {
        Some(v) => Value::Integer(v),
        None => Value::Null,
    }
}

/// Positional placeholders `?start, ?start+1, ...` for `count` parameters.
#[must_use]
pub fn placeholders(start: usize, count: usize) -> String {
    let mut out = String::new();
    for n in start..start + count {
        if !out.is_empty() {
            out.push_str(", ");
        }
        let _ = write!(out, "?{n}");
    }
    out
}

/// Integer ids as positional parameter values.
#[must_use]
pub fn id_values(ids: &[i64]) -> Vec<Value> {
    ids.iter().copied().map(Value::Integer).collect()
}

/// Read a nullable INTEGER column.
///
/// `row.get::<i64>(idx)` on a NULL column returns an error, not `0`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_i64(row: &libsql::Row, idx: i32) -> Result<Option<i64>, DatabaseError> {
    Ok(row.get::<Option<i64>>(idx)?)
}

/// Collect every row of a query through `map`.
///
/// # Errors
///
/// Returns the first error from stepping the cursor or from `map`.
pub async fn collect_rows<T>(
    mut rows: libsql::Rows,
    map: impl Fn(&libsql::Row) -> Result<T, DatabaseError>,
) -> Result<Vec<T>, DatabaseError> {
    let mut results = Vec::new();
    while let Some(row) = rows.next().await? {
        results.push(map(&row)?);
    }
    Ok(results)
}
