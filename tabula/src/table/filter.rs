//! Substring row filtering.

use super::row::{Row, Value};

/// Indices of rows where the search string appears case-insensitively
/// as a substring of at least one searchable field, in input order.
///
/// An empty or whitespace-only query is the identity. When `fields` is
/// `None` every field of the row is searchable. `Null` values never
/// match.
pub fn filter_rows(rows: &[Row], query: &str, fields: Option<&[String]>) -> Vec<usize> {
    let query = query.trim();
    if query.is_empty() {
        return (0..rows.len()).collect();
    }

    let needle = query.to_lowercase();
    rows.iter()
        .enumerate()
        .filter(|(_, row)| row_matches(row, &needle, fields))
        .map(|(i, _)| i)
        .collect()
}

fn row_matches(row: &Row, needle: &str, fields: Option<&[String]>) -> bool {
    match fields {
        Some(keys) => keys.iter().any(|key| value_matches(row.get(key), needle)),
        None => row.values().any(|value| value_matches(Some(value), needle)),
    }
}

fn value_matches(value: Option<&Value>, needle: &str) -> bool {
    value
        .and_then(Value::text)
        .map(|text| text.to_lowercase().contains(needle))
        .unwrap_or(false)
}
