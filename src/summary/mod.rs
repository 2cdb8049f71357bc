//! Aggregate statistics over an error-free row set.

use serde::Serialize;

use crate::reader::ParsedCsv;

/// Row count and mean age, computed only when every row validated clean.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_rows: usize,
    pub avg_age: f64,
}

/// Compute row count and arithmetic mean of the age column.
///
/// Only called on a row set the row validator found error-free, so every
/// age value is assumed to parse. Both assumptions are pipeline invariants;
/// a violation fails fast rather than returning a silent NaN.
///
/// # Panics
/// If the row set is empty or an age value does not parse.
pub fn compute_summary(parsed: &ParsedCsv, age_column: &str) -> Summary {
    assert!(!parsed.rows.is_empty(), "summary requires at least one row");

    let age_idx = parsed.column_index(age_column);

    let sum: i64 = parsed
        .rows
        .iter()
        .map(|row| {
            age_idx
                .and_then(|i| row.get(i))
                .map(String::as_str)
                .unwrap_or("")
                .trim()
                .parse::<i64>()
                .expect("age values validated before aggregation")
        })
        .sum();

    Summary {
        total_rows: parsed.rows.len(),
        avg_age: sum as f64 / parsed.rows.len() as f64,
    }
}
