//! Per-row validation: structural shape first, then the age value.
//!
//! Each data row gets at most one issue. Overflow and underflow are checked
//! before age validity and short-circuit it: a structurally malformed row is
//! not also checked for its age. Issues are collected as data, never raised;
//! "the file contains invalid rows" is a reportable outcome, not an abort.

use crate::reader::ParsedCsv;

/// Structural classification for one offending row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowIssue {
    /// More fields than header columns; carries the unmappable extra values.
    Overflow(Vec<String>),
    /// Fewer fields than header columns; carries the shortfall count.
    Underflow(usize),
    /// Age value (trimmed) is not a base-10 integer; carries the value.
    InvalidAge(String),
}

/// Classify one row against the header's field count and the age column.
///
/// First match wins: overflow, then underflow, then age validity. A missing
/// age field (or an absent age column) reads as the empty string, which
/// fails integer parsing.
pub fn classify_row(fields: &[String], header_len: usize, age_idx: Option<usize>) -> Option<RowIssue> {
    if fields.len() > header_len {
        return Some(RowIssue::Overflow(fields[header_len..].to_vec()));
    }

    if fields.len() < header_len {
        return Some(RowIssue::Underflow(header_len - fields.len()));
    }

    let value = age_idx
        .and_then(|i| fields.get(i))
        .map(String::as_str)
        .unwrap_or("")
        .trim();

    if value.parse::<i64>().is_err() {
        return Some(RowIssue::InvalidAge(value.to_string()));
    }

    None
}

/// Validate every data row, producing one message per offending row.
///
/// Messages are 1-indexed and in row order; an empty list means every row
/// is structurally and semantically valid.
pub fn validate_rows(parsed: &ParsedCsv, age_column: &str) -> Vec<String> {
    let age_idx = parsed.column_index(age_column);
    let header_len = parsed.headers.len();

    let mut errors = Vec::new();

    for (i, row) in parsed.rows.iter().enumerate() {
        let row_num = i + 1;
        match classify_row(row, header_len, age_idx) {
            Some(RowIssue::Overflow(extra)) => {
                errors.push(format!(
                    "Row {row_num}: Too many columns (extra data: {extra:?})"
                ));
            }
            Some(RowIssue::Underflow(_)) => {
                errors.push(format!("Row {row_num}: Missing columns"));
            }
            Some(RowIssue::InvalidAge(value)) => {
                errors.push(format!("Row {row_num}: invalid {age_column} -> '{value}'"));
            }
            None => {}
        }
    }

    errors
}
