//! Pipeline entry point: existence check, decode, schema, rows, summary.
//!
//! # Example
//!
//! ```rust,ignore
//! use csvcheck::{validate_csv, default_expected_columns, DEFAULT_AGE_COLUMN};
//! use std::path::Path;
//!
//! let result = validate_csv(
//!     Path::new("people.csv"),
//!     &default_expected_columns(),
//!     DEFAULT_AGE_COLUMN,
//! )?;
//!
//! if result.errors.is_empty() {
//!     println!("avg age: {}", result.avg_age.unwrap());
//! }
//! # Ok::<(), csvcheck::ValidateError>(())
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::Serialize;

use crate::error::{ValidateError, ValidateResult};
use crate::reader::{read_csv_rows, DEFAULT_ENCODINGS};
use crate::rows::validate_rows;
use crate::schema::check_columns;
use crate::summary::compute_summary;

/// Age column name used when the caller supplies none.
pub const DEFAULT_AGE_COLUMN: &str = "edad";

/// Required columns used when the caller supplies none.
pub fn default_expected_columns() -> HashSet<String> {
    ["id", "nombre", "edad", "ciudad"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Final output of one validation run.
///
/// Invariant: `avg_age` is `Some` if and only if `errors` is empty. Hard
/// failures never produce a `ValidationResult`; they propagate as
/// [`ValidateError`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    /// Number of data rows in the file.
    pub total_rows: usize,
    /// Mean of the age column; present only when `errors` is empty.
    pub avg_age: Option<f64>,
    /// One message per offending row, 1-indexed, in row order.
    pub errors: Vec<String>,
    /// Encoding that successfully decoded the file.
    pub encoding_used: String,
}

/// Validate a CSV file against the expected schema and compute the age mean.
///
/// Stages run in fixed order: existence check, decoding read, schema check,
/// row validation, and (only on an error-free row set) aggregation. Any
/// stage failing hard aborts the run; row-level issues instead land in the
/// result's `errors` list with `avg_age` unset.
///
/// # Errors
/// See [`ValidateError`] for the hard-failure taxonomy.
pub fn validate_csv(
    file_path: &Path,
    expected_columns: &HashSet<String>,
    age_column: &str,
) -> ValidateResult<ValidationResult> {
    if !file_path.exists() {
        return Err(ValidateError::FileNotFound(file_path.to_path_buf()));
    }

    let parsed = read_csv_rows(file_path, DEFAULT_ENCODINGS)?;

    check_columns(&parsed, expected_columns)?;

    let errors = validate_rows(&parsed, age_column);

    if !errors.is_empty() {
        return Ok(ValidationResult {
            total_rows: parsed.rows.len(),
            avg_age: None,
            errors,
            encoding_used: parsed.encoding.to_string(),
        });
    }

    let summary = compute_summary(&parsed, age_column);

    Ok(ValidationResult {
        total_rows: summary.total_rows,
        avg_age: Some(summary.avg_age),
        errors: Vec::new(),
        encoding_used: parsed.encoding.to_string(),
    })
}
