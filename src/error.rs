//! Error types for the validation pipeline.
//!
//! One enum covers every hard failure the pipeline can abort with:
//!
//! - [`ValidateError::FileNotFound`] - input path does not exist
//! - [`ValidateError::Decoding`] - no candidate encoding decodes the file
//! - [`ValidateError::EmptyFile`] - zero data rows parsed
//! - [`ValidateError::MissingColumns`] - header lacks required columns
//!
//! Row-level problems (wrong field count, non-integer age) are deliberately
//! NOT part of this enum: they are collected as data into
//! [`crate::ValidationResult::errors`] and the pipeline still returns `Ok`.
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use std::path::PathBuf;
use thiserror::Error;

/// Hard failures that abort the validation pipeline.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// Failed to read the file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Input path does not exist.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// No candidate encoding decoded the entire file.
    #[error("Could not decode file using encodings: {attempted:?}")]
    Decoding { attempted: Vec<String> },

    /// Zero data rows parsed (the file is empty or header-only).
    #[error("CSV has no rows")]
    EmptyFile,

    /// Header lacks one or more required columns (sorted).
    #[error("Missing columns: {0:?}")]
    MissingColumns(Vec<String>),

    /// Malformed delimited text rejected by the CSV reader.
    #[error("Invalid CSV format: {0}")]
    Parse(#[from] csv::Error),
}

/// Result type for validation operations.
pub type ValidateResult<T> = Result<T, ValidateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_names_path() {
        let err = ValidateError::FileNotFound(PathBuf::from("/tmp/nope.csv"));
        assert!(err.to_string().contains("/tmp/nope.csv"));
    }

    #[test]
    fn test_decoding_error_names_all_attempted() {
        let err = ValidateError::Decoding {
            attempted: vec!["utf-8".into(), "utf-8-sig".into(), "windows-1252".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("utf-8"));
        assert!(msg.contains("utf-8-sig"));
        assert!(msg.contains("windows-1252"));
    }

    #[test]
    fn test_missing_columns_format() {
        let err = ValidateError::MissingColumns(vec!["ciudad".into()]);
        let msg = err.to_string();
        assert!(msg.contains("Missing columns"));
        assert!(msg.contains("ciudad"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ValidateError = io.into();
        assert!(err.to_string().contains("denied"));
    }
}
