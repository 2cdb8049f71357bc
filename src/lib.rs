//! # Csvcheck - CSV schema validation and basic statistics
//!
//! Csvcheck validates a comma-delimited file against an expected set of
//! columns and computes the mean of a designated age column, trying a fixed
//! chain of text encodings (UTF-8, UTF-8 with BOM, Windows-1252) until one
//! decodes the file.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   CSV File  │────▶│   Reader    │────▶│ Schema+Rows │────▶│   Summary   │
//! │ (UTF8/1252) │     │ (enc chain) │     │ (validate)  │     │ (avg age)   │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
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
//! println!("{} rows, encoding {}", result.total_rows, result.encoding_used);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hard-failure error types
//! - [`reader`] - Decoding reader with encoding fallback
//! - [`schema`] - Required-column checking
//! - [`rows`] - Per-row structural and age validation
//! - [`summary`] - Row count and mean age
//! - [`pipeline`] - Orchestration and the result type

// Core modules
pub mod error;

// Parsing
pub mod reader;

// Validation
pub mod rows;
pub mod schema;

// Aggregation
pub mod summary;

// Orchestration
pub mod pipeline;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{ValidateError, ValidateResult};

// =============================================================================
// Re-exports - Reader
// =============================================================================

pub use reader::{read_csv_rows, ParsedCsv, TextEncoding, DEFAULT_ENCODINGS};

// =============================================================================
// Re-exports - Validation
// =============================================================================

pub use rows::{classify_row, validate_rows, RowIssue};
pub use schema::check_columns;

// =============================================================================
// Re-exports - Aggregation
// =============================================================================

pub use summary::{compute_summary, Summary};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use pipeline::{
    default_expected_columns, validate_csv, ValidationResult, DEFAULT_AGE_COLUMN,
};
