//! Schema checking: required columns must be present in the header.

use std::collections::HashSet;

use crate::error::{ValidateError, ValidateResult};
use crate::reader::ParsedCsv;

/// Check that the header contains every required column.
///
/// Runs before any row inspection. A file with zero data rows (empty or
/// header-only) has no schema worth checking and is rejected outright.
///
/// # Errors
/// [`ValidateError::EmptyFile`] when there are no data rows;
/// [`ValidateError::MissingColumns`] with the sorted list of absent names.
pub fn check_columns(parsed: &ParsedCsv, expected: &HashSet<String>) -> ValidateResult<()> {
    if parsed.rows.is_empty() {
        return Err(ValidateError::EmptyFile);
    }

    let present: HashSet<&str> = parsed.headers.iter().map(String::as_str).collect();

    let mut missing: Vec<String> = expected
        .iter()
        .filter(|c| !present.contains(c.as_str()))
        .cloned()
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        missing.sort();
        Err(ValidateError::MissingColumns(missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(headers: &[&str], rows: usize) -> ParsedCsv {
        ParsedCsv {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: vec![vec![String::new(); headers.len()]; rows],
            encoding: "utf-8",
        }
    }

    fn expected(cols: &[&str]) -> HashSet<String> {
        cols.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_all_columns_present() {
        let p = parsed(&["id", "nombre", "edad", "ciudad"], 1);
        assert!(check_columns(&p, &expected(&["id", "nombre", "edad", "ciudad"])).is_ok());
    }

    #[test]
    fn test_extra_header_columns_allowed() {
        let p = parsed(&["id", "nombre", "edad", "ciudad", "pais"], 1);
        assert!(check_columns(&p, &expected(&["id", "edad"])).is_ok());
    }

    #[test]
    fn test_missing_columns_sorted() {
        let p = parsed(&["id", "edad"], 1);
        let err = check_columns(&p, &expected(&["id", "nombre", "edad", "ciudad"])).unwrap_err();
        match err {
            ValidateError::MissingColumns(missing) => {
                assert_eq!(missing, vec!["ciudad", "nombre"]);
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_rows_is_empty_file() {
        let p = parsed(&["id", "edad"], 0);
        let err = check_columns(&p, &expected(&["id"])).unwrap_err();
        assert!(matches!(err, ValidateError::EmptyFile));
    }
}
