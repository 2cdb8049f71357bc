//! CSV reading with a fixed encoding fallback chain.
//!
//! Files from varied locales commonly arrive in one of a small number of
//! encodings. Instead of heuristic sniffing, each candidate in an ordered
//! list is tried strictly against the full byte content; the first one that
//! decodes every byte sequence is adopted and the file is parsed under it.

use std::path::Path;

use crate::error::{ValidateError, ValidateResult};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// A candidate text encoding for the fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    /// Strict UTF-8 without a byte-order mark.
    Utf8,
    /// Strict UTF-8 with an optional byte-order mark stripped.
    Utf8Sig,
    /// Windows-1252 (cp1252), the usual Western-locale fallback.
    Windows1252,
}

/// Default fallback order: UTF-8, UTF-8 with BOM, Windows-1252.
pub const DEFAULT_ENCODINGS: &[TextEncoding] = &[
    TextEncoding::Utf8,
    TextEncoding::Utf8Sig,
    TextEncoding::Windows1252,
];

impl TextEncoding {
    /// Normalized lowercase label, reported in [`crate::ValidationResult`].
    pub fn name(self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Utf8Sig => "utf-8-sig",
            TextEncoding::Windows1252 => "windows-1252",
        }
    }

    /// Decode `bytes` strictly under this encoding.
    ///
    /// Returns `None` when any byte sequence is invalid for the encoding.
    /// `Utf8` rejects BOM-prefixed input so that such files are adopted by
    /// `Utf8Sig` instead, keeping the first header name free of U+FEFF.
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            TextEncoding::Utf8 => {
                if bytes.starts_with(UTF8_BOM) {
                    return None;
                }
                std::str::from_utf8(bytes).ok().map(str::to_string)
            }
            TextEncoding::Utf8Sig => {
                let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
                std::str::from_utf8(body).ok().map(str::to_string)
            }
            TextEncoding::Windows1252 => {
                let (text, _, had_errors) = encoding_rs::WINDOWS_1252.decode(bytes);
                if had_errors {
                    None
                } else {
                    Some(text.into_owned())
                }
            }
        }
    }
}

/// Result of reading a CSV file, with the encoding that decoded it.
///
/// Rows are kept as raw field lists rather than name/value maps so that a
/// row with a deviating field count is an unambiguous length comparison
/// against `headers.len()`.
#[derive(Debug, Clone)]
pub struct ParsedCsv {
    /// Column names from the first line.
    pub headers: Vec<String>,
    /// Data rows, each a list of raw field values in column order.
    pub rows: Vec<Vec<String>>,
    /// Encoding that successfully decoded the file.
    pub encoding: &'static str,
}

impl ParsedCsv {
    /// Index of `column` in the header, if present.
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == column)
    }
}

/// Read a CSV file, trying each candidate encoding in order.
///
/// The whole file is read once; each candidate decodes the full byte
/// content from scratch, so the adopted encoding's records are always
/// complete and consistent (no resumption of a partial attempt).
///
/// # Errors
/// [`ValidateError::Decoding`] naming every attempted encoding when none
/// decodes the file; [`ValidateError::Io`] when the file cannot be read.
pub fn read_csv_rows(path: &Path, encodings: &[TextEncoding]) -> ValidateResult<ParsedCsv> {
    let bytes = std::fs::read(path)?;

    for &enc in encodings {
        if let Some(text) = enc.decode(&bytes) {
            return parse_records(&text, enc.name());
        }
    }

    Err(ValidateError::Decoding {
        attempted: encodings.iter().map(|e| e.name().to_string()).collect(),
    })
}

/// Parse decoded CSV text into headers and raw data rows.
///
/// Standard comma-delimited format with standard quoting; blank lines are
/// skipped. `flexible` mode keeps rows with deviating field counts as-is
/// so the row validator can classify them.
fn parse_records(text: &str, encoding: &'static str) -> ValidateResult<ParsedCsv> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(ParsedCsv {
        headers,
        rows,
        encoding,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> ParsedCsv {
        parse_records(text, "utf-8").unwrap()
    }

    #[test]
    fn test_headers_and_rows() {
        let parsed = parse("id,nombre,edad\n1,Ana,23\n2,Luis,40\n");
        assert_eq!(parsed.headers, vec!["id", "nombre", "edad"]);
        assert_eq!(parsed.rows.len(), 2);
        assert_eq!(parsed.rows[0], vec!["1", "Ana", "23"]);
    }

    #[test]
    fn test_flexible_keeps_deviating_field_counts() {
        let parsed = parse("a,b\n1,2,3\n1\n");
        assert_eq!(parsed.rows[0], vec!["1", "2", "3"]);
        assert_eq!(parsed.rows[1], vec!["1"]);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let parsed = parse("a,b\n1,2\n\n3,4\n");
        assert_eq!(parsed.rows.len(), 2);
    }

    #[test]
    fn test_quoted_values() {
        let parsed = parse("name,city\n\"Ana, Maria\",Madrid\n");
        assert_eq!(parsed.rows[0], vec!["Ana, Maria", "Madrid"]);
    }

    #[test]
    fn test_column_index() {
        let parsed = parse("id,edad\n1,23\n");
        assert_eq!(parsed.column_index("edad"), Some(1));
        assert_eq!(parsed.column_index("ciudad"), None);
    }

    #[test]
    fn test_utf8_decodes_plain_ascii() {
        assert_eq!(
            TextEncoding::Utf8.decode(b"id,edad\n1,23\n").as_deref(),
            Some("id,edad\n1,23\n")
        );
    }

    #[test]
    fn test_utf8_rejects_bom() {
        let bytes = [b"\xEF\xBB\xBF".as_ref(), b"id,edad\n"].concat();
        assert_eq!(TextEncoding::Utf8.decode(&bytes), None);
    }

    #[test]
    fn test_utf8_sig_strips_bom() {
        let bytes = [b"\xEF\xBB\xBF".as_ref(), b"id,edad\n"].concat();
        assert_eq!(TextEncoding::Utf8Sig.decode(&bytes).as_deref(), Some("id,edad\n"));
    }

    #[test]
    fn test_utf8_sig_accepts_missing_bom() {
        assert_eq!(TextEncoding::Utf8Sig.decode(b"id\n").as_deref(), Some("id\n"));
    }

    #[test]
    fn test_utf8_rejects_invalid_sequences() {
        // "Garc\xEDa" in Windows-1252
        let bytes: &[u8] = &[0x47, 0x61, 0x72, 0x63, 0xED, 0x61];
        assert_eq!(TextEncoding::Utf8.decode(bytes), None);
    }

    #[test]
    fn test_windows_1252_decodes_latin_bytes() {
        let bytes: &[u8] = &[0x47, 0x61, 0x72, 0x63, 0xED, 0x61];
        assert_eq!(TextEncoding::Windows1252.decode(bytes).as_deref(), Some("García"));
    }

    #[test]
    fn test_encoding_names() {
        assert_eq!(TextEncoding::Utf8.name(), "utf-8");
        assert_eq!(TextEncoding::Utf8Sig.name(), "utf-8-sig");
        assert_eq!(TextEncoding::Windows1252.name(), "windows-1252");
    }
}
