//! Dynamically typed cells and in-memory datasets.
//!
//! Uploaded trend exports carry no schema, so every cell is sniffed at parse
//! time: empty fields become absent, `true`/`false` become booleans, strings
//! that fully parse as a finite float become numbers, and everything else
//! stays text. A row is a fixed-order list of cells aligned with the header.

use std::{fmt, path::Path};

use anyhow::{Context, Result};
use encoding_rs::Encoding;

use crate::io_utils;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Number(f64),
    Boolean(bool),
}

impl Value {
    /// Sniffs a raw CSV field. Returns `None` for empty fields.
    pub fn detect(raw: &str) -> Option<Value> {
        if raw.is_empty() {
            return None;
        }
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("true") {
            return Some(Value::Boolean(true));
        }
        if trimmed.eq_ignore_ascii_case("false") {
            return Some(Value::Boolean(false));
        }
        if looks_numeric(trimmed)
            && let Ok(number) = trimmed.parse::<f64>()
            && number.is_finite()
        {
            return Some(Value::Number(number));
        }
        Some(Value::Text(raw.to_string()))
    }

    pub fn as_display(&self) -> String {
        match self {
            Value::Text(s) => s.clone(),
            Value::Number(n) => {
                if n.fract() == 0.0 {
                    (*n as i64).to_string()
                } else {
                    n.to_string()
                }
            }
            Value::Boolean(b) => b.to_string(),
        }
    }

    /// Numeric view used for ranking and statistics. Numbers pass through;
    /// text must parse in full as a finite float; booleans never qualify.
    pub fn as_engagement(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            Value::Boolean(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_display())
    }
}

// Guards the f64 parser against the exotic spellings it accepts ("inf",
// "NaN") that a spreadsheet export never means as numbers.
fn looks_numeric(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E'))
}

/// A parsed CSV file: the header row plus every non-empty data row, each cell
/// typed via [`Value::detect`].
#[derive(Debug, Clone)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<Value>>>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&Value> {
        self.rows.get(row).and_then(|r| r.get(column))?.as_ref()
    }

    pub fn display(&self, row: usize, column: usize) -> String {
        self.cell(row, column)
            .map(Value::as_display)
            .unwrap_or_default()
    }

    /// All cell values of one row joined with spaces and lowercased, the
    /// haystack the relevance filter searches.
    pub fn row_text(&self, row: usize) -> String {
        let Some(cells) = self.rows.get(row) else {
            return String::new();
        };
        cells
            .iter()
            .map(|cell| cell.as_ref().map(Value::as_display).unwrap_or_default())
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}

/// Reads and types a CSV file. Rows whose fields are all empty are skipped;
/// short rows are padded with absent cells to the header width.
pub fn read_dataset(
    path: &Path,
    delimiter: u8,
    encoding: &'static Encoding,
    limit: Option<usize>,
) -> Result<Dataset> {
    let mut reader = io_utils::open_csv_reader_from_path(path, delimiter, true)?;
    let headers = io_utils::reader_headers(&mut reader, encoding)
        .with_context(|| format!("Reading header row from {path:?}"))?;

    let mut rows = Vec::new();
    for (row_idx, record) in reader.byte_records().enumerate() {
        if let Some(limit) = limit
            && rows.len() >= limit
        {
            break;
        }
        let record = record.with_context(|| format!("Reading row {}", row_idx + 2))?;
        let decoded = io_utils::decode_record(&record, encoding)
            .with_context(|| format!("Decoding row {}", row_idx + 2))?;
        if decoded.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        let mut cells: Vec<Option<Value>> = decoded.iter().map(|f| Value::detect(f)).collect();
        cells.resize(headers.len(), None);
        rows.push(cells);
    }

    Ok(Dataset { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_types_numbers_booleans_and_text() {
        assert_eq!(Value::detect(""), None);
        assert_eq!(Value::detect("120"), Some(Value::Number(120.0)));
        assert_eq!(Value::detect("4.5"), Some(Value::Number(4.5)));
        assert_eq!(Value::detect("-3e2"), Some(Value::Number(-300.0)));
        assert_eq!(Value::detect("TRUE"), Some(Value::Boolean(true)));
        assert_eq!(Value::detect("false"), Some(Value::Boolean(false)));
        assert_eq!(
            Value::detect("y2k revival"),
            Some(Value::Text("y2k revival".to_string()))
        );
    }

    #[test]
    fn detect_rejects_non_numeric_float_spellings() {
        assert_eq!(Value::detect("inf"), Some(Value::Text("inf".to_string())));
        assert_eq!(Value::detect("NaN"), Some(Value::Text("NaN".to_string())));
        assert_eq!(
            Value::detect("12px"),
            Some(Value::Text("12px".to_string()))
        );
    }

    #[test]
    fn integral_numbers_display_without_fraction() {
        assert_eq!(Value::Number(340.0).as_display(), "340");
        assert_eq!(Value::Number(12.5).as_display(), "12.5");
        assert_eq!(Value::Boolean(true).as_display(), "true");
    }

    #[test]
    fn as_engagement_parses_numeric_text_but_not_booleans() {
        assert_eq!(Value::Number(7.0).as_engagement(), Some(7.0));
        assert_eq!(
            Value::Text(" 88.5 ".to_string()).as_engagement(),
            Some(88.5)
        );
        assert_eq!(Value::Text("viral".to_string()).as_engagement(), None);
        assert_eq!(Value::Boolean(true).as_engagement(), None);
    }

    #[test]
    fn row_text_joins_all_cells_lowercased() {
        let dataset = Dataset {
            headers: vec!["title".into(), "score".into(), "flag".into()],
            rows: vec![vec![
                Some(Value::Text("Boho Dress".into())),
                Some(Value::Number(120.0)),
                None,
            ]],
        };
        assert_eq!(dataset.row_text(0), "boho dress 120 ");
    }
}
