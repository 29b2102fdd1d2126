//! Table ingestion from delimited text and JSON
//!
//! CSV parsing is RFC 4180 compliant (quoted fields, escaped quotes, custom
//! delimiters) via the csv crate. JSON input is an array of rows, each an
//! array of scalars.

use std::io::Cursor;

use super::model::{TableData, Value};
use crate::error::{Result, TableError};

/// Supported CSV delimiters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
    Semicolon,
}

impl Delimiter {
    /// Get the character for this delimiter
    pub fn char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
            Delimiter::Semicolon => ';',
        }
    }

    /// Detect delimiter from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "tsv" => Delimiter::Tab,
            "psv" => Delimiter::Pipe,
            _ => Delimiter::Comma,
        }
    }
}

/// Parse CSV content into a table
///
/// Ragged rows are accepted and padded to the widest row.
pub fn parse_csv(content: &str, delimiter: Delimiter) -> Result<TableData> {
    let cursor = Cursor::new(content.as_bytes());

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter.char() as u8)
        .has_headers(false)
        .flexible(true)
        .from_reader(cursor);

    let mut rows: Vec<Vec<Value>> = Vec::new();

    for (line_num, result) in reader.records().enumerate() {
        let record = result.map_err(|e| TableError::Parse {
            line: line_num + 1,
            message: e.to_string(),
        })?;
        rows.push(record.iter().map(Value::from_field).collect());
    }

    Ok(TableData::from_rows(rows))
}

/// Parse a JSON array of rows into a table
///
/// Scalars keep their JSON type (`null` becomes an empty cell).
pub fn parse_json(content: &str) -> Result<TableData> {
    let rows: Vec<Vec<Value>> =
        serde_json::from_str(content).map_err(|e| TableError::Parse {
            line: e.line(),
            message: e.to_string(),
        })?;

    Ok(TableData::from_rows(rows))
}

/// Detect delimiter by analyzing first few lines
pub fn detect_delimiter(content: &str) -> Delimiter {
    let first_lines: String = content.lines().take(5).collect::<Vec<_>>().join("\n");

    let comma_count = first_lines.matches(',').count();
    let tab_count = first_lines.matches('\t').count();
    let pipe_count = first_lines.matches('|').count();
    let semi_count = first_lines.matches(';').count();

    let max = comma_count.max(tab_count).max(pipe_count).max(semi_count);

    if max == 0 {
        return Delimiter::Comma;
    }

    if tab_count == max {
        Delimiter::Tab
    } else if pipe_count == max {
        Delimiter::Pipe
    } else if semi_count == max {
        Delimiter::Semicolon
    } else {
        Delimiter::Comma
    }
}
