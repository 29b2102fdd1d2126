//! Table data model types

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};

/// A single cell value
///
/// Values are opaque to the layout engine; only renderers look inside them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Empty,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Value {
    /// Parse a raw text field, keeping it as text
    ///
    /// Empty fields become [`Value::Empty`].
    pub fn from_field(field: &str) -> Self {
        if field.is_empty() {
            Value::Empty
        } else {
            Value::Text(field.to_string())
        }
    }

    /// Numeric view of the value, if it has one
    ///
    /// Text that parses as a number counts as numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            Value::Text(s) => s.trim().parse::<f64>().ok(),
            Value::Empty | Value::Bool(_) => None,
        }
    }

    /// Check if the value looks like a number (for right-alignment)
    pub fn is_numeric(&self) -> bool {
        self.as_f64().is_some()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Empty => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(n as i64)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// Read access to tabular data
///
/// Views hold models behind `Rc<dyn TableModel>`, so one model can back
/// several views and be swapped out without touching the column layout.
pub trait TableModel: fmt::Debug {
    fn row_count(&self) -> usize;

    fn column_count(&self) -> usize;

    /// Value at (row, model column). Out-of-range lookups are errors, never clamped.
    fn value_at(&self, row: usize, col: usize) -> Result<&Value>;

    fn is_empty(&self) -> bool {
        self.row_count() == 0 || self.column_count() == 0
    }
}

/// In-memory row-major table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableData {
    rows: Vec<Vec<Value>>,
    /// Number of columns (max across all input rows)
    column_count: usize,
}

impl TableData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from rows of values
    ///
    /// Short rows are padded with [`Value::Empty`] so every row has the
    /// same number of columns.
    pub fn from_rows<R, V>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let mut rows: Vec<Vec<Value>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();

        let column_count = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(column_count, Value::Empty);
        }

        Self { rows, column_count }
    }

    /// Get entire row as a slice
    pub fn row(&self, row: usize) -> Option<&[Value]> {
        self.rows.get(row).map(|r| r.as_slice())
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Value]> {
        self.rows.iter().map(|r| r.as_slice())
    }
}

impl TableModel for TableData {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn column_count(&self) -> usize {
        self.column_count
    }

    fn value_at(&self, row: usize, col: usize) -> Result<&Value> {
        let cells = self.rows.get(row).ok_or(TableError::RowOutOfBounds {
            row,
            rows: self.rows.len(),
        })?;
        cells.get(col).ok_or(TableError::ColumnOutOfBounds {
            col,
            cols: self.column_count,
        })
    }
}
