//! Error types for textgrid

use thiserror::Error;

use crate::host::HostError;

/// Broad classification of a [`TableError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Row or column lookup outside the table
    Index,
    /// Degenerate column layout
    Layout,
    /// Position that does not correspond to any cell
    Mapping,
    /// Operation not valid in the view's current state
    State,
    /// The host rejected a region operation
    Host,
    /// Malformed CSV/JSON input
    Parse,
}

/// Errors produced by the table model, layout, mapping and view layers
#[derive(Error, Debug)]
pub enum TableError {
    #[error("row {row} out of bounds (table has {rows} rows)")]
    RowOutOfBounds { row: usize, rows: usize },

    #[error("column {col} out of bounds (table has {cols} columns)")]
    ColumnOutOfBounds { col: usize, cols: usize },

    #[error("invalid column width {width}: widths must be at least 1")]
    InvalidWidth { width: usize },

    #[error("display column {display} maps to model column {model_index}, but the model has {cols} columns")]
    ModelIndexOutOfBounds {
        display: usize,
        model_index: usize,
        cols: usize,
    },

    #[error("grid has no cells")]
    NoCells,

    #[error("position {line}:{offset} is outside the grid")]
    OutsideGrid { line: usize, offset: usize },

    #[error("table view is not bound to a region")]
    Unbound,

    #[error("host error: {0}")]
    Host(#[from] HostError),

    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },
}

impl TableError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TableError::RowOutOfBounds { .. } | TableError::ColumnOutOfBounds { .. } => {
                ErrorKind::Index
            }
            TableError::InvalidWidth { .. } | TableError::ModelIndexOutOfBounds { .. } => {
                ErrorKind::Layout
            }
            TableError::NoCells | TableError::OutsideGrid { .. } => ErrorKind::Mapping,
            TableError::Unbound => ErrorKind::State,
            TableError::Host(_) => ErrorKind::Host,
            TableError::Parse { .. } => ErrorKind::Parse,
        }
    }
}

/// Result type for textgrid operations
pub type Result<T> = std::result::Result<T, TableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            TableError::RowOutOfBounds { row: 3, rows: 2 }.kind(),
            ErrorKind::Index
        );
        assert_eq!(TableError::InvalidWidth { width: 0 }.kind(), ErrorKind::Layout);
        assert_eq!(TableError::NoCells.kind(), ErrorKind::Mapping);
        assert_eq!(
            TableError::Host(HostError::UnknownRegion).kind(),
            ErrorKind::Host
        );
    }

    #[test]
    fn test_error_messages() {
        let err = TableError::OutsideGrid { line: 2, offset: 40 };
        assert_eq!(err.to_string(), "position 2:40 is outside the grid");
    }
}
