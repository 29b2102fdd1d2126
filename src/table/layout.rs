//! Grid layout
//!
//! Turns a table model and a column model into the text block that
//! represents the table in the host buffer.

use std::fmt;

use super::column::ColumnModel;
use super::model::TableModel;
use super::render::{fit_cell, CellContext};
use crate::error::{Result, TableError};

/// Rendered grid text, one line per table row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedGrid {
    lines: Vec<String>,
}

impl RenderedGrid {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(String::as_str)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines joined by `\n`, without a trailing line break
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for RenderedGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// Lay out every cell of `model` according to `columns`
///
/// Each cell is rendered, truncated and padded to exactly its column width;
/// cells are separated by `column_margin` spaces. A model with no rows gives
/// an empty grid and a column model with no columns gives empty lines.
pub fn layout(model: &dyn TableModel, columns: &ColumnModel) -> Result<RenderedGrid> {
    let spacer = " ".repeat(columns.column_margin());
    let line_width = columns.total_width();
    let model_cols = model.column_count();

    let mut lines = Vec::with_capacity(model.row_count());
    for row in 0..model.row_count() {
        let mut line = String::with_capacity(line_width);
        for (col, column) in columns.columns().iter().enumerate() {
            if column.model_index() >= model_cols {
                return Err(TableError::ModelIndexOutOfBounds {
                    display: col,
                    model_index: column.model_index(),
                    cols: model_cols,
                });
            }

            let value = model.value_at(row, column.model_index())?;
            let text = column.render(value, CellContext::new(row, col));

            if col > 0 {
                line.push_str(&spacer);
            }
            line.push_str(&fit_cell(&text, column.width(), column.alignment()));
        }
        lines.push(line);
    }

    tracing::trace!(
        rows = lines.len(),
        columns = columns.column_count(),
        "laid out grid"
    );
    Ok(RenderedGrid { lines })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::column::{Alignment, ColumnDescriptor};
    use crate::table::model::{TableData, Value};
    use crate::table::render::FnRenderer;

    fn two_by_two() -> TableData {
        TableData::from_rows(vec![vec!["a", "bb"], vec!["ccc", "d"]])
    }

    #[test]
    fn test_layout_basic_grid() {
        let columns = ColumnModel::uniform(2, 3, 1).unwrap();
        let grid = layout(&two_by_two(), &columns).unwrap();

        assert_eq!(grid.lines(), &["a   bb ", "ccc d  "]);
        assert_eq!(grid.text(), "a   bb \nccc d  ");
    }

    #[test]
    fn test_layout_lines_have_total_width() {
        let columns = ColumnModel::new(
            vec![
                ColumnDescriptor::new(1, 6)
                    .unwrap()
                    .with_alignment(Alignment::Right),
                ColumnDescriptor::new(0, 2).unwrap(),
            ],
            2,
        );
        let grid = layout(&two_by_two(), &columns).unwrap();

        for line in grid.lines() {
            assert_eq!(line.chars().count(), columns.total_width());
        }
        assert_eq!(grid.line(0), Some("    bb  a "));
        assert_eq!(grid.line(1), Some("     d  cc"));
    }

    #[test]
    fn test_layout_truncates_long_values() {
        let data = TableData::from_rows(vec![vec!["a very long value"]]);
        let columns = ColumnModel::uniform(1, 8, 1).unwrap();
        let grid = layout(&data, &columns).unwrap();

        assert_eq!(grid.text(), "a ver...");
    }

    #[test]
    fn test_layout_zero_margin() {
        let columns = ColumnModel::uniform(2, 3, 0).unwrap();
        let grid = layout(&two_by_two(), &columns).unwrap();

        assert_eq!(grid.lines(), &["a  bb ", "cccd  "]);
    }

    #[test]
    fn test_layout_empty_model() {
        let data = TableData::new();
        let grid = layout(&data, &ColumnModel::default()).unwrap();

        assert!(grid.is_empty());
        assert_eq!(grid.text(), "");
    }

    #[test]
    fn test_layout_no_columns() {
        let grid = layout(&two_by_two(), &ColumnModel::default()).unwrap();
        assert_eq!(grid.lines(), &["", ""]);
    }

    #[test]
    fn test_layout_stale_model_index() {
        let data = TableData::from_rows(vec![vec!["only"]]);
        let columns = ColumnModel::uniform(2, 4, 1).unwrap();

        let err = layout(&data, &columns).unwrap_err();
        assert!(matches!(
            err,
            TableError::ModelIndexOutOfBounds { display: 1, .. }
        ));
    }

    #[test]
    fn test_layout_passes_display_context() {
        let data = TableData::from_rows(vec![vec![Value::from(1), Value::from(2)]]);
        let columns = ColumnModel::new(
            vec![
                ColumnDescriptor::new(1, 5)
                    .unwrap()
                    .with_renderer(FnRenderer::new(|v, ctx| format!("{}@{}", v, ctx.col))),
                ColumnDescriptor::new(0, 5)
                    .unwrap()
                    .with_renderer(FnRenderer::new(|v, ctx| format!("{}@{}", v, ctx.col))),
            ],
            1,
        );

        let grid = layout(&data, &columns).unwrap();
        assert_eq!(grid.text(), "2@0   1@1  ");
    }

    #[test]
    fn test_layout_is_deterministic() {
        let columns = ColumnModel::uniform(2, 4, 1).unwrap();
        let first = layout(&two_by_two(), &columns).unwrap();
        let second = layout(&two_by_two(), &columns).unwrap();
        assert_eq!(first.text(), second.text());
    }
}
