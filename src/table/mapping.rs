//! Coordinate mapping between grid text and table cells
//!
//! Grid coordinates are `(line, offset)` pairs relative to the first
//! character of the rendered grid. Table coordinates are [`TablePosition`]s.
//!
//! Column `j` owns the half-open span `[positions[j], positions[j + 1])`,
//! i.e. its own characters plus the margin spacer after it. The last column
//! owns its characters plus the position just past its final character, so a
//! cursor at the end of a grid line still maps to a cell.
//!
//! The intra-cell offset counts back from the cell's right edge: 0 is just
//! past the cell's last character and `width` is its first character. Offsets
//! that land in a spacer are clamped to 0.

use super::column::ColumnModel;
use crate::error::{Result, TableError};

/// Logical cursor location inside a table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TablePosition {
    pub row: usize,
    /// Display column
    pub col: usize,
    /// Characters back from the right edge of the cell
    pub offset: usize,
}

impl TablePosition {
    pub fn new(row: usize, col: usize, offset: usize) -> Self {
        Self { row, col, offset }
    }

    /// Pull the position inside a `rows x cols` grid
    ///
    /// Used when a re-render removed the row or column the cursor was in.
    /// The offset is left alone; reverse mapping clamps it to the width.
    pub fn clamped(self, rows: usize, cols: usize) -> Self {
        Self {
            row: self.row.min(rows.saturating_sub(1)),
            col: self.col.min(cols.saturating_sub(1)),
            offset: self.offset,
        }
    }
}

/// Precomputed column boundaries for one grid shape
#[derive(Debug, Clone)]
pub struct CellMapper {
    positions: Vec<usize>,
    widths: Vec<usize>,
    row_count: usize,
}

impl CellMapper {
    pub fn new(columns: &ColumnModel, row_count: usize) -> Self {
        Self {
            positions: columns.column_positions(),
            widths: columns.columns().iter().map(|c| c.width()).collect(),
            row_count,
        }
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.widths.len()
    }

    /// Width of every display column
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    pub fn has_cells(&self) -> bool {
        self.row_count > 0 && !self.widths.is_empty()
    }

    fn ensure_cells(&self) -> Result<()> {
        if self.has_cells() {
            Ok(())
        } else {
            Err(TableError::NoCells)
        }
    }

    /// Offset just past the last character of column `col`
    fn right_edge(&self, col: usize) -> usize {
        self.positions[col] + self.widths[col]
    }

    /// Exclusive upper bound of the span owned by column `col`
    fn boundary(&self, col: usize) -> usize {
        match self.positions.get(col + 1) {
            Some(next) => *next,
            None => self.right_edge(col) + 1,
        }
    }

    /// Map a grid `(line, offset)` to the cell under it
    ///
    /// Lines past the last row clamp to the last row. Offsets past the end of
    /// the last column are an error rather than a guess.
    pub fn screen_to_cell(&self, line: usize, offset: usize) -> Result<TablePosition> {
        self.ensure_cells()?;

        let row = line.min(self.row_count - 1);
        let col = (0..self.widths.len())
            .find(|&col| self.boundary(col) > offset)
            .ok_or(TableError::OutsideGrid { line, offset })?;

        let cell_offset = self.right_edge(col).saturating_sub(offset);
        tracing::trace!(line, offset, row, col, cell_offset, "screen -> cell");
        Ok(TablePosition::new(row, col, cell_offset))
    }

    /// Map a cell position to grid `(line, offset)`
    ///
    /// The intra-cell offset is clamped to the column's current width, so a
    /// position captured before a column shrank still lands inside it, at the
    /// cell's first character.
    pub fn cell_to_screen(&self, pos: TablePosition) -> Result<(usize, usize)> {
        self.ensure_cells()?;

        if pos.row >= self.row_count {
            return Err(TableError::RowOutOfBounds {
                row: pos.row,
                rows: self.row_count,
            });
        }
        let width = *self
            .widths
            .get(pos.col)
            .ok_or(TableError::ColumnOutOfBounds {
                col: pos.col,
                cols: self.widths.len(),
            })?;

        let offset = self.right_edge(pos.col) - pos.offset.min(width);
        tracing::trace!(?pos, line = pos.row, offset, "cell -> screen");
        Ok((pos.row, offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::table::column::ColumnDescriptor;

    fn mapper(widths: &[usize], margin: usize, rows: usize) -> CellMapper {
        let columns = ColumnModel::new(
            widths
                .iter()
                .enumerate()
                .map(|(i, w)| ColumnDescriptor::new(i, *w).unwrap())
                .collect(),
            margin,
        );
        CellMapper::new(&columns, rows)
    }

    #[test]
    fn test_forward_inside_cells() {
        // columns at 0..3 and 4..7
        let m = mapper(&[3, 3], 1, 2);
        assert_eq!(m.screen_to_cell(0, 0).unwrap(), TablePosition::new(0, 0, 3));
        assert_eq!(m.screen_to_cell(0, 2).unwrap(), TablePosition::new(0, 0, 1));
        assert_eq!(m.screen_to_cell(1, 5).unwrap(), TablePosition::new(1, 1, 2));
    }

    #[test]
    fn test_forward_right_edge_is_offset_zero() {
        let m = mapper(&[3, 3], 1, 1);
        assert_eq!(m.screen_to_cell(0, 3).unwrap(), TablePosition::new(0, 0, 0));
        assert_eq!(m.screen_to_cell(0, 7).unwrap(), TablePosition::new(0, 1, 0));
    }

    #[test]
    fn test_forward_boundary_belongs_to_next_column() {
        let m = mapper(&[3, 3], 1, 1);
        // positions[1] == 4
        assert_eq!(m.screen_to_cell(0, 4).unwrap(), TablePosition::new(0, 1, 3));
    }

    #[test]
    fn test_forward_boundary_without_margin() {
        let m = mapper(&[3, 3], 0, 1);
        assert_eq!(m.screen_to_cell(0, 3).unwrap(), TablePosition::new(0, 1, 3));
        assert_eq!(m.screen_to_cell(0, 2).unwrap(), TablePosition::new(0, 0, 1));
    }

    #[test]
    fn test_forward_spacer_clamps_to_cell_edge() {
        let m = mapper(&[3, 3], 2, 1);
        // offsets 3 and 4 are the spacer after column 0
        assert_eq!(m.screen_to_cell(0, 3).unwrap(), TablePosition::new(0, 0, 0));
        assert_eq!(m.screen_to_cell(0, 4).unwrap(), TablePosition::new(0, 0, 0));
        assert_eq!(m.screen_to_cell(0, 5).unwrap(), TablePosition::new(0, 1, 3));
    }

    #[test]
    fn test_forward_past_line_end_is_error() {
        let m = mapper(&[3, 3], 1, 1);
        let err = m.screen_to_cell(0, 8).unwrap_err();
        assert!(matches!(err, TableError::OutsideGrid { line: 0, offset: 8 }));
        assert_eq!(err.kind(), ErrorKind::Mapping);
    }

    #[test]
    fn test_forward_clamps_row() {
        let m = mapper(&[3], 1, 2);
        assert_eq!(m.screen_to_cell(9, 1).unwrap().row, 1);
    }

    #[test]
    fn test_reverse_counts_from_right_edge() {
        let m = mapper(&[3, 2], 1, 1);
        assert_eq!(m.cell_to_screen(TablePosition::new(0, 0, 0)).unwrap(), (0, 3));
        assert_eq!(m.cell_to_screen(TablePosition::new(0, 0, 1)).unwrap(), (0, 2));
        assert_eq!(m.cell_to_screen(TablePosition::new(0, 1, 0)).unwrap(), (0, 6));
    }

    #[test]
    fn test_reverse_clamps_offset_to_width() {
        let m = mapper(&[3, 2], 1, 1);
        assert_eq!(m.cell_to_screen(TablePosition::new(0, 1, 10)).unwrap(), (0, 4));
        assert_eq!(m.cell_to_screen(TablePosition::new(0, 0, 10)).unwrap(), (0, 0));
    }

    #[test]
    fn test_reverse_out_of_range() {
        let m = mapper(&[3], 1, 1);
        assert_eq!(
            m.cell_to_screen(TablePosition::new(1, 0, 0)).unwrap_err().kind(),
            ErrorKind::Index
        );
        assert_eq!(
            m.cell_to_screen(TablePosition::new(0, 1, 0)).unwrap_err().kind(),
            ErrorKind::Index
        );
    }

    #[test]
    fn test_empty_grid_has_no_cells() {
        let no_rows = mapper(&[3, 3], 1, 0);
        assert!(matches!(no_rows.screen_to_cell(0, 0), Err(TableError::NoCells)));
        assert!(matches!(
            no_rows.cell_to_screen(TablePosition::default()),
            Err(TableError::NoCells)
        ));

        let no_cols = mapper(&[], 1, 3);
        assert!(matches!(no_cols.screen_to_cell(0, 0), Err(TableError::NoCells)));
    }

    #[test]
    fn test_round_trip_with_margin() {
        let m = mapper(&[3, 5, 1, 4], 1, 3);
        for row in 0..3 {
            for (col, width) in [3, 5, 1, 4].into_iter().enumerate() {
                for offset in 0..=width {
                    let pos = TablePosition::new(row, col, offset);
                    let (line, h) = m.cell_to_screen(pos).unwrap();
                    assert_eq!(m.screen_to_cell(line, h).unwrap(), pos);
                }
            }
        }
    }

    #[test]
    fn test_round_trip_without_margin() {
        // offset 0 of a non-final cell is the first character of the next one
        let m = mapper(&[2, 3], 0, 1);
        for (col, width) in [2, 3].into_iter().enumerate() {
            for offset in 1..=width {
                let pos = TablePosition::new(0, col, offset);
                let (line, h) = m.cell_to_screen(pos).unwrap();
                assert_eq!(m.screen_to_cell(line, h).unwrap(), pos);
            }
        }
        let last = TablePosition::new(0, 1, 0);
        let (line, h) = m.cell_to_screen(last).unwrap();
        assert_eq!(m.screen_to_cell(line, h).unwrap(), last);
    }

    #[test]
    fn test_position_clamped() {
        let pos = TablePosition::new(5, 4, 7).clamped(2, 3);
        assert_eq!(pos, TablePosition::new(1, 2, 7));
    }
}
