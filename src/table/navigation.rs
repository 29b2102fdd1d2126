//! Cell navigation logic
//!
//! Handles cell-wise movement (arrow keys, Tab/Shift+Tab, Home/End, paging)
//! on logical table positions. The view turns the result back into a host
//! cursor position through the coordinate mapper.

use super::mapping::TablePosition;

/// A cursor motion in table space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Up,
    Down,
    Left,
    Right,
    /// Next cell, wrapping to the start of the next row (Tab)
    NextCell,
    /// Previous cell, wrapping to the end of the previous row (Shift+Tab)
    PrevCell,
    RowStart,
    RowEnd,
    FirstCell,
    LastCell,
    PageUp(usize),
    PageDown(usize),
}

impl TablePosition {
    /// Apply a motion inside a table of `rows` rows and columns of `widths`
    ///
    /// Vertical motions keep the intra-cell offset; any motion that changes
    /// column puts the cursor on the first character of the new cell. Motions
    /// never leave the table: at an edge they are no-ops.
    pub fn moved(self, motion: Motion, rows: usize, widths: &[usize]) -> TablePosition {
        let cols = widths.len();
        if rows == 0 || cols == 0 {
            return self;
        }

        let last_row = rows - 1;
        let last_col = cols - 1;
        let TablePosition { row, col, offset } = self.clamped(rows, cols);
        let cell = |row: usize, col: usize| TablePosition::new(row, col, widths[col]);

        match motion {
            Motion::Up => TablePosition::new(row.saturating_sub(1), col, offset),
            Motion::Down => TablePosition::new((row + 1).min(last_row), col, offset),
            Motion::PageUp(page) => TablePosition::new(row.saturating_sub(page.max(1)), col, offset),
            Motion::PageDown(page) => {
                TablePosition::new((row + page.max(1)).min(last_row), col, offset)
            }
            Motion::Left if col > 0 => cell(row, col - 1),
            Motion::Left => cell(row, 0),
            Motion::Right => cell(row, (col + 1).min(last_col)),
            Motion::NextCell if col < last_col => cell(row, col + 1),
            Motion::NextCell if row < last_row => cell(row + 1, 0),
            Motion::NextCell => cell(last_row, last_col),
            Motion::PrevCell if col > 0 => cell(row, col - 1),
            Motion::PrevCell if row > 0 => cell(row - 1, last_col),
            Motion::PrevCell => cell(0, 0),
            Motion::RowStart => cell(row, 0),
            Motion::RowEnd => cell(row, last_col),
            Motion::FirstCell => cell(0, 0),
            Motion::LastCell => cell(last_row, last_col),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTHS: [usize; 3] = [3, 5, 2];
    const WIDE: [usize; 4] = [4, 4, 4, 4];

    /// Position on the first character of a cell in [`WIDTHS`]
    fn pos(row: usize, col: usize) -> TablePosition {
        TablePosition::new(row, col, WIDTHS[col])
    }

    fn start(row: usize, col: usize) -> TablePosition {
        TablePosition::new(row, col, 4)
    }

    #[test]
    fn test_move_down_keeps_offset() {
        let moved = TablePosition::new(0, 1, 2).moved(Motion::Down, 5, &WIDTHS);
        assert_eq!(moved, TablePosition::new(1, 1, 2));
    }

    #[test]
    fn test_move_right_lands_on_cell_start() {
        let moved = TablePosition::new(0, 0, 0).moved(Motion::Right, 5, &WIDTHS);
        assert_eq!(moved, TablePosition::new(0, 1, 5));
    }

    #[test]
    fn test_move_clamped_at_edges() {
        assert_eq!(pos(0, 0).moved(Motion::Up, 5, &WIDTHS), pos(0, 0));
        assert_eq!(pos(4, 0).moved(Motion::Down, 5, &WIDTHS), pos(4, 0));
        assert_eq!(pos(0, 2).moved(Motion::Right, 5, &WIDTHS), pos(0, 2));
        assert_eq!(pos(0, 0).moved(Motion::Left, 5, &WIDTHS), pos(0, 0));
    }

    #[test]
    fn test_next_cell_wraps() {
        assert_eq!(pos(0, 2).moved(Motion::NextCell, 3, &WIDTHS), pos(1, 0));
        assert_eq!(pos(2, 2).moved(Motion::NextCell, 3, &WIDTHS), pos(2, 2));
    }

    #[test]
    fn test_prev_cell_wraps() {
        assert_eq!(pos(1, 0).moved(Motion::PrevCell, 3, &WIDTHS), pos(0, 2));
        assert_eq!(pos(0, 0).moved(Motion::PrevCell, 3, &WIDTHS), pos(0, 0));
    }

    #[test]
    fn test_first_last_cell() {
        assert_eq!(start(2, 2).moved(Motion::FirstCell, 5, &WIDE), start(0, 0));
        assert_eq!(start(2, 2).moved(Motion::LastCell, 5, &WIDE), start(4, 3));
    }

    #[test]
    fn test_row_start_end() {
        let mid_cell = TablePosition::new(2, 1, 1);
        assert_eq!(mid_cell.moved(Motion::RowStart, 5, &WIDE), start(2, 0));
        assert_eq!(mid_cell.moved(Motion::RowEnd, 5, &WIDE), start(2, 3));
    }

    #[test]
    fn test_page_navigation() {
        let top = start(0, 1);
        let down = top.moved(Motion::PageDown(10), 100, &WIDE);
        assert_eq!(down, start(10, 1));
        assert_eq!(down.moved(Motion::PageUp(10), 100, &WIDE), top);
        assert_eq!(start(95, 0).moved(Motion::PageDown(10), 100, &WIDE), start(99, 0));
    }

    #[test]
    fn test_stale_position_is_clamped_first() {
        assert_eq!(pos(9, 2).moved(Motion::Left, 3, &WIDTHS), pos(2, 1));
    }

    #[test]
    fn test_empty_table_is_noop() {
        let p = TablePosition::new(0, 0, 0);
        assert_eq!(p.moved(Motion::Down, 0, &[]), p);
    }
}
