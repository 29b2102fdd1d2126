//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::rc::Rc;

use textgrid::error::{Result, TableError};
use textgrid::host::{GridHost, HostError, Position, RegionHandle, RegionSpan, RopeHost};
use textgrid::table::{ColumnModel, TableData, TableModel, Value};
use textgrid::TableView;

/// The two-by-two table used throughout: `[["a","bb"],["ccc","d"]]`
pub fn small_model() -> Rc<TableData> {
    Rc::new(TableData::from_rows(vec![vec!["a", "bb"], vec!["ccc", "d"]]))
}

/// Two width-3 columns with a one-space margin over [`small_model`]
pub fn small_view() -> TableView {
    let columns = ColumnModel::uniform(2, 3, 1).unwrap();
    TableView::new(small_model(), Some(columns)).unwrap()
}

/// A host with a title line, an empty line for the grid, and a footer
pub fn framed_host() -> RopeHost {
    RopeHost::with_text("title\n\nfooter")
}

/// Draw `view` on line 1 of [`framed_host`]
pub fn drawn(mut view: TableView) -> (TableView, RopeHost) {
    let mut host = framed_host();
    view.draw(&mut host, Position::new(1, 0)).unwrap();
    (view, host)
}

/// Model whose lookups fail from a given row on
#[derive(Debug)]
pub struct BrokenModel {
    pub rows: usize,
    pub fail_from: usize,
    pub value: Value,
}

impl TableModel for BrokenModel {
    fn row_count(&self) -> usize {
        self.rows
    }

    fn column_count(&self) -> usize {
        2
    }

    fn value_at(&self, row: usize, _col: usize) -> Result<&Value> {
        if row >= self.fail_from {
            return Err(TableError::RowOutOfBounds {
                row,
                rows: self.fail_from,
            });
        }
        Ok(&self.value)
    }
}

/// Host wrapper that can refuse region replacement
#[derive(Debug)]
pub struct FailingHost {
    pub inner: RopeHost,
    pub fail_replace: bool,
}

impl FailingHost {
    pub fn new(inner: RopeHost) -> Self {
        Self {
            inner,
            fail_replace: false,
        }
    }
}

impl GridHost for FailingHost {
    fn focus(&self) -> Position {
        self.inner.focus()
    }

    fn set_focus(&mut self, pos: Position) -> std::result::Result<(), HostError> {
        self.inner.set_focus(pos)
    }

    fn bind_region(
        &mut self,
        handle: RegionHandle,
        at: Position,
        text: &str,
    ) -> std::result::Result<(), HostError> {
        self.inner.bind_region(handle, at, text)
    }

    fn replace_region(
        &mut self,
        handle: RegionHandle,
        text: &str,
    ) -> std::result::Result<(), HostError> {
        if self.fail_replace {
            return Err(HostError::RegionLocked);
        }
        self.inner.replace_region(handle, text)
    }

    fn delete_region(&mut self, handle: RegionHandle) -> std::result::Result<(), HostError> {
        self.inner.delete_region(handle)
    }

    fn region_span(&self, handle: RegionHandle) -> Option<RegionSpan> {
        self.inner.region_span(handle)
    }

    fn lock_region(&mut self, handle: RegionHandle) -> std::result::Result<(), HostError> {
        self.inner.lock_region(handle)
    }

    fn unlock_region(&mut self, handle: RegionHandle) {
        self.inner.unlock_region(handle)
    }
}
