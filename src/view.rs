//! Table view: binds a rendered table to a region of host text
//!
//! A view is either unbound or bound to exactly one host region. Every
//! redraw regenerates the whole grid; the user's logical position is
//! captured before the redraw and restored after it, so the cursor stays in
//! the same cell even when widths, formatting or row counts change.
//!
//! ```text
//!            draw()                 update()
//! Unbound ───────────► Bound ◄──────────────┐
//!    ▲                   │ └────────────────┘
//!    └──── remove() ─────┘
//! ```

use std::rc::Rc;

use crate::config::TableConfig;
use crate::error::{Result, TableError};
use crate::host::{GridHost, HostError, Position, RegionGuard, RegionHandle, RegionSpan};
use crate::table::{
    layout, CellMapper, ColumnModel, Motion, TableData, TableModel, TablePosition, Value,
};

#[derive(Debug, Clone)]
enum ViewState {
    Unbound,
    Bound {
        handle: RegionHandle,
        /// Grid text last written to the region
        text: String,
        /// Geometry of the grid currently in the region
        mapper: CellMapper,
    },
}

/// A table model rendered into host text
#[derive(Debug)]
pub struct TableView {
    model: Rc<dyn TableModel>,
    columns: ColumnModel,
    state: ViewState,
}

impl TableView {
    /// Create a view over a shared model
    ///
    /// Without a column model, one is synthesized from the model's content
    /// using default settings.
    pub fn new(model: Rc<dyn TableModel>, columns: Option<ColumnModel>) -> Result<Self> {
        let columns = match columns {
            Some(columns) => {
                columns.validate(model.as_ref())?;
                columns
            }
            None => ColumnModel::synthesize(model.as_ref(), &TableConfig::default()),
        };

        Ok(Self {
            model,
            columns,
            state: ViewState::Unbound,
        })
    }

    /// Create a view with columns synthesized from `config`
    pub fn with_config(model: Rc<dyn TableModel>, config: &TableConfig) -> Self {
        let columns = ColumnModel::synthesize(model.as_ref(), config);
        Self {
            model,
            columns,
            state: ViewState::Unbound,
        }
    }

    /// Create a view over raw rows
    pub fn from_rows<R, V>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::with_config(Rc::new(TableData::from_rows(rows)), &TableConfig::default())
    }

    pub fn model(&self) -> &Rc<dyn TableModel> {
        &self.model
    }

    pub fn columns(&self) -> &ColumnModel {
        &self.columns
    }

    /// Mutable access to the column layout
    ///
    /// Changes show up on the next [`TableView::update`].
    pub fn columns_mut(&mut self) -> &mut ColumnModel {
        &mut self.columns
    }

    /// Swap in a new model, keeping the column layout
    pub fn set_model(&mut self, model: Rc<dyn TableModel>) -> Result<()> {
        self.columns.validate(model.as_ref())?;
        self.model = model;
        Ok(())
    }

    /// Swap in a new column layout
    pub fn set_columns(&mut self, columns: ColumnModel) -> Result<()> {
        columns.validate(self.model.as_ref())?;
        self.columns = columns;
        Ok(())
    }

    pub fn is_bound(&self) -> bool {
        matches!(self.state, ViewState::Bound { .. })
    }

    /// Handle of the bound region, if any
    pub fn handle(&self) -> Option<RegionHandle> {
        match &self.state {
            ViewState::Bound { handle, .. } => Some(*handle),
            ViewState::Unbound => None,
        }
    }

    /// Grid text last written to the host
    pub fn grid_text(&self) -> Option<&str> {
        match &self.state {
            ViewState::Bound { text, .. } => Some(text),
            ViewState::Unbound => None,
        }
    }

    fn mapper(&self) -> CellMapper {
        CellMapper::new(&self.columns, self.model.row_count())
    }

    fn bound(&self) -> Result<(RegionHandle, &CellMapper)> {
        match &self.state {
            ViewState::Bound { handle, mapper, .. } => Ok((*handle, mapper)),
            ViewState::Unbound => Err(TableError::Unbound),
        }
    }

    fn span<H: GridHost + ?Sized>(host: &H, handle: RegionHandle) -> Result<RegionSpan> {
        host.region_span(handle)
            .ok_or(TableError::Host(HostError::UnknownRegion))
    }

    /// Render the table into the host at `at`
    ///
    /// Any region this view already owns is deleted first, so `at` is
    /// interpreted in the text as it reads after that deletion. If layout
    /// fails nothing in the host changes.
    pub fn draw<H: GridHost + ?Sized>(&mut self, host: &mut H, at: Position) -> Result<RegionHandle> {
        let text = layout(self.model.as_ref(), &self.columns)?.text();

        if let ViewState::Bound { handle, .. } = self.state {
            host.delete_region(handle)?;
            self.state = ViewState::Unbound;
            tracing::debug!(region = handle.id(), "released region before redraw");
        }

        let handle = RegionHandle::next();
        host.bind_region(handle, at, &text)?;
        tracing::debug!(
            region = handle.id(),
            line = at.line,
            column = at.column,
            rows = self.model.row_count(),
            "drew table"
        );

        self.state = ViewState::Bound {
            handle,
            text,
            mapper: self.mapper(),
        };
        Ok(handle)
    }

    /// Re-render into the bound region, keeping the cursor in its cell
    ///
    /// The new grid is built before the region is touched; a layout error
    /// leaves the previous grid in place. The focus is only captured and
    /// restored when it lies inside the region and maps to a cell.
    pub fn update<H: GridHost + ?Sized>(&mut self, host: &mut H) -> Result<()> {
        let (handle, old_mapper) = self.bound()?;
        let old_mapper = old_mapper.clone();

        let text = layout(self.model.as_ref(), &self.columns)?.text();
        let new_mapper = self.mapper();

        let mut guard = RegionGuard::acquire(host, handle)?;
        let span = Self::span(&*guard, handle)?;
        let captured = span
            .to_local(guard.focus())
            .and_then(|(line, offset)| old_mapper.screen_to_cell(line, offset).ok());

        guard.replace_region(handle, &text)?;
        self.state = ViewState::Bound {
            handle,
            text,
            mapper: new_mapper.clone(),
        };

        let Some(pos) = captured else {
            tracing::debug!(region = handle.id(), "updated table (focus outside)");
            return Ok(());
        };
        if !new_mapper.has_cells() {
            tracing::debug!(region = handle.id(), "updated table to an empty grid");
            return Ok(());
        }

        let pos = pos.clamped(new_mapper.row_count(), new_mapper.column_count());
        let (line, offset) = new_mapper.cell_to_screen(pos)?;
        let span = Self::span(&*guard, handle)?;
        guard.set_focus(span.to_host(line, offset))?;
        tracing::debug!(region = handle.id(), ?pos, "updated table, restored focus");
        Ok(())
    }

    /// Delete the bound region from the host
    ///
    /// Removing an unbound view does nothing.
    pub fn remove<H: GridHost + ?Sized>(&mut self, host: &mut H) -> Result<()> {
        if let ViewState::Bound { handle, .. } = self.state {
            host.delete_region(handle)?;
            self.state = ViewState::Unbound;
            tracing::debug!(region = handle.id(), "removed table");
        }
        Ok(())
    }

    /// Cell under the host focus, or None when the focus is outside the region
    pub fn cell_at_focus<H: GridHost + ?Sized>(&self, host: &H) -> Result<Option<TablePosition>> {
        let (handle, mapper) = self.bound()?;
        let span = Self::span(host, handle)?;
        match span.to_local(host.focus()) {
            Some((line, offset)) => mapper.screen_to_cell(line, offset).map(Some),
            None => Ok(None),
        }
    }

    /// Model value of the cell under the host focus
    pub fn value_at_focus<H: GridHost + ?Sized>(&self, host: &H) -> Result<Option<Value>> {
        let Some(pos) = self.cell_at_focus(host)? else {
            return Ok(None);
        };
        let model_index = self.columns.column(pos.col)?.model_index();
        Ok(Some(self.model.value_at(pos.row, model_index)?.clone()))
    }

    /// Move the host focus to a cell position
    pub fn focus_cell<H: GridHost + ?Sized>(&self, host: &mut H, pos: TablePosition) -> Result<()> {
        let (handle, mapper) = self.bound()?;
        let (line, offset) = mapper.cell_to_screen(pos)?;
        let span = Self::span(&*host, handle)?;
        host.set_focus(span.to_host(line, offset))?;
        Ok(())
    }

    /// Apply a cell motion to the host focus
    ///
    /// Returns the new position, or None when the focus is outside the table.
    pub fn navigate<H: GridHost + ?Sized>(
        &self,
        host: &mut H,
        motion: Motion,
    ) -> Result<Option<TablePosition>> {
        let Some(pos) = self.cell_at_focus(&*host)? else {
            return Ok(None);
        };
        let (_, mapper) = self.bound()?;
        let next = pos.moved(motion, mapper.row_count(), mapper.widths());
        self.focus_cell(host, next)?;
        Ok(Some(next))
    }
}
