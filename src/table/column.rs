//! Column descriptors and the column model
//!
//! A [`ColumnModel`] is the display-side view of a table: which model
//! columns are shown, in what order, how wide, and how they are formatted.
//! The model itself is never touched when columns are reordered or hidden.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::model::{TableModel, Value};
use super::render::{CellContext, CellRenderer, NumberRenderer, TextRenderer};
use crate::config::TableConfig;
use crate::error::{Result, TableError};

/// Horizontal alignment of text within a cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Right,
    Center,
}

/// Display metadata for one column
#[derive(Debug, Clone)]
pub struct ColumnDescriptor {
    model_index: usize,
    width: usize,
    alignment: Alignment,
    renderer: Rc<dyn CellRenderer>,
}

impl ColumnDescriptor {
    /// Create a left-aligned text column
    ///
    /// Zero widths are rejected here so layout never sees them.
    pub fn new(model_index: usize, width: usize) -> Result<Self> {
        if width == 0 {
            return Err(TableError::InvalidWidth { width });
        }
        Ok(Self {
            model_index,
            width,
            alignment: Alignment::Left,
            renderer: Rc::new(TextRenderer),
        })
    }

    /// Set the alignment (builder pattern)
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the renderer (builder pattern)
    pub fn with_renderer(mut self, renderer: impl CellRenderer + 'static) -> Self {
        self.renderer = Rc::new(renderer);
        self
    }

    pub fn model_index(&self) -> usize {
        self.model_index
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn renderer(&self) -> &dyn CellRenderer {
        self.renderer.as_ref()
    }

    pub fn set_width(&mut self, width: usize) -> Result<()> {
        if width == 0 {
            return Err(TableError::InvalidWidth { width });
        }
        self.width = width;
        Ok(())
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }

    pub fn set_renderer(&mut self, renderer: impl CellRenderer + 'static) {
        self.renderer = Rc::new(renderer);
    }

    pub fn set_model_index(&mut self, model_index: usize) {
        self.model_index = model_index;
    }

    /// Render a value with this column's renderer
    pub fn render(&self, value: &Value, ctx: CellContext) -> String {
        self.renderer.render(value, ctx)
    }
}

/// Ordered column descriptors plus the spacer between adjacent columns
#[derive(Debug, Clone)]
pub struct ColumnModel {
    columns: Vec<ColumnDescriptor>,
    column_margin: usize,
}

impl Default for ColumnModel {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            column_margin: 1,
        }
    }
}

impl ColumnModel {
    pub fn new(columns: Vec<ColumnDescriptor>, column_margin: usize) -> Self {
        Self {
            columns,
            column_margin,
        }
    }

    /// One fixed-width, left-aligned column per model column, in model order
    pub fn uniform(model_columns: usize, width: usize, column_margin: usize) -> Result<Self> {
        let columns = (0..model_columns)
            .map(|i| ColumnDescriptor::new(i, width))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(columns, column_margin))
    }

    /// Synthesize a column per model column, sized from content
    ///
    /// Widths are the widest rendered value over the first
    /// `config.sample_rows` rows, clamped to `[min_width, max_width]`.
    /// An empty model gets `default_width` columns.
    pub fn synthesize(model: &dyn TableModel, config: &TableConfig) -> Self {
        let min_width = config.min_width.max(1);
        let max_width = config.max_width.max(min_width);
        let sample_rows = model.row_count().min(config.sample_rows);

        let columns = (0..model.column_count())
            .map(|col| {
                let values: Vec<&Value> = (0..sample_rows)
                    .filter_map(|row| model.value_at(row, col).ok())
                    .collect();

                let numeric = config.right_align_numbers
                    && values.iter().any(|v| !v.is_empty())
                    && values.iter().all(|v| v.is_empty() || v.is_numeric());

                let width = if values.is_empty() {
                    config.default_width.clamp(min_width, max_width)
                } else {
                    let widest = values
                        .iter()
                        .enumerate()
                        .map(|(row, v)| {
                            let ctx = CellContext::new(row, col);
                            let text = if numeric {
                                NumberRenderer::new().render(v, ctx)
                            } else {
                                TextRenderer.render(v, ctx)
                            };
                            text.chars().count()
                        })
                        .max()
                        .unwrap_or(0);
                    widest.clamp(min_width, max_width)
                };

                let descriptor = ColumnDescriptor {
                    model_index: col,
                    width,
                    alignment: Alignment::Left,
                    renderer: Rc::new(TextRenderer),
                };
                if numeric {
                    descriptor
                        .with_alignment(Alignment::Right)
                        .with_renderer(NumberRenderer::new())
                } else {
                    descriptor
                }
            })
            .collect();

        Self::new(columns, config.column_margin)
    }

    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    pub fn column_margin(&self) -> usize {
        self.column_margin
    }

    pub fn set_column_margin(&mut self, margin: usize) {
        self.column_margin = margin;
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn column(&self, col: usize) -> Result<&ColumnDescriptor> {
        let cols = self.columns.len();
        self.columns
            .get(col)
            .ok_or(TableError::ColumnOutOfBounds { col, cols })
    }

    pub fn column_mut(&mut self, col: usize) -> Result<&mut ColumnDescriptor> {
        let cols = self.columns.len();
        self.columns
            .get_mut(col)
            .ok_or(TableError::ColumnOutOfBounds { col, cols })
    }

    pub fn column_width(&self, col: usize) -> Result<usize> {
        self.column(col).map(ColumnDescriptor::width)
    }

    /// Offset at which each display column begins
    ///
    /// `positions[i] = sum(width[0..i]) + margin * i`
    pub fn column_positions(&self) -> Vec<usize> {
        let mut x = 0;
        self.columns
            .iter()
            .map(|c| {
                let start = x;
                x += c.width + self.column_margin;
                start
            })
            .collect()
    }

    /// Offset just past the last character of each display column
    pub fn column_ends(&self) -> Vec<usize> {
        self.column_positions()
            .into_iter()
            .zip(&self.columns)
            .map(|(start, c)| start + c.width)
            .collect()
    }

    /// Width of one rendered grid line
    pub fn total_width(&self) -> usize {
        self.column_ends().last().copied().unwrap_or(0)
    }

    /// Append a column at the right edge
    pub fn push(&mut self, column: ColumnDescriptor) {
        self.columns.push(column);
    }

    /// Remove (hide) a display column
    pub fn remove(&mut self, col: usize) -> Result<ColumnDescriptor> {
        self.column(col)?;
        Ok(self.columns.remove(col))
    }

    /// Move a display column to a new display position
    pub fn move_column(&mut self, from: usize, to: usize) -> Result<()> {
        self.column(from)?;
        self.column(to)?;
        let column = self.columns.remove(from);
        self.columns.insert(to, column);
        Ok(())
    }

    /// Check every column's model index against a model
    pub fn validate(&self, model: &dyn TableModel) -> Result<()> {
        let cols = model.column_count();
        match self
            .columns
            .iter()
            .enumerate()
            .find(|(_, c)| c.model_index >= cols)
        {
            Some((display, c)) => Err(TableError::ModelIndexOutOfBounds {
                display,
                model_index: c.model_index,
                cols,
            }),
            None => Ok(()),
        }
    }
}
