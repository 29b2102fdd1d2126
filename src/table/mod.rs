//! Table model, layout and coordinate mapping
//!
//! Everything in this module is host-independent: it turns data into grid
//! text and converts between grid text positions and cell positions.
//!
//! # Architecture
//!
//! ```text
//! TableModel ──┐
//!              ├── layout() ──────────► RenderedGrid (text)
//! ColumnModel ─┤
//!              └── CellMapper ◄───────► (line, offset) <-> TablePosition
//!                                           │
//!                                           └── TablePosition::moved(Motion)
//! ```

mod column;
mod layout;
mod mapping;
mod model;
mod navigation;
mod parser;
pub mod render;

pub use column::{Alignment, ColumnDescriptor, ColumnModel};
pub use layout::{layout, RenderedGrid};
pub use mapping::{CellMapper, TablePosition};
pub use model::{TableData, TableModel, Value};
pub use navigation::Motion;
pub use parser::{detect_delimiter, parse_csv, parse_json, Delimiter};
pub use render::{CellContext, CellRenderer, FnRenderer, NumberRenderer, TextRenderer};
