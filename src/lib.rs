//! textgrid - fixed-width table grids inside text buffers
//!
//! Renders tabular data as plain text inside a host text surface and keeps
//! a two-way mapping between text positions (line, column) and table cells
//! (row, display column, offset within the cell), so the cursor can stay in
//! the same cell across re-renders.
//!
//! ```
//! use textgrid::host::{GridHost, Position, RopeHost};
//! use textgrid::table::{ColumnModel, TableData};
//! use textgrid::TableView;
//! use std::rc::Rc;
//!
//! let model = Rc::new(TableData::from_rows(vec![vec!["a", "bb"], vec!["ccc", "d"]]));
//! let columns = ColumnModel::uniform(2, 3, 1).unwrap();
//! let mut view = TableView::new(model, Some(columns)).unwrap();
//!
//! let mut host = RopeHost::new();
//! view.draw(&mut host, Position::new(0, 0)).unwrap();
//! assert_eq!(host.text(), "a   bb \nccc d  ");
//!
//! host.set_focus(Position::new(1, 5)).unwrap();
//! let cell = view.cell_at_focus(&host).unwrap().unwrap();
//! // two characters back from the right edge of "d  "
//! assert_eq!((cell.row, cell.col, cell.offset), (1, 1, 2));
//! ```

pub mod config;
pub mod config_paths;
pub mod error;
pub mod host;
pub mod logging;
pub mod table;
pub mod view;

// Re-export commonly used types
pub use config::TableConfig;
pub use error::{ErrorKind, Result, TableError};
pub use view::TableView;
