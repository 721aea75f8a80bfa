//! # slidegrid-oxml
//!
//! The document tree behind a presentation table, and the grid accessor the
//! `slidegrid` facade drives.
//!
//! - [`TableTree`] - flags, grid columns, rows and cells of a `<a:tbl>`
//! - [`GridAccessor`] - shared handle with merge-aware cell lookup and typed
//!   attribute access
//! - [`Length`] - EMU lengths
//! - [`xml`] - DrawingML read/write
//!
//! ## Example
//!
//! ```rust
//! use slidegrid_oxml::{GridAccessor, Length, TableTree};
//!
//! let mut tree = TableTree::new(2, 3, Length::inches(6.0), Length::inches(1.0)).unwrap();
//! tree.merge((0, 0), (0, 1)).unwrap();
//!
//! let grid = GridAccessor::new(tree).unwrap();
//! assert_eq!(grid.tc(0, 1).unwrap(), grid.tc(0, 0).unwrap());
//! ```

pub mod accessor;
pub mod anchor;
pub mod cell;
pub mod color;
pub mod column;
pub mod error;
pub mod fill;
pub mod options;
pub mod row;
pub mod span;
pub mod table;
pub mod text;
pub mod units;
pub mod xml;

pub use accessor::{CellId, ColumnId, GridAccessor, RowId};
pub use anchor::VerticalAnchor;
pub use cell::{
    CellProperties, Side, TableCell, DEFAULT_HORIZONTAL_MARGIN, DEFAULT_VERTICAL_MARGIN,
};
pub use color::{Color, ThemeColor};
pub use column::GridColumn;
pub use error::{Error, Result};
pub use fill::{Fill, FillType, GradientStop, PatternType};
pub use options::{TableOptions, XmlWriteOptions};
pub use row::TableRow;
pub use span::CellSpan;
pub use table::{TableFlag, TableProperties, TableTree};
pub use text::{Paragraph, Run, TextBody};
pub use units::{Length, MAX_EXTENT};
