//! # slidegrid
//!
//! An editable object model for tables embedded in presentation slides.
//!
//! A [`Table`] wraps a DrawingML `<a:tbl>` tree and the graphic frame that
//! contains it. From it you reach:
//!
//! - [`Cell`] - merge-aware access by coordinate, with margins, vertical
//!   anchor, fill and text
//! - [`RowCollection`] / [`ColumnCollection`] - sized rows and columns;
//!   resizing either keeps the frame's extents equal to the table's total
//! - style flags such as [`Table::first_row`] and [`Table::horz_banding`]
//!
//! ## Example
//!
//! ```rust
//! use slidegrid::prelude::*;
//!
//! let table = Table::with_size(2, 3, Extents::default()).unwrap();
//!
//! for (row, height) in table.rows().iter().zip([100, 200]) {
//!     row.set_height(Length::emu(height));
//! }
//! for (col, width) in table.columns().iter().zip([10, 20, 30]) {
//!     col.set_width(Length::emu(width));
//! }
//! assert_eq!(table.aggregate_height(), Length::emu(300));
//! assert_eq!(table.aggregate_width(), Length::emu(60));
//!
//! let cell = table.cell(1, 2).unwrap();
//! cell.set_text("Total");
//! cell.set_margin_left(Length::pt(4.0)).unwrap();
//! assert!(cell.set_margin_left(3.5).is_err());
//! ```

pub mod cell;
pub mod collections;
pub mod column;
pub mod error;
pub mod fill;
pub mod frame;
pub mod notify;
pub mod prelude;
pub mod row;
pub mod table;
pub mod text;

pub use cell::{Cell, MarginValue};
pub use collections::{CellCollection, Cells, ColumnCollection, Columns, RowCollection, Rows};
pub use column::Column;
pub use error::{Error, Result};
pub use fill::FillFormat;
pub use frame::{Extents, GraphicFrame};
pub use notify::{HeightObserver, WidthObserver};
pub use row::Row;
pub use table::Table;
pub use text::TextFrame;

// Re-export the tree types callers need alongside the facade
pub use slidegrid_oxml::{
    CellSpan, Color, Fill, FillType, GradientStop, GridAccessor, Length, PatternType, Side,
    TableOptions, TableTree, ThemeColor, VerticalAnchor,
};
