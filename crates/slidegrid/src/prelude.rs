//! Prelude module - common imports for slidegrid users
//!
//! ```rust
//! use slidegrid::prelude::*;
//! ```

pub use crate::{
    Cell, CellCollection, Color, Column, ColumnCollection, Error, Extents, Fill, FillFormat,
    FillType, GraphicFrame, HeightObserver, Length, MarginValue, PatternType, Result, Row,
    RowCollection, Table, TextFrame, ThemeColor, VerticalAnchor, WidthObserver,
};
