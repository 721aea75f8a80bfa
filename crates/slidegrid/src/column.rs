//! Column proxy

use slidegrid_oxml::{ColumnId, Length};

use crate::collections::ColumnCollection;
use crate::notify::WidthObserver;

/// One grid column of a table
#[derive(Clone, Copy)]
pub struct Column<'a> {
    col: ColumnId,
    collection: &'a ColumnCollection,
}

impl<'a> Column<'a> {
    pub(crate) fn new(col: ColumnId, collection: &'a ColumnCollection) -> Self {
        Self { col, collection }
    }

    /// Zero-based position of the column
    pub fn index(&self) -> usize {
        self.col.index()
    }

    /// Current column width
    pub fn width(&self) -> Length {
        self.collection.grid().column_width(self.col)
    }

    /// Set the column width and update the table's aggregate width
    pub fn set_width(&self, width: impl Into<Length>) {
        let width = width.into();
        log::trace!("column {} width = {width}", self.col.index());
        self.collection.grid().set_column_width(self.col, width);
        self.collection.notify_width_changed();
    }
}

impl std::fmt::Debug for Column<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("index", &self.index())
            .field("width", &self.width())
            .finish()
    }
}
