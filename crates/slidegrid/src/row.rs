//! Row proxy

use slidegrid_oxml::{Length, RowId};

use crate::collections::{CellCollection, RowCollection};
use crate::notify::HeightObserver;

/// One row of a table
///
/// Borrowed from the table's [`RowCollection`], which relays height changes
/// to the table.
#[derive(Clone, Copy)]
pub struct Row<'a> {
    tr: RowId,
    collection: &'a RowCollection,
}

impl<'a> Row<'a> {
    pub(crate) fn new(tr: RowId, collection: &'a RowCollection) -> Self {
        Self { tr, collection }
    }

    /// Zero-based position of the row
    pub fn index(&self) -> usize {
        self.tr.index()
    }

    /// Current row height
    pub fn height(&self) -> Length {
        self.collection.grid().row_height(self.tr)
    }

    /// Set the row height and update the table's aggregate height
    pub fn set_height(&self, height: impl Into<Length>) {
        let height = height.into();
        log::trace!("row {} height = {height}", self.tr.index());
        self.collection.grid().set_row_height(self.tr, height);
        self.collection.notify_height_changed();
    }

    /// The row's cells, one per grid column
    pub fn cells(&self) -> CellCollection {
        CellCollection::new(self.collection.grid().clone(), self.tr)
    }
}

impl std::fmt::Debug for Row<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Row")
            .field("index", &self.index())
            .field("height", &self.height())
            .finish()
    }
}
