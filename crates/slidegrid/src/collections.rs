//! Indexed, iterable views over a table's rows, columns and row cells

use std::ops::Range;
use std::rc::Weak;

use slidegrid_oxml::{GridAccessor, RowId};

use crate::cell::Cell;
use crate::column::Column;
use crate::error::{Error, Result};
use crate::notify::{HeightObserver, WidthObserver};
use crate::row::Row;

fn checked_index(idx: isize, len: usize, collection: &'static str) -> Result<usize> {
    usize::try_from(idx)
        .ok()
        .filter(|i| *i < len)
        .ok_or(Error::IndexOutOfRange {
            collection,
            index: idx,
        })
}

// ============================================================================
// Rows
// ============================================================================

/// The rows of a table, in document order
pub struct RowCollection {
    grid: GridAccessor,
    table: Weak<dyn HeightObserver>,
}

impl RowCollection {
    pub(crate) fn new(grid: GridAccessor, table: Weak<dyn HeightObserver>) -> Self {
        Self { grid, table }
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.grid.row_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Row at a zero-based index
    pub fn get(&self, idx: isize) -> Result<Row<'_>> {
        let idx = checked_index(idx, self.len(), "row")?;
        self.row(idx).ok_or(Error::IndexOutOfRange {
            collection: "row",
            index: idx as isize,
        })
    }

    /// Rows in document order
    pub fn iter(&self) -> Rows<'_> {
        Rows {
            collection: self,
            range: 0..self.len(),
        }
    }

    pub(crate) fn grid(&self) -> &GridAccessor {
        &self.grid
    }

    fn row(&self, idx: usize) -> Option<Row<'_>> {
        self.grid.row(idx).map(|tr| Row::new(tr, self))
    }
}

impl HeightObserver for RowCollection {
    /// Forward to the owning table
    fn notify_height_changed(&self) {
        match self.table.upgrade() {
            Some(table) => table.notify_height_changed(),
            None => log::warn!("row height changed after its table was dropped"),
        }
    }
}

impl<'a> IntoIterator for &'a RowCollection {
    type Item = Row<'a>;
    type IntoIter = Rows<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`RowCollection`]
pub struct Rows<'a> {
    collection: &'a RowCollection,
    range: Range<usize>,
}

impl<'a> Iterator for Rows<'a> {
    type Item = Row<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.range.next()?;
        self.collection.row(idx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl ExactSizeIterator for Rows<'_> {}

// ============================================================================
// Columns
// ============================================================================

/// The grid columns of a table, in document order
pub struct ColumnCollection {
    grid: GridAccessor,
    table: Weak<dyn WidthObserver>,
}

impl ColumnCollection {
    pub(crate) fn new(grid: GridAccessor, table: Weak<dyn WidthObserver>) -> Self {
        Self { grid, table }
    }

    /// Number of grid columns
    pub fn len(&self) -> usize {
        self.grid.column_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Column at a zero-based index
    pub fn get(&self, idx: isize) -> Result<Column<'_>> {
        let idx = checked_index(idx, self.len(), "column")?;
        self.column(idx).ok_or(Error::IndexOutOfRange {
            collection: "column",
            index: idx as isize,
        })
    }

    /// Columns in document order
    pub fn iter(&self) -> Columns<'_> {
        Columns {
            collection: self,
            range: 0..self.len(),
        }
    }

    pub(crate) fn grid(&self) -> &GridAccessor {
        &self.grid
    }

    fn column(&self, idx: usize) -> Option<Column<'_>> {
        self.grid.column(idx).map(|col| Column::new(col, self))
    }
}

impl WidthObserver for ColumnCollection {
    /// Forward to the owning table
    fn notify_width_changed(&self) {
        match self.table.upgrade() {
            Some(table) => table.notify_width_changed(),
            None => log::warn!("column width changed after its table was dropped"),
        }
    }
}

impl<'a> IntoIterator for &'a ColumnCollection {
    type Item = Column<'a>;
    type IntoIter = Columns<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`ColumnCollection`]
pub struct Columns<'a> {
    collection: &'a ColumnCollection,
    range: Range<usize>,
}

impl<'a> Iterator for Columns<'a> {
    type Item = Column<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.range.next()?;
        self.collection.column(idx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl ExactSizeIterator for Columns<'_> {}

// ============================================================================
// Cells of a row
// ============================================================================

/// The cell elements of one row, including those covered by a merge
pub struct CellCollection {
    grid: GridAccessor,
    tr: RowId,
}

impl CellCollection {
    pub(crate) fn new(grid: GridAccessor, tr: RowId) -> Self {
        Self { grid, tr }
    }

    /// Number of cells in the row
    pub fn len(&self) -> usize {
        self.grid.row_cell_count(self.tr)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cell at a zero-based index, not resolved through merges
    pub fn get(&self, idx: isize) -> Result<Cell> {
        let idx = checked_index(idx, self.len(), "cell")?;
        self.cell(idx).ok_or(Error::IndexOutOfRange {
            collection: "cell",
            index: idx as isize,
        })
    }

    /// Cells in document order
    pub fn iter(&self) -> Cells<'_> {
        Cells {
            collection: self,
            range: 0..self.len(),
        }
    }

    fn cell(&self, idx: usize) -> Option<Cell> {
        self.grid
            .row_cell(self.tr, idx)
            .map(|tc| Cell::new(self.grid.clone(), tc))
    }
}

impl<'a> IntoIterator for &'a CellCollection {
    type Item = Cell;
    type IntoIter = Cells<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`CellCollection`]
pub struct Cells<'a> {
    collection: &'a CellCollection,
    range: Range<usize>,
}

impl Iterator for Cells<'_> {
    type Item = Cell;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.range.next()?;
        self.collection.cell(idx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl ExactSizeIterator for Cells<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_index() {
        assert_eq!(checked_index(0, 2, "row").unwrap(), 0);
        assert_eq!(checked_index(1, 2, "row").unwrap(), 1);
        assert!(checked_index(2, 2, "row").is_err());
        assert!(checked_index(0, 0, "row").is_err());

        let err = checked_index(-1, 2, "column").unwrap_err();
        assert_eq!(err.to_string(), "column index [-1] out of range");
    }
}
