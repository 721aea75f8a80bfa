//! Row element (`<a:tr>`)

use crate::cell::TableCell;
use crate::units::Length;

/// A table row
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableRow {
    /// Row height (always explicit)
    pub height: Length,
    /// One cell per grid column, including covered merge members
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a row of `cols` default cells
    pub fn new(height: Length, cols: usize) -> Self {
        Self {
            height,
            cells: vec![TableCell::default(); cols],
        }
    }

    /// Number of cells in this row
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Check if any cell in this row is part of a merged region
    pub fn has_merged_cells(&self) -> bool {
        self.cells
            .iter()
            .any(|tc| tc.is_merge_origin() || tc.is_spanned())
    }
}
