//! Shared, typed access to a table tree
//!
//! [`GridAccessor`] is the handle the table facade drives. It owns the tree
//! behind `Rc<RefCell<_>>`, hands out typed node ids for rows, grid columns
//! and cells, and reads or writes one attribute per call. Every borrow is
//! released before a method returns, so callers may chain reads and writes
//! freely from a single thread.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::anchor::VerticalAnchor;
use crate::cell::{CellProperties, Side};
use crate::error::{Error, Result};
use crate::fill::Fill;
use crate::span::CellSpan;
use crate::table::{TableFlag, TableTree};
use crate::text::TextBody;
use crate::units::Length;

/// A row element (`<a:tr>`), by physical position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowId(usize);

impl RowId {
    /// Zero-based physical row index
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A grid column element (`<a:gridCol>`), by physical position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnId(usize);

impl ColumnId {
    /// Zero-based physical column index
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A cell element (`<a:tc>`), by physical position
///
/// Two ids are equal iff they name the same `<a:tc>`; a covered coordinate
/// resolved through [`GridAccessor::tc`] yields the id of its merge origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellId {
    row: usize,
    col: usize,
}

impl CellId {
    /// Physical row of the element
    pub fn row(&self) -> usize {
        self.row
    }

    /// Physical column of the element
    pub fn col(&self) -> usize {
        self.col
    }
}

/// Shared handle to a [`TableTree`]
///
/// Cloning the handle shares the tree. Ids are only meaningful for the tree
/// that produced them; the grid shape is fixed for the life of the handle.
#[derive(Debug, Clone)]
pub struct GridAccessor {
    tree: Rc<RefCell<TableTree>>,
}

impl GridAccessor {
    /// Take ownership of a tree after checking its shape
    pub fn new(tree: TableTree) -> Result<Self> {
        tree.validate()?;
        Ok(Self {
            tree: Rc::new(RefCell::new(tree)),
        })
    }

    /// True if both handles share the same tree
    pub fn same_tree(&self, other: &GridAccessor) -> bool {
        Rc::ptr_eq(&self.tree, &other.tree)
    }

    /// Borrow the whole tree for reading
    pub fn tree(&self) -> Ref<'_, TableTree> {
        self.tree.borrow()
    }

    /// Copy of the current tree
    pub fn snapshot(&self) -> TableTree {
        self.tree.borrow().clone()
    }

    // === Sequences ===

    /// Number of `<a:tr>` elements
    pub fn row_count(&self) -> usize {
        self.tree.borrow().row_count()
    }

    /// Number of `<a:gridCol>` elements
    pub fn column_count(&self) -> usize {
        self.tree.borrow().col_count()
    }

    /// Number of `<a:tc>` elements in a row
    pub fn row_cell_count(&self, row: RowId) -> usize {
        self.tree.borrow().rows[row.0].cells.len()
    }

    /// Row element at a physical index
    pub fn row(&self, idx: usize) -> Option<RowId> {
        (idx < self.row_count()).then_some(RowId(idx))
    }

    /// Grid column element at a physical index
    pub fn column(&self, idx: usize) -> Option<ColumnId> {
        (idx < self.column_count()).then_some(ColumnId(idx))
    }

    /// Cell element at a physical index within a row, ignoring merges
    pub fn row_cell(&self, row: RowId, idx: usize) -> Option<CellId> {
        (idx < self.row_cell_count(row)).then_some(CellId { row: row.0, col: idx })
    }

    /// Merge-aware lookup of the cell owning a logical coordinate
    pub fn tc(&self, row: usize, col: usize) -> Result<CellId> {
        let (row, col) = self.tree.borrow().resolve(row, col)?;
        Ok(CellId { row, col })
    }

    // === Table flags ===

    pub fn flag(&self, flag: TableFlag) -> bool {
        self.tree.borrow().properties.get(flag)
    }

    pub fn set_flag(&self, flag: TableFlag, value: bool) {
        log::trace!("tblPr {} = {value}", flag.as_xml());
        self.tree.borrow_mut().properties.set(flag, value);
    }

    // === Row and column extents ===

    pub fn row_height(&self, row: RowId) -> Length {
        self.tree.borrow().rows[row.0].height
    }

    pub fn set_row_height(&self, row: RowId, height: Length) {
        log::trace!("tr[{}] h = {height}", row.0);
        self.tree.borrow_mut().rows[row.0].height = height;
    }

    pub fn column_width(&self, column: ColumnId) -> Length {
        self.tree.borrow().grid[column.0].width
    }

    pub fn set_column_width(&self, column: ColumnId, width: Length) {
        log::trace!("gridCol[{}] w = {width}", column.0);
        self.tree.borrow_mut().grid[column.0].width = width;
    }

    // === Cell attributes ===

    /// Margin on one side; `None` when inherited
    pub fn margin(&self, cell: CellId, side: Side) -> Option<Length> {
        self.with_properties(cell, |pr| pr.and_then(|pr| pr.margin(side)))
    }

    /// Set or clear a margin, creating `<a:tcPr>` if needed
    pub fn set_margin(&self, cell: CellId, side: Side, value: Option<Length>) {
        log::trace!("tc({}, {}) {} = {value:?}", cell.row, cell.col, side.margin_attr());
        self.update_properties(cell, |pr| pr.set_margin(side, value));
    }

    /// Vertical anchor; `None` when inherited
    pub fn anchor(&self, cell: CellId) -> Option<VerticalAnchor> {
        self.with_properties(cell, |pr| pr.and_then(|pr| pr.anchor))
    }

    /// Set or clear the vertical anchor, creating `<a:tcPr>` if needed
    pub fn set_anchor(&self, cell: CellId, anchor: Option<VerticalAnchor>) {
        log::trace!("tc({}, {}) anchor = {anchor:?}", cell.row, cell.col);
        self.update_properties(cell, |pr| pr.anchor = anchor);
    }

    /// Explicit fill; `None` when inherited
    pub fn fill(&self, cell: CellId) -> Option<Fill> {
        self.with_properties(cell, |pr| pr.and_then(|pr| pr.fill.clone()))
    }

    /// Set or clear the fill, creating `<a:tcPr>` if needed
    pub fn set_fill(&self, cell: CellId, fill: Option<Fill>) {
        self.update_properties(cell, |pr| pr.fill = fill);
    }

    /// True if the cell is the top-left cell of a merged region
    pub fn is_merge_origin(&self, cell: CellId) -> bool {
        self.tree.borrow().rows[cell.row].cells[cell.col].is_merge_origin()
    }

    /// True if the cell is covered by a merge origin elsewhere
    pub fn is_spanned(&self, cell: CellId) -> bool {
        self.tree.borrow().rows[cell.row].cells[cell.col].is_spanned()
    }

    /// Region owned by a merge origin, or the single cell otherwise
    pub fn span(&self, cell: CellId) -> CellSpan {
        self.tree
            .borrow()
            .origin_span(cell.row, cell.col)
            .unwrap_or_else(|| CellSpan::from_origin(cell.row, cell.col, 1, 1))
    }

    // === Sub-nodes ===

    /// Ensure the cell has a `<a:tcPr>` element
    pub fn get_or_add_tc_pr(&self, cell: CellId) {
        self.update_properties(cell, |_| {});
    }

    /// Ensure the cell has a `<a:txBody>` element
    pub fn get_or_add_tx_body(&self, cell: CellId) {
        self.update_text_body(cell, |_| {});
    }

    /// Read the cell's text body, if present
    pub fn with_text_body<R>(&self, cell: CellId, f: impl FnOnce(Option<&TextBody>) -> R) -> R {
        let tree = self.tree.borrow();
        f(tree.rows[cell.row].cells[cell.col].text_body.as_ref())
    }

    /// Modify the cell's text body, creating it if absent
    pub fn update_text_body<R>(&self, cell: CellId, f: impl FnOnce(&mut TextBody) -> R) -> R {
        let mut tree = self.tree.borrow_mut();
        f(tree.rows[cell.row].cells[cell.col].text_body_or_insert())
    }

    fn with_properties<R>(
        &self,
        cell: CellId,
        f: impl FnOnce(Option<&CellProperties>) -> R,
    ) -> R {
        let tree = self.tree.borrow();
        f(tree.rows[cell.row].cells[cell.col].properties.as_ref())
    }

    fn update_properties<R>(&self, cell: CellId, f: impl FnOnce(&mut CellProperties) -> R) -> R {
        let mut tree = self.tree.borrow_mut();
        f(tree.rows[cell.row].cells[cell.col].properties_or_insert())
    }
}

impl TryFrom<TableTree> for GridAccessor {
    type Error = Error;

    fn try_from(tree: TableTree) -> Result<Self> {
        GridAccessor::new(tree)
    }
}
