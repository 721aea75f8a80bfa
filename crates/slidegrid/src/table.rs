//! The table facade

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use once_cell::unsync::OnceCell;
use slidegrid_oxml::{GridAccessor, Length, TableFlag, TableOptions, TableTree};

use crate::cell::Cell;
use crate::collections::{ColumnCollection, RowCollection};
use crate::error::Result;
use crate::frame::GraphicFrame;
use crate::notify::{HeightObserver, WidthObserver};

/// A table embedded in a slide
///
/// Wraps a shared table tree and the graphic frame that owns it. Row and
/// column collections are created on first access and live as long as the
/// table; every size change made through them is pushed back to the frame.
///
/// ```rust
/// use slidegrid::prelude::*;
///
/// let table = Table::with_size(2, 3, Extents::default()).unwrap();
/// table.rows().get(0).unwrap().set_height(Length::emu(100));
/// table.rows().get(1).unwrap().set_height(Length::emu(200));
/// assert_eq!(table.aggregate_height(), Length::emu(300));
/// ```
pub struct Table {
    state: Rc<TableState>,
}

struct TableState {
    grid: GridAccessor,
    frame: RefCell<Box<dyn GraphicFrame>>,
    rows: OnceCell<RowCollection>,
    columns: OnceCell<ColumnCollection>,
}

impl Table {
    /// Wrap an existing grid and the frame that contains it
    pub fn new(grid: GridAccessor, frame: impl GraphicFrame + 'static) -> Self {
        let frame: Box<dyn GraphicFrame> = Box::new(frame);
        Self {
            state: Rc::new(TableState {
                grid,
                frame: RefCell::new(frame),
                rows: OnceCell::new(),
                columns: OnceCell::new(),
            }),
        }
    }

    /// Take ownership of a table tree
    pub fn from_tree(tree: TableTree, frame: impl GraphicFrame + 'static) -> Result<Self> {
        Ok(Self::new(GridAccessor::new(tree)?, frame))
    }

    /// Build a fresh table sized to the frame's current extents
    pub fn with_size(rows: usize, cols: usize, frame: impl GraphicFrame + 'static) -> Result<Self> {
        let options = TableOptions::default()
            .with_width(frame.width())
            .with_height(frame.height());
        Self::with_options(rows, cols, &options, frame)
    }

    /// Build a fresh table from explicit options
    pub fn with_options(
        rows: usize,
        cols: usize,
        options: &TableOptions,
        frame: impl GraphicFrame + 'static,
    ) -> Result<Self> {
        Self::from_tree(TableTree::with_options(rows, cols, options)?, frame)
    }

    /// The cell at a logical coordinate
    ///
    /// A coordinate covered by a merge resolves to the merge origin, so every
    /// coordinate in a merged region yields an equal `Cell`.
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell> {
        let tc = self.state.grid.tc(row, col)?;
        Ok(Cell::new(self.state.grid.clone(), tc))
    }

    /// The table's rows
    pub fn rows(&self) -> &RowCollection {
        self.state
            .rows
            .get_or_init(|| RowCollection::new(self.state.grid.clone(), self.height_observer()))
    }

    /// The table's grid columns
    pub fn columns(&self) -> &ColumnCollection {
        self.state
            .columns
            .get_or_init(|| ColumnCollection::new(self.state.grid.clone(), self.width_observer()))
    }

    /// Height currently recorded on the graphic frame
    pub fn aggregate_height(&self) -> Length {
        self.state.frame.borrow().height()
    }

    /// Width currently recorded on the graphic frame
    pub fn aggregate_width(&self) -> Length {
        self.state.frame.borrow().width()
    }

    /// Handle to the underlying tree
    pub fn accessor(&self) -> &GridAccessor {
        &self.state.grid
    }

    // === Style flags ===

    /// Whether the first row gets header styling
    pub fn first_row(&self) -> bool {
        self.state.grid.flag(TableFlag::FirstRow)
    }

    pub fn set_first_row(&self, value: bool) {
        self.state.grid.set_flag(TableFlag::FirstRow, value);
    }

    /// Whether the first column gets distinct styling
    pub fn first_col(&self) -> bool {
        self.state.grid.flag(TableFlag::FirstCol)
    }

    pub fn set_first_col(&self, value: bool) {
        self.state.grid.set_flag(TableFlag::FirstCol, value);
    }

    /// Whether the last row gets distinct styling
    pub fn last_row(&self) -> bool {
        self.state.grid.flag(TableFlag::LastRow)
    }

    pub fn set_last_row(&self, value: bool) {
        self.state.grid.set_flag(TableFlag::LastRow, value);
    }

    /// Whether the last column gets distinct styling
    pub fn last_col(&self) -> bool {
        self.state.grid.flag(TableFlag::LastCol)
    }

    pub fn set_last_col(&self, value: bool) {
        self.state.grid.set_flag(TableFlag::LastCol, value);
    }

    /// Whether alternate rows get shaded
    pub fn horz_banding(&self) -> bool {
        self.state.grid.flag(TableFlag::BandRow)
    }

    pub fn set_horz_banding(&self, value: bool) {
        self.state.grid.set_flag(TableFlag::BandRow, value);
    }

    /// Whether alternate columns get shaded
    pub fn vert_banding(&self) -> bool {
        self.state.grid.flag(TableFlag::BandCol)
    }

    pub fn set_vert_banding(&self, value: bool) {
        self.state.grid.set_flag(TableFlag::BandCol, value);
    }

    fn height_observer(&self) -> Weak<dyn HeightObserver> {
        let weak: Weak<TableState> = Rc::downgrade(&self.state);
        weak
    }

    fn width_observer(&self) -> Weak<dyn WidthObserver> {
        let weak: Weak<TableState> = Rc::downgrade(&self.state);
        weak
    }
}

impl HeightObserver for Table {
    /// Set the frame height to the sum of all row heights
    fn notify_height_changed(&self) {
        self.state.notify_height_changed();
    }
}

impl WidthObserver for Table {
    /// Set the frame width to the sum of all column widths
    fn notify_width_changed(&self) {
        self.state.notify_width_changed();
    }
}

impl HeightObserver for TableState {
    fn notify_height_changed(&self) {
        let height: Length = (0..self.grid.row_count())
            .filter_map(|idx| self.grid.row(idx))
            .map(|row| self.grid.row_height(row))
            .sum();
        log::debug!("table height recomputed: {height}");
        self.frame.borrow_mut().set_height(height);
    }
}

impl WidthObserver for TableState {
    fn notify_width_changed(&self) {
        let width: Length = (0..self.grid.column_count())
            .filter_map(|idx| self.grid.column(idx))
            .map(|col| self.grid.column_width(col))
            .sum();
        log::debug!("table width recomputed: {width}");
        self.frame.borrow_mut().set_width(width);
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("rows", &self.state.grid.row_count())
            .field("columns", &self.state.grid.column_count())
            .field("width", &self.aggregate_width())
            .field("height", &self.aggregate_height())
            .finish()
    }
}
