//! Table element (`<a:tbl>`)

use crate::cell::TableCell;
use crate::column::GridColumn;
use crate::error::{Error, Result};
use crate::options::TableOptions;
use crate::row::TableRow;
use crate::span::CellSpan;
use crate::units::{Length, MAX_EXTENT};

/// Boolean style hints on `<a:tblPr>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableProperties {
    pub first_row: bool,
    pub first_col: bool,
    pub last_row: bool,
    pub last_col: bool,
    pub band_row: bool,
    pub band_col: bool,
}

impl TableProperties {
    /// Flags of a freshly inserted presentation table (header row, banded rows)
    pub fn presentation_default() -> Self {
        Self {
            first_row: true,
            band_row: true,
            ..Default::default()
        }
    }

    /// Read one flag
    pub fn get(&self, flag: TableFlag) -> bool {
        match flag {
            TableFlag::FirstRow => self.first_row,
            TableFlag::FirstCol => self.first_col,
            TableFlag::LastRow => self.last_row,
            TableFlag::LastCol => self.last_col,
            TableFlag::BandRow => self.band_row,
            TableFlag::BandCol => self.band_col,
        }
    }

    /// Write one flag
    pub fn set(&mut self, flag: TableFlag, value: bool) {
        let slot = match flag {
            TableFlag::FirstRow => &mut self.first_row,
            TableFlag::FirstCol => &mut self.first_col,
            TableFlag::LastRow => &mut self.last_row,
            TableFlag::LastCol => &mut self.last_col,
            TableFlag::BandRow => &mut self.band_row,
            TableFlag::BandCol => &mut self.band_col,
        };
        *slot = value;
    }
}

/// Identifies one of the [`TableProperties`] flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableFlag {
    FirstRow,
    FirstCol,
    LastRow,
    LastCol,
    BandRow,
    BandCol,
}

impl TableFlag {
    pub const ALL: [TableFlag; 6] = [
        TableFlag::FirstRow,
        TableFlag::FirstCol,
        TableFlag::LastRow,
        TableFlag::LastCol,
        TableFlag::BandRow,
        TableFlag::BandCol,
    ];

    /// Attribute name on `<a:tblPr>`
    pub fn as_xml(&self) -> &'static str {
        match self {
            TableFlag::FirstRow => "firstRow",
            TableFlag::FirstCol => "firstCol",
            TableFlag::LastRow => "lastRow",
            TableFlag::LastCol => "lastCol",
            TableFlag::BandRow => "bandRow",
            TableFlag::BandCol => "bandCol",
        }
    }

    /// Look up a flag by attribute name
    pub fn from_xml(name: &str) -> Option<Self> {
        TableFlag::ALL.into_iter().find(|f| f.as_xml() == name)
    }
}

/// The table tree: flags, grid columns and rows of cells
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableTree {
    pub properties: TableProperties,
    pub grid: Vec<GridColumn>,
    pub rows: Vec<TableRow>,
}

impl TableTree {
    /// Create a `rows` x `cols` table filling `width` x `height`
    ///
    /// Each column gets `width / cols` and each row `height / rows`; any
    /// remainder of the integer division is dropped.
    pub fn new(rows: usize, cols: usize, width: Length, height: Length) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::EmptyGrid { rows, cols });
        }

        let col_width = Length::emu(width.as_emu() / cols as i64);
        let row_height = Length::emu(height.as_emu() / rows as i64);

        Ok(Self {
            properties: TableProperties::presentation_default(),
            grid: vec![GridColumn::new(col_width); cols],
            rows: (0..rows).map(|_| TableRow::new(row_height, cols)).collect(),
        })
    }

    /// Create a table from [`TableOptions`]
    pub fn with_options(rows: usize, cols: usize, options: &TableOptions) -> Result<Self> {
        let mut tree = Self::new(rows, cols, options.width, options.height)?;
        tree.properties = options.properties;
        Ok(tree)
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of grid columns
    pub fn col_count(&self) -> usize {
        self.grid.len()
    }

    /// Physical cell at a position, ignoring merges
    pub fn cell(&self, row: usize, col: usize) -> Option<&TableCell> {
        self.rows.get(row).and_then(|r| r.cells.get(col))
    }

    /// Mutable physical cell at a position, ignoring merges
    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut TableCell> {
        self.rows.get_mut(row).and_then(|r| r.cells.get_mut(col))
    }

    /// Sum of all column widths
    pub fn total_width(&self) -> Length {
        self.grid.iter().map(|c| c.width).sum()
    }

    /// Sum of all row heights
    pub fn total_height(&self) -> Length {
        self.rows.iter().map(|r| r.height).sum()
    }

    /// Resolve a logical coordinate to the physical cell that owns it
    ///
    /// Coordinates covered by a merged region resolve to the region's origin.
    pub fn resolve(&self, row: usize, col: usize) -> Result<(usize, usize)> {
        let tc = self.cell(row, col).ok_or(Error::CellOutOfRange {
            row,
            col,
            rows: self.row_count(),
            cols: self.col_count(),
        })?;
        if !tc.is_spanned() {
            return Ok((row, col));
        }

        // walk left over h_merge cells, then up over v_merge cells
        let (mut r, mut c) = (row, col);
        loop {
            let Some(tc) = self.cell(r, c) else { break };
            if tc.h_merge && c > 0 {
                c -= 1;
            } else if tc.v_merge && r > 0 {
                r -= 1;
            } else {
                break;
            }
        }

        match self.origin_span(r, c) {
            Some(span) if span.contains(row, col) => Ok((r, c)),
            _ => {
                log::warn!("cell ({row}, {col}) is marked merged but has no covering origin");
                Ok((row, col))
            }
        }
    }

    /// Span of the merged region whose origin is at `(row, col)`
    pub fn origin_span(&self, row: usize, col: usize) -> Option<CellSpan> {
        let tc = self.cell(row, col)?;
        tc.is_merge_origin().then(|| {
            CellSpan::from_origin(row, col, tc.row_span as usize, tc.grid_span as usize)
        })
    }

    /// All merged regions, in row-major order of their origins
    pub fn merged_regions(&self) -> Vec<CellSpan> {
        let mut spans = Vec::new();
        for (r, row) in self.rows.iter().enumerate() {
            for (c, tc) in row.cells.iter().enumerate() {
                if tc.is_merge_origin() {
                    spans.push(CellSpan::from_origin(
                        r,
                        c,
                        tc.row_span as usize,
                        tc.grid_span as usize,
                    ));
                }
            }
        }
        spans
    }

    /// Merge the rectangle between two opposite corners into one cell
    pub fn merge(&mut self, a: (usize, usize), b: (usize, usize)) -> Result<CellSpan> {
        let span = CellSpan::new(a, b);
        if span.last_row >= self.row_count() || span.last_col >= self.col_count() {
            return Err(Error::InvalidSpan(format!(
                "{span} exceeds a {}x{} table",
                self.row_count(),
                self.col_count()
            )));
        }
        if span.cell_count() < 2 {
            return Err(Error::InvalidSpan(format!("{span} is a single cell")));
        }
        let conflict = self.merged_regions().iter().any(|s| s.overlaps(&span))
            || span
                .cells()
                .any(|(r, c)| self.cell(r, c).map_or(false, TableCell::is_spanned));
        if conflict {
            return Err(Error::MergeConflict(span.to_string()));
        }

        let height = span.row_count() as u32;
        let width = span.col_count() as u32;
        for (r, c) in span.cells() {
            if let Some(tc) = self.cell_mut(r, c) {
                if r == span.first_row {
                    tc.row_span = height;
                }
                if c == span.first_col {
                    tc.grid_span = width;
                }
                tc.h_merge = c > span.first_col;
                tc.v_merge = r > span.first_row;
            }
        }

        log::debug!("merged {span}");
        Ok(span)
    }

    /// Check the shape of a tree that came from outside (XML, JSON)
    pub fn validate(&self) -> Result<()> {
        let cols = self.col_count();
        if self.rows.is_empty() || cols == 0 {
            return Err(Error::EmptyGrid {
                rows: self.row_count(),
                cols,
            });
        }
        for column in &self.grid {
            check_extent("w", column.width)?;
        }
        for (r, row) in self.rows.iter().enumerate() {
            check_extent("h", row.height)?;
            if row.cells.len() != cols {
                return Err(Error::Malformed(format!(
                    "row {r} has {} cells, grid has {cols} columns",
                    row.cells.len()
                )));
            }
            for (c, tc) in row.cells.iter().enumerate() {
                if tc.grid_span == 0 || tc.row_span == 0 {
                    return Err(Error::Malformed(format!("cell ({r}, {c}) has a zero span")));
                }
            }
        }
        for span in self.merged_regions() {
            if span.last_row >= self.row_count() || span.last_col >= cols {
                return Err(Error::Malformed(format!("merged region {span} runs off the grid")));
            }
        }
        Ok(())
    }
}

fn check_extent(name: &'static str, value: Length) -> Result<()> {
    if value.is_valid_extent() {
        Ok(())
    } else {
        Err(Error::InvalidAttribute {
            name,
            value: format!("{} is outside 0..={}", value.as_emu(), MAX_EXTENT.as_emu()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tree(rows: usize, cols: usize) -> TableTree {
        TableTree::new(rows, cols, Length::emu(600), Length::emu(300)).unwrap()
    }

    #[test]
    fn test_new_divides_extents() {
        let t = TableTree::new(2, 3, Length::emu(1000), Length::emu(301)).unwrap();
        assert_eq!(t.row_count(), 2);
        assert_eq!(t.col_count(), 3);
        assert_eq!(t.grid[0].width, Length::emu(333));
        assert_eq!(t.rows[1].height, Length::emu(150));
        assert!(t.properties.first_row);
        assert!(t.properties.band_row);
        assert!(!t.properties.last_col);
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(matches!(
            TableTree::new(0, 3, Length::ZERO, Length::ZERO),
            Err(Error::EmptyGrid { rows: 0, cols: 3 })
        ));
    }

    #[test]
    fn test_flags() {
        let mut props = TableProperties::default();
        for flag in TableFlag::ALL {
            assert!(!props.get(flag));
            props.set(flag, true);
            assert!(props.get(flag));
            assert_eq!(TableFlag::from_xml(flag.as_xml()), Some(flag));
        }
    }

    #[test]
    fn test_merge_marks_cells() {
        let mut t = tree(3, 3);
        t.merge((1, 2), (0, 1)).unwrap();

        let origin = t.cell(0, 1).unwrap();
        assert_eq!((origin.row_span, origin.grid_span), (2, 2));
        assert!(origin.is_merge_origin());

        let top_right = t.cell(0, 2).unwrap();
        assert!(top_right.h_merge && !top_right.v_merge);
        let bottom_left = t.cell(1, 1).unwrap();
        assert!(bottom_left.v_merge && !bottom_left.h_merge);
        let bottom_right = t.cell(1, 2).unwrap();
        assert!(bottom_right.h_merge && bottom_right.v_merge);

        assert_eq!(t.merged_regions(), vec![CellSpan::new((0, 1), (1, 2))]);
    }

    #[test]
    fn test_resolve_covered_cells() {
        let mut t = tree(3, 3);
        t.merge((0, 0), (1, 1)).unwrap();
        t.merge((2, 0), (2, 2)).unwrap();

        assert_eq!(t.resolve(0, 0).unwrap(), (0, 0));
        assert_eq!(t.resolve(0, 1).unwrap(), (0, 0));
        assert_eq!(t.resolve(1, 0).unwrap(), (0, 0));
        assert_eq!(t.resolve(1, 1).unwrap(), (0, 0));
        assert_eq!(t.resolve(2, 2).unwrap(), (2, 0));
        assert_eq!(t.resolve(0, 2).unwrap(), (0, 2));
        assert_eq!(t.resolve(1, 2).unwrap(), (1, 2));
    }

    #[test]
    fn test_resolve_out_of_range() {
        let t = tree(2, 2);
        assert!(matches!(
            t.resolve(2, 0),
            Err(Error::CellOutOfRange { row: 2, col: 0, .. })
        ));
        assert!(t.resolve(0, 5).is_err());
    }

    #[test]
    fn test_merge_rejections() {
        let mut t = tree(3, 3);
        assert!(matches!(t.merge((1, 1), (1, 1)), Err(Error::InvalidSpan(_))));
        assert!(matches!(t.merge((0, 0), (3, 0)), Err(Error::InvalidSpan(_))));

        t.merge((0, 0), (1, 1)).unwrap();
        assert!(matches!(t.merge((1, 1), (2, 2)), Err(Error::MergeConflict(_))));
        assert!(matches!(t.merge((0, 1), (0, 2)), Err(Error::MergeConflict(_))));
        assert!(t.merge((2, 0), (2, 2)).is_ok());
        assert!(t.merge((0, 2), (1, 2)).is_ok());
    }

    #[test]
    fn test_validate() {
        let mut t = tree(2, 2);
        assert!(t.validate().is_ok());

        t.rows[1].cells.pop();
        assert!(matches!(t.validate(), Err(Error::Malformed(_))));

        let mut t = tree(2, 2);
        t.rows[0].cells[1].grid_span = 3;
        assert!(matches!(t.validate(), Err(Error::Malformed(_))));
    }

    #[test]
    fn test_validate_rejects_out_of_range_extents() {
        let mut t = tree(2, 2);
        t.rows[1].height = Length::emu(i64::MAX);
        assert!(matches!(
            t.validate(),
            Err(Error::InvalidAttribute { name: "h", .. })
        ));

        let mut t = tree(2, 2);
        t.grid[0].width = Length::emu(-1);
        assert!(matches!(
            t.validate(),
            Err(Error::InvalidAttribute { name: "w", .. })
        ));

        let mut t = tree(2, 2);
        t.rows[0].height = MAX_EXTENT;
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_totals() {
        let mut t = tree(2, 3);
        t.rows[0].height = Length::emu(100);
        t.grid[2].width = Length::emu(1);
        assert_eq!(t.total_height(), Length::emu(250));
        assert_eq!(t.total_width(), Length::emu(401));
    }
}
