//! Rectangular cell spans in grid coordinates

use std::fmt;

/// An inclusive rectangle of grid coordinates, used for merged regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellSpan {
    pub first_row: usize,
    pub first_col: usize,
    pub last_row: usize,
    pub last_col: usize,
}

impl CellSpan {
    /// Create a span from any two opposite corners
    pub fn new(a: (usize, usize), b: (usize, usize)) -> Self {
        Self {
            first_row: a.0.min(b.0),
            first_col: a.1.min(b.1),
            last_row: a.0.max(b.0),
            last_col: a.1.max(b.1),
        }
    }

    /// Create a span from its origin and extent
    pub fn from_origin(row: usize, col: usize, row_span: usize, col_span: usize) -> Self {
        Self {
            first_row: row,
            first_col: col,
            last_row: row + row_span.max(1) - 1,
            last_col: col + col_span.max(1) - 1,
        }
    }

    /// Top-left coordinate
    pub fn origin(&self) -> (usize, usize) {
        (self.first_row, self.first_col)
    }

    /// Number of rows covered
    pub fn row_count(&self) -> usize {
        self.last_row - self.first_row + 1
    }

    /// Number of columns covered
    pub fn col_count(&self) -> usize {
        self.last_col - self.first_col + 1
    }

    /// Total number of grid coordinates covered
    pub fn cell_count(&self) -> usize {
        self.row_count() * self.col_count()
    }

    /// Check if a coordinate is inside this span
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.first_row && row <= self.last_row && col >= self.first_col && col <= self.last_col
    }

    /// Check if this span overlaps with another
    pub fn overlaps(&self, other: &CellSpan) -> bool {
        self.first_row <= other.last_row
            && self.last_row >= other.first_row
            && self.first_col <= other.last_col
            && self.last_col >= other.first_col
    }

    /// Iterate over all coordinates in the span (row by row)
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (self.first_row..=self.last_row)
            .flat_map(move |row| (self.first_col..=self.last_col).map(move |col| (row, col)))
    }
}

impl fmt::Display for CellSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {})-({}, {})",
            self.first_row, self.first_col, self.last_row, self.last_col
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_corners() {
        let span = CellSpan::new((2, 0), (0, 3));
        assert_eq!(span.origin(), (0, 0));
        assert_eq!(span.row_count(), 3);
        assert_eq!(span.col_count(), 4);
        assert_eq!(span, CellSpan::from_origin(0, 0, 3, 4));
    }

    #[test]
    fn test_contains_and_overlaps() {
        let a = CellSpan::new((0, 0), (1, 1));
        assert!(a.contains(1, 1));
        assert!(!a.contains(2, 1));
        assert!(a.overlaps(&CellSpan::new((1, 1), (2, 2))));
        assert!(!a.overlaps(&CellSpan::new((2, 0), (2, 1))));
    }

    #[test]
    fn test_cells_row_major() {
        let span = CellSpan::new((1, 1), (2, 2));
        let cells: Vec<_> = span.cells().collect();
        assert_eq!(cells, vec![(1, 1), (1, 2), (2, 1), (2, 2)]);
        assert_eq!(span.cell_count(), 4);
        assert_eq!(span.to_string(), "(1, 1)-(2, 2)");
    }
}
