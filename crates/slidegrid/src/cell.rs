//! Cell proxy

use std::fmt;

use slidegrid_oxml::{CellId, GridAccessor, Length, Side, VerticalAnchor};

use crate::error::{Error, Result};
use crate::fill::FillFormat;
use crate::text::TextFrame;

/// Value assigned to a cell margin
///
/// Only whole-EMU lengths and "unset" are accepted; anything else is carried
/// through to the setter so it can be rejected with the offending value.
#[derive(Debug, Clone, PartialEq)]
pub enum MarginValue {
    /// Explicit margin
    Length(Length),
    /// Remove the attribute and inherit the default
    Unset,
    /// Rejected value, kept as text for the error message
    Invalid(String),
}

impl MarginValue {
    fn into_length(self) -> Result<Option<Length>> {
        match self {
            Self::Length(length) => Ok(Some(length)),
            Self::Unset => Ok(None),
            Self::Invalid(value) => Err(Error::InvalidMarginType(value)),
        }
    }
}

impl From<Length> for MarginValue {
    fn from(value: Length) -> Self {
        Self::Length(value)
    }
}

impl From<Option<Length>> for MarginValue {
    fn from(value: Option<Length>) -> Self {
        value.map_or(Self::Unset, Self::Length)
    }
}

impl From<i64> for MarginValue {
    fn from(value: i64) -> Self {
        Self::Length(Length::emu(value))
    }
}

impl From<i32> for MarginValue {
    fn from(value: i32) -> Self {
        Self::Length(Length::from(value))
    }
}

impl From<u32> for MarginValue {
    fn from(value: u32) -> Self {
        Self::Length(Length::from(value))
    }
}

/// Floats are never integer lengths, even when the fraction is zero
impl From<f64> for MarginValue {
    fn from(value: f64) -> Self {
        Self::Invalid(value.to_string())
    }
}

impl From<f32> for MarginValue {
    fn from(value: f32) -> Self {
        Self::Invalid(value.to_string())
    }
}

impl From<&str> for MarginValue {
    fn from(value: &str) -> Self {
        Self::Invalid(value.to_string())
    }
}

/// A cell of a table
///
/// Obtained from [`Table::cell`](crate::Table::cell) or a row's
/// [`CellCollection`](crate::CellCollection). Two cells compare equal when
/// they wrap the same `<a:tc>` element of the same table, so every coordinate
/// of a merged region yields the same cell.
#[derive(Clone)]
pub struct Cell {
    grid: GridAccessor,
    tc: CellId,
}

impl Cell {
    pub(crate) fn new(grid: GridAccessor, tc: CellId) -> Self {
        Self { grid, tc }
    }

    /// Physical (row, column) of the wrapped element
    pub fn position(&self) -> (usize, usize) {
        (self.tc.row(), self.tc.col())
    }

    // === Margins ===

    /// Explicit left margin, `None` when inherited
    pub fn margin_left(&self) -> Option<Length> {
        self.margin(Side::Left)
    }

    pub fn set_margin_left(&self, value: impl Into<MarginValue>) -> Result<()> {
        self.set_margin(Side::Left, value)
    }

    /// Explicit right margin, `None` when inherited
    pub fn margin_right(&self) -> Option<Length> {
        self.margin(Side::Right)
    }

    pub fn set_margin_right(&self, value: impl Into<MarginValue>) -> Result<()> {
        self.set_margin(Side::Right, value)
    }

    /// Explicit top margin, `None` when inherited
    pub fn margin_top(&self) -> Option<Length> {
        self.margin(Side::Top)
    }

    pub fn set_margin_top(&self, value: impl Into<MarginValue>) -> Result<()> {
        self.set_margin(Side::Top, value)
    }

    /// Explicit bottom margin, `None` when inherited
    pub fn margin_bottom(&self) -> Option<Length> {
        self.margin(Side::Bottom)
    }

    pub fn set_margin_bottom(&self, value: impl Into<MarginValue>) -> Result<()> {
        self.set_margin(Side::Bottom, value)
    }

    /// Explicit margin on one side
    pub fn margin(&self, side: Side) -> Option<Length> {
        self.grid.margin(self.tc, side)
    }

    /// Set or clear the margin on one side
    ///
    /// Zero and negative lengths are accepted. The tree is untouched when the
    /// value is rejected.
    pub fn set_margin(&self, side: Side, value: impl Into<MarginValue>) -> Result<()> {
        let value = value.into().into_length()?;
        self.grid.set_margin(self.tc, side, value);
        Ok(())
    }

    /// Margin in effect on one side, falling back to the DrawingML default
    pub fn effective_margin(&self, side: Side) -> Length {
        self.margin(side).unwrap_or_else(|| side.default_margin())
    }

    pub fn effective_margin_left(&self) -> Length {
        self.effective_margin(Side::Left)
    }

    pub fn effective_margin_right(&self) -> Length {
        self.effective_margin(Side::Right)
    }

    pub fn effective_margin_top(&self) -> Length {
        self.effective_margin(Side::Top)
    }

    pub fn effective_margin_bottom(&self) -> Length {
        self.effective_margin(Side::Bottom)
    }

    // === Layout ===

    /// Vertical alignment of the cell's text, `None` when inherited
    pub fn vertical_anchor(&self) -> Option<VerticalAnchor> {
        self.grid.anchor(self.tc)
    }

    pub fn set_vertical_anchor(&self, anchor: Option<VerticalAnchor>) {
        self.grid.set_anchor(self.tc, anchor);
    }

    /// True if this cell is the top-left cell of a merged region
    pub fn is_merge_origin(&self) -> bool {
        self.grid.is_merge_origin(self.tc)
    }

    /// True if this cell is covered by a merge origin elsewhere
    pub fn is_spanned(&self) -> bool {
        self.grid.is_spanned(self.tc)
    }

    /// Rows covered by this cell
    pub fn span_height(&self) -> usize {
        self.grid.span(self.tc).row_count()
    }

    /// Columns covered by this cell
    pub fn span_width(&self) -> usize {
        self.grid.span(self.tc).col_count()
    }

    // === Content ===

    /// Fill of the cell, adding a `<a:tcPr>` if the cell has none
    pub fn fill(&self) -> FillFormat {
        self.grid.get_or_add_tc_pr(self.tc);
        FillFormat::new(self.grid.clone(), self.tc)
    }

    /// Text frame of the cell, adding a `<a:txBody>` if the cell has none
    pub fn text_frame(&self) -> TextFrame {
        self.grid.get_or_add_tx_body(self.tc);
        TextFrame::new(self.grid.clone(), self.tc)
    }

    /// Replace all text in the cell with a single run
    pub fn set_text(&self, text: &str) {
        self.text_frame().set_text(text);
    }

    /// Replace all text with UTF-8 bytes, rejecting invalid input
    pub fn set_text_utf8(&self, bytes: &[u8]) -> Result<()> {
        let text = std::str::from_utf8(bytes)?;
        self.set_text(text);
        Ok(())
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.grid.same_tree(&other.grid) && self.tc == other.tc
    }
}

impl Eq for Cell {}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cell")
            .field("row", &self.tc.row())
            .field("col", &self.tc.col())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Extents;
    use crate::Table;
    use pretty_assertions::assert_eq;
    use slidegrid_oxml::TableTree;

    fn table() -> Table {
        let tree = TableTree::new(2, 2, Length::emu(200), Length::emu(20)).unwrap();
        Table::from_tree(tree, Extents::default()).unwrap()
    }

    #[test]
    fn test_margin_accepts_integer_lengths() {
        let table = table();
        let cell = table.cell(0, 0).unwrap();
        assert_eq!(cell.margin_left(), None);

        cell.set_margin_left(Length::emu(12345)).unwrap();
        cell.set_margin_right(0).unwrap();
        cell.set_margin_top(-5i64).unwrap();
        assert_eq!(cell.margin_left(), Some(Length::emu(12345)));
        assert_eq!(cell.margin_right(), Some(Length::ZERO));
        assert_eq!(cell.margin_top(), Some(Length::emu(-5)));

        cell.set_margin_left(None).unwrap();
        assert_eq!(cell.margin_left(), None);
    }

    #[test]
    fn test_margin_rejects_float() {
        let table = table();
        let cell = table.cell(0, 1).unwrap();
        cell.set_margin_bottom(Length::emu(7)).unwrap();

        let err = cell.set_margin_bottom(3.5).unwrap_err();
        assert!(matches!(err, Error::InvalidMarginType(ref v) if v == "3.5"));
        assert_eq!(
            err.to_string(),
            "margin value must be an integer length or unset, got '3.5'"
        );
        assert!(cell.set_margin_bottom(2.0).is_err());
        assert!(cell.set_margin_bottom("wide").is_err());
        assert_eq!(cell.margin_bottom(), Some(Length::emu(7)));
    }

    #[test]
    fn test_effective_margin_falls_back() {
        let table = table();
        let cell = table.cell(1, 1).unwrap();
        assert_eq!(cell.effective_margin(Side::Left), Length::emu(91440));
        assert_eq!(cell.effective_margin_bottom(), Length::emu(45720));
        cell.set_margin_top(Length::ZERO).unwrap();
        assert_eq!(cell.effective_margin_top(), Length::ZERO);
        assert_eq!(cell.effective_margin_right(), Length::emu(91440));
    }

    #[test]
    fn test_vertical_anchor() {
        let table = table();
        let cell = table.cell(0, 0).unwrap();
        assert_eq!(cell.vertical_anchor(), None);
        cell.set_vertical_anchor(Some(VerticalAnchor::Middle));
        assert_eq!(cell.vertical_anchor(), Some(VerticalAnchor::Middle));
        cell.set_vertical_anchor(None);
        assert_eq!(cell.vertical_anchor(), None);
    }

    #[test]
    fn test_set_text_utf8() {
        let table = table();
        let cell = table.cell(1, 0).unwrap();
        cell.set_text_utf8("caf\u{e9}".as_bytes()).unwrap();
        assert_eq!(cell.text_frame().text(), "caf\u{e9}");

        let err = cell.set_text_utf8(&[0x66, 0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, Error::InvalidText(_)));
        assert_eq!(cell.text_frame().text(), "caf\u{e9}");
    }

    #[test]
    fn test_equality_is_per_table() {
        let a = table();
        let b = table();
        assert_eq!(a.cell(0, 0).unwrap(), a.cell(0, 0).unwrap());
        assert_ne!(a.cell(0, 0).unwrap(), a.cell(0, 1).unwrap());
        assert_ne!(a.cell(0, 0).unwrap(), b.cell(0, 0).unwrap());
    }
}
