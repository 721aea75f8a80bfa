//! Cell element (`<a:tc>`) and its properties (`<a:tcPr>`)

use crate::anchor::VerticalAnchor;
use crate::fill::Fill;
use crate::text::TextBody;
use crate::units::Length;

/// Inherited left/right margin when none is set (0.1 inch)
pub const DEFAULT_HORIZONTAL_MARGIN: Length = Length::emu(91_440);

/// Inherited top/bottom margin when none is set (0.05 inch)
pub const DEFAULT_VERTICAL_MARGIN: Length = Length::emu(45_720);

/// A table cell
///
/// Merged regions follow the PowerPoint layout: cells in the top row of the
/// region carry `row_span`, cells in the left column carry `grid_span`,
/// every cell right of the left column has `h_merge` and every cell below the
/// top row has `v_merge`. Only the top-left cell ends up with both spans and
/// neither merge flag.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableCell {
    /// Number of grid columns spanned (1 = no span)
    pub grid_span: u32,
    /// Number of rows spanned (1 = no span)
    pub row_span: u32,
    /// Covered by a merge origin to the left
    pub h_merge: bool,
    /// Covered by a merge origin above
    pub v_merge: bool,
    /// Style properties, created on first write
    pub properties: Option<CellProperties>,
    /// Text content, created on first write
    pub text_body: Option<TextBody>,
}

impl Default for TableCell {
    fn default() -> Self {
        Self {
            grid_span: 1,
            row_span: 1,
            h_merge: false,
            v_merge: false,
            properties: None,
            text_body: None,
        }
    }
}

impl TableCell {
    /// True if this cell is the top-left cell of a merged region
    pub fn is_merge_origin(&self) -> bool {
        (self.grid_span > 1 && !self.v_merge) || (self.row_span > 1 && !self.h_merge)
    }

    /// True if this cell is covered by a merge origin elsewhere
    pub fn is_spanned(&self) -> bool {
        self.h_merge || self.v_merge
    }

    /// Style properties, inserting empty ones if absent
    pub fn properties_or_insert(&mut self) -> &mut CellProperties {
        self.properties.get_or_insert_with(CellProperties::default)
    }

    /// Text body, inserting an empty one if absent
    pub fn text_body_or_insert(&mut self) -> &mut TextBody {
        self.text_body.get_or_insert_with(TextBody::default)
    }
}

/// Cell style properties
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellProperties {
    pub margin_left: Option<Length>,
    pub margin_right: Option<Length>,
    pub margin_top: Option<Length>,
    pub margin_bottom: Option<Length>,
    /// Vertical anchor (None = inherited)
    pub anchor: Option<VerticalAnchor>,
    /// Explicit fill (None = inherited)
    pub fill: Option<Fill>,
}

impl CellProperties {
    /// Margin on one side (None = inherited)
    pub fn margin(&self, side: Side) -> Option<Length> {
        match side {
            Side::Left => self.margin_left,
            Side::Right => self.margin_right,
            Side::Top => self.margin_top,
            Side::Bottom => self.margin_bottom,
        }
    }

    /// Set or clear the margin on one side
    pub fn set_margin(&mut self, side: Side, value: Option<Length>) {
        let slot = match side {
            Side::Left => &mut self.margin_left,
            Side::Right => &mut self.margin_right,
            Side::Top => &mut self.margin_top,
            Side::Bottom => &mut self.margin_bottom,
        };
        *slot = value;
    }

    /// Check if no property is set
    pub fn is_empty(&self) -> bool {
        Side::ALL.iter().all(|s| self.margin(*s).is_none())
            && self.anchor.is_none()
            && self.fill.is_none()
    }
}

/// One side of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Left, Side::Right, Side::Top, Side::Bottom];

    /// Margin used when none is set on the cell
    pub fn default_margin(&self) -> Length {
        match self {
            Side::Left | Side::Right => DEFAULT_HORIZONTAL_MARGIN,
            Side::Top | Side::Bottom => DEFAULT_VERTICAL_MARGIN,
        }
    }

    /// Margin attribute name on `<a:tcPr>`
    pub fn margin_attr(&self) -> &'static str {
        match self {
            Side::Left => "marL",
            Side::Right => "marR",
            Side::Top => "marT",
            Side::Bottom => "marB",
        }
    }
}
