//! Grid column element (`<a:gridCol>`)

use crate::units::Length;

/// A grid column definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridColumn {
    /// Column width (always explicit)
    pub width: Length,
}

impl GridColumn {
    /// Create a column definition
    pub fn new(width: Length) -> Self {
        Self { width }
    }
}
