//! Cell fill

use slidegrid_oxml::{CellId, Color, Fill, FillType, GradientStop, GridAccessor, PatternType};

use crate::error::{Error, Result};

/// Fill of one cell
///
/// Reads and writes the fill stored on the cell's `<a:tcPr>`.
pub struct FillFormat {
    grid: GridAccessor,
    tc: CellId,
}

impl FillFormat {
    pub(crate) fn new(grid: GridAccessor, tc: CellId) -> Self {
        Self { grid, tc }
    }

    /// Current fill, `None` when inherited from the table style
    pub fn get(&self) -> Option<Fill> {
        self.grid.fill(self.tc)
    }

    /// Kind of the current fill, `None` when inherited
    pub fn fill_type(&self) -> Option<FillType> {
        self.get().map(|fill| fill.fill_type())
    }

    /// Make the cell transparent
    pub fn background(&self) {
        self.grid.set_fill(self.tc, Some(Fill::NoFill));
    }

    /// Fill the cell with a single color
    pub fn solid(&self, color: Color) {
        self.grid.set_fill(self.tc, Some(Fill::solid(color)));
    }

    /// Fill the cell with a preset pattern
    pub fn patterned(&self, pattern: PatternType, foreground: Color, background: Color) {
        self.grid
            .set_fill(self.tc, Some(Fill::pattern(pattern, foreground, background)));
    }

    /// Fill the cell with a linear gradient
    pub fn gradient(&self, angle: f64, stops: Vec<GradientStop>) {
        self.grid
            .set_fill(self.tc, Some(Fill::linear_gradient(angle, stops)));
    }

    /// Drop the explicit fill so the table style applies again
    pub fn clear(&self) {
        self.grid.set_fill(self.tc, None);
    }

    /// Color of a solid fill, or the foreground of a pattern
    pub fn fore_color(&self) -> Result<Color> {
        match self.get() {
            Some(Fill::Solid { color }) => Ok(color),
            Some(Fill::Pattern { foreground, .. }) => Ok(foreground),
            other => Err(mismatch(other.as_ref(), "foreground color")),
        }
    }

    /// Change the foreground color, keeping the fill type
    pub fn set_fore_color(&self, color: Color) -> Result<()> {
        let fill = match self.get() {
            Some(Fill::Solid { .. }) => Fill::solid(color),
            Some(Fill::Pattern {
                pattern,
                background,
                ..
            }) => Fill::pattern(pattern, color, background),
            other => return Err(mismatch(other.as_ref(), "foreground color")),
        };
        self.grid.set_fill(self.tc, Some(fill));
        Ok(())
    }

    /// Background color of a pattern fill
    pub fn back_color(&self) -> Result<Color> {
        match self.get() {
            Some(Fill::Pattern { background, .. }) => Ok(background),
            other => Err(mismatch(other.as_ref(), "background color")),
        }
    }
}

fn mismatch(fill: Option<&Fill>, what: &str) -> Error {
    let kind = match fill.map(Fill::fill_type) {
        None => "inherited".to_string(),
        Some(kind) => format!("{kind:?}").to_lowercase(),
    };
    Error::FillTypeMismatch(format!(
        "{kind} fill has no {what}, call solid() or patterned() first"
    ))
}
