//! Fill types for cell backgrounds

use crate::color::Color;

/// Explicit fill of a table cell
///
/// A cell without a fill (`None` in [`CellProperties`](crate::CellProperties))
/// inherits its background from the table style. [`Fill::NoFill`] is an
/// explicit transparent background.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Fill {
    /// Transparent (`<a:noFill/>`)
    NoFill,

    /// Solid color fill
    Solid { color: Color },

    /// Preset pattern fill
    Pattern {
        pattern: PatternType,
        foreground: Color,
        background: Color,
    },

    /// Linear gradient fill
    Gradient {
        /// Angle in degrees, clockwise from horizontal
        angle: f64,
        stops: Vec<GradientStop>,
    },
}

impl Fill {
    /// Create a solid fill with the given color
    pub fn solid(color: Color) -> Self {
        Fill::Solid { color }
    }

    /// Create a pattern fill
    pub fn pattern(pattern: PatternType, foreground: Color, background: Color) -> Self {
        Fill::Pattern {
            pattern,
            foreground,
            background,
        }
    }

    /// Create a linear gradient fill
    pub fn linear_gradient(angle: f64, stops: Vec<GradientStop>) -> Self {
        Fill::Gradient { angle, stops }
    }

    /// Kind of this fill
    pub fn fill_type(&self) -> FillType {
        match self {
            Fill::NoFill => FillType::Background,
            Fill::Solid { .. } => FillType::Solid,
            Fill::Pattern { .. } => FillType::Patterned,
            Fill::Gradient { .. } => FillType::Gradient,
        }
    }
}

/// Kind of fill applied to a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FillType {
    /// Transparent, the slide background shows through
    Background,
    Solid,
    Patterned,
    Gradient,
}

/// Preset pattern types (`ST_PresetPatternVal`, common subset)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PatternType {
    /// 5% foreground
    #[default]
    Percent5,
    /// 10% foreground
    Percent10,
    /// 25% foreground
    Percent25,
    /// 50% foreground
    Percent50,
    /// 75% foreground
    Percent75,
    /// Horizontal lines
    Horizontal,
    /// Vertical lines
    Vertical,
    /// Diagonal lines (down)
    DownwardDiagonal,
    /// Diagonal lines (up)
    UpwardDiagonal,
    /// Horizontal and vertical cross
    Cross,
    /// Diagonal cross
    DiagonalCross,
    /// Small grid
    SmallGrid,
}

impl PatternType {
    /// The `prst` token used by `<a:pattFill>`
    pub fn as_xml(&self) -> &'static str {
        match self {
            PatternType::Percent5 => "pct5",
            PatternType::Percent10 => "pct10",
            PatternType::Percent25 => "pct25",
            PatternType::Percent50 => "pct50",
            PatternType::Percent75 => "pct75",
            PatternType::Horizontal => "horz",
            PatternType::Vertical => "vert",
            PatternType::DownwardDiagonal => "dnDiag",
            PatternType::UpwardDiagonal => "upDiag",
            PatternType::Cross => "cross",
            PatternType::DiagonalCross => "diagCross",
            PatternType::SmallGrid => "smGrid",
        }
    }

    /// Parse a `prst` token
    pub fn from_xml(token: &str) -> Option<Self> {
        Some(match token {
            "pct5" => PatternType::Percent5,
            "pct10" => PatternType::Percent10,
            "pct25" => PatternType::Percent25,
            "pct50" => PatternType::Percent50,
            "pct75" => PatternType::Percent75,
            "horz" => PatternType::Horizontal,
            "vert" => PatternType::Vertical,
            "dnDiag" => PatternType::DownwardDiagonal,
            "upDiag" => PatternType::UpwardDiagonal,
            "cross" => PatternType::Cross,
            "diagCross" => PatternType::DiagonalCross,
            "smGrid" => PatternType::SmallGrid,
            _ => return None,
        })
    }
}

/// Gradient stop (position and color)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientStop {
    /// Position (0.0 to 1.0)
    pub position: f64,
    /// Color at this position
    pub color: Color,
}

impl GradientStop {
    /// Create a new gradient stop
    pub fn new(position: f64, color: Color) -> Self {
        Self {
            position: position.clamp(0.0, 1.0),
            color,
        }
    }
}
