//! Vertical text anchoring for table cells

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Vertical placement of text within a cell
///
/// Maps to the `anchor` attribute of `<a:tcPr>`. A cell with no anchor
/// inherits its placement from the table style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerticalAnchor {
    /// Text aligned to the top edge
    Top,
    /// Text centered vertically
    Middle,
    /// Text aligned to the bottom edge
    Bottom,
    /// Lines spread to fill the cell height
    Justified,
    /// Lines distributed evenly, including the first and last gaps
    Distributed,
}

impl VerticalAnchor {
    /// The `ST_TextAnchoringType` token for this anchor
    pub fn as_xml(&self) -> &'static str {
        match self {
            VerticalAnchor::Top => "t",
            VerticalAnchor::Middle => "ctr",
            VerticalAnchor::Bottom => "b",
            VerticalAnchor::Justified => "just",
            VerticalAnchor::Distributed => "dist",
        }
    }

    /// Parse an `ST_TextAnchoringType` token
    pub fn from_xml(token: &str) -> Option<Self> {
        match token {
            "t" => Some(VerticalAnchor::Top),
            "ctr" => Some(VerticalAnchor::Middle),
            "b" => Some(VerticalAnchor::Bottom),
            "just" => Some(VerticalAnchor::Justified),
            "dist" => Some(VerticalAnchor::Distributed),
            _ => None,
        }
    }
}

impl fmt::Display for VerticalAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VerticalAnchor::Top => "top",
            VerticalAnchor::Middle => "middle",
            VerticalAnchor::Bottom => "bottom",
            VerticalAnchor::Justified => "justified",
            VerticalAnchor::Distributed => "distributed",
        };
        f.write_str(name)
    }
}

/// Accepts either the display name (`middle`) or the XML token (`ctr`)
impl FromStr for VerticalAnchor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let anchor = match lower.as_str() {
            "top" => Some(VerticalAnchor::Top),
            "middle" | "center" => Some(VerticalAnchor::Middle),
            "bottom" => Some(VerticalAnchor::Bottom),
            "justified" => Some(VerticalAnchor::Justified),
            "distributed" => Some(VerticalAnchor::Distributed),
            token => VerticalAnchor::from_xml(token),
        };
        anchor.ok_or_else(|| Error::InvalidAttribute {
            name: "anchor",
            value: s.to_string(),
        })
    }
}
