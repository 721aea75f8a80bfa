//! Color representation

use std::fmt;

/// A DrawingML color
///
/// Either an explicit RGB value (`<a:srgbClr>`) or a reference into the
/// presentation theme (`<a:schemeClr>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// RGB color
    Rgb { r: u8, g: u8, b: u8 },

    /// Theme color
    Theme(ThemeColor),
}

impl Color {
    /// Create an RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Create from a hex string (e.g., "#FF0000" or "FF0000")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Color::Rgb { r, g, b })
    }

    /// Hex string without `#`, `None` for theme colors
    pub fn to_hex(&self) -> Option<String> {
        match self {
            Color::Rgb { r, g, b } => Some(format!("{:02X}{:02X}{:02X}", r, g, b)),
            Color::Theme(_) => None,
        }
    }

    // Common colors
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
}

impl From<ThemeColor> for Color {
    fn from(theme: ThemeColor) -> Self {
        Color::Theme(theme)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb { r, g, b } => write!(f, "#{:02X}{:02X}{:02X}", r, g, b),
            Color::Theme(theme) => write!(f, "theme({})", theme.as_xml()),
        }
    }
}

/// Theme color slots (`ST_SchemeColorVal`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ThemeColor {
    Background1,
    Text1,
    Background2,
    Text2,
    Accent1,
    Accent2,
    Accent3,
    Accent4,
    Accent5,
    Accent6,
    Hyperlink,
    FollowedHyperlink,
}

impl ThemeColor {
    /// The `val` token used by `<a:schemeClr>`
    pub fn as_xml(&self) -> &'static str {
        match self {
            ThemeColor::Background1 => "bg1",
            ThemeColor::Text1 => "tx1",
            ThemeColor::Background2 => "bg2",
            ThemeColor::Text2 => "tx2",
            ThemeColor::Accent1 => "accent1",
            ThemeColor::Accent2 => "accent2",
            ThemeColor::Accent3 => "accent3",
            ThemeColor::Accent4 => "accent4",
            ThemeColor::Accent5 => "accent5",
            ThemeColor::Accent6 => "accent6",
            ThemeColor::Hyperlink => "hlink",
            ThemeColor::FollowedHyperlink => "folHlink",
        }
    }

    /// Parse a `<a:schemeClr val>` token
    pub fn from_xml(token: &str) -> Option<Self> {
        Some(match token {
            "bg1" | "lt1" => ThemeColor::Background1,
            "tx1" | "dk1" => ThemeColor::Text1,
            "bg2" | "lt2" => ThemeColor::Background2,
            "tx2" | "dk2" => ThemeColor::Text2,
            "accent1" => ThemeColor::Accent1,
            "accent2" => ThemeColor::Accent2,
            "accent3" => ThemeColor::Accent3,
            "accent4" => ThemeColor::Accent4,
            "accent5" => ThemeColor::Accent5,
            "accent6" => ThemeColor::Accent6,
            "hlink" => ThemeColor::Hyperlink,
            "folHlink" => ThemeColor::FollowedHyperlink,
            _ => return None,
        })
    }
}
