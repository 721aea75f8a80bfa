//! Length units
//!
//! Every absolute position and extent in DrawingML is an integer count of
//! English Metric Units (EMU). [`Length`] wraps that count and converts to and
//! from the usual typographic units.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub};
use std::str::FromStr;

use crate::error::Error;

/// EMU per inch
pub const EMUS_PER_INCH: i64 = 914_400;
/// EMU per centimeter
pub const EMUS_PER_CM: i64 = 360_000;
/// EMU per millimeter
pub const EMUS_PER_MM: i64 = 36_000;
/// EMU per point
pub const EMUS_PER_PT: i64 = 12_700;
/// EMU per centipoint (1/100 pt)
pub const EMUS_PER_CENTIPOINT: i64 = 127;

/// Largest extent DrawingML allows (`ST_PositiveCoordinate`)
pub const MAX_EXTENT: Length = Length(27_273_042_316_900);

/// An absolute length in EMU
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Length(i64);

impl Length {
    /// Zero length
    pub const ZERO: Length = Length(0);

    /// Create from a raw EMU count
    pub const fn emu(emu: i64) -> Self {
        Length(emu)
    }

    /// Create from inches
    pub fn inches(inches: f64) -> Self {
        Self::from_scaled(inches, EMUS_PER_INCH)
    }

    /// Create from centimeters
    pub fn cm(cm: f64) -> Self {
        Self::from_scaled(cm, EMUS_PER_CM)
    }

    /// Create from millimeters
    pub fn mm(mm: f64) -> Self {
        Self::from_scaled(mm, EMUS_PER_MM)
    }

    /// Create from points
    pub fn pt(points: f64) -> Self {
        Self::from_scaled(points, EMUS_PER_PT)
    }

    /// Create from centipoints
    pub const fn centipoints(centipoints: i64) -> Self {
        Length(centipoints * EMUS_PER_CENTIPOINT)
    }

    fn from_scaled(value: f64, per_unit: i64) -> Self {
        Length((value * per_unit as f64).round() as i64)
    }

    /// Raw EMU count
    pub const fn as_emu(self) -> i64 {
        self.0
    }

    /// Length in inches
    pub fn to_inches(self) -> f64 {
        self.0 as f64 / EMUS_PER_INCH as f64
    }

    /// Length in centimeters
    pub fn to_cm(self) -> f64 {
        self.0 as f64 / EMUS_PER_CM as f64
    }

    /// Length in millimeters
    pub fn to_mm(self) -> f64 {
        self.0 as f64 / EMUS_PER_MM as f64
    }

    /// Length in points
    pub fn to_pt(self) -> f64 {
        self.0 as f64 / EMUS_PER_PT as f64
    }

    /// Length in whole centipoints (truncated)
    pub const fn to_centipoints(self) -> i64 {
        self.0 / EMUS_PER_CENTIPOINT
    }

    /// True if this is a legal width or height: `0..=MAX_EXTENT`
    pub const fn is_valid_extent(self) -> bool {
        self.0 >= 0 && self.0 <= MAX_EXTENT.0
    }

    /// Addition that clamps at the `i64` bounds instead of overflowing
    pub const fn saturating_add(self, rhs: Length) -> Length {
        Length(self.0.saturating_add(rhs.0))
    }
}

impl From<i64> for Length {
    fn from(emu: i64) -> Self {
        Length(emu)
    }
}

impl From<i32> for Length {
    fn from(emu: i32) -> Self {
        Length(emu as i64)
    }
}

impl From<u32> for Length {
    fn from(emu: u32) -> Self {
        Length(emu as i64)
    }
}

impl From<Length> for i64 {
    fn from(length: Length) -> Self {
        length.0
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl AddAssign for Length {
    fn add_assign(&mut self, rhs: Length) {
        self.0 += rhs.0;
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Neg for Length {
    type Output = Length;

    fn neg(self) -> Length {
        Length(-self.0)
    }
}

/// Totals saturate, so summing any set of extents never panics
impl Sum for Length {
    fn sum<I: Iterator<Item = Length>>(iter: I) -> Self {
        iter.fold(Length::ZERO, Length::saturating_add)
    }
}

impl<'a> Sum<&'a Length> for Length {
    fn sum<I: Iterator<Item = &'a Length>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} EMU", self.0)
    }
}

/// Parse a length with an optional unit suffix
///
/// A bare integer is read as EMU. Recognized suffixes are `emu`, `in`, `cm`,
/// `mm` and `pt`.
///
/// # Examples
/// ```
/// use slidegrid_oxml::Length;
///
/// assert_eq!("1in".parse::<Length>().unwrap(), Length::emu(914_400));
/// assert_eq!("12700".parse::<Length>().unwrap(), Length::pt(1.0));
/// ```
impl FromStr for Length {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s
            .find(|c: char| c.is_ascii_alphabetic())
            .unwrap_or(s.len());
        let (number, unit) = s.split_at(split);
        let number = number.trim();
        let invalid = || Error::InvalidLength(s.to_string());

        match unit.trim().to_ascii_lowercase().as_str() {
            "" | "emu" => number.parse::<i64>().map(Length).map_err(|_| invalid()),
            unit => {
                let value: f64 = number.parse().map_err(|_| invalid())?;
                if !value.is_finite() {
                    return Err(invalid());
                }
                match unit {
                    "in" => Ok(Length::inches(value)),
                    "cm" => Ok(Length::cm(value)),
                    "mm" => Ok(Length::mm(value)),
                    "pt" => Ok(Length::pt(value)),
                    _ => Err(invalid()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_constructors() {
        assert_eq!(Length::inches(1.0).as_emu(), 914_400);
        assert_eq!(Length::inches(0.1).as_emu(), 91_440);
        assert_eq!(Length::inches(0.05).as_emu(), 45_720);
        assert_eq!(Length::pt(1.0).as_emu(), 12_700);
        assert_eq!(Length::cm(1.0).as_emu(), 360_000);
        assert_eq!(Length::mm(1.0).as_emu(), 36_000);
        assert_eq!(Length::centipoints(100), Length::pt(1.0));
    }

    #[test]
    fn test_conversions() {
        let l = Length::emu(914_400);
        assert!((l.to_inches() - 1.0).abs() < 1e-9);
        assert!((l.to_pt() - 72.0).abs() < 1e-9);
        assert!((l.to_cm() - 2.54).abs() < 1e-9);
        assert_eq!(Length::pt(2.5).to_centipoints(), 250);
    }

    #[test]
    fn test_sum() {
        let total: Length = [Length::emu(10), Length::emu(20), Length::emu(30)]
            .into_iter()
            .sum();
        assert_eq!(total, Length::emu(60));
        assert_eq!(Vec::<Length>::new().iter().sum::<Length>(), Length::ZERO);

        let huge = Length::emu(i64::MAX - 100);
        assert_eq!([huge, huge].into_iter().sum::<Length>(), Length::emu(i64::MAX));
    }

    #[test]
    fn test_extent_bounds() {
        assert!(Length::ZERO.is_valid_extent());
        assert!(MAX_EXTENT.is_valid_extent());
        assert!(!Length::emu(-1).is_valid_extent());
        assert!(!(MAX_EXTENT + Length::emu(1)).is_valid_extent());
    }

    #[test]
    fn test_parse() {
        assert_eq!("914400".parse::<Length>().unwrap(), Length::inches(1.0));
        assert_eq!("2.54cm".parse::<Length>().unwrap(), Length::inches(1.0));
        assert_eq!(" 72 pt ".parse::<Length>().unwrap(), Length::inches(1.0));
        assert_eq!("10mm".parse::<Length>().unwrap(), Length::cm(1.0));
        assert_eq!("-5emu".parse::<Length>().unwrap(), Length::emu(-5));
        assert!("1.5".parse::<Length>().is_err());
        assert!("3furlongs".parse::<Length>().is_err());
        assert!("in".parse::<Length>().is_err());
    }
}
