//! Error types for slidegrid

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the table facade
#[derive(Debug, Error)]
pub enum Error {
    /// Margin assigned something other than an integer length or unset
    #[error("margin value must be an integer length or unset, got '{0}'")]
    InvalidMarginType(String),

    /// Collection index negative or past the end
    #[error("{collection} index [{index}] out of range")]
    IndexOutOfRange {
        collection: &'static str,
        index: isize,
    },

    /// Cell text given as bytes was not UTF-8
    #[error("cell text is not valid UTF-8: {0}")]
    InvalidText(#[from] std::str::Utf8Error),

    /// Fill operation not supported by the current fill type
    #[error("{0}")]
    FillTypeMismatch(String),

    /// Failure reported by the grid accessor, passed through unchanged
    #[error(transparent)]
    Grid(#[from] slidegrid_oxml::Error),
}
