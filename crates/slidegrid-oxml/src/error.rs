//! Error types for slidegrid-oxml

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the table tree and its grid accessor
#[derive(Debug, Error)]
pub enum Error {
    /// Logical coordinate outside the grid
    #[error("Cell ({row}, {col}) out of range for a {rows}x{cols} table")]
    CellOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// A table needs at least one row and one column
    #[error("Table must have at least one row and one column, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },

    /// Merge range is malformed (single cell, reversed, off the grid)
    #[error("Invalid merge range: {0}")]
    InvalidSpan(String),

    /// Merge range overlaps an existing merged region
    #[error("Merge range {0} overlaps an existing merged region")]
    MergeConflict(String),

    /// Tree shape is inconsistent (ragged rows, spans off the grid)
    #[error("Malformed table: {0}")]
    Malformed(String),

    /// Length string could not be parsed
    #[error("Invalid length: {0}")]
    InvalidLength(String),

    /// Attribute value could not be interpreted
    #[error("Invalid value for attribute '{name}': {value}")]
    InvalidAttribute { name: &'static str, value: String },

    /// XML error
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Required element missing from XML input
    #[error("Missing required element: {0}")]
    MissingElement(&'static str),
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::Xml(err.into())
    }
}
