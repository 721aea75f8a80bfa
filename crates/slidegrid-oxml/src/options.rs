//! Options for building and serializing table trees

use crate::table::TableProperties;
use crate::units::Length;

/// Options for building a new table tree
#[derive(Debug, Clone)]
pub struct TableOptions {
    /// Total width, divided evenly between columns
    pub width: Length,
    /// Total height, divided evenly between rows
    pub height: Length,
    /// Initial style-hint flags
    pub properties: TableProperties,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            width: Length::inches(6.0),
            height: Length::inches(0.8),
            properties: TableProperties::presentation_default(),
        }
    }
}

impl TableOptions {
    /// Set total width
    pub fn with_width(mut self, width: Length) -> Self {
        self.width = width;
        self
    }

    /// Set total height
    pub fn with_height(mut self, height: Length) -> Self {
        self.height = height;
        self
    }

    /// Set initial flags
    pub fn with_properties(mut self, properties: TableProperties) -> Self {
        self.properties = properties;
        self
    }
}

/// Options for writing `<a:tbl>` XML
#[derive(Debug, Clone)]
pub struct XmlWriteOptions {
    /// Spaces per nesting level; `None` writes everything on one line
    pub indent: Option<usize>,
    /// Declare the DrawingML namespace on the root element
    pub declare_namespace: bool,
}

impl Default for XmlWriteOptions {
    fn default() -> Self {
        Self {
            indent: Some(2),
            declare_namespace: true,
        }
    }
}

impl XmlWriteOptions {
    /// Single-line output without namespace declaration, for embedding
    pub fn compact() -> Self {
        Self {
            indent: None,
            declare_namespace: false,
        }
    }
}
