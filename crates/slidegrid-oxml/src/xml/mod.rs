//! DrawingML `<a:tbl>` serialization
//!
//! Only the parts of the table the tree models are read and written: flags,
//! grid columns, rows, spans, plain text, margins, anchor and cell fill.

mod reader;
mod writer;

pub use reader::parse_tbl;
pub use writer::write_tbl;

/// DrawingML main namespace
pub const DRAWINGML_NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
