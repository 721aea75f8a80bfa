//! The container that receives a table's aggregate extents

use std::cell::RefCell;
use std::rc::Rc;

use slidegrid_oxml::Length;

/// Owner of a table's bounding box, usually a `<p:graphicFrame>` shape
///
/// The table writes the sum of its row heights and column widths here after
/// every size change.
pub trait GraphicFrame {
    fn width(&self) -> Length;
    fn height(&self) -> Length;
    fn set_width(&mut self, width: Length);
    fn set_height(&mut self, height: Length);
}

/// Position and size of a frame on the slide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Extents {
    pub x: Length,
    pub y: Length,
    pub width: Length,
    pub height: Length,
}

impl Extents {
    /// Create extents at a position with a size
    pub fn new(x: Length, y: Length, width: Length, height: Length) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl GraphicFrame for Extents {
    fn width(&self) -> Length {
        self.width
    }

    fn height(&self) -> Length {
        self.height
    }

    fn set_width(&mut self, width: Length) {
        self.width = width;
    }

    fn set_height(&mut self, height: Length) {
        self.height = height;
    }
}

/// Lets the caller keep a handle on a frame the table also writes to
impl<F: GraphicFrame + ?Sized> GraphicFrame for Rc<RefCell<F>> {
    fn width(&self) -> Length {
        self.borrow().width()
    }

    fn height(&self) -> Length {
        self.borrow().height()
    }

    fn set_width(&mut self, width: Length) {
        self.borrow_mut().set_width(width);
    }

    fn set_height(&mut self, height: Length) {
        self.borrow_mut().set_height(height);
    }
}
