//! Size-change notifications from rows and columns up to the table

/// Something that recomputes its height when a row height changes
pub trait HeightObserver {
    fn notify_height_changed(&self);
}

/// Something that recomputes its width when a column width changes
pub trait WidthObserver {
    fn notify_width_changed(&self);
}
