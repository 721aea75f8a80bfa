//! Cell text

use slidegrid_oxml::{CellId, GridAccessor, Paragraph};

/// Text content of one cell
pub struct TextFrame {
    grid: GridAccessor,
    tc: CellId,
}

impl TextFrame {
    pub(crate) fn new(grid: GridAccessor, tc: CellId) -> Self {
        Self { grid, tc }
    }

    /// All text, paragraphs separated by line feeds
    pub fn text(&self) -> String {
        self.grid
            .with_text_body(self.tc, |body| body.map(|b| b.text()).unwrap_or_default())
    }

    /// Replace all content with a single paragraph of one run
    pub fn set_text(&self, text: &str) {
        self.grid.update_text_body(self.tc, |body| body.set_text(text));
    }

    /// Remove all content, leaving one empty paragraph
    pub fn clear(&self) {
        self.grid.update_text_body(self.tc, |body| body.clear());
    }

    /// Copy of the current paragraphs
    pub fn paragraphs(&self) -> Vec<Paragraph> {
        self.grid.with_text_body(self.tc, |body| {
            body.map(|b| b.paragraphs.clone()).unwrap_or_default()
        })
    }

    /// Append a paragraph and return its index
    pub fn add_paragraph(&self, text: &str) -> usize {
        self.grid.update_text_body(self.tc, |body| {
            body.paragraphs.push(Paragraph::with_text(text));
            body.paragraphs.len() - 1
        })
    }

    /// Word wrap setting, `None` when inherited
    pub fn word_wrap(&self) -> Option<bool> {
        self.grid
            .with_text_body(self.tc, |body| body.and_then(|b| b.word_wrap))
    }

    pub fn set_word_wrap(&self, wrap: Option<bool>) {
        self.grid
            .update_text_body(self.tc, |body| body.word_wrap = wrap);
    }
}
