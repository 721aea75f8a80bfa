//! Text body of a table cell (`<a:txBody>`)

/// Rich-text container of a cell
///
/// A text body always holds at least one paragraph, matching what DrawingML
/// requires of `<a:txBody>`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextBody {
    /// Word wrap setting from `<a:bodyPr wrap>`; `None` inherits
    pub word_wrap: Option<bool>,
    /// Paragraphs in document order
    pub paragraphs: Vec<Paragraph>,
}

impl Default for TextBody {
    fn default() -> Self {
        Self {
            word_wrap: None,
            paragraphs: vec![Paragraph::default()],
        }
    }
}

impl TextBody {
    /// Create a text body with a single empty paragraph
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove all content, leaving a single empty paragraph
    pub fn clear(&mut self) {
        self.paragraphs.clear();
        self.paragraphs.push(Paragraph::default());
    }

    /// Replace all content with one paragraph holding one run
    pub fn set_text(&mut self, text: &str) {
        self.paragraphs.clear();
        self.paragraphs.push(Paragraph::with_text(text));
    }

    /// Text of every paragraph, joined by line feeds
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A paragraph (`<a:p>`)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Paragraph {
    /// Runs in document order
    pub runs: Vec<Run>,
}

impl Paragraph {
    /// Paragraph holding a single run
    pub fn with_text(text: &str) -> Self {
        Self {
            runs: vec![Run::new(text)],
        }
    }

    /// Concatenated text of all runs
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// A run of text sharing character formatting (`<a:r>`)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Run {
    pub text: String,
}

impl Run {
    /// Create a run
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self { text: text.into() }
    }
}
