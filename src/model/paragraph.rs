//! Paragraph and inline-level types.

use serde::{Deserialize, Serialize};

use crate::blank::{is_paragraph_blank, BlankLineOptions};

/// A paragraph of the document body or of a table cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Inline content items (runs, hyperlinks, images, ...)
    #[serde(default)]
    pub content: Vec<InlineContent>,

    /// Paragraph style and spacing
    #[serde(default)]
    pub style: ParagraphStyle,

    /// List numbering reference, present only for list items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numbering: Option<Numbering>,

    /// Exempt from default blank pruning
    #[serde(default)]
    pub preserved: bool,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with plain text.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.add_text(text);
        p
    }

    /// Create a list item paragraph.
    pub fn list_item(text: impl Into<String>, num_id: u32, level: u8) -> Self {
        let mut p = Self::with_text(text);
        p.numbering = Some(Numbering::new(num_id, level));
        p
    }

    /// Build a blank paragraph configured from blank-line options.
    ///
    /// Spacing before and line spacing are applied only when set; spacing
    /// after is always applied.
    pub fn blank_with(options: &BlankLineOptions) -> Self {
        Self {
            content: Vec::new(),
            style: ParagraphStyle {
                name: Some(options.style.clone()),
                space_before: options.spacing_before,
                space_after: Some(options.spacing_after),
                line_spacing: options.line_spacing,
                mark_font_size: options.font_size,
                mark_font_family: options.font_family.clone(),
            },
            numbering: None,
            preserved: options.mark_as_preserved,
        }
    }

    /// Set the style name and return self.
    pub fn styled(mut self, name: impl Into<String>) -> Self {
        self.style.name = Some(name.into());
        self
    }

    /// Mark the paragraph as preserved and return self.
    pub fn preserve(mut self) -> Self {
        self.preserved = true;
        self
    }

    /// Add plain text to the paragraph.
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.content.push(InlineContent::Run(TextRun::new(text)));
    }

    /// Add a styled text run.
    pub fn add_run(&mut self, run: TextRun) {
        self.content.push(InlineContent::Run(run));
    }

    /// Add a hyperlink.
    pub fn add_hyperlink(&mut self, text: impl Into<String>, url: impl Into<String>) {
        self.content.push(InlineContent::Hyperlink {
            text: text.into(),
            url: Some(url.into()),
            anchor: None,
        });
    }

    /// Add an inline image.
    pub fn add_image(&mut self, resource_id: impl Into<String>) {
        self.content.push(InlineContent::Image {
            resource_id: resource_id.into(),
            alt_text: None,
        });
    }

    /// Get plain text content of the paragraph.
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .map(|c| match c {
                InlineContent::Run(run) => run.text.as_str(),
                InlineContent::Hyperlink { text, .. } => text.as_str(),
                InlineContent::Image { alt_text, .. } => alt_text.as_deref().unwrap_or_default(),
                InlineContent::Other { .. } => "",
            })
            .collect()
    }

    /// Check if the paragraph is blank (see [`is_paragraph_blank`]).
    pub fn is_blank(&self) -> bool {
        is_paragraph_blank(self)
    }

    /// Check if this is a list item.
    pub fn is_list_item(&self) -> bool {
        self.numbering.is_some()
    }

    /// Get the list identifier if this is a list item.
    pub fn num_id(&self) -> Option<u32> {
        self.numbering.map(|n| n.num_id)
    }

    /// Check if the paragraph carries any non-run content.
    pub fn has_complex_content(&self) -> bool {
        self.content
            .iter()
            .any(|c| !matches!(c, InlineContent::Run(_)))
    }
}

/// Inline content within a paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InlineContent {
    /// A text run with styling
    Run(TextRun),

    /// A hyperlink
    Hyperlink {
        /// Display text
        text: String,
        /// External target
        #[serde(default)]
        url: Option<String>,
        /// Internal bookmark target
        #[serde(default)]
        anchor: Option<String>,
    },

    /// An inline image
    Image {
        /// Resource ID
        resource_id: String,
        /// Alternative text
        #[serde(default)]
        alt_text: Option<String>,
    },

    /// Any other inline element (fields, bookmarks, content controls)
    Other {
        /// Element kind as named by the host model
        kind: String,
    },
}

/// A run of text with consistent styling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    pub text: String,

    /// Text styling
    #[serde(default)]
    pub style: TextStyle,
}

impl TextRun {
    /// Create a new text run with default style.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::default(),
        }
    }

    /// Create a bold text run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle {
                bold: true,
                ..Default::default()
            },
        }
    }

    /// Check if the run holds only whitespace.
    pub fn is_whitespace(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Text styling properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,

    /// Underlined text
    pub underline: bool,

    /// Font name
    pub font_name: Option<String>,

    /// Font size in points
    pub font_size: Option<f32>,
}

/// Paragraph styling properties.
///
/// Spacing values are in twentieths of a point (twips); line spacing is in
/// 240ths of a line, so 240 is single spacing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParagraphStyle {
    /// Paragraph style name (e.g. "Normal")
    pub name: Option<String>,

    /// Space before paragraph
    pub space_before: Option<u32>,

    /// Space after paragraph
    pub space_after: Option<u32>,

    /// Line spacing
    pub line_spacing: Option<u32>,

    /// Font size of the paragraph mark in points
    pub mark_font_size: Option<f32>,

    /// Font family of the paragraph mark
    pub mark_font_family: Option<String>,
}

/// A paragraph's reference into a numbering definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Numbering {
    /// List identifier
    pub num_id: u32,

    /// Nesting level (0 = top level)
    #[serde(default)]
    pub level: u8,
}

impl Numbering {
    /// Create a numbering reference.
    pub fn new(num_id: u32, level: u8) -> Self {
        Self { num_id, level }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_plain_text() {
        let mut p = Paragraph::new();
        p.add_text("Hello ");
        p.add_run(TextRun::bold("world"));
        p.add_hyperlink("!", "https://example.com");

        assert_eq!(p.plain_text(), "Hello world!");
        assert!(p.has_complex_content());
    }

    #[test]
    fn test_list_item() {
        let item = Paragraph::list_item("First", 3, 1);
        assert!(item.is_list_item());
        assert_eq!(item.num_id(), Some(3));
        assert_eq!(item.numbering.map(|n| n.level), Some(1));
        assert!(!Paragraph::with_text("plain").is_list_item());
    }

    #[test]
    fn test_blank_with_options() {
        let options = BlankLineOptions::new()
            .with_spacing_before(60)
            .with_style("Body");
        let p = Paragraph::blank_with(&options);

        assert!(p.content.is_empty());
        assert!(p.preserved);
        assert_eq!(p.style.name.as_deref(), Some("Body"));
        assert_eq!(p.style.space_before, Some(60));
        assert_eq!(p.style.space_after, Some(120));
        assert_eq!(p.style.line_spacing, None);
        assert!(p.numbering.is_none());
    }

    #[test]
    fn test_blank_with_unpreserved_options() {
        let options = BlankLineOptions::new()
            .with_mark_as_preserved(false)
            .with_line_spacing(240)
            .with_font("Arial", 11.0);
        let p = Paragraph::blank_with(&options);

        assert!(!p.preserved);
        assert_eq!(p.style.line_spacing, Some(240));
        assert_eq!(p.style.mark_font_family.as_deref(), Some("Arial"));
        assert_eq!(p.style.mark_font_size, Some(11.0));
    }

    #[test]
    fn test_builders() {
        let p = Paragraph::new().styled("Heading1").preserve();
        assert!(p.preserved);
        assert_eq!(p.style.name.as_deref(), Some("Heading1"));
    }
}
