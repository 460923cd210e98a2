//! Blank-line configuration.

use serde::{Deserialize, Serialize};

/// Default spacing after generated blanks, in twips (6pt).
pub const DEFAULT_SPACING_AFTER: u32 = 120;

/// Default style assigned to generated or adjusted blanks.
pub const DEFAULT_BLANK_STYLE: &str = "Normal";

/// Options for inserting or adjusting blank paragraphs.
///
/// Spacing values are in twentieths of a point; line spacing is in 240ths
/// of a line. Optional values are only applied when set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlankLineOptions {
    /// Spacing after every generated blank paragraph
    pub spacing_after: u32,

    /// Spacing before generated blanks
    pub spacing_before: Option<u32>,

    /// Line spacing of generated blanks
    pub line_spacing: Option<u32>,

    /// Paragraph-mark font size in points
    pub font_size: Option<f32>,

    /// Paragraph-mark font family
    pub font_family: Option<String>,

    /// Flag created or adjusted blanks as exempt from later pruning
    pub mark_as_preserved: bool,

    /// Style name assigned to created or adjusted blanks
    pub style: String,
}

impl BlankLineOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set spacing after.
    pub fn with_spacing_after(mut self, twips: u32) -> Self {
        self.spacing_after = twips;
        self
    }

    /// Set spacing before.
    pub fn with_spacing_before(mut self, twips: u32) -> Self {
        self.spacing_before = Some(twips);
        self
    }

    /// Set line spacing.
    pub fn with_line_spacing(mut self, line: u32) -> Self {
        self.line_spacing = Some(line);
        self
    }

    /// Set paragraph-mark font family and size.
    pub fn with_font(mut self, family: impl Into<String>, size: f32) -> Self {
        self.font_family = Some(family.into());
        self.font_size = Some(size);
        self
    }

    /// Enable or disable the preserved flag on created/adjusted blanks.
    pub fn with_mark_as_preserved(mut self, mark: bool) -> Self {
        self.mark_as_preserved = mark;
        self
    }

    /// Set the style name.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }
}

impl Default for BlankLineOptions {
    fn default() -> Self {
        Self {
            spacing_after: DEFAULT_SPACING_AFTER,
            spacing_before: None,
            line_spacing: None,
            font_size: None,
            font_family: None,
            mark_as_preserved: true,
            style: DEFAULT_BLANK_STYLE.to_string(),
        }
    }
}

/// Options for trailing-blank removal in table cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailingBlankOptions {
    /// Remove trailing blanks even when they are marked preserved
    pub ignore_preserve_flag: bool,
}

impl TrailingBlankOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop removal at preserved paragraphs.
    pub fn respect_preserved(mut self) -> Self {
        self.ignore_preserve_flag = false;
        self
    }
}

impl Default for TrailingBlankOptions {
    fn default() -> Self {
        Self {
            ignore_preserve_flag: true,
        }
    }
}
