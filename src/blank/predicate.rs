//! Blank paragraph classification.

use crate::model::{InlineContent, Paragraph};

/// Check whether a paragraph is blank.
///
/// A paragraph is blank when every content item is a text run whose text is
/// empty after trimming. Hyperlinks, images and any other inline element make
/// the paragraph non-blank. A paragraph with no content is blank. Numbering
/// is not consulted.
pub fn is_paragraph_blank(paragraph: &Paragraph) -> bool {
    paragraph.content.iter().all(|item| match item {
        InlineContent::Run(run) => run.is_whitespace(),
        InlineContent::Hyperlink { .. } => false,
        InlineContent::Image { .. } => false,
        InlineContent::Other { .. } => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TextRun;

    #[test]
    fn test_empty_paragraph_is_blank() {
        assert!(is_paragraph_blank(&Paragraph::new()));
    }

    #[test]
    fn test_whitespace_runs_are_blank() {
        let mut p = Paragraph::new();
        p.add_text("   ");
        p.add_text("\t\n");
        p.add_run(TextRun::bold(""));
        assert!(is_paragraph_blank(&p));

        p.add_text(" x ");
        assert!(!is_paragraph_blank(&p));
    }

    #[test]
    fn test_hyperlink_with_empty_text_is_not_blank() {
        let mut p = Paragraph::new();
        p.add_hyperlink("", "https://example.com");
        assert!(!is_paragraph_blank(&p));
    }

    #[test]
    fn test_image_is_not_blank() {
        let mut p = Paragraph::with_text("  ");
        p.add_image("rId7");
        assert!(!is_paragraph_blank(&p));
    }

    #[test]
    fn test_unclassified_content_is_not_blank() {
        let mut p = Paragraph::new();
        p.content.push(InlineContent::Other {
            kind: "bookmarkStart".to_string(),
        });
        assert!(!is_paragraph_blank(&p));
    }

    #[test]
    fn test_numbering_is_ignored() {
        let mut item = Paragraph::list_item("", 4, 0);
        assert!(is_paragraph_blank(&item));
        item.add_text("text");
        assert!(!is_paragraph_blank(&item));
    }
}
