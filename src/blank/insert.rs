//! Insert-or-mark policy for blank paragraphs next to a body element.

use serde::{Deserialize, Serialize};

use super::BlankLineOptions;
use crate::error::{Error, Result};
use crate::model::{Block, Document, Paragraph};

/// What an insert-or-mark call did to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlankLineOutcome {
    /// A new blank paragraph was inserted
    Added,
    /// An existing blank paragraph was flagged as preserved
    Marked,
    /// Nothing needed to change
    Skipped,
}

impl BlankLineOutcome {
    /// Check if the call created a paragraph.
    pub fn is_added(&self) -> bool {
        matches!(self, BlankLineOutcome::Added)
    }

    /// Check if the call changed the preserved state of a paragraph.
    pub fn is_marked(&self) -> bool {
        matches!(self, BlankLineOutcome::Marked)
    }
}

/// Ensure a blank paragraph follows the body element at `index`.
///
/// An existing blank paragraph right after `index` is reused: its style is
/// set and, if requested, it is flagged as preserved. Otherwise a new blank
/// paragraph built from `options` is inserted at `index + 1`.
pub fn insert_or_mark_blank_after(
    doc: &mut Document,
    index: usize,
    options: &BlankLineOptions,
) -> Result<BlankLineOutcome> {
    check_index(doc, index)?;
    let outcome = insert_or_mark_at(doc, index + 1, index + 1, options);
    log::debug!("blank after {}: {:?}", index, outcome);
    Ok(outcome)
}

/// Ensure a blank paragraph precedes the body element at `index`.
///
/// Behaves like [`insert_or_mark_blank_after`] on the preceding element.
/// There is no insertion point before the first element, so `index == 0`
/// returns [`BlankLineOutcome::Skipped`] without touching the document.
pub fn insert_or_mark_blank_before(
    doc: &mut Document,
    index: usize,
    options: &BlankLineOptions,
) -> Result<BlankLineOutcome> {
    if index == 0 {
        return Ok(BlankLineOutcome::Skipped);
    }
    check_index(doc, index)?;
    let outcome = insert_or_mark_at(doc, index - 1, index, options);
    log::debug!("blank before {}: {:?}", index, outcome);
    Ok(outcome)
}

fn check_index(doc: &Document, index: usize) -> Result<()> {
    let len = doc.len();
    if index >= len {
        return Err(Error::IndexOutOfRange { index, len });
    }
    Ok(())
}

/// Reuse the blank at `neighbor`, or insert a new one at `insert_at`.
fn insert_or_mark_at(
    doc: &mut Document,
    neighbor: usize,
    insert_at: usize,
    options: &BlankLineOptions,
) -> BlankLineOutcome {
    if let Some(Block::Paragraph(p)) = doc.body.get_mut(neighbor) {
        if p.is_blank() {
            return reuse_blank(p, options);
        }
    }

    doc.body
        .insert(insert_at, Block::Paragraph(Paragraph::blank_with(options)));
    BlankLineOutcome::Added
}

fn reuse_blank(paragraph: &mut Paragraph, options: &BlankLineOptions) -> BlankLineOutcome {
    paragraph.style.name = Some(options.style.clone());
    if options.mark_as_preserved && !paragraph.preserved {
        paragraph.preserved = true;
        BlankLineOutcome::Marked
    } else {
        BlankLineOutcome::Skipped
    }
}
