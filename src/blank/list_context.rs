//! List-context analysis.
//!
//! A plain paragraph sits "within list context" when the nearest list item
//! before it and the nearest list item after it belong to the same list
//! (`num_id`). The paragraph itself must not be a list item. Tables and
//! opaque body elements end a scan: numbering never continues across them.

use crate::model::{Block, Document, Paragraph, TableCell};

/// How a sequence element looks to a list scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanItem {
    /// A list item of the given list
    ListItem(u32),
    /// A paragraph without numbering; the scan steps over it
    Plain,
    /// An element the scan may not cross
    Boundary,
}

impl ScanItem {
    fn of_paragraph(paragraph: &Paragraph) -> Self {
        match paragraph.num_id() {
            Some(num_id) => ScanItem::ListItem(num_id),
            None => ScanItem::Plain,
        }
    }

    fn of_block(block: &Block) -> Self {
        match block {
            Block::Paragraph(p) => Self::of_paragraph(p),
            Block::Table(_) | Block::Opaque { .. } => ScanItem::Boundary,
        }
    }
}

/// Find the first list id in `items`, giving up at a boundary.
fn nearest_list_id(items: impl Iterator<Item = ScanItem>) -> Option<u32> {
    for item in items {
        match item {
            ScanItem::ListItem(num_id) => return Some(num_id),
            ScanItem::Plain => continue,
            ScanItem::Boundary => return None,
        }
    }
    None
}

/// Apply the list-context rule to an indexable sequence.
fn within_list_context<F>(len: usize, index: usize, item_at: F) -> bool
where
    F: Fn(usize) -> ScanItem,
{
    if index >= len || item_at(index) != ScanItem::Plain {
        return false;
    }

    let before = nearest_list_id((0..index).rev().map(&item_at));
    let Some(before) = before else {
        return false;
    };
    let after = nearest_list_id((index + 1..len).map(&item_at));

    log::trace!(
        "list context at {}: before={:?}, after={:?}",
        index,
        before,
        after
    );

    after == Some(before)
}

/// Check whether the body paragraph at `index` is within list context.
///
/// Returns `false` for list items, for non-paragraph elements, and for an
/// index outside the body.
pub fn is_within_list_context(doc: &Document, index: usize) -> bool {
    within_list_context(doc.body.len(), index, |i| ScanItem::of_block(&doc.body[i]))
}

/// Check whether the paragraph at `paragraph_index` of a table cell is
/// within list context, considering only that cell's paragraphs.
pub fn is_within_list_context_in_cell(cell: &TableCell, paragraph_index: usize) -> bool {
    let paragraphs = cell.paragraphs();
    within_list_context(paragraphs.len(), paragraph_index, |i| {
        ScanItem::of_paragraph(&paragraphs[i])
    })
}
