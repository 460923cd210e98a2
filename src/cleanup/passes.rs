//! Document-wide blank-line passes.
//!
//! Passes that insert walk the body from the end towards the start, so an
//! insertion never shifts an index that is still to be visited.

use crate::blank::{
    insert_or_mark_blank_after, insert_or_mark_blank_before, is_within_list_context,
    BlankLineOptions, BlankLineStats,
};
use crate::error::Result;
use crate::model::{Block, Document};

/// Remove non-preserved blank body paragraphs that sit inside a list.
///
/// Returns the number of paragraphs removed.
pub fn remove_blanks_in_lists(doc: &mut Document) -> usize {
    let targets: Vec<usize> = (0..doc.len())
        .filter(|&i| {
            doc.paragraph(i)
                .is_some_and(|p| p.is_blank() && !p.preserved)
                && is_within_list_context(doc, i)
        })
        .collect();

    // Removing a plain paragraph never changes another paragraph's context.
    for &index in targets.iter().rev() {
        doc.body.remove(index);
    }

    if !targets.is_empty() {
        log::debug!("removed {} blank paragraphs inside lists", targets.len());
    }
    targets.len()
}

/// Collapse runs of consecutive blank body paragraphs to their first member.
///
/// Preserved paragraphs are never removed. Returns the number removed.
pub fn collapse_consecutive_blanks(doc: &mut Document) -> usize {
    let mut removed = 0;
    let mut previous_blank = false;

    doc.body.retain(|block| {
        let Some(p) = block.as_paragraph() else {
            previous_blank = false;
            return true;
        };
        let blank = p.is_blank();
        let keep = !(blank && previous_blank && !p.preserved);
        previous_blank = blank;
        if !keep {
            removed += 1;
        }
        keep
    });

    if removed > 0 {
        log::debug!("collapsed {} consecutive blank paragraphs", removed);
    }
    removed
}

/// Ensure blank paragraphs around every body table.
pub fn ensure_blank_around_tables(
    doc: &mut Document,
    options: &BlankLineOptions,
    before: bool,
    after: bool,
) -> Result<BlankLineStats> {
    let mut stats = BlankLineStats::new();
    let tables: Vec<usize> = indices_where(doc, Block::is_table);

    for &index in tables.iter().rev() {
        if after {
            stats.record(insert_or_mark_blank_after(doc, index, options)?);
        }
        if before {
            stats.record(insert_or_mark_blank_before(doc, index, options)?);
        }
    }

    Ok(stats)
}

/// Ensure a blank paragraph after the last item of every list.
///
/// A list item ends its list when the next body element is not a list item
/// and the next position is not inside the same list. A list that is the
/// last body element is left alone.
pub fn ensure_blank_after_lists(
    doc: &mut Document,
    options: &BlankLineOptions,
) -> Result<BlankLineStats> {
    let mut stats = BlankLineStats::new();
    let list_ends: Vec<usize> = (0..doc.len().saturating_sub(1))
        .filter(|&i| is_list_end(doc, i))
        .collect();

    for &index in list_ends.iter().rev() {
        stats.record(insert_or_mark_blank_after(doc, index, options)?);
    }

    Ok(stats)
}

fn is_list_end(doc: &Document, index: usize) -> bool {
    let Some(next) = doc.get(index + 1) else {
        return false;
    };
    doc.body[index].is_list_item() && !next.is_list_item() && !is_within_list_context(doc, index + 1)
}

fn indices_where(doc: &Document, pred: impl Fn(&Block) -> bool) -> Vec<usize> {
    doc.body
        .iter()
        .enumerate()
        .filter(|(_, b)| pred(b))
        .map(|(i, _)| i)
        .collect()
}
