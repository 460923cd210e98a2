//! Trailing blank removal in table cells.

use super::TrailingBlankOptions;
use crate::model::{Document, TableCell};

/// Remove trailing blank paragraphs from one cell.
///
/// Only the tail of the cell is touched; blanks between content stay. The
/// scan stops at the first non-blank paragraph, at a preserved paragraph
/// when `ignore_preserve_flag` is off, or when one paragraph is left.
pub fn remove_trailing_blanks_in_cell(cell: &mut TableCell, options: &TrailingBlankOptions) -> usize {
    let mut removed = 0;

    while let Some(last) = cell.paragraphs().last() {
        if !last.is_blank() || (last.preserved && !options.ignore_preserve_flag) {
            break;
        }
        if cell.pop_paragraph().is_none() {
            break;
        }
        removed += 1;
    }

    removed
}

/// Remove trailing blank paragraphs from every cell of every body table.
///
/// Returns the number of paragraphs removed across all cells.
pub fn remove_trailing_blanks_in_table_cells(
    doc: &mut Document,
    options: &TrailingBlankOptions,
) -> usize {
    let mut total = 0;

    for (table_index, table) in doc.tables_mut().enumerate() {
        for cell in table.cells_mut() {
            total += remove_trailing_blanks_in_cell(cell, options);
        }
        log::trace!("table {}: {} trailing blanks removed so far", table_index, total);
    }

    if total > 0 {
        log::debug!("removed {} trailing blank paragraphs from table cells", total);
    }
    total
}
