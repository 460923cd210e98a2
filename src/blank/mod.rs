//! Blank-line and list-context management.
//!
//! The building blocks every cleanup pass is made of:
//!
//! - [`is_paragraph_blank`] classifies a single paragraph.
//! - [`is_within_list_context`] tells whether a plain paragraph sits between
//!   two items of the same list.
//! - [`insert_or_mark_blank_after`] / [`insert_or_mark_blank_before`] make
//!   sure a blank paragraph sits next to a body element.
//! - [`remove_trailing_blanks_in_table_cells`] prunes blanks at the end of
//!   table cells without ever emptying a cell.

mod insert;
mod list_context;
mod options;
mod predicate;
mod stats;
mod trailing;

pub use insert::{insert_or_mark_blank_after, insert_or_mark_blank_before, BlankLineOutcome};
pub use list_context::{is_within_list_context, is_within_list_context_in_cell};
pub use options::{
    BlankLineOptions, TrailingBlankOptions, DEFAULT_BLANK_STYLE, DEFAULT_SPACING_AFTER,
};
pub use predicate::is_paragraph_blank;
pub use stats::BlankLineStats;
pub use trailing::{remove_trailing_blanks_in_cell, remove_trailing_blanks_in_table_cells};
