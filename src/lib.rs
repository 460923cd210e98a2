//! # docspace
//!
//! Blank-line and list-context management for word-processing documents.
//!
//! This library works on the body tree of a document (paragraphs and tables,
//! tables holding rows of cells, cells holding paragraphs) and decides where
//! blank paragraphs belong: where one must be inserted, where an existing one
//! can be reused, and where trailing emptiness can be pruned.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docspace::{load_file, save_file, CleanupPipeline, CleanupPreset, JsonFormat};
//!
//! fn main() -> docspace::Result<()> {
//!     let mut doc = load_file("document.json")?;
//!
//!     let stats = CleanupPipeline::from_preset(CleanupPreset::Standard).process(&mut doc)?;
//!     println!("{} blanks added, {} removed", stats.added, stats.removed);
//!
//!     save_file(&doc, "document.json", JsonFormat::Pretty)
//! }
//! ```
//!
//! ## Features
//!
//! - **Blank predicate**: whitespace-only runs are blank, links and images never are
//! - **List context**: spacer paragraphs between items of the same list are recognized
//! - **Insert-or-mark**: idempotent blank insertion with added/marked/skipped outcomes
//! - **Cell pruning**: trailing blanks go, the last paragraph of a cell always stays
//! - **Parallel processing**: independent documents are cleaned up with Rayon

pub mod blank;
pub mod cleanup;
pub mod error;
pub mod json;
pub mod model;

// Re-export commonly used types
pub use blank::{
    insert_or_mark_blank_after, insert_or_mark_blank_before, is_paragraph_blank,
    is_within_list_context, is_within_list_context_in_cell, remove_trailing_blanks_in_table_cells,
    BlankLineOptions, BlankLineOutcome, BlankLineStats, TrailingBlankOptions,
};
pub use cleanup::{process_documents, CleanupOptions, CleanupPipeline, CleanupPreset};
pub use error::{Error, Result};
pub use json::JsonFormat;
pub use model::{
    Block, Document, DocumentSummary, InlineContent, Metadata, Numbering, Paragraph,
    ParagraphStyle, Table, TableCell, TableRow, TextRun, TextStyle,
};

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load a document from a JSON file.
///
/// The file path is recorded in [`Metadata::source`] when not already set.
///
/// # Example
///
/// ```no_run
/// use docspace::load_file;
///
/// let doc = load_file("document.json").unwrap();
/// println!("Body elements: {}", doc.len());
/// ```
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let mut doc = json::from_reader(reader)?;
    if doc.metadata.source.is_none() {
        doc.metadata.source = Some(path.display().to_string());
    }
    log::debug!("loaded {} ({} body elements)", path.display(), doc.len());
    Ok(doc)
}

/// Write a document to a JSON file.
pub fn save_file<P: AsRef<Path>>(doc: &Document, path: P, format: JsonFormat) -> Result<()> {
    let json = json::to_json(doc, format)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Load, clean up and save a document in one call.
///
/// # Example
///
/// ```no_run
/// use docspace::{tidy_file, CleanupOptions};
///
/// let stats = tidy_file("in.json", "out.json", &CleanupOptions::aggressive()).unwrap();
/// println!("{} changes", stats.total_changes());
/// ```
pub fn tidy_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: &CleanupOptions,
) -> Result<BlankLineStats> {
    let mut doc = load_file(input)?;
    let stats = CleanupPipeline::new(options.clone()).process(&mut doc)?;
    save_file(&doc, output, JsonFormat::Pretty)?;
    Ok(stats)
}
