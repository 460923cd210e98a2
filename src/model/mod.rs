//! Document model types.
//!
//! The model mirrors the body of a word-processing document: an ordered
//! sequence of paragraphs and tables, tables holding rows of cells, and
//! cells holding their own paragraph sequences.

mod block;
mod document;
mod paragraph;
mod table;

pub use block::Block;
pub use document::{Document, DocumentSummary, Metadata};
pub use paragraph::{
    InlineContent, Numbering, Paragraph, ParagraphStyle, TextRun, TextStyle,
};
pub use table::{Table, TableCell, TableRow};
