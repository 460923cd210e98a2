//! Document-level types.

use super::{Block, Paragraph, Table};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A word-processing document body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata (title, author, etc.)
    #[serde(default)]
    pub metadata: Metadata,

    /// Body elements in reading order
    #[serde(default)]
    pub body: Vec<Block>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from body blocks.
    pub fn from_blocks(body: Vec<Block>) -> Self {
        Self {
            metadata: Metadata::default(),
            body,
        }
    }

    /// Get the number of body elements.
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the document has no body elements.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Add a block to the body.
    pub fn add_block(&mut self, block: Block) {
        self.body.push(block);
    }

    /// Add a paragraph to the body.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.body.push(Block::Paragraph(paragraph));
    }

    /// Add a table to the body.
    pub fn add_table(&mut self, table: Table) {
        self.body.push(Block::Table(table));
    }

    /// Get a body element by index.
    pub fn get(&self, index: usize) -> Option<&Block> {
        self.body.get(index)
    }

    /// Get a body paragraph by index.
    pub fn paragraph(&self, index: usize) -> Option<&Paragraph> {
        self.body.get(index).and_then(Block::as_paragraph)
    }

    /// Insert a block at `index` (which may equal the body length).
    pub fn insert_block(&mut self, index: usize, block: Block) -> Result<()> {
        let len = self.body.len();
        if index > len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        self.body.insert(index, block);
        Ok(())
    }

    /// Remove and return the block at `index`.
    pub fn remove_block(&mut self, index: usize) -> Result<Block> {
        let len = self.body.len();
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        Ok(self.body.remove(index))
    }

    /// Iterate over body tables.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.body.iter().filter_map(Block::as_table)
    }

    /// Iterate mutably over body tables.
    pub fn tables_mut(&mut self) -> impl Iterator<Item = &mut Table> {
        self.body.iter_mut().filter_map(|b| match b {
            Block::Table(t) => Some(t),
            _ => None,
        })
    }

    /// Compute structural counts for the document.
    pub fn summary(&self) -> DocumentSummary {
        let mut summary = DocumentSummary::default();
        for block in &self.body {
            match block {
                Block::Paragraph(p) => summary.count_paragraph(p),
                Block::Table(t) => {
                    summary.table_count += 1;
                    for cell in t.cells() {
                        summary.cell_count += 1;
                        cell.paragraphs()
                            .iter()
                            .for_each(|p| summary.count_paragraph(p));
                    }
                }
                Block::Opaque { .. } => summary.opaque_count += 1,
            }
        }
        summary
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.body
            .iter()
            .map(Block::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Document author
    pub author: Option<String>,

    /// Originating file, if the document was loaded from one
    pub source: Option<String>,
}

/// Structural counts of a document, including paragraphs inside cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    /// Number of paragraphs (body and cells)
    pub paragraph_count: usize,

    /// Number of blank paragraphs
    pub blank_count: usize,

    /// Number of preserved paragraphs
    pub preserved_count: usize,

    /// Number of list item paragraphs
    pub list_item_count: usize,

    /// Number of body tables
    pub table_count: usize,

    /// Number of table cells
    pub cell_count: usize,

    /// Number of opaque body elements
    pub opaque_count: usize,
}

impl DocumentSummary {
    fn count_paragraph(&mut self, p: &Paragraph) {
        self.paragraph_count += 1;
        if p.is_blank() {
            self.blank_count += 1;
        }
        if p.preserved {
            self.preserved_count += 1;
        }
        if p.is_list_item() {
            self.list_item_count += 1;
        }
    }
}
