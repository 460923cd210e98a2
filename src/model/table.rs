//! Table types.

use super::Paragraph;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A table structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Rows in the table
    #[serde(default)]
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns (based on first row).
    pub fn column_count(&self) -> usize {
        self.rows.first().map(|r| r.cells.len()).unwrap_or(0)
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over all cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &TableCell> {
        self.rows.iter().flat_map(|r| &r.cells)
    }

    /// Iterate mutably over all cells, row by row.
    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut TableCell> {
        self.rows.iter_mut().flat_map(|r| &mut r.cells)
    }

    /// Get plain text representation of the table.
    pub fn plain_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A table row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in the row
    #[serde(default)]
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }

    /// Create a row from text values.
    pub fn from_strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::new(values.into_iter().map(TableCell::with_text).collect())
    }

    /// Get plain text representation.
    pub fn plain_text(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.plain_text())
            .collect::<Vec<_>>()
            .join("\t")
    }
}

/// A table cell.
///
/// A cell always holds at least one paragraph. The paragraph list is only
/// reachable through methods that cannot shrink it below one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CellRepr")]
pub struct TableCell {
    paragraphs: Vec<Paragraph>,
}

#[derive(Deserialize)]
struct CellRepr {
    paragraphs: Vec<Paragraph>,
}

impl TryFrom<CellRepr> for TableCell {
    type Error = String;

    fn try_from(repr: CellRepr) -> std::result::Result<Self, Self::Error> {
        Self::try_from_paragraphs(repr.paragraphs).map_err(|e| e.to_string())
    }
}

impl TableCell {
    /// Create a cell holding a single empty paragraph.
    pub fn new() -> Self {
        Self::from_paragraph(Paragraph::new())
    }

    /// Create a cell with text content.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self::from_paragraph(Paragraph::with_text(text))
    }

    /// Create a cell from a single paragraph.
    pub fn from_paragraph(paragraph: Paragraph) -> Self {
        Self {
            paragraphs: vec![paragraph],
        }
    }

    /// Create a cell with multiple paragraphs.
    ///
    /// Fails with [`Error::EmptyCell`] if `paragraphs` is empty.
    pub fn try_from_paragraphs(paragraphs: Vec<Paragraph>) -> Result<Self> {
        if paragraphs.is_empty() {
            return Err(Error::EmptyCell);
        }
        Ok(Self { paragraphs })
    }

    /// Append a paragraph.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Append a paragraph and return self.
    pub fn and(mut self, paragraph: Paragraph) -> Self {
        self.add_paragraph(paragraph);
        self
    }

    /// Insert a paragraph at `index` (which may equal the paragraph count).
    pub fn insert_paragraph(&mut self, index: usize, paragraph: Paragraph) -> Result<()> {
        let len = self.paragraphs.len();
        if index > len {
            return Err(Error::ParagraphOutOfRange { index, len });
        }
        self.paragraphs.insert(index, paragraph);
        Ok(())
    }

    /// Remove the paragraph at `index`.
    ///
    /// Returns `None` when the index is out of range or the paragraph is
    /// the only one left in the cell.
    pub fn remove_paragraph(&mut self, index: usize) -> Option<Paragraph> {
        if self.paragraphs.len() <= 1 || index >= self.paragraphs.len() {
            return None;
        }
        Some(self.paragraphs.remove(index))
    }

    /// Remove the last paragraph unless it is the only one left.
    pub fn pop_paragraph(&mut self) -> Option<Paragraph> {
        if self.paragraphs.len() <= 1 {
            return None;
        }
        self.paragraphs.pop()
    }

    /// Paragraphs in reading order.
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Mutable access to the paragraphs (cannot change their count).
    pub fn paragraphs_mut(&mut self) -> &mut [Paragraph] {
        &mut self.paragraphs
    }

    /// Get the number of paragraphs (always at least one).
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Get plain text content.
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.plain_text())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Check if every paragraph in the cell is blank.
    pub fn is_blank(&self) -> bool {
        self.paragraphs.iter().all(Paragraph::is_blank)
    }
}

impl Default for TableCell {
    fn default() -> Self {
        Self::new()
    }
}
