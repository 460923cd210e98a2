//! Body-level element types.

use super::{Paragraph, Table};
use serde::{Deserialize, Serialize};

/// A direct child of the document body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A paragraph
    Paragraph(Paragraph),

    /// A table
    Table(Table),

    /// Any other body element, carried through untouched
    Opaque {
        /// Element name as given by the host model (e.g. "sdt")
        name: String,
    },
}

impl Block {
    /// Create an opaque block.
    pub fn opaque(name: impl Into<String>) -> Self {
        Block::Opaque { name: name.into() }
    }

    /// Check if this block is a paragraph.
    pub fn is_paragraph(&self) -> bool {
        matches!(self, Block::Paragraph(_))
    }

    /// Check if this block is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, Block::Table(_))
    }

    /// Get the paragraph if this block is one.
    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Block::Paragraph(p) => Some(p),
            _ => None,
        }
    }

    /// Get the paragraph mutably if this block is one.
    pub fn as_paragraph_mut(&mut self) -> Option<&mut Paragraph> {
        match self {
            Block::Paragraph(p) => Some(p),
            _ => None,
        }
    }

    /// Get the table if this block is one.
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Block::Table(t) => Some(t),
            _ => None,
        }
    }

    /// Check if this block is a blank paragraph.
    pub fn is_blank_paragraph(&self) -> bool {
        self.as_paragraph().is_some_and(Paragraph::is_blank)
    }

    /// Check if this block is a list item paragraph.
    pub fn is_list_item(&self) -> bool {
        self.as_paragraph().is_some_and(Paragraph::is_list_item)
    }

    /// Get plain text content of the block.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Paragraph(p) => p.plain_text(),
            Block::Table(t) => t.plain_text(),
            Block::Opaque { .. } => String::new(),
        }
    }
}

impl From<Paragraph> for Block {
    fn from(paragraph: Paragraph) -> Self {
        Block::Paragraph(paragraph)
    }
}

impl From<Table> for Block {
    fn from(table: Table) -> Self {
        Block::Table(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_variants() {
        let para = Block::from(Paragraph::with_text("x"));
        assert!(para.is_paragraph());
        assert!(!para.is_table());
        assert!(!para.is_blank_paragraph());

        let table = Block::from(Table::new());
        assert!(table.is_table());
        assert!(table.as_paragraph().is_none());

        let opaque = Block::opaque("sdt");
        assert!(!opaque.is_paragraph());
        assert!(!opaque.is_blank_paragraph());
        assert_eq!(opaque.plain_text(), "");
    }

    #[test]
    fn test_list_item_block() {
        let item = Block::from(Paragraph::list_item("a", 1, 0));
        assert!(item.is_list_item());
        assert!(!Block::from(Table::new()).is_list_item());
    }
}
