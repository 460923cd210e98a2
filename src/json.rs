//! JSON interchange for documents.

use std::io::Read;

use crate::error::Result;
use crate::model::Document;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Parse a document from a JSON string.
pub fn from_json(json: &str) -> Result<Document> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a document from a reader yielding JSON.
pub fn from_reader<R: Read>(reader: R) -> Result<Document> {
    Ok(serde_json::from_reader(reader)?)
}

/// Convert a document to JSON.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc)?,
        JsonFormat::Compact => serde_json::to_string(doc)?,
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::{Block, Paragraph, Table, TableCell, TableRow};

    #[test]
    fn test_to_json_pretty() {
        let mut doc = Document::new();
        doc.metadata.title = Some("Test".to_string());
        doc.add_paragraph(Paragraph::with_text("Hello"));

        let json = to_json(&doc, JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"title\""));
        assert!(json.contains("\"type\": \"paragraph\""));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let mut doc = Document::new();
        doc.add_block(Block::opaque("sdt"));

        let json = to_json(&doc, JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains(r#"{"type":"opaque","name":"sdt"}"#));
    }

    #[test]
    fn test_from_json_tagged_layout() {
        let json = r#"{
            "body": [
                {"type": "paragraph", "numbering": {"num_id": 2, "level": 1},
                 "content": [{"type": "run", "text": "Item"}]},
                {"type": "paragraph", "content": [
                    {"type": "hyperlink", "text": "", "url": "https://example.com"}
                ]},
                {"type": "table", "rows": [{"cells": [{"paragraphs": [{}]}]}]}
            ]
        }"#;
        let doc = from_json(json).unwrap();

        assert_eq!(doc.len(), 3);
        assert_eq!(doc.paragraph(0).unwrap().num_id(), Some(2));
        assert!(!doc.paragraph(1).unwrap().is_blank());
        assert!(doc.body[2].is_table());
    }

    #[test]
    fn test_round_trip_preserves_tree() {
        let mut table = Table::new();
        table.add_row(TableRow::new(vec![TableCell::with_text("a").and(Paragraph::new().preserve())]));
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::list_item("x", 1, 0));
        doc.add_table(table);

        let json = to_json(&doc, JsonFormat::Compact).unwrap();
        assert_eq!(from_json(&json).unwrap(), doc);
    }

    #[test]
    fn test_empty_cell_is_rejected() {
        let json = r#"{"body": [{"type": "table", "rows": [{"cells": [{"paragraphs": []}]}]}]}"#;
        assert!(matches!(from_json(json), Err(Error::Serialization(_))));
    }

    #[test]
    fn test_from_reader() {
        let json = br#"{"body": [{"type": "paragraph"}]}"#;
        let doc = from_reader(&json[..]).unwrap();
        assert!(doc.body[0].is_blank_paragraph());
    }
}
