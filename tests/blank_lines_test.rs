//! Integration tests for blank classification, list context and blank-line policies.

use docspace::model::{Block, Document, InlineContent, Paragraph, Table, TableCell, TableRow};
use docspace::{
    insert_or_mark_blank_after, insert_or_mark_blank_before, is_paragraph_blank,
    is_within_list_context, is_within_list_context_in_cell, remove_trailing_blanks_in_table_cells,
    BlankLineOptions, BlankLineOutcome, TrailingBlankOptions,
};

fn item(num_id: u32) -> Block {
    Paragraph::list_item("item", num_id, 0).into()
}

fn blank() -> Block {
    Paragraph::new().into()
}

fn single_cell_doc(cell: TableCell) -> Document {
    let mut table = Table::new();
    table.add_row(TableRow::new(vec![cell]));
    let mut doc = Document::new();
    doc.add_table(table);
    doc
}

fn only_cell(doc: &Document) -> &TableCell {
    doc.tables().next().and_then(|t| t.cells().next()).unwrap()
}

// ==================== Blank Predicate ====================

#[test]
fn test_zero_items_is_blank() {
    assert!(is_paragraph_blank(&Paragraph::new()));
}

#[test]
fn test_hyperlink_or_image_is_never_blank() {
    for text in ["", "  ", "text"] {
        let mut with_link = Paragraph::with_text(text);
        with_link.add_hyperlink("", "https://example.com/doc");
        assert!(!is_paragraph_blank(&with_link));

        let mut with_image = Paragraph::with_text(text);
        with_image.add_image("rId3");
        assert!(!is_paragraph_blank(&with_image));
    }
}

#[test]
fn test_whitespace_runs_are_blank_until_one_character() {
    let mut p = Paragraph::new();
    p.add_text(" ");
    p.add_text("\t");
    p.add_text("\u{00A0}\n");
    assert!(is_paragraph_blank(&p));

    p.add_text(".");
    assert!(!is_paragraph_blank(&p));
}

#[test]
fn test_other_content_is_conservatively_not_blank() {
    let mut p = Paragraph::new();
    p.content.push(InlineContent::Other {
        kind: "fldSimple".to_string(),
    });
    assert!(!is_paragraph_blank(&p));
}

// ==================== List Context ====================

#[test]
fn test_list_item_is_not_within_list_context() {
    let doc = Document::from_blocks(vec![item(1), item(1), item(1)]);
    for i in 0..doc.len() {
        assert!(!is_within_list_context(&doc, i));
    }
}

#[test]
fn test_blank_between_same_and_different_lists() {
    let same = Document::from_blocks(vec![item(1), blank(), item(1)]);
    assert!(is_within_list_context(&same, 1));

    let different = Document::from_blocks(vec![item(1), blank(), item(2)]);
    assert!(!is_within_list_context(&different, 1));
}

#[test]
fn test_table_boundary_blocks_forward_scan() {
    let doc = Document::from_blocks(vec![item(1), blank(), Table::new().into(), item(1)]);
    assert!(!is_within_list_context(&doc, 1));
}

#[test]
fn test_first_and_last_positions() {
    let doc = Document::from_blocks(vec![blank(), item(1), blank(), item(1), blank()]);
    assert!(!is_within_list_context(&doc, 0));
    assert!(is_within_list_context(&doc, 2));
    assert!(!is_within_list_context(&doc, 4));
}

#[test]
fn test_cell_list_context() {
    let cell = TableCell::from_paragraph(Paragraph::list_item("a", 1, 0))
        .and(Paragraph::new())
        .and(Paragraph::list_item("b", 1, 0));
    assert!(is_within_list_context_in_cell(&cell, 1));

    let cell = TableCell::from_paragraph(Paragraph::list_item("a", 1, 0))
        .and(Paragraph::new())
        .and(Paragraph::list_item("b", 2, 0));
    assert!(!is_within_list_context_in_cell(&cell, 1));
}

// ==================== Insert or Mark ====================

#[test]
fn test_insert_after_twice_never_adds_twice() {
    let options = BlankLineOptions::default();
    let mut doc = Document::from_blocks(vec![
        Paragraph::with_text("Heading").into(),
        Paragraph::with_text("Body").into(),
    ]);

    let first = insert_or_mark_blank_after(&mut doc, 0, &options).unwrap();
    let count_after_first = doc.len();
    let second = insert_or_mark_blank_after(&mut doc, 0, &options).unwrap();

    assert_eq!(first, BlankLineOutcome::Added);
    assert_ne!(second, BlankLineOutcome::Added);
    assert_eq!(doc.len(), count_after_first);
}

#[test]
fn test_insert_after_existing_blank_marks_then_skips() {
    let options = BlankLineOptions::default();
    let mut doc = Document::from_blocks(vec![Paragraph::with_text("Heading").into(), blank()]);

    assert_eq!(
        insert_or_mark_blank_after(&mut doc, 0, &options).unwrap(),
        BlankLineOutcome::Marked
    );
    assert_eq!(
        insert_or_mark_blank_after(&mut doc, 0, &options).unwrap(),
        BlankLineOutcome::Skipped
    );
    assert_eq!(doc.len(), 2);
}

#[test]
fn test_insert_before_index_zero_is_skipped() {
    let options = BlankLineOptions::default();
    let mut doc = Document::from_blocks(vec![Table::new().into(), blank()]);
    let snapshot = doc.clone();

    assert_eq!(
        insert_or_mark_blank_before(&mut doc, 0, &options).unwrap(),
        BlankLineOutcome::Skipped
    );
    assert_eq!(doc, snapshot);
}

#[test]
fn test_generated_blank_uses_options() {
    let options = BlankLineOptions::new()
        .with_spacing_after(200)
        .with_spacing_before(100)
        .with_line_spacing(276)
        .with_style("Spacer");
    let mut doc = Document::from_blocks(vec![Table::new().into()]);
    insert_or_mark_blank_after(&mut doc, 0, &options).unwrap();

    let blank = doc.paragraph(1).unwrap();
    assert_eq!(blank.style.space_after, Some(200));
    assert_eq!(blank.style.space_before, Some(100));
    assert_eq!(blank.style.line_spacing, Some(276));
    assert_eq!(blank.style.name.as_deref(), Some("Spacer"));
    assert!(blank.preserved);
}

// ==================== Trailing Blanks ====================

#[test]
fn test_trailing_text_blank_blank() {
    let cell = TableCell::with_text("Text")
        .and(Paragraph::new())
        .and(Paragraph::new());
    let mut doc = single_cell_doc(cell);

    let removed = remove_trailing_blanks_in_table_cells(&mut doc, &TrailingBlankOptions::default());
    assert_eq!(removed, 2);
    assert_eq!(only_cell(&doc).paragraph_count(), 1);
    assert_eq!(only_cell(&doc).plain_text(), "Text");
}

#[test]
fn test_trailing_all_blank_keeps_floor() {
    let cell = TableCell::new().and(Paragraph::new()).and(Paragraph::new());
    let mut doc = single_cell_doc(cell);

    let removed = remove_trailing_blanks_in_table_cells(&mut doc, &TrailingBlankOptions::default());
    assert_eq!(removed, 2);
    assert_eq!(only_cell(&doc).paragraph_count(), 1);

    // A second pass cannot go below one paragraph.
    let removed = remove_trailing_blanks_in_table_cells(&mut doc, &TrailingBlankOptions::default());
    assert_eq!(removed, 0);
    assert_eq!(only_cell(&doc).paragraph_count(), 1);
}

#[test]
fn test_trailing_respects_preserved_when_asked() {
    let cell = TableCell::with_text("Text")
        .and(Paragraph::new().preserve())
        .and(Paragraph::new());
    let mut doc = single_cell_doc(cell);

    let options = TrailingBlankOptions::new().respect_preserved();
    let removed = remove_trailing_blanks_in_table_cells(&mut doc, &options);

    assert_eq!(removed, 1);
    let cell = only_cell(&doc);
    assert_eq!(cell.paragraph_count(), 2);
    assert_eq!(cell.paragraphs()[0].plain_text(), "Text");
    assert!(cell.paragraphs()[1].preserved);
}
