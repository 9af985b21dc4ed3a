use tabula::buffer::Buffer;
use tabula::layout::Rect;
use tabula::table::render::{draw_table, TableChrome};
use tabula::table::{CellFormat, Column, Row, TableView, Value};
use tabula::theme::Palette;

fn columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name", 14).sortable(),
        Column::new("status", "Status", 10)
            .sortable()
            .format(CellFormat::Badge),
        Column::new("count", "Count", 6).format(CellFormat::Number),
    ]
}

fn sample_rows() -> Vec<Row> {
    vec![
        Row::new()
            .set("name", "WS-FINANCE-01")
            .set("status", "Online")
            .set("count", 12i64),
        Row::new()
            .set("name", "WS-HR-05")
            .set("status", "Offline")
            .set("count", 3i64),
        Row::new()
            .set("name", "MBP-DEV-12")
            .set("status", "Online")
            .set("count", Value::Null),
    ]
}

fn draw(view: &TableView, chrome: &TableChrome<'_>) -> Buffer {
    let mut buf = Buffer::new(60, 10);
    let palette = Palette::dark();
    draw_table(
        &mut buf,
        Rect::from_size(60, 10),
        view,
        &columns(),
        &palette,
        chrome,
    );
    buf
}

#[test]
fn test_header_shows_labels_and_sort_markers() {
    let mut view = TableView::with_rows(10, sample_rows());
    view.toggle_sort("name");

    let buf = draw(&view, &TableChrome::default());
    let header = buf.row_text(1);
    assert!(header.contains("Name ▲"), "header was: {header:?}");
    // Sortable but inactive columns advertise sortability
    assert!(header.contains("Status ↕"));
    // Non-sortable columns carry no marker
    assert!(header.contains("Count"));
    assert!(!header.contains("Count ↕"));
}

#[test]
fn test_descending_marker() {
    let mut view = TableView::with_rows(10, sample_rows());
    view.toggle_sort("name");
    view.toggle_sort("name");

    let buf = draw(&view, &TableChrome::default());
    assert!(buf.row_text(1).contains("Name ▼"));
}

#[test]
fn test_rows_render_in_columns() {
    let view = TableView::with_rows(10, sample_rows());
    let buf = draw(&view, &TableChrome::default());

    let first = buf.row_text(2);
    assert!(first.starts_with("WS-FINANCE-01"));
    assert!(first.contains("Online"));
    // Number cells right-align inside their column
    assert!(first.contains("    12"));
}

#[test]
fn test_null_renders_placeholder() {
    let view = TableView::with_rows(10, sample_rows());
    let buf = draw(&view, &TableChrome::default());
    assert!(buf.row_text(4).contains("—"));
}

#[test]
fn test_empty_collection_message() {
    let view = TableView::new(10);
    let chrome = TableChrome {
        empty_message: "No computers registered.",
        ..Default::default()
    };
    let buf = draw(&view, &chrome);

    let all: Vec<String> = (0..10).map(|y| buf.row_text(y)).collect();
    assert!(all.iter().any(|l| l.contains("No computers registered.")));
}

#[test]
fn test_no_match_message_differs_from_empty() {
    let mut view = TableView::with_rows(10, sample_rows());
    view.set_search("zebra");
    let chrome = TableChrome {
        empty_message: "No computers registered.",
        ..Default::default()
    };
    let buf = draw(&view, &chrome);

    let all: Vec<String> = (0..10).map(|y| buf.row_text(y)).collect();
    assert!(all.iter().any(|l| l.contains("No results for \"zebra\"")));
    assert!(!all.iter().any(|l| l.contains("No computers registered.")));
}

#[test]
fn test_selected_row_is_highlighted() {
    let view = TableView::with_rows(10, sample_rows());
    let chrome = TableChrome {
        selected: Some(1),
        ..Default::default()
    };
    let buf = draw(&view, &chrome);

    let palette = Palette::dark();
    // Rows start below the toolbar and header
    let cursor_bg = buf.get(0, 3).map(|c| c.bg);
    let plain_bg = buf.get(0, 2).map(|c| c.bg);
    assert_eq!(cursor_bg, Some(palette.surface));
    assert_eq!(plain_bg, Some(palette.background));
}

#[test]
fn test_footer_summary() {
    let view = TableView::with_rows(2, sample_rows());
    let buf = draw(&view, &TableChrome::default());
    let footer = buf.row_text(9);
    assert!(footer.contains("Showing 1–2 of 3"), "footer was: {footer:?}");
    assert!(footer.contains("[1] 2"));
}

#[test]
fn test_footer_marks_current_page() {
    let mut view = TableView::with_rows(2, sample_rows());
    view.set_page(2);
    let buf = draw(&view, &TableChrome::default());
    let footer = buf.row_text(9);
    assert!(footer.contains("Showing 3–3 of 3"));
    assert!(footer.contains("1 [2]"));
}

#[test]
fn test_toolbar_shows_query() {
    let mut view = TableView::with_rows(10, sample_rows());
    view.set_search("fin");
    let buf = draw(&view, &TableChrome::default());
    assert!(buf.row_text(0).contains("fin"));
}

#[test]
fn test_toolbar_action_hint() {
    let view = TableView::with_rows(10, sample_rows());
    let chrome = TableChrome {
        actions: Some("enter: view"),
        ..Default::default()
    };
    let buf = draw(&view, &chrome);
    assert!(buf.row_text(0).contains("enter: view"));
}
