//! Presentation layer: draws a table view into a cell buffer.
//!
//! Everything here is a pure function of the snapshot and the palette;
//! no view state is touched.

use crate::buffer::Buffer;
use crate::layout::Rect;
use crate::style::{Rgb, TextStyle};
use crate::text::{display_width, fit_to_width, Align};
use crate::theme::{Palette, Tone};

use super::column::{CellFormat, Column};
use super::paginate::page_window;
use super::row::{Row, Value};
use super::sort::SortDir;
use super::state::{TableSnapshot, TableView};

/// Gap between adjacent columns, in cells.
const COLUMN_GAP: u16 = 2;

/// Per-table render options supplied by the page.
#[derive(Debug, Clone, Copy)]
pub struct TableChrome<'a> {
    /// Message shown when the collection itself is empty.
    pub empty_message: &'a str,
    /// Caller-supplied action hint, right-aligned in the toolbar.
    pub actions: Option<&'a str>,
    /// Whether the search input currently owns the keyboard.
    pub search_focused: bool,
    /// Visible-row index to highlight as the cursor row.
    pub selected: Option<usize>,
}

impl Default for TableChrome<'_> {
    fn default() -> Self {
        Self {
            empty_message: "No data found.",
            actions: None,
            search_focused: false,
            selected: None,
        }
    }
}

/// Draw the toolbar, header, visible rows, and pagination footer.
pub fn draw_table(
    buf: &mut Buffer,
    area: Rect,
    view: &TableView,
    columns: &[Column],
    palette: &Palette,
    chrome: &TableChrome<'_>,
) {
    if area.is_empty() || area.height < 4 {
        return;
    }

    let snap = view.snapshot();

    let (toolbar, rest) = area.split_top(1);
    let (header, rest) = rest.split_top(1);
    let (body, footer) = rest.split_top(rest.height.saturating_sub(1));

    draw_toolbar(buf, toolbar, &snap, palette, chrome);
    draw_header(buf, header, &snap, columns, palette);

    if snap.rows.is_empty() {
        draw_empty(buf, body, &snap, palette, chrome);
    } else {
        draw_rows(buf, body, &snap, columns, palette, chrome.selected);
    }

    draw_footer(buf, footer, &snap, palette);
}

fn draw_toolbar(
    buf: &mut Buffer,
    area: Rect,
    snap: &TableSnapshot<'_>,
    palette: &Palette,
    chrome: &TableChrome<'_>,
) {
    if area.is_empty() {
        return;
    }

    let (label_fg, input_fg) = if chrome.search_focused {
        (palette.primary, palette.text)
    } else {
        (palette.muted, palette.muted)
    };

    buf.put_str(area.x, area.y, "/ ", label_fg, palette.background, TextStyle::bold());

    let query = if snap.search.is_empty() && !chrome.search_focused {
        "Search...".to_string()
    } else if chrome.search_focused {
        format!("{}▏", snap.search)
    } else {
        snap.search.to_string()
    };
    buf.put_str(
        area.x + 2,
        area.y,
        &query,
        input_fg,
        palette.background,
        TextStyle::new(),
    );

    if let Some(actions) = chrome.actions {
        let w = display_width(actions) as u16;
        if w < area.width {
            buf.put_str(
                area.right().saturating_sub(w),
                area.y,
                actions,
                palette.muted,
                palette.background,
                TextStyle::new(),
            );
        }
    }
}

fn draw_header(
    buf: &mut Buffer,
    area: Rect,
    snap: &TableSnapshot<'_>,
    columns: &[Column],
    palette: &Palette,
) {
    if area.is_empty() {
        return;
    }

    buf.fill_row(area.x, area.y, area.width, palette.surface);

    let mut x = area.x;
    for col in columns {
        if x >= area.right() {
            break;
        }
        let marker = if col.sortable {
            if snap.sort_key == Some(col.key.as_str()) {
                match snap.sort_dir {
                    SortDir::Ascending => " ▲",
                    SortDir::Descending => " ▼",
                }
            } else {
                " ↕"
            }
        } else {
            ""
        };
        let label = format!("{}{}", col.label, marker);
        let text = fit_to_width(&label, col.width as usize, Align::Left);
        buf.put_str(x, area.y, &text, palette.text, palette.surface, TextStyle::bold());
        x += col.width + COLUMN_GAP;
    }
}

fn draw_rows(
    buf: &mut Buffer,
    area: Rect,
    snap: &TableSnapshot<'_>,
    columns: &[Column],
    palette: &Palette,
    selected: Option<usize>,
) {
    for (i, row) in snap.rows.iter().enumerate() {
        let y = area.y + i as u16;
        if y >= area.bottom() {
            break;
        }
        let bg = if selected == Some(i) {
            buf.fill_row(area.x, y, area.width, palette.surface);
            palette.surface
        } else {
            palette.background
        };
        let mut x = area.x;
        for col in columns {
            if x >= area.right() {
                break;
            }
            let (text, fg, style, align) = format_cell(col, row, palette);
            let cell = fit_to_width(&text, col.width as usize, align);
            buf.put_str(x, y, &cell, fg, bg, style);
            x += col.width + COLUMN_GAP;
        }
    }
}

/// Resolve one cell to its display text, color, style, and alignment.
fn format_cell(col: &Column, row: &Row, palette: &Palette) -> (String, Rgb, TextStyle, Align) {
    let value = row.get(&col.key).unwrap_or(&Value::Null);

    match col.format {
        CellFormat::Custom(f) => (f(value, row), palette.text, TextStyle::new(), Align::Left),
        _ if value.is_null() => (
            "—".to_string(),
            palette.muted,
            TextStyle::new(),
            Align::Left,
        ),
        CellFormat::Text => (
            value.text().unwrap_or_default(),
            palette.text,
            TextStyle::new(),
            Align::Left,
        ),
        CellFormat::Number => (
            value.text().unwrap_or_default(),
            palette.text,
            TextStyle::new(),
            Align::Right,
        ),
        CellFormat::Badge => {
            let text = value.text().unwrap_or_default();
            let tone = Tone::for_status(&text);
            (text, palette.tone(tone), TextStyle::bold(), Align::Left)
        }
    }
}

fn draw_empty(
    buf: &mut Buffer,
    area: Rect,
    snap: &TableSnapshot<'_>,
    palette: &Palette,
    chrome: &TableChrome<'_>,
) {
    if area.is_empty() {
        return;
    }

    // "no rows at all" and "nothing matched" read differently
    let message = if snap.has_rows && !snap.search.trim().is_empty() {
        format!("No results for \"{}\"", snap.search)
    } else {
        chrome.empty_message.to_string()
    };

    let y = area.y + area.height / 3;
    let w = display_width(&message) as u16;
    let x = area.x + area.width.saturating_sub(w) / 2;
    buf.put_str(x, y, &message, palette.muted, palette.background, TextStyle::new());
}

fn draw_footer(buf: &mut Buffer, area: Rect, snap: &TableSnapshot<'_>, palette: &Palette) {
    if area.is_empty() {
        return;
    }

    let summary = if snap.total_rows == 0 {
        "Showing 0 of 0".to_string()
    } else {
        format!("Showing {}–{} of {}", snap.start, snap.end, snap.total_rows)
    };
    buf.put_str(
        area.x,
        area.y,
        &summary,
        palette.muted,
        palette.background,
        TextStyle::new(),
    );

    if snap.total_pages <= 1 {
        return;
    }

    // "‹ 1 2 [3] 4 5 ›" with the arrows dimmed at their ends
    let window = page_window(snap.page, snap.total_pages);
    let mut controls: Vec<String> = Vec::with_capacity(window.len() + 2);
    controls.push("‹".to_string());
    for p in &window {
        if *p == snap.page {
            controls.push(format!("[{}]", p));
        } else {
            controls.push(p.to_string());
        }
    }
    controls.push("›".to_string());
    let line = controls.join(" ");

    let w = display_width(&line) as u16;
    if w >= area.width {
        return;
    }
    let mut x = area.right() - w;

    for (i, part) in controls.iter().enumerate() {
        let is_prev = i == 0;
        let is_next = i == controls.len() - 1;
        let (fg, style) = if is_prev && snap.page == 1 || is_next && snap.page == snap.total_pages
        {
            (palette.muted, TextStyle::dim())
        } else if part.starts_with('[') {
            (palette.primary, TextStyle::bold())
        } else {
            (palette.text, TextStyle::new())
        };
        buf.put_str(x, area.y, part, fg, palette.background, style);
        x += display_width(part) as u16 + 1;
    }
}
