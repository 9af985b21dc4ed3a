//! The generic listing page every module shares.
//!
//! A module contributes a title, column descriptors, and a fetch; this
//! page owns the table view state, the search input, and the cursor
//! row, and turns key presses into view transitions.

use tabula::buffer::Buffer;
use tabula::event::{Key, Modifiers};
use tabula::input::{InputResult, TextInput};
use tabula::layout::Rect;
use tabula::style::TextStyle;
use tabula::table::render::{TableChrome, draw_table};
use tabula::table::{Column, Row, TableView};
use tabula::theme::Palette;
use uuid::Uuid;

/// What a key press did to the page.
pub enum ListOutcome {
    /// The page handled the key.
    Consumed,
    /// The cursor row was activated; carries the record id and a copy
    /// of the row for the caller's action.
    Activate(Uuid, Row),
    /// Not a page key; the caller should handle it.
    Ignored,
}

pub struct ListPage {
    title: &'static str,
    columns: Vec<Column>,
    view: TableView,
    ids: Vec<Uuid>,
    empty: &'static str,
    action_hint: Option<&'static str>,
    search: TextInput,
    search_focused: bool,
    selected: usize,
}

impl ListPage {
    pub fn new(
        title: &'static str,
        columns: Vec<Column>,
        page_size: usize,
        empty: &'static str,
        action_hint: Option<&'static str>,
    ) -> Self {
        // Only declared columns are searchable; hidden bookkeeping
        // fields stay out of the filter.
        let fields: Vec<String> = columns.iter().map(|c| c.key.clone()).collect();
        Self {
            title,
            columns,
            view: TableView::new(page_size).search_fields(fields),
            ids: Vec::new(),
            empty,
            action_hint,
            search: TextInput::new(),
            search_focused: false,
            selected: 0,
        }
    }

    /// Replace the collection. Resets the page and cursor; the search
    /// text stays, so a refresh keeps the operator's filter.
    pub fn set_data(&mut self, rows: Vec<Row>, ids: Vec<Uuid>) {
        debug_assert_eq!(rows.len(), ids.len());
        self.view.set_rows(rows);
        self.ids = ids;
        self.selected = 0;
    }

    /// The record under the cursor, if any.
    pub fn selected(&self) -> Option<(Uuid, Row)> {
        let snap = self.view.snapshot();
        if snap.rows.is_empty() {
            return None;
        }
        let pos = self.selected.min(snap.rows.len() - 1);
        let idx = snap.indices[pos];
        Some((self.ids.get(idx).copied()?, snap.rows[pos].clone()))
    }

    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> ListOutcome {
        if self.search_focused {
            return self.handle_search_key(key, modifiers);
        }

        match key {
            Key::Char('/') => {
                self.search_focused = true;
                ListOutcome::Consumed
            }
            Key::Left | Key::PageUp | Key::Char('p') => {
                self.view.prev_page();
                self.selected = 0;
                ListOutcome::Consumed
            }
            Key::Right | Key::PageDown | Key::Char('n') => {
                self.view.next_page();
                self.selected = 0;
                ListOutcome::Consumed
            }
            Key::Up => {
                self.selected = self.selected.saturating_sub(1);
                ListOutcome::Consumed
            }
            Key::Down => {
                let len = self.view.snapshot().rows.len();
                if len > 0 {
                    self.selected = (self.selected + 1).min(len - 1);
                }
                ListOutcome::Consumed
            }
            Key::Char('s') => {
                self.cycle_sort();
                ListOutcome::Consumed
            }
            Key::Char('r') => {
                if let Some(current) = self.view.sort_key().map(str::to_string) {
                    self.view.toggle_sort(&current);
                    self.selected = 0;
                }
                ListOutcome::Consumed
            }
            Key::Enter => match self.selected() {
                Some((id, row)) => ListOutcome::Activate(id, row),
                None => ListOutcome::Consumed,
            },
            _ => ListOutcome::Ignored,
        }
    }

    fn handle_search_key(&mut self, key: Key, modifiers: Modifiers) -> ListOutcome {
        if key == Key::Escape {
            self.search_focused = false;
            return ListOutcome::Consumed;
        }
        match self.search.handle_key(key, modifiers) {
            InputResult::Changed => {
                self.view.set_search(self.search.text());
                self.selected = 0;
            }
            InputResult::Submitted => self.search_focused = false,
            InputResult::Handled | InputResult::Ignored => {}
        }
        // The search box owns the keyboard while focused
        ListOutcome::Consumed
    }

    /// Advance sorting to the next sortable column; past the last one,
    /// sorting clears back to insertion order.
    fn cycle_sort(&mut self) {
        let sortable: Vec<&str> = self
            .columns
            .iter()
            .filter(|c| c.sortable)
            .map(|c| c.key.as_str())
            .collect();
        if sortable.is_empty() {
            return;
        }

        let next = match self.view.sort_key() {
            None => Some(sortable[0]),
            Some(current) => sortable
                .iter()
                .position(|k| *k == current)
                .and_then(|i| sortable.get(i + 1))
                .copied(),
        };
        match next {
            Some(key) => {
                let key = key.to_string();
                self.view.toggle_sort(&key);
            }
            None => self.view.clear_sort(),
        }
        self.selected = 0;
    }

    pub fn draw(&self, buf: &mut Buffer, area: Rect, palette: &Palette) {
        if area.is_empty() || area.height < 6 {
            return;
        }

        let (title, rest) = area.split_top(2);
        buf.put_str(
            title.x,
            title.y,
            self.title,
            palette.text,
            palette.background,
            TextStyle::bold(),
        );

        let len = self.view.snapshot().rows.len();
        let selected = if len == 0 {
            None
        } else {
            Some(self.selected.min(len - 1))
        };
        let chrome = TableChrome {
            empty_message: self.empty,
            actions: self.action_hint,
            search_focused: self.search_focused,
            selected,
        };
        draw_table(buf, rest, &self.view, &self.columns, palette, &chrome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula::table::SortDir;

    fn page_with_rows(n: i64) -> ListPage {
        let mut page = ListPage::new(
            "Things",
            vec![
                Column::new("name", "Name", 12).sortable(),
                Column::new("count", "Count", 6).sortable(),
                Column::new("note", "Note", 10),
            ],
            5,
            "No things.",
            None,
        );
        let rows: Vec<Row> = (0..n)
            .map(|i| Row::new().set("name", format!("thing-{i}")).set("count", i))
            .collect();
        let ids: Vec<Uuid> = (0..n).map(|i| Uuid::from_u128(i as u128 + 1)).collect();
        page.set_data(rows, ids);
        page
    }

    #[test]
    fn sort_cycles_through_sortable_columns_then_clears() {
        let mut page = page_with_rows(3);
        page.cycle_sort();
        assert_eq!(page.view.sort_key(), Some("name"));
        page.cycle_sort();
        assert_eq!(page.view.sort_key(), Some("count"));
        page.cycle_sort();
        assert_eq!(page.view.sort_key(), None);
    }

    #[test]
    fn cursor_follows_the_sorted_order() {
        let mut page = page_with_rows(3);
        // Descending by count puts the last-inserted row under the cursor
        page.handle_key(Key::Char('s'), Modifiers::default());
        page.handle_key(Key::Char('s'), Modifiers::default());
        page.handle_key(Key::Char('r'), Modifiers::default());
        assert_eq!(page.view.sort_dir(), SortDir::Descending);

        let (id, row) = page.selected().unwrap();
        assert_eq!(id, Uuid::from_u128(3));
        assert_eq!(
            row.get("name").and_then(tabula::table::Value::text),
            Some("thing-2".to_string())
        );
    }

    #[test]
    fn typed_search_filters_and_escape_unfocuses() {
        let mut page = page_with_rows(12);
        page.handle_key(Key::Char('/'), Modifiers::default());
        for c in "thing-11".chars() {
            page.handle_key(Key::Char(c), Modifiers::default());
        }
        assert_eq!(page.view.snapshot().total_rows, 1);

        page.handle_key(Key::Escape, Modifiers::default());
        // Search text survives unfocusing
        assert_eq!(page.view.search(), "thing-11");
        // And keys fall through to the page again
        assert!(matches!(
            page.handle_key(Key::Char('q'), Modifiers::default()),
            ListOutcome::Ignored
        ));
    }

    #[test]
    fn selection_is_empty_when_nothing_matches() {
        let mut page = page_with_rows(3);
        page.handle_key(Key::Char('/'), Modifiers::default());
        page.handle_key(Key::Char('z'), Modifiers::default());
        assert!(page.selected().is_none());
        assert!(matches!(
            page.handle_key(Key::Enter, Modifiers::default()),
            ListOutcome::Consumed
        ));
    }
}
