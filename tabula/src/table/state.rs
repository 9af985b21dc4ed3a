//! The table view-state machine.

use super::filter::filter_rows;
use super::paginate::{clamp_page, page_bounds, total_pages};
use super::row::Row;
use super::sort::{sort_order, SortDir};

/// Mutable search/sort/page state private to one table view instance.
///
/// The derived pipeline is
/// `rows → filter(search) → sort(sort_key, sort_dir) → paginate(page)`;
/// each [`TableView::snapshot`] recomputes it from current state, so the
/// visible slice is always a pure function of the five fields.
#[derive(Debug, Clone)]
pub struct TableView {
    rows: Vec<Row>,
    search: String,
    page: usize,
    page_size: usize,
    sort_key: Option<String>,
    sort_dir: SortDir,
    search_fields: Option<Vec<String>>,
}

impl TableView {
    pub fn new(page_size: usize) -> Self {
        Self {
            rows: Vec::new(),
            search: String::new(),
            page: 1,
            page_size: page_size.max(1),
            sort_key: None,
            sort_dir: SortDir::Ascending,
            search_fields: None,
        }
    }

    pub fn with_rows(page_size: usize, rows: Vec<Row>) -> Self {
        let mut view = Self::new(page_size);
        view.rows = rows;
        view
    }

    /// Restrict searching to the given fields (builder). The default
    /// searches every field.
    pub fn search_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Current page, clamped against the filtered collection.
    pub fn page(&self) -> usize {
        clamp_page(self.page, self.total_pages())
    }

    pub fn sort_key(&self) -> Option<&str> {
        self.sort_key.as_deref()
    }

    pub fn sort_dir(&self) -> SortDir {
        self.sort_dir
    }

    /// Rows surviving the current filter.
    pub fn total_rows(&self) -> usize {
        filter_rows(&self.rows, &self.search, self.search_fields.as_deref()).len()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_rows(), self.page_size)
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Replace the underlying collection. Always returns to page 1 so a
    /// shrinking collection can never strand the view past its end.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        self.page = 1;
    }

    /// Set the search text and return to page 1.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
        self.page = 1;
    }

    /// Sort by `key`: a repeated key toggles direction, a new key sorts
    /// ascending. Either way the view returns to page 1.
    pub fn toggle_sort(&mut self, key: &str) {
        if self.sort_key.as_deref() == Some(key) {
            self.sort_dir = self.sort_dir.toggled();
        } else {
            self.sort_key = Some(key.to_string());
            self.sort_dir = SortDir::Ascending;
        }
        self.page = 1;
    }

    /// Clear sorting, restoring insertion order.
    pub fn clear_sort(&mut self) {
        self.sort_key = None;
        self.sort_dir = SortDir::Ascending;
    }

    /// Jump to a page; out-of-range values clamp on read.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn next_page(&mut self) {
        self.page = clamp_page(self.page() + 1, self.total_pages());
    }

    pub fn prev_page(&mut self) {
        self.page = clamp_page(self.page().saturating_sub(1), self.total_pages());
    }

    // -------------------------------------------------------------------------
    // Derived pipeline
    // -------------------------------------------------------------------------

    fn order(&self) -> Vec<usize> {
        let mut order = filter_rows(&self.rows, &self.search, self.search_fields.as_deref());
        if let Some(key) = &self.sort_key {
            sort_order(&self.rows, &mut order, key, self.sort_dir);
        }
        order
    }

    /// Compute the visible slice and its metadata in one pass.
    pub fn snapshot(&self) -> TableSnapshot<'_> {
        let order = self.order();
        let total_rows = order.len();
        let pages = total_pages(total_rows, self.page_size);
        let page = clamp_page(self.page, pages);
        let (start, end) = page_bounds(page, self.page_size, total_rows);

        TableSnapshot {
            rows: order[start..end].iter().map(|&i| &self.rows[i]).collect(),
            indices: order[start..end].to_vec(),
            search: &self.search,
            page,
            total_pages: pages,
            total_rows,
            start: if total_rows == 0 { 0 } else { start + 1 },
            end,
            sort_key: self.sort_key.as_deref(),
            sort_dir: self.sort_dir,
            has_rows: !self.rows.is_empty(),
        }
    }
}

/// Read-only view of one rendered page.
#[derive(Debug)]
pub struct TableSnapshot<'a> {
    /// The visible row slice, filtered, sorted, and windowed.
    pub rows: Vec<&'a Row>,
    /// For each visible row, its index in the underlying collection.
    /// Lets a caller map a visible position back to the record it came
    /// from (e.g. to act on a selected row).
    pub indices: Vec<usize>,
    pub search: &'a str,
    /// Current page after clamping, 1-indexed.
    pub page: usize,
    pub total_pages: usize,
    /// Rows surviving the filter.
    pub total_rows: usize,
    /// 1-based ordinal of the first visible row, 0 when empty.
    pub start: usize,
    /// Ordinal of the last visible row.
    pub end: usize,
    pub sort_key: Option<&'a str>,
    pub sort_dir: SortDir,
    /// Whether the unfiltered collection has any rows at all, used to
    /// distinguish "no data" from "nothing matched the search".
    pub has_rows: bool,
}
