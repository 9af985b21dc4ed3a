//! Column descriptors for the render layer.

use super::row::{Row, Value};

/// Caller-supplied cell formatter, the escape hatch for formatting the
/// built-in kinds don't cover. Receives the cell value and the whole
/// row so composite cells ("Windows 11 23H2") stay possible.
pub type CellFn = fn(&Value, &Row) -> String;

/// How a column renders its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellFormat {
    /// Stringified raw value; `Null` renders as a muted placeholder.
    #[default]
    Text,
    /// Right-aligned, for counts and sizes.
    Number,
    /// Status label colored by its semantic tone.
    Badge,
    /// Caller-supplied formatting function.
    Custom(CellFn),
}

/// Metadata describing how to label, sort, and render one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub key: String,
    pub label: String,
    /// Cell width in terminal columns, excluding the separator gap.
    pub width: u16,
    pub sortable: bool,
    pub format: CellFormat,
}

impl Column {
    pub fn new(key: impl Into<String>, label: impl Into<String>, width: u16) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            width,
            sortable: false,
            format: CellFormat::Text,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn format(mut self, format: CellFormat) -> Self {
        self.format = format;
        self
    }
}
