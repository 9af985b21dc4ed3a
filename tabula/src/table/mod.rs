//! The tabular data view: dynamic rows with a declared schema, and a
//! search → sort → paginate pipeline behind a single view-state machine.
//!
//! A page hands a row collection and column descriptors to a
//! [`TableView`], drives it with `set_search` / `toggle_sort` /
//! `set_page`, and renders the resulting [`TableSnapshot`] with
//! [`render::draw_table`]. The derived collections are recomputed from
//! current state on every snapshot; nothing is cached across
//! transitions.
//!
//! # Example
//!
//! ```
//! use tabula::table::{Row, TableView, Value};
//!
//! let rows = vec![
//!     Row::new().set("name", "Jane Smith").set("logins", 42i64),
//!     Row::new().set("name", "Bob Jones").set("logins", 7i64),
//! ];
//!
//! let mut view = TableView::with_rows(10, rows);
//! view.set_search("smith");
//! let snap = view.snapshot();
//! assert_eq!(snap.total_rows, 1);
//! assert_eq!(snap.rows[0].get("name"), Some(&Value::Str("Jane Smith".into())));
//! ```

mod column;
mod filter;
mod paginate;
pub mod render;
mod row;
mod sort;
mod state;

pub use column::{CellFn, CellFormat, Column};
pub use filter::filter_rows;
pub use paginate::{clamp_page, page_bounds, page_window, total_pages};
pub use row::{Field, FieldKind, Row, Schema, SchemaError, Tabular, Value};
pub use sort::{natural_cmp, sort_order, SortDir};
pub use state::{TableSnapshot, TableView};
