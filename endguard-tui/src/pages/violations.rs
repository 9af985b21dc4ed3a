//! Policy violations listing.

use endguard_lib::error::Error;
use endguard_lib::store::Store;
use tabula::table::{CellFormat, Column, Tabular};

use super::{ListPage, PageData};

pub fn page() -> ListPage {
    ListPage::new(
        "Violations",
        vec![
            Column::new("time", "Time", 16).sortable(),
            Column::new("policy", "Policy", 28).sortable(),
            Column::new("user", "User", 10).sortable(),
            Column::new("computer", "Computer", 14),
            Column::new("severity", "Severity", 8)
                .sortable()
                .format(CellFormat::Badge),
            Column::new("status", "Status", 8).format(CellFormat::Badge),
        ],
        10,
        "No violations recorded.",
        Some("enter: resolve"),
    )
}

pub async fn fetch(store: &dyn Store) -> Result<PageData, Error> {
    let violations = store.list_violations().await?;
    Ok((
        violations.iter().map(Tabular::row).collect(),
        violations.iter().map(|v| v.id).collect(),
    ))
}
