//! Alerts listing.

use endguard_lib::error::Error;
use endguard_lib::store::Store;
use tabula::table::{CellFormat, Column, Tabular};

use super::{ListPage, PageData};

pub fn page() -> ListPage {
    ListPage::new(
        "Alerts",
        vec![
            Column::new("severity", "Severity", 8)
                .sortable()
                .format(CellFormat::Badge),
            Column::new("type", "Type", 8).sortable(),
            Column::new("title", "Alert", 32),
            Column::new("source", "Source", 14).sortable(),
            Column::new("status", "Status", 12)
                .sortable()
                .format(CellFormat::Badge),
            Column::new("created", "Raised", 16).sortable(),
        ],
        10,
        "No alerts raised.",
        Some("enter: acknowledge"),
    )
}

pub async fn fetch(store: &dyn Store) -> Result<PageData, Error> {
    let alerts = store.list_alerts().await?;
    Ok((
        alerts.iter().map(Tabular::row).collect(),
        alerts.iter().map(|a| a.id).collect(),
    ))
}
