//! System log listing.

use endguard_lib::error::Error;
use endguard_lib::store::Store;
use tabula::table::{CellFormat, Column, Tabular};

use super::{ListPage, PageData};

pub fn page() -> ListPage {
    ListPage::new(
        "System Logs",
        vec![
            Column::new("time", "Time", 16).sortable(),
            Column::new("level", "Level", 7)
                .sortable()
                .format(CellFormat::Badge),
            Column::new("module", "Module", 14).sortable(),
            Column::new("message", "Message", 38),
            Column::new("user", "User", 8),
            Column::new("computer", "Computer", 14),
        ],
        10,
        "No log entries.",
        None,
    )
}

pub async fn fetch(store: &dyn Store) -> Result<PageData, Error> {
    let logs = store.list_logs().await?;
    Ok((
        logs.iter().map(Tabular::row).collect(),
        logs.iter().map(|l| l.id).collect(),
    ))
}
