//! Managed computers listing.

use endguard_lib::error::Error;
use endguard_lib::store::Store;
use tabula::table::{CellFormat, Column, Tabular};

use super::{ListPage, PageData};

pub fn page() -> ListPage {
    ListPage::new(
        "Computers",
        vec![
            Column::new("name", "Name", 16).sortable(),
            Column::new("ip", "IP Address", 14),
            Column::new("os", "Operating System", 20).sortable(),
            Column::new("client_version", "Client", 7),
            Column::new("department", "Department", 12).sortable(),
            Column::new("status", "Status", 14)
                .sortable()
                .format(CellFormat::Badge),
            Column::new("last_seen", "Last Seen", 16).sortable(),
        ],
        10,
        "No computers registered.",
        None,
    )
}

pub async fn fetch(store: &dyn Store) -> Result<PageData, Error> {
    let computers = store.list_computers().await?;
    Ok((
        computers.iter().map(Tabular::row).collect(),
        computers.iter().map(|c| c.id).collect(),
    ))
}
