//! Endpoint users listing.

use endguard_lib::error::Error;
use endguard_lib::store::Store;
use tabula::table::{CellFormat, Column, Tabular};

use super::{ListPage, PageData};

pub fn page() -> ListPage {
    ListPage::new(
        "Users",
        vec![
            Column::new("username", "Username", 12).sortable(),
            Column::new("display_name", "Name", 16).sortable(),
            Column::new("email", "Email", 24),
            Column::new("department", "Department", 12).sortable(),
            Column::new("status", "Status", 9)
                .sortable()
                .format(CellFormat::Badge),
            Column::new("created", "Created", 10).sortable(),
        ],
        10,
        "No users synced from the directory.",
        None,
    )
}

pub async fn fetch(store: &dyn Store) -> Result<PageData, Error> {
    let users = store.list_users().await?;
    Ok((
        users.iter().map(Tabular::row).collect(),
        users.iter().map(|u| u.id).collect(),
    ))
}
