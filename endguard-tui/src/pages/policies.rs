//! Enforcement policies listing.

use endguard_lib::error::Error;
use endguard_lib::store::Store;
use tabula::table::{CellFormat, Column, Tabular};

use super::{ListPage, PageData};

pub fn page() -> ListPage {
    ListPage::new(
        "Policies",
        vec![
            Column::new("name", "Policy", 30).sortable(),
            Column::new("type", "Type", 14).sortable(),
            Column::new("status", "Status", 9)
                .sortable()
                .format(CellFormat::Badge),
            Column::new("priority", "Priority", 8)
                .sortable()
                .format(CellFormat::Number),
            Column::new("created_by", "Created By", 10),
            Column::new("created", "Created", 10).sortable(),
        ],
        10,
        "No policies defined.",
        None,
    )
}

pub async fn fetch(store: &dyn Store) -> Result<PageData, Error> {
    let policies = store.list_policies().await?;
    Ok((
        policies.iter().map(Tabular::row).collect(),
        policies.iter().map(|p| p.id).collect(),
    ))
}
