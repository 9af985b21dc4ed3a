//! Controlled devices listing.

use endguard_lib::error::Error;
use endguard_lib::model::DeviceAccess;
use endguard_lib::store::Store;
use tabula::table::{CellFormat, Column, Tabular};

use super::{ListPage, PageData};

pub fn page() -> ListPage {
    ListPage::new(
        "Devices",
        vec![
            Column::new("name", "Device", 22).sortable(),
            Column::new("class", "Class", 12).sortable(),
            Column::new("serial", "Serial", 14),
            Column::new("vendor", "Vendor", 10).sortable(),
            Column::new("access", "Access", 9)
                .sortable()
                .format(CellFormat::Badge),
            Column::new("last_connected", "Last Connected", 16).sortable(),
        ],
        10,
        "No devices observed yet.",
        Some("enter: cycle access"),
    )
}

pub async fn fetch(store: &dyn Store) -> Result<PageData, Error> {
    let devices = store.list_devices().await?;
    Ok((
        devices.iter().map(Tabular::row).collect(),
        devices.iter().map(|d| d.id).collect(),
    ))
}

/// The next access decision in the Allowed → ReadOnly → Blocked cycle,
/// keyed by the current decision's display label.
pub fn next_access(current: &str) -> Option<DeviceAccess> {
    match current {
        "Allowed" => Some(DeviceAccess::ReadOnly),
        "ReadOnly" => Some(DeviceAccess::Blocked),
        "Blocked" => Some(DeviceAccess::Allowed),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_cycle_visits_all_three() {
        let mut access = DeviceAccess::Allowed;
        for expected in [
            DeviceAccess::ReadOnly,
            DeviceAccess::Blocked,
            DeviceAccess::Allowed,
        ] {
            access = next_access(&access.to_string()).unwrap();
            assert_eq!(access, expected);
        }
    }
}
