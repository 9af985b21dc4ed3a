//! File transfers listing.

use endguard_lib::error::Error;
use endguard_lib::store::Store;
use tabula::table::{CellFormat, Column, Row, Tabular, Value};

use super::{ListPage, PageData};

pub fn page() -> ListPage {
    ListPage::new(
        "File Transfers",
        vec![
            Column::new("time", "Time", 16).sortable(),
            Column::new("file", "File", 22).sortable(),
            Column::new("size", "Size", 9).format(CellFormat::Custom(size_cell)),
            Column::new("action", "Action", 8)
                .sortable()
                .format(CellFormat::Badge),
            Column::new("user", "User", 8).sortable(),
            Column::new("computer", "Computer", 14),
            Column::new("device", "Device", 20),
        ],
        10,
        "No file transfers recorded.",
        None,
    )
}

pub async fn fetch(store: &dyn Store) -> Result<PageData, Error> {
    let transfers = store.list_transfers().await?;
    Ok((
        transfers.iter().map(Tabular::row).collect(),
        transfers.iter().map(|t| t.id).collect(),
    ))
}

fn size_cell(value: &Value, _row: &Row) -> String {
    match value {
        Value::Int(bytes) => human_size(*bytes),
        _ => String::new(),
    }
}

fn human_size(bytes: i64) -> String {
    const KB: f64 = 1024.0;
    let b = bytes as f64;
    if b >= KB * KB * KB {
        format!("{:.1} GB", b / (KB * KB * KB))
    } else if b >= KB * KB {
        format!("{:.1} MB", b / (KB * KB))
    } else if b >= KB {
        format!("{:.0} KB", b / KB)
    } else {
        format!("{bytes} B")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_scale_by_unit() {
        assert_eq!(human_size(820), "820 B");
        assert_eq!(human_size(88_064), "86 KB");
        assert_eq!(human_size(52_428_800), "50.0 MB");
        assert_eq!(human_size(3_221_225_472), "3.0 GB");
    }
}
