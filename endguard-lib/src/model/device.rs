use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tabula::table::{Field, FieldKind, Row, Schema, Tabular, Value};
use uuid::Uuid;

use super::TIME_FORMAT;

/// Hardware class of a removable device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceClass {
    UsbStorage,
    Printer,
    Smartphone,
    Camera,
    CardReader,
    Bluetooth,
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DeviceClass::UsbStorage => "USB Storage",
            DeviceClass::Printer => "Printer",
            DeviceClass::Smartphone => "Smartphone",
            DeviceClass::Camera => "Camera",
            DeviceClass::CardReader => "Card Reader",
            DeviceClass::Bluetooth => "Bluetooth",
        };
        f.write_str(s)
    }
}

/// Access decision applied to a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceAccess {
    Allowed,
    Blocked,
    ReadOnly,
}

impl fmt::Display for DeviceAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DeviceAccess::Allowed => "Allowed",
            DeviceAccess::Blocked => "Blocked",
            DeviceAccess::ReadOnly => "ReadOnly",
        };
        f.write_str(s)
    }
}

/// A peripheral observed on some endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: Uuid,
    pub name: String,
    pub class: DeviceClass,
    pub serial: String,
    pub vendor: Option<String>,
    pub access: DeviceAccess,
    pub last_connected: DateTime<Utc>,
}

impl Tabular for Device {
    fn schema() -> Schema {
        Schema::new(vec![
            Field::new("name", FieldKind::Text),
            Field::new("class", FieldKind::Text),
            Field::new("serial", FieldKind::Text),
            Field::new("vendor", FieldKind::Text),
            Field::new("access", FieldKind::Text),
            Field::new("last_connected", FieldKind::Text),
        ])
    }

    fn row(&self) -> Row {
        Row::new()
            .set("name", self.name.as_str())
            .set("class", self.class.to_string())
            .set("serial", self.serial.as_str())
            .set("vendor", Value::from(self.vendor.as_deref()))
            .set("access", self.access.to_string())
            .set(
                "last_connected",
                self.last_connected.format(TIME_FORMAT).to_string(),
            )
    }
}
