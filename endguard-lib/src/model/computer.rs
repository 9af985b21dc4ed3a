use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tabula::table::{Field, FieldKind, Row, Schema, Tabular};
use uuid::Uuid;

use super::TIME_FORMAT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComputerStatus {
    Online,
    Offline,
    Maintenance,
    Decommissioned,
}

impl fmt::Display for ComputerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ComputerStatus::Online => "Online",
            ComputerStatus::Offline => "Offline",
            ComputerStatus::Maintenance => "Maintenance",
            ComputerStatus::Decommissioned => "Decommissioned",
        };
        f.write_str(s)
    }
}

/// A managed endpoint running the agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Computer {
    pub id: Uuid,
    pub name: String,
    pub ip: String,
    pub os: String,
    pub os_version: String,
    pub client_version: String,
    pub department: String,
    pub status: ComputerStatus,
    pub last_seen: DateTime<Utc>,
}

impl Tabular for Computer {
    fn schema() -> Schema {
        Schema::new(vec![
            Field::new("name", FieldKind::Text),
            Field::new("ip", FieldKind::Text),
            Field::new("os", FieldKind::Text),
            Field::new("client_version", FieldKind::Text),
            Field::new("department", FieldKind::Text),
            Field::new("status", FieldKind::Text),
            Field::new("last_seen", FieldKind::Text),
        ])
    }

    fn row(&self) -> Row {
        Row::new()
            .set("name", self.name.as_str())
            .set("ip", self.ip.as_str())
            .set("os", format!("{} {}", self.os, self.os_version))
            .set("client_version", self.client_version.as_str())
            .set("department", self.department.as_str())
            .set("status", self.status.to_string())
            .set("last_seen", self.last_seen.format(TIME_FORMAT).to_string())
    }
}
