use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tabula::table::{Field, FieldKind, Row, Schema, Tabular};
use uuid::Uuid;

use super::{Severity, TIME_FORMAT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertStatus {
    Open,
    Acknowledged,
    Resolved,
}

impl fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AlertStatus::Open => "Open",
            AlertStatus::Acknowledged => "Acknowledged",
            AlertStatus::Resolved => "Resolved",
        };
        f.write_str(s)
    }
}

/// A notification raised by an alert rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: Uuid,
    pub alert_type: String,
    pub severity: Severity,
    pub title: String,
    /// The computer or subsystem that raised the alert.
    pub source: String,
    pub status: AlertStatus,
    pub created: DateTime<Utc>,
}

impl Tabular for Alert {
    fn schema() -> Schema {
        Schema::new(vec![
            Field::new("severity", FieldKind::Text),
            Field::new("type", FieldKind::Text),
            Field::new("title", FieldKind::Text),
            Field::new("source", FieldKind::Text),
            Field::new("status", FieldKind::Text),
            Field::new("created", FieldKind::Text),
        ])
    }

    fn row(&self) -> Row {
        Row::new()
            .set("severity", self.severity.to_string())
            .set("type", self.alert_type.as_str())
            .set("title", self.title.as_str())
            .set("source", self.source.as_str())
            .set("status", self.status.to_string())
            .set("created", self.created.format(TIME_FORMAT).to_string())
    }
}
