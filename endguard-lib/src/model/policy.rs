use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tabula::table::{Field, FieldKind, Row, Schema, Tabular};
use uuid::Uuid;

use super::{Severity, TIME_FORMAT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyType {
    DeviceControl,
    ContentAware,
    EDiscovery,
}

impl fmt::Display for PolicyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PolicyType::DeviceControl => "Device Control",
            PolicyType::ContentAware => "Content Aware",
            PolicyType::EDiscovery => "eDiscovery",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyStatus {
    Active,
    Inactive,
    Draft,
}

impl fmt::Display for PolicyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PolicyStatus::Active => "Active",
            PolicyStatus::Inactive => "Inactive",
            PolicyStatus::Draft => "Draft",
        };
        f.write_str(s)
    }
}

/// An enforcement policy as the console lists it. Rule contents are
/// backend-side; the console only shows metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    pub id: Uuid,
    pub name: String,
    pub policy_type: PolicyType,
    pub status: PolicyStatus,
    /// Lower number wins when policies overlap.
    pub priority: i64,
    pub created_by: String,
    pub created: NaiveDate,
}

impl Tabular for Policy {
    fn schema() -> Schema {
        Schema::new(vec![
            Field::new("name", FieldKind::Text),
            Field::new("type", FieldKind::Text),
            Field::new("status", FieldKind::Text),
            Field::new("priority", FieldKind::Int),
            Field::new("created_by", FieldKind::Text),
            Field::new("created", FieldKind::Text),
        ])
    }

    fn row(&self) -> Row {
        Row::new()
            .set("name", self.name.as_str())
            .set("type", self.policy_type.to_string())
            .set("status", self.status.to_string())
            .set("priority", self.priority)
            .set("created_by", self.created_by.as_str())
            .set("created", self.created.to_string())
    }
}

/// One recorded breach of a policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub id: Uuid,
    pub policy: String,
    pub user: String,
    pub computer: String,
    pub severity: Severity,
    pub time: DateTime<Utc>,
    pub resolved: bool,
}

impl Tabular for Violation {
    fn schema() -> Schema {
        Schema::new(vec![
            Field::new("time", FieldKind::Text),
            Field::new("policy", FieldKind::Text),
            Field::new("user", FieldKind::Text),
            Field::new("computer", FieldKind::Text),
            Field::new("severity", FieldKind::Text),
            Field::new("status", FieldKind::Text),
        ])
    }

    fn row(&self) -> Row {
        Row::new()
            .set("time", self.time.format(TIME_FORMAT).to_string())
            .set("policy", self.policy.as_str())
            .set("user", self.user.as_str())
            .set("computer", self.computer.as_str())
            .set("severity", self.severity.to_string())
            .set("status", if self.resolved { "Resolved" } else { "Open" })
    }
}
