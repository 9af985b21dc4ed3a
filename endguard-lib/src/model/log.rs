use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tabula::table::{Field, FieldKind, Row, Schema, Tabular, Value};
use uuid::Uuid;

use super::TIME_FORMAT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Debug => "Debug",
            LogLevel::Info => "Info",
            LogLevel::Warning => "Warning",
            LogLevel::Error => "Error",
        };
        f.write_str(s)
    }
}

/// One server-side system log line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: Uuid,
    pub time: DateTime<Utc>,
    pub level: LogLevel,
    pub module: String,
    pub message: String,
    pub user: Option<String>,
    pub computer: Option<String>,
}

impl Tabular for LogEntry {
    fn schema() -> Schema {
        Schema::new(vec![
            Field::new("time", FieldKind::Text),
            Field::new("level", FieldKind::Text),
            Field::new("module", FieldKind::Text),
            Field::new("message", FieldKind::Text),
            Field::new("user", FieldKind::Text),
            Field::new("computer", FieldKind::Text),
        ])
    }

    fn row(&self) -> Row {
        Row::new()
            .set("time", self.time.format(TIME_FORMAT).to_string())
            .set("level", self.level.to_string())
            .set("module", self.module.as_str())
            .set("message", self.message.as_str())
            .set("user", Value::from(self.user.as_deref()))
            .set("computer", Value::from(self.computer.as_deref()))
    }
}

/// What the agent did with an observed transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransferAction {
    Allowed,
    Blocked,
    Shadowed,
}

impl fmt::Display for TransferAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TransferAction::Allowed => "Allowed",
            TransferAction::Blocked => "Blocked",
            TransferAction::Shadowed => "Shadowed",
        };
        f.write_str(s)
    }
}

/// A file moved to or from a controlled device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileTransfer {
    pub id: Uuid,
    pub time: DateTime<Utc>,
    pub file_name: String,
    pub size_bytes: i64,
    pub action: TransferAction,
    pub user: String,
    pub computer: String,
    pub device: String,
}

impl Tabular for FileTransfer {
    fn schema() -> Schema {
        Schema::new(vec![
            Field::new("time", FieldKind::Text),
            Field::new("file", FieldKind::Text),
            Field::new("size", FieldKind::Int),
            Field::new("action", FieldKind::Text),
            Field::new("user", FieldKind::Text),
            Field::new("computer", FieldKind::Text),
            Field::new("device", FieldKind::Text),
        ])
    }

    fn row(&self) -> Row {
        Row::new()
            .set("time", self.time.format(TIME_FORMAT).to_string())
            .set("file", self.file_name.as_str())
            .set("size", self.size_bytes)
            .set("action", self.action.to_string())
            .set("user", self.user.as_str())
            .set("computer", self.computer.as_str())
            .set("device", self.device.as_str())
    }
}
