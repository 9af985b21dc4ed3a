//! Typed domain entities.
//!
//! Every listing entity implements [`tabula::table::Tabular`] so pages
//! can hand collections straight to a table view. Timestamps render as
//! strings at the row boundary; the typed structs keep real
//! `chrono` values.

mod alert;
mod computer;
mod device;
mod log;
mod policy;
mod summary;
mod user;

pub use alert::{Alert, AlertStatus};
pub use computer::{Computer, ComputerStatus};
pub use device::{Device, DeviceAccess, DeviceClass};
pub use log::{FileTransfer, LogEntry, LogLevel, TransferAction};
pub use policy::{Policy, PolicyStatus, PolicyType, Violation};
pub use summary::{SeverityTrend, SummaryStats, TrendDay};
pub use user::EndpointUser;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity scale shared by violations and alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        };
        f.write_str(s)
    }
}

/// Display format for timestamps at the row boundary.
pub(crate) const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";
