use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Counters for the dashboard stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SummaryStats {
    pub computers_total: usize,
    pub computers_online: usize,
    pub open_alerts: usize,
    pub unresolved_violations: usize,
    pub transfers_blocked_today: usize,
}

/// Violations per severity for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrendDay {
    pub date: NaiveDate,
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub critical: usize,
}

impl TrendDay {
    pub fn total(&self) -> usize {
        self.low + self.medium + self.high + self.critical
    }
}

/// Seven-day violation trend for the dashboard chart area.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeverityTrend {
    pub days: Vec<TrendDay>,
}

impl SeverityTrend {
    /// Largest single-day total, used to scale the bars.
    pub fn peak(&self) -> usize {
        self.days.iter().map(TrendDay::total).max().unwrap_or(0)
    }
}
