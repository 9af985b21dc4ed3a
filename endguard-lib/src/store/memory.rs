//! In-memory store implementation.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::Error;
use crate::model::{
    Alert, AlertStatus, Computer, ComputerStatus, Device, DeviceAccess, EndpointUser,
    FileTransfer, LogEntry, Policy, Severity, SeverityTrend, SummaryStats, TransferAction,
    TrendDay, Violation,
};

use super::seed::{seed, SeedData};
use super::Store;

/// Simulated backend round-trip, so the console exercises its loading
/// states the way it would against the real store.
const LATENCY: Duration = Duration::from_millis(40);

/// A [`Store`] backed by seeded in-memory collections.
///
/// Listing methods clone the collections; mutations update them in
/// place behind an async lock.
pub struct MemoryStore {
    data: RwLock<SeedData>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            data: RwLock::new(seed()),
        }
    }

    async fn round_trip(&self, what: &str) {
        debug!("memory store: {what}");
        tokio::time::sleep(LATENCY).await;
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn list_computers(&self) -> Result<Vec<Computer>, Error> {
        self.round_trip("list_computers").await;
        Ok(self.data.read().await.computers.clone())
    }

    async fn list_devices(&self) -> Result<Vec<Device>, Error> {
        self.round_trip("list_devices").await;
        Ok(self.data.read().await.devices.clone())
    }

    async fn list_users(&self) -> Result<Vec<EndpointUser>, Error> {
        self.round_trip("list_users").await;
        Ok(self.data.read().await.users.clone())
    }

    async fn set_device_access(&self, id: Uuid, access: DeviceAccess) -> Result<(), Error> {
        self.round_trip("set_device_access").await;
        let mut data = self.data.write().await;
        let device = data
            .devices
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| Error::not_found("device", id))?;
        device.access = access;
        Ok(())
    }

    async fn list_policies(&self) -> Result<Vec<Policy>, Error> {
        self.round_trip("list_policies").await;
        Ok(self.data.read().await.policies.clone())
    }

    async fn list_violations(&self) -> Result<Vec<Violation>, Error> {
        self.round_trip("list_violations").await;
        Ok(self.data.read().await.violations.clone())
    }

    async fn resolve_violation(&self, id: Uuid) -> Result<(), Error> {
        self.round_trip("resolve_violation").await;
        let mut data = self.data.write().await;
        let violation = data
            .violations
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or_else(|| Error::not_found("violation", id))?;
        violation.resolved = true;
        Ok(())
    }

    async fn list_alerts(&self) -> Result<Vec<Alert>, Error> {
        self.round_trip("list_alerts").await;
        Ok(self.data.read().await.alerts.clone())
    }

    async fn acknowledge_alert(&self, id: Uuid) -> Result<(), Error> {
        self.round_trip("acknowledge_alert").await;
        let mut data = self.data.write().await;
        let alert = data
            .alerts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| Error::not_found("alert", id))?;
        if alert.status == AlertStatus::Open {
            alert.status = AlertStatus::Acknowledged;
        }
        Ok(())
    }

    async fn list_logs(&self) -> Result<Vec<LogEntry>, Error> {
        self.round_trip("list_logs").await;
        Ok(self.data.read().await.logs.clone())
    }

    async fn list_transfers(&self) -> Result<Vec<FileTransfer>, Error> {
        self.round_trip("list_transfers").await;
        Ok(self.data.read().await.transfers.clone())
    }

    async fn summary(&self) -> Result<SummaryStats, Error> {
        self.round_trip("summary").await;
        let data = self.data.read().await;

        let today = data
            .transfers
            .iter()
            .map(|t| t.time.date_naive())
            .max()
            .unwrap_or_default();

        Ok(SummaryStats {
            computers_total: data.computers.len(),
            computers_online: data
                .computers
                .iter()
                .filter(|c| c.status == ComputerStatus::Online)
                .count(),
            open_alerts: data
                .alerts
                .iter()
                .filter(|a| a.status == AlertStatus::Open)
                .count(),
            unresolved_violations: data.violations.iter().filter(|v| !v.resolved).count(),
            transfers_blocked_today: data
                .transfers
                .iter()
                .filter(|t| t.action == TransferAction::Blocked && t.time.date_naive() == today)
                .count(),
        })
    }

    async fn violation_trend(&self) -> Result<SeverityTrend, Error> {
        self.round_trip("violation_trend").await;
        let data = self.data.read().await;

        let end = data
            .violations
            .iter()
            .map(|v| v.time.date_naive())
            .max()
            .unwrap_or_default();

        let days = (0..7)
            .rev()
            .map(|back| {
                let date = end - chrono::Duration::days(back);
                day_counts(&data.violations, date)
            })
            .collect();

        Ok(SeverityTrend { days })
    }
}

fn day_counts(violations: &[Violation], date: NaiveDate) -> TrendDay {
    let mut day = TrendDay {
        date,
        ..TrendDay::default()
    };
    for v in violations.iter().filter(|v| v.time.date_naive() == date) {
        match v.severity {
            Severity::Low => day.low += 1,
            Severity::Medium => day.medium += 1,
            Severity::High => day.high += 1,
            Severity::Critical => day.critical += 1,
        }
    }
    day
}
