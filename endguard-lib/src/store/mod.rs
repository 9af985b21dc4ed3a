//! The thin client layer over the remote data store.

mod memory;
mod seed;

pub use memory::MemoryStore;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Error;
use crate::model::{
    Alert, Computer, Device, DeviceAccess, EndpointUser, FileTransfer, LogEntry, Policy,
    SeverityTrend, SummaryStats, Violation,
};

/// The console's view of the remote data backend.
///
/// One method group per console module, mirroring how the backend
/// organizes its query API. Listing methods return whole collections;
/// searching, ordering, and paging happen client-side in the table
/// engine.
#[async_trait]
pub trait Store: Send + Sync {
    // -- Device control -------------------------------------------------------

    async fn list_computers(&self) -> Result<Vec<Computer>, Error>;

    async fn list_devices(&self) -> Result<Vec<Device>, Error>;

    async fn list_users(&self) -> Result<Vec<EndpointUser>, Error>;

    /// Change the access decision for a device.
    async fn set_device_access(&self, id: Uuid, access: DeviceAccess) -> Result<(), Error>;

    // -- Policies -------------------------------------------------------------

    async fn list_policies(&self) -> Result<Vec<Policy>, Error>;

    async fn list_violations(&self) -> Result<Vec<Violation>, Error>;

    async fn resolve_violation(&self, id: Uuid) -> Result<(), Error>;

    // -- Monitoring -----------------------------------------------------------

    async fn list_alerts(&self) -> Result<Vec<Alert>, Error>;

    async fn acknowledge_alert(&self, id: Uuid) -> Result<(), Error>;

    async fn list_logs(&self) -> Result<Vec<LogEntry>, Error>;

    async fn list_transfers(&self) -> Result<Vec<FileTransfer>, Error>;

    // -- Dashboard ------------------------------------------------------------

    async fn summary(&self) -> Result<SummaryStats, Error>;

    async fn violation_trend(&self) -> Result<SeverityTrend, Error>;
}
