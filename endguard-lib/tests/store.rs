//! Integration tests for the in-memory store and authentication.

use endguard_lib::auth::{Directory, Role};
use endguard_lib::error::{AuthError, Error};
use endguard_lib::model::{
    Alert, AlertStatus, Computer, ComputerStatus, Device, DeviceAccess, EndpointUser,
    FileTransfer, LogEntry, Policy, TransferAction, Violation,
};
use endguard_lib::store::{MemoryStore, Store};
use tabula::table::{Row, Schema, Tabular};

fn rows_of<T: Tabular>(items: &[T]) -> Vec<Row> {
    items.iter().map(Tabular::row).collect()
}

fn assert_valid<T: Tabular>(items: &[T], what: &str) {
    let schema: Schema = T::schema();
    let rows = rows_of(items);
    assert!(!rows.is_empty(), "{what}: seed data should not be empty");
    schema
        .validate(&rows)
        .unwrap_or_else(|e| panic!("{what}: {e}"));
}

#[tokio::test]
async fn test_listings_match_their_schemas() {
    let store = MemoryStore::new();

    assert_valid::<Computer>(&store.list_computers().await.unwrap(), "computers");
    assert_valid::<Device>(&store.list_devices().await.unwrap(), "devices");
    assert_valid::<EndpointUser>(&store.list_users().await.unwrap(), "users");
    assert_valid::<Policy>(&store.list_policies().await.unwrap(), "policies");
    assert_valid::<Violation>(&store.list_violations().await.unwrap(), "violations");
    assert_valid::<Alert>(&store.list_alerts().await.unwrap(), "alerts");
    assert_valid::<LogEntry>(&store.list_logs().await.unwrap(), "logs");
    assert_valid::<FileTransfer>(&store.list_transfers().await.unwrap(), "transfers");
}

#[tokio::test]
async fn test_set_device_access_persists() {
    let store = MemoryStore::new();
    let devices = store.list_devices().await.unwrap();
    let target = devices
        .iter()
        .find(|d| d.access == DeviceAccess::Allowed)
        .expect("seed should contain an allowed device");

    store
        .set_device_access(target.id, DeviceAccess::Blocked)
        .await
        .unwrap();

    let after = store.list_devices().await.unwrap();
    let changed = after.iter().find(|d| d.id == target.id).unwrap();
    assert_eq!(changed.access, DeviceAccess::Blocked);
}

#[tokio::test]
async fn test_resolve_violation() {
    let store = MemoryStore::new();
    let open = store
        .list_violations()
        .await
        .unwrap()
        .into_iter()
        .find(|v| !v.resolved)
        .expect("seed should contain an open violation");

    store.resolve_violation(open.id).await.unwrap();

    let after = store.list_violations().await.unwrap();
    assert!(after.iter().find(|v| v.id == open.id).unwrap().resolved);
}

#[tokio::test]
async fn test_mutating_a_missing_record_is_not_found() {
    let store = MemoryStore::new();
    let missing = uuid::Uuid::from_u128(0xdead_beef);

    let err = store.resolve_violation(missing).await.unwrap_err();
    assert!(matches!(err, Error::NotFound { entity: "violation", .. }));

    let err = store
        .set_device_access(missing, DeviceAccess::Blocked)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound { entity: "device", .. }));
}

#[tokio::test]
async fn test_acknowledge_only_moves_open_alerts() {
    let store = MemoryStore::new();
    let alerts = store.list_alerts().await.unwrap();
    let open = alerts.iter().find(|a| a.status == AlertStatus::Open).unwrap();
    let resolved = alerts
        .iter()
        .find(|a| a.status == AlertStatus::Resolved)
        .unwrap();

    store.acknowledge_alert(open.id).await.unwrap();
    store.acknowledge_alert(resolved.id).await.unwrap();

    let after = store.list_alerts().await.unwrap();
    let find = |id| after.iter().find(|a| a.id == id).unwrap().status;
    assert_eq!(find(open.id), AlertStatus::Acknowledged);
    // Already-resolved alerts are left alone
    assert_eq!(find(resolved.id), AlertStatus::Resolved);
}

#[tokio::test]
async fn test_summary_counts_match_the_collections() {
    let store = MemoryStore::new();
    let summary = store.summary().await.unwrap();

    let computers = store.list_computers().await.unwrap();
    let alerts = store.list_alerts().await.unwrap();
    let violations = store.list_violations().await.unwrap();

    assert_eq!(summary.computers_total, computers.len());
    assert_eq!(
        summary.computers_online,
        computers
            .iter()
            .filter(|c| c.status == ComputerStatus::Online)
            .count()
    );
    assert_eq!(
        summary.open_alerts,
        alerts.iter().filter(|a| a.status == AlertStatus::Open).count()
    );
    assert_eq!(
        summary.unresolved_violations,
        violations.iter().filter(|v| !v.resolved).count()
    );
}

#[tokio::test]
async fn test_summary_reflects_mutations() {
    let store = MemoryStore::new();
    let before = store.summary().await.unwrap();

    let open = store
        .list_violations()
        .await
        .unwrap()
        .into_iter()
        .find(|v| !v.resolved)
        .unwrap();
    store.resolve_violation(open.id).await.unwrap();

    let after = store.summary().await.unwrap();
    assert_eq!(after.unresolved_violations, before.unresolved_violations - 1);
}

#[tokio::test]
async fn test_blocked_today_counts_only_the_latest_day() {
    let store = MemoryStore::new();
    let summary = store.summary().await.unwrap();

    let transfers = store.list_transfers().await.unwrap();
    let latest = transfers.iter().map(|t| t.time.date_naive()).max().unwrap();
    let expected = transfers
        .iter()
        .filter(|t| t.action == TransferAction::Blocked && t.time.date_naive() == latest)
        .count();
    assert_eq!(summary.transfers_blocked_today, expected);
}

#[tokio::test]
async fn test_trend_spans_seven_consecutive_days() {
    let store = MemoryStore::new();
    let trend = store.violation_trend().await.unwrap();

    assert_eq!(trend.days.len(), 7);
    for pair in trend.days.windows(2) {
        assert_eq!(pair[1].date - pair[0].date, chrono::Duration::days(1));
    }

    let violations = store.list_violations().await.unwrap();
    let last = trend.days.last().unwrap();
    assert_eq!(
        last.total(),
        violations
            .iter()
            .filter(|v| v.time.date_naive() == last.date)
            .count()
    );
}

#[tokio::test]
async fn test_admin_signs_in_with_any_password() {
    let directory = Directory::new();

    let session = directory
        .authenticate("admin@example.com", "whatever")
        .await
        .unwrap();
    assert_eq!(session.operator.role, Role::Administrator);

    // Email match is case-insensitive
    let session = directory
        .authenticate("Admin@Example.com", "other")
        .await
        .unwrap();
    assert_eq!(session.operator.email, "admin@example.com");
}

#[tokio::test]
async fn test_unknown_email_is_rejected() {
    let directory = Directory::new();
    let err = directory
        .authenticate("nobody@example.com", "pw")
        .await
        .unwrap_err();
    assert_eq!(err, AuthError::InvalidCredentials);
}

#[tokio::test]
async fn test_register_then_authenticate() {
    let directory = Directory::new();

    let session = directory
        .register("Dana Reyes", "dana@example.com", "pw")
        .await
        .unwrap();
    assert_eq!(session.operator.role, Role::Operator);

    let again = directory.authenticate("dana@example.com", "pw").await.unwrap();
    assert_eq!(again.operator.id, session.operator.id);
}

#[tokio::test]
async fn test_register_rejects_taken_and_blank_input() {
    let directory = Directory::new();

    let err = directory
        .register("Someone", "admin@example.com", "pw")
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::Registration(_)));

    let err = directory.register("", "new@example.com", "pw").await.unwrap_err();
    assert!(matches!(err, AuthError::Registration(_)));
}
