//! Deterministic seed data for the in-memory store.
//!
//! Display data only; nothing here drives enforcement.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use crate::model::{
    Alert, AlertStatus, Computer, ComputerStatus, Device, DeviceAccess, DeviceClass, EndpointUser,
    FileTransfer, LogEntry, LogLevel, Policy, PolicyStatus, PolicyType, Severity, TransferAction,
    Violation,
};

fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .unwrap_or_default()
}

fn day(y: i32, mo: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, mo, d).unwrap_or_default()
}

fn id(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

#[derive(Debug, Clone)]
pub(crate) struct SeedData {
    pub computers: Vec<Computer>,
    pub devices: Vec<Device>,
    pub users: Vec<EndpointUser>,
    pub policies: Vec<Policy>,
    pub violations: Vec<Violation>,
    pub alerts: Vec<Alert>,
    pub logs: Vec<LogEntry>,
    pub transfers: Vec<FileTransfer>,
}

pub(crate) fn seed() -> SeedData {
    SeedData {
        computers: computers(),
        devices: devices(),
        users: users(),
        policies: policies(),
        violations: violations(),
        alerts: alerts(),
        logs: logs(),
        transfers: transfers(),
    }
}

fn computer(
    n: u128,
    name: &str,
    ip: &str,
    os: &str,
    os_version: &str,
    client_version: &str,
    department: &str,
    status: ComputerStatus,
    last_seen: DateTime<Utc>,
) -> Computer {
    Computer {
        id: id(n),
        name: name.to_string(),
        ip: ip.to_string(),
        os: os.to_string(),
        os_version: os_version.to_string(),
        client_version: client_version.to_string(),
        department: department.to_string(),
        status,
        last_seen,
    }
}

fn computers() -> Vec<Computer> {
    use ComputerStatus::*;
    vec![
        computer(0x101, "WS-FINANCE-01", "192.168.1.101", "Windows 11", "23H2", "4.2.1", "Finance", Online, ts(2024, 9, 12, 9, 58)),
        computer(0x102, "WS-HR-05", "192.168.1.205", "Windows 10", "22H2", "4.2.0", "HR", Online, ts(2024, 9, 12, 9, 55)),
        computer(0x103, "MBP-DEV-12", "192.168.1.312", "macOS", "Sonoma 14.3", "4.2.1", "Engineering", Online, ts(2024, 9, 12, 9, 57)),
        computer(0x104, "WS-LEGAL-03", "192.168.1.403", "Windows 11", "23H2", "4.1.8", "Legal", Offline, ts(2024, 9, 12, 7, 58)),
        computer(0x105, "WS-OPS-07", "192.168.1.507", "Ubuntu", "22.04 LTS", "4.2.1", "Operations", Online, ts(2024, 9, 12, 9, 53)),
        computer(0x106, "WS-MGMT-01", "192.168.1.601", "Windows 11", "23H2", "4.2.1", "Management", Maintenance, ts(2024, 9, 12, 9, 28)),
        computer(0x107, "WS-FINANCE-02", "192.168.1.102", "Windows 11", "23H2", "4.2.1", "Finance", Offline, ts(2024, 9, 11, 18, 2)),
        computer(0x108, "WS-SALES-09", "192.168.1.709", "Windows 10", "22H2", "4.0.4", "Sales", Decommissioned, ts(2024, 8, 30, 11, 40)),
    ]
}

fn device(
    n: u128,
    name: &str,
    class: DeviceClass,
    serial: &str,
    vendor: Option<&str>,
    access: DeviceAccess,
    last_connected: DateTime<Utc>,
) -> Device {
    Device {
        id: id(n),
        name: name.to_string(),
        class,
        serial: serial.to_string(),
        vendor: vendor.map(str::to_string),
        access,
        last_connected,
    }
}

fn devices() -> Vec<Device> {
    use DeviceAccess::*;
    use DeviceClass::*;
    vec![
        device(0x201, "SanDisk Ultra 64GB", UsbStorage, "4C530001230", Some("SanDisk"), Allowed, ts(2024, 9, 12, 9, 12)),
        device(0x202, "Kingston DataTraveler", UsbStorage, "0019E06B2F41", Some("Kingston"), Blocked, ts(2024, 9, 11, 16, 44)),
        device(0x203, "iPhone 15", Smartphone, "F2LW48XHPLJM", Some("Apple"), ReadOnly, ts(2024, 9, 12, 8, 5)),
        device(0x204, "HP LaserJet M404", Printer, "PHBKB12345", Some("HP"), Allowed, ts(2024, 9, 12, 9, 40)),
        device(0x205, "Galaxy S24", Smartphone, "R5CW70ABCDE", Some("Samsung"), Blocked, ts(2024, 9, 10, 13, 21)),
        device(0x206, "Generic Card Reader", CardReader, "CR-88112", None, ReadOnly, ts(2024, 9, 9, 10, 2)),
        device(0x207, "Logitech BT Receiver", Bluetooth, "LT-993120", Some("Logitech"), Allowed, ts(2024, 9, 12, 7, 56)),
        device(0x208, "Canon EOS R6", Camera, "013021000456", Some("Canon"), Blocked, ts(2024, 9, 8, 15, 33)),
    ]
}

fn user(
    n: u128,
    username: &str,
    display_name: &str,
    email: &str,
    department: &str,
    active: bool,
    created: NaiveDate,
) -> EndpointUser {
    EndpointUser {
        id: id(n),
        username: username.to_string(),
        display_name: display_name.to_string(),
        email: email.to_string(),
        department: department.to_string(),
        active,
        created,
    }
}

fn users() -> Vec<EndpointUser> {
    vec![
        user(0x301, "ajohnson", "Alice Johnson", "alice@example.com", "Finance", true, day(2024, 1, 15)),
        user(0x302, "bmartin", "Bob Martin", "bob@example.com", "Engineering", true, day(2024, 2, 20)),
        user(0x303, "cwhite", "Carol White", "carol@example.com", "HR", false, day(2024, 3, 10)),
        user(0x304, "dclark", "David Clark", "david@example.com", "Legal", true, day(2024, 4, 5)),
        user(0x305, "ebrown", "Eva Brown", "eva@example.com", "Operations", true, day(2024, 5, 22)),
        user(0x306, "fdavis", "Frank Davis", "frank@example.com", "Sales", true, day(2024, 6, 1)),
        user(0x307, "glee", "Grace Lee", "grace@example.com", "Finance", false, day(2024, 6, 15)),
        user(0x308, "hwilson", "Henry Wilson", "henry@example.com", "Management", true, day(2024, 7, 1)),
    ]
}

fn policy(
    n: u128,
    name: &str,
    policy_type: PolicyType,
    status: PolicyStatus,
    priority: i64,
    created_by: &str,
    created: NaiveDate,
) -> Policy {
    Policy {
        id: id(n),
        name: name.to_string(),
        policy_type,
        status,
        priority,
        created_by: created_by.to_string(),
        created,
    }
}

fn policies() -> Vec<Policy> {
    use PolicyStatus::*;
    use PolicyType::*;
    vec![
        policy(0x401, "Block USB storage (default)", DeviceControl, Active, 1, "hwilson", day(2024, 2, 1)),
        policy(0x402, "Finance read-only removable media", DeviceControl, Active, 2, "hwilson", day(2024, 2, 14)),
        policy(0x403, "PCI data exfiltration guard", ContentAware, Active, 1, "ajohnson", day(2024, 3, 3)),
        policy(0x404, "Source code upload watch", ContentAware, Inactive, 3, "bmartin", day(2024, 4, 18)),
        policy(0x405, "Quarterly PII disk scan", EDiscovery, Active, 5, "hwilson", day(2024, 5, 6)),
        policy(0x406, "Legal hold shadow copies", DeviceControl, Draft, 4, "dclark", day(2024, 8, 22)),
    ]
}

fn violation(
    n: u128,
    policy: &str,
    user: &str,
    computer: &str,
    severity: Severity,
    time: DateTime<Utc>,
    resolved: bool,
) -> Violation {
    Violation {
        id: id(n),
        policy: policy.to_string(),
        user: user.to_string(),
        computer: computer.to_string(),
        severity,
        time,
        resolved,
    }
}

fn violations() -> Vec<Violation> {
    use Severity::*;
    vec![
        violation(0x501, "Block USB storage (default)", "cwhite", "WS-HR-05", Medium, ts(2024, 9, 12, 8, 41), false),
        violation(0x502, "PCI data exfiltration guard", "ajohnson", "WS-FINANCE-01", Critical, ts(2024, 9, 12, 7, 2), false),
        violation(0x503, "Block USB storage (default)", "fdavis", "WS-SALES-09", Low, ts(2024, 9, 11, 15, 27), true),
        violation(0x504, "Source code upload watch", "bmartin", "MBP-DEV-12", High, ts(2024, 9, 11, 11, 9), false),
        violation(0x505, "Finance read-only removable media", "glee", "WS-FINANCE-02", Medium, ts(2024, 9, 10, 9, 55), true),
        violation(0x506, "PCI data exfiltration guard", "ebrown", "WS-OPS-07", High, ts(2024, 9, 9, 14, 30), false),
        violation(0x507, "Block USB storage (default)", "dclark", "WS-LEGAL-03", Low, ts(2024, 9, 8, 10, 12), true),
    ]
}

fn alert(
    n: u128,
    alert_type: &str,
    severity: Severity,
    title: &str,
    source: &str,
    status: AlertStatus,
    created: DateTime<Utc>,
) -> Alert {
    Alert {
        id: id(n),
        alert_type: alert_type.to_string(),
        severity,
        title: title.to_string(),
        source: source.to_string(),
        status,
        created,
    }
}

fn alerts() -> Vec<Alert> {
    use AlertStatus::*;
    use Severity::*;
    vec![
        alert(0x601, "Device", Critical, "Blocked device retried 12 times", "WS-HR-05", Open, ts(2024, 9, 12, 9, 47)),
        alert(0x602, "Content", High, "Card numbers detected in upload", "WS-FINANCE-01", Open, ts(2024, 9, 12, 7, 3)),
        alert(0x603, "System", Medium, "Agent version below baseline", "WS-SALES-09", Acknowledged, ts(2024, 9, 11, 17, 20)),
        alert(0x604, "Device", Low, "New card reader observed", "WS-OPS-07", Resolved, ts(2024, 9, 10, 12, 2)),
        alert(0x605, "System", Medium, "Endpoint offline for 48h", "WS-LEGAL-03", Open, ts(2024, 9, 10, 8, 0)),
        alert(0x606, "Content", High, "Source archive copied to phone", "MBP-DEV-12", Acknowledged, ts(2024, 9, 11, 11, 10)),
    ]
}

fn log_entry(
    n: u128,
    time: DateTime<Utc>,
    level: LogLevel,
    module: &str,
    message: &str,
    user: Option<&str>,
    computer: Option<&str>,
) -> LogEntry {
    LogEntry {
        id: id(n),
        time,
        level,
        module: module.to_string(),
        message: message.to_string(),
        user: user.map(str::to_string),
        computer: computer.map(str::to_string),
    }
}

fn logs() -> Vec<LogEntry> {
    use LogLevel::*;
    vec![
        log_entry(0x701, ts(2024, 9, 12, 9, 58), Info, "agent", "Heartbeat received", None, Some("WS-FINANCE-01")),
        log_entry(0x702, ts(2024, 9, 12, 9, 47), Warning, "device-control", "Access retry limit reached", Some("cwhite"), Some("WS-HR-05")),
        log_entry(0x703, ts(2024, 9, 12, 8, 41), Warning, "device-control", "USB storage mount denied", Some("cwhite"), Some("WS-HR-05")),
        log_entry(0x704, ts(2024, 9, 12, 7, 2), Error, "content-aware", "Inspection matched PCI pattern", Some("ajohnson"), Some("WS-FINANCE-01")),
        log_entry(0x705, ts(2024, 9, 12, 6, 30), Info, "scheduler", "Nightly report generated", None, None),
        log_entry(0x706, ts(2024, 9, 11, 22, 10), Debug, "sync", "Directory sync finished in 42s", None, None),
        log_entry(0x707, ts(2024, 9, 11, 17, 20), Warning, "agent", "Client 4.0.4 below supported baseline", None, Some("WS-SALES-09")),
        log_entry(0x708, ts(2024, 9, 11, 11, 9), Error, "content-aware", "Archive upload blocked", Some("bmartin"), Some("MBP-DEV-12")),
    ]
}

fn transfer(
    n: u128,
    time: DateTime<Utc>,
    file_name: &str,
    size_bytes: i64,
    action: TransferAction,
    user: &str,
    computer: &str,
    device: &str,
) -> FileTransfer {
    FileTransfer {
        id: id(n),
        time,
        file_name: file_name.to_string(),
        size_bytes,
        action,
        user: user.to_string(),
        computer: computer.to_string(),
        device: device.to_string(),
    }
}

fn transfers() -> Vec<FileTransfer> {
    use TransferAction::*;
    vec![
        transfer(0x801, ts(2024, 9, 12, 9, 12), "q3-forecast.xlsx", 1_204_224, Shadowed, "ajohnson", "WS-FINANCE-01", "SanDisk Ultra 64GB"),
        transfer(0x802, ts(2024, 9, 12, 8, 41), "hr-export.csv", 88_064, Blocked, "cwhite", "WS-HR-05", "Kingston DataTraveler"),
        transfer(0x803, ts(2024, 9, 12, 8, 6), "standup-notes.txt", 4_311, Allowed, "bmartin", "MBP-DEV-12", "iPhone 15"),
        transfer(0x804, ts(2024, 9, 11, 16, 44), "contracts-2024.zip", 52_428_800, Blocked, "dclark", "WS-LEGAL-03", "Kingston DataTraveler"),
        transfer(0x805, ts(2024, 9, 11, 11, 9), "src-backup.tar.gz", 310_378_496, Blocked, "bmartin", "MBP-DEV-12", "Galaxy S24"),
        transfer(0x806, ts(2024, 9, 10, 13, 21), "team-photo.jpg", 3_145_728, Allowed, "ebrown", "WS-OPS-07", "SanDisk Ultra 64GB"),
        transfer(0x807, ts(2024, 9, 9, 14, 30), "invoices-aug.pdf", 958_464, Shadowed, "glee", "WS-FINANCE-02", "SanDisk Ultra 64GB"),
    ]
}
