// ── Device domain types ──

use serde::{Deserialize, Serialize};

/// Inventory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: String,
    pub hostname: String,
    pub family: String,
    pub role: String,
    /// Management address.
    pub ip_address: Option<String>,
}

/// Richer single-device view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceDetail {
    /// `"N/A"` when the upstream omits it.
    pub hostname: String,
    /// `"N/A"` when the upstream omits it.
    pub family: String,
    pub software_version: Option<String>,
    pub serial_number: Option<String>,
    /// Reachability as reported upstream (e.g. `Reachable`).
    pub status: Option<String>,
}
