// ── Endpoint (client) types ──

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub mac: Option<String>,
    pub ip_address: Option<String>,
    pub username: Option<String>,
}

/// Query filter for the endpoint counter. Unset fields are left out of
/// the upstream query entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profiling_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
}

impl EndpointFilter {
    /// Set fields as upstream query pairs, in declaration order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        [
            ("profilingStatus", &self.profiling_status),
            ("macAddress", &self.mac_address),
            ("ip", &self.ip),
            ("deviceType", &self.device_type),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.clone().map(|v| (name, v)))
        .collect()
    }
}
