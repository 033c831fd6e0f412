// Intent API wire records
//
// Records as they arrive from Catalyst Center. Only the fields the gateway
// projects are modelled; everything else is ignored on deserialization.
// Optional fields use `#[serde(default)]` because firmware releases
// disagree about which keys are present.

use serde::Deserialize;

// ── Response Envelope ────────────────────────────────────────────────

/// Standard intent API response envelope:
/// ```json
/// { "response": ..., "version": "1.0" }
/// ```
/// A missing `response` key decodes to `T::default()`.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub response: T,
}

// ── Site ─────────────────────────────────────────────────────────────

/// Site record from `GET /site`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSite {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

// ── Network device ───────────────────────────────────────────────────

/// Device record from `GET /network-device`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDevice {
    pub id: String,
    pub hostname: String,
    pub family: String,
    pub role: String,
    #[serde(default)]
    pub management_ip_address: Option<String>,
}

/// Single device from `GET /network-device/{id}`.
///
/// Every field is optional here; the projection substitutes defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDeviceDetail {
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub family: Option<String>,
    #[serde(default)]
    pub software_version: Option<String>,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub reachability_status: Option<String>,
}

// ── Endpoint (client) ────────────────────────────────────────────────

/// Client attached to a device, from `GET /device/{id}/endpoint`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEndpoint {
    #[serde(default)]
    pub mac: Option<String>,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

// ── Task ─────────────────────────────────────────────────────────────

/// Task handle returned by `POST /task`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiTask {
    #[serde(default)]
    pub task_id: Option<String>,
    #[serde(default)]
    pub progress: Option<String>,
}

/// Task answers show up either bare or wrapped in `response`.
#[derive(Debug, Deserialize)]
pub(crate) struct TaskAnswer {
    #[serde(default)]
    response: Option<ApiTask>,
    #[serde(flatten)]
    bare: ApiTask,
}

impl TaskAnswer {
    /// Prefer the top-level handle; fall back to the enveloped one.
    pub(crate) fn into_task(self) -> ApiTask {
        if self.bare.task_id.is_some() || self.bare.progress.is_some() {
            return self.bare;
        }
        self.response.unwrap_or(self.bare)
    }
}
