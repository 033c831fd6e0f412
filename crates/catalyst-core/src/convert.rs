// ── Upstream record → projection ──
//
// Pure field-by-field mappings. No value is computed locally except the
// `"N/A"` placeholder for a device detail missing its hostname or family.

use catalyst_api::models::{ApiDevice, ApiDeviceDetail, ApiEndpoint, ApiSite, ApiTask};

use crate::model::{Device, DeviceDetail, Endpoint, Site, TaskResult};

const NOT_AVAILABLE: &str = "N/A";

impl From<ApiSite> for Site {
    fn from(s: ApiSite) -> Self {
        Self {
            id: s.id,
            name: s.name,
            description: s.description,
        }
    }
}

impl From<ApiDevice> for Device {
    fn from(d: ApiDevice) -> Self {
        Self {
            id: d.id,
            hostname: d.hostname,
            family: d.family,
            role: d.role,
            ip_address: d.management_ip_address,
        }
    }
}

impl From<ApiEndpoint> for Endpoint {
    fn from(e: ApiEndpoint) -> Self {
        Self {
            mac: e.mac,
            ip_address: e.ip_address,
            username: e.username,
        }
    }
}

impl From<ApiDeviceDetail> for DeviceDetail {
    fn from(d: ApiDeviceDetail) -> Self {
        Self {
            hostname: d.hostname.unwrap_or_else(|| NOT_AVAILABLE.into()),
            family: d.family.unwrap_or_else(|| NOT_AVAILABLE.into()),
            software_version: d.software_version,
            serial_number: d.serial_number,
            status: d.reachability_status,
        }
    }
}

impl From<ApiTask> for TaskResult {
    fn from(t: ApiTask) -> Self {
        Self {
            task_id: t.task_id,
            status: t.progress,
        }
    }
}
