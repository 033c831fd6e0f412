// Network device endpoints
//
// Inventory listing, single-device detail, and the clients attached to a
// device.

use tracing::debug;

use crate::client::CatalystClient;
use crate::error::Error;
use crate::models::{ApiDevice, ApiDeviceDetail, ApiEndpoint, Envelope};

impl CatalystClient {
    /// List devices, optionally restricted to one site.
    ///
    /// `GET /network-device[?siteId=...]`
    pub async fn list_devices(&self, site_id: Option<&str>) -> Result<Vec<ApiDevice>, Error> {
        debug!(?site_id, "listing devices");
        let query = site_id.map(|id| [("siteId", id.to_owned())]);
        let env: Envelope<Vec<ApiDevice>> = self
            .get("network-device", query.as_ref().map(|q| q.as_slice()))
            .await?;
        Ok(env.response)
    }

    /// Fetch one device.
    ///
    /// `GET /network-device/{id}`
    pub async fn get_device(&self, device_id: &str) -> Result<ApiDeviceDetail, Error> {
        debug!(device_id, "fetching device detail");
        let env: Envelope<ApiDeviceDetail> =
            self.get(&format!("network-device/{device_id}"), None).await?;
        Ok(env.response)
    }

    /// List endpoints (clients) seen on a device.
    ///
    /// `GET /device/{id}/endpoint`
    pub async fn list_device_endpoints(&self, device_id: &str) -> Result<Vec<ApiEndpoint>, Error> {
        debug!(device_id, "listing device endpoints");
        let env: Envelope<Vec<ApiEndpoint>> =
            self.get(&format!("device/{device_id}/endpoint"), None).await?;
        Ok(env.response)
    }
}
