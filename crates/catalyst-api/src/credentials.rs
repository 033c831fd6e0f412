// Device credential endpoint

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::client::CatalystClient;
use crate::error::Error;

impl CatalystClient {
    /// Create global device credentials.
    ///
    /// `POST /device-credential` with `{"settings": {"cliCredential": [...]}}`
    pub async fn create_device_credentials<B: Serialize + ?Sized + Sync>(
        &self,
        body: &B,
    ) -> Result<Value, Error> {
        debug!("creating device credentials");
        self.post("device-credential", body).await
    }
}
