// Site endpoints

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::client::CatalystClient;
use crate::error::Error;
use crate::models::{ApiSite, Envelope};

impl CatalystClient {
    /// List all sites.
    ///
    /// `GET /site`
    pub async fn list_sites(&self) -> Result<Vec<ApiSite>, Error> {
        debug!("listing sites");
        let env: Envelope<Vec<ApiSite>> = self.get("site", None).await?;
        Ok(env.response)
    }

    /// Create a site. The body is sent as-is.
    ///
    /// `POST /site`
    pub async fn create_site<B: Serialize + ?Sized + Sync>(&self, body: &B) -> Result<Value, Error> {
        debug!("creating site");
        self.post("site", body).await
    }
}
