// ── Gateway facade ──
//
// One method per logical operation. Each validates its input, makes a
// single upstream call, and projects the answer. No state is kept
// between calls.

use catalyst_api::CatalystClient;
use serde_json::Value;
use tracing::debug;

use crate::config::GatewayConfig;
use crate::error::CoreError;
use crate::model::{
    AutomationTask, Device, DeviceCredential, DeviceDetail, Endpoint, EndpointFilter,
    ProfilingRule, Site, SiteCreateRequest, TaskResult, require_id,
};

/// Shared entry point for both surfaces.
#[derive(Debug, Clone)]
pub struct Gateway {
    client: CatalystClient,
}

impl Gateway {
    /// Build the HTTP client described by `config`.
    pub fn new(config: &GatewayConfig) -> Result<Self, CoreError> {
        let client =
            CatalystClient::from_token(config.base_url.as_str(), &config.token, &config.transport())?;
        debug!(base_url = %client.base_url(), "gateway ready");
        Ok(Self { client })
    }

    /// Wrap a pre-built client.
    pub fn from_client(client: CatalystClient) -> Self {
        Self { client }
    }

    // ── Sites ────────────────────────────────────────────────────────

    pub async fn sites(&self) -> Result<Vec<Site>, CoreError> {
        let sites = self.client.list_sites().await?;
        Ok(sites.into_iter().map(Site::from).collect())
    }

    /// Returns the upstream answer untouched.
    pub async fn create_site(&self, req: &SiteCreateRequest) -> Result<Value, CoreError> {
        req.validate()?;
        Ok(self.client.create_site(req.upstream_body()).await?)
    }

    // ── Devices ──────────────────────────────────────────────────────

    /// An empty `site_id` is treated as no filter.
    pub async fn devices(&self, site_id: Option<&str>) -> Result<Vec<Device>, CoreError> {
        let site_id = site_id.filter(|id| !id.is_empty());
        let devices = self.client.list_devices(site_id).await?;
        Ok(devices.into_iter().map(Device::from).collect())
    }

    pub async fn device_detail(&self, device_id: &str) -> Result<DeviceDetail, CoreError> {
        require_id("device_id", device_id)?;
        let detail = self.client.get_device(device_id).await?;
        Ok(detail.into())
    }

    pub async fn endpoints(&self, device_id: &str) -> Result<Vec<Endpoint>, CoreError> {
        require_id("device_id", device_id)?;
        let endpoints = self.client.list_device_endpoints(device_id).await?;
        Ok(endpoints.into_iter().map(Endpoint::from).collect())
    }

    pub async fn create_device_credentials(
        &self,
        credential: &DeviceCredential,
    ) -> Result<Value, CoreError> {
        credential.validate()?;
        Ok(self
            .client
            .create_device_credentials(&credential.upstream_body())
            .await?)
    }

    // ── Automation ───────────────────────────────────────────────────

    pub async fn run_task(&self, task: &AutomationTask) -> Result<TaskResult, CoreError> {
        task.validate()?;
        debug!(task_type = task.task_type(), "running automation task");
        let handle = self.client.run_task(&task.upstream_body()).await?;
        Ok(handle.into())
    }

    // ── Endpoint analytics ───────────────────────────────────────────

    pub async fn profiling_rule(&self, rule_id: &str) -> Result<Value, CoreError> {
        require_id("rule_id", rule_id)?;
        Ok(self.client.get_profiling_rule(rule_id).await?)
    }

    pub async fn create_profiling_rule(&self, rule: &ProfilingRule) -> Result<Value, CoreError> {
        rule.validate()?;
        Ok(self.client.create_profiling_rule(rule).await?)
    }

    pub async fn endpoint_count(&self, filter: &EndpointFilter) -> Result<Value, CoreError> {
        Ok(self.client.count_endpoints(&filter.query_pairs()).await?)
    }
}
