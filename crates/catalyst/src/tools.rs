//! MCP tool surface.
//!
//! Five tools, each a single gateway call rendered as a pretty-printed JSON
//! string. Upstream and validation failures come back as
//! `{"error": "..."}` text rather than protocol errors, so the assistant
//! always gets something it can read.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, ErrorData as McpError, Implementation, ServerCapabilities,
    ServerInfo,
};
use rmcp::transport::stdio;
use rmcp::{ServerHandler, ServiceExt, tool, tool_handler, tool_router};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info};

use catalyst_core::{AutomationTask, CoreError, Gateway};

use crate::error::CliError;

// ── Tool parameters ──────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct GetDevicesParams {
    /// Optional site ID to filter devices.
    #[serde(default)]
    pub site_id: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeviceIdParams {
    /// The ID of the device.
    pub device_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct RunTaskParams {
    /// Type of task, e.g. `provision_device` or `update_config`.
    pub task_type: String,
    /// Task parameters, e.g. `{"device_id": "abc", "config": "..."}`.
    pub params: Map<String, Value>,
}

// ── Rendering ────────────────────────────────────────────────────────

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

#[derive(Serialize)]
struct MessageBody<'a> {
    message: &'a str,
}

#[derive(Serialize)]
struct TaskReport<'a> {
    status: &'a str,
    task_id: Option<String>,
    progress: Option<String>,
}

fn render<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| render_error(&CoreError::Unexpected { message: e.to_string() }))
}

fn render_error(err: &CoreError) -> String {
    let message = err.to_string();
    serde_json::to_string_pretty(&ErrorBody { error: &message }).unwrap_or_default()
}

fn render_list<T: Serialize>(items: &[T], empty_message: &str) -> String {
    if items.is_empty() {
        return render(&MessageBody {
            message: empty_message,
        });
    }
    render(items)
}

// ── Server ───────────────────────────────────────────────────────────

/// MCP handler backed by a shared [`Gateway`].
#[derive(Clone)]
pub struct CatalystTools {
    gateway: Arc<Gateway>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl CatalystTools {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self {
            gateway,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Retrieve a list of sites from Catalyst Center. Returns a JSON array of sites with id, name, and description."
    )]
    async fn get_sites(&self) -> Result<CallToolResult, McpError> {
        Ok(text(self.sites_json().await))
    }

    #[tool(
        description = "Retrieve devices from Catalyst Center, optionally filtered by site. Returns hostname, family, role, and management IP."
    )]
    async fn get_devices(
        &self,
        Parameters(params): Parameters<GetDevicesParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(text(self.devices_json(params.site_id.as_deref()).await))
    }

    #[tool(
        description = "Retrieve endpoints (clients) for a specific device. Returns MAC, IP, and username."
    )]
    async fn get_endpoints(
        &self,
        Parameters(params): Parameters<DeviceIdParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(text(self.endpoints_json(&params.device_id).await))
    }

    #[tool(
        description = "Get detailed information for a specific device: hostname, family, software version, serial number, reachability status."
    )]
    async fn get_device_details(
        &self,
        Parameters(params): Parameters<DeviceIdParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(text(self.device_details_json(&params.device_id).await))
    }

    #[tool(
        description = "Run a network automation task (e.g. provision_device, update_config). Returns the task id and progress."
    )]
    async fn run_automation_task(
        &self,
        Parameters(params): Parameters<RunTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(text(
            self.automation_task_json(&params.task_type, params.params).await,
        ))
    }
}

fn text(body: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(body)])
}

// Tool bodies, kept apart from the protocol glue.
impl CatalystTools {
    pub async fn sites_json(&self) -> String {
        match self.gateway.sites().await {
            Ok(sites) => render_list(&sites, "No sites found."),
            Err(err) => render_error(&err),
        }
    }

    pub async fn devices_json(&self, site_id: Option<&str>) -> String {
        match self.gateway.devices(site_id).await {
            Ok(devices) => render_list(&devices, "No devices found."),
            Err(err) => render_error(&err),
        }
    }

    pub async fn endpoints_json(&self, device_id: &str) -> String {
        match self.gateway.endpoints(device_id).await {
            Ok(endpoints) => render_list(&endpoints, "No endpoints found for this device."),
            Err(err) => render_error(&err),
        }
    }

    pub async fn device_details_json(&self, device_id: &str) -> String {
        match self.gateway.device_detail(device_id).await {
            Ok(detail) => render(&detail),
            Err(err) => render_error(&err),
        }
    }

    pub async fn automation_task_json(
        &self,
        task_type: &str,
        params: Map<String, Value>,
    ) -> String {
        let task = match AutomationTask::from_parts(task_type, params) {
            Ok(task) => task,
            Err(err) => return render_error(&err),
        };
        match self.gateway.run_task(&task).await {
            Ok(result) => render(&TaskReport {
                status: "success",
                task_id: result.task_id,
                progress: result.status,
            }),
            Err(err) => render_error(&err),
        }
    }
}

#[tool_handler]
impl ServerHandler for CatalystTools {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "catalyst_center_mcp".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Implementation::default()
            },
            instructions: Some(
                "Read-mostly access to Cisco Catalyst Center. Start with get_sites, then \
                 get_devices (optionally by site_id); use a device id from that list for \
                 get_endpoints and get_device_details. run_automation_task submits a task \
                 and returns its id. Every tool returns JSON; failures come back as \
                 {\"error\": \"...\"}."
                    .into(),
            ),
            ..ServerInfo::default()
        }
    }
}

/// Serve the tool surface on stdin/stdout until the client disconnects.
pub async fn serve_stdio(gateway: Arc<Gateway>) -> Result<(), CliError> {
    info!("MCP tool surface starting on stdio");
    let service = CatalystTools::new(gateway)
        .serve(stdio())
        .await
        .map_err(|e| CliError::Mcp {
            message: e.to_string(),
        })?;

    let reason = service.waiting().await.map_err(|e| CliError::Mcp {
        message: e.to_string(),
    })?;
    debug!(?reason, "MCP session ended");
    Ok(())
}
