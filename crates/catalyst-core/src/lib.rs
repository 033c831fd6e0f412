//! Shared logic between `catalyst-api` and the two catalyst surfaces.
//!
//! - **[`Gateway`]** -- one async method per logical operation. Each method
//!   validates its input, makes exactly one upstream call through
//!   [`catalyst_api::CatalystClient`], and projects the answer into the
//!   schema layer. Nothing is cached between calls.
//!
//! - **Schema layer** ([`model`]) -- narrow projections of upstream records
//!   (`Site`, `Device`, `Endpoint`, `DeviceDetail`, `TaskResult`) and the
//!   validated inputs (`SiteCreateRequest`, `DeviceCredential`,
//!   `ProfilingRule`, `EndpointFilter`, `AutomationTask`).
//!
//! - **[`GatewayConfig`]** -- runtime connection settings, built once at
//!   startup by `catalyst-config` and handed in.

pub mod config;
pub mod convert;
pub mod error;
pub mod gateway;
pub mod model;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{DEFAULT_BASE_URL, GatewayConfig, TlsVerification};
pub use error::CoreError;
pub use gateway::Gateway;

pub use model::{
    AutomationTask, Device, DeviceCredential, DeviceDetail, Endpoint, EndpointFilter,
    ProfilingRule, Site, SiteCreateRequest, TaskResult,
};
